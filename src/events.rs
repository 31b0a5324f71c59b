//! Mapping from user interface events to page commands.

pub const FILTER_YEAR: &str = "filter-year";
pub const FILTER_CATEGORY: &str = "filter-category";
pub const SEARCH_INPUT: &str = "search-input";
pub const SYSTEM_SEARCH_INPUT: &str = "system-search-input";
pub const CLEAR_FILTERS: &str = "clear-filters-btn";
pub const EXPORT_CSV: &str = "export-csv-btn";
pub const SHOW_CURRENT: &str = "team-filter-current";
pub const SHOW_ALUMNI: &str = "team-filter-alumni";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EventKind {
    Change,
    Input,
    Click,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UiEvent {
    pub control: String,
    pub kind: EventKind,
    pub value: String,
}

impl UiEvent {
    pub fn change(control: &str, value: &str) -> Self {
        Self {
            control: control.to_owned(),
            kind: EventKind::Change,
            value: value.to_owned(),
        }
    }

    /// One keystroke in a text field; `value` is the whole field content.
    pub fn input(control: &str, value: &str) -> Self {
        Self {
            control: control.to_owned(),
            kind: EventKind::Input,
            value: value.to_owned(),
        }
    }

    pub fn click(control: &str) -> Self {
        Self {
            control: control.to_owned(),
            kind: EventKind::Click,
            value: String::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    SetYear,
    SetCategory,
    SetSearch,
    ClearFilters,
    ExportCsv,
    ShowCurrent,
    ShowAlumni,
}

pub struct EventTable(&'static [(&'static str, EventKind, Command)]);

impl EventTable {
    pub fn command_for(&self, event: &UiEvent) -> Option<Command> {
        self.0
            .iter()
            .find(|&&(control, kind, _)| control == event.control && kind == event.kind)
            .map(|&(_, _, command)| command)
    }
}

pub static PUBLICATIONS: EventTable = EventTable(&[
    (FILTER_YEAR, EventKind::Change, Command::SetYear),
    (FILTER_CATEGORY, EventKind::Change, Command::SetCategory),
    (SEARCH_INPUT, EventKind::Input, Command::SetSearch),
    (CLEAR_FILTERS, EventKind::Click, Command::ClearFilters),
    (EXPORT_CSV, EventKind::Click, Command::ExportCsv),
]);

pub static LISTINGS: EventTable = EventTable(&[
    (FILTER_YEAR, EventKind::Change, Command::SetYear),
    (FILTER_CATEGORY, EventKind::Change, Command::SetCategory),
    (SEARCH_INPUT, EventKind::Input, Command::SetSearch),
    (CLEAR_FILTERS, EventKind::Click, Command::ClearFilters),
]);

pub static SYSTEMS: EventTable = EventTable(&[(
    SYSTEM_SEARCH_INPUT,
    EventKind::Input,
    Command::SetSearch,
)]);

pub static TEAM: EventTable = EventTable(&[
    (SHOW_CURRENT, EventKind::Click, Command::ShowCurrent),
    (SHOW_ALUMNI, EventKind::Click, Command::ShowAlumni),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(
            PUBLICATIONS.command_for(&UiEvent::change(FILTER_YEAR, "2023")),
            Some(Command::SetYear)
        );
        assert_eq!(
            PUBLICATIONS.command_for(&UiEvent::click(EXPORT_CSV)),
            Some(Command::ExportCsv)
        );
        assert_eq!(
            TEAM.command_for(&UiEvent::click(SHOW_ALUMNI)),
            Some(Command::ShowAlumni)
        );
    }

    #[test]
    fn test_kind_must_match() {
        assert_eq!(PUBLICATIONS.command_for(&UiEvent::click(FILTER_YEAR)), None);
        assert_eq!(LISTINGS.command_for(&UiEvent::click(EXPORT_CSV)), None);
        assert_eq!(SYSTEMS.command_for(&UiEvent::input(SEARCH_INPUT, "x")), None);
    }
}
