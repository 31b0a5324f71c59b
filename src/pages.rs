//! One controller per page of the site. Each owns its rendering surface
//! and, where the page filters, the collection it was loaded with.

use crate::events::{
    self, CLEAR_FILTERS, Command, EXPORT_CSV, EventTable, FILTER_CATEGORY, FILTER_YEAR,
    SEARCH_INPUT, SHOW_ALUMNI, SHOW_CURRENT, SYSTEM_SEARCH_INPUT, UiEvent,
};
use crate::export::{self, Download};
use crate::filter::{ALL, FilterController, Filterable, Filters, Selection};
use crate::loaders::LoadError;
use crate::model::{
    ActivityItem, NewsItem, Project, Publication, SystemCard, SystemSection, Team, TeamMember,
};
use crate::page::Page;
use crate::render::{NO_DATA, listings, publications, systems, team};
use eyre::Error;
use tracing::{error, trace};

pub trait PageController {
    fn page(&self) -> &Page;

    fn events(&self) -> &'static EventTable;

    fn run(&mut self, command: Command, event: &UiEvent) -> Result<Option<Download>, Error>;

    /// Dispatch a user interface event through the page's event table.
    fn handle(&mut self, event: &UiEvent) -> Result<Option<Download>, Error> {
        match self.events().command_for(event) {
            Some(command) => self.run(command, event),
            None => {
                trace!(
                    page = self.page().name(),
                    control = %event.control,
                    kind = ?event.kind,
                    "no handler for event"
                );
                Ok(None)
            }
        }
    }
}

fn fail(page: &mut Page, err: &LoadError, message: &str) {
    error!(page = page.name(), %err, "cannot load page data");
    page.replace_main(format!(
        r#"<p class="text-center text-red-500 col-span-full">{message}</p>"#
    ));
}

fn read_filters(page: &Page) -> Filters {
    Filters {
        year: Selection::from_control(page.value(FILTER_YEAR).unwrap_or(ALL)),
        category: Selection::from_control(page.value(FILTER_CATEGORY).unwrap_or(ALL)),
        search: page.value(SEARCH_INPUT).unwrap_or_default().to_owned(),
    }
}

fn reset_controls(page: &mut Page) {
    page.set_value(FILTER_YEAR, ALL);
    page.set_value(FILTER_CATEGORY, ALL);
    page.set_value(SEARCH_INPUT, "");
}

/// Store the new control value carried by a filter event.
fn set_control(page: &mut Page, command: Command, value: &str) {
    let control = match command {
        Command::SetYear => FILTER_YEAR,
        Command::SetCategory => FILTER_CATEGORY,
        Command::SetSearch => SEARCH_INPUT,
        _ => return,
    };
    page.set_value(control, value);
}

fn populate<T: Filterable>(page: &mut Page, controller: &FilterController<T>) {
    page.set_options(FILTER_YEAR, controller.year_options());
    page.set_options(FILTER_CATEGORY, controller.category_options());
}

const PUBLICATIONS_TBODY: &str = "publications-tbody";
const NO_PUBLICATIONS: &str = "no-publications-found";
const PUBLICATIONS_FAILURE: &str = "無法載入研究成果資料，請稍後再試。";

pub struct PublicationsPage {
    page: Page,
    controller: Option<FilterController<Publication>>,
    filename: &'static str,
}

impl PublicationsPage {
    pub fn new(collection: Result<Vec<Publication>, LoadError>, filename: &'static str) -> Self {
        let mut page = Page::new("publications")
            .with_select(FILTER_YEAR)
            .with_select(FILTER_CATEGORY)
            .with_text_input(SEARCH_INPUT)
            .with_button(CLEAR_FILTERS, false)
            .with_button(EXPORT_CSV, false)
            .with_container(PUBLICATIONS_TBODY, None)
            .with_container(NO_PUBLICATIONS, None);
        page.replace(
            NO_PUBLICATIONS,
            String::from(r#"<p class="p-4 text-center text-slate-500">找不到符合條件的研究成果。</p>"#),
        );
        let controller = match collection {
            Ok(items) => {
                let controller = FilterController::new(items);
                populate(&mut page, &controller);
                Some(controller)
            }
            Err(err) => {
                fail(&mut page, &err, PUBLICATIONS_FAILURE);
                None
            }
        };
        let mut this = Self {
            page,
            controller,
            filename,
        };
        this.render();
        this
    }

    fn render(&mut self) {
        let Some(controller) = &self.controller else {
            return;
        };
        let visible = controller.visible();
        self.page.set_hidden(NO_PUBLICATIONS, !visible.is_empty());
        self.page.replace(PUBLICATIONS_TBODY, publications::rows(visible));
    }

    fn apply_filters(&mut self) {
        let filters = read_filters(&self.page);
        if let Some(controller) = &mut self.controller {
            controller.apply(filters);
        }
        self.render();
    }
}

impl PageController for PublicationsPage {
    fn page(&self) -> &Page {
        &self.page
    }

    fn events(&self) -> &'static EventTable {
        &events::PUBLICATIONS
    }

    fn run(&mut self, command: Command, event: &UiEvent) -> Result<Option<Download>, Error> {
        match command {
            Command::SetYear | Command::SetCategory | Command::SetSearch => {
                set_control(&mut self.page, command, &event.value);
                self.apply_filters();
            }
            Command::ClearFilters => {
                reset_controls(&mut self.page);
                if let Some(controller) = &mut self.controller {
                    controller.clear();
                }
                self.render();
            }
            Command::ExportCsv => {
                if let Some(controller) = &self.controller {
                    let download = export::publications(controller.visible(), self.filename)?;
                    return Ok(Some(download));
                }
            }
            Command::ShowCurrent | Command::ShowAlumni => (),
        }
        Ok(None)
    }
}

/// Static description of a flat listing page.
pub struct Listing<T> {
    pub name: &'static str,
    pub list: &'static str,
    pub failure: &'static str,
    pub has_year: bool,
    pub card: fn(&T) -> String,
}

pub const PROJECTS: Listing<Project> = Listing {
    name: "projects",
    list: "projects-list",
    failure: "無法載入研究計畫資料，請稍後再試。",
    has_year: false,
    card: listings::project,
};

pub const NEWS: Listing<NewsItem> = Listing {
    name: "news",
    list: "news-list",
    failure: "無法載入最新消息，請稍後再試。",
    has_year: true,
    card: listings::news,
};

pub const ACTIVITIES: Listing<ActivityItem> = Listing {
    name: "activities",
    list: "activities-list",
    failure: "無法載入活動資料，請稍後再試。",
    has_year: true,
    card: listings::activity,
};

pub struct ListingPage<T> {
    listing: Listing<T>,
    page: Page,
    controller: Option<FilterController<T>>,
}

impl<T: Filterable> ListingPage<T> {
    pub fn new(listing: Listing<T>, collection: Result<Vec<T>, LoadError>) -> Self {
        let mut page = Page::new(listing.name);
        if listing.has_year {
            page = page.with_select(FILTER_YEAR);
        }
        let mut page = page
            .with_select(FILTER_CATEGORY)
            .with_text_input(SEARCH_INPUT)
            .with_button(CLEAR_FILTERS, false)
            .with_container(listing.list, None);
        let controller = match collection {
            Ok(items) => {
                let controller = FilterController::new(items);
                populate(&mut page, &controller);
                Some(controller)
            }
            Err(err) => {
                fail(&mut page, &err, listing.failure);
                None
            }
        };
        let mut this = Self {
            listing,
            page,
            controller,
        };
        this.render();
        this
    }

    fn render(&mut self) {
        if let Some(controller) = &self.controller {
            self.page.replace(
                self.listing.list,
                listings::listing(controller.visible(), self.listing.card),
            );
        }
    }
}

impl<T: Filterable> PageController for ListingPage<T> {
    fn page(&self) -> &Page {
        &self.page
    }

    fn events(&self) -> &'static EventTable {
        &events::LISTINGS
    }

    fn run(&mut self, command: Command, event: &UiEvent) -> Result<Option<Download>, Error> {
        match command {
            Command::SetYear | Command::SetCategory | Command::SetSearch => {
                set_control(&mut self.page, command, &event.value);
                let filters = read_filters(&self.page);
                if let Some(controller) = &mut self.controller {
                    controller.apply(filters);
                }
            }
            Command::ClearFilters => {
                reset_controls(&mut self.page);
                if let Some(controller) = &mut self.controller {
                    controller.clear();
                }
            }
            Command::ExportCsv | Command::ShowCurrent | Command::ShowAlumni => return Ok(None),
        }
        self.render();
        Ok(None)
    }
}

const SYSTEM_SECTIONS: &str = "system-sections";
const NO_SYSTEMS: &str = "no-systems-found";
const SYSTEMS_FAILURE: &str = "無法載入研究系統資料，請稍後再試。";

pub struct SystemsPage {
    page: Page,
    sections: Option<Vec<(SystemSection, FilterController<SystemCard>)>>,
}

impl SystemsPage {
    pub fn new(collection: Result<Vec<SystemSection>, LoadError>) -> Self {
        let mut page = Page::new("systems")
            .with_text_input(SYSTEM_SEARCH_INPUT)
            .with_container(SYSTEM_SECTIONS, None)
            .with_container(NO_SYSTEMS, None);
        page.replace(
            NO_SYSTEMS,
            String::from(r#"<p class="text-center text-slate-500">找不到符合的系統。</p>"#),
        );
        let sections = match collection {
            Ok(sections) => Some(
                sections
                    .into_iter()
                    .map(|mut section| {
                        let cards = std::mem::take(&mut section.systems);
                        (section, FilterController::new(cards))
                    })
                    .collect(),
            ),
            Err(err) => {
                fail(&mut page, &err, SYSTEMS_FAILURE);
                None
            }
        };
        let mut this = Self { page, sections };
        this.render();
        this
    }

    fn render(&mut self) {
        let Some(sections) = &self.sections else {
            return;
        };
        if sections.iter().all(|(_, cards)| cards.all().is_empty()) {
            self.page.replace(SYSTEM_SECTIONS, String::from(NO_DATA));
            self.page.set_hidden(NO_SYSTEMS, true);
            return;
        }
        let visible = sections
            .iter()
            .map(|(section, cards)| (section, cards.visible()))
            .collect::<Vec<_>>();
        let count: usize = visible.iter().map(|(_, cards)| cards.len()).sum();
        self.page.set_hidden(NO_SYSTEMS, count > 0);
        self.page.replace(SYSTEM_SECTIONS, systems::sections(visible));
    }
}

impl PageController for SystemsPage {
    fn page(&self) -> &Page {
        &self.page
    }

    fn events(&self) -> &'static EventTable {
        &events::SYSTEMS
    }

    fn run(&mut self, command: Command, event: &UiEvent) -> Result<Option<Download>, Error> {
        if command != Command::SetSearch {
            return Ok(None);
        }
        self.page.set_value(SYSTEM_SEARCH_INPUT, &event.value);
        let filters = Filters {
            search: self
                .page
                .value(SYSTEM_SEARCH_INPUT)
                .unwrap_or_default()
                .to_owned(),
            ..Filters::default()
        };
        if let Some(sections) = &mut self.sections {
            for (_, cards) in sections {
                cards.apply(filters.clone());
            }
        }
        self.render();
        Ok(None)
    }
}

const PROFESSOR_SECTION: &str = "professor-section";
const CURRENT_MEMBERS: &str = "current-members-container";
const ALUMNI: &str = "alumni-container";
const ALUMNI_GROUPS: &str = "alumni-groups-container";
const TEAM_FAILURE: &str =
    "無法載入團隊資料。請檢查檔案路徑是否正確，或嘗試在網頁伺服器上運行。";

/// Role sections of current members: section id, grid id, heading.
const ROLES: [(&str, &str, &str); 6] = [
    ("postdocs-section", "postdocs-grid", "博士後研究員"),
    ("assistants-section", "assistants-grid", "研究助理"),
    ("phd-students-section", "phd-students-grid", "博士班學生"),
    ("master-second-year-section", "master-second-year-grid", "碩士班二年級"),
    ("master-first-year-section", "master-first-year-grid", "碩士班一年級"),
    ("master-zero-year-section", "master-zero-year-grid", "碩士班預研生"),
];

pub struct TeamPage {
    page: Page,
    has_alumni: bool,
}

impl TeamPage {
    pub fn new(collection: Result<Team, LoadError>) -> Self {
        let mut page = Page::new("team")
            .with_button(SHOW_CURRENT, true)
            .with_button(SHOW_ALUMNI, false)
            .with_container(PROFESSOR_SECTION, None)
            .with_container(CURRENT_MEMBERS, None);
        for (section, grid, _) in ROLES {
            page = page
                .with_container(section, Some(CURRENT_MEMBERS))
                .with_container(grid, Some(section));
        }
        let mut page = page
            .with_container(ALUMNI, None)
            .with_container(ALUMNI_GROUPS, Some(ALUMNI));
        page.set_hidden(ALUMNI, true);
        let mut this = Self {
            page,
            has_alumni: false,
        };
        match collection {
            Ok(roster) => this.render(&roster),
            Err(err) => fail(&mut this.page, &err, TEAM_FAILURE),
        }
        this
    }

    fn render(&mut self, roster: &Team) {
        match &roster.professor {
            Some(professor) => self
                .page
                .replace(PROFESSOR_SECTION, team::professor(professor)),
            None => self.page.set_hidden(PROFESSOR_SECTION, true),
        }
        let master = &roster.master_students;
        let roles: [&[TeamMember]; 6] = [
            &roster.postdocs,
            &roster.assistants,
            &roster.phd_students,
            master.second_year.as_deref().unwrap_or_default(),
            master.first_year.as_deref().unwrap_or_default(),
            master.zero_year.as_deref().unwrap_or_default(),
        ];
        for ((section, grid, heading), members) in ROLES.into_iter().zip(roles) {
            match team::members(members) {
                Some(cards) => {
                    self.page.replace(
                        section,
                        format!(r#"<h3 class="text-2xl font-bold border-l-4 border-blue-500 pl-4 mb-6">{heading}</h3>"#),
                    );
                    self.page.replace(grid, cards);
                }
                None => self.page.set_hidden(section, true),
            }
        }
        match team::alumni(&roster.alumni) {
            Some(groups) => {
                self.has_alumni = true;
                self.page.replace(ALUMNI_GROUPS, groups);
            }
            None => self.has_alumni = false,
        }
    }

    fn show(&mut self, alumni: bool) {
        self.page.set_active(SHOW_CURRENT, !alumni);
        self.page.set_active(SHOW_ALUMNI, alumni);
        self.page.set_hidden(CURRENT_MEMBERS, alumni);
        self.page.set_hidden(ALUMNI, !(alumni && self.has_alumni));
    }
}

impl PageController for TeamPage {
    fn page(&self) -> &Page {
        &self.page
    }

    fn events(&self) -> &'static EventTable {
        &events::TEAM
    }

    fn run(&mut self, command: Command, _event: &UiEvent) -> Result<Option<Download>, Error> {
        match command {
            Command::ShowCurrent => self.show(false),
            Command::ShowAlumni => self.show(true),
            _ => (),
        }
        Ok(None)
    }
}
