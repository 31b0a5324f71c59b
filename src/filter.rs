use crate::model::{ActivityItem, NewsItem, Project, Publication, SystemCard, Year};
use std::cmp::Reverse;
use tracing::debug;

/// Control value meaning "no constraint on this dimension".
pub const ALL: &str = "all";

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn from_control(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value.to_owned())
        }
    }

    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => value == Some(wanted.as_str()),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Filters {
    pub year: Selection,
    pub category: Selection,
    pub search: String,
}

impl Filters {
    /// An item is kept only if every active dimension accepts it.
    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        self.year.matches(item.year().as_deref())
            && self.category.matches(item.category())
            && self.matches_text(item)
    }

    fn matches_text<T: Filterable>(&self, item: &T) -> bool {
        let term = self.search.trim().to_lowercase();
        term.is_empty() || item.search_text().to_lowercase().contains(&term)
    }
}

/// What the filter controls can look at on one record.
pub trait Filterable {
    fn year(&self) -> Option<String> {
        None
    }

    fn category(&self) -> Option<&str> {
        None
    }

    /// Visible text of the rendered unit, for free-text search.
    fn search_text(&self) -> String;
}

/// Owns the unfiltered collection of one page and the subset currently
/// shown. The subset is the single source of truth for what is visible.
pub struct FilterController<T> {
    all: Vec<T>,
    filters: Filters,
    visible: Vec<usize>,
}

impl<T: Filterable> FilterController<T> {
    pub fn new(all: Vec<T>) -> Self {
        let visible = (0..all.len()).collect();
        Self {
            all,
            filters: Filters::default(),
            visible,
        }
    }

    pub fn all(&self) -> &[T] {
        &self.all
    }

    pub fn apply(&mut self, filters: Filters) {
        if filters == self.filters {
            return;
        }
        self.visible = self
            .all
            .iter()
            .enumerate()
            .filter_map(|(i, item)| filters.matches(item).then_some(i))
            .collect();
        debug!(
            ?filters,
            visible = self.visible.len(),
            total = self.all.len(),
            "filters applied"
        );
        self.filters = filters;
    }

    pub fn clear(&mut self) {
        self.apply(Filters::default());
    }

    /// Items passing the current filters, in collection order.
    pub fn visible(&self) -> Vec<&T> {
        self.visible.iter().map(|&i| &self.all[i]).collect()
    }

    /// Distinct years, most recent first.
    pub fn year_options(&self) -> Vec<String> {
        let mut years = self.distinct(|item| item.year());
        years.sort_by_key(|y| Reverse((y.parse::<i64>().ok(), y.clone())));
        years
    }

    /// Distinct categories in order of first appearance.
    pub fn category_options(&self) -> Vec<String> {
        self.distinct(|item| item.category().map(str::to_owned))
    }

    fn distinct(&self, key: impl Fn(&T) -> Option<String>) -> Vec<String> {
        let mut seen = Vec::new();
        for value in self.all.iter().filter_map(key) {
            if !value.is_empty() && !seen.contains(&value) {
                seen.push(value);
            }
        }
        seen
    }
}

impl Filterable for Publication {
    fn year(&self) -> Option<String> {
        self.year.map(|Year(year)| year.to_string())
    }

    fn category(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn search_text(&self) -> String {
        [&self.title, &self.authors, &self.source].map(String::as_str).join(" ")
    }
}

impl Filterable for Project {
    fn category(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn search_text(&self) -> String {
        let mut text = self.title.clone();
        for extra in [&self.agency, &self.duration].into_iter().flatten() {
            text.push(' ');
            text.push_str(extra);
        }
        text
    }
}

impl Filterable for NewsItem {
    fn year(&self) -> Option<String> {
        self.date_year().map(str::to_owned)
    }

    fn category(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.title, self.summary.as_deref().unwrap_or_default())
    }
}

impl Filterable for ActivityItem {
    fn year(&self) -> Option<String> {
        self.date_year().map(str::to_owned)
    }

    fn category(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn search_text(&self) -> String {
        format!(
            "{} {}",
            self.title,
            self.description.as_deref().unwrap_or_default()
        )
    }
}

impl Filterable for SystemCard {
    fn search_text(&self) -> String {
        let mut text = format!("{} {}", self.title, self.description);
        for feature in &self.features {
            text.push(' ');
            text.push_str(feature);
        }
        text
    }
}
