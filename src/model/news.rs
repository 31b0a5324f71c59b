use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewsItem {
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub title: String,
    pub summary: Option<String>,
    pub link: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ActivityItem {
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl NewsItem {
    /// Leading four digits of the date, if any.
    pub fn date_year(&self) -> Option<&str> {
        year_of(&self.date)
    }
}

impl ActivityItem {
    pub fn date_year(&self) -> Option<&str> {
        year_of(&self.date)
    }
}

fn year_of(date: &str) -> Option<&str> {
    let year = date.get(..4)?;
    year.bytes().all(|b| b.is_ascii_digit()).then_some(year)
}
