use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub category: String,
    #[serde(alias = "funding_agency")]
    pub agency: Option<String>,
    pub duration: Option<String>,
}
