use serde::Deserialize;

/// A group of research systems shown under one heading.
#[derive(Clone, Debug, Deserialize)]
pub struct SystemSection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub systems: Vec<SystemCard>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SystemCard {
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub features: Vec<String>,
    pub link: Option<String>,
}
