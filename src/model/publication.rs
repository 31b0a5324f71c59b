use serde::Deserialize;
use std::fmt;

/// Publication year, accepted either as a JSON number or as a numeric string.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize)]
#[serde(try_from = "YearRepr")]
pub struct Year(pub i32);

#[derive(Deserialize)]
#[serde(untagged)]
enum YearRepr {
    Number(i32),
    Text(String),
}

impl TryFrom<YearRepr> for Year {
    type Error = String;

    fn try_from(repr: YearRepr) -> Result<Self, Self::Error> {
        match repr {
            YearRepr::Number(n) => Ok(Self(n)),
            YearRepr::Text(s) => s
                .trim()
                .parse()
                .map(Self)
                .map_err(|_| format!("year {s:?} is not numeric")),
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Publication {
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub authors: String,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub source: String,
    pub year: Option<Year>,
    #[serde(deserialize_with = "crate::model::null_as_default")]
    pub category: String,
    pub link: Option<String>,
}
