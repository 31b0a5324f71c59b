use crate::config::AlumniLayout;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Phone extension, written either as text or as a bare number.
#[derive(Deserialize)]
#[serde(untagged)]
enum ExtRepr {
    Text(String),
    Number(serde_json::Number),
}

fn extension<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<ExtRepr>::deserialize(deserializer)?.map(|repr| match repr {
        ExtRepr::Text(text) => text,
        ExtRepr::Number(number) => number.to_string(),
    }))
}

/// The document does not follow the data contract it is expected to.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ContractError(pub String);

#[derive(Clone, Debug, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub icon: String,
    pub text: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Professor {
    pub name: String,
    pub image: String,
    pub img_position: Option<String>,
    #[serde(default)]
    pub titles: Vec<Entry>,
    #[serde(default)]
    pub honors: Vec<Entry>,
    pub email: Option<String>,
    pub office: Option<String>,
    #[serde(default, deserialize_with = "extension")]
    pub ext: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub image: String,
    pub img_position: Option<String>,
    pub email: Option<String>,
    pub office: Option<String>,
    #[serde(default, deserialize_with = "extension")]
    pub ext: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Alumnus {
    pub name: String,
    pub image: Option<String>,
    pub img_position: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MasterStudents {
    pub second_year: Option<Vec<TeamMember>>,
    pub first_year: Option<Vec<TeamMember>>,
    pub zero_year: Option<Vec<TeamMember>>,
}

/// `team.json` as found on disk, before the alumni layout is settled.
#[derive(Debug, Deserialize)]
pub struct RawTeam {
    pub professor: Option<Professor>,
    pub postdocs: Option<Vec<TeamMember>>,
    pub assistants: Option<Vec<TeamMember>>,
    pub phd_students: Option<Vec<TeamMember>>,
    pub master_students: Option<MasterStudents>,
    pub alumni: Option<Value>,
}

#[derive(Clone, Debug)]
pub struct Team {
    pub professor: Option<Professor>,
    pub postdocs: Vec<TeamMember>,
    pub assistants: Vec<TeamMember>,
    pub phd_students: Vec<TeamMember>,
    pub master_students: MasterStudents,
    pub alumni: Alumni,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AlumniGroup {
    Year(u32),
    Doctoral,
    Master,
    All,
}

#[derive(Clone, Debug)]
pub enum Alumni {
    ByYear(BTreeMap<u32, Vec<Alumnus>>),
    ByDegree {
        phd: Vec<Alumnus>,
        master: Vec<Alumnus>,
    },
    Flat(Vec<Alumnus>),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ByDegree {
    #[serde(default)]
    phd: Vec<Alumnus>,
    #[serde(default)]
    master: Vec<Alumnus>,
}

impl Alumni {
    fn parse(value: Option<Value>, layout: AlumniLayout) -> Result<Self, ContractError> {
        let value = match value {
            None | Some(Value::Null) => return Ok(Self::Flat(Vec::new())),
            Some(value) => value,
        };
        let layout = match (layout, &value) {
            (AlumniLayout::Auto, Value::Array(_)) => AlumniLayout::Flat,
            (AlumniLayout::Auto, Value::Object(map))
                if map.keys().all(|k| k.parse::<u32>().is_ok()) =>
            {
                AlumniLayout::ByYear
            }
            (AlumniLayout::Auto, Value::Object(_)) => AlumniLayout::ByDegree,
            (AlumniLayout::Auto, _) => {
                return Err(ContractError(String::from(
                    "alumni must be an array or an object",
                )));
            }
            (layout, _) => layout,
        };
        let invalid = |e: serde_json::Error| ContractError(format!("invalid alumni ({layout:?}): {e}"));
        Ok(match layout {
            AlumniLayout::ByYear => Self::ByYear(serde_json::from_value(value).map_err(invalid)?),
            AlumniLayout::ByDegree => {
                let ByDegree { phd, master } = serde_json::from_value(value).map_err(invalid)?;
                Self::ByDegree { phd, master }
            }
            AlumniLayout::Flat | AlumniLayout::Auto => {
                Self::Flat(serde_json::from_value(value).map_err(invalid)?)
            }
        })
    }

    /// Non-empty groups in display order: most recent class first, or
    /// doctoral before master's.
    pub fn groups(&self) -> Vec<(AlumniGroup, &[Alumnus])> {
        let groups: Vec<(AlumniGroup, &[Alumnus])> = match self {
            Self::ByYear(years) => years
                .iter()
                .rev()
                .map(|(&year, members)| (AlumniGroup::Year(year), members.as_slice()))
                .collect(),
            Self::ByDegree { phd, master } => vec![
                (AlumniGroup::Doctoral, phd.as_slice()),
                (AlumniGroup::Master, master.as_slice()),
            ],
            Self::Flat(members) => vec![(AlumniGroup::All, members.as_slice())],
        };
        groups
            .into_iter()
            .filter(|(_, members)| !members.is_empty())
            .collect()
    }
}

impl Team {
    pub fn from_raw(raw: RawTeam, layout: AlumniLayout) -> Result<Self, ContractError> {
        Ok(Self {
            professor: raw.professor,
            postdocs: raw.postdocs.unwrap_or_default(),
            assistants: raw.assistants.unwrap_or_default(),
            phd_students: raw.phd_students.unwrap_or_default(),
            master_students: raw.master_students.unwrap_or_default(),
            alumni: Alumni::parse(raw.alumni, layout)?,
        })
    }
}
