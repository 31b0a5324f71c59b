use serde::{Deserialize, Deserializer};

pub use self::news::{ActivityItem, NewsItem};
pub use self::project::Project;
pub use self::publication::{Publication, Year};
pub use self::system::{SystemCard, SystemSection};
pub use self::team::{
    Alumni, AlumniGroup, Alumnus, Entry, Professor, RawTeam, Team, TeamMember,
};

mod news;
mod project;
mod publication;
mod system;
mod team;

/// Read an explicit `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
