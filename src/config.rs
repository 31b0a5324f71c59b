use eyre::{Error, WrapErr};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "labsite.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub site: Site,
    pub team: Team,
    pub export: Export,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Site {
    /// Directory or `http(s)://` base URL holding the JSON collections.
    pub data: String,
    pub output: PathBuf,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            data: String::from("data"),
            output: PathBuf::from("public"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Team {
    pub alumni_layout: AlumniLayout,
}

/// Shape expected for the `alumni` entry of `team.json`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum AlumniLayout {
    #[default]
    Auto,
    ByYear,
    ByDegree,
    Flat,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Export {
    pub legacy_filename: bool,
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Self, Error> {
        let contents = match std::fs::read_to_string(file_name) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(file = %file_name.display(), "no configuration file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).wrap_err_with(|| {
                    format!("cannot read configuration file {}", file_name.display())
                });
            }
        };
        toml::from_str(&contents).wrap_err("cannot parse configuration file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.site.data, "data");
        assert_eq!(config.site.output, PathBuf::from("public"));
        assert_eq!(config.team.alumni_layout, AlumniLayout::Auto);
        assert!(!config.export.legacy_filename);
    }

    #[test]
    fn test_full() {
        let config: Config = toml::from_str(
            r#"
            [site]
            data = "https://lab.example.org/data"
            output = "dist"
            [team]
            alumni_layout = "by-degree"
            [export]
            legacy_filename = true
            "#,
        )
        .unwrap();
        assert_eq!(config.site.data, "https://lab.example.org/data");
        assert_eq!(config.site.output, PathBuf::from("dist"));
        assert_eq!(config.team.alumni_layout, AlumniLayout::ByDegree);
        assert!(config.export.legacy_filename);
    }

    #[test]
    fn test_unknown_key() {
        assert!(toml::from_str::<Config>("[site]\ndatum = 3\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let config = Config::load(Path::new("/nonexistent/labsite.toml")).unwrap();
        assert_eq!(config.site.data, "data");
    }
}
