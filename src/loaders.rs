use crate::config::AlumniLayout;
use crate::model::{ActivityItem, NewsItem, Project, Publication, RawTeam, SystemSection, Team};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

pub const TEAM: &str = "team.json";
pub const PUBLICATIONS: &str = "publications.json";
pub const PROJECTS: &str = "projects.json";
pub const NEWS: &str = "news.json";
pub const ACTIVITIES: &str = "activities.json";
pub const SYSTEMS: &str = "systems.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot fetch {resource}: {reason}")]
    Fetch { resource: String, reason: String },
    #[error("cannot parse {resource}: {reason}")]
    Parse { resource: String, reason: String },
}

enum Source {
    Directory(PathBuf),
    Http { client: reqwest::Client, base: String },
}

/// Retrieves JSON collections, one request per resource, with no retry
/// and no caching.
pub struct Loader {
    source: Source,
}

impl Loader {
    pub fn new(base: &str) -> Self {
        let source = if base.starts_with("http://") || base.starts_with("https://") {
            Source::Http {
                client: reqwest::Client::new(),
                base: base.trim_end_matches('/').to_owned(),
            }
        } else {
            Source::Directory(PathBuf::from(base))
        };
        Self { source }
    }

    async fn fetch_text(&self, resource: &str) -> Result<String, LoadError> {
        let fetch_error = |reason: String| LoadError::Fetch {
            resource: resource.to_owned(),
            reason,
        };
        match &self.source {
            Source::Directory(dir) => {
                let path = dir.join(resource);
                debug!(path = %path.display(), "reading collection");
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| fetch_error(e.to_string()))
            }
            Source::Http { client, base } => {
                let url = format!("{base}/{resource}");
                debug!(%url, "fetching collection");
                let response = client
                    .get(&url)
                    .send()
                    .await
                    .map_err(|e| fetch_error(e.to_string()))?;
                if !response.status().is_success() {
                    return Err(fetch_error(format!("HTTP error! status: {}", response.status())));
                }
                response.text().await.map_err(|e| fetch_error(e.to_string()))
            }
        }
    }

    pub async fn fetch<T: DeserializeOwned>(&self, resource: &str) -> Result<T, LoadError> {
        let text = self.fetch_text(resource).await?;
        parse(resource, &text)
    }

    pub async fn load_team(&self, layout: AlumniLayout) -> Result<Team, LoadError> {
        let raw: RawTeam = self.fetch(TEAM).await?;
        let team = Team::from_raw(raw, layout).map_err(|e| LoadError::Parse {
            resource: TEAM.to_owned(),
            reason: e.to_string(),
        })?;
        info!(
            postdocs = team.postdocs.len(),
            phd_students = team.phd_students.len(),
            "team loaded"
        );
        Ok(team)
    }

    pub async fn load_publications(&self) -> Result<Vec<Publication>, LoadError> {
        self.load_collection(PUBLICATIONS).await
    }

    pub async fn load_projects(&self) -> Result<Vec<Project>, LoadError> {
        self.load_collection(PROJECTS).await
    }

    pub async fn load_news(&self) -> Result<Vec<NewsItem>, LoadError> {
        self.load_collection(NEWS).await
    }

    pub async fn load_activities(&self) -> Result<Vec<ActivityItem>, LoadError> {
        self.load_collection(ACTIVITIES).await
    }

    pub async fn load_systems(&self) -> Result<Vec<SystemSection>, LoadError> {
        self.load_collection(SYSTEMS).await
    }

    async fn load_collection<T: DeserializeOwned>(
        &self,
        resource: &str,
    ) -> Result<Vec<T>, LoadError> {
        let items: Vec<T> = self.fetch(resource).await?;
        info!(resource, count = items.len(), "collection loaded");
        Ok(items)
    }
}

pub fn parse<T: DeserializeOwned>(resource: &str, text: &str) -> Result<T, LoadError> {
    serde_json::from_str(text).map_err(|e| LoadError::Parse {
        resource: resource.to_owned(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn data_dir(files: &[(&str, &str)]) -> (TempDir, Loader) {
        let dir = tempfile::tempdir().unwrap();
        for (name, contents) in files {
            std::fs::write(dir.path().join(name), contents).unwrap();
        }
        let loader = Loader::new(dir.path().to_str().unwrap());
        (dir, loader)
    }

    /// Serve one canned response per accepted connection, then stop.
    async fn serve(responses: Vec<(&'static str, &'static str)>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().await.unwrap();
                let mut request = vec![0; 4096];
                let _ = stream.read(&mut request).await.unwrap();
                let response = format!(
                    "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(response.as_bytes()).await.unwrap();
                stream.shutdown().await.unwrap();
            }
        });
        format!("http://{addr}/data/")
    }

    #[tokio::test]
    async fn test_load_publications() {
        let (_dir, loader) = data_dir(&[(
            PUBLICATIONS,
            r#"[{"title": "A", "year": 2023, "category": "論文"}]"#,
        )]);
        let items = loader.load_publications().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "A");
    }

    #[tokio::test]
    async fn test_missing_file_is_fetch_error() {
        let (_dir, loader) = data_dir(&[]);
        let err = loader.load_news().await.unwrap_err();
        assert!(matches!(err, LoadError::Fetch { .. }));
    }

    #[tokio::test]
    async fn test_malformed_is_parse_error() {
        let (_dir, loader) = data_dir(&[(PROJECTS, "[{")]);
        let err = loader.load_projects().await.unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_team_contract_mismatch_is_parse_error() {
        let (_dir, loader) = data_dir(&[(TEAM, r#"{"alumni": {"2020": []}}"#)]);
        let err = loader.load_team(AlumniLayout::ByDegree).await.unwrap_err();
        assert!(matches!(err, LoadError::Parse { ref resource, .. } if resource == TEAM));
        assert!(loader.load_team(AlumniLayout::ByYear).await.is_ok());
    }

    #[tokio::test]
    async fn test_http_status_and_body() {
        let base = serve(vec![
            ("404 Not Found", "{}"),
            ("200 OK", "[{"),
            ("200 OK", r#"[{"title": "Remote", "category": "國科會"}]"#),
        ])
        .await;
        let loader = Loader::new(&base);
        let err = loader.load_publications().await.unwrap_err();
        assert!(
            matches!(err, LoadError::Fetch { ref reason, .. } if reason.contains("HTTP error! status: 404")),
            "{err}"
        );
        let err = loader.load_news().await.unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }), "{err}");
        let projects = loader.load_projects().await.unwrap();
        assert_eq!(projects[0].title, "Remote");
    }

    #[test]
    fn test_parse_shape() {
        assert!(parse::<Vec<Project>>("x", r#"{"title": "not a list"}"#).is_err());
    }
}
