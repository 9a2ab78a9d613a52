//! Where token graphs come from
//!
//! The resolver does not care how a graph arrived. Sources load it from an
//! embedded string, a file, or (with the `fetch` feature) an HTTP endpoint.
//! Failures are returned to the caller; nothing here retries.

use crate::error::LoadError;
use crate::graph::{Format, TokenGraph};
use std::path::{Path, PathBuf};

/// Anything that can produce a token graph
pub trait TokenSource {
    fn load(&self) -> Result<TokenGraph, LoadError>;
}

/// A token document compiled into the binary
#[derive(Clone, Copy, Debug)]
pub struct StaticSource {
    src: &'static str,
    format: Format,
}

impl StaticSource {
    pub const fn json(src: &'static str) -> Self {
        Self {
            src,
            format: Format::Json,
        }
    }

    pub const fn yaml(src: &'static str) -> Self {
        Self {
            src,
            format: Format::Yaml,
        }
    }
}

impl TokenSource for StaticSource {
    fn load(&self) -> Result<TokenGraph, LoadError> {
        TokenGraph::from_str_with(self.src, self.format)
    }
}

/// A token document on disk (`.json`, `.yaml` or `.yml`)
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenSource for FileSource {
    fn load(&self) -> Result<TokenGraph, LoadError> {
        TokenGraph::from_path(&self.path)
    }
}

/// Map an HTTP status to the load outcome: anything outside 2xx is a failure
pub fn check_status(url: &str, status: u16) -> Result<(), LoadError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(LoadError::Status {
            url: url.to_string(),
            status,
        })
    }
}

/// Download a JSON token document.
///
/// A non-2xx response is [`LoadError::Status`]. Retrying is the caller's call.
#[cfg(feature = "fetch")]
pub async fn fetch_graph(client: &reqwest::Client, url: &str) -> Result<TokenGraph, LoadError> {
    tracing::debug!(url, "fetching token document");
    let response = client.get(url).send().await?;
    check_status(url, response.status().as_u16())?;
    let body = response.text().await?;
    TokenGraph::from_json_str(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn static_sources_parse_their_format() {
        let graph = StaticSource::yaml("alias:\n  x: { value: \"1px\" }\n")
            .load()
            .unwrap();
        assert!(graph.alias().token("x").is_some());
        assert!(StaticSource::json("not json").load().is_err());
    }

    #[test]
    fn file_sources_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(br#"{ "alias": { "radius": { "md": { "value": "8px", "type": "dimension" } } } }"#)
            .unwrap();

        let graph = FileSource::new(&path).load().unwrap();
        assert!(graph.alias().token("radius.md").is_some());

        let missing = FileSource::new(dir.path().join("nope.json")).load().unwrap_err();
        assert!(matches!(missing, LoadError::Io { .. }));
    }

    #[test]
    fn non_success_statuses_are_failures() {
        assert!(check_status("https://cdn.example/tokens.json", 200).is_ok());
        assert!(check_status("https://cdn.example/tokens.json", 204).is_ok());
        let err = check_status("https://cdn.example/tokens.json", 404).unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 404, .. }));
        assert!(check_status("https://cdn.example/tokens.json", 302).is_err());
    }
}
