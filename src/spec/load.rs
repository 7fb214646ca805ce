use crate::error::{FormatError, LoadError, LoadFailure, SpecError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::io;
use tracing::debug;

static HTTP_SOURCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://\S+").expect("http source regex should be valid"));

/// Read-only access to the files a spec path may point at
///
/// `Ok(None)` means the file exists but has no readable content, which is
/// reported differently from an empty file (`Ok(Some(""))`) and from a
/// missing one (`Err`).
pub trait FileAccess {
    fn read(&self, path: &str) -> io::Result<Option<String>>;
}

/// [`FileAccess`] over the real filesystem
///
/// Files that are not valid UTF-8 count as unreadable.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFs;

impl FileAccess for DiskFs {
    fn read(&self, path: &str) -> io::Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// In-memory [`FileAccess`], the virtual filesystem a generator writes into
/// before committing to disk
#[derive(Debug, Clone, Default)]
pub struct MemFs {
    files: HashMap<String, Option<String>>,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), Some(content.into()));
    }

    /// Register a file that exists but cannot be read
    pub fn write_unreadable(&mut self, path: impl Into<String>) {
        self.files.insert(path.into(), None);
    }
}

impl FileAccess for MemFs {
    fn read(&self, path: &str) -> io::Result<Option<String>> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{path} does not exist"))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Http,
    LocalFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Json,
    Yaml,
}

/// Where a document comes from and how to decode it, decided once up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSource {
    pub location: String,
    pub kind: SourceKind,
    pub format: SpecFormat,
}

impl SpecSource {
    /// Classify a URL or path
    ///
    /// `http://` / `https://` locations are fetched, anything else goes
    /// through [`FileAccess`]. A `.yaml` or `.yml` suffix (case-sensitive)
    /// selects YAML, otherwise the text is parsed as JSON.
    ///
    /// ```
    /// use swaggerize::spec::{SourceKind, SpecFormat, SpecSource};
    ///
    /// let src = SpecSource::classify("https://example.com/api.yml");
    /// assert_eq!(src.kind, SourceKind::Http);
    /// assert_eq!(src.format, SpecFormat::Yaml);
    /// ```
    pub fn classify(location: &str) -> Self {
        let is_http = HTTP_SOURCE.is_match(location);
        let format = if location.ends_with(".yaml") || location.ends_with(".yml") {
            SpecFormat::Yaml
        } else {
            SpecFormat::Json
        };
        SpecSource {
            location: location.to_string(),
            kind: if is_http {
                SourceKind::Http
            } else {
                SourceKind::LocalFile
            },
            format,
        }
    }
}

async fn load_http(url: &str) -> Result<String, LoadError> {
    debug!(url = %url, "in load_http");
    let response = reqwest::Client::new().get(url).send().await.map_err(|e| {
        debug!(error = %e, "get request returned err");
        LoadError::new(url, LoadFailure::Transport(e.to_string()))
    })?;

    let status = response.status();
    if status.as_u16() != 200 {
        debug!(status = status.as_u16(), "get request returned status");
        return Err(LoadError::new(url, LoadFailure::Status(status.as_u16())));
    }

    response
        .text()
        .await
        .map_err(|e| LoadError::new(url, LoadFailure::Transport(e.to_string())))
}

fn load_file<F: FileAccess + ?Sized>(fs: &F, path: &str) -> Result<String, LoadError> {
    debug!(path = %path, "in load_file");
    match fs.read(path) {
        Ok(Some(content)) => Ok(content),
        Ok(None) => {
            debug!(path = %path, "cannot read file contents");
            Err(LoadError::new(path, LoadFailure::Unreadable))
        }
        Err(e) => {
            debug!(path = %path, error = %e, "file does not exist");
            Err(LoadError::new(path, LoadFailure::Io(e)))
        }
    }
}

/// Fetch the raw text for `source`
pub async fn load_text<F: FileAccess + ?Sized>(
    fs: &F,
    source: &SpecSource,
) -> Result<String, LoadError> {
    match source.kind {
        SourceKind::Http => load_http(&source.location).await,
        SourceKind::LocalFile => load_file(fs, &source.location),
    }
}

/// Decode document text in the given format
pub fn parse_text(text: &str, format: SpecFormat) -> Result<Value, FormatError> {
    let value = match format {
        SpecFormat::Yaml => serde_yaml::from_str(text)?,
        SpecFormat::Json => serde_json::from_str(text)?,
    };
    Ok(value)
}

/// Load and decode the document at `location`
pub async fn load_document<F: FileAccess + ?Sized>(
    fs: &F,
    location: &str,
) -> Result<Value, SpecError> {
    let source = SpecSource::classify(location);
    let text = load_text(fs, &source).await?;
    Ok(parse_text(&text, source.format)?)
}
