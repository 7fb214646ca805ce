use std::fmt;
use std::io;

/// Error returned by [`crate::spec::parse`] and the individual pipeline stages
///
/// Every variant is terminal for the current call. There are no retries and
/// no partial results.
#[derive(Debug)]
pub enum SpecError {
    /// The source could not be fetched or read
    Load(LoadError),
    /// The fetched text is not well-formed JSON or YAML
    Format(FormatError),
    /// The document does not conform to the Swagger 2.0 specification
    Validation(ValidationError),
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::Load(e) => write!(f, "{e}"),
            SpecError::Format(e) => write!(f, "{e}"),
            SpecError::Validation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SpecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpecError::Load(e) => Some(e),
            SpecError::Format(e) => Some(e),
            SpecError::Validation(e) => Some(e),
        }
    }
}

impl From<LoadError> for SpecError {
    fn from(e: LoadError) -> Self {
        SpecError::Load(e)
    }
}

impl From<FormatError> for SpecError {
    fn from(e: FormatError) -> Self {
        SpecError::Format(e)
    }
}

impl From<ValidationError> for SpecError {
    fn from(e: ValidationError) -> Self {
        SpecError::Validation(e)
    }
}

/// Why a source could not be loaded
#[derive(Debug)]
pub enum LoadFailure {
    /// The HTTP request completed with a status other than 200
    Status(u16),
    /// The HTTP request never produced a response (DNS, connect, TLS, body read)
    Transport(String),
    /// The file is missing or the read failed
    Io(io::Error),
    /// The file exists but yielded no readable content
    Unreadable,
}

/// A source (URL or path) could not be turned into text
#[derive(Debug)]
pub struct LoadError {
    /// The URL or path exactly as given by the caller
    pub source: String,
    /// What went wrong
    pub failure: LoadFailure,
}

impl LoadError {
    pub fn new(source: impl Into<String>, failure: LoadFailure) -> Self {
        LoadError {
            source: source.into(),
            failure,
        }
    }

    /// HTTP status of the failed request, if the failure was a bad status
    pub fn status(&self) -> Option<u16> {
        match self.failure {
            LoadFailure::Status(code) => Some(code),
            _ => None,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.failure {
            LoadFailure::Status(code) => {
                write!(f, "failed to load swagger from: {} status: {}", self.source, code)
            }
            LoadFailure::Transport(cause) => {
                write!(f, "failed to load swagger from: {} err: {}", self.source, cause)
            }
            LoadFailure::Io(err) => {
                write!(f, "failed to load swagger from: {} {}", self.source, err)
            }
            LoadFailure::Unreadable => write!(f, "failed to load swagger from: {}", self.source),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.failure {
            LoadFailure::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Malformed document text, carrying the parser's own error untouched
#[derive(Debug)]
pub enum FormatError {
    Json(serde_json::Error),
    Yaml(serde_yaml::Error),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Json(e) => write!(f, "{e}"),
            FormatError::Yaml(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatError::Json(e) => Some(e),
            FormatError::Yaml(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for FormatError {
    fn from(e: serde_json::Error) -> Self {
        FormatError::Json(e)
    }
}

impl From<serde_yaml::Error> for FormatError {
    fn from(e: serde_yaml::Error) -> Self {
        FormatError::Yaml(e)
    }
}

/// The document failed conformance checking
///
/// Only the source is exposed. Individual issues are logged by the validator
/// and deliberately not carried here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The URL or path the document was loaded from
    pub source: String,
}

impl ValidationError {
    pub fn new(source: impl Into<String>) -> Self {
        ValidationError {
            source: source.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} does not conform to swagger specification", self.source)
    }
}

impl std::error::Error for ValidationError {}
