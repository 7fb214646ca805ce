//! # swaggerize
//!
//! **swaggerize** loads a [Swagger 2.0](https://swagger.io/specification/v2/) document, checks
//! that it conforms, and walks it into the small model a project scaffolding generator needs:
//! routes grouped by resource, the `basePath`, and every schema definition reachable from
//! request bodies and success/default responses.
//!
//! ## Architecture
//!
//! - **[`spec`]** - source classification, loading (HTTP or [`FileAccess`]), YAML/JSON decoding,
//!   resource extraction and the `$ref` closure
//! - **[`validator`]** - Swagger 2.0 schema checks plus local `$ref`, path parameter and
//!   `operationId` checks
//! - **[`error`]** - load, format and validation error types
//! - **[`logging`]** - `tracing` subscriber setup for the binary
//! - **[`cli`]** - the `swaggerize` command line
//!
//! ### Parse Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Parse as spec::parse
//!     participant Load as spec::load_document
//!     participant Source as HTTP / FileAccess
//!     participant Validator as validator::validate
//!     participant Extract as spec::extract
//!
//!     Caller->>Parse: parse(&fs, "petstore.yaml")
//!     Parse->>Load: load_document(&fs, location)
//!     Load->>Source: GET url / fs.read(path)
//!     Source-->>Load: text
//!     Load->>Load: Decode YAML or JSON<br/>(by suffix)
//!     Load-->>Parse: Value
//!
//!     Parse->>Validator: validate(copy, location)
//!     Validator->>Validator: Schema + semantic checks<br/>(blocking pool)
//!     Validator-->>Parse: Ok / ValidationError
//!
//!     Parse->>Extract: extract(&pristine)
//!     Extract->>Extract: Group paths by resource
//!     Extract->>Extract: Collect body / 200 / default refs
//!     Extract->>Extract: Close over properties refs
//!     Extract-->>Parse: ParsedSpec
//!
//!     Parse-->>Caller: LoadedSpec { loaded, parsed }
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use swaggerize::{parse, DiskFs};
//!
//! # async fn run() -> Result<(), swaggerize::SpecError> {
//! let spec = parse(&DiskFs, "petstore.yaml").await?;
//!
//! for (resource, routes) in &spec.parsed.resources {
//!     for entry in routes {
//!         println!("{resource}: {} {}", entry.method, entry.route);
//!     }
//! }
//! for name in spec.parsed.refs.names() {
//!     println!("model: {name}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Documents can also come from memory, which is how a generator that stages files before
//! writing them feeds its own output back in:
//!
//! ```no_run
//! use swaggerize::{parse, MemFs};
//!
//! # async fn run() -> Result<(), swaggerize::SpecError> {
//! let mut fs = MemFs::new();
//! fs.write("api/swagger.json", r#"{"swagger": "2.0", "info": {"title": "t", "version": "1"}, "paths": {}}"#);
//! let spec = parse(&fs, "api/swagger.json").await?;
//! assert!(spec.parsed.resources.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! [`parse`] fails fast with one [`SpecError`]:
//!
//! - `Load` - HTTP transport failure or non-200 status, missing or unreadable file
//! - `Format` - the text is not valid JSON / YAML
//! - `Validation` - the document does not conform to Swagger 2.0
//!
//! Concurrent calls share no mutable state.

pub mod cli;
pub mod error;
pub mod logging;
pub mod spec;
pub mod validator;

pub use error::{FormatError, LoadError, LoadFailure, SpecError, ValidationError};
pub use spec::{
    extract, parse, DiskFs, FileAccess, HttpVerb, LoadedSpec, MemFs, ParsedSpec, RefSet,
    RouteEntry,
};
