//! # Spec Module
//!
//! Loading, validation and extraction of Swagger 2.0 documents.
//!
//! ```text
//! load_document ──► validate (disposable copy) ──► extract (pristine copy)
//! ```
//!
//! [`parse`] composes the three stages and fails fast on the first error.

mod build;
mod load;
mod naming;
mod types;

pub use build::*;
pub use load::*;
pub use naming::*;
pub use types::*;

use crate::error::SpecError;
use crate::validator;
use tracing::{debug, info};

/// Load, validate and walk the document at `location`
///
/// `location` is either an `http(s)://` URL or a path resolved through `fs`.
/// Validation only ever sees a copy of the document, so `loaded` in the
/// result is exactly what was read from the source.
///
/// # Errors
///
/// - [`SpecError::Load`] when the source cannot be fetched or read
/// - [`SpecError::Format`] when the text is not valid JSON / YAML
/// - [`SpecError::Validation`] when the document is not valid Swagger 2.0
///
/// # Example
///
/// ```no_run
/// use swaggerize::spec::{parse, DiskFs};
///
/// # async fn run() -> Result<(), swaggerize::SpecError> {
/// let result = parse(&DiskFs, "petstore.yaml").await?;
/// for (resource, routes) in &result.parsed.resources {
///     println!("{resource}: {} routes", routes.len());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn parse<F: FileAccess + ?Sized>(
    fs: &F,
    location: &str,
) -> Result<LoadedSpec, SpecError> {
    debug!(source = %location, "in parse");
    let loaded = load_document(fs, location).await?;

    validator::validate(loaded.clone(), location).await?;
    debug!(source = %location, "successfully validated against schema");

    let parsed = extract(&loaded);
    info!(
        source = %location,
        resources = parsed.resources.len(),
        routes = parsed.route_count(),
        refs = parsed.refs.len(),
        "loaded swagger document"
    );
    Ok(LoadedSpec { loaded, parsed })
}
