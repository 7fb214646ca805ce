//! # CLI Module
//!
//! Command-line front end for loading and inspecting Swagger 2.0 documents.
//!
//! ## Commands
//!
//! ### `inspect`
//!
//! Print the extracted resource map and schema references:
//!
//! ```bash
//! swaggerize inspect --spec petstore.yaml --format yaml
//! swaggerize inspect --spec https://example.com/swagger.json --with-document
//! ```
//!
//! ### `validate`
//!
//! Check a document and list every conformance issue found:
//!
//! ```bash
//! swaggerize validate --spec petstore.yaml
//! ```
//!
//! ### `routes`
//!
//! List routes grouped by resource, prefixed with the basePath:
//!
//! ```bash
//! swaggerize routes --spec petstore.yaml
//! ```
//!
//! `--spec` falls back to the `SWAGGERIZE_SPEC` environment variable.
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use swaggerize::cli::{Cli, run_cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! run_cli(cli).await?;
//! ```

mod commands;


pub use commands::{render_inspect, render_routes, run_cli, Cli, Commands, OutputFormat};
