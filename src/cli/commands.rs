use crate::spec::{load_document, parse, DiskFs, LoadedSpec, ParsedSpec};
use crate::validator;
use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::Write as _;

/// Command-line interface for swaggerize
///
/// Loads a Swagger 2.0 document from a file or URL and reports what a
/// scaffolding generator would see.
#[derive(Parser)]
#[command(name = "swaggerize")]
#[command(about = "Swagger 2.0 loader and inspector", long_about = None)]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the extracted resources and schema references
    Inspect {
        /// Path or http(s) URL of the Swagger document (YAML or JSON)
        #[arg(short, long, env = "SWAGGERIZE_SPEC")]
        spec: String,

        /// Output encoding
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Include the loaded document alongside the extracted model
        #[arg(long, default_value_t = false)]
        with_document: bool,
    },
    /// Check a document against the Swagger 2.0 schema and report every issue
    Validate {
        /// Path or http(s) URL of the Swagger document (YAML or JSON)
        #[arg(short, long, env = "SWAGGERIZE_SPEC")]
        spec: String,
    },
    /// List routes grouped by resource, then the referenced definitions
    Routes {
        /// Path or http(s) URL of the Swagger document (YAML or JSON)
        #[arg(short, long, env = "SWAGGERIZE_SPEC")]
        spec: String,
    },
}

/// Encoding for `inspect` output
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Render the `inspect` payload
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_inspect(
    spec: &LoadedSpec,
    format: OutputFormat,
    with_document: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut out = serde_json::to_value(&spec.parsed)?;
    if let (true, Some(map)) = (with_document, out.as_object_mut()) {
        map.insert("document".to_string(), spec.loaded.clone());
    }
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&out)?,
        OutputFormat::Yaml => serde_yaml::to_string(&out)?,
    };
    Ok(rendered)
}

fn join_base(basepath: Option<&str>, route: &str) -> String {
    match basepath {
        Some(base) => format!("{}{}", base.trim_end_matches('/'), route),
        None => route.to_string(),
    }
}

/// Render the `routes` listing
///
/// Routes are prefixed with the document's basePath. Definitions that were
/// referenced but never found are marked `(unresolved)`.
pub fn render_routes(parsed: &ParsedSpec) -> String {
    let mut out = String::new();
    for (resource, routes) in &parsed.resources {
        let _ = writeln!(out, "{resource}");
        for entry in routes {
            let method = entry.method.as_str().to_uppercase();
            let route = join_base(parsed.basepath.as_deref(), &entry.route);
            let _ = writeln!(out, "  {method:<8}{route}");
        }
    }
    if !parsed.refs.is_empty() {
        let _ = writeln!(out, "definitions:");
        for (name, definition) in parsed.refs.iter() {
            match definition {
                Some(_) => {
                    let _ = writeln!(out, "  {name}");
                }
                None => {
                    let _ = writeln!(out, "  {name} (unresolved)");
                }
            }
        }
    }
    out
}

/// Execute a parsed command line
///
/// # Errors
///
/// Returns the load, format or validation failure for the given source, or an
/// output serialization error.
pub async fn run_cli(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Commands::Inspect {
            spec,
            format,
            with_document,
        } => {
            let loaded = parse(&DiskFs, spec).await?;
            println!("{}", render_inspect(&loaded, *format, *with_document)?);
        }
        Commands::Validate { spec } => {
            let document = load_document(&DiskFs, spec).await?;
            let issues = validator::collect_issues(&document);
            if issues.is_empty() {
                println!("✅ {spec} is a valid Swagger 2.0 document");
            } else {
                for issue in &issues {
                    println!("❌ {issue}");
                }
                return Err(Box::new(crate::error::ValidationError::new(spec.as_str())));
            }
        }
        Commands::Routes { spec } => {
            let loaded = parse(&DiskFs, spec).await?;
            print!("{}", render_routes(&loaded.parsed));
        }
    }
    Ok(())
}
