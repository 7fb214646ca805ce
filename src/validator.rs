//! # Swagger 2.0 conformance checks
//!
//! Structural checks run the document through an embedded Swagger 2.0 JSON
//! Schema (draft 4). Semantic checks then cover what a schema cannot express:
//!
//! - every `$ref` is local (`#/...`) and resolves inside the document
//! - path parameters are declared `required: true`
//! - every `{name}` placeholder in a path is declared as a path parameter
//! - no parameter list declares the same `name` + `in` twice
//! - `operationId` values are unique
//!
//! External documents are never fetched, so a `$ref` into another file is
//! reported as an `ExternalRef` issue.
//!
//! Issues are collected as [`ValidationIssue`]s and logged. The error handed
//! back to the caller is deliberately generic and names only the source.

use crate::error::ValidationError;
use crate::spec::{path_param_names, SUPPORTED_VERBS};
use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

const SWAGGER_2_SCHEMA: &str = include_str!("../schemas/swagger-2.0.json");

static SWAGGER_VALIDATOR: Lazy<Result<Validator, String>> = Lazy::new(|| {
    let schema: Value = serde_json::from_str(SWAGGER_2_SCHEMA).map_err(|e| e.to_string())?;
    jsonschema::draft4::new(&schema).map_err(|e| e.to_string())
});

/// A single conformance problem found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub location: String,
    pub kind: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(
        location: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ValidationIssue {
            location: location.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.location, self.message)
    }
}

/// Run every structural and semantic check, returning all issues found
pub fn collect_issues(document: &Value) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    match SWAGGER_VALIDATOR.as_ref() {
        Ok(validator) => {
            for error in validator.iter_errors(document) {
                issues.push(ValidationIssue::new("document", "Schema", error.to_string()));
            }
        }
        Err(e) => issues.push(ValidationIssue::new(
            "swagger-2.0.json",
            "SchemaCompile",
            e.clone(),
        )),
    }

    check_local_refs(document, document, "#", &mut issues);
    check_path_parameters(document, &mut issues);
    check_path_templates(document, &mut issues);
    check_operation_ids(document, &mut issues);
    issues
}

/// Consume a disposable copy of the document and check it for conformance
///
/// The document is taken by value: whatever validation does to it never
/// reaches the caller's copy.
pub fn ensure_valid(document: Value, source: &str) -> Result<(), ValidationError> {
    debug!(source = %source, "in ensure_valid");
    let issues = collect_issues(&document);
    if issues.is_empty() {
        return Ok(());
    }
    warn!(source = %source, count = issues.len(), "document does not conform to swagger specification");
    for issue in &issues {
        debug!(%issue, "validation issue");
    }
    Err(ValidationError::new(source))
}

/// [`ensure_valid`] on tokio's blocking pool
pub async fn validate(document: Value, source: &str) -> Result<(), ValidationError> {
    let owned_source = source.to_string();
    tokio::task::spawn_blocking(move || ensure_valid(document, &owned_source))
        .await
        .map_err(|e| {
            warn!(error = %e, "validation task failed");
            ValidationError::new(source)
        })?
}

/// Resolve a local JSON pointer (`#/a/b`) against `document`
pub fn resolve_local_ref<'a>(document: &'a Value, reference: &str) -> Option<&'a Value> {
    let pointer = reference.strip_prefix('#')?;
    if pointer.is_empty() {
        return Some(document);
    }
    document.pointer(pointer)
}

fn check_local_refs(
    document: &Value,
    node: &Value,
    location: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    match node {
        Value::Object(map) => {
            if let Some(reference) = map.get("$ref").and_then(Value::as_str) {
                if !reference.starts_with('#') {
                    issues.push(ValidationIssue::new(
                        location,
                        "ExternalRef",
                        format!("external reference {reference} is not supported"),
                    ));
                } else if resolve_local_ref(document, reference).is_none() {
                    issues.push(ValidationIssue::new(
                        location,
                        "UnresolvedRef",
                        format!("cannot resolve reference {reference}"),
                    ));
                }
            }
            for (key, child) in map {
                let escaped = key.replace('~', "~0").replace('/', "~1");
                check_local_refs(document, child, &format!("{location}/{escaped}"), issues);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                check_local_refs(document, child, &format!("{location}/{i}"), issues);
            }
        }
        _ => {}
    }
}

/// Follow a `#/parameters/...` indirection, leaving inline parameters as they are
fn resolve_parameter<'a>(document: &'a Value, param: &'a Value) -> &'a Value {
    param
        .get("$ref")
        .and_then(Value::as_str)
        .and_then(|r| resolve_local_ref(document, r))
        .unwrap_or(param)
}

/// Path-level and per-operation parameter lists, labelled for issue locations
fn parameter_lists<'a>(path: &str, item: &'a Value) -> Vec<(String, Option<&'a Value>)> {
    let mut lists = vec![(path.to_string(), item.get("parameters"))];
    for verb in SUPPORTED_VERBS {
        if let Some(op) = item.get(verb.as_str()) {
            lists.push((format!("{path} {verb}"), op.get("parameters")));
        }
    }
    lists
}

fn check_path_parameters(document: &Value, issues: &mut Vec<ValidationIssue>) {
    let Some(paths) = document.get("paths").and_then(Value::as_object) else {
        return;
    };
    for (path, item) in paths {
        for (location, list) in parameter_lists(path, item) {
            let Some(params) = list.and_then(Value::as_array) else {
                continue;
            };
            let mut seen: HashSet<(&str, &str)> = HashSet::new();
            for param in params {
                let param = resolve_parameter(document, param);
                let (Some(name), Some(place)) = (
                    param.get("name").and_then(Value::as_str),
                    param.get("in").and_then(Value::as_str),
                ) else {
                    continue;
                };
                let required = param.get("required").and_then(Value::as_bool) == Some(true);
                if place == "path" && !required {
                    issues.push(ValidationIssue::new(
                        &location,
                        "PathParamNotRequired",
                        format!("path parameter '{name}' must be required"),
                    ));
                }
                if !seen.insert((name, place)) {
                    issues.push(ValidationIssue::new(
                        &location,
                        "DuplicateParameter",
                        format!("parameter '{name}' in {place} is declared more than once"),
                    ));
                }
            }
        }
    }
}

fn declared_path_params(document: &Value, list: Option<&Value>) -> HashSet<String> {
    list.and_then(Value::as_array)
        .into_iter()
        .flatten()
        .map(|p| resolve_parameter(document, p))
        .filter(|p| p.get("in").and_then(Value::as_str) == Some("path"))
        .filter_map(|p| p.get("name").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

/// Every `{name}` in a path needs a matching `in: path` parameter on each of its operations
fn check_path_templates(document: &Value, issues: &mut Vec<ValidationIssue>) {
    let Some(paths) = document.get("paths").and_then(Value::as_object) else {
        return;
    };
    for (path, item) in paths {
        let placeholders = path_param_names(path);
        if placeholders.is_empty() {
            continue;
        }
        let shared = declared_path_params(document, item.get("parameters"));
        for verb in SUPPORTED_VERBS {
            let Some(op) = item.get(verb.as_str()) else {
                continue;
            };
            let declared = declared_path_params(document, op.get("parameters"));
            for name in &placeholders {
                if !shared.contains(name) && !declared.contains(name) {
                    issues.push(ValidationIssue::new(
                        format!("{path} {verb}"),
                        "MissingPathParam",
                        format!("path placeholder '{{{name}}}' has no matching path parameter"),
                    ));
                }
            }
        }
    }
}

fn check_operation_ids(document: &Value, issues: &mut Vec<ValidationIssue>) {
    let Some(paths) = document.get("paths").and_then(Value::as_object) else {
        return;
    };
    let mut seen: HashMap<&str, String> = HashMap::new();
    for (path, item) in paths {
        for verb in SUPPORTED_VERBS {
            let Some(id) = item
                .get(verb.as_str())
                .and_then(|op| op.get("operationId"))
                .and_then(Value::as_str)
            else {
                continue;
            };
            let location = format!("{path} {verb}");
            if let Some(first) = seen.get(id) {
                issues.push(ValidationIssue::new(
                    &location,
                    "DuplicateOperationId",
                    format!("operationId '{id}' already used by {first}"),
                ));
            } else {
                seen.insert(id, location);
            }
        }
    }
}
