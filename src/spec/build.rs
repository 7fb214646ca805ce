use super::naming::{ref_name, resource_name_from_path, to_route_template};
use super::types::{ParsedSpec, RefSet, ResourceMap, RouteEntry, SUPPORTED_VERBS};
use serde_json::{Map, Value};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Response codes whose schemas contribute definitions
const MODEL_RESPONSES: [&str; 2] = ["200", "default"];

/// Walk a validated Swagger 2.0 document into resources and reachable definitions
///
/// Paths are visited in document order and verbs in [`SUPPORTED_VERBS`]
/// order, so the resulting [`ResourceMap`] is in discovery order. Definitions
/// are seeded from body parameter schemas and from the `200` / `default`
/// response schemas, then closed over `properties` references.
///
/// This is a pure function: calling it twice on the same document yields
/// equal results. A document without `paths` produces an empty map.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use swaggerize::spec::extract;
///
/// let doc = json!({
///     "swagger": "2.0",
///     "info": {"title": "t", "version": "1"},
///     "paths": {"/widgets/{id}": {"get": {"responses": {"200": {"description": "ok"}}}}}
/// });
/// let parsed = extract(&doc);
/// assert_eq!(parsed.resources["Widgets"][0].route, "/widgets/:id");
/// ```
pub fn extract(document: &Value) -> ParsedSpec {
    let definitions = document.get("definitions").and_then(Value::as_object);
    let basepath = document
        .get("basePath")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let mut resources = ResourceMap::new();
    let mut refs = RefSet::new();

    if let Some(paths) = document.get("paths").and_then(Value::as_object) {
        for (path, item) in paths {
            let resource = resource_name_from_path(path);
            let route = to_route_template(path);
            debug!(path = %path, resource = %resource, "path becomes resource");

            for verb in SUPPORTED_VERBS {
                let operation = match item.get(verb.as_str()) {
                    Some(op) if is_present(op) => op,
                    _ => continue,
                };
                debug!(verb = %verb, "parsing verb");

                resources
                    .entry(resource.clone())
                    .or_default()
                    .push(RouteEntry {
                        method: verb,
                        route: route.clone(),
                    });

                record_parameter_refs(document, operation, definitions, &mut refs);
                record_response_refs(document, operation, definitions, &mut refs);
            }
        }
    } else {
        warn!("document has no paths section; no resources extracted");
    }

    close_over_properties(definitions, &mut refs);

    ParsedSpec {
        basepath,
        resources,
        refs,
    }
}

/// JavaScript-style truthiness for a verb entry: `null` / `false` do not count
fn is_present(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

fn ref_of(value: &Value) -> Option<&str> {
    value.get("$ref").and_then(Value::as_str)
}

fn items_ref_of(schema: &Value) -> Option<&str> {
    schema.get("items").and_then(ref_of)
}

/// Record `reference` in `refs`, looking its definition up by name
///
/// Only local references (`#/...`) are looked up. A reference into another
/// document is recorded as absent rather than bound to a same-named local
/// definition.
fn record(refs: &mut RefSet, definitions: Option<&Map<String, Value>>, reference: &str) -> bool {
    let name = ref_name(reference);
    let definition = definitions
        .filter(|_| reference.starts_with('#'))
        .and_then(|defs| defs.get(&name));
    if definition.is_none() && !refs.contains(&name) {
        warn!(reference = %reference, name = %name, "reference does not match any definition");
    }
    refs.insert_if_absent(&name, definition)
}

/// Follow a `#/parameters/...` or `#/responses/...` indirection to the shared object
fn resolve_shared<'a>(document: &'a Value, value: &'a Value, section: &str) -> &'a Value {
    let prefix = format!("#/{section}/");
    ref_of(value)
        .and_then(|r| r.strip_prefix(prefix.as_str()))
        .and_then(|name| document.get(section)?.get(name))
        .unwrap_or(value)
}

fn record_parameter_refs(
    document: &Value,
    operation: &Value,
    definitions: Option<&Map<String, Value>>,
    refs: &mut RefSet,
) {
    let Some(parameters) = operation.get("parameters").and_then(Value::as_array) else {
        return;
    };
    for parameter in parameters {
        let parameter = resolve_shared(document, parameter, "parameters");
        let Some(schema) = parameter.get("schema") else {
            continue;
        };
        if let Some(reference) = ref_of(schema) {
            record(refs, definitions, reference);
        } else if let Some(reference) = items_ref_of(schema) {
            record(refs, definitions, reference);
        }
    }
}

fn record_response_refs(
    document: &Value,
    operation: &Value,
    definitions: Option<&Map<String, Value>>,
    refs: &mut RefSet,
) {
    let Some(responses) = operation.get("responses") else {
        return;
    };
    for code in MODEL_RESPONSES {
        let Some(response) = responses.get(code) else {
            continue;
        };
        let response = resolve_shared(document, response, "responses");
        let Some(schema) = response.get("schema") else {
            continue;
        };
        if let Some(reference) = ref_of(schema) {
            record(refs, definitions, reference);
        } else if schema.get("type").and_then(Value::as_str) == Some("array") {
            if let Some(reference) = items_ref_of(schema) {
                record(refs, definitions, reference);
            }
        }
    }
}

/// Add every definition reachable through `properties` of recorded definitions
///
/// Worklist over newly inserted names: each name is expanded exactly once and
/// a name already in `refs` is never queued again, which is what makes cyclic
/// definitions terminate.
fn close_over_properties(definitions: Option<&Map<String, Value>>, refs: &mut RefSet) {
    let mut pending: VecDeque<String> = refs.names().map(str::to_string).collect();

    while let Some(name) = pending.pop_front() {
        let Some(properties) = refs
            .get(&name)
            .and_then(|def| def.get("properties"))
            .and_then(Value::as_object)
        else {
            continue;
        };

        let children: Vec<String> = properties
            .values()
            .filter_map(|property| ref_of(property).or_else(|| items_ref_of(property)))
            .map(str::to_string)
            .collect();

        for reference in children {
            if record(refs, definitions, &reference) {
                debug!(parent = %name, child = %ref_name(&reference), "found nested reference");
                pending.push_back(ref_name(&reference));
            }
        }
    }
}
