use once_cell::sync::Lazy;
use regex::Regex;

static PATH_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}]+)\}").expect("path parameter regex should be valid"));

/// Resource name for a Swagger path
///
/// Takes the first non-empty segment and capitalises its first character, so
/// `/widgets` and `/widgets/{id}` both become `Widgets`. A path with no
/// segment at all (`/`) maps to `Root`.
///
/// ```
/// use swaggerize::spec::resource_name_from_path;
///
/// assert_eq!(resource_name_from_path("/widgets/{id}"), "Widgets");
/// assert_eq!(resource_name_from_path("//orders"), "Orders");
/// ```
pub fn resource_name_from_path(path: &str) -> String {
    let segment = path.split('/').find(|s| !s.is_empty()).unwrap_or("root");
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Convert `{param}` placeholders into router template tokens (`:param`)
///
/// ```
/// use swaggerize::spec::to_route_template;
///
/// assert_eq!(to_route_template("/users/{user_id}/posts/{id}"), "/users/:user_id/posts/:id");
/// ```
pub fn to_route_template(path: &str) -> String {
    PATH_PARAM.replace_all(path, ":$1").into_owned()
}

/// Names of the `{param}` placeholders in a path, in order
///
/// ```
/// use swaggerize::spec::path_param_names;
///
/// assert_eq!(path_param_names("/users/{user_id}/posts/{id}"), vec!["user_id", "id"]);
/// ```
pub fn path_param_names(path: &str) -> Vec<String> {
    PATH_PARAM
        .captures_iter(path)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Definition name addressed by a `$ref`
///
/// Returns the last JSON pointer segment with `~1` and `~0` unescaped, so
/// `#/definitions/Widget` yields `Widget`.
pub fn ref_name(reference: &str) -> String {
    let last = reference.rsplit('/').next().unwrap_or(reference);
    last.replace("~1", "/").replace("~0", "~")
}
