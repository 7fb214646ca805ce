use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// HTTP verbs recognised under a Swagger path item, in scan order
///
/// Any other key of a path item (`parameters`, `$ref`, `x-*`) is ignored.
pub const SUPPORTED_VERBS: [HttpVerb; 7] = [
    HttpVerb::Get,
    HttpVerb::Post,
    HttpVerb::Put,
    HttpVerb::Delete,
    HttpVerb::Head,
    HttpVerb::Options,
    HttpVerb::Patch,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
    Patch,
}

impl HttpVerb {
    /// Lowercase key used for this verb in a Swagger path item
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "get",
            HttpVerb::Post => "post",
            HttpVerb::Put => "put",
            HttpVerb::Delete => "delete",
            HttpVerb::Head => "head",
            HttpVerb::Options => "options",
            HttpVerb::Patch => "patch",
        }
    }
}

impl std::fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One verb + route template pair belonging to a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub method: HttpVerb,
    pub route: String,
}

/// Resource name → routes, in discovery order
pub type ResourceMap = IndexMap<String, Vec<RouteEntry>>;

/// Definitions reachable from parameters and responses, keyed by name
///
/// Insertion is keyed by name only: once a name is present, later inserts are
/// no-ops regardless of the value. A name whose definition was not found is
/// kept with `None` so the caller can see which reference dangled.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RefSet {
    entries: IndexMap<String, Option<Value>>,
}

impl RefSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `name` unless it is already present
    ///
    /// Returns `true` when the name was newly added.
    pub fn insert_if_absent(&mut self, name: &str, definition: Option<&Value>) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        self.entries.insert(name.to_string(), definition.cloned());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The recorded definition, or `None` if the name is unknown or dangling
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name).and_then(Option::as_ref)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Names that were referenced but have no definition in the document
    pub fn dangling(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, def)| def.is_none())
            .map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.entries
            .iter()
            .map(|(name, def)| (name.as_str(), def.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Model derived from a validated document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedSpec {
    pub basepath: Option<String>,
    pub resources: ResourceMap,
    pub refs: RefSet,
}

impl ParsedSpec {
    /// Total number of route entries across all resources
    pub fn route_count(&self) -> usize {
        self.resources.values().map(Vec::len).sum()
    }
}

/// Result of [`crate::spec::parse`]
///
/// `loaded` is the document exactly as read from the source, untouched by
/// validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadedSpec {
    pub loaded: Value,
    pub parsed: ParsedSpec,
}
