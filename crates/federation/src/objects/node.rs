//! Map-backed JSON-LD document node.
//!
//! ActivityStreams documents are open-world: any property may hold an
//! embedded object, a `Link`, a bare IRI, or a list mixing all three.
//! Rather than one struct per vocabulary type, a [`Node`] keeps the raw
//! JSON map and exposes each property slot as a [`PropertyValue`] sum
//! type, so callers match exhaustively instead of probing capabilities.

use fanout_common::{AppError, AppResult};
use serde_json::{Map, Value};
use url::Url;

/// A single element of a JSON-LD property slot.
///
/// Exactly one variant holds per element; lists may mix variants across
/// elements but each element is unityped.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// An embedded object with its own properties.
    Object(Node),
    /// A `Link` (or `Mention`) pointing elsewhere via `href`.
    Link(ApLink),
    /// A bare IRI.
    Iri(Url),
}

impl PropertyValue {
    /// The IRI this element denotes: an embedded object's `id`, a link's
    /// `href`, or the bare IRI itself. `None` when the element has no
    /// usable identifier.
    #[must_use]
    pub fn iri(&self) -> Option<Url> {
        match self {
            Self::Object(node) => node.id(),
            Self::Link(link) => link.href.clone(),
            Self::Iri(iri) => Some(iri.clone()),
        }
    }
}

/// View of a `Link`/`Mention` object.
#[derive(Clone, Debug, PartialEq)]
pub struct ApLink {
    /// The link target, if present and well-formed.
    pub href: Option<Url>,
}

/// A JSON-LD document node backed by its raw property map.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    props: Map<String, Value>,
}

impl Node {
    /// Create an empty node.
    #[must_use]
    pub fn new() -> Self {
        Self { props: Map::new() }
    }

    /// Build a node from a parsed JSON value. The value must be a JSON
    /// object; anything else is a decode failure.
    pub fn from_json(value: Value) -> AppResult<Self> {
        match value {
            Value::Object(props) => Ok(Self { props }),
            other => Err(AppError::Serialization(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }

    /// Serialize back to a JSON value.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(self.props.clone())
    }

    /// The node's `id`, if present and a well-formed IRI.
    #[must_use]
    pub fn id(&self) -> Option<Url> {
        self.props
            .get("id")
            .and_then(Value::as_str)
            .and_then(|s| Url::parse(s).ok())
    }

    /// The node's `type` values. A scalar `type` yields one entry.
    #[must_use]
    pub fn kinds(&self) -> Vec<&str> {
        match self.props.get("type") {
            Some(Value::String(s)) => vec![s.as_str()],
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Whether any of the node's `type` values equals `kind`.
    #[must_use]
    pub fn has_kind(&self, kind: &str) -> bool {
        self.kinds().iter().any(|k| *k == kind)
    }

    /// The raw JSON value of a property, exactly as stored.
    #[must_use]
    pub fn raw(&self, prop: &str) -> Option<&Value> {
        self.props.get(prop)
    }

    /// The raw JSON elements of a property, normalized to a sequence:
    /// an absent property is empty, a scalar is a one-element sequence,
    /// an array is itself (order preserved).
    #[must_use]
    pub fn raw_values(&self, prop: &str) -> Vec<Value> {
        match self.props.get(prop) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.clone(),
            Some(other) => vec![other.clone()],
        }
    }

    /// The typed elements of a property, in order. Elements that are
    /// neither an object, a link, nor a parseable IRI are dropped.
    #[must_use]
    pub fn values(&self, prop: &str) -> Vec<PropertyValue> {
        self.raw_values(prop)
            .into_iter()
            .filter_map(classify_element)
            .collect()
    }

    /// Set a property to a single raw value.
    pub fn set_raw(&mut self, prop: &str, value: Value) {
        self.props.insert(prop.to_string(), value);
    }

    /// Remove a property entirely, returning its previous raw value.
    pub fn remove(&mut self, prop: &str) -> Option<Value> {
        self.props.remove(prop)
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify one raw JSON element into its property-value form.
fn classify_element(value: Value) -> Option<PropertyValue> {
    match value {
        Value::String(s) => Url::parse(&s).ok().map(PropertyValue::Iri),
        Value::Object(map) => {
            let node = Node { props: map };
            if node.has_kind("Link") || node.has_kind("Mention") {
                let href = node
                    .props
                    .get("href")
                    .and_then(Value::as_str)
                    .and_then(|s| Url::parse(s).ok());
                Some(PropertyValue::Link(ApLink { href }))
            } else {
                Some(PropertyValue::Object(node))
            }
        }
        _ => None,
    }
}
