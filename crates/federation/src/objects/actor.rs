//! Actor views over dereferenced documents.

use url::Url;

use super::node::Node;

/// ActivityStreams types treated as actors during resolution.
pub const ACTOR_KINDS: [&str; 5] = ["Person", "Group", "Organization", "Service", "Application"];

/// A remote actor as produced by inbox resolution.
///
/// Transient: built from a freshly dereferenced document, not cached
/// across preparation calls.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedActor {
    /// The actor's `id`.
    pub id: Option<Url>,
    /// The actor's `inbox` endpoint. Actors without one are skipped at
    /// delivery time.
    pub inbox: Option<Url>,
}

impl ResolvedActor {
    /// Build an actor view from a document node, or `None` when the
    /// node's `type` is not an actor kind.
    #[must_use]
    pub fn from_node(node: &Node) -> Option<Self> {
        if !ACTOR_KINDS.iter().any(|k| node.has_kind(k)) {
            return None;
        }
        let inbox = node.values("inbox").first().and_then(super::node::PropertyValue::iri);
        Some(Self { id: node.id(), inbox })
    }
}
