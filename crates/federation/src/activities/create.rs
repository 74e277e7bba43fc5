//! Create activity wrapping.

use serde_json::json;
use url::Url;

use crate::objects::Node;
use crate::recipients::ADDRESSING_PROPERTIES;

/// Wrap a bare object in a `Create` activity attributed to `actor`.
///
/// The object's `published` timestamp and every addressing entry are
/// copied onto the activity verbatim, preserving each entry's shape
/// (embedded object, link, or bare IRI). Pure; performs no I/O.
#[must_use]
pub fn wrap_in_create(object: &Node, actor: &Url) -> Node {
    let mut create = Node::new();
    create.set_raw("@context", json!("https://www.w3.org/ns/activitystreams"));
    create.set_raw("type", json!("Create"));
    create.set_raw("actor", json!(actor.as_str()));

    if let Some(published) = object.raw("published") {
        create.set_raw("published", published.clone());
    }
    for prop in ADDRESSING_PROPERTIES {
        if let Some(value) = object.raw(prop) {
            create.set_raw(prop, value.clone());
        }
    }

    create.set_raw("object", object.to_json());
    create
}
