//! Recipient extraction from addressing fields.

use url::Url;

use crate::objects::{Node, PropertyValue};

/// The well-known Public collection IRI.
pub const PUBLIC_IRI: &str = "https://www.w3.org/ns/activitystreams#Public";

/// The addressing fields of an activity, in extraction order.
pub const ADDRESSING_PROPERTIES: [&str; 5] = ["to", "bto", "cc", "bcc", "audience"];

/// The blind addressing fields, stripped before transmission.
pub const BLIND_PROPERTIES: [&str; 2] = ["bto", "bcc"];

/// The fields identifying the sender of an activity.
pub const SENDER_PROPERTIES: [&str; 2] = ["actor", "attributedTo"];

/// Extract the target IRIs of one addressing field, in order. An
/// embedded object contributes its `id`, a link its `href`, a bare IRI
/// itself; entries with none of these are skipped silently.
#[must_use]
pub fn extract_iris(node: &Node, prop: &str) -> Vec<Url> {
    node.values(prop)
        .iter()
        .filter_map(PropertyValue::iri)
        .collect()
}

/// Extract the target IRIs of several fields, concatenated in field
/// order.
#[must_use]
pub fn extract_all_iris(node: &Node, props: &[&str]) -> Vec<Url> {
    props
        .iter()
        .flat_map(|prop| extract_iris(node, prop))
        .collect()
}

/// Whether an IRI denotes the special Public collection. Public has no
/// concrete inbox and must never be dereferenced.
///
/// Exactly three spellings are accepted: the full IRI, the bare token
/// `Public`, and the compact `as:Public`.
#[must_use]
pub fn is_public(iri: &str) -> bool {
    iri == PUBLIC_IRI || iri == "Public" || iri == "as:Public"
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_one_iri_per_addressed_entry() {
        let node = Node::from_json(json!({
            "to": [
                "https://remote.example/users/alice",
                {"type": "Person", "id": "https://remote.example/users/bob"},
                {"type": "Link", "href": "https://remote.example/users/carol"},
                {"type": "Person", "name": "no id here"},
                {"type": "Link"}
            ]
        }))
        .unwrap();

        let iris: Vec<String> = extract_iris(&node, "to")
            .iter()
            .map(|u| u.to_string())
            .collect();
        assert_eq!(
            iris,
            vec![
                "https://remote.example/users/alice",
                "https://remote.example/users/bob",
                "https://remote.example/users/carol",
            ]
        );
    }

    #[test]
    fn test_extract_applies_to_every_addressing_field() {
        let node = Node::from_json(json!({
            "to": ["https://remote.example/a"],
            "bto": ["https://remote.example/b"],
            "cc": ["https://remote.example/c"],
            "bcc": ["https://remote.example/d"],
            "audience": ["https://remote.example/e"]
        }))
        .unwrap();

        let iris = extract_all_iris(&node, &ADDRESSING_PROPERTIES);
        let paths: Vec<&str> = iris.iter().map(Url::path).collect();
        assert_eq!(paths, vec!["/a", "/b", "/c", "/d", "/e"]);
    }

    #[test]
    fn test_extract_sender_fields() {
        let node = Node::from_json(json!({
            "actor": "https://local.example/users/me",
            "attributedTo": {"type": "Person", "id": "https://local.example/users/me"}
        }))
        .unwrap();

        let iris = extract_all_iris(&node, &SENDER_PROPERTIES);
        assert_eq!(iris.len(), 2);
        assert!(iris.iter().all(|u| u.path() == "/users/me"));
    }

    #[test]
    fn test_is_public_accepts_exactly_three_spellings() {
        assert!(is_public("https://www.w3.org/ns/activitystreams#Public"));
        assert!(is_public("Public"));
        assert!(is_public("as:Public"));

        assert!(!is_public("https://www.w3.org/ns/activitystreams#public"));
        assert!(!is_public("https://www.w3.org/ns/activitystreams"));
        assert!(!is_public("public"));
        assert!(!is_public("as:public"));
        assert!(!is_public(""));
        assert!(!is_public("https://example.com/Public"));
    }
}
