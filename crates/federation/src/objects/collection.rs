//! Collection and page views over dereferenced documents.

use url::Url;

use super::node::{Node, PropertyValue};

/// The collection flavors recognized during resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectionKind {
    /// `Collection`
    Collection,
    /// `OrderedCollection`
    OrderedCollection,
    /// `CollectionPage`
    CollectionPage,
    /// `OrderedCollectionPage`
    OrderedCollectionPage,
}

impl CollectionKind {
    /// Classify a node as one of the collection flavors, or `None`.
    #[must_use]
    pub fn of(node: &Node) -> Option<Self> {
        if node.has_kind("Collection") {
            Some(Self::Collection)
        } else if node.has_kind("OrderedCollection") {
            Some(Self::OrderedCollection)
        } else if node.has_kind("CollectionPage") {
            Some(Self::CollectionPage)
        } else if node.has_kind("OrderedCollectionPage") {
            Some(Self::OrderedCollectionPage)
        } else {
            None
        }
    }

    /// Whether this flavor is paginated via `next`.
    #[must_use]
    pub const fn is_page(self) -> bool {
        matches!(self, Self::CollectionPage | Self::OrderedCollectionPage)
    }

    /// The property its members live under.
    #[must_use]
    pub const fn items_property(self) -> &'static str {
        match self {
            Self::Collection | Self::CollectionPage => "items",
            Self::OrderedCollection | Self::OrderedCollectionPage => "orderedItems",
        }
    }
}

/// The IRI of a page's `next` page, whatever form it takes: an embedded
/// page's `id`, a link's `href`, or a bare IRI. Every hop is re-fetched
/// from that IRI, so an embedded page without an `id` ends the chain.
#[must_use]
pub fn next_cursor(page: &Node) -> Option<Url> {
    page.values("next").first().and_then(PropertyValue::iri)
}
