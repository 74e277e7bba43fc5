//! Inbox resolution.
//!
//! Expands a list of addressed IRIs into concrete actors by
//! dereferencing each one and recursing into any collection it turns out
//! to be, under a depth budget that bounds traversal across federated
//! servers. Dereferences are strictly sequential and the output actor
//! list follows input order.

use async_trait::async_trait;
use fanout_common::AppResult;
use futures::future::BoxFuture;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::objects::{CollectionKind, Node, ResolvedActor, next_cursor};
use crate::recipients::extract_iris;

/// Upper bound on `next` hops along a single page chain.
const MAX_PAGE_FOLLOWS: usize = 64;

/// The network seam used during resolution.
#[async_trait]
pub trait Dereferencer: Send + Sync {
    /// GET the IRI with ActivityStreams content negotiation, requiring
    /// HTTP 200, and parse the body as JSON.
    async fn dereference(&self, iri: &Url) -> AppResult<Value>;
}

#[async_trait]
impl<'a, D: Dereferencer + ?Sized> Dereferencer for &'a D {
    async fn dereference(&self, iri: &Url) -> AppResult<Value> {
        (**self).dereference(iri).await
    }
}

/// Resolves addressed IRIs to actors with their inbox endpoints.
///
/// Holds no mutable state; independent callers may share one resolver.
#[derive(Clone)]
pub struct InboxResolver<D> {
    dereferencer: D,
    max_depth: u32,
}

impl<D: Dereferencer> InboxResolver<D> {
    /// Create a resolver with the given depth budget.
    pub const fn new(dereferencer: D, max_depth: u32) -> Self {
        Self {
            dereferencer,
            max_depth,
        }
    }

    /// Resolve a list of IRIs to concrete actors, in input order.
    ///
    /// Any transport or parse failure anywhere in the recursion aborts
    /// the whole call with that error; there is no partial result. A
    /// partially delivered send is worse than a failed one the caller
    /// can retry whole.
    pub async fn resolve(&self, iris: &[Url]) -> AppResult<Vec<ResolvedActor>> {
        self.resolve_at_depth(iris, 0).await
    }

    fn resolve_at_depth<'a>(
        &'a self,
        iris: &'a [Url],
        depth: u32,
    ) -> BoxFuture<'a, AppResult<Vec<ResolvedActor>>> {
        Box::pin(async move {
            // Soft cutoff: an exhausted budget yields nothing, it does
            // not fail. Checked before any network round trip.
            if depth >= self.max_depth {
                if !iris.is_empty() {
                    debug!(depth, count = iris.len(), "Depth budget exhausted, dropping branch");
                }
                return Ok(Vec::new());
            }

            let mut actors = Vec::new();
            for iri in iris {
                let json = self.dereferencer.dereference(iri).await?;
                let node = Node::from_json(json)?;

                if let Some(actor) = ResolvedActor::from_node(&node) {
                    actors.push(actor);
                } else if let Some(kind) = CollectionKind::of(&node) {
                    let item_iris = self.collect_items(node, kind).await?;
                    let nested = self.resolve_at_depth(&item_iris, depth + 1).await?;
                    actors.extend(nested);
                } else {
                    warn!(iri = %iri, kinds = ?node.kinds(), "Unsupported document, dropping recipient");
                }
            }

            Ok(actors)
        })
    }

    /// Gather member IRIs from a collection, walking a page's `next`
    /// chain to exhaustion and accumulating the items of every visited
    /// page.
    async fn collect_items(&self, first: Node, kind: CollectionKind) -> AppResult<Vec<Url>> {
        let mut items = extract_iris(&first, kind.items_property());
        if !kind.is_page() {
            return Ok(items);
        }

        let mut cursor = next_cursor(&first);
        let mut follows = 0;
        while let Some(next_iri) = cursor {
            if follows >= MAX_PAGE_FOLLOWS {
                warn!(iri = %next_iri, "Page chain exceeds follow cap, stopping");
                break;
            }
            follows += 1;

            let json = self.dereferencer.dereference(&next_iri).await?;
            let page = Node::from_json(json)?;
            let Some(page_kind) = CollectionKind::of(&page) else {
                warn!(iri = %next_iri, "next did not lead to a collection, stopping");
                break;
            };

            items.extend(extract_iris(&page, page_kind.items_property()));
            cursor = if page_kind.is_page() {
                next_cursor(&page)
            } else {
                None
            };
        }

        Ok(items)
    }
}
