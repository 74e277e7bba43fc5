//! Delivery preparation.
//!
//! Orchestrates recipient extraction, inbox resolution, self-delivery
//! suppression and blind-recipient stripping to produce the final list
//! of inbox URLs an outgoing activity must be POSTed to.

use std::collections::HashSet;

use fanout_common::AppResult;
use tracing::info;
use url::Url;

use crate::objects::{Node, ResolvedActor};
use crate::recipients::{
    ADDRESSING_PROPERTIES, BLIND_PROPERTIES, SENDER_PROPERTIES, extract_all_iris, is_public,
};
use crate::resolver::{Dereferencer, InboxResolver};

/// Prepares outgoing activities for federated delivery.
#[derive(Clone)]
pub struct DeliveryPreparer<D> {
    resolver: InboxResolver<D>,
}

impl<D: Dereferencer> DeliveryPreparer<D> {
    /// Create a preparer around an inbox resolver.
    pub const fn new(resolver: InboxResolver<D>) -> Self {
        Self { resolver }
    }

    /// Compute the final, ordered and deduplicated inbox list for an
    /// outgoing object, and strip its blind addressing fields.
    ///
    /// The strip happens last, only after resolution has fully
    /// succeeded, so a failed preparation never mutates the caller's
    /// object.
    pub async fn prepare(&self, obj: &mut Node) -> AppResult<Vec<Url>> {
        // Every addressing field, in field order, minus the Public
        // collection, which has no inbox and is never dereferenced.
        let recipients: Vec<Url> = extract_all_iris(obj, &ADDRESSING_PROPERTIES)
            .into_iter()
            .filter(|iri| !is_public(iri.as_str()))
            .collect();

        let targets = self.resolver.resolve(&recipients).await?;

        // The sender's own actors, resolved the same way; their inboxes
        // are suppressed from the output.
        let senders = extract_all_iris(obj, &SENDER_PROPERTIES);
        let own_inboxes: HashSet<Url> = self
            .resolver
            .resolve(&senders)
            .await?
            .into_iter()
            .filter_map(|actor| actor.inbox)
            .collect();

        let mut seen = HashSet::new();
        let inboxes: Vec<Url> = targets
            .into_iter()
            .filter_map(|actor: ResolvedActor| actor.inbox)
            .filter(|inbox| !own_inboxes.contains(inbox) && seen.insert(inbox.clone()))
            .collect();

        // Blind recipients must never appear in the transmitted payload.
        for prop in BLIND_PROPERTIES {
            obj.remove(prop);
        }

        info!(inbox_count = inboxes.len(), "Prepared delivery inboxes");
        Ok(inboxes)
    }
}
