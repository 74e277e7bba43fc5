//! `ActivityPub` delivery core for fanout-rs.
//!
//! Given an outgoing activity, this crate determines the final set of
//! remote inbox URLs it must be POSTed to:
//!
//! - **Objects**: a generic map-backed JSON-LD document model
//! - **Recipients**: IRI extraction from `to`/`bto`/`cc`/`bcc`/`audience`
//! - **Resolver**: depth-bounded recursive expansion of addressed
//!   collections into concrete actors
//! - **Delivery**: self-delivery suppression, deduplication and
//!   blind-recipient stripping
//! - **Client**: GET/POST against remote IRIs with ActivityStreams
//!   content negotiation
//! - **Activities**: wrapping bare objects in `Create` activities
//!
//! # ActivityPub Compliance
//!
//! Addressing and delivery follow the W3C ActivityPub specification,
//! sections 6 and 7. Blind recipients are never transmitted, the Public
//! collection is never dereferenced, and collection expansion is bounded
//! by a configured depth budget.

pub mod activities;
pub mod client;
pub mod delivery;
pub mod objects;
pub mod recipients;
pub mod resolver;

#[cfg(test)]
pub(crate) mod testing;

pub use activities::wrap_in_create;
pub use client::{
    ACTIVITY_STREAMS_MEDIA_TYPE, ApClient, ApClientError, is_activity_stream_media_type,
};
pub use delivery::DeliveryPreparer;
pub use objects::{ACTOR_KINDS, ApLink, CollectionKind, Node, PropertyValue, ResolvedActor};
pub use recipients::{
    ADDRESSING_PROPERTIES, BLIND_PROPERTIES, PUBLIC_IRI, SENDER_PROPERTIES, extract_all_iris,
    extract_iris, is_public,
};
pub use resolver::{Dereferencer, InboxResolver};
