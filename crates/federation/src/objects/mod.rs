//! Typed views over JSON-LD documents.
//!
//! The document model is deliberately generic: one map-backed [`Node`]
//! plus a per-slot [`PropertyValue`] sum type, with thin actor and
//! collection views on top, instead of a concrete struct per
//! ActivityStreams type.

pub mod actor;
pub mod collection;
pub mod node;

pub use actor::{ACTOR_KINDS, ResolvedActor};
pub use collection::{CollectionKind, next_cursor};
pub use node::{ApLink, Node, PropertyValue};
