//! In-memory dereferencer for tests.

use async_trait::async_trait;
use fanout_common::{AppError, AppResult};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use url::Url;

use crate::resolver::Dereferencer;

/// A [`Dereferencer`] serving canned documents, with failure injection
/// and fetch recording.
#[derive(Default)]
pub struct MockDereferencer {
    docs: HashMap<String, Value>,
    failing: HashSet<String>,
    fetched: Mutex<Vec<String>>,
}

impl MockDereferencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_doc(mut self, url: &str, doc: Value) -> Self {
        self.docs.insert(url.to_string(), doc);
        self
    }

    /// Make fetches of `url` fail with a transport error.
    pub fn with_failure(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    /// Every URL fetched so far, in fetch order.
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetched.lock().unwrap().len()
    }
}

#[async_trait]
impl Dereferencer for MockDereferencer {
    async fn dereference(&self, iri: &Url) -> AppResult<Value> {
        self.fetched.lock().unwrap().push(iri.to_string());

        if self.failing.contains(iri.as_str()) {
            return Err(AppError::Federation(format!(
                "Request to {iri} returned status 502"
            )));
        }
        self.docs.get(iri.as_str()).cloned().ok_or_else(|| {
            AppError::Federation(format!("Request to {iri} returned status 404"))
        })
    }
}
