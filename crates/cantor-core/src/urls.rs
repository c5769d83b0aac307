//! Slug to video URL lookup table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Video URLs keyed by entry slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlIndex {
    urls: HashMap<String, String>,
}

impl UrlIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the URL stored under `slug`.
    pub fn get(&self, slug: &str) -> Option<&str> {
        self.urls.get(slug).map(String::as_str)
    }

    pub fn insert(&mut self, slug: impl Into<String>, url: impl Into<String>) {
        self.urls.insert(slug.into(), url.into());
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for UrlIndex
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            urls: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
