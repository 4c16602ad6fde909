use std::sync::Arc;

use dashmap::DashMap;
use log::trace;
use regex::Regex;
use thiserror::Error;

use crate::regex_util::Anchoring;

#[derive(Debug, PartialEq, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Compiled patterns keyed by declared source and anchoring.
///
/// The same source is often declared both as an NDC prefix and as a
/// full-match veto, so the anchoring is part of the key and the anchors
/// are only added here, right before compiling.
pub struct RegexCache {
    compiled: DashMap<(Anchoring, String), Arc<Regex>>,
}

impl RegexCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            compiled: DashMap::with_capacity(capacity),
        }
    }

    /// Returns the compiled form of `source` under `anchoring`, compiling it
    /// on first use. A failed compilation leaves nothing behind.
    pub fn anchored(
        &self,
        source: &str,
        anchoring: Anchoring,
    ) -> Result<Arc<Regex>, InvalidRegexError> {
        let entry = self
            .compiled
            .entry((anchoring, source.to_owned()))
            .or_try_insert_with(|| {
                let anchored = anchor(source, anchoring);
                trace!("Compiling pattern '{}'", anchored);
                Regex::new(&anchored).map(Arc::new)
            })?;
        Ok(Arc::clone(entry.value()))
    }

    #[cfg(test)]
    fn compiled_count(&self) -> usize {
        self.compiled.len()
    }
}

/// `^(?:src)` or `^(?:src)$`. The non-capturing wrapper keeps the group
/// numbering of `src` and scopes top-level alternations inside the anchors.
fn anchor(source: &str, anchoring: Anchoring) -> String {
    match anchoring {
        Anchoring::Prefix => fast_cat::concat_str!("^(?:", source, ")"),
        Anchoring::Full => fast_cat::concat_str!("^(?:", source, ")$"),
    }
}
