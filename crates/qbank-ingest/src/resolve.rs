//! One-time header resolution per uploaded file.

use std::collections::BTreeMap;

use qbank_model::CanonicalField;
use serde::Serialize;
use tracing::{debug, info};

use crate::synonyms::SYNONYMS;

/// Which header in the current file represents each canonical field.
///
/// Built once per file with [`HeaderResolution::resolve`] and reused for every row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderResolution {
    bindings: BTreeMap<CanonicalField, String>,
}

impl HeaderResolution {
    /// Binds headers to canonical fields by case-insensitive substring match.
    ///
    /// Headers are visited in file order and fields in table order. A header
    /// binds to the first field it matches. A later header matching the same
    /// field replaces the earlier binding.
    pub fn resolve(headers: &[String]) -> Self {
        let mut bindings = BTreeMap::new();
        for header in headers {
            let normalized = header.trim().to_lowercase();
            if normalized.is_empty() {
                continue;
            }
            let matched = SYNONYMS.iter().find(|(_, variants)| {
                variants
                    .iter()
                    .any(|variant| normalized.contains(variant))
            });
            if let Some((field, _)) = matched {
                if let Some(previous) = bindings.insert(*field, header.clone()) {
                    debug!(field = %field, previous = %previous, header = %header, "header binding replaced");
                } else {
                    debug!(field = %field, header = %header, "header bound");
                }
            }
        }
        info!(
            headers = headers.len(),
            bound = bindings.len(),
            "header resolution complete"
        );
        Self { bindings }
    }

    /// Header bound to `field`, if any.
    pub fn binding(&self, field: CanonicalField) -> Option<&str> {
        self.bindings.get(&field).map(String::as_str)
    }

    /// Bindings in canonical field order.
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &str)> {
        self.bindings
            .iter()
            .map(|(field, header)| (*field, header.as_str()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
