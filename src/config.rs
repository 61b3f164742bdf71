//! Extension configuration and intersphinx mapping patching.

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::variant::Variant;

/// One entry in the host's intersphinx mapping: the documentation base URL
/// plus an optional explicit inventory location (`None` means the default
/// `objects.inv` under the base URL).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntersphinxSource {
    /// Base URL of the external documentation.
    pub url: String,
    /// Explicit inventory location, if the default is not wanted.
    pub inventory: Option<String>,
}

impl IntersphinxSource {
    /// Entry pointing at the default inventory location under `url`.
    pub fn new(url: &str) -> Self {
        IntersphinxSource {
            url: url.to_string(),
            inventory: None,
        }
    }
}

/// Namespace-keyed mapping of external documentation sources, owned by the
/// host configuration.
pub type IntersphinxMapping = IndexMap<String, IntersphinxSource>;

/// Configuration state this extension reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QtDocConfig {
    /// Selected documentation edition (`qt_documentation` config value).
    #[serde(default)]
    pub qt_documentation: Variant,
    /// The host's intersphinx mapping; `None` when the host has not created
    /// one yet.
    #[serde(default)]
    pub intersphinx_mapping: Option<IntersphinxMapping>,
}

impl QtDocConfig {
    /// Configuration for one variant with no intersphinx mapping yet.
    pub fn with_variant(variant: Variant) -> Self {
        QtDocConfig {
            qt_documentation: variant,
            intersphinx_mapping: None,
        }
    }
}

/// Make sure the selected variant's inventory will be fetched.
///
/// Resolves the variant to its binding-project namespace and inserts that
/// namespace's inventory URL into the host mapping. A user-supplied entry for
/// the namespace always wins; calling this twice changes nothing.
pub fn patch_intersphinx_mapping(config: &mut QtDocConfig) {
    let binding = config.qt_documentation.binding();
    let mapping = config
        .intersphinx_mapping
        .get_or_insert_with(IndexMap::new);
    if !mapping.contains_key(binding.namespace()) {
        debug!(
            "registering intersphinx source {} -> {}",
            binding.namespace(),
            binding.inventory_url()
        );
        mapping.insert(
            binding.namespace().to_string(),
            IntersphinxSource::new(binding.inventory_url()),
        );
    }
}
