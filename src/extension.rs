//! Host-facing extension glue.
//!
//! The builder drives this extension through three hooks: config
//! initialization (patch the intersphinx mapping), missing-reference (build
//! an external link node), and signature post-processing (fix signal
//! signatures). [`QtDocExtension`] holds the per-build state those hooks
//! share: the selected variant and the binding detected at setup.

use anyhow::{Context, Result};
use log::info;

use crate::binding::{BindingProbe, DetectedBinding};
use crate::config::{patch_intersphinx_mapping, QtDocConfig};
use crate::domains::DomainRegistry;
use crate::error::QtDocError;
use crate::inventory::NamedInventories;
use crate::resolver::{self, RefRequest};
use crate::signature::{self, ClassSourceProvider, IntrospectedObject};

/// An external reference node for the host to splice into the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceNode {
    /// Absolute link target.
    pub refuri: String,
    /// Hover title naming the documentation source, e.g. `(in Qt6 v6.5.0)`.
    pub reftitle: String,
    /// Link text.
    pub text: String,
    /// Always `false`: these links leave the project.
    pub internal: bool,
}

/// The Qt documentation extension, one instance per build.
pub struct QtDocExtension {
    config: QtDocConfig,
    binding: DetectedBinding,
    domains: DomainRegistry,
}

impl QtDocExtension {
    /// Set up the extension: probe for an importable Qt binding and capture
    /// configuration. Fails when no binding is available, since neither hook
    /// can work without one.
    pub fn setup(config: QtDocConfig, probe: &dyn BindingProbe) -> Result<Self> {
        let binding = DetectedBinding::detect(probe)
            .context("qt documentation extension setup failed")?;
        info!(
            "qt documentation: linking against {} (Qt {})",
            config.qt_documentation, binding.qt_version
        );
        Ok(QtDocExtension {
            config,
            binding,
            domains: DomainRegistry::with_python_defaults(),
        })
    }

    /// Config-inited hook: make sure the selected variant's inventory is in
    /// the intersphinx mapping. Safe to call more than once.
    pub fn config_inited(&mut self) {
        patch_intersphinx_mapping(&mut self.config);
    }

    /// Missing-reference hook. `contnode_text` is the reference's rendered
    /// content, used verbatim when the reference carried an explicit title.
    ///
    /// # Errors
    ///
    /// Propagates [`QtDocError::UriParse`] from URI rewriting; a plain
    /// non-match is `Ok(None)`.
    pub fn missing_reference(
        &self,
        request: &RefRequest,
        contnode_text: &str,
        inventories: &NamedInventories,
    ) -> Result<Option<ReferenceNode>, QtDocError> {
        let Some(resolution) = resolver::resolve(
            request,
            &self.config,
            &self.binding.qt_version,
            inventories,
            &self.domains,
        )?
        else {
            return Ok(None);
        };
        let variant = self.config.qt_documentation;
        let reftitle = if resolution.version.is_empty() {
            format!("(in {})", variant)
        } else {
            format!("(in {} v{})", variant, resolution.version)
        };
        let text = if request.refexplicit {
            contnode_text.to_string()
        } else {
            resolution.display_name
        };
        Ok(Some(ReferenceNode {
            refuri: resolution.uri,
            reftitle,
            text,
            internal: false,
        }))
    }

    /// Autodoc signature hook; `None` keeps the host's default rendering.
    pub fn process_signature(
        &self,
        name: &str,
        obj: &IntrospectedObject,
        sources: &dyn ClassSourceProvider,
    ) -> Option<(String, Option<String>)> {
        signature::process_signature(&self.binding, name, obj, sources)
    }

    /// The configuration as patched so far.
    pub fn config(&self) -> &QtDocConfig {
        &self.config
    }

    /// The binding detected at setup.
    pub fn binding(&self) -> &DetectedBinding {
        &self.binding
    }

    /// Role registry consulted for "is this our reference" checks; the host
    /// may extend it with custom domains.
    pub fn domains_mut(&mut self) -> &mut DomainRegistry {
        &mut self.domains
    }
}
