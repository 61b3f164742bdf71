//! Declared-signature recovery for Qt signal attributes.
//!
//! Introspecting a signal attribute yields an opaque instance; the parameter
//! list its author wrote is only visible in the class body. This module scans
//! the declaring class's source text for the `name = Signal(...)` assignment
//! and returns the literal argument list as the displayed signature. Source
//! access stays host-owned behind [`ClassSourceProvider`].

use log::debug;
use regex::Regex;

use crate::binding::DetectedBinding;

/// Source access into the documented project, implemented by the host's
/// Python introspection layer.
pub trait ClassSourceProvider {
    /// Source text of `class_name` as defined in `module`, if available.
    fn class_source(&self, module: &str, class_name: &str) -> Option<String>;
}

/// An introspected attribute as handed over by the host's API-doc generator.
#[derive(Debug, Clone)]
pub struct IntrospectedObject {
    /// Fully qualified or bare type name of the runtime object.
    pub type_name: String,
    /// Stringified overload signatures, each starting with the attribute
    /// name (`valueChanged(int)` style).
    pub signatures: Vec<String>,
}

/// Rewrite the displayed signature of a signal attribute.
///
/// `name` is the fully qualified attribute (`package.module.Class.attr`).
/// Returns `None` for anything that is not the active binding's signal type,
/// or when the name is too short to split; the host keeps its default
/// behavior. The returned tuple is `(signature, return_annotation)` with the
/// annotation always suppressed.
pub fn process_signature(
    binding: &DetectedBinding,
    name: &str,
    obj: &IntrospectedObject,
    sources: &dyn ClassSourceProvider,
) -> Option<(String, Option<String>)> {
    if !binding.is_signal_type(&obj.type_name) {
        return None;
    }
    let (module_class, attr) = name.rsplit_once('.')?;
    let (module, class_name) = module_class.rsplit_once('.')?;

    if let Some(source) = sources.class_source(module, class_name) {
        if let Some(args) = declared_signal_args(binding, attr, &source) {
            return Some((args, None));
        }
        debug!("no declaration of signal {} found in {}", attr, module_class);
    }

    // Signal defined dynamically or on a class without source; fall back to
    // the introspected overloads, stripping the attribute-name prefix.
    let stripped: Vec<&str> = obj
        .signatures
        .iter()
        .map(|sig| sig.get(attr.len()..).unwrap_or(""))
        .collect();
    Some((stripped.join(", "), None))
}

/// Find the literal argument list of `attr = Signal(...)` in a class body,
/// allowing any namespace qualification of the signal type.
fn declared_signal_args(binding: &DetectedBinding, attr: &str, source: &str) -> Option<String> {
    let pattern = format!(
        r" +{} *= *{}{}(\([^)]*\))",
        regex::escape(attr),
        binding.signal_prefixes_pattern(),
        binding.signal_type()
    );
    let re = Regex::new(&pattern).ok()?;
    re.captures(source)
        .and_then(|captures| captures.get(1))
        .map(|args| args.as_str().to_string())
}
