//! Startup probe for the active Qt binding.
//!
//! Signature rewriting needs to know which binding project is importable in
//! the documented project's Python environment: its signal type is what
//! autodoc hands over, and its Qt version labels signal/slot references.
//! The host's Python-integration layer owns the actual imports and exposes
//! them through [`BindingProbe`]; this module only decides the probe order
//! and makes a missing binding a hard setup failure instead of a deferred
//! one.

use log::debug;

use crate::error::QtDocError;
use crate::variant::Binding;

/// Capability handle into the documented project's Python environment,
/// implemented by the host.
pub trait BindingProbe {
    /// Returns the Qt version string if `binding`'s QtCore module is
    /// importable, `None` otherwise.
    fn qt_core_version(&self, binding: Binding) -> Option<String>;
}

/// The binding project found at setup, with the Qt version it reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedBinding {
    /// Which binding project answered the probe.
    pub binding: Binding,
    /// Qt version string reported by that binding's QtCore.
    pub qt_version: String,
}

impl DetectedBinding {
    /// Probe for an importable binding, newest generation first.
    ///
    /// # Errors
    ///
    /// Returns [`QtDocError::NoQtBindings`] when no binding project is
    /// importable; extension setup must abort on this.
    pub fn detect(probe: &dyn BindingProbe) -> Result<Self, QtDocError> {
        for binding in Binding::ALL {
            if let Some(qt_version) = probe.qt_core_version(binding) {
                debug!(
                    "detected Qt binding {} (Qt {})",
                    binding.namespace(),
                    qt_version
                );
                return Ok(DetectedBinding {
                    binding,
                    qt_version,
                });
            }
        }
        Err(QtDocError::NoQtBindings)
    }

    /// Name of the signal type autodoc encounters (`Signal` or `pyqtSignal`).
    pub fn signal_type(&self) -> &'static str {
        self.binding.signal_type()
    }

    /// Regex fragment matching every namespace qualification the signal type
    /// may carry in a class body: for `PySide6.QtCore` this is
    /// `(?:PySide6\.QtCore\.)?(?:QtCore\.)?`.
    pub fn signal_prefixes_pattern(&self) -> String {
        let module = self.binding.qt_core_module();
        let parts: Vec<&str> = module.split('.').collect();
        (0..parts.len())
            .map(|i| format!(r"(?:{}\.)?", regex::escape(&parts[i..].join("."))))
            .collect()
    }

    /// Whether a runtime type name refers to the detected binding's signal
    /// type, qualified or bare.
    pub fn is_signal_type(&self, type_name: &str) -> bool {
        type_name == self.signal_type()
            || type_name == format!("{}.{}", self.binding.qt_core_module(), self.signal_type())
    }
}
