//! Error types for the Qt documentation extension.

use thiserror::Error;

/// Errors surfaced by this extension.
///
/// An unresolved reference is never an error at this layer; hooks return
/// `Ok(None)` so the host can try its other resolvers. The variants below
/// cover the conditions that must not be swallowed silently.
#[derive(Debug, Error)]
pub enum QtDocError {
    /// No Qt binding package is importable in the documented project's
    /// Python environment. Fatal at extension setup.
    #[error("no Qt bindings found: install PySide6, PyQt6, PySide2 or PyQt5")]
    NoQtBindings,

    /// A Qt for Python documentation URI did not match the expected shape.
    /// Usually means the upstream documentation layout changed.
    #[error("cannot parse '{uri}' as a Qt for Python documentation uri")]
    UriParse {
        /// The URI that failed to parse.
        uri: String,
    },

    /// The `qt_documentation` config value names no known variant.
    #[error("unknown qt_documentation value '{name}', expected one of: Qt5, Qt6, PySide2, PySide6, PyQt5, PyQt6")]
    UnknownVariant {
        /// The rejected config value.
        name: String,
    },

    /// Underlying I/O error while reading a cached inventory.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// A cached inventory file could not be deserialized.
    #[error("inventory format: {0}")]
    InventoryFormat(#[from] serde_json::Error),
}
