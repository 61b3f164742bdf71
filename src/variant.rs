//! Documentation source variants and their fixed lookup tables.
//!
//! A [`Variant`] names the external documentation edition the build links
//! against; a [`Binding`] names one of the four Python binding projects whose
//! namespaces appear in inventories and in cross-reference targets. The two
//! generic toolkit variants (`Qt5`, `Qt6`) have no namespace of their own and
//! borrow one binding project's inventory each.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QtDocError;

/// The documentation edition selected by the `qt_documentation` config value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Qt 5 C++ documentation on doc.qt.io.
    Qt5,
    /// Qt 6 C++ documentation on doc.qt.io.
    Qt6,
    /// Qt for Python 5 documentation.
    PySide2,
    /// Qt for Python 6 documentation.
    PySide6,
    /// Riverbank PyQt5 documentation.
    PyQt5,
    /// Riverbank PyQt6 documentation.
    PyQt6,
}

impl Variant {
    /// All variants, in config-documentation order.
    pub const ALL: [Variant; 6] = [
        Variant::Qt5,
        Variant::Qt6,
        Variant::PySide2,
        Variant::PySide6,
        Variant::PyQt5,
        Variant::PyQt6,
    ];

    /// The binding project whose inventory this variant is documented from.
    /// Generic toolkit variants alias one binding each.
    pub fn binding(self) -> Binding {
        match self {
            Variant::Qt5 => Binding::PyQt5,
            Variant::Qt6 => Binding::PyQt6,
            Variant::PySide2 => Binding::PySide2,
            Variant::PySide6 => Binding::PySide6,
            Variant::PyQt5 => Binding::PyQt5,
            Variant::PyQt6 => Binding::PyQt6,
        }
    }

    /// The signals-and-slots overview page for this edition. Signal and slot
    /// references link here instead of an inventory entry.
    pub fn signal_slot_uri(self) -> &'static str {
        match self {
            Variant::Qt5 => "https://doc.qt.io/qt-5/signalsandslots.html",
            Variant::Qt6 => "https://doc.qt.io/qt-6/signalsandslots.html",
            Variant::PySide2 | Variant::PySide6 => {
                "https://doc.qt.io/qtforpython/overviews/signalsandslots.html"
            }
            Variant::PyQt5 => {
                "https://www.riverbankcomputing.com/static/Docs/PyQt5/signals_slots.html"
            }
            Variant::PyQt6 => {
                "https://www.riverbankcomputing.com/static/Docs/PyQt6/signals_slots.html"
            }
        }
    }

    /// Display text for a resolved signal reference.
    pub fn signal_name(self) -> &'static str {
        match self {
            Variant::PyQt5 | Variant::PyQt6 => "pyqtSignal",
            _ => "Signal",
        }
    }

    /// Display text for a resolved slot reference.
    pub fn slot_name(self) -> &'static str {
        match self {
            Variant::PyQt5 | Variant::PyQt6 => "pyqtSlot",
            _ => "Slot",
        }
    }

    /// The variant name as it appears in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Qt5 => "Qt5",
            Variant::Qt6 => "Qt6",
            Variant::PySide2 => "PySide2",
            Variant::PySide6 => "PySide6",
            Variant::PyQt5 => "PyQt5",
            Variant::PyQt6 => "PyQt6",
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Variant::Qt6
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = QtDocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| QtDocError::UnknownVariant {
                name: s.to_string(),
            })
    }
}

/// One of the four Qt binding projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Binding {
    /// Qt for Python, Qt 5 generation.
    PySide2,
    /// Riverbank bindings, Qt 5 generation.
    PyQt5,
    /// Qt for Python, Qt 6 generation.
    PySide6,
    /// Riverbank bindings, Qt 6 generation.
    PyQt6,
}

impl Binding {
    /// All bindings, in probe order (newest generation first).
    pub const ALL: [Binding; 4] = [
        Binding::PySide6,
        Binding::PyQt6,
        Binding::PySide2,
        Binding::PyQt5,
    ];

    /// The Python namespace this binding's objects live under.
    pub fn namespace(self) -> &'static str {
        match self {
            Binding::PySide2 => "PySide2",
            Binding::PyQt5 => "PyQt5",
            Binding::PySide6 => "PySide6",
            Binding::PyQt6 => "PyQt6",
        }
    }

    /// Base URL of this binding's published intersphinx inventory.
    pub fn inventory_url(self) -> &'static str {
        match self {
            Binding::PySide6 => "https://doc.qt.io/qtforpython",
            Binding::PyQt6 => "https://www.riverbankcomputing.com/static/Docs/PyQt6",
            Binding::PySide2 => "https://doc.qt.io/qtforpython-5",
            Binding::PyQt5 => "https://www.riverbankcomputing.com/static/Docs/PyQt5",
        }
    }

    /// Name of the signal type exported by this binding's QtCore.
    pub fn signal_type(self) -> &'static str {
        match self {
            Binding::PyQt5 | Binding::PyQt6 => "pyqtSignal",
            Binding::PySide2 | Binding::PySide6 => "Signal",
        }
    }

    /// Name of the slot decorator exported by this binding's QtCore.
    pub fn slot_type(self) -> &'static str {
        match self {
            Binding::PyQt5 | Binding::PyQt6 => "pyqtSlot",
            Binding::PySide2 | Binding::PySide6 => "Slot",
        }
    }

    /// Dotted module path the signal type is defined in.
    pub fn qt_core_module(self) -> &'static str {
        match self {
            Binding::PySide2 => "PySide2.QtCore",
            Binding::PyQt5 => "PyQt5.QtCore",
            Binding::PySide6 => "PySide6.QtCore",
            Binding::PyQt6 => "PyQt6.QtCore",
        }
    }

    /// The binding documenting the near-identical API on the other side of
    /// the same toolkit generation. Targets qualified for one side resolve
    /// through the partner's inventory when only that one is registered.
    pub fn alias_partner(self) -> Binding {
        match self {
            Binding::PySide2 => Binding::PyQt5,
            Binding::PyQt5 => Binding::PySide2,
            Binding::PySide6 => Binding::PyQt6,
            Binding::PyQt6 => Binding::PySide6,
        }
    }

    /// Look up a binding by its namespace string.
    pub fn from_namespace(name: &str) -> Option<Binding> {
        Binding::ALL.into_iter().find(|b| b.namespace() == name)
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.namespace())
    }
}
