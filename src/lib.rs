//! Sphinx Ultra Qt
//!
//! Qt documentation cross-reference extension for the sphinx-ultra
//! documentation builder. Resolves unresolved references against Qt binding
//! inventories (PySide2/6, PyQt5/6 and the C++ Qt 5/6 editions), recovers
//! declared signal signatures for API documentation, and wires the selected
//! edition's inventory into the intersphinx mapping at startup.

pub mod binding;
pub mod config;
pub mod domains;
pub mod error;
pub mod extension;
pub mod inventory;
pub mod resolver;
pub mod signature;
pub mod variant;

pub use binding::{BindingProbe, DetectedBinding};
pub use config::{patch_intersphinx_mapping, IntersphinxMapping, IntersphinxSource, QtDocConfig};
pub use domains::DomainRegistry;
pub use error::QtDocError;
pub use extension::{QtDocExtension, ReferenceNode};
pub use inventory::{Inventory, InventoryItem, NamedInventories};
pub use resolver::{resolve, RefRequest, Resolution};
pub use signature::{process_signature, ClassSourceProvider, IntrospectedObject};
pub use variant::{Binding, Variant};
