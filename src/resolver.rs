//! Reference resolution against Qt documentation inventories.
//!
//! Turns an unresolved cross-reference into an external documentation link:
//! alias the target across binding-project namespaces, short-circuit signal
//! and slot identifiers to the per-variant overview page, then search the
//! best-matching inventory under a widened candidate list and rewrite the
//! matched URI for the selected output variant. Every miss is `Ok(None)` so
//! the host can fall through to its other resolvers.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::config::QtDocConfig;
use crate::domains::DomainRegistry;
use crate::error::QtDocError;
use crate::inventory::{Inventory, InventoryItem, NamedInventories};
use crate::variant::{Binding, Variant};

lazy_static! {
    /// Signal identifiers, optionally namespace-qualified and optionally
    /// carrying the PyQt naming prefix. The pattern is a documented contract;
    /// changing it silently breaks links.
    static ref SIGNAL_PATTERN: Regex =
        Regex::new(r"^((\w+\d?\.QtCore\.)|(QtCore\.)|(\.))?(pyqt)?Signal").unwrap();
    /// Slot identifiers, same shape as the signal pattern.
    static ref SLOT_PATTERN: Regex =
        Regex::new(r"^((\w+\d?\.QtCore\.)|(QtCore\.)|(\.))?(pyqt)?Slot").unwrap();
    /// Shape of a Qt for Python documentation URI: versioned host, slashed
    /// module path, dotted anchor.
    static ref PYSIDE_URI_PATTERN: Regex = Regex::new(
        r"^https://doc\.qt\.io/qtforpython(-[56])?/(?P<path>(PySide[26])(/\w+)+)\.html#(?P<anchor>(\w+\.)+(\w+))"
    )
    .unwrap();
}

/// Candidate source namespaces, searched in order when the target carries no
/// registered binding prefix.
const NAMESPACE_PRIORITY: [&str; 6] = ["Qt", "Qt6", "PyQt6", "PyQt5", "PySide2", "PySide6"];

/// An unresolved cross-reference, as handed over by the host's
/// missing-reference hook.
#[derive(Debug, Clone)]
pub struct RefRequest {
    /// Dotted target identifier.
    pub target: String,
    /// Role the reference was written with (`class`, `meth`, `any`, ...).
    pub reftype: String,
    /// Domain the role belongs to; absent for domainless references.
    pub refdomain: Option<String>,
    /// Whether the reference carried explicit display text.
    pub refexplicit: bool,
}

impl RefRequest {
    /// Request for a domain role reference.
    pub fn new(target: &str, reftype: &str, refdomain: &str) -> Self {
        RefRequest {
            target: target.to_string(),
            reftype: reftype.to_string(),
            refdomain: Some(refdomain.to_string()),
            refexplicit: false,
        }
    }
}

/// A resolved external documentation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Absolute URI on one of the known documentation hosts.
    pub uri: String,
    /// Text to display when the reference has no explicit title.
    pub display_name: String,
    /// Version label of the documentation source, possibly empty.
    pub version: String,
}

/// A match pulled out of an inventory, before output rewriting.
#[derive(Debug, Clone)]
struct InventoryHit {
    uri: String,
    display_name: String,
    version: String,
    /// The candidate name that matched, fully qualified.
    target_name: String,
    /// Matched object type without its `sip:`/`py:` prefix.
    object_type: String,
}

/// Resolve one unresolved reference.
///
/// `qt_version` labels signal/slot results; it comes from the binding probe.
///
/// # Errors
///
/// Returns [`QtDocError::UriParse`] when a matched Qt for Python URI does not
/// have the expected shape. Everything else that fails to match is `Ok(None)`.
pub fn resolve(
    request: &RefRequest,
    config: &QtDocConfig,
    qt_version: &str,
    inventories: &NamedInventories,
    domains: &DomainRegistry,
) -> Result<Option<Resolution>, QtDocError> {
    if request.reftype != "any" {
        // only objects in domains are in the inventory
        let Some(domain) = request.refdomain.as_deref().filter(|d| !d.is_empty()) else {
            return Ok(None);
        };
        match domains.objtypes_for_role(domain, &request.reftype) {
            Some(types) if !types.is_empty() => {}
            _ => return Ok(None),
        }
    }

    let variant = config.qt_documentation;
    let target = fix_target(&request.target, inventories);

    if SIGNAL_PATTERN.is_match(&target) {
        return Ok(Some(Resolution {
            uri: variant.signal_slot_uri().to_string(),
            display_name: variant.signal_name().to_string(),
            version: qt_version.to_string(),
        }));
    }
    if SLOT_PATTERN.is_match(&target) {
        return Ok(Some(Resolution {
            uri: variant.signal_slot_uri().to_string(),
            display_name: variant.slot_name().to_string(),
            version: qt_version.to_string(),
        }));
    }

    let Some(inventory) = inventory_for_target(&target, inventories) else {
        return Ok(None);
    };
    let Some(hit) = extract_from_inventory(&target, inventory, &request.reftype) else {
        return Ok(None);
    };
    debug!(
        "resolved {} as {} ({})",
        target, hit.target_name, hit.object_type
    );
    let uri = rewrite_uri(&hit, variant, &request.reftype)?;
    Ok(Some(Resolution {
        uri,
        display_name: hit.display_name,
        version: hit.version,
    }))
}

/// First dotted segment of a target.
fn head_of(target: &str) -> &str {
    target.split_once('.').map_or(target, |(head, _)| head)
}

/// Alias a binding-qualified target to the partner project's namespace when
/// only the partner's inventory is registered. The two binding projects of a
/// toolkit generation document near-identical APIs.
fn fix_target(target: &str, inventories: &NamedInventories) -> String {
    let head = head_of(target);
    if let Some(binding) = Binding::from_namespace(head) {
        let partner = binding.alias_partner();
        if !inventories.contains(binding.namespace()) && inventories.contains(partner.namespace())
        {
            debug!(
                "aliasing {} target to {}",
                binding.namespace(),
                partner.namespace()
            );
            return match target.split_once('.') {
                Some((_, tail)) => format!("{}.{}", partner.namespace(), tail),
                None => partner.namespace().to_string(),
            };
        }
    }
    target.to_string()
}

/// Pick the inventory to search. An explicitly qualified target uses its own
/// registered namespace; otherwise the first registered namespace in fixed
/// priority order wins.
fn inventory_for_target<'a>(
    target: &str,
    inventories: &'a NamedInventories,
) -> Option<&'a Inventory> {
    let head = head_of(target);
    if Binding::from_namespace(head).is_some() {
        if let Some(inventory) = inventories.get(head) {
            return Some(inventory);
        }
    }
    NAMESPACE_PRIORITY
        .iter()
        .find_map(|name| inventories.get(name))
}

/// Names the target may be documented under: bare, qualified by each binding
/// project, and qualified by each module the inventory lists (Qt for Python
/// inventories additionally double the module segment in anchors).
fn candidate_targets(target: &str, inventory: &Inventory) -> Vec<String> {
    let mut candidates = vec![target.to_string()];
    for namespace in ["PyQt5", "PySide2", "PyQt6", "PySide6"] {
        candidates.push(format!("{}.{}", namespace, target));
    }
    for module in inventory.module_names("sip:module") {
        candidates.push(format!("{}.{}", module, target));
    }
    for module in inventory.module_names("py:module") {
        candidates.push(format!("{}.{}", module, target));
    }
    for module in inventory.module_names("py:module") {
        candidates.push(format!("{}.{}.{}", module, module, target));
    }
    candidates
}

/// Inventory object types a role may match.
fn translate_reftype(reftype: &str) -> Vec<&str> {
    match reftype {
        "class" => vec!["class", "enum", "attribute"],
        "meth" => vec!["method", "signal"],
        "mod" => vec!["module"],
        other => vec![other],
    }
}

/// First inventory entry matching any candidate target under any translated
/// object type, with sentinel display names and doubled hashes cleaned up.
fn extract_from_inventory(
    target: &str,
    inventory: &Inventory,
    reftype: &str,
) -> Option<InventoryHit> {
    let candidates = candidate_targets(target, inventory);

    if reftype == "any" {
        // An :any: reference searches every object type the inventory knows.
        for (key, _) in inventory.iter() {
            let type_name = key.split_once(':').map_or(key, |(_, name)| name);
            if let Some(hit) = hit_for_type(target, inventory, key, type_name, &candidates) {
                return Some(hit);
            }
        }
        return None;
    }

    for type_name in translate_reftype(reftype) {
        let Some(key) = ["sip", "py"]
            .iter()
            .map(|prefix| format!("{}:{}", prefix, type_name))
            .find(|key| inventory.objects(key).is_some())
        else {
            continue;
        };
        if let Some(hit) = hit_for_type(target, inventory, &key, type_name, &candidates) {
            return Some(hit);
        }
    }
    None
}

/// Scan one object-type table for the first matching candidate.
fn hit_for_type(
    target: &str,
    inventory: &Inventory,
    key: &str,
    type_name: &str,
    candidates: &[String],
) -> Option<InventoryHit> {
    let objects = inventory.objects(key)?;
    for candidate in candidates {
        if let Some(item) = objects.get(candidate) {
            return Some(hit_from_item(target, candidate, type_name, item));
        }
    }
    None
}

fn hit_from_item(
    target: &str,
    target_name: &str,
    type_name: &str,
    item: &InventoryItem,
) -> InventoryHit {
    let display_name = if item.display_name.is_empty() || item.display_name == "-" {
        target.to_string()
    } else {
        item.display_name.clone()
    };
    InventoryHit {
        uri: item.uri.replace("##", "#"),
        display_name,
        version: item.version.clone(),
        target_name: target_name.to_string(),
        object_type: type_name.to_string(),
    }
}

/// Split a Qt for Python documentation URI into its page file name and the
/// anchor to keep. The anchor is dropped when it only restates the class.
///
/// # Errors
///
/// Returns [`QtDocError::UriParse`] when the URI does not match the expected
/// shape; upstream layout drift must not degrade into a silent non-match.
fn parse_pyside_uri(uri: &str) -> Result<(String, String), QtDocError> {
    let captures = PYSIDE_URI_PATTERN
        .captures(uri)
        .ok_or_else(|| QtDocError::UriParse {
            uri: uri.to_string(),
        })?;
    let path = &captures["path"];
    let uri_anchor = &captures["anchor"];
    let class_string = path.rsplit('/').next().unwrap_or(path);
    let anchor = if uri_anchor.ends_with(class_string) {
        String::new()
    } else {
        uri_anchor.rsplit('.').next().unwrap_or_default().to_string()
    };
    Ok((format!("{}.html", class_string.to_lowercase()), anchor))
}

/// Rewrite a matched URI for the selected output variant.
fn rewrite_uri(hit: &InventoryHit, variant: Variant, reftype: &str) -> Result<String, QtDocError> {
    match variant {
        Variant::Qt5 | Variant::Qt6 => {
            let host = match variant {
                Variant::Qt5 => "https://doc.qt.io/qt-5/",
                _ => "https://doc.qt.io/qt-6/",
            };
            if hit.uri.contains("riverbankcomputing") {
                let page = hit.uri.rsplit('/').next().unwrap_or(&hit.uri);
                let mut uri = format!("{}{}", host, page);
                if hit.object_type == "enum" {
                    uri.push_str("-enum");
                }
                Ok(uri)
            } else {
                let (page, anchor) = parse_pyside_uri(&hit.uri)?;
                if anchor.is_empty() {
                    Ok(format!("{}{}", host, page))
                } else {
                    Ok(format!("{}{}#{}", host, page, anchor))
                }
            }
        }
        Variant::PySide2 | Variant::PySide6 => {
            let namespace = variant.as_str();
            if hit.uri.contains(namespace) {
                return Ok(hit.uri.clone());
            }
            let parts: Vec<&str> = hit.target_name.split('.').skip(1).collect();
            if parts.is_empty() {
                // No module segments to rebuild a path from.
                return Ok(hit.uri.clone());
            }
            let html_name = if reftype == "meth" {
                let mut anchor_parts = vec![namespace, parts[0], namespace];
                anchor_parts.extend(&parts);
                format!(
                    "{}.html#{}",
                    parts[..parts.len() - 1].join("/"),
                    anchor_parts.join(".")
                )
            } else {
                format!("{}.html", parts.join("/"))
            };
            Ok(format!(
                "https://doc.qt.io/qtforpython/{}/{}",
                namespace, html_name
            ))
        }
        Variant::PyQt5 | Variant::PyQt6 => Ok(hit.uri.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InventoryItem;

    const RIVERBANK_QWIDGET: &str =
        "https://www.riverbankcomputing.com/static/Docs/PyQt5/api/qtwidgets/qwidget.html";
    const PYSIDE_QWIDGET: &str =
        "https://doc.qt.io/qtforpython/PySide6/QtWidgets/QWidget.html#PySide6.QtWidgets.QWidget";
    const PYSIDE_RECT: &str =
        "https://doc.qt.io/qtforpython/PySide6/QtWidgets/QWidget.html#PySide6.QtWidgets.QWidget.rect";

    /// Riverbank inventories use the sip domain and bare object names.
    fn pyqt5_inventory() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.insert(
            "sip:module",
            "QtWidgets",
            InventoryItem::new(
                "PyQt5",
                "5.15",
                "https://www.riverbankcomputing.com/static/Docs/PyQt5/api/qtwidgets/qtwidgets-module.html",
                "-",
            ),
        );
        inventory.insert(
            "sip:class",
            "QWidget",
            InventoryItem::new("PyQt5", "5.15", RIVERBANK_QWIDGET, "-"),
        );
        inventory.insert(
            "sip:method",
            "PyQt5.QtWidgets.QWidget.rect",
            InventoryItem::new(
                "PyQt5",
                "5.15",
                "https://www.riverbankcomputing.com/static/Docs/PyQt5/api/qtwidgets/qwidget.html#rect",
                "-",
            ),
        );
        inventory
    }

    /// Qt for Python inventories use the py domain and fully qualified names,
    /// with module listings qualified by the binding namespace.
    fn pyside6_inventory() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.insert(
            "py:module",
            "PySide6.QtWidgets",
            InventoryItem::new("QtForPython", "6.5", "https://doc.qt.io/qtforpython/", "-"),
        );
        inventory.insert(
            "py:class",
            "PySide6.QtWidgets.QWidget",
            InventoryItem::new("QtForPython", "6.5", PYSIDE_QWIDGET, "-"),
        );
        inventory.insert(
            "py:method",
            "PySide6.QtWidgets.QWidget.rect",
            InventoryItem::new("QtForPython", "6.5", PYSIDE_RECT, "-"),
        );
        inventory
    }

    fn registered(namespace: &str, inventory: Inventory) -> NamedInventories {
        let mut inventories = NamedInventories::new();
        inventories.register(namespace, inventory);
        inventories
    }

    fn resolve_class(
        target: &str,
        variant: Variant,
        inventories: &NamedInventories,
    ) -> Result<Option<Resolution>, QtDocError> {
        resolve(
            &RefRequest::new(target, "class", "py"),
            &QtDocConfig::with_variant(variant),
            "6.5.0",
            inventories,
            &DomainRegistry::with_python_defaults(),
        )
    }

    #[test]
    fn test_fix_target_aliases_when_only_partner_registered() {
        let inventories = registered("PyQt5", pyqt5_inventory());
        assert_eq!(
            fix_target("PySide2.QtWidgets.QWidget", &inventories),
            "PyQt5.QtWidgets.QWidget"
        );
        let inventories = registered("PySide6", pyside6_inventory());
        assert_eq!(
            fix_target("PyQt6.QtCore.QObject", &inventories),
            "PySide6.QtCore.QObject"
        );
    }

    #[test]
    fn test_fix_target_keeps_registered_namespace() {
        let inventories = registered("PyQt5", pyqt5_inventory());
        assert_eq!(
            fix_target("PyQt5.QtWidgets.QWidget", &inventories),
            "PyQt5.QtWidgets.QWidget"
        );
        assert_eq!(fix_target("QWidget", &inventories), "QWidget");
    }

    #[test]
    fn test_inventory_selection_prefers_explicit_prefix() {
        let mut inventories = registered("PyQt5", pyqt5_inventory());
        inventories.register("Qt", pyside6_inventory());
        let chosen = inventory_for_target("PyQt5.QtWidgets.QWidget", &inventories).unwrap();
        assert!(chosen.objects("sip:class").is_some());
    }

    #[test]
    fn test_inventory_selection_priority_order() {
        let mut inventories = registered("PySide6", pyside6_inventory());
        inventories.register("Qt", pyqt5_inventory());
        // Unqualified targets go to "Qt" first even when PySide6 exists.
        let chosen = inventory_for_target("QWidget", &inventories).unwrap();
        assert!(chosen.objects("sip:class").is_some());
        assert!(inventory_for_target("QWidget", &NamedInventories::new()).is_none());
    }

    #[test]
    fn test_candidate_targets_include_module_prefixes() {
        let candidates = candidate_targets("QWidget", &pyside6_inventory());
        assert!(candidates.contains(&"QWidget".to_string()));
        assert!(candidates.contains(&"PyQt6.QWidget".to_string()));
        assert!(candidates.contains(&"PySide6.QtWidgets.QWidget".to_string()));
        assert!(candidates.contains(&"PySide6.QtWidgets.PySide6.QtWidgets.QWidget".to_string()));
    }

    #[test]
    fn test_translate_reftype_table() {
        assert_eq!(translate_reftype("class"), vec!["class", "enum", "attribute"]);
        assert_eq!(translate_reftype("meth"), vec!["method", "signal"]);
        assert_eq!(translate_reftype("mod"), vec!["module"]);
        assert_eq!(translate_reftype("attr"), vec!["attr"]);
    }

    #[test]
    fn test_sentinel_display_name_replaced_with_target() {
        let inventories = registered("PyQt5", pyqt5_inventory());
        let resolution = resolve_class("QWidget", Variant::PyQt5, &inventories)
            .unwrap()
            .unwrap();
        assert_eq!(resolution.display_name, "QWidget");
    }

    #[test]
    fn test_doubled_anchor_hash_is_cleaned() {
        let mut inventory = pyside6_inventory();
        inventory.insert(
            "py:class",
            "PySide6.QtWidgets.QWidget",
            InventoryItem::new(
                "QtForPython",
                "6.5",
                "https://doc.qt.io/qtforpython/PySide6/QtWidgets/QWidget.html##PySide6.QtWidgets.QWidget",
                "-",
            ),
        );
        let inventories = registered("PySide6", inventory);
        let resolution = resolve_class("QWidget", Variant::PySide6, &inventories)
            .unwrap()
            .unwrap();
        assert!(!resolution.uri.contains("##"));
        assert!(resolution.uri.contains("#PySide6.QtWidgets.QWidget"));
    }

    #[test]
    fn test_parse_pyside_uri_class_shape_drops_anchor() {
        let (page, anchor) = parse_pyside_uri(PYSIDE_QWIDGET).unwrap();
        assert_eq!(page, "qwidget.html");
        assert_eq!(anchor, "");
    }

    #[test]
    fn test_parse_pyside_uri_method_shape_keeps_last_segment() {
        let (page, anchor) = parse_pyside_uri(PYSIDE_RECT).unwrap();
        assert_eq!(page, "qwidget.html");
        assert_eq!(anchor, "rect");
    }

    #[test]
    fn test_parse_pyside_uri_versioned_host() {
        let (page, anchor) = parse_pyside_uri(
            "https://doc.qt.io/qtforpython-5/PySide2/QtWidgets/QListWidget.html#PySide2.QtWidgets.QListWidget.itemDoubleClicked",
        )
        .unwrap();
        assert_eq!(page, "qlistwidget.html");
        assert_eq!(anchor, "itemDoubleClicked");
    }

    #[test]
    fn test_parse_pyside_uri_rejects_unknown_shape() {
        let err = parse_pyside_uri("https://doc.qt.io/qtforpython/weird.html").unwrap_err();
        assert!(matches!(err, QtDocError::UriParse { .. }));
        assert!(err.to_string().contains("weird.html"));
    }

    #[test]
    fn test_qt5_variant_rewrites_riverbank_uri() {
        let inventories = registered("PyQt5", pyqt5_inventory());
        let resolution = resolve_class("QWidget", Variant::Qt5, &inventories)
            .unwrap()
            .unwrap();
        assert_eq!(resolution.uri, "https://doc.qt.io/qt-5/qwidget.html");
    }

    #[test]
    fn test_qt6_variant_appends_enum_suffix() {
        let mut inventory = Inventory::new();
        inventory.insert(
            "sip:enum",
            "Qt.AlignmentFlag",
            InventoryItem::new(
                "PyQt6",
                "6.5",
                "https://www.riverbankcomputing.com/static/Docs/PyQt6/api/qtcore/qt.html",
                "-",
            ),
        );
        let inventories = registered("PyQt6", inventory);
        let resolution = resolve_class("Qt.AlignmentFlag", Variant::Qt6, &inventories)
            .unwrap()
            .unwrap();
        assert_eq!(resolution.uri, "https://doc.qt.io/qt-6/qt.html-enum");
    }

    #[test]
    fn test_qt6_variant_rewrites_pyside_uri() {
        let inventories = registered("PySide6", pyside6_inventory());
        let resolution = resolve_class("QWidget", Variant::Qt6, &inventories)
            .unwrap()
            .unwrap();
        assert_eq!(resolution.uri, "https://doc.qt.io/qt-6/qwidget.html");
    }

    #[test]
    fn test_pyside6_variant_rebuilds_method_anchor() {
        let inventories = registered("PyQt5", pyqt5_inventory());
        let resolution = resolve(
            &RefRequest::new("PyQt5.QtWidgets.QWidget.rect", "meth", "py"),
            &QtDocConfig::with_variant(Variant::PySide6),
            "6.5.0",
            &inventories,
            &DomainRegistry::with_python_defaults(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            resolution.uri,
            "https://doc.qt.io/qtforpython/PySide6/QtWidgets/QWidget.html#PySide6.QtWidgets.PySide6.QtWidgets.QWidget.rect"
        );
    }

    #[test]
    fn test_pyside_variant_keeps_native_uri() {
        let inventories = registered("PySide6", pyside6_inventory());
        let resolution = resolve_class("QWidget", Variant::PySide6, &inventories)
            .unwrap()
            .unwrap();
        assert_eq!(resolution.uri, PYSIDE_QWIDGET);
    }

    #[test]
    fn test_signal_reference_short_circuits_inventory() {
        let inventories = registered("PySide6", pyside6_inventory());
        for target in [
            "Signal",
            "QtCore.Signal",
            "PySide6.QtCore.Signal",
            ".Signal",
            "pyqtSignal",
        ] {
            let resolution = resolve_class(target, Variant::PySide6, &inventories)
                .unwrap()
                .unwrap();
            assert_eq!(
                resolution.uri,
                "https://doc.qt.io/qtforpython/overviews/signalsandslots.html",
                "target {} should hit the overview page",
                target
            );
            assert_eq!(resolution.display_name, "Signal");
            assert_eq!(resolution.version, "6.5.0");
        }
    }

    #[test]
    fn test_slot_reference_uses_slot_display_name() {
        let inventories = registered("PyQt6", Inventory::new());
        let resolution = resolve_class("QtCore.Slot", Variant::PyQt6, &inventories)
            .unwrap()
            .unwrap();
        assert_eq!(resolution.display_name, "pyqtSlot");
        assert_eq!(
            resolution.uri,
            "https://www.riverbankcomputing.com/static/Docs/PyQt6/signals_slots.html"
        );
    }

    #[test]
    fn test_missing_domain_is_not_our_reference() {
        let inventories = registered("PySide6", pyside6_inventory());
        let request = RefRequest {
            target: "QWidget".to_string(),
            reftype: "class".to_string(),
            refdomain: None,
            refexplicit: false,
        };
        let resolution = resolve(
            &request,
            &QtDocConfig::with_variant(Variant::PySide6),
            "6.5.0",
            &inventories,
            &DomainRegistry::with_python_defaults(),
        )
        .unwrap();
        assert!(resolution.is_none());
    }

    #[test]
    fn test_unknown_role_is_not_our_reference() {
        let inventories = registered("PySide6", pyside6_inventory());
        let resolution = resolve(
            &RefRequest::new("QWidget", "dir", "py"),
            &QtDocConfig::with_variant(Variant::PySide6),
            "6.5.0",
            &inventories,
            &DomainRegistry::with_python_defaults(),
        )
        .unwrap();
        assert!(resolution.is_none());
    }

    #[test]
    fn test_any_reference_searches_every_object_type() {
        let inventories = registered("PySide6", pyside6_inventory());
        let request = RefRequest {
            target: "PySide6.QtWidgets.QWidget.rect".to_string(),
            reftype: "any".to_string(),
            refdomain: None,
            refexplicit: false,
        };
        let resolution = resolve(
            &request,
            &QtDocConfig::with_variant(Variant::PySide6),
            "6.5.0",
            &inventories,
            &DomainRegistry::with_python_defaults(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(resolution.uri, PYSIDE_RECT);
    }

    #[test]
    fn test_unmatched_target_returns_none() {
        let inventories = registered("PySide6", pyside6_inventory());
        let resolution = resolve_class("QNotAClass", Variant::PySide6, &inventories).unwrap();
        assert!(resolution.is_none());
    }
}
