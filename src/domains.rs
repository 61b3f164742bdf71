//! Role lookup for the host's domain system.
//!
//! The resolver only claims a reference when its role can produce inventory
//! object types; everything else is someone else's reference. This registry
//! is the narrow slice of the host's domain model that decision needs: which
//! object types each role of each domain can resolve to.

use indexmap::IndexMap;

/// Registry of role to object-type mappings, per domain.
#[derive(Debug, Clone, Default)]
pub struct DomainRegistry {
    roles: IndexMap<String, IndexMap<String, Vec<String>>>,
}

impl DomainRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        DomainRegistry::default()
    }

    /// Registry preloaded with the standard Python domain roles, the set the
    /// host wires up for autodoc output.
    pub fn with_python_defaults() -> Self {
        let mut registry = DomainRegistry::new();
        registry.register_role("py", "class", &["class", "exception"]);
        registry.register_role("py", "exc", &["exception"]);
        registry.register_role("py", "func", &["function"]);
        registry.register_role("py", "meth", &["method"]);
        registry.register_role("py", "attr", &["attribute", "property"]);
        registry.register_role("py", "data", &["data"]);
        registry.register_role("py", "mod", &["module"]);
        registry.register_role(
            "py",
            "obj",
            &[
                "class",
                "exception",
                "function",
                "method",
                "attribute",
                "property",
                "data",
                "module",
            ],
        );
        registry
    }

    /// Record the object types a role can resolve to.
    pub fn register_role(&mut self, domain: &str, role: &str, object_types: &[&str]) {
        self.roles.entry(domain.to_string()).or_default().insert(
            role.to_string(),
            object_types.iter().map(|t| (*t).to_string()).collect(),
        );
    }

    /// Object types for a role, `None` when the domain or role is unknown.
    pub fn objtypes_for_role(&self, domain: &str, role: &str) -> Option<&[String]> {
        self.roles
            .get(domain)
            .and_then(|roles| roles.get(role))
            .map(Vec::as_slice)
    }
}
