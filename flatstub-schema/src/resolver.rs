//! Typedef alias resolution.
//!
//! Resolution is single-hop: an alias maps to its declared underlying type,
//! which is not looked up again even when it is itself an alias.

use crate::types::Typedef;
use std::collections::HashMap;

/// Mapping from alias names to underlying type names, built once per run.
#[derive(Debug, Clone, Default)]
pub struct TypeMap {
    aliases: HashMap<String, String>,
}

impl TypeMap {
    /// Builds the map from typedefs in declaration order.
    ///
    /// When a name is declared more than once the first declaration wins.
    #[must_use]
    pub fn from_typedefs(typedefs: &[Typedef]) -> Self {
        let mut aliases = HashMap::with_capacity(typedefs.len());
        for td in typedefs {
            aliases
                .entry(td.name.clone())
                .or_insert_with(|| td.underlying_type.clone());
        }
        Self { aliases }
    }

    /// Resolves a type name to its canonical form.
    ///
    /// Names that are not aliases resolve to themselves.
    #[must_use]
    pub fn resolve<'a>(&'a self, type_name: &'a str) -> &'a str {
        self.get(type_name).unwrap_or(type_name)
    }

    /// Returns the underlying type of an alias.
    #[must_use]
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// Returns true if the name is a known alias.
    #[must_use]
    pub fn contains(&self, alias: &str) -> bool {
        self.aliases.contains_key(alias)
    }

    /// Number of distinct aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Returns true if there are no aliases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_alias() {
        let map = TypeMap::from_typedefs(&[
            Typedef::new("HSteamPipe", "int"),
            Typedef::new("AppId_t", "unsigned int"),
        ]);
        assert_eq!(map.resolve("HSteamPipe"), "int");
        assert_eq!(map.resolve("AppId_t"), "unsigned int");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_resolve_identity_fallback() {
        let map = TypeMap::from_typedefs(&[Typedef::new("HSteamPipe", "int")]);
        assert_eq!(map.resolve("bool"), "bool");
        assert_eq!(map.resolve("ISteamUser *"), "ISteamUser *");
        assert!(!map.contains("bool"));
    }

    #[test]
    fn test_resolve_is_single_hop() {
        let map = TypeMap::from_typedefs(&[Typedef::new("A", "B"), Typedef::new("B", "C")]);
        assert_eq!(map.resolve("A"), "B");
        assert_eq!(map.resolve("B"), "C");
    }

    #[test]
    fn test_first_declaration_wins() {
        let map = TypeMap::from_typedefs(&[
            Typedef::new("SteamAPICall_t", "unsigned long long"),
            Typedef::new("SteamAPICall_t", "int"),
        ]);
        assert_eq!(map.resolve("SteamAPICall_t"), "unsigned long long");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_empty_map() {
        let map = TypeMap::default();
        assert!(map.is_empty());
        assert_eq!(map.resolve("int"), "int");
        assert_eq!(map.get("int"), None);
    }
}
