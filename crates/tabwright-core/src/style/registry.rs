//! Named style registry
//!
//! Every style a workbook uses ends up here under a name. Descriptors that
//! were never named get `"Custom Style {n}"`; registering the same `Arc` twice
//! hands back the same name.

use super::{Style, StyleAttributes};
use crate::cell::StyleRef;
use crate::error::{Error, Result};
use crate::DEFAULT_STYLE;
use ahash::AHashMap;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Identity of a shared descriptor (the address of its `Arc` allocation)
///
/// The registry keeps a clone of every registered `Arc`, so an address stays
/// unique for as long as it is in the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct StyleKey(usize);

impl StyleKey {
    fn of(style: &Arc<Style>) -> Self {
        StyleKey(Arc::as_ptr(style) as usize)
    }
}

/// Ordered table of named styles
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    /// Registered styles in registration order
    styles: Vec<(String, Arc<Style>)>,
    /// Name -> position in `styles`
    index_map: AHashMap<String, usize>,
    /// Descriptor identity -> name
    identities: AHashMap<StyleKey, String>,
    /// Next anonymous style number
    next_id: u32,
}

impl StyleRegistry {
    /// Create a registry holding only `DEFAULT_STYLE`
    pub fn new() -> Self {
        let mut registry = Self {
            styles: Vec::with_capacity(16),
            index_map: AHashMap::with_capacity(16),
            identities: AHashMap::with_capacity(16),
            next_id: 0,
        };
        registry.insert(DEFAULT_STYLE.to_string(), Arc::new(Style::default()));
        registry
    }

    fn insert(&mut self, name: String, style: Arc<Style>) {
        self.identities.insert(StyleKey::of(&style), name.clone());
        match self.index_map.get(&name) {
            Some(&idx) => {
                let previous = std::mem::replace(&mut self.styles[idx].1, style);
                if !Arc::ptr_eq(&previous, &self.styles[idx].1) {
                    self.forget_name(&previous, &name);
                }
            }
            None => {
                self.index_map.insert(name.clone(), self.styles.len());
                self.styles.push((name, style));
            }
        }
    }

    /// `previous` no longer lives under `name`; point its identity at another
    /// name still holding it, or drop it
    fn forget_name(&mut self, previous: &Arc<Style>, name: &str) {
        let key = StyleKey::of(previous);
        if self.identities.get(&key).map(String::as_str) != Some(name) {
            return;
        }
        match self
            .styles
            .iter()
            .find(|(_, stored)| Arc::ptr_eq(stored, previous))
        {
            Some((other, _)) => {
                let other = other.clone();
                self.identities.insert(key, other);
            }
            None => {
                self.identities.remove(&key);
            }
        }
    }

    /// Register a descriptor under an anonymous name, or return the name it already has
    ///
    /// Idempotent by identity: the same `Arc` always maps to the same name,
    /// while an equal but separately allocated descriptor gets a new one.
    pub fn register(&mut self, style: &Arc<Style>) -> String {
        if let Some(name) = self.identities.get(&StyleKey::of(style)) {
            return name.clone();
        }

        let name = loop {
            let candidate = format!("Custom Style {}", self.next_id);
            self.next_id += 1;
            if !self.index_map.contains_key(&candidate) {
                break candidate;
            }
        };
        self.insert(name.clone(), Arc::clone(style));
        name
    }

    /// Register a descriptor under a caller-chosen name
    ///
    /// The last registration of a name wins; overriding is logged, never rejected.
    pub fn register_named<S: Into<String>>(&mut self, name: S, style: Arc<Style>) {
        let name = name.into();
        if self.index_map.contains_key(&name) {
            tracing::warn!(style = %name, "style already registered, overriding style settings");
        }
        self.insert(name, style);
    }

    /// Look up a registered style by name
    pub fn resolve(&self, name: &str) -> Result<&Arc<Style>> {
        self.index_map
            .get(name)
            .map(|&idx| &self.styles[idx].1)
            .ok_or_else(|| Error::UnknownStyle(name.to_string()))
    }

    /// Name to emit for a cell's style handle
    ///
    /// Named handles must already be registered; inline descriptors are
    /// registered on the fly.
    pub fn resolve_ref(&mut self, style: &StyleRef) -> Result<String> {
        match style {
            StyleRef::Named(name) => {
                self.resolve(name)?;
                Ok(name.clone())
            }
            StyleRef::Inline(descriptor) => Ok(self.register(descriptor)),
        }
    }

    /// Check whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.index_map.contains_key(name)
    }

    /// Registered names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.iter().map(|(name, _)| name.as_str())
    }

    /// Get the number of registered styles, `DEFAULT_STYLE` included
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if only `DEFAULT_STYLE` is registered
    pub fn is_empty(&self) -> bool {
        self.styles.len() <= 1
    }

    /// Translate every registered style to its renderer attributes
    pub fn finalize(&self) -> BTreeMap<String, StyleAttributes> {
        self.styles
            .iter()
            .map(|(name, style)| (name.clone(), StyleAttributes::from(style.as_ref())))
            .collect()
    }

    /// Drop everything except `DEFAULT_STYLE` and restart anonymous numbering
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn test_default_style() {
        let registry = StyleRegistry::new();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve(DEFAULT_STYLE).unwrap().as_ref(), &Style::default());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_is_idempotent_by_identity() {
        let mut registry = StyleRegistry::new();

        let style1 = Arc::new(Style::new().bold(true));
        let style2 = Arc::new(Style::new().bold(true)); // equal content, separate allocation

        let name1 = registry.register(&style1);
        let again = registry.register(&Arc::clone(&style1));
        let name2 = registry.register(&style2);

        assert_eq!(name1, "Custom Style 0");
        assert_eq!(again, name1);
        assert_eq!(name2, "Custom Style 1");
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_anonymous_names_skip_taken_names() {
        let mut registry = StyleRegistry::new();
        registry.register_named("Custom Style 0", Arc::new(Style::new().italic(true)));

        let name = registry.register(&Arc::new(Style::new().bold(true)));
        assert_eq!(name, "Custom Style 1");
    }

    #[test]
    fn test_named_registration_overrides() {
        let mut registry = StyleRegistry::new();
        registry.register_named("header", Arc::new(Style::new().bold(true)));
        registry.register_named("header", Arc::new(Style::new().fill_color(Color::RED)));

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.resolve("header").unwrap().as_ref(),
            &Style::new().fill_color(Color::RED)
        );
    }

    #[test]
    fn test_named_descriptor_keeps_its_name_inline() {
        let mut registry = StyleRegistry::new();
        let header = Arc::new(Style::new().bold(true));
        registry.register_named("header", Arc::clone(&header));

        assert_eq!(
            registry.resolve_ref(&StyleRef::Inline(header)).unwrap(),
            "header"
        );
    }

    #[test]
    fn test_override_keeps_anonymous_name() {
        let mut registry = StyleRegistry::new();
        let shared = Arc::new(Style::new().bold(true));

        let first = registry.register(&shared);
        registry.register_named("header", Arc::clone(&shared));
        registry.register_named("header", Arc::new(Style::new().italic(true)));

        assert_eq!(registry.register(&shared), first);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_override_drops_unstored_identity() {
        let mut registry = StyleRegistry::new();
        let bold = Arc::new(Style::new().bold(true));
        registry.register_named("header", Arc::clone(&bold));
        registry.register_named("header", Arc::new(Style::new().italic(true)));

        assert_eq!(registry.register(&bold), "Custom Style 0");
        assert_eq!(registry.resolve("Custom Style 0").unwrap(), &bold);
    }

    #[test]
    fn test_resolve_unknown() {
        let mut registry = StyleRegistry::new();
        assert!(matches!(registry.resolve("nope"), Err(Error::UnknownStyle(_))));
        assert!(matches!(
            registry.resolve_ref(&StyleRef::named("nope")),
            Err(Error::UnknownStyle(name)) if name == "nope"
        ));
    }

    #[test]
    fn test_finalize_and_reset() {
        let mut registry = StyleRegistry::new();
        registry.register_named("money", Arc::new(Style::new().number_format("#,##0.00")));
        registry.register(&Arc::new(Style::new().italic(true)));

        let finalized = registry.finalize();
        assert_eq!(
            finalized.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["Custom Style 0", "DEFAULT_STYLE", "money"]
        );
        assert_eq!(finalized["money"].custom_num_fmt, "#,##0.00");
        assert_eq!(finalized[DEFAULT_STYLE].custom_num_fmt, "general");

        registry.reset();
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains("money"));
        assert_eq!(
            registry.register(&Arc::new(Style::new())),
            "Custom Style 0"
        );
    }
}
