//! Strategy registry
//!
//! Maps product kinds to factories producing their [`PricingStrategy`].
//! New kinds are added by registering a factory; no existing strategy has to
//! change.
//!
//! A process-wide registry, pre-seeded with the four built-in kinds, backs
//! the free functions [`register`], [`resolve_strategy`] and [`reset`]. It is
//! intended for single-writer, single-threaded use; the lock only makes the
//! global sound. Callers that want isolation build their own
//! [`StrategyRegistry`] and pass it explicitly.

use std::{
    fmt,
    sync::{Arc, LazyLock, PoisonError, RwLock},
};

use rustc_hash::FxHashMap;

use crate::{
    products::ProductKind,
    strategies::{
        DieselStrategy, EthanolStrategy, GasolineStrategy, LubricantStrategy, PricingStrategy,
        boxed,
    },
};

/// Shared factory producing a fresh strategy instance.
pub type StrategyFactory = Arc<dyn Fn() -> Box<dyn PricingStrategy> + Send + Sync>;

/// Table of strategy factories keyed by product kind.
#[derive(Clone)]
pub struct StrategyRegistry {
    factories: FxHashMap<ProductKind, StrategyFactory>,
}

impl StrategyRegistry {
    /// Create a registry with no kinds registered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            factories: FxHashMap::default(),
        }
    }

    /// Create a registry holding the four built-in kinds.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();

        registry.register(ProductKind::DIESEL, boxed::<DieselStrategy>);
        registry.register(ProductKind::GASOLINE, boxed::<GasolineStrategy>);
        registry.register(ProductKind::ETHANOL, boxed::<EthanolStrategy>);
        registry.register(ProductKind::LUBRICANT, boxed::<LubricantStrategy>);

        registry
    }

    /// Register a factory for a kind, replacing any factory already registered for it.
    pub fn register<F>(&mut self, kind: impl Into<ProductKind>, factory: F)
    where
        F: Fn() -> Box<dyn PricingStrategy> + Send + Sync + 'static,
    {
        self.factories.insert(kind.into(), Arc::new(factory));
    }

    /// Build a strategy for a kind, or `None` if the kind is not registered.
    pub fn resolve(&self, kind: &str) -> Option<Box<dyn PricingStrategy>> {
        self.factory(kind).map(|factory| factory())
    }

    /// The factory registered for a kind.
    pub fn factory(&self, kind: &str) -> Option<StrategyFactory> {
        self.factories.get(kind).cloned()
    }

    /// Returns true if the kind has a registered factory.
    pub fn contains(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    /// Registered kinds, sorted by key.
    pub fn kinds(&self) -> Vec<&ProductKind> {
        let mut kinds: Vec<&ProductKind> = self.factories.keys().collect();

        kinds.sort();

        kinds
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns true if no kind is registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

static GLOBAL: LazyLock<RwLock<StrategyRegistry>> =
    LazyLock::new(|| RwLock::new(StrategyRegistry::with_defaults()));

/// Register a factory in the process-wide registry. Last writer wins.
pub fn register<F>(kind: impl Into<ProductKind>, factory: F)
where
    F: Fn() -> Box<dyn PricingStrategy> + Send + Sync + 'static,
{
    let kind = kind.into();

    tracing::debug!(%kind, "registering pricing strategy");

    GLOBAL
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(kind, factory);
}

/// Build a strategy for a kind from the process-wide registry.
pub fn resolve_strategy(kind: &str) -> Option<Box<dyn PricingStrategy>> {
    // Release the lock before running the factory.
    let factory = GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .factory(kind)?;

    Some(factory())
}

/// Returns true if the process-wide registry knows the kind.
pub fn is_registered(kind: &str) -> bool {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .contains(kind)
}

/// Restore the process-wide registry to the four built-in kinds.
pub fn reset() {
    *GLOBAL.write().unwrap_or_else(PoisonError::into_inner) = StrategyRegistry::with_defaults();
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;

    #[derive(Debug, Default)]
    struct FlatStrategy;

    impl PricingStrategy for FlatStrategy {
        fn kind(&self) -> ProductKind {
            ProductKind::new("querosene")
        }

        fn compute_price(&self, quantity: u64) -> Decimal {
            dec!(1.5) * Decimal::from(quantity)
        }
    }

    #[test]
    fn defaults_hold_built_in_kinds() {
        let registry = StrategyRegistry::default();

        assert_eq!(registry.len(), 4);
        assert_eq!(
            registry.kinds(),
            [
                &ProductKind::DIESEL,
                &ProductKind::ETHANOL,
                &ProductKind::GASOLINE,
                &ProductKind::LUBRICANT,
            ]
        );
    }

    #[test]
    fn resolved_strategy_matches_kind() {
        let registry = StrategyRegistry::with_defaults();

        for kind in &ProductKind::BUILT_IN {
            let strategy = registry.resolve(kind.as_str());

            assert_eq!(strategy.map(|strategy| strategy.kind()).as_ref(), Some(kind));
        }
    }

    #[test]
    fn unknown_kind_does_not_resolve() {
        let registry = StrategyRegistry::with_defaults();

        assert!(registry.resolve("querosene").is_none());
        assert!(!registry.contains("querosene"));
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let registry = StrategyRegistry::empty();

        assert!(registry.is_empty());
        assert!(registry.resolve("diesel").is_none());
    }

    #[test]
    fn new_kind_can_be_registered() {
        let mut registry = StrategyRegistry::with_defaults();

        registry.register("querosene", boxed::<FlatStrategy>);

        let price = registry
            .resolve("querosene")
            .map(|strategy| strategy.compute_price(10));

        assert_eq!(price, Some(dec!(15)));
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn re_registration_replaces_factory() {
        let mut registry = StrategyRegistry::with_defaults();

        registry.register(ProductKind::DIESEL, boxed::<FlatStrategy>);

        let price = registry
            .resolve("diesel")
            .map(|strategy| strategy.compute_price(10));

        assert_eq!(price, Some(dec!(15)));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn debug_lists_kinds() {
        let output = format!("{:?}", StrategyRegistry::with_defaults());

        assert!(output.contains("diesel"));
        assert!(output.contains("lubrificante"));
    }
}
