use super::type_map::TypeMap;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Invocation-tracking feature every fake context is seeded with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationFeature {
    pub invocation_id: String,
}

/// Per-invocation features, keyed by type.
///
/// Holds at most one instance per type; `set` overwrites any earlier instance
/// of the same type. Reads and writes go through `&self` so the registry can
/// live inside a shared context.
#[derive(Default)]
pub struct FeatureRegistry {
    features: TypeMap,
}

impl FeatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<T: Any + Send + Sync>(&self, instance: T) {
        self.features.insert(instance);
    }

    /// The registered instance of `T`, or `None` if nothing was set.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.features.get::<T>()
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.features.contains::<T>()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Type names of the registered features, sorted.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.features.type_names()
    }
}

impl fmt::Debug for FeatureRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
