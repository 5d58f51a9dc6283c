use parking_lot::RwLock;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

type Entry = (&'static str, Arc<dyn Any + Send + Sync>);

/// Shared-access map holding at most one value per type.
#[derive(Default)]
pub(crate) struct TypeMap {
    entries: RwLock<HashMap<TypeId, Entry>>,
}

impl TypeMap {
    pub(crate) fn insert<T: Any + Send + Sync>(&self, value: T) {
        self.entries
            .write()
            .insert(TypeId::of::<T>(), (type_name::<T>(), Arc::new(value)));
    }

    pub(crate) fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        let entry = self.entries.read().get(&TypeId::of::<T>())?.1.clone();
        entry.downcast::<T>().ok()
    }

    pub(crate) fn contains<T: Any>(&self) -> bool {
        self.entries.read().contains_key(&TypeId::of::<T>())
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub(crate) fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.read().values().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names
    }
}
