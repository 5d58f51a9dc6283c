use super::type_map::TypeMap;
use crate::serializer::{JsonObjectSerializer, ObjectSerializer};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Worker-wide options handlers resolve from the instance services.
#[derive(Debug, Clone)]
pub struct WorkerOptions {
    pub serializer: Arc<dyn ObjectSerializer>,
}

impl Default for WorkerOptions {
    fn default() -> Self {
        Self {
            serializer: Arc::new(JsonObjectSerializer::new()),
        }
    }
}

/// Dependency-resolution scope of an invocation, one service per type.
#[derive(Default)]
pub struct InstanceServices {
    services: TypeMap,
}

impl InstanceServices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Services pre-registered with `WorkerOptions` for `serializer`.
    pub fn with_serializer(serializer: Arc<dyn ObjectSerializer>) -> Self {
        let services = Self::new();
        services.register(WorkerOptions { serializer });
        services
    }

    pub fn register<T: Any + Send + Sync>(&self, service: T) {
        self.services.insert(service);
    }

    pub fn resolve<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.services.get::<T>()
    }

    /// Serializer from the registered `WorkerOptions`, or JSON when none is.
    pub fn serializer(&self) -> Arc<dyn ObjectSerializer> {
        self.resolve::<WorkerOptions>()
            .map(|options| options.serializer.clone())
            .unwrap_or_else(|| Arc::new(JsonObjectSerializer::new()))
    }
}

impl fmt::Debug for InstanceServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceServices")
            .field("services", &self.services.type_names())
            .finish()
    }
}
