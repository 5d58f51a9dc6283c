use super::{
    BindingContext, FeatureRegistry, FunctionDefinition, IdGenerator, InstanceServices,
    InvocationFeature, RetryContext, TraceContext, FAKE_FUNCTION_DEFINITION,
};
use crate::serializer::ObjectSerializer;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Mutable per-invocation item bag.
pub type Items = RwLock<HashMap<String, Value>>;

/// Per-invocation bundle handed to a handler alongside its request.
///
/// Implement this to supply a fully custom context to the builder.
pub trait FunctionContext: Send + Sync + fmt::Debug {
    fn invocation_id(&self) -> &str;
    fn function_id(&self) -> &str;
    fn trace_context(&self) -> &TraceContext;
    fn binding_context(&self) -> &BindingContext;
    fn retry_context(&self) -> RetryContext;
    fn instance_services(&self) -> &InstanceServices;
    fn function_definition(&self) -> &FunctionDefinition;
    fn features(&self) -> &FeatureRegistry;
    fn items(&self) -> &Items;
}

/// Context double created for every built request.
#[derive(Debug)]
pub struct FakeFunctionContext {
    invocation_id: String,
    function_id: String,
    trace_context: TraceContext,
    binding_context: BindingContext,
    instance_services: InstanceServices,
    features: FeatureRegistry,
    items: Items,
}

impl FakeFunctionContext {
    /// Create a context around `binding_context`, drawing every identifier
    /// from `ids`. The feature registry is seeded with an
    /// [`InvocationFeature`] carrying the invocation id.
    pub fn new(
        binding_context: BindingContext,
        serializer: Arc<dyn ObjectSerializer>,
        ids: &dyn IdGenerator,
    ) -> Self {
        let invocation_id = ids.next_id();
        let function_id = ids.next_id();
        let trace_context = TraceContext {
            trace_parent: ids.next_id(),
            trace_state: ids.next_id(),
        };

        let features = FeatureRegistry::new();
        features.set(InvocationFeature {
            invocation_id: invocation_id.clone(),
        });

        debug!(
            invocation_id = %invocation_id,
            function_id = %function_id,
            binding_entries = binding_context.len(),
            "Created fake function context"
        );

        Self {
            invocation_id,
            function_id,
            trace_context,
            binding_context,
            instance_services: InstanceServices::with_serializer(serializer),
            features,
            items: RwLock::new(HashMap::new()),
        }
    }
}

impl FunctionContext for FakeFunctionContext {
    fn invocation_id(&self) -> &str {
        &self.invocation_id
    }

    fn function_id(&self) -> &str {
        &self.function_id
    }

    fn trace_context(&self) -> &TraceContext {
        &self.trace_context
    }

    fn binding_context(&self) -> &BindingContext {
        &self.binding_context
    }

    fn retry_context(&self) -> RetryContext {
        RetryContext::FAKE
    }

    fn instance_services(&self) -> &InstanceServices {
        &self.instance_services
    }

    fn function_definition(&self) -> &FunctionDefinition {
        &FAKE_FUNCTION_DEFINITION
    }

    fn features(&self) -> &FeatureRegistry {
        &self.features
    }

    fn items(&self) -> &Items {
        &self.items
    }
}
