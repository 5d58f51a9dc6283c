//! Execution context of a faked function invocation.
//!
//! ## Module Structure
//!
//! - `context`: `FunctionContext` contract and the `FakeFunctionContext` double
//! - `binding`: read-only binding data
//! - `definition`: static function metadata
//! - `features`: type-keyed invocation feature registry
//! - `services`: instance services (dependency-resolution scope)
//! - `invocation`: trace and retry stand-ins
//! - `ids`: injectable identifier generation

mod binding;
mod context;
mod definition;
mod features;
mod ids;
mod invocation;
mod services;
mod type_map;

pub use binding::BindingContext;
pub use context::{FakeFunctionContext, FunctionContext, Items};
pub use definition::{
    BindingDirection, BindingMetadata, FunctionDefinition, FunctionParameter,
    FAKE_FUNCTION_DEFINITION,
};
pub use features::{FeatureRegistry, InvocationFeature};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use invocation::{RetryContext, TraceContext};
pub use services::{InstanceServices, WorkerOptions};
