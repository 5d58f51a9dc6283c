//! Example HTTP-triggered function built against `worker-http-fake`.
//!
//! The function echoes back everything it can read from the request it
//! receives, which makes it a convenient end-to-end check of the request
//! double: build a request, run the function, inspect the JSON it returns.
//!
//! ## Module Structure
//!
//! - `function`: the `ExampleFunction` handler
//! - `models`: the `RequestDetails` response model
//! - `services`: request-details extraction behind an async trait

pub mod function;
pub mod models;
pub mod services;

pub use function::ExampleFunction;
pub use models::RequestDetails;
pub use services::{DefaultRequestDetailsService, RequestDetailsService};
