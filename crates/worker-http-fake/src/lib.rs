//! Fakes and builders for HTTP-triggered serverless function requests.
//!
//! This library fabricates the objects a function host would hand to an HTTP
//! trigger handler, so handler logic can be exercised in plain unit tests:
//! - `HttpRequestDataBuilder`: fluent builder producing a request double
//! - `HttpRequestData` / `HttpResponseData`: the request/response contract
//! - `FunctionContext`: the per-invocation execution context contract
//!
//! # Example
//!
//! ```
//! use worker_http_fake::{HttpRequestData, HttpRequestDataBuilder};
//! use hyper::Method;
//!
//! # fn main() -> worker_http_fake::Result<()> {
//! let request = HttpRequestDataBuilder::new()
//!     .with_url("https://localhost:8080/api/orders?id=42")?
//!     .with_method(Method::POST)?
//!     .with_bearer_authorization("token")?
//!     .with_body(r#"{"id":42}"#)
//!     .build();
//!
//! assert_eq!(request.query().get("id").as_deref(), Some("42"));
//! assert_eq!(request.headers().first("authorization"), Some("Bearer token"));
//! # Ok(())
//! # }
//! ```

mod builder;
mod collections;
mod encoding;
mod error;
mod serializer;

pub mod cookies;
pub mod fixture;
pub mod function;
pub mod http;
pub mod identity;

pub use builder::{BuilderOptions, HttpRequestDataBuilder, DEFAULT_URL};
pub use collections::{HeaderCollection, NameValueCollection};
pub use encoding::{encode_query_string, parse_query_string, TextEncoding};
pub use error::{FakeError, Result};
pub use serializer::{JsonObjectSerializer, ObjectSerializer};

pub use cookies::{HttpCookie, HttpCookies, SameSite};
pub use fixture::RequestFixture;
pub use function::{
    BindingContext, FakeFunctionContext, FeatureRegistry, FunctionContext, FunctionDefinition,
    IdGenerator, InstanceServices, InvocationFeature, RetryContext, SequentialIdGenerator,
    TraceContext, UuidIdGenerator, WorkerOptions,
};
pub use http::{
    FakeHttpRequestData, FakeHttpResponseData, HttpRequestData, HttpRequestDataExt,
    HttpResponseData, HttpResponseDataExt,
};
pub use identity::{claim_types, Claim, ClaimsIdentity};
pub use url::Url;
