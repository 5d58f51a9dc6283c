//! Request and response contracts, and the doubles that satisfy them.

mod request;
mod response;

pub use request::{FakeHttpRequestData, HttpRequestData, HttpRequestDataExt};
pub use response::{FakeHttpResponseData, HttpResponseData, HttpResponseDataExt};
