use super::response::{FakeHttpResponseData, HttpResponseData};
use crate::collections::{HeaderCollection, NameValueCollection};
use crate::cookies::HttpCookie;
use crate::encoding::{parse_query_string, TextEncoding};
use crate::error::Result;
use crate::function::FunctionContext;
use crate::identity::{aggregate_claims, ClaimsIdentity};
use bytes::Bytes;
use hyper::{Method, StatusCode};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use std::fmt;
use std::io::Cursor;
use std::sync::Arc;
use url::Url;

/// Inbound request as a trigger handler receives it.
pub trait HttpRequestData: Send + Sync + fmt::Debug {
    fn function_context(&self) -> &Arc<dyn FunctionContext>;
    fn url(&self) -> &Url;
    fn method(&self) -> &Method;
    fn headers(&self) -> &HeaderCollection;

    /// A fresh reader over the body, positioned at the start.
    fn body(&self) -> Cursor<Bytes>;

    fn cookies(&self) -> &[HttpCookie];
    fn identities(&self) -> &[ClaimsIdentity];

    /// Query parameters parsed from the current url.
    fn query(&self) -> NameValueCollection;

    /// A new 200 response sharing this request's context.
    fn create_response(&self) -> Box<dyn HttpResponseData>;

    /// Encoding the body text was written with.
    fn encoding(&self) -> TextEncoding {
        TextEncoding::Utf8
    }

    fn body_bytes(&self) -> Bytes {
        self.body().into_inner()
    }

    fn read_as_string(&self) -> String {
        self.encoding().decode(&self.body_bytes())
    }

    /// Claim type to `", "`-joined values across every identity.
    fn claims(&self) -> IndexMap<String, String> {
        aggregate_claims(self.identities())
    }
}

/// Request double produced by `HttpRequestDataBuilder::build`.
#[derive(Debug, Clone)]
pub struct FakeHttpRequestData {
    context: Arc<dyn FunctionContext>,
    url: Url,
    method: Method,
    headers: HeaderCollection,
    body: Bytes,
    encoding: TextEncoding,
    identities: Vec<ClaimsIdentity>,
    cookies: Vec<HttpCookie>,
}

impl FakeHttpRequestData {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        context: Arc<dyn FunctionContext>,
        url: Url,
        method: Method,
        headers: HeaderCollection,
        body: Bytes,
        encoding: TextEncoding,
        identities: Vec<ClaimsIdentity>,
        cookies: Vec<HttpCookie>,
    ) -> Self {
        Self {
            context,
            url,
            method,
            headers,
            body,
            encoding,
            identities,
            cookies,
        }
    }
}

impl HttpRequestData for FakeHttpRequestData {
    fn function_context(&self) -> &Arc<dyn FunctionContext> {
        &self.context
    }

    fn url(&self) -> &Url {
        &self.url
    }

    fn method(&self) -> &Method {
        &self.method
    }

    fn headers(&self) -> &HeaderCollection {
        &self.headers
    }

    fn body(&self) -> Cursor<Bytes> {
        Cursor::new(self.body.clone())
    }

    fn cookies(&self) -> &[HttpCookie] {
        &self.cookies
    }

    fn identities(&self) -> &[ClaimsIdentity] {
        &self.identities
    }

    fn query(&self) -> NameValueCollection {
        parse_query_string(self.url.query().unwrap_or_default(), self.encoding)
    }

    fn create_response(&self) -> Box<dyn HttpResponseData> {
        Box::new(FakeHttpResponseData::new(
            self.context.clone(),
            StatusCode::OK,
        ))
    }

    fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    fn body_bytes(&self) -> Bytes {
        self.body.clone()
    }
}

/// Serializer-aware helpers available on every request.
pub trait HttpRequestDataExt: HttpRequestData {
    /// Deserialize the body with the context's serializer.
    fn read_from_json<T: DeserializeOwned>(&self) -> Result<T> {
        let serializer = self.function_context().instance_services().serializer();
        let value = serializer.deserialize(&self.body_bytes())?;
        Ok(serde_json::from_value(value)?)
    }

    fn create_response_with_status(&self, status: StatusCode) -> Box<dyn HttpResponseData> {
        let mut response = self.create_response();
        response.set_status_code(status);
        response
    }
}

impl<R: HttpRequestData + ?Sized> HttpRequestDataExt for R {}
