use crate::collections::HeaderCollection;
use crate::cookies::HttpCookies;
use crate::error::Result;
use crate::function::FunctionContext;
use hyper::StatusCode;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Response a handler fills in and returns.
pub trait HttpResponseData: Send + fmt::Debug {
    fn function_context(&self) -> &Arc<dyn FunctionContext>;

    fn status_code(&self) -> StatusCode;
    fn set_status_code(&mut self, status: StatusCode);

    fn headers(&self) -> &HeaderCollection;
    fn headers_mut(&mut self) -> &mut HeaderCollection;
    fn set_headers(&mut self, headers: HeaderCollection);

    fn body(&self) -> &[u8];
    fn body_mut(&mut self) -> &mut Vec<u8>;
    fn set_body(&mut self, body: Vec<u8>);

    fn cookies(&self) -> &HttpCookies;
    fn cookies_mut(&mut self) -> &mut HttpCookies;
}

/// Response double handed out by `HttpRequestData::create_response`.
#[derive(Debug)]
pub struct FakeHttpResponseData {
    context: Arc<dyn FunctionContext>,
    status: StatusCode,
    headers: HeaderCollection,
    body: Vec<u8>,
    cookies: HttpCookies,
}

impl FakeHttpResponseData {
    pub fn new(context: Arc<dyn FunctionContext>, status: StatusCode) -> Self {
        Self {
            context,
            status,
            headers: HeaderCollection::new(),
            body: Vec::new(),
            cookies: HttpCookies::new(),
        }
    }
}

impl HttpResponseData for FakeHttpResponseData {
    fn function_context(&self) -> &Arc<dyn FunctionContext> {
        &self.context
    }

    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn set_status_code(&mut self, status: StatusCode) {
        self.status = status;
    }

    fn headers(&self) -> &HeaderCollection {
        &self.headers
    }

    fn headers_mut(&mut self) -> &mut HeaderCollection {
        &mut self.headers
    }

    fn set_headers(&mut self, headers: HeaderCollection) {
        self.headers = headers;
    }

    fn body(&self) -> &[u8] {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Vec<u8> {
        &mut self.body
    }

    fn set_body(&mut self, body: Vec<u8>) {
        self.body = body;
    }

    fn cookies(&self) -> &HttpCookies {
        &self.cookies
    }

    fn cookies_mut(&mut self) -> &mut HttpCookies {
        &mut self.cookies
    }
}

/// Body-writing helpers available on every response.
pub trait HttpResponseDataExt: HttpResponseData {
    /// Append UTF-8 text to the body.
    fn write_string(&mut self, text: &str) {
        self.body_mut().extend_from_slice(text.as_bytes());
    }

    /// Serialize `value` with the context's serializer, append it to the body
    /// and set the serializer's content type.
    fn write_as_json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        let serializer = self.function_context().instance_services().serializer();
        let bytes = serializer.serialize(&value)?;

        let content_type = serializer.content_type().to_string();
        self.headers_mut().insert("Content-Type", content_type);
        self.body_mut().extend_from_slice(&bytes);
        Ok(())
    }

    /// Body decoded as UTF-8, with invalid sequences replaced.
    fn body_as_string(&self) -> String {
        String::from_utf8_lossy(self.body()).into_owned()
    }
}

impl<R: HttpResponseData + ?Sized> HttpResponseDataExt for R {}
