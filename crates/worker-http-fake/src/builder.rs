//! Fluent builder for request doubles.
//!
//! Setters validate their argument on the spot and leave the builder untouched
//! when they fail. `build` never validates; it snapshots whatever has been
//! configured, so deliberately odd requests (a GET with a body, say) can be
//! produced for negative-path tests.

use crate::collections::{HeaderCollection, NameValueCollection};
use crate::cookies::HttpCookie;
use crate::encoding::{encode_query_string, TextEncoding};
use crate::error::{FakeError, Result};
use crate::function::{
    BindingContext, FakeFunctionContext, FunctionContext, IdGenerator, UuidIdGenerator,
};
use crate::http::FakeHttpRequestData;
use crate::identity::ClaimsIdentity;
use crate::serializer::{JsonObjectSerializer, ObjectSerializer};
use base64::Engine;
use bytes::Bytes;
use hyper::Method;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::{debug, trace};
use url::Url;

pub const DEFAULT_URL: &str = "http://localhost/";

static DEFAULT_PARSED_URL: Lazy<Url> =
    Lazy::new(|| Url::parse(DEFAULT_URL).expect("DEFAULT_URL is an absolute url"));

const AUTHORIZATION: &str = "Authorization";

/// Builder-wide settings.
#[derive(Debug, Clone)]
pub struct BuilderOptions {
    /// Encoding for query escaping and body text
    pub encoding: TextEncoding,
    pub serializer: Arc<dyn ObjectSerializer>,
    pub id_generator: Arc<dyn IdGenerator>,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            encoding: TextEncoding::Utf8,
            serializer: Arc::new(JsonObjectSerializer::new()),
            id_generator: Arc::new(UuidIdGenerator),
        }
    }
}

/// Accumulates request configuration and builds [`FakeHttpRequestData`].
///
/// Every `with_*` setter taking an `Option`-convertible argument treats `None`
/// as a missing argument and returns [`FakeError::InvalidArgument`].
#[derive(Debug, Clone)]
pub struct HttpRequestDataBuilder {
    options: BuilderOptions,
    url: Url,
    method: Method,
    body: Bytes,
    headers: NameValueCollection,
    binding_data: BindingContext,
    custom_context: Option<Arc<dyn FunctionContext>>,
    identities: Vec<ClaimsIdentity>,
    cookies: Vec<HttpCookie>,
}

impl Default for HttpRequestDataBuilder {
    fn default() -> Self {
        Self::with_options(BuilderOptions::default())
    }
}

impl HttpRequestDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: BuilderOptions) -> Self {
        Self {
            options,
            url: DEFAULT_PARSED_URL.clone(),
            method: Method::GET,
            body: Bytes::new(),
            headers: NameValueCollection::new(),
            binding_data: BindingContext::new(),
            custom_context: None,
            identities: Vec::new(),
            cookies: Vec::new(),
        }
    }

    pub fn options(&self) -> &BuilderOptions {
        &self.options
    }

    /// Set the request url. Any absolute url is accepted, including ones
    /// without an authority (`mailto:`, `urn:`) and ones with a fragment.
    pub fn with_url<'a>(&mut self, url: impl Into<Option<&'a str>>) -> Result<&mut Self> {
        let url = url.into().ok_or(FakeError::InvalidArgument("url"))?;
        self.url = parse_absolute_url(url)?;
        Ok(self)
    }

    /// Replace the url's query component with `query`.
    ///
    /// Entries without a key are skipped, and an empty collection removes the
    /// query entirely. Scheme, authority, path and fragment are kept.
    pub fn with_query_params(
        &mut self,
        query: impl Into<Option<NameValueCollection>>,
    ) -> Result<&mut Self> {
        let query = query.into().ok_or(FakeError::InvalidArgument("query"))?;
        let encoded = encode_query_string(&query, self.options.encoding);

        if encoded.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.set_query(Some(&encoded));
        }
        Ok(self)
    }

    pub fn with_method(&mut self, method: impl Into<Option<Method>>) -> Result<&mut Self> {
        self.method = method.into().ok_or(FakeError::InvalidArgument("method"))?;
        Ok(self)
    }

    /// Set the body text, encoded with the configured encoding. A missing or
    /// empty text clears the body.
    pub fn with_body<'a>(&mut self, content: impl Into<Option<&'a str>>) -> &mut Self {
        self.body = match content.into() {
            Some(text) if !text.is_empty() => Bytes::from(self.options.encoding.encode(text)),
            _ => Bytes::new(),
        };
        self
    }

    /// Replace the configured headers wholesale.
    pub fn with_headers(
        &mut self,
        headers: impl Into<Option<NameValueCollection>>,
    ) -> Result<&mut Self> {
        self.headers = headers.into().ok_or(FakeError::InvalidArgument("headers"))?;
        Ok(self)
    }

    pub fn with_basic_authorization<'a>(
        &mut self,
        auth_data: impl Into<Option<&'a str>>,
    ) -> Result<&mut Self> {
        let auth_data = auth_data
            .into()
            .ok_or(FakeError::InvalidArgument("auth_data"))?;
        self.set_authorization("Basic", auth_data);
        Ok(self)
    }

    /// Basic authorization from plain credentials, base64-encoding `user:password`.
    pub fn with_basic_credentials(&mut self, user: &str, password: &str) -> Result<&mut Self> {
        let encoded =
            base64::engine::general_purpose::STANDARD.encode(format!("{user}:{password}"));
        self.with_basic_authorization(encoded.as_str())
    }

    pub fn with_bearer_authorization<'a>(
        &mut self,
        bearer_token: impl Into<Option<&'a str>>,
    ) -> Result<&mut Self> {
        let bearer_token = bearer_token
            .into()
            .ok_or(FakeError::InvalidArgument("bearer_token"))?;
        self.set_authorization("Bearer", bearer_token);
        Ok(self)
    }

    pub fn with_digest_authorization<'a>(
        &mut self,
        digest_data: impl Into<Option<&'a str>>,
    ) -> Result<&mut Self> {
        let digest_data = digest_data
            .into()
            .ok_or(FakeError::InvalidArgument("digest_data"))?;
        self.set_authorization("Digest", digest_data);
        Ok(self)
    }

    fn set_authorization(&mut self, scheme: &str, value: &str) {
        self.headers.set(AUTHORIZATION, format!("{scheme} {value}"));
    }

    /// Binding data for the generated context. Ignored when a custom context
    /// is configured.
    pub fn with_binding_context_data(
        &mut self,
        binding_data: impl Into<Option<NameValueCollection>>,
    ) -> Result<&mut Self> {
        let binding_data = binding_data
            .into()
            .ok_or(FakeError::InvalidArgument("binding_data"))?;
        self.binding_data = BindingContext::from(&binding_data);
        Ok(self)
    }

    /// Attach `context` to every built request instead of a generated one.
    pub fn with_custom_context(
        &mut self,
        context: impl Into<Option<Arc<dyn FunctionContext>>>,
    ) -> Result<&mut Self> {
        let context = context.into().ok_or(FakeError::InvalidArgument("context"))?;
        self.custom_context = Some(context);
        Ok(self)
    }

    pub fn with_cookies(&mut self, cookies: impl Into<Option<Vec<HttpCookie>>>) -> Result<&mut Self> {
        self.cookies = cookies.into().ok_or(FakeError::InvalidArgument("cookies"))?;
        Ok(self)
    }

    pub fn with_identities(
        &mut self,
        identities: impl Into<Option<Vec<ClaimsIdentity>>>,
    ) -> Result<&mut Self> {
        self.identities = identities
            .into()
            .ok_or(FakeError::InvalidArgument("identities"))?;
        Ok(self)
    }

    pub fn with_id_generator(&mut self, id_generator: Arc<dyn IdGenerator>) -> &mut Self {
        self.options.id_generator = id_generator;
        self
    }

    /// Snapshot the current configuration into a request double.
    ///
    /// Collections are copied, and a new context is created unless a custom one
    /// was supplied, so later builder calls never reach an already built
    /// request.
    pub fn build(&self) -> FakeHttpRequestData {
        let mut headers = HeaderCollection::new();
        for (key, value) in self.headers.iter() {
            match key {
                Some(key) => {
                    if !headers.try_add_without_validation(key, value) {
                        trace!(header = key, "Skipping header with an invalid name");
                    }
                }
                None => trace!("Skipping header without a name"),
            }
        }

        let context = match &self.custom_context {
            Some(context) => context.clone(),
            None => Arc::new(FakeFunctionContext::new(
                self.binding_data.clone(),
                self.options.serializer.clone(),
                self.options.id_generator.as_ref(),
            )) as Arc<dyn FunctionContext>,
        };

        debug!(
            method = %self.method,
            url = %self.url,
            headers = headers.len(),
            body_len = self.body.len(),
            invocation_id = context.invocation_id(),
            "Built fake HTTP request"
        );

        FakeHttpRequestData::new(
            context,
            self.url.clone(),
            self.method.clone(),
            headers,
            self.body.clone(),
            self.options.encoding,
            self.identities.clone(),
            self.cookies.clone(),
        )
    }
}

/// Parse `url` as an absolute url. Relative references have no scheme and
/// are rejected.
fn parse_absolute_url(url: &str) -> Result<Url> {
    const REASON: &str = "Url must be in a valid (absolute) format.";

    Url::parse(url).map_err(|e| FakeError::malformed("url", format!("{REASON} {e}")))
}
