//! Request fixtures loaded from YAML or JSON files.
//!
//! A fixture describes a request declaratively and is replayed through the
//! builder's public setters, so it gets exactly the same validation as code.
//!
//! ```yaml
//! url: https://localhost:8080/api/orders
//! method: POST
//! headers:
//!   Content-Type: application/json
//! query:
//!   page: "2"
//! authorization:
//!   scheme: bearer
//!   value: eyJhbGciOi...
//! body: '{"id": 1}'
//! bindingData:
//!   orderId: "1"
//! cookies:
//!   - name: session
//!     value: abc
//! identities:
//!   - authenticationType: Bearer
//!     claims:
//!       - type: http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name
//!         value: ExampleName
//! ```

use crate::builder::HttpRequestDataBuilder;
use crate::collections::NameValueCollection;
use crate::cookies::HttpCookie;
use crate::error::{FakeError, Result};
use crate::identity::ClaimsIdentity;
use anyhow::Context;
use hyper::Method;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorizationScheme {
    Basic,
    Bearer,
    Digest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationFixture {
    pub scheme: AuthorizationScheme,
    pub value: String,
}

/// Declarative description of a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RequestFixture {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub headers: IndexMap<String, String>,
    /// Replaces any query in `url`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<IndexMap<String, String>>,
    /// Applied after `headers`, overriding any Authorization header there
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization: Option<AuthorizationFixture>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub binding_data: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cookies: Vec<HttpCookie>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identities: Vec<ClaimsIdentity>,
}

impl RequestFixture {
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture {}", path.display()))?;
        Self::from_yaml_str(&contents)
            .with_context(|| format!("Failed to parse fixture {}", path.display()))
    }

    /// Parse a fixture from YAML (JSON is accepted as well).
    pub fn from_yaml_str(contents: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Replay the fixture into `builder`.
    ///
    /// Order: url, query, method, headers, authorization, body, binding data,
    /// cookies, identities. Fields left out of the fixture are not touched.
    pub fn apply(&self, builder: &mut HttpRequestDataBuilder) -> Result<()> {
        if let Some(url) = &self.url {
            builder.with_url(url.as_str())?;
        }
        if let Some(query) = &self.query {
            builder.with_query_params(to_collection(query))?;
        }
        if let Some(method) = &self.method {
            let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
                .map_err(|e| FakeError::malformed("method", e.to_string()))?;
            builder.with_method(method)?;
        }
        if !self.headers.is_empty() {
            builder.with_headers(to_collection(&self.headers))?;
        }
        if let Some(auth) = &self.authorization {
            let value = auth.value.as_str();
            match auth.scheme {
                AuthorizationScheme::Basic => builder.with_basic_authorization(value)?,
                AuthorizationScheme::Bearer => builder.with_bearer_authorization(value)?,
                AuthorizationScheme::Digest => builder.with_digest_authorization(value)?,
            };
        }
        if let Some(body) = &self.body {
            builder.with_body(body.as_str());
        }
        if !self.binding_data.is_empty() {
            builder.with_binding_context_data(to_collection(&self.binding_data))?;
        }
        if !self.cookies.is_empty() {
            builder.with_cookies(self.cookies.clone())?;
        }
        if !self.identities.is_empty() {
            builder.with_identities(self.identities.clone())?;
        }
        Ok(())
    }

    /// A fresh default builder with this fixture applied.
    pub fn to_builder(&self) -> Result<HttpRequestDataBuilder> {
        let mut builder = HttpRequestDataBuilder::new();
        self.apply(&mut builder)?;
        Ok(builder)
    }
}

fn to_collection(map: &IndexMap<String, String>) -> NameValueCollection {
    map.iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpRequestData;
    use crate::identity::claim_types;
    use std::io::Write;

    const FIXTURE: &str = r#"
url: https://localhost:8080/api/orders?ignored=1
method: post
headers:
  Content-Type: application/json
  Authorization: Basic overridden
query:
  page: "2"
authorization:
  scheme: bearer
  value: token-123
body: '{"id": 1}'
bindingData:
  orderId: "1"
cookies:
  - name: session
    value: abc
identities:
  - authenticationType: Bearer
    claims:
      - type: http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name
        value: ExampleName
"#;

    #[test]
    fn test_fixture_applies_every_field() {
        let fixture = RequestFixture::from_yaml_str(FIXTURE).unwrap();
        let request = fixture.to_builder().unwrap().build();

        assert_eq!(
            request.url().to_string(),
            "https://localhost:8080/api/orders?page=2"
        );
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.headers().first("content-type"), Some("application/json"));
        assert_eq!(request.headers().first("Authorization"), Some("Bearer token-123"));
        assert_eq!(request.read_as_string(), r#"{"id": 1}"#);
        assert_eq!(
            request.function_context().binding_context().get("orderId"),
            Some(&serde_json::json!("1"))
        );
        assert_eq!(request.cookies()[0].name, "session");
        assert_eq!(request.claims()[claim_types::NAME], "ExampleName");
    }

    #[test]
    fn test_json_fixture_is_accepted() {
        let fixture =
            RequestFixture::from_yaml_str(r#"{"url": "https://example.com/", "body": "hi"}"#)
                .unwrap();
        let request = fixture.to_builder().unwrap().build();
        assert_eq!(request.url().to_string(), "https://example.com/");
        assert_eq!(request.read_as_string(), "hi");
    }

    #[test]
    fn test_empty_fixture_yields_defaults() {
        let request = RequestFixture::default().to_builder().unwrap().build();
        assert_eq!(request.url().to_string(), crate::DEFAULT_URL);
        assert_eq!(request.method(), Method::GET);
    }

    #[test]
    fn test_relative_url_is_rejected() {
        let fixture = RequestFixture::from_yaml_str("url: /relative").unwrap();
        assert!(matches!(
            fixture.to_builder(),
            Err(FakeError::MalformedInput { parameter: "url", .. })
        ));
    }

    #[test]
    fn test_invalid_method_is_rejected() {
        let fixture = RequestFixture::from_yaml_str("method: 'GE T'").unwrap();
        assert!(matches!(
            fixture.to_builder(),
            Err(FakeError::MalformedInput { parameter: "method", .. })
        ));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(RequestFixture::from_yaml_str("verb: GET").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"url: https://localhost/files\n").unwrap();

        let fixture = RequestFixture::from_file(file.path()).unwrap();
        assert_eq!(fixture.url.as_deref(), Some("https://localhost/files"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = RequestFixture::from_file("/nonexistent/fixture.yaml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/fixture.yaml"));
    }
}
