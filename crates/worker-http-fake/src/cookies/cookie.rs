use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SameSite {
    Unspecified,
    #[default]
    Lax,
    Strict,
    None,
}

/// A cookie as seen on a request, or appended to a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpCookie {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_only: Option<bool>,
    /// Lifetime in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub same_site: SameSite,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
}

impl HttpCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: None,
            expires: None,
            http_only: None,
            max_age: None,
            path: None,
            same_site: SameSite::default(),
            secure: None,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_expires(mut self, expires: DateTime<Utc>) -> Self {
        self.expires = Some(expires);
        self
    }

    pub fn with_max_age(mut self, seconds: f64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = Some(http_only);
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }

    pub fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }
}

/// `name=value` pair, as it would appear in a `Cookie` header.
impl fmt::Display for HttpCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_cookie_defaults() {
        let cookie = HttpCookie::new("CookieName", "CookieValue");
        assert_eq!(cookie.same_site, SameSite::Lax);
        assert!(cookie.domain.is_none());
        assert!(cookie.secure.is_none());
        assert_eq!(cookie.to_string(), "CookieName=CookieValue");
    }

    #[test]
    fn test_cookie_attributes_chain() {
        let expires = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let cookie = HttpCookie::new("session", "abc")
            .with_domain("localhost")
            .with_path("/")
            .with_expires(expires)
            .with_max_age(3600.0)
            .with_http_only(true)
            .with_secure(true)
            .with_same_site(SameSite::Strict);

        assert_eq!(cookie.domain.as_deref(), Some("localhost"));
        assert_eq!(cookie.expires, Some(expires));
        assert_eq!(cookie.max_age, Some(3600.0));
        assert_eq!(cookie.http_only, Some(true));
        assert_eq!(cookie.same_site, SameSite::Strict);
    }

    #[test]
    fn test_cookie_deserializes_with_defaults() {
        let cookie: HttpCookie =
            serde_json::from_str(r#"{"name":"a","value":"b","httpOnly":true}"#).unwrap();
        assert_eq!(cookie.http_only, Some(true));
        assert_eq!(cookie.same_site, SameSite::Lax);
    }
}
