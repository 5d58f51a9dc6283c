use super::HttpCookie;
use crate::error::{FakeError, Result};
use indexmap::IndexMap;

/// Append-only cookie jar of a response.
///
/// Names are unique keys: appending a name that is already present fails
/// with [`FakeError::KeyCollision`] and leaves the jar unchanged.
#[derive(Debug, Clone, Default)]
pub struct HttpCookies {
    cookies: IndexMap<String, String>,
}

impl HttpCookies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.cookies.contains_key(&name) {
            return Err(FakeError::KeyCollision(name));
        }
        self.cookies.insert(name, value.into());
        Ok(())
    }

    /// Append only the cookie's name and value; attributes are not kept.
    pub fn append_cookie(&mut self, cookie: HttpCookie) -> Result<()> {
        self.append(cookie.name, cookie.value)
    }

    /// A template cookie for callers to fill in and append.
    pub fn create_new(&self) -> HttpCookie {
        HttpCookie::new("FakeCookie", "FakeCookieValue")
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cookies
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
