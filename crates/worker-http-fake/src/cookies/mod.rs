//! Request cookies and the response cookie jar.

mod cookie;
mod jar;

pub use cookie::{HttpCookie, SameSite};
pub use jar::HttpCookies;
