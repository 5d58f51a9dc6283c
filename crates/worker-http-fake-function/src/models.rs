use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Everything the example function could read from a request.
///
/// Maps keep the order in which entries appeared on the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDetails {
    /// Header name to its values joined with `;`
    pub headers: IndexMap<String, String>,
    pub query_params: IndexMap<String, String>,
    /// Binding data rendered as text
    pub context_data: IndexMap<String, String>,
    pub body: String,
    /// First `Content-Type` value, or empty
    pub content_type: String,
    pub url: String,
    pub cookies: IndexMap<String, String>,
    /// Claim type to its values joined with `", "`
    pub claims: IndexMap<String, String>,
    pub method: String,
}
