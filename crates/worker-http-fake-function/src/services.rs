use crate::models::RequestDetails;
use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;
use worker_http_fake::HttpRequestData;

/// Projects a request into [`RequestDetails`].
#[async_trait]
pub trait RequestDetailsService: Send + Sync {
    async fn extract_request_details(&self, request: &dyn HttpRequestData) -> RequestDetails;
}

/// Reads every field straight off the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRequestDetailsService;

#[async_trait]
impl RequestDetailsService for DefaultRequestDetailsService {
    async fn extract_request_details(&self, request: &dyn HttpRequestData) -> RequestDetails {
        let headers = request
            .headers()
            .iter()
            .map(|(name, values)| (name.to_string(), values.join(";")))
            .collect();

        // Unkeyed query segments have nothing to be indexed by
        let query = request.query();
        let query_params = query
            .keys()
            .flatten()
            .map(|key| (key.to_string(), query.get(key).unwrap_or_default()))
            .collect();

        let context_data = request
            .function_context()
            .binding_context()
            .iter()
            .map(|(key, value)| (key.to_string(), binding_text(value)))
            .collect();

        let cookies: IndexMap<String, String> = request
            .cookies()
            .iter()
            .map(|cookie| (cookie.name.clone(), cookie.value.clone()))
            .collect();

        let content_type = request
            .headers()
            .first("Content-Type")
            .unwrap_or_default()
            .to_string();

        RequestDetails {
            headers,
            query_params,
            context_data,
            body: request.read_as_string(),
            content_type,
            url: request.url().to_string(),
            cookies,
            claims: request.claims(),
            method: request.method().to_string(),
        }
    }
}

fn binding_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_binding_text_unquotes_strings() {
        assert_eq!(binding_text(&json!("123")), "123");
        assert_eq!(binding_text(&json!(123)), "123");
        assert_eq!(binding_text(&json!({"a": true})), r#"{"a":true}"#);
        assert_eq!(binding_text(&Value::Null), "null");
    }
}
