use crate::services::{DefaultRequestDetailsService, RequestDetailsService};
use hyper::StatusCode;
use std::fmt;
use std::sync::Arc;
use tracing::info;
use worker_http_fake::{HttpRequestData, HttpRequestDataExt, HttpResponseData, HttpResponseDataExt};

/// HTTP-triggered handler that answers with the details of the request it got.
pub struct ExampleFunction {
    details_service: Arc<dyn RequestDetailsService>,
}

impl ExampleFunction {
    pub const NAME: &'static str = "ExampleFunction";

    pub fn new(details_service: Arc<dyn RequestDetailsService>) -> Self {
        Self { details_service }
    }

    /// Handle one invocation: a 200 response whose JSON body is the
    /// [`RequestDetails`](crate::RequestDetails) of `req`.
    pub async fn run(
        &self,
        req: &dyn HttpRequestData,
    ) -> worker_http_fake::Result<Box<dyn HttpResponseData>> {
        info!("HttpTrigger function {} processed a request.", Self::NAME);

        let mut response = req.create_response_with_status(StatusCode::OK);
        let details = self.details_service.extract_request_details(req).await;
        response.write_as_json(&details)?;

        Ok(response)
    }
}

impl Default for ExampleFunction {
    fn default() -> Self {
        Self::new(Arc::new(DefaultRequestDetailsService))
    }
}

impl fmt::Debug for ExampleFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExampleFunction").finish_non_exhaustive()
    }
}
