//! JSON body extractor with API-shaped rejections

use crate::ApiError;

use std::future::Future;

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use log::debug;
use serde::de::DeserializeOwned;

/// `Json<T>` whose rejections render as a 400 `{"error", "code"}` body
/// instead of axum's plain-text response.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(ApiJson(value)),
                Err(rejection) => {
                    debug!("Rejected request body: {}", rejection.body_text());
                    Err(ApiError::validation(rejection_message(&rejection), None))
                }
            }
        }
    }
}

fn rejection_message(rejection: &JsonRejection) -> &'static str {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => "Request body must be JSON.",
        JsonRejection::JsonSyntaxError(_) => "Request body is not valid JSON.",
        JsonRejection::JsonDataError(_) => "Request body has fields of the wrong type.",
        _ => "Request body could not be read.",
    }
}
