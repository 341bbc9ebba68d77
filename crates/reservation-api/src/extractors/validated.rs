//! Validated JSON extractor
//!
//! Extracts and validates JSON request bodies using the validator crate.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::extractors::RequestLocale;
use crate::response::{ApiError, LocalizedError};

/// Validated JSON extractor
///
/// Extracts a JSON body and validates it using the `validator` crate.
/// The inner type must implement both `Deserialize` and `Validate`.
/// Rejections are reported in the language negotiated for the request.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = LocalizedError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let locale = RequestLocale::negotiate(req.uri(), req.headers());

        // Extract JSON
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            let err = match e {
                JsonRejection::JsonDataError(e) => ApiError::invalid_request(e.body_text()),
                JsonRejection::JsonSyntaxError(e) => ApiError::invalid_request(e.body_text()),
                JsonRejection::MissingJsonContentType(e) => ApiError::invalid_request(e.body_text()),
                JsonRejection::BytesRejection(e) => ApiError::invalid_request(e.body_text()),
                _ => ApiError::invalid_request("Invalid JSON body"),
            };
            err.localized(locale)
        })?;

        // Validate
        value
            .validate()
            .map_err(|e| ApiError::from(e).localized(locale))?;

        Ok(ValidatedJson(value))
    }
}
