//! Custom Axum extractors
//!
//! Both reject with `ApiError::Validation` so malformed input always
//! comes back as a 422 `detail` array.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde_json::Value;

use super::error::ApiError;
use crate::models::{Location, ValidationError};

/// Request body parsed as untyped JSON.
///
/// Mapping onto a request type happens afterwards in `models`, field by
/// field. Content-Type is not checked.
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            ApiError::from(ValidationError::InvalidJson {
                reason: e.body_text(),
            })
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(ValidationError::MissingBody.into());
        }

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            ApiError::from(ValidationError::InvalidJson {
                reason: e.to_string(),
            })
        })?;

        Ok(Self(value))
    }
}

/// Extract and validate an integer item id from path
pub struct ItemId(pub i64);

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let not_an_integer = || {
            ApiError::from(ValidationError::NotAnInteger {
                loc: Location::Path,
                field: "item_id",
            })
        };

        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| not_an_integer())?;

        let id = raw.trim().parse::<i64>().map_err(|_| not_an_integer())?;
        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    async fn extract_body(body: &'static str) -> Result<Value, ApiError> {
        let req = axum::http::Request::builder()
            .body(Body::from(body))
            .unwrap();
        JsonBody::from_request(req, &()).await.map(|JsonBody(v)| v)
    }

    #[tokio::test]
    async fn parses_json_object() {
        let value = extract_body(r#"{"years_of_experience": 5}"#).await.unwrap();
        assert_eq!(value["years_of_experience"], 5);
    }

    #[tokio::test]
    async fn empty_body_is_missing() {
        let err = extract_body("").await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ref e) if e.0 == vec![ValidationError::MissingBody]
        ));
    }

    #[tokio::test]
    async fn malformed_json_is_invalid() {
        let err = extract_body("{not json").await.unwrap_err();
        match err {
            ApiError::Validation(e) => assert_eq!(e.details()[0].kind, "json_invalid"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
