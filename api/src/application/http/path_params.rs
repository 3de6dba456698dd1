use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use tracing::debug;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const NON_NUMERIC_ID: &str = "ID is non-numeric!";

/// The single numeric path parameter of a route.
///
/// Non-numeric values are answered with `422`. Numbers outside the key range cannot
/// match a stored row and are answered with `404`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericId(pub i32);

impl NumericId {
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        let value = raw.trim().parse::<i64>().map_err(|_| {
            debug!(id = %raw, "rejecting non-numeric id");
            ApiError::UnprocessableEntity(NON_NUMERIC_ID.to_string())
        })?;

        i32::try_from(value).map(NumericId).map_err(|_| {
            debug!(id = value, "id outside the key range");
            ApiError::NotFound(format!("No record found for id: {value}!"))
        })
    }
}

impl<S> FromRequestParts<S> for NumericId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::UnprocessableEntity(NON_NUMERIC_ID.to_string()))?;

        NumericId::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn numbers_within_range_are_accepted() {
        assert_eq!(NumericId::parse("42").unwrap(), NumericId(42));
        assert_eq!(NumericId::parse(" 7 ").unwrap(), NumericId(7));
    }

    #[test]
    fn non_numeric_ids_are_unprocessable() {
        let err = NumericId::parse("abc").unwrap_err();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), NON_NUMERIC_ID);
    }

    #[test]
    fn out_of_range_ids_are_not_found() {
        let err = NumericId::parse("99999999999").unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "No record found for id: 99999999999!");
    }
}
