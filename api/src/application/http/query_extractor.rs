use axum::{extract::FromRequestParts, http::request::Parts};
use foodboot_core::domain::common::value_objects::ListQuery;
use std::collections::HashMap;
use std::convert::Infallible;

use super::query_params::QueryParams;

/// Extractor for the `sort`, `offset` and `limit` query parameters of collection routes.
/// Unparseable values are ignored.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(QueryParamsExtractor(query): QueryParamsExtractor) -> Result<_, ApiError> {
///     state.service.get_clients(query).await
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QueryParamsExtractor(pub ListQuery);

impl<S> FromRequestParts<S> for QueryParamsExtractor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query_map: HashMap<String, String> =
            serde_urlencoded::from_str(query_string).unwrap_or_default();

        let query_params = QueryParams::from_query_map(&query_map);

        Ok(QueryParamsExtractor(ListQuery::from(query_params)))
    }
}
