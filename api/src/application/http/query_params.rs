use std::collections::HashMap;

use foodboot_core::domain::common::value_objects::{ListQuery, SortField};

const MAX_LIMIT: u64 = 100;

/// Sort direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort specification for a single field
#[derive(Debug, Clone)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// Parsed sort parameters
#[derive(Debug, Clone, Default)]
pub struct SortParams {
    pub sorts: Vec<SortSpec>,
}

impl SortParams {
    pub fn is_empty(&self) -> bool {
        self.sorts.is_empty()
    }

    /// Parse sort string like "field1,-field2,field3"
    pub fn from_string(s: &str) -> Self {
        let sorts = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| match part.strip_prefix('-') {
                Some(field) => SortSpec {
                    field: field.to_string(),
                    direction: SortDirection::Desc,
                },
                None => SortSpec {
                    field: part.to_string(),
                    direction: SortDirection::Asc,
                },
            })
            .collect();

        Self { sorts }
    }
}

/// Pagination parameters. Without `limit` the whole collection is returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationParams {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl PaginationParams {
    pub fn new(offset: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            offset,
            limit: limit.map(|limit| limit.clamp(1, MAX_LIMIT)),
        }
    }
}

/// Combined query parameters (sort, pagination)
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub sort: SortParams,
    pub pagination: PaginationParams,
}

impl QueryParams {
    /// Parse from query string map
    /// Handles formats like:
    /// - sort=field or sort=-field
    /// - offset=0, limit=20
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let sort = query_map
            .get("sort")
            .map(|value| SortParams::from_string(value))
            .unwrap_or_default();

        let offset = query_map.get("offset").and_then(|v| v.parse::<u64>().ok());
        let limit = query_map.get("limit").and_then(|v| v.parse::<u64>().ok());

        Self {
            sort,
            pagination: PaginationParams::new(offset, limit),
        }
    }
}

impl From<QueryParams> for ListQuery {
    fn from(params: QueryParams) -> Self {
        ListQuery {
            sort: params
                .sort
                .sorts
                .into_iter()
                .map(|spec| match spec.direction {
                    SortDirection::Asc => SortField::asc(spec.field),
                    SortDirection::Desc => SortField::desc(spec.field),
                })
                .collect(),
            offset: params.pagination.offset,
            limit: params.pagination.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_parse() {
        let mut map = HashMap::new();
        map.insert("sort".to_string(), "-last_name, first_name,".to_string());
        let params = QueryParams::from_query_map(&map);
        assert_eq!(params.sort.sorts.len(), 2);
        assert_eq!(params.sort.sorts[0].field, "last_name");
        assert_eq!(params.sort.sorts[0].direction, SortDirection::Desc);
        assert_eq!(params.sort.sorts[1].field, "first_name");
        assert_eq!(params.sort.sorts[1].direction, SortDirection::Asc);
    }

    #[test]
    fn test_pagination_parse() {
        let mut map = HashMap::new();
        map.insert("offset".to_string(), "10".to_string());
        map.insert("limit".to_string(), "500".to_string());
        let params = QueryParams::from_query_map(&map);
        assert_eq!(params.pagination.offset, Some(10));
        assert_eq!(params.pagination.limit, Some(MAX_LIMIT));
    }

    #[test]
    fn test_no_params_lists_everything() {
        let params = QueryParams::from_query_map(&HashMap::new());
        assert!(params.sort.is_empty());
        assert_eq!(ListQuery::from(params), ListQuery::default());
    }

    #[test]
    fn test_into_list_query() {
        let mut map = HashMap::new();
        map.insert("sort".to_string(), "-date".to_string());
        map.insert("limit".to_string(), "5".to_string());
        let query = ListQuery::from(QueryParams::from_query_map(&map));
        assert_eq!(query.sort, vec![SortField::desc("date")]);
        assert_eq!(query.limit, Some(5));
        assert_eq!(query.offset, None);
    }
}
