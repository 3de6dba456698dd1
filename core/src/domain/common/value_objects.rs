/// A single ordering clause; `field` is a column name of the listed table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortField {
    pub field: String,
    pub descending: bool,
}

impl SortField {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }
}

/// Ordering and paging for collection reads. Without a limit the whole table is returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub sort: Vec<SortField>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl ListQuery {
    pub fn ordered_by(sort: SortField) -> Self {
        Self {
            sort: vec![sort],
            ..Default::default()
        }
    }
}

/// Rows of a collection together with their number.
#[derive(Debug, Clone, PartialEq)]
pub struct Counted<T> {
    pub count: u64,
    pub rows: Vec<T>,
}

impl<T> From<Vec<T>> for Counted<T> {
    fn from(rows: Vec<T>) -> Self {
        Self {
            count: rows.len() as u64,
            rows,
        }
    }
}
