use std::str::FromStr;

use sea_orm::{EntityTrait, QueryOrder, QuerySelect, Select};
use tracing::debug;

use crate::domain::common::value_objects::ListQuery;

/// Applies ordering and paging to `select`, falling back to `default_order` when no
/// sort field is given. Sort fields that are not columns of `E` are skipped.
pub fn apply_list_query<E>(
    mut select: Select<E>,
    query: &ListQuery,
    default_order: E::Column,
) -> Select<E>
where
    E: EntityTrait,
{
    let mut ordered = false;

    for sort in &query.sort {
        match E::Column::from_str(&sort.field) {
            Ok(column) => {
                select = if sort.descending {
                    select.order_by_desc(column)
                } else {
                    select.order_by_asc(column)
                };
                ordered = true;
            }
            Err(_) => debug!(field = %sort.field, "ignoring unknown sort field"),
        }
    }

    if !ordered {
        select = select.order_by_asc(default_order);
    }

    if let Some(offset) = query.offset {
        select = select.offset(offset);
    }

    if let Some(limit) = query.limit {
        select = select.limit(limit);
    }

    select
}
