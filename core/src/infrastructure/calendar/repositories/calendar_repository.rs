use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

use crate::domain::{
    calendar::{entities::Calendar, ports::CalendarRepository},
    common::{entities::app_errors::CoreError, value_objects::ListQuery},
};
use crate::entity::calendars::{
    ActiveModel as CalendarActiveModel, Column as CalendarColumn, Entity as CalendarEntity,
};
use crate::infrastructure::db::{errors::map_db_err, query::apply_list_query};

#[derive(Debug, Clone)]
pub struct PostgresCalendarRepository {
    pub db: DatabaseConnection,
}

impl PostgresCalendarRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CalendarRepository for PostgresCalendarRepository {
    async fn find_all(&self, query: ListQuery) -> Result<Vec<Calendar>, CoreError> {
        let calendars =
            apply_list_query(CalendarEntity::find(), &query, CalendarColumn::UserEmail)
                .all(&self.db)
                .await
                .map_err(|e| map_db_err("fetch calendars", e))?
                .into_iter()
                .map(Calendar::from)
                .collect();

        Ok(calendars)
    }

    async fn find_by_email(&self, user_email: String) -> Result<Option<Calendar>, CoreError> {
        let calendar = CalendarEntity::find_by_id(user_email)
            .one(&self.db)
            .await
            .map_err(|e| map_db_err("get calendar by user email", e))?
            .map(Calendar::from);

        Ok(calendar)
    }

    async fn create(&self, calendar: Calendar) -> Result<Calendar, CoreError> {
        let created = CalendarActiveModel {
            user_email: Set(calendar.user_email),
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_db_err("create calendar", e))?;

        Ok(Calendar::from(created))
    }

    async fn delete(&self, user_email: String) -> Result<bool, CoreError> {
        let result = CalendarEntity::delete_by_id(user_email)
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err("delete calendar", e))?;

        Ok(result.rows_affected > 0)
    }
}
