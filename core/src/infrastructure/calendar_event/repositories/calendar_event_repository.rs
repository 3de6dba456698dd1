use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::domain::{
    calendar_event::{entities::CalendarEvent, ports::CalendarEventRepository},
    common::entities::app_errors::CoreError,
};
use crate::entity::calendar_events::{
    ActiveModel as CalendarEventActiveModel, Column as CalendarEventColumn,
    Entity as CalendarEventEntity,
};
use crate::infrastructure::db::errors::map_db_err;

#[derive(Debug, Clone)]
pub struct PostgresCalendarEventRepository {
    pub db: DatabaseConnection,
}

impl PostgresCalendarEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CalendarEventRepository for PostgresCalendarEventRepository {
    async fn find_by_user(&self, user_email: String) -> Result<Vec<CalendarEvent>, CoreError> {
        let events = CalendarEventEntity::find()
            .filter(CalendarEventColumn::UserEmail.eq(user_email))
            .order_by_asc(CalendarEventColumn::Start)
            .all(&self.db)
            .await
            .map_err(|e| map_db_err("fetch calendar events by user", e))?
            .into_iter()
            .map(CalendarEvent::from)
            .collect();

        Ok(events)
    }

    async fn find_by_id(&self, id: String) -> Result<Option<CalendarEvent>, CoreError> {
        let event = CalendarEventEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_db_err("get calendar event by id", e))?
            .map(CalendarEvent::from);

        Ok(event)
    }

    async fn create(&self, event: CalendarEvent) -> Result<CalendarEvent, CoreError> {
        let created = CalendarEventActiveModel::from(event)
            .insert(&self.db)
            .await
            .map_err(|e| map_db_err("create calendar event", e))?;

        Ok(CalendarEvent::from(created))
    }

    async fn update(&self, event: CalendarEvent) -> Result<CalendarEvent, CoreError> {
        let updated = CalendarEventActiveModel::from(event)
            .update(&self.db)
            .await
            .map_err(|e| map_db_err("update calendar event", e))?;

        Ok(CalendarEvent::from(updated))
    }

    async fn delete(&self, id: String) -> Result<bool, CoreError> {
        let result = CalendarEventEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| map_db_err("delete calendar event", e))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::db::testing::sqlite_memory;

    fn event(id: &str, user_email: &str, start: &str) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            user_email: user_email.to_string(),
            title: "Consultation".to_string(),
            start: start.to_string(),
            end: String::new(),
            all_day: false,
        }
    }

    #[tokio::test]
    async fn events_are_scoped_to_their_user() {
        let repository = PostgresCalendarEventRepository::new(sqlite_memory().await);
        repository
            .create(event("b", "nutri@example.com", "2024-05-02"))
            .await
            .unwrap();
        repository
            .create(event("a", "nutri@example.com", "2024-05-01"))
            .await
            .unwrap();
        repository
            .create(event("c", "other@example.com", "2024-05-01"))
            .await
            .unwrap();

        let ids: Vec<String> = repository
            .find_by_user("nutri@example.com".to_string())
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();

        assert_eq!(ids, ["a", "b"]);
    }

    #[tokio::test]
    async fn update_persists_all_day_flag() {
        let repository = PostgresCalendarEventRepository::new(sqlite_memory().await);
        let mut created = repository
            .create(event("a", "nutri@example.com", "2024-05-01"))
            .await
            .unwrap();

        created.all_day = true;
        repository.update(created).await.unwrap();

        let stored = repository.find_by_id("a".to_string()).await.unwrap().unwrap();
        assert!(stored.all_day);
    }
}
