use sea_orm::ActiveValue::Set;

use crate::domain::calendar_event::entities::CalendarEvent;
use crate::entity::calendar_events::{
    ActiveModel as CalendarEventActiveModel, Model as CalendarEventModel,
};

impl From<CalendarEventModel> for CalendarEvent {
    fn from(model: CalendarEventModel) -> Self {
        CalendarEvent {
            id: model.id,
            user_email: model.user_email,
            title: model.title,
            start: model.start.unwrap_or_default(),
            end: model.end.unwrap_or_default(),
            all_day: model.all_day,
        }
    }
}

impl From<CalendarEvent> for CalendarEventActiveModel {
    fn from(event: CalendarEvent) -> Self {
        CalendarEventActiveModel {
            id: Set(event.id),
            user_email: Set(event.user_email),
            title: Set(event.title),
            start: Set(Some(event.start)),
            end: Set(Some(event.end)),
            all_day: Set(event.all_day),
        }
    }
}
