use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    calendar_event::value_objects::{CreateCalendarEventInput, UpdateCalendarEventInput},
    common::upsert::merge,
};

/// An entry of a user's calendar. `id` is generated by the calendar front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CalendarEvent {
    pub id: String,
    pub user_email: String,
    pub title: String,
    pub start: String,
    pub end: String,
    #[serde(rename = "allDay")]
    pub all_day: bool,
}

impl CalendarEvent {
    /// Missing `start`/`end` become empty strings and a missing `allDay` is `false`.
    pub fn new(input: CreateCalendarEventInput) -> Self {
        Self {
            id: input.id,
            user_email: input.user_email,
            title: input.title,
            start: input.start.unwrap_or_default(),
            end: input.end.unwrap_or_default(),
            all_day: input.all_day.unwrap_or_default(),
        }
    }

    pub fn update(&mut self, input: UpdateCalendarEventInput) {
        merge(&mut self.title, input.title);
        merge(&mut self.start, input.start);
        merge(&mut self.end, input.end);
        merge(&mut self.all_day, input.all_day);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_missing_times() {
        let event = CalendarEvent::new(CreateCalendarEventInput {
            id: "evt-1".to_string(),
            user_email: "nutri@example.com".to_string(),
            title: "Weigh-in".to_string(),
            start: None,
            end: None,
            all_day: None,
        });

        assert_eq!(event.start, "");
        assert_eq!(event.end, "");
        assert!(!event.all_day);
    }

    #[test]
    fn update_cannot_unset_all_day() {
        let mut event = CalendarEvent::new(CreateCalendarEventInput {
            id: "evt-1".to_string(),
            user_email: "nutri@example.com".to_string(),
            title: "Weigh-in".to_string(),
            start: Some("2024-05-01T08:00".to_string()),
            end: None,
            all_day: Some(true),
        });

        event.update(UpdateCalendarEventInput {
            title: Some("Check-up".to_string()),
            all_day: Some(false),
            ..Default::default()
        });

        assert_eq!(event.title, "Check-up");
        assert_eq!(event.start, "2024-05-01T08:00");
        assert!(event.all_day);
    }
}
