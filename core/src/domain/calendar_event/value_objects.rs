#[derive(Debug, Clone)]
pub struct CreateCalendarEventInput {
    pub id: String,
    pub user_email: String,
    pub title: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub all_day: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCalendarEventInput {
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub all_day: Option<bool>,
}
