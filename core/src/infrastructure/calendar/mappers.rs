use crate::domain::calendar::entities::Calendar;
use crate::entity::calendars::Model as CalendarModel;

impl From<CalendarModel> for Calendar {
    fn from(model: CalendarModel) -> Self {
        Calendar {
            user_email: model.user_email,
        }
    }
}
