use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct MedicalHistoryPatch {
    pub client_id: Option<i32>,
    pub date: Option<DateTime<Utc>>,
    pub height: Option<String>,
    pub weight: Option<String>,
}
