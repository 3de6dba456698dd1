use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::upsert::{Upsertable, is_present, merge, merge_optional},
    medical_history::value_objects::MedicalHistoryPatch,
};

/// One dated measurement of a client. `id` is chosen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MedicalHistory {
    pub id: i32,
    pub client_id: i32,
    pub date: Option<DateTime<Utc>>,
    pub height: Option<String>,
    pub weight: Option<String>,
}

impl Upsertable for MedicalHistory {
    type Key = i32;
    type Patch = MedicalHistoryPatch;

    const NAME: &'static str = "medical_history";

    fn required(patch: &MedicalHistoryPatch) -> Vec<(&'static str, bool)> {
        vec![
            ("client_id", is_present(&patch.client_id)),
            ("date", is_present(&patch.date)),
            ("height", is_present(&patch.height)),
            ("weight", is_present(&patch.weight)),
        ]
    }

    fn create(id: i32, patch: MedicalHistoryPatch) -> Self {
        Self {
            id,
            client_id: patch.client_id.unwrap_or_default(),
            date: patch.date,
            height: patch.height,
            weight: patch.weight,
        }
    }

    fn merge(&mut self, patch: MedicalHistoryPatch) {
        merge(&mut self.client_id, patch.client_id);
        merge_optional(&mut self.date, patch.date);
        merge_optional(&mut self.height, patch.height);
        merge_optional(&mut self.weight, patch.weight);
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::domain::common::entities::app_errors::CoreError;

    fn patch() -> MedicalHistoryPatch {
        MedicalHistoryPatch {
            client_id: Some(4),
            date: Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()),
            height: Some("172".to_string()),
            weight: Some("68".to_string()),
        }
    }

    #[test]
    fn every_field_is_required() {
        assert!(MedicalHistory::validate(&patch()).is_ok());

        let missing_weight = MedicalHistoryPatch {
            weight: Some(String::new()),
            ..patch()
        };
        assert_eq!(
            MedicalHistory::validate(&missing_weight),
            Err(CoreError::missing_fields())
        );

        let zero_client = MedicalHistoryPatch {
            client_id: Some(0),
            ..patch()
        };
        assert!(MedicalHistory::validate(&zero_client).is_err());
    }

    #[test]
    fn create_uses_the_path_key_as_id() {
        let history = MedicalHistory::create(11, patch());
        assert_eq!(history.id, 11);
        assert_eq!(history.client_id, 4);
        assert_eq!(history.height.as_deref(), Some("172"));
    }
}
