use chrono::Utc;
use sea_orm::ActiveValue::Set;

use crate::domain::medical_history::entities::MedicalHistory;
use crate::entity::medical_history::{
    ActiveModel as MedicalHistoryActiveModel, Model as MedicalHistoryModel,
};

impl From<MedicalHistoryModel> for MedicalHistory {
    fn from(model: MedicalHistoryModel) -> Self {
        MedicalHistory {
            id: model.id,
            client_id: model.client_id,
            date: model.date.map(|dt| dt.with_timezone(&Utc)),
            height: model.height,
            weight: model.weight,
        }
    }
}

impl From<MedicalHistory> for MedicalHistoryActiveModel {
    fn from(history: MedicalHistory) -> Self {
        MedicalHistoryActiveModel {
            id: Set(history.id),
            client_id: Set(history.client_id),
            date: Set(history.date.map(|dt| dt.fixed_offset())),
            height: Set(history.height),
            weight: Set(history.weight),
        }
    }
}
