use crate::domain::{
    common::{entities::app_errors::CoreError, upsert::Upserted},
    medical_history::{entities::MedicalHistory, value_objects::MedicalHistoryPatch},
};

pub trait MedicalHistoryService: Send + Sync {
    /// Histories of a client, most recent first.
    fn get_medical_histories(
        &self,
        client_id: i32,
    ) -> impl Future<Output = Result<Vec<MedicalHistory>, CoreError>> + Send;

    fn upsert_medical_history(
        &self,
        id: i32,
        patch: MedicalHistoryPatch,
    ) -> impl Future<Output = Result<Upserted<MedicalHistory>, CoreError>> + Send;

    fn delete_medical_history(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<MedicalHistory, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MedicalHistoryRepository: Send + Sync {
    fn find_by_client(
        &self,
        client_id: i32,
    ) -> impl Future<Output = Result<Vec<MedicalHistory>, CoreError>> + Send;

    fn find_by_id(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<MedicalHistory>, CoreError>> + Send;

    fn create(
        &self,
        medical_history: MedicalHistory,
    ) -> impl Future<Output = Result<MedicalHistory, CoreError>> + Send;

    fn update(
        &self,
        medical_history: MedicalHistory,
    ) -> impl Future<Output = Result<MedicalHistory, CoreError>> + Send;

    fn delete(&self, id: i32) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
