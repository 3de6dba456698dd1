pub mod delete_medical_history;
pub mod get_medical_histories;
pub mod upsert_medical_history;
