use crate::application::http::{
    calendar::router::CalendarApiDoc, calendar_event::router::CalendarEventApiDoc,
    client::router::ClientApiDoc, customer::router::CustomerApiDoc,
    food_combination::router::FoodCombinationApiDoc, food_option::router::FoodOptionApiDoc,
    food_preference::router::FoodPreferenceApiDoc, meal_plan::router::MealPlanApiDoc,
    medical_history::router::MedicalHistoryApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "foodboot API",
    description = "Clinic and diet management: clients, their records, calendars and meal plans"
))]
pub struct ApiDoc;

/// Merges the per-resource documents. Resource handlers document absolute paths.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    for resource in [
        ClientApiDoc::openapi(),
        MedicalHistoryApiDoc::openapi(),
        FoodPreferenceApiDoc::openapi(),
        FoodOptionApiDoc::openapi(),
        CalendarApiDoc::openapi(),
        CalendarEventApiDoc::openapi(),
        MealPlanApiDoc::openapi(),
        FoodCombinationApiDoc::openapi(),
        CustomerApiDoc::openapi(),
    ] {
        openapi.merge(resource);
    }
    openapi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_resource_is_documented() {
        let openapi = api_doc();
        for path in [
            "/clients",
            "/client/{email}",
            "/clients/medical-histories/update/{id}",
            "/clients/food-preferences/{client_id}",
            "/food-options/create",
            "/calendars/delete",
            "/calendars/calendar-events/count/{user_email}",
            "/meal-plans/update/{client_id}",
            "/meal-plans/food-combinations/delete/{id}",
            "/customers/update/{id}",
        ] {
            assert!(openapi.paths.paths.contains_key(path), "{path} is undocumented");
        }
    }
}
