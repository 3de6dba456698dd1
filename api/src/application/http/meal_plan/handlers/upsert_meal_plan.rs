use axum::extract::State;
use foodboot_core::domain::{
    common::upsert::Upserted,
    meal_plan::{entities::MealPlan, ports::MealPlanService, value_objects::MealPlanPatch},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    meal_plan::validators::UpsertMealPlanValidator,
    path_params::NumericId,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpsertMealPlanResponse {
    pub message: String,
    pub meal_plan: MealPlan,
}

impl From<Upserted<MealPlan>> for UpsertMealPlanResponse {
    fn from(upserted: Upserted<MealPlan>) -> Self {
        let message = if upserted.is_created() {
            "Meal Plan added!"
        } else {
            "Meal Plan updated!"
        };

        Self {
            message: message.to_string(),
            meal_plan: upserted.into_inner(),
        }
    }
}

#[utoipa::path(
    put,
    path = "/meal-plans/update/{client_id}",
    tag = "meal-plan",
    summary = "Create or update a client's meal plan",
    description = "`client_first_name`, `client_last_name` and `date` are always required and the client must exist.",
    params(
        ("client_id" = i32, Path, description = "Client ID"),
    ),
    request_body = UpsertMealPlanValidator,
    responses(
        (status = 200, body = UpsertMealPlanResponse),
        (status = 404, description = "Invalid client"),
        (status = 409, description = "Meal plan for this client already exists"),
        (status = 422, description = "Missing fields or non-numeric ID")
    )
)]
pub async fn upsert_meal_plan(
    NumericId(client_id): NumericId,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpsertMealPlanValidator>,
) -> Result<Response<UpsertMealPlanResponse>, ApiError> {
    let upserted = state
        .service
        .upsert_meal_plan(
            client_id,
            MealPlanPatch {
                client_first_name: payload.client_first_name,
                client_last_name: payload.client_last_name,
                date: payload.date,
                age: payload.age,
                weight: payload.weight,
                notes: payload.notes,
            },
        )
        .await?;

    Ok(Response::OK(UpsertMealPlanResponse::from(upserted)))
}
