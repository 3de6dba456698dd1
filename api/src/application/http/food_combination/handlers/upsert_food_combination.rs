use axum::extract::{Path, State};
use foodboot_core::domain::{
    common::upsert::Upserted,
    food_combination::{
        entities::FoodCombination, ports::FoodCombinationService,
        value_objects::FoodCombinationPatch,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    food_combination::validators::UpsertFoodCombinationValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpsertFoodCombinationResponse {
    pub message: String,
    pub food_combination: FoodCombination,
}

impl From<Upserted<FoodCombination>> for UpsertFoodCombinationResponse {
    fn from(upserted: Upserted<FoodCombination>) -> Self {
        let message = if upserted.is_created() {
            "Food Combination added!"
        } else {
            "Food Combination updated!"
        };

        Self {
            message: message.to_string(),
            food_combination: upserted.into_inner(),
        }
    }
}

#[utoipa::path(
    put,
    path = "/meal-plans/food-combinations/update/{id}",
    tag = "food-combination",
    summary = "Create or update a food combination",
    description = "Every field is required and the meal plan `meal_plan_id` must exist.",
    params(
        ("id" = String, Path, description = "Food combination ID"),
    ),
    request_body = UpsertFoodCombinationValidator,
    responses(
        (status = 200, body = UpsertFoodCombinationResponse),
        (status = 404, description = "Invalid meal plan"),
        (status = 409, description = "Food combination already recorded"),
        (status = 422, description = "Missing fields")
    )
)]
pub async fn upsert_food_combination(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpsertFoodCombinationValidator>,
) -> Result<Response<UpsertFoodCombinationResponse>, ApiError> {
    let upserted = state
        .service
        .upsert_food_combination(
            id,
            FoodCombinationPatch {
                meal_plan_id: payload.meal_plan_id,
                title: payload.title,
                portion: payload.portion,
                start: payload.start,
                end: payload.end,
                type_of_meal: payload.type_of_meal,
                day: payload.day,
            },
        )
        .await?;

    Ok(Response::OK(UpsertFoodCombinationResponse::from(upserted)))
}
