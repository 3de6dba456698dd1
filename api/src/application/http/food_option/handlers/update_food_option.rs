use axum::extract::State;
use foodboot_core::domain::food_option::{
    entities::FoodOption, ports::FoodOptionService, value_objects::UpdateFoodOptionInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    food_option::validators::UpdateFoodOptionValidator,
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
pub struct UpdateFoodOptionResponse {
    pub message: String,
    pub food_option: FoodOption,
}

#[utoipa::path(
    put,
    path = "/food-options/update/{id}",
    tag = "food-option",
    summary = "Update a food option",
    params(
        ("id" = i32, Path, description = "Food option ID"),
    ),
    request_body = UpdateFoodOptionValidator,
    responses(
        (status = 200, body = UpdateFoodOptionResponse),
        (status = 404, description = "Food option not found"),
        (status = 409, description = "Food option already exists"),
        (status = 422, description = "ID is non-numeric")
    )
)]
pub async fn update_food_option(
    NumericId(id): NumericId,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateFoodOptionValidator>,
) -> Result<Response<UpdateFoodOptionResponse>, ApiError> {
    let food_option = state
        .service
        .update_food_option(
            id,
            UpdateFoodOptionInput {
                value: payload.value,
                text: payload.text,
                label: payload.label,
            },
        )
        .await?;

    Ok(Response::OK(UpdateFoodOptionResponse {
        message: "Food option updated!".to_string(),
        food_option,
    }))
}
