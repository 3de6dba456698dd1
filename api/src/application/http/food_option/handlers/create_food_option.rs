use axum::extract::State;
use foodboot_core::domain::food_option::{
    entities::FoodOption, ports::FoodOptionService, value_objects::CreateFoodOptionInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    food_option::validators::CreateFoodOptionValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateFoodOptionResponse {
    pub message: String,
    pub food_option: FoodOption,
}

#[utoipa::path(
    post,
    path = "/food-options/create",
    tag = "food-option",
    summary = "Create a food option",
    request_body = CreateFoodOptionValidator,
    responses(
        (status = 200, body = CreateFoodOptionResponse),
        (status = 409, description = "Food option already exists"),
        (status = 422, description = "Missing fields")
    )
)]
pub async fn create_food_option(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateFoodOptionValidator>,
) -> Result<Response<CreateFoodOptionResponse>, ApiError> {
    let (Some(value), Some(text), Some(label)) = (payload.value, payload.text, payload.label)
    else {
        return Err(ApiError::missing_fields());
    };

    let food_option = state
        .service
        .create_food_option(CreateFoodOptionInput { value, text, label })
        .await?;

    Ok(Response::OK(CreateFoodOptionResponse {
        message: "Food option created!".to_string(),
        food_option,
    }))
}
