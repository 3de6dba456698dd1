use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertFoodCombinationValidator {
    #[serde(default)]
    pub meal_plan_id: Option<i32>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub portion: Option<String>,

    #[serde(default)]
    pub start: Option<String>,

    #[serde(default)]
    pub end: Option<String>,

    #[serde(default, rename = "typeOfMeal")]
    pub type_of_meal: Option<String>,

    #[serde(default)]
    pub day: Option<String>,
}
