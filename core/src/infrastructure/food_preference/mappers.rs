use sea_orm::ActiveValue::Set;

use crate::domain::food_preference::entities::FoodPreference;
use crate::entity::food_preferences::{
    ActiveModel as FoodPreferenceActiveModel, Model as FoodPreferenceModel,
};

impl From<FoodPreferenceModel> for FoodPreference {
    fn from(model: FoodPreferenceModel) -> Self {
        FoodPreference {
            client_id: model.client_id,
            value: model.value,
        }
    }
}

impl From<FoodPreference> for FoodPreferenceActiveModel {
    fn from(preference: FoodPreference) -> Self {
        FoodPreferenceActiveModel {
            client_id: Set(preference.client_id),
            value: Set(preference.value),
        }
    }
}
