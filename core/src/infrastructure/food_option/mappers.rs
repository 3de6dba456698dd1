use crate::domain::food_option::entities::FoodOption;
use crate::entity::food_options::Model as FoodOptionModel;

impl From<FoodOptionModel> for FoodOption {
    fn from(model: FoodOptionModel) -> Self {
        FoodOption {
            id: model.id,
            value: model.value,
            text: model.text,
            label: model.label,
        }
    }
}
