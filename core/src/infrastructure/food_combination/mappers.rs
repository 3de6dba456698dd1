use sea_orm::ActiveValue::Set;

use crate::domain::food_combination::entities::FoodCombination;
use crate::entity::food_combinations::{
    ActiveModel as FoodCombinationActiveModel, Model as FoodCombinationModel,
};

impl From<FoodCombinationModel> for FoodCombination {
    fn from(model: FoodCombinationModel) -> Self {
        FoodCombination {
            id: model.id,
            meal_plan_id: model.meal_plan_id,
            title: model.title,
            portion: model.portion,
            start: model.start.unwrap_or_default(),
            end: model.end.unwrap_or_default(),
            type_of_meal: model.type_of_meal.unwrap_or_default(),
            day: model.day,
        }
    }
}

impl From<FoodCombination> for FoodCombinationActiveModel {
    fn from(combination: FoodCombination) -> Self {
        FoodCombinationActiveModel {
            id: Set(combination.id),
            meal_plan_id: Set(combination.meal_plan_id),
            title: Set(combination.title),
            portion: Set(combination.portion),
            start: Set(Some(combination.start)),
            end: Set(Some(combination.end)),
            type_of_meal: Set(Some(combination.type_of_meal)),
            day: Set(combination.day),
        }
    }
}
