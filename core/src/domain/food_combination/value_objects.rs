#[derive(Debug, Clone, Default)]
pub struct FoodCombinationPatch {
    pub meal_plan_id: Option<i32>,
    pub title: Option<String>,
    pub portion: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub type_of_meal: Option<String>,
    pub day: Option<String>,
}
