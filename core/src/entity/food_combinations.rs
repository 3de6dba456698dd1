use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "food_combinations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(indexed)]
    pub meal_plan_id: i32,
    pub title: String,
    pub portion: String,
    pub start: Option<String>,
    pub end: Option<String>,
    #[sea_orm(column_name = "typeOfMeal")]
    pub type_of_meal: Option<String>,
    pub day: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
