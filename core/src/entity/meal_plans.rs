use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "meal_plans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub client_id: i32,
    pub client_first_name: String,
    pub client_last_name: String,
    pub date: Option<DateTimeWithTimeZone>,
    pub age: Option<i32>,
    #[sea_orm(column_type = "Double", nullable)]
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
