use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};

use crate::entity::prelude::{
    CalendarEvents, Calendars, Clients, Customers, FoodCombinations, FoodOptions,
    FoodPreferences, MealPlans, MedicalHistory,
};

/// Creates every table from the entity definitions.
///
/// Postgres deployments use the SQL migrations instead; this is for databases that
/// start empty, such as in-memory SQLite.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let statements = [
        schema.create_table_from_entity(Clients),
        schema.create_table_from_entity(MedicalHistory),
        schema.create_table_from_entity(FoodPreferences),
        schema.create_table_from_entity(FoodOptions),
        schema.create_table_from_entity(Calendars),
        schema.create_table_from_entity(CalendarEvents),
        schema.create_table_from_entity(MealPlans),
        schema.create_table_from_entity(FoodCombinations),
        schema.create_table_from_entity(Customers),
    ];

    for statement in statements {
        db.execute(backend.build(&statement)).await?;
    }

    Ok(())
}
