pub mod errors;
pub mod postgres;
pub mod query;
pub mod schema;

#[cfg(test)]
pub(crate) mod testing {
    use sea_orm::{ConnectOptions, Database, DatabaseConnection};

    use super::schema::create_schema;

    /// A fresh in-memory SQLite database with every table created.
    pub async fn sqlite_memory() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Database::connect(options).await.unwrap();
        create_schema(&db).await.unwrap();
        db
    }
}
