pub mod entities;
pub mod services;
pub mod upsert;
pub mod value_objects;

#[derive(Clone, Debug)]
pub struct FoodbootConfig {
    pub database: DatabaseConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}
