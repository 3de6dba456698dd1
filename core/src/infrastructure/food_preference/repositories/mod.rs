pub mod food_preference_repository;
