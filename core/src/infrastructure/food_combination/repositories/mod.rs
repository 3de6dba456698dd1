pub mod food_combination_repository;
