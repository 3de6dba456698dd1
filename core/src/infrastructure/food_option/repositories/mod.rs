pub mod food_option_repository;
