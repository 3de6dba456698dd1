pub mod meal_plan_repository;
