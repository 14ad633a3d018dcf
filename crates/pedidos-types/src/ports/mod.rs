pub mod order_repository;
pub mod user_repository;
