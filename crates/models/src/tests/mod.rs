/// Database round trips for the coffee entity
pub mod crud_tests;
