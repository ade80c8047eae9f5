mod field_tests;
mod validate_tests;
