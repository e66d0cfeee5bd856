pub mod constants;
pub mod date;
pub mod test_helpers;
pub mod types;
pub mod validation;
