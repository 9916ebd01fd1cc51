pub mod clause_config;
pub mod collections;
pub mod form_type;
pub mod value;
