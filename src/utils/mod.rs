pub mod error;
pub mod genes;
pub mod logger;
pub mod validation;
