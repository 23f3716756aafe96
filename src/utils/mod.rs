pub mod error;
pub mod logger;
pub mod must;
pub mod validation;
