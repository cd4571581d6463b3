pub mod error;
pub mod startup;
