pub mod balances;
pub mod error;
pub mod upload;
