pub mod advisory;
pub mod reference;
pub mod transaction;
