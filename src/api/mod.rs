pub mod ai;
pub mod compliance;
pub mod reference;
pub mod transaction;
