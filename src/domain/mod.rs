pub mod branch;
pub mod change;
pub mod identity;
pub mod repository;
