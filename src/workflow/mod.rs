pub mod changes;
pub mod identity;
pub mod inspect;
pub mod probe;
pub mod publish;
pub mod save;
