pub mod git;
pub mod terminal;
