pub mod actions;
pub mod similarity;
