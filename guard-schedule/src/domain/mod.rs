pub mod date_range;
pub mod edit_dialog;
pub mod filter;
pub mod generator;
pub mod index;
pub mod models;
pub mod mutator;
pub mod roster;
