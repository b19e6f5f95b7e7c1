pub mod cast;
pub mod find;
pub mod show;
