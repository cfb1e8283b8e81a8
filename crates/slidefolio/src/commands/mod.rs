pub mod catalog;
pub mod completion;
pub mod config;
