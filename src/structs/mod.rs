pub mod cli;
pub mod config;
pub mod mapping_builder;
pub mod source_config;
