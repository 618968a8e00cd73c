pub mod commands;
pub mod yaml_node;
