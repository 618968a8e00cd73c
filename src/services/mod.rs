pub mod config_reader;
pub mod config_writer;
pub mod form_extractor;
pub mod yaml_emitter;
pub mod yaml_renderer;
