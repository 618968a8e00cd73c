pub mod constants;
pub mod settings_manager;
