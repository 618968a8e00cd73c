pub mod form_server;
pub mod template_registry;
