mod common;
mod config_reader_test;
mod form_server_test;
