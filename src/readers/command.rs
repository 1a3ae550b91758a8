pub mod add_reader_cmd;
pub mod get_reader_cmd;
pub mod list_readers_cmd;
pub mod remove_reader_cmd;
