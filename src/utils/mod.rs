pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{default_config_path, default_history_path};
pub use paths::{format_path_with_tilde, service_url, validate_byte_len, validate_file_size};
pub use terminal::sanitize_field;
