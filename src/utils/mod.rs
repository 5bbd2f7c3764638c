// URL handling utilities
pub mod url_encoding;
pub mod url_parser;

// JSON utilities
pub mod json_converter;

pub use url_encoding::parse_urlencoded_body;
pub use url_parser::hostname_from_url;
pub use json_converter::{is_truthy, value_to_short_string};
