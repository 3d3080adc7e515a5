pub mod config;
pub mod logging;

pub mod bench;
pub mod url_model;

pub use url_model::{format, parse, parse_with, ParseError, SchemePolicy, Url};
