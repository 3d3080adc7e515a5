//! CLI command handlers. Each command is in its own file.

mod bench;
mod format;
mod host;
mod parse;
mod set_scheme;

pub use bench::run_bench;
pub use format::run_format;
pub use host::{run_hostname, run_port};
pub use parse::run_parse;
pub use set_scheme::run_set_scheme;
