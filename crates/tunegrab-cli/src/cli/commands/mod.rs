//! CLI command handlers, one file per subcommand.

mod fetch;
mod normalize;

pub use fetch::run_fetch;
pub use normalize::run_normalize;
