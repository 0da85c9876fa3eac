pub mod cli;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod locate;
pub mod provision;
pub mod resolve;
pub mod toxini;

pub use cli::Cli;
pub use context::RunContext;
pub use dispatch::Invocation;
pub use error::{Error, Result};
pub use toxini::LintConfig;
