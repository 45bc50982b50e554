pub mod commands;
pub mod context;
pub mod logging;
pub mod printer;
pub mod repl;
pub mod speech;

pub use context::CliContext;
pub use repl::readline;
