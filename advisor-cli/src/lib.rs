//! # advisor-cli
//!
//! Terminal host for [`advisor_session::ConversationSession`]: CLI parsing and config loading,
//! a [`ConsoleRenderer`], and the interactive chat loop.

pub mod cli;
pub mod console;
pub mod repl;

pub use cli::{build_session, load_config, Cli, Commands};
pub use console::ConsoleRenderer;
pub use repl::{run_ask, run_chat};
