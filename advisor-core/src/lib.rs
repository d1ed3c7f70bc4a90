//! # advisor-core
//!
//! Core types shared by the advisor crates: the [`Renderer`] trait the session draws through,
//! the [`AdvisorError`] taxonomy, and tracing initialization. Transport-agnostic; used by
//! advisor-session and advisor-cli.

pub mod error;
pub mod logger;
pub mod render;

pub use error::{AdvisorError, Result};
pub use logger::{init_tracing, truncate_for_log, MAX_LOG_CONTENT_LEN};
pub use render::Renderer;
