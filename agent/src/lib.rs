//! LLM-driven file automation agent.
//!
//! This crate turns a plain-language task description into one of a small set
//! of file operations and executes it against a restricted data directory.
//! The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (reply parsing, line counting,
//!   contact sorting). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting concerns (path guarding, configuration).
//!
//! [`interpreter`] holds the completion-service client behind a trait seam so
//! callers can substitute a scripted backend in tests, and [`dispatch`]
//! coordinates core logic with filesystem I/O to execute one operation.

pub mod core;
pub mod dispatch;
pub mod interpreter;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
