//! ufind — filter a JSON list of users by name, age expression, or email/domain.
//!
//! This crate re-exports the workspace so that integration tests and benches
//! can import everything from one place.
//!
//! # Architecture
//!
//! ```text
//! users.json ──► Store ──► Filter ──► Shell ──► stdout
//!                            ▲
//!                 Age expr ──┘
//! ```
//!
//! Everything runs on the main thread: one file read at startup, then one
//! console read per prompt.

pub use ufind_core::*;
pub use ufind_shell as shell;
