//! ufind-core — record model, loader, and filter engine for ufind.
//!
//! # Architecture
//!
//! ```text
//! users.json ──► Store ──► Filter ──► Shell
//!                            ▲
//!                 Age expr ──┘
//! ```
//!
//! Everything here is synchronous and pure apart from [`store::load_users`]
//! and [`config::Config::load`], which read files.

pub mod age;
pub mod config;
pub mod error;
pub mod filter;
pub mod store;
pub mod types;

pub use age::{parse_age_filter, AgeFilter, CmpOp};
pub use error::{DataError, InvalidExpression};
pub use filter::{filter_by_age, filter_by_email, filter_by_name, EmailQuery, FilterKind};
pub use store::{load_users, parse_users};
pub use types::{Age, UserRecord};
