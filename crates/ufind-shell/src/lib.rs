//! ufind shell — console prompts and result printing.

pub mod output;
pub mod session;

pub use output::print_users;
pub use session::{Outcome, Session};

use ufind_core::{config::Config, UserRecord};

/// Run one session on stdin/stdout. `kind` and `query` pre-answer the prompts.
pub fn run(
    users: &[UserRecord],
    config: &Config,
    kind: Option<String>,
    query: Option<String>,
) -> anyhow::Result<Outcome> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock()).format(config.output.format);
    if let Some(kind) = kind {
        session = session.kind(kind);
    }
    if let Some(query) = query {
        session = session.query(query);
    }
    Ok(session.run(users)?)
}
