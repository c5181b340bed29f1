//! Result printing.

use std::io::{self, Write};
use ufind_core::{config::OutputFormat, UserRecord};

/// Printed instead of an empty result block.
pub const NO_MATCHES: &str = "No matching users.";

/// Print `users` one per line in the given format, or [`NO_MATCHES`] if empty.
pub fn print_users<W: Write>(
    out: &mut W,
    users: &[&UserRecord],
    format: OutputFormat,
) -> io::Result<()> {
    if users.is_empty() {
        return writeln!(out, "{NO_MATCHES}");
    }
    for user in users {
        match format {
            OutputFormat::Json => writeln!(out, "{user}")?,
            OutputFormat::Pretty => {
                let text = serde_json::to_string_pretty(user).map_err(io::Error::other)?;
                writeln!(out, "{text}")?;
            }
        }
    }
    Ok(())
}
