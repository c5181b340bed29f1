//! Filter engine — linear scans over the loaded users.
//!
//! Every filter returns borrowed references in the order the records were
//! loaded. Nothing here mutates or reorders the store.

use crate::{age::parse_age_filter, error::InvalidExpression, UserRecord};

// ---------------------------------------------------------------------------
// Filter kind
// ---------------------------------------------------------------------------

/// Which field the user chose to filter by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Name,
    Age,
    Email,
}

impl FilterKind {
    /// Parse the answer to the "filter by" prompt. Case and surrounding
    /// whitespace are ignored; anything unrecognised is `None`.
    pub fn parse(input: &str) -> Option<FilterKind> {
        match input.trim().to_lowercase().as_str() {
            "name" => Some(FilterKind::Name),
            "age" => Some(FilterKind::Age),
            "email" => Some(FilterKind::Email),
            _ => None,
        }
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterKind::Name => write!(f, "name"),
            FilterKind::Age => write!(f, "age"),
            FilterKind::Email => write!(f, "email"),
        }
    }
}

// ---------------------------------------------------------------------------
// Name
// ---------------------------------------------------------------------------

fn normalize_name(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Exact, case-insensitive name match after trimming both sides. A record
/// without a name compares as the empty string.
pub fn filter_by_name<'a>(query: &str, users: &'a [UserRecord]) -> Vec<&'a UserRecord> {
    let wanted = normalize_name(query);
    let matched: Vec<_> = users
        .iter()
        .filter(|u| normalize_name(u.name.as_deref().unwrap_or("")) == wanted)
        .collect();
    tracing::debug!(query, matched = matched.len(), "filter: by name");
    matched
}

// ---------------------------------------------------------------------------
// Age
// ---------------------------------------------------------------------------

/// Parse `expr` and keep the records it matches.
///
/// An unparsable expression is returned as an error before any record is
/// examined.
pub fn filter_by_age<'a>(
    expr: &str,
    users: &'a [UserRecord],
) -> Result<Vec<&'a UserRecord>, InvalidExpression> {
    let filter = parse_age_filter(expr)?;
    let matched: Vec<_> = users.iter().filter(|u| filter.matches(u)).collect();
    tracing::debug!(expr, %filter, matched = matched.len(), "filter: by age");
    Ok(matched)
}

// ---------------------------------------------------------------------------
// Email
// ---------------------------------------------------------------------------

/// A lower-cased email query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailQuery {
    /// `@` followed by at least one character, matched as a plain suffix of
    /// the address. Not subdomain-aware.
    Domain(String),
    /// A full address, matched exactly.
    Address(String),
}

impl EmailQuery {
    pub fn parse(query: &str) -> EmailQuery {
        let q = query.to_lowercase();
        if q.len() > 1 && q.starts_with('@') {
            EmailQuery::Domain(q)
        } else {
            EmailQuery::Address(q)
        }
    }

    /// Records with no email, or an empty one, never match.
    pub fn matches(&self, user: &UserRecord) -> bool {
        let Some(email) = user.email.as_deref().filter(|e| !e.is_empty()) else {
            return false;
        };
        let email = email.to_lowercase();
        match self {
            EmailQuery::Domain(suffix) => email.ends_with(suffix.as_str()),
            EmailQuery::Address(address) => email == *address,
        }
    }
}

/// Filter by full address or, for queries starting with `@`, by suffix.
pub fn filter_by_email<'a>(query: &str, users: &'a [UserRecord]) -> Vec<&'a UserRecord> {
    let email_query = EmailQuery::parse(query);
    let matched: Vec<_> = users.iter().filter(|u| email_query.matches(u)).collect();
    tracing::debug!(query, ?email_query, matched = matched.len(), "filter: by email");
    matched
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
