//! Test builders — ergonomic constructors for `UserRecord` values.
//!
//! Records are built from a JSON object the same way the loader builds them,
//! so a fixture behaves exactly like a line of `users.json`.

use serde_json::{Map, Value};
use ufind::UserRecord;

// ---------------------------------------------------------------------------
// UserBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`UserRecord`] fixtures.
///
/// # Example
///
/// ```rust
/// let user = UserBuilder::new("Bob")
///     .age(25)
///     .email("bob@x.com")
///     .field("role", "admin")
///     .build();
/// ```
pub struct UserBuilder {
    fields: Map<String, Value>,
}

impl UserBuilder {
    pub fn new(name: impl Into<Value>) -> Self {
        let mut fields = Map::new();
        fields.insert("name".to_string(), name.into());
        Self { fields }
    }

    /// A record with no `name` key at all.
    pub fn nameless() -> Self {
        Self { fields: Map::new() }
    }

    pub fn age(self, age: impl Into<Value>) -> Self {
        self.field("age", age)
    }

    pub fn email(self, email: impl Into<Value>) -> Self {
        self.field("email", email)
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> UserRecord {
        UserRecord::from_object(self.fields)
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build a record with all three fields set.
pub fn user(name: &str, age: i64, email: &str) -> UserRecord {
    UserBuilder::new(name).age(age).email(email).build()
}

/// Build one record per age in `ages`, named `user-<index>`.
pub fn users_with_ages(ages: &[i64]) -> Vec<UserRecord> {
    ages.iter()
        .enumerate()
        .map(|(i, &age)| user(&format!("user-{i}"), age, &format!("user{i}@example.com")))
        .collect()
}

/// Build a directory of `n` users with cycling domains and ages 18..=77.
pub fn build_directory(n: usize) -> Vec<UserRecord> {
    const DOMAINS: &[&str] = &["example.com", "x.com", "corp.example.org"];
    (0..n)
        .map(|i| {
            let domain = DOMAINS[i % DOMAINS.len()];
            user(&format!("user-{i}"), 18 + (i % 60) as i64, &format!("user{i}@{domain}"))
        })
        .collect()
}
