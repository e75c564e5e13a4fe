//! The closed set of demo accounts.
//!
//! Passwords are compared in plaintext. This is a demonstration login, not
//! an authentication system.

use portal_types::{Identity, Role};

struct DemoAccount {
    username: &'static str,
    password: &'static str,
    id: &'static str,
    email: &'static str,
    role: Role,
}

const DEMO_ACCOUNTS: [DemoAccount; 2] = [
    DemoAccount {
        username: "voter",
        password: "password",
        id: "1",
        email: "voter@example.com",
        role: Role::Voter,
    },
    DemoAccount {
        username: "commissioner",
        password: "password",
        id: "2",
        email: "commissioner@example.com",
        role: Role::Commissioner,
    },
];

/// The fixed identity for a matching username/password pair.
pub fn authenticate(username: &str, password: &str) -> Option<Identity> {
    DEMO_ACCOUNTS
        .iter()
        .find(|a| a.username == username && a.password == password)
        .map(|a| Identity {
            id: a.id.to_string(),
            username: a.username.to_string(),
            email: a.email.to_string(),
            role: Some(a.role),
        })
}
