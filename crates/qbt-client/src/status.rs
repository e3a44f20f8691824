//! Mapping from HTTP status codes to domain failures.
//!
//! Every binding declares a small ordered table of [`StatusRule`]s. Exact
//! rules are checked before negated ones, so a table like
//! `[Is(404, "not found"), Not(200, "failed")]` reports the specific message for
//! a 404 and the generic one for any other non-200 status.

use qbt_types::QbtError;

/// A single status rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusRule {
    /// Fires when the status equals the code.
    Is(u16, &'static str),
    /// Fires when the status differs from the code.
    Not(u16, &'static str),
}

/// Message of the first matching rule: exact rules first, then negated ones.
pub fn resolve(rules: &[StatusRule], status: u16) -> Option<&'static str> {
    let exact = rules.iter().find_map(|rule| match *rule {
        StatusRule::Is(code, reason) if code == status => Some(reason),
        _ => None,
    });
    exact.or_else(|| {
        rules.iter().find_map(|rule| match *rule {
            StatusRule::Not(code, reason) if code != status => Some(reason),
            _ => None,
        })
    })
}

/// Fails with [`QbtError::BadResponse`] when a rule matches.
pub fn check(rules: &[StatusRule], status: u16) -> Result<(), QbtError> {
    match resolve(rules, status) {
        Some(reason) => Err(QbtError::bad_response(status, reason)),
        None => Ok(()),
    }
}
