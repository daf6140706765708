use crate::core::{elements, CountTally, Rejection};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EmailRejection {
    NotAString,
    Blank,
    AtSignCount,
    EmptyLocalPart,
    EmptyDomain,
    DomainWithoutDot,
    DomainEdgeDot,
    ShortTld,
}

impl Rejection for EmailRejection {
    fn as_str(&self) -> &'static str {
        match self {
            EmailRejection::NotAString => "not_a_string",
            EmailRejection::Blank => "blank",
            EmailRejection::AtSignCount => "at_sign_count",
            EmailRejection::EmptyLocalPart => "empty_local_part",
            EmailRejection::EmptyDomain => "empty_domain",
            EmailRejection::DomainWithoutDot => "domain_without_dot",
            EmailRejection::DomainEdgeDot => "domain_edge_dot",
            EmailRejection::ShortTld => "short_tld",
        }
    }
}

/// Structural check of one address: `local@domain.tld`, with a single `@`,
/// a dotted domain that neither starts nor ends with `.`, and a TLD of two
/// or more characters. Surrounding whitespace is ignored.
pub fn validate_email(candidate: &str) -> Result<(), EmailRejection> {
    let email = candidate.trim();
    if email.is_empty() {
        return Err(EmailRejection::Blank);
    }

    if email.matches('@').count() != 1 {
        return Err(EmailRejection::AtSignCount);
    }
    let (local, domain) = email.split_once('@').ok_or(EmailRejection::AtSignCount)?;

    if local.is_empty() {
        return Err(EmailRejection::EmptyLocalPart);
    }
    if domain.is_empty() {
        return Err(EmailRejection::EmptyDomain);
    }
    if !domain.contains('.') {
        return Err(EmailRejection::DomainWithoutDot);
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return Err(EmailRejection::DomainEdgeDot);
    }

    let tld = domain.rsplit('.').next().unwrap_or_default();
    if tld.chars().count() < 2 {
        return Err(EmailRejection::ShortTld);
    }

    Ok(())
}

pub fn is_valid_email(candidate: &str) -> bool {
    validate_email(candidate).is_ok()
}

pub fn summarize_emails(emails: &Value) -> CountTally<EmailRejection> {
    let mut tally = CountTally::new();

    for (index, email) in elements(emails).iter().enumerate() {
        let verdict = match email {
            Value::String(candidate) => validate_email(candidate),
            _ => Err(EmailRejection::NotAString),
        };

        match verdict {
            Ok(()) => tally.accept(),
            Err(reason) => {
                tracing::trace!(index, reason = reason.as_str(), "skipping email");
                tally.reject(reason);
            }
        }
    }

    tracing::debug!(
        "Emails: {} valid, {} skipped",
        tally.accepted,
        tally.rejected_count()
    );
    tally
}

pub fn count_valid_emails(emails: &Value) -> usize {
    summarize_emails(emails).accepted
}
