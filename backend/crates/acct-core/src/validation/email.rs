//! Email address format checks.
//!
//! Accepts `local@domain` where the local part is a dot-atom and the domain
//! is either `localhost` or a dotted hostname ending in an alphabetic (or
//! punycode) top-level label. Quoted local parts and address literals are
//! rejected.

use crate::{MAX_EMAIL_LENGTH, MAX_EMAIL_LOCAL_LENGTH};

const MAX_LABEL_LENGTH: usize = 63;
const LOCAL_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-";

pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.len() > MAX_EMAIL_LENGTH {
        return false;
    }

    match value.rsplit_once('@') {
        Some((local, domain)) => is_valid_local_part(local) && is_valid_domain(domain),
        None => false,
    }
}

/// Lowercase the domain part, leaving the local part untouched
pub fn normalize_email(value: &str) -> String {
    match value.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_ascii_lowercase()),
        None => value.to_string(),
    }
}

fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.len() > MAX_EMAIL_LOCAL_LENGTH {
        return false;
    }

    local.split('.').all(|atom| {
        !atom.is_empty()
            && atom
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(c))
    })
}

fn is_valid_domain(domain: &str) -> bool {
    if domain.eq_ignore_ascii_case("localhost") {
        return true;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, hosts)) = labels.split_last() else {
        return false;
    };

    if hosts.is_empty() || !hosts.iter().all(|label| is_valid_label(label)) {
        return false;
    }

    is_valid_top_level_label(tld)
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LENGTH
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn is_valid_top_level_label(tld: &str) -> bool {
    if !is_valid_label(tld) {
        return false;
    }

    if tld.len() > 4 && tld[..4].eq_ignore_ascii_case("xn--") {
        return true;
    }

    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}
