use super::constants::{EMAIL_LABEL, PHONE_LABELS};

/// Navigation triggered by activating a contact entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactAction {
    Call(String),
    Mail(String),
}

impl ContactAction {
    /// Decide from the entry's label and displayed value. Unrecognized
    /// labels yield `None`.
    pub fn from_entry(label: &str, value: &str) -> Option<Self> {
        if PHONE_LABELS.iter().any(|l| label.contains(l)) {
            Some(ContactAction::Call(dial_string(value)))
        } else if label.contains(EMAIL_LABEL) {
            Some(ContactAction::Mail(value.trim().to_string()))
        } else {
            None
        }
    }

    pub fn href(&self) -> String {
        match self {
            ContactAction::Call(number) => format!("tel:{}", number),
            ContactAction::Mail(address) => format!("mailto:{}", address),
        }
    }
}

/// Displayed phone number with whitespace and hyphen separators removed.
#[inline]
pub fn dial_string(displayed: &str) -> String {
    displayed
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}
