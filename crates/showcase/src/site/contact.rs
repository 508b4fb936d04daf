//! `mailto:` composition for the contact form.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("'{0}' is not an email address")]
    InvalidRecipient(String),
}

/// What the visitor typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
}

impl ContactMessage {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Builds the URI handed to the visitor's mail client.
    ///
    /// Fields are percent-encoded; empty (or whitespace-only) fields are left
    /// out of the query.
    ///
    /// ```rust
    /// use showcase::ContactMessage;
    ///
    /// let uri = ContactMessage::new("Hello there", "").mailto("me@example.com").unwrap();
    /// assert_eq!(uri, "mailto:me@example.com?subject=Hello%20there");
    /// ```
    pub fn mailto(&self, recipient: &str) -> Result<String, ContactError> {
        let recipient = recipient.trim();
        let valid = recipient
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && !domain.is_empty())
            && !recipient.contains(char::is_whitespace);
        if !valid {
            return Err(ContactError::InvalidRecipient(recipient.to_string()));
        }

        let params: Vec<String> = [("subject", &self.subject), ("body", &self.body)]
            .into_iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
            .collect();

        let mut uri = format!("mailto:{recipient}");
        if !params.is_empty() {
            uri.push('?');
            uri.push_str(&params.join("&"));
        }
        Ok(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_and_body_encoded() {
        let message = ContactMessage::new("Job & chat", "Hi Sam,\nLet's talk?");
        let uri = message.mailto("sam@example.com").unwrap();
        assert_eq!(
            uri,
            "mailto:sam@example.com?subject=Job%20%26%20chat&body=Hi%20Sam%2C%0ALet%27s%20talk%3F"
        );
    }

    #[test]
    fn test_empty_fields_omitted() {
        let uri = ContactMessage::default().mailto("sam@example.com").unwrap();
        assert_eq!(uri, "mailto:sam@example.com");

        let uri = ContactMessage::new("  ", "Body").mailto("sam@example.com").unwrap();
        assert_eq!(uri, "mailto:sam@example.com?body=Body");
    }

    #[test]
    fn test_invalid_recipient() {
        for bad in ["", "sam", "@example.com", "sam@", "sam @example.com"] {
            assert!(
                ContactMessage::default().mailto(bad).is_err(),
                "{bad:?} should be rejected"
            );
        }
    }
}
