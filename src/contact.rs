//! Contact form buffer and the `mailto:` draft it turns into.

use thiserror::Error;

pub const DEFAULT_SUBJECT: &str = "Portfolio Contact";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in your {}", .0.label())]
    Missing(ContactField),
    #[error("'{0}' doesn't look like an email address")]
    InvalidEmail(String),
}

/// Where drafts go and how they are addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    pub recipient: String,
    pub greeting_name: String,
    pub default_subject: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    pub fn uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            if self.get(field).trim().is_empty() {
                return Err(ContactError::Missing(field));
            }
        }
        let email = self.email.trim();
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }

    pub fn compose(&self, settings: &MailSettings) -> MailDraft {
        let subject = if self.subject.trim().is_empty() {
            settings.default_subject.clone()
        } else {
            self.subject.clone()
        };
        let body = format!(
            "Hi {greeting},\n\nName: {name}\nEmail: {email}\n\nMessage:\n{message}\n\nBest regards,\n{name}",
            greeting = settings.greeting_name,
            name = self.name,
            email = self.email,
            message = self.message,
        );
        MailDraft {
            recipient: settings.recipient.clone(),
            subject,
            body,
        }
    }

    /// Validates, composes the draft and clears the buffer.
    ///
    /// An invalid form is not a submission: the error is returned and the
    /// buffer kept so the visitor can fix it.
    pub fn submit(&mut self, settings: &MailSettings) -> Result<MailDraft, ContactError> {
        self.validate()?;
        let draft = self.compose(settings);
        *self = Self::default();
        Ok(draft)
    }
}

/// How long a [`Notice`] stays on screen.
pub const NOTICE_DURATION_MS: f64 = 4000.0;

/// Toast shown after the visitor presses send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Rejected(ContactError),
}

impl Notice {
    pub fn from_outcome(outcome: &Result<MailDraft, ContactError>) -> Self {
        match outcome {
            Ok(_) => Self::Sent,
            Err(err) => Self::Rejected(err.clone()),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Sent => "Email client opened!",
            Self::Rejected(_) => "Message not sent",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Self::Sent => {
                "Your default email client should open with the message pre-filled.".to_string()
            }
            Self::Rejected(err) => err.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Same loose shape check as an `<input type="email">`.
pub fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> MailSettings {
        MailSettings {
            recipient: "owner@example.com".to_string(),
            greeting_name: "Sahithi".to_string(),
            default_subject: DEFAULT_SUBJECT.to_string(),
        }
    }

    fn jane() -> ContactForm {
        ContactForm {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    }

    fn query_param(uri: &str, key: &str) -> String {
        let (_, query) = uri.split_once('?').expect("uri should have a query");
        let raw = query
            .split('&')
            .find_map(|pair| pair.strip_prefix(&format!("{key}=")))
            .expect("param should be present");
        urlencoding::decode(raw).expect("param should decode").into_owned()
    }

    #[test]
    fn test_compose_contains_all_fields() {
        let draft = jane().compose(&settings());
        let uri = draft.uri();
        assert!(uri.starts_with("mailto:owner@example.com?subject="));

        assert_eq!(query_param(&uri, "subject"), "Hi");
        let body = query_param(&uri, "body");
        for value in ["Name: Jane", "Email: jane@x.com", "Message:\nHello"] {
            assert!(body.contains(value), "body missing {value}: {body}");
        }
        assert!(body.starts_with("Hi Sahithi,"));
        assert!(body.ends_with("Best regards,\nJane"));
    }

    #[test]
    fn test_subject_only_travels_in_subject_param() {
        let mut form = jane();
        form.subject = "Collaboration on GSSoC".to_string();
        let uri = form.compose(&settings()).uri();

        assert_eq!(query_param(&uri, "subject"), "Collaboration on GSSoC");
        // the body template has no subject line
        assert!(!query_param(&uri, "body").contains("Collaboration on GSSoC"));
    }

    #[test]
    fn test_empty_subject_falls_back() {
        let mut form = jane();
        form.subject = "   ".to_string();
        let uri = form.compose(&settings()).uri();
        assert_eq!(query_param(&uri, "subject"), DEFAULT_SUBJECT);
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let mut form = jane();
        form.subject = "Q&A? 100% yes=no".to_string();
        form.message = "line one\nline two & more".to_string();
        let uri = form.compose(&settings()).uri();

        // only the two separators we wrote ourselves survive unencoded
        assert_eq!(uri.matches('&').count(), 1);
        assert_eq!(uri.matches('?').count(), 1);
        assert_eq!(query_param(&uri, "subject"), "Q&A? 100% yes=no");
        assert!(query_param(&uri, "body").contains("line one\nline two & more"));
    }

    #[test]
    fn test_submit_resets_buffer() {
        let mut form = jane();
        let draft = form.submit(&settings()).expect("valid form submits");
        assert_eq!(draft.subject, "Hi");
        assert!(form.is_empty());
        for field in [
            ContactField::Name,
            ContactField::Email,
            ContactField::Subject,
            ContactField::Message,
        ] {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn test_invalid_submit_keeps_buffer() {
        let mut form = jane();
        form.message = String::new();
        assert_eq!(
            form.submit(&settings()),
            Err(ContactError::Missing(ContactField::Message))
        );
        assert_eq!(form.name, "Jane");

        form.message = "Hello".to_string();
        form.email = "not-an-email".to_string();
        assert_eq!(
            form.submit(&settings()),
            Err(ContactError::InvalidEmail("not-an-email".to_string()))
        );
        assert!(!form.is_empty());
    }

    #[test]
    fn test_subject_is_optional() {
        let mut form = jane();
        form.subject.clear();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_set_field() {
        let mut form = ContactForm::default();
        form.set(ContactField::Email, "a@b.co".to_string());
        assert_eq!(form.email, "a@b.co");
        assert_eq!(form.get(ContactField::Email), "a@b.co");
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("jane@x.com"));
        assert!(looks_like_email("a@localhost"));
        assert!(!looks_like_email("jane"));
        assert!(!looks_like_email("@x.com"));
        assert!(!looks_like_email("jane@"));
        assert!(!looks_like_email("jane@x@y"));
        assert!(!looks_like_email("ja ne@x.com"));
        assert!(!looks_like_email("jane@.com"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::Missing(ContactField::Name).to_string(),
            "Please fill in your name"
        );
    }

    #[test]
    fn test_notice_from_outcome() {
        let mut form = jane();
        let sent = Notice::from_outcome(&form.submit(&settings()));
        assert_eq!(sent, Notice::Sent);
        assert_eq!(sent.title(), "Email client opened!");
        assert!(!sent.is_error());

        let rejected = Notice::from_outcome(&form.submit(&settings()));
        assert!(rejected.is_error());
        assert_eq!(rejected.description(), "Please fill in your name");
    }
}
