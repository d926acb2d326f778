//! Contact form: fields, validation and submission state
//!
//! Submission is asynchronous. [`ContactForm::submit`] validates and hands
//! the message to a [`ContactDispatcher`]; the outcome is picked up later
//! with [`ContactForm::poll`] (or [`ContactForm::wait`]). Fields are cleared
//! only after a successful delivery.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

use crate::notification::{Notification, Notifications};
use crate::transport::{ContactDispatcher, TransportError};

/// Pattern a submitted email address must match
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";
pub const SUCCESS_TITLE: &str = "Message Sent Successfully!";
pub const SUCCESS_DESCRIPTION: &str =
    "Thank you for reaching out. I'll get back to you within 24 hours!";

/// Kind of opportunity the sender is reaching out about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpportunityType {
    FullTime,
    Internship,
    Freelance,
    Collaboration,
    Mentorship,
    Networking,
    Other,
}

impl OpportunityType {
    pub const ALL: [OpportunityType; 7] = [
        OpportunityType::FullTime,
        OpportunityType::Internship,
        OpportunityType::Freelance,
        OpportunityType::Collaboration,
        OpportunityType::Mentorship,
        OpportunityType::Networking,
        OpportunityType::Other,
    ];

    /// Form value, e.g. `full-time`
    pub fn value(self) -> &'static str {
        match self {
            OpportunityType::FullTime => "full-time",
            OpportunityType::Internship => "internship",
            OpportunityType::Freelance => "freelance",
            OpportunityType::Collaboration => "collaboration",
            OpportunityType::Mentorship => "mentorship",
            OpportunityType::Networking => "networking",
            OpportunityType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OpportunityType::FullTime => "Full-time Position",
            OpportunityType::Internship => "Internship",
            OpportunityType::Freelance => "Freelance Project",
            OpportunityType::Collaboration => "Collaboration",
            OpportunityType::Mentorship => "Mentorship",
            OpportunityType::Networking => "Networking",
            OpportunityType::Other => "Other",
        }
    }

    /// Parse a form value; an empty or unknown value means unset
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

/// How the sender would like to be contacted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactPreference {
    Email,
    Phone,
    Video,
    InPerson,
}

impl ContactPreference {
    pub const ALL: [ContactPreference; 4] = [
        ContactPreference::Email,
        ContactPreference::Phone,
        ContactPreference::Video,
        ContactPreference::InPerson,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ContactPreference::Email => "email",
            ContactPreference::Phone => "phone",
            ContactPreference::Video => "video",
            ContactPreference::InPerson => "in-person",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactPreference::Email => "Email",
            ContactPreference::Phone => "Phone Call",
            ContactPreference::Video => "Video Call",
            ContactPreference::InPerson => "In-Person Meeting",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.value() == value)
    }
}

/// Everything the sender typed; also the message handed to a transport
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub opportunity: Option<OpportunityType>,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub preferred_contact: Option<ContactPreference>,
}

impl ContactFields {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Required form field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// Why a form was rejected before sending
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty or whitespace
    MissingField(Field),
    /// The email does not look like an address
    InvalidEmail,
}

impl ValidationError {
    /// Text shown to the sender
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingField(_) => MISSING_FIELDS_MESSAGE,
            ValidationError::InvalidEmail => INVALID_EMAIL_MESSAGE,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingField(field) => {
                write!(f, "Missing required field: {}", field.name())
            }
            ValidationError::InvalidEmail => write!(f, "Invalid email address"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Why a submission did not go through
#[derive(Debug)]
pub enum SubmitError {
    /// Rejected by validation; nothing was sent
    Invalid(ValidationError),
    /// A previous submission has not resolved yet
    InProgress,
    /// Delivery failed
    Transport(TransportError),
}

impl From<ValidationError> for SubmitError {
    fn from(e: ValidationError) -> Self {
        SubmitError::Invalid(e)
    }
}

impl From<TransportError> for SubmitError {
    fn from(e: TransportError) -> Self {
        SubmitError::Transport(e)
    }
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Invalid(e) => write!(f, "Invalid submission: {}", e),
            SubmitError::InProgress => write!(f, "A submission is already in progress"),
            SubmitError::Transport(e) => write!(f, "Delivery failed: {}", e),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmitError::Invalid(e) => Some(e),
            SubmitError::InProgress => None,
            SubmitError::Transport(e) => Some(e),
        }
    }
}

static EMAIL_REGEX: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

/// Whether a string looks like an email address
pub fn is_valid_email(email: &str) -> bool {
    match EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN)) {
        Ok(re) => re.is_match(email),
        Err(e) => {
            log::error!("Email pattern failed to compile: {}", e);
            false
        }
    }
}

/// Check required fields, then the email format
///
/// Whitespace-only values count as empty. The first failure wins.
pub fn validate(fields: &ContactFields) -> Result<(), ValidationError> {
    let required = [
        (Field::Name, &fields.name),
        (Field::Email, &fields.email),
        (Field::Message, &fields.message),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(ValidationError::MissingField(*field));
    }
    if !is_valid_email(&fields.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// The contact form with its submission state and toasts
#[derive(Debug, Default)]
pub struct ContactForm {
    fields: ContactFields,
    submitting: bool,
    notifications: Notifications,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut ContactFields {
        &mut self.fields
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    /// Validate and hand the message to the dispatcher
    ///
    /// On a validation failure an error toast is queued, the fields are kept
    /// and nothing is sent.
    pub fn submit(&mut self, dispatcher: &ContactDispatcher) -> Result<(), SubmitError> {
        if self.submitting {
            return Err(SubmitError::InProgress);
        }

        if let Err(e) = validate(&self.fields) {
            log::info!("Contact form rejected: {}", e);
            self.notifications.push(Notification::error(e.user_message()));
            return Err(e.into());
        }

        if let Err(e) = dispatcher.dispatch(self.fields.clone()) {
            return self.finish(Err(e));
        }
        self.submitting = true;
        log::info!("Contact form submitted via {}", dispatcher.transport_name());
        Ok(())
    }

    /// Pick up a finished delivery without blocking
    ///
    /// Returns None while nothing is in flight or the delivery is pending.
    pub fn poll(&mut self, dispatcher: &ContactDispatcher) -> Option<Result<(), SubmitError>> {
        if !self.submitting {
            return None;
        }
        let outcome = dispatcher.poll()?;
        Some(self.finish(outcome))
    }

    /// Block until the in-flight delivery resolves or the timeout passes
    pub fn wait(
        &mut self,
        dispatcher: &ContactDispatcher,
        timeout: Duration,
    ) -> Option<Result<(), SubmitError>> {
        if !self.submitting {
            return None;
        }
        let outcome = dispatcher.wait(timeout)?;
        Some(self.finish(outcome))
    }

    fn finish(&mut self, outcome: Result<(), TransportError>) -> Result<(), SubmitError> {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.notifications
                    .push(Notification::success(SUCCESS_TITLE, SUCCESS_DESCRIPTION));
                log::info!("Contact message delivered");
                Ok(())
            }
            Err(e) => {
                log::warn!("Contact message delivery failed: {}", e);
                self.notifications.push(Notification::error(DELIVERY_FAILED_MESSAGE));
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> ContactFields {
        ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
            ..ContactFields::default()
        }
    }

    #[test]
    fn test_valid_fields_pass() {
        assert_eq!(validate(&valid_fields()), Ok(()));
    }

    #[test]
    fn test_missing_fields_in_order() {
        assert_eq!(
            validate(&ContactFields::default()),
            Err(ValidationError::MissingField(Field::Name))
        );

        let mut fields = valid_fields();
        fields.message = "   \n\t".to_string();
        assert_eq!(validate(&fields), Err(ValidationError::MissingField(Field::Message)));
    }

    #[test]
    fn test_missing_reported_before_bad_email() {
        let fields = ContactFields {
            name: "Ada".to_string(),
            email: "nope".to_string(),
            ..ContactFields::default()
        };
        assert_eq!(validate(&fields), Err(ValidationError::MissingField(Field::Message)));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
    }

    #[test]
    fn test_optional_values() {
        assert_eq!(OpportunityType::from_value("full-time"), Some(OpportunityType::FullTime));
        assert_eq!(OpportunityType::from_value(""), None);
        assert_eq!(ContactPreference::from_value("in-person"), Some(ContactPreference::InPerson));
        assert_eq!(ContactPreference::InPerson.label(), "In-Person Meeting");
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ValidationError::MissingField(Field::Email).user_message(),
            "Please fill in all required fields."
        );
        assert_eq!(
            ValidationError::InvalidEmail.user_message(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn test_error_display() {
        let err = SubmitError::from(ValidationError::MissingField(Field::Name));
        assert!(err.to_string().contains("name"));
        assert!(SubmitError::InProgress.to_string().contains("in progress"));
    }
}
