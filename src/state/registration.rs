//! Registration form state
//!
//! Owns the raw text of the four registration fields and wires each one
//! through its own debounced validator into an outcome slot. A reducer
//! combines the slots into the form validity flag that gates submission.
//!
//! Clearing a field does not reset its outcome: an empty value is never
//! evaluated, so the last non-empty result stays in place.

use super::debounce::DebouncedChannel;
use super::reducer::ValidationReducer;
use super::validation::{
    validate_email, validate_password, validate_password_confirmation, validate_username, Outcome,
    ValidationError,
};
use std::time::Duration;
use tokio::sync::watch;

/// Registration form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    PasswordConfirmation,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Username,
        Field::Email,
        Field::Password,
        Field::PasswordConfirmation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::PasswordConfirmation => "Confirm Password",
        }
    }

    /// Whether the field's value should be masked on screen
    pub fn is_secret(&self) -> bool {
        matches!(self, Field::Password | Field::PasswordConfirmation)
    }
}

/// Skip evaluation of empty input, leaving the outcome slot as it was.
fn unless_empty(
    value: &str,
    validate: impl FnOnce() -> Result<(), ValidationError>,
) -> Option<Outcome> {
    if value.is_empty() {
        None
    } else {
        Some(validate().into())
    }
}

/// Live state of one registration attempt.
///
/// Must be created inside a tokio runtime; dropping it stops every
/// background task it spawned.
pub struct FormState {
    username: watch::Sender<String>,
    email: watch::Sender<String>,
    password: watch::Sender<String>,
    /// Latest (password, confirmation) pair
    confirmation: watch::Sender<(String, String)>,

    username_outcome: DebouncedChannel<Outcome>,
    email_outcome: DebouncedChannel<Outcome>,
    password_outcome: DebouncedChannel<Outcome>,
    confirmation_outcome: DebouncedChannel<Outcome>,

    reducer: ValidationReducer,
}

impl FormState {
    /// Wire up a fresh form whose fields settle after `quiet` without writes.
    pub fn new(quiet: Duration) -> Self {
        let (username, username_rx) = watch::channel(String::new());
        let (email, email_rx) = watch::channel(String::new());
        let (password, password_rx) = watch::channel(String::new());
        let (confirmation, confirmation_rx) = watch::channel((String::new(), String::new()));

        let username_outcome = DebouncedChannel::spawn(
            "username",
            username_rx,
            quiet,
            Outcome::Unevaluated,
            |s: &String| unless_empty(s, || validate_username(s)),
        );
        let email_outcome = DebouncedChannel::spawn(
            "email",
            email_rx,
            quiet,
            Outcome::Unevaluated,
            |s: &String| unless_empty(s, || validate_email(s)),
        );
        let password_outcome = DebouncedChannel::spawn(
            "password",
            password_rx,
            quiet,
            Outcome::Unevaluated,
            |s: &String| unless_empty(s, || validate_password(s)),
        );
        let confirmation_outcome = DebouncedChannel::spawn(
            "password_confirmation",
            confirmation_rx,
            quiet,
            Outcome::Unevaluated,
            |(password, confirmation): &(String, String)| {
                unless_empty(confirmation, || {
                    validate_password_confirmation(password, confirmation)
                })
            },
        );

        let reducer = ValidationReducer::spawn([
            username_outcome.subscribe(),
            email_outcome.subscribe(),
            password_outcome.subscribe(),
            confirmation_outcome.subscribe(),
        ]);

        Self {
            username,
            email,
            password,
            confirmation,
            username_outcome,
            email_outcome,
            password_outcome,
            confirmation_outcome,
            reducer,
        }
    }

    pub fn set_username(&self, value: impl Into<String>) {
        self.username.send_replace(value.into());
    }

    pub fn set_email(&self, value: impl Into<String>) {
        self.email.send_replace(value.into());
    }

    /// Also retriggers the confirmation check against the new password.
    pub fn set_password(&self, value: impl Into<String>) {
        let value = value.into();
        self.confirmation
            .send_modify(|(password, _)| password.clone_from(&value));
        self.password.send_replace(value);
    }

    pub fn set_password_confirmation(&self, value: impl Into<String>) {
        let value = value.into();
        self.confirmation
            .send_modify(|(_, confirmation)| *confirmation = value);
    }

    pub fn set(&self, field: Field, value: impl Into<String>) {
        match field {
            Field::Username => self.set_username(value),
            Field::Email => self.set_email(value),
            Field::Password => self.set_password(value),
            Field::PasswordConfirmation => self.set_password_confirmation(value),
        }
    }

    /// Current raw text of a field
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Username => self.username.borrow().clone(),
            Field::Email => self.email.borrow().clone(),
            Field::Password => self.password.borrow().clone(),
            Field::PasswordConfirmation => self.confirmation.borrow().1.clone(),
        }
    }

    fn channel(&self, field: Field) -> &DebouncedChannel<Outcome> {
        match field {
            Field::Username => &self.username_outcome,
            Field::Email => &self.email_outcome,
            Field::Password => &self.password_outcome,
            Field::PasswordConfirmation => &self.confirmation_outcome,
        }
    }

    /// Latest published outcome of a field
    pub fn outcome(&self, field: Field) -> Outcome {
        self.channel(field).get()
    }

    pub fn subscribe(&self, field: Field) -> watch::Receiver<Outcome> {
        self.channel(field).subscribe()
    }

    pub fn is_form_valid(&self) -> bool {
        self.reducer.is_valid()
    }

    pub fn subscribe_validity(&self) -> watch::Receiver<bool> {
        self.reducer.subscribe()
    }
}
