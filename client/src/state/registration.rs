//! Registration form state with declarative per-field rules.
//!
//! Errors are only shown for fields the user has touched. An invalid submit
//! touches every field so all problems surface at once.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::error::ApiError;
use crate::net::types::NewAccount;

pub const REGISTER_FAILED_MESSAGE: &str = "An error occurred while registering";
pub const REGISTERED_MESSAGE: &str = "Account created! You can now sign in.";

const EMAIL_MAX_LEN: usize = 254;
const EMAIL_LOCAL_MAX_LEN: usize = 64;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("valid regex")
});

/// Form inputs, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Username,
    Email,
    Phone,
    Password,
}

impl Field {
    pub const ALL: [Self; 5] = [Self::FullName, Self::Username, Self::Email, Self::Phone, Self::Password];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Password => "Password",
        }
    }

    /// Constraints checked in order; the first failure is reported.
    #[must_use]
    pub fn rules(self) -> &'static [FieldRule] {
        match self {
            Self::FullName => &[FieldRule::Required, FieldRule::MinLength(3)],
            Self::Username => &[FieldRule::Required],
            Self::Email => &[FieldRule::Required, FieldRule::Email],
            Self::Phone => &[],
            Self::Password => &[FieldRule::Required, FieldRule::MinLength(6)],
        }
    }

    fn index(self) -> usize {
        match self {
            Self::FullName => 0,
            Self::Username => 1,
            Self::Email => 2,
            Self::Phone => 3,
            Self::Password => 4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldRule {
    Required,
    /// Minimum length in characters. Empty values pass; pair with `Required`.
    MinLength(usize),
    /// Email shape. Empty values pass; pair with `Required`.
    Email,
}

impl FieldRule {
    fn check(self, value: &str) -> Option<FieldError> {
        match self {
            Self::Required if value.is_empty() => Some(FieldError::Required),
            Self::MinLength(min) if !value.is_empty() && value.chars().count() < min => {
                Some(FieldError::TooShort { min })
            }
            Self::Email if !value.is_empty() && !is_valid_email(value) => Some(FieldError::InvalidEmail),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    TooShort { min: usize },
    InvalidEmail,
}

impl FieldError {
    #[must_use]
    pub fn message(self, field: Field) -> String {
        match self {
            Self::Required => format!("{} is required", field.label()),
            Self::TooShort { min } => format!("{} must be at least {min} characters", field.label()),
            Self::InvalidEmail => "Enter a valid email address".to_owned(),
        }
    }
}

/// Email shape check: dot-separated atoms, `@`, and dot-separated DNS labels.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().count() > EMAIL_MAX_LEN {
        return false;
    }
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    if local.chars().count() > EMAIL_LOCAL_MAX_LEN {
        return false;
    }
    EMAIL_PATTERN.is_match(value)
}

#[derive(Clone, Debug, Default)]
pub struct RegistrationForm {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub(crate) touched: [bool; 5],
    pub submitting: bool,
    pub error: Option<String>,
    /// Set once the backend accepted the account; the page navigates to login.
    pub registered: bool,
}

impl RegistrationForm {
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Password => &mut self.password,
        };
        *slot = value;
    }

    pub fn touch(&mut self, field: Field) {
        self.touched[field.index()] = true;
    }

    pub fn touch_all(&mut self) {
        self.touched = [true; 5];
    }

    #[must_use]
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched[field.index()]
    }

    /// First failing rule for `field`, touched or not.
    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<FieldError> {
        let value = self.value(field);
        field.rules().iter().find_map(|rule| rule.check(value))
    }

    /// Error text to render under `field`; hidden until touched.
    #[must_use]
    pub fn visible_error(&self, field: Field) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        self.field_error(field).map(|e| e.message(field))
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|f| self.field_error(*f).is_none())
    }

    /// Raw field values as the backend expects them.
    #[must_use]
    pub fn account(&self) -> NewAccount {
        NewAccount {
            full_name: self.full_name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            password: self.password.clone(),
        }
    }

    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.error = None;
    }

    pub fn submit_succeeded(&mut self) {
        self.submitting = false;
        self.registered = true;
    }

    pub fn submit_failed(&mut self, err: &ApiError) {
        self.submitting = false;
        self.error = Some(err.user_message(REGISTER_FAILED_MESSAGE));
    }
}
