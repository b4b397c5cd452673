//! Field-level hints for the account forms, checked before submission.

use crate::constants::{MIN_PASSWORD_LEN, MIN_USERNAME_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

/// A message shown next to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub field: Field,
    pub message: String,
}

impl Hint {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// The hint attached to `field`, if any.
pub fn hint_for(hints: &[Hint], field: Field) -> Option<&Hint> {
    hints.iter().find(|h| h.field == field)
}

fn required(field: Field, value: &str) -> Option<Hint> {
    value
        .trim()
        .is_empty()
        .then(|| Hint::new(field, "Please fill in this required field."))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Username or email
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// At most one hint per field. The form may be submitted when none are returned.
    pub fn hints(&self) -> Vec<Hint> {
        let mut hints = Vec::new();

        let username = self.username.trim();
        if username.is_empty() {
            hints.push(Hint::new(Field::Username, "Please enter your username or email."));
        } else if username.chars().count() < MIN_USERNAME_LEN {
            hints.push(Hint::new(
                Field::Username,
                format!("Username must be at least {MIN_USERNAME_LEN} characters long."),
            ));
        }

        if self.password.is_empty() {
            hints.push(Hint::new(Field::Password, "Please enter your password."));
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            hints.push(Hint::new(
                Field::Password,
                format!("Password must be at least {MIN_PASSWORD_LEN} characters long."),
            ));
        }

        hints
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn hints(&self) -> Vec<Hint> {
        [
            required(Field::Username, &self.username),
            required(Field::Email, &self.email),
            required(Field::Password, &self.password),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetPasswordForm {
    pub password: String,
    pub confirm_password: String,
}

impl ResetPasswordForm {
    pub fn hints(&self) -> Vec<Hint> {
        let mut hints: Vec<Hint> = required(Field::Password, &self.password).into_iter().collect();
        if self.password != self.confirm_password {
            hints.push(Hint::new(Field::ConfirmPassword, "Passwords do not match."));
        }
        hints
    }
}
