//! Form validation rules for the sign-in, sign-up, and article forms.
//!
//! DESIGN
//! ======
//! Each field carries an ordered rule list; the first failing rule's message
//! is the one shown under the field. Lengths count characters, not bytes.
//! Validation runs on submit and never alters the submitted values.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use crate::net::types::{ArticleDraft, SignInRequest, SignUpRequest};

/// Special characters a sign-up password must draw from.
pub const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// A single check on a field value.
#[derive(Clone, Copy, Debug)]
pub enum Rule {
    Required(&'static str),
    MinLength(usize, &'static str),
    MaxLength(usize, &'static str),
    StrongPassword(&'static str),
}

impl Rule {
    fn check(self, value: &str) -> Result<(), &'static str> {
        let ok = match self {
            Self::Required(_) => !value.trim().is_empty(),
            Self::MinLength(min, _) => value.chars().count() >= min,
            Self::MaxLength(max, _) => value.chars().count() <= max,
            Self::StrongPassword(_) => is_strong_password(value),
        };
        if ok { Ok(()) } else { Err(self.message()) }
    }

    fn message(self) -> &'static str {
        match self {
            Self::Required(m) | Self::MinLength(_, m) | Self::MaxLength(_, m) | Self::StrongPassword(m) => m,
        }
    }
}

/// Lowercase, uppercase, digit, and special character, with nothing outside
/// `[A-Za-z0-9@$!%*?&]`, at least eight long.
pub fn is_strong_password(value: &str) -> bool {
    let allowed = |c: char| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c);
    value.chars().count() >= 8
        && value.chars().all(allowed)
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

/// First failing rule message for `value`, if any.
pub fn validate_field(value: &str, rules: &[Rule]) -> Option<&'static str> {
    rules.iter().find_map(|rule| rule.check(value).err())
}

/// Per-field error messages keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    fn check(&mut self, field: &'static str, value: &str, rules: &[Rule]) {
        if let Some(message) = validate_field(value, rules) {
            self.0.insert(field, message);
        }
    }

    fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

const SIGN_IN_EMAIL: &[Rule] = &[
    Rule::Required("Email is required"),
    Rule::MaxLength(30, "Email cannot be longer than thirty (30) characters long!"),
];

const SIGN_IN_PASSWORD: &[Rule] = &[
    Rule::Required("Password is required"),
    Rule::MinLength(8, "Password must be at least eight (8) characters long"),
];

const SIGN_UP_USERNAME: &[Rule] = &[
    Rule::Required("Username is required"),
    Rule::MaxLength(20, "Username cannot be longer than twenty (20) characters long!"),
];

const SIGN_UP_EMAIL: &[Rule] = &[
    Rule::Required("Email is required"),
    Rule::MaxLength(50, "Email cannot be longer than fifty (50) characters long!"),
];

const SIGN_UP_PASSWORD: &[Rule] = &[
    Rule::Required("Password is required"),
    Rule::MinLength(8, "Password must be at least eight (8) characters long"),
    Rule::StrongPassword("Must contain: uppercase, lowercase, number, and special character"),
];

const SIGN_UP_CONF_PASSWORD: &[Rule] = &[Rule::Required("Please confirm your password")];

const SIGN_UP_PASSKEY: &[Rule] = &[Rule::Required("Writer Pass Key is required")];

const ARTICLE_TITLE: &[Rule] = &[
    Rule::Required("Title is required"),
    Rule::MinLength(2, "Min length is 2 characters"),
    Rule::MaxLength(40, "Max length is 40 characters"),
];

const ARTICLE_SYNOPSIS: &[Rule] = &[
    Rule::Required("Synopsis is required"),
    Rule::MinLength(2, "Min length is 2 characters"),
    Rule::MaxLength(200, "Max length is 200 characters"),
];

/// Validate the sign-in form.
///
/// # Errors
///
/// Returns the failing fields (`email`, `password`).
pub fn validate_sign_in(form: &SignInRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.check("email", &form.email, SIGN_IN_EMAIL);
    errors.check("password", &form.password, SIGN_IN_PASSWORD);
    errors.into_result()
}

/// Validate the sign-up form.
///
/// # Errors
///
/// Returns the failing fields (`username`, `email`, `password`,
/// `confPassword`, `passkey`).
pub fn validate_sign_up(form: &SignUpRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.check("username", &form.username, SIGN_UP_USERNAME);
    errors.check("email", &form.email, SIGN_UP_EMAIL);
    errors.check("password", &form.password, SIGN_UP_PASSWORD);
    errors.check("confPassword", &form.conf_password, SIGN_UP_CONF_PASSWORD);
    if form.conf_password != form.password {
        errors.insert("confPassword", "Passwords do not match");
    }
    errors.check("passkey", &form.passkey, SIGN_UP_PASSKEY);
    errors.into_result()
}

/// Validate the title and synopsis of an article form.
///
/// # Errors
///
/// Returns the failing fields (`title`, `synopsis`).
pub fn validate_article(draft: &ArticleDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.check("title", &draft.title, ARTICLE_TITLE);
    errors.check("synopsis", &draft.synopsis, ARTICLE_SYNOPSIS);
    errors.into_result()
}
