// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Declarative per-field validation rules for [`User`] records.
//!
//! Each field owns an ordered rule list. Evaluation walks the list in
//! declaration order and stops at the first failing rule, so the order
//! decides which single message the form shows. An empty string means valid.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::user::{User, UserField};

/// `local-part@label.label.tld` over ASCII word characters, final label at least two characters.
pub static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,}$")
        .expect("email pattern compiles")
});

/// A single rule kind.
#[derive(Clone, Copy, Debug)]
pub enum Check {
    /// Value must be non-empty.
    Required,
    /// Character count must equal the target exactly.
    Length(usize),
    /// Character count must be at least the target.
    MinLength(usize),
    /// Value must match the pattern.
    Pattern(&'static LazyLock<Regex>),
    /// Value must equal the current value of another field.
    SameAs(UserField),
}

/// A rule kind plus the message shown when it fails.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub check: Check,
    pub message: Option<&'static str>,
}

impl Rule {
    pub const fn new(check: Check, message: &'static str) -> Self {
        Self {
            check,
            message: Some(message),
        }
    }

    /// Whether `value` satisfies this rule within `user`.
    fn passes(&self, value: &str, user: &User) -> bool {
        match self.check {
            Check::Required => !value.is_empty(),
            Check::Length(n) => value.chars().count() == n,
            Check::MinLength(n) => value.chars().count() >= n,
            Check::Pattern(re) => re.is_match(value),
            Check::SameAs(other) => value == user.value(other),
        }
    }

    /// Message reported on failure, falling back to a generic one per kind.
    fn failure_message(&self) -> String {
        if let Some(msg) = self.message {
            return msg.to_string();
        }
        match self.check {
            Check::Required => "This field is required.".to_string(),
            Check::Length(n) => format!("Please enter exactly {n} characters."),
            Check::MinLength(n) => format!("Please enter at least {n} characters."),
            Check::Pattern(_) => "The format is invalid.".to_string(),
            Check::SameAs(_) => "The values do not match.".to_string(),
        }
    }
}

static EMPLOYEE_CODE_RULES: [Rule; 2] = [
    Rule::new(Check::Required, "Please enter the employee code."),
    Rule::new(
        Check::Length(6),
        "The employee code must be exactly 6 characters.",
    ),
];

static EMPLOYEE_NAME_RULES: [Rule; 1] =
    [Rule::new(Check::Required, "Please enter the employee name.")];

static EMAIL_RULES: [Rule; 2] = [
    Rule::new(Check::Required, "Please enter an email address."),
    Rule::new(
        Check::Pattern(&EMAIL_PATTERN),
        "The email address format is invalid.",
    ),
];

static PASSWORD_RULES: [Rule; 2] = [
    Rule::new(Check::Required, "Please enter a password."),
    Rule::new(
        Check::MinLength(6),
        "The password must be at least 6 characters.",
    ),
];

static PASSWORD_CONFIRM_RULES: [Rule; 2] = [
    Rule::new(Check::Required, "Please re-enter the password."),
    Rule::new(
        Check::SameAs(UserField::Password),
        "The passwords do not match.",
    ),
];

static EXPIRED_AT_RULES: [Rule; 1] =
    [Rule::new(Check::Required, "Please enter an expiration date.")];

/// Ordered rule list for `field`.
pub fn rules_for(field: UserField) -> &'static [Rule] {
    match field {
        UserField::EmployeeCode => &EMPLOYEE_CODE_RULES,
        UserField::EmployeeName => &EMPLOYEE_NAME_RULES,
        UserField::Email => &EMAIL_RULES,
        UserField::Password => &PASSWORD_RULES,
        UserField::PasswordConfirm => &PASSWORD_CONFIRM_RULES,
        UserField::ExpiredAt => &EXPIRED_AT_RULES,
    }
}

/// Evaluate `rules` against `field` of `user`, returning the first failure message or `""`.
pub fn evaluate_rules(rules: &[Rule], field: UserField, user: &User) -> String {
    let value = user.value(field);
    rules
        .iter()
        .find(|rule| !rule.passes(value, user))
        .map(Rule::failure_message)
        .unwrap_or_default()
}

/// Validate one field of `user` against the static rule table.
///
/// Returns the message of the first failing rule, or an empty string when
/// every rule passes.
///
/// # Examples
///
/// ```ignore
/// let mut user = create_empty_user();
/// user.email = "not-an-email".into();
/// assert_eq!(
///     validate_user_field(UserField::Email, &user),
///     "The email address format is invalid."
/// );
/// ```
pub fn validate_user_field(field: UserField, user: &User) -> String {
    evaluate_rules(rules_for(field), field, user)
}

/// Failure messages keyed by field, iterated in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: BTreeMap<UserField, String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn get(&self, field: UserField) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    /// First failing field in form order.
    pub fn first(&self) -> Option<(UserField, &str)> {
        self.messages
            .iter()
            .next()
            .map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Store `message` for `field`; an empty message clears it.
    pub fn record(&mut self, field: UserField, message: String) {
        if message.is_empty() {
            self.messages.remove(&field);
        } else {
            self.messages.insert(field, message);
        }
    }
}

/// Validate every field of `user`.
pub fn validate_user(user: &User) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in UserField::ALL {
        errors.record(field, validate_user_field(field, user));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::create_empty_user;

    /// Rule that reports the generic message for its kind.
    fn bare(check: Check) -> Rule {
        Rule {
            check,
            message: None,
        }
    }

    fn valid_user() -> User {
        User {
            employee_code: "EMP001".into(),
            employee_name: "Jane Doe".into(),
            email: "jane.doe@example.co.jp".into(),
            password: "abcdef".into(),
            password_confirm: "abcdef".into(),
            expired_at: "2030-03-31".into(),
        }
    }

    #[test]
    fn valid_user_passes_every_field() {
        let user = valid_user();
        for field in UserField::ALL {
            assert_eq!(validate_user_field(field, &user), "", "{}", field.as_str());
        }
        assert!(validate_user(&user).is_empty());
    }

    #[test]
    fn matching_password_confirmation_is_valid() {
        let mut user = create_empty_user();
        user.password = "abcdef".into();
        user.password_confirm = "abcdef".into();
        assert_eq!(validate_user_field(UserField::PasswordConfirm, &user), "");
    }

    #[test]
    fn mismatched_password_confirmation_reports_mismatch() {
        let mut user = create_empty_user();
        user.password = "abcdef".into();
        user.password_confirm = "abcxyz".into();
        assert_eq!(
            validate_user_field(UserField::PasswordConfirm, &user),
            "The passwords do not match."
        );
    }

    #[test]
    fn short_employee_code_reports_length() {
        let mut user = create_empty_user();
        user.employee_code = "AB12".into();
        assert_eq!(
            validate_user_field(UserField::EmployeeCode, &user),
            "The employee code must be exactly 6 characters."
        );
    }

    #[test]
    fn employee_code_length_counts_characters_not_bytes() {
        let mut user = create_empty_user();
        user.employee_code = "社員コード1".into();
        assert_eq!(validate_user_field(UserField::EmployeeCode, &user), "");
    }

    #[test]
    fn malformed_email_reports_pattern() {
        let mut user = create_empty_user();
        user.email = "not-an-email".into();
        assert_eq!(
            validate_user_field(UserField::Email, &user),
            "The email address format is invalid."
        );
    }

    #[test]
    fn empty_email_reports_required_before_pattern() {
        let user = create_empty_user();
        assert_eq!(
            validate_user_field(UserField::Email, &user),
            "Please enter an email address."
        );
    }

    #[test]
    fn email_pattern_requires_two_char_tld() {
        assert!(EMAIL_PATTERN.is_match("a.b-c@mail.example.com"));
        assert!(EMAIL_PATTERN.is_match("x@ab.io"));
        assert!(!EMAIL_PATTERN.is_match("x@ab.c"));
        assert!(!EMAIL_PATTERN.is_match("x@localhost"));
        assert!(!EMAIL_PATTERN.is_match("x y@example.com"));
        assert!(!EMAIL_PATTERN.is_match("müller@example.com"));
    }

    #[test]
    fn short_password_reports_min_length() {
        let mut user = create_empty_user();
        user.password = "abc".into();
        assert_eq!(
            validate_user_field(UserField::Password, &user),
            "The password must be at least 6 characters."
        );
        user.password = "abcdefgh".into();
        assert_eq!(validate_user_field(UserField::Password, &user), "");
    }

    #[test]
    fn rule_order_decides_reported_message() {
        // Empty value violates both Required and MinLength.
        let user = create_empty_user();
        let required_first = [
            Rule::new(Check::Required, "required"),
            Rule::new(Check::MinLength(3), "too short"),
        ];
        let length_first = [
            Rule::new(Check::MinLength(3), "too short"),
            Rule::new(Check::Required, "required"),
        ];

        assert_eq!(
            evaluate_rules(&required_first, UserField::EmployeeName, &user),
            "required"
        );
        assert_eq!(
            evaluate_rules(&length_first, UserField::EmployeeName, &user),
            "too short"
        );
    }

    #[test]
    fn rules_without_message_use_kind_fallbacks() {
        let mut user = create_empty_user();
        user.password = "secret".into();
        user.password_confirm = "secreT".into();

        let cases = [
            (Check::Required, UserField::EmployeeName, "This field is required."),
            (Check::Length(6), UserField::EmployeeName, "Please enter exactly 6 characters."),
            (Check::MinLength(2), UserField::EmployeeName, "Please enter at least 2 characters."),
            (Check::Pattern(&EMAIL_PATTERN), UserField::EmployeeName, "The format is invalid."),
            (Check::SameAs(UserField::Password), UserField::PasswordConfirm, "The values do not match."),
        ];
        for (check, field, expected) in cases {
            assert_eq!(evaluate_rules(&[bare(check)], field, &user), expected);
        }
    }

    #[test]
    fn empty_rule_list_is_valid() {
        assert_eq!(evaluate_rules(&[], UserField::Email, &create_empty_user()), "");
    }

    #[test]
    fn validate_user_collects_all_failures_in_form_order() {
        let mut user = valid_user();
        user.email = "broken".into();
        user.employee_code = String::new();

        let errors = validate_user(&user);
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.first(),
            Some((UserField::EmployeeCode, "Please enter the employee code."))
        );
        assert_eq!(
            errors.get(UserField::Email),
            Some("The email address format is invalid.")
        );
        assert_eq!(errors.get(UserField::Password), None);
    }

    #[test]
    fn recording_empty_message_clears_entry() {
        let mut errors = FieldErrors::default();
        errors.record(UserField::Email, "bad".into());
        assert_eq!(errors.len(), 1);
        errors.record(UserField::Email, String::new());
        assert!(errors.is_empty());
    }
}
