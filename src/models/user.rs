// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! User account record entered on the registration page.

use serde::Serialize;

/// Identifies one editable field of a [`User`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserField {
    EmployeeCode,
    EmployeeName,
    Email,
    Password,
    PasswordConfirm,
    ExpiredAt,
}

impl UserField {
    /// Every field in form order.
    pub const ALL: [UserField; 6] = [
        UserField::EmployeeCode,
        UserField::EmployeeName,
        UserField::Email,
        UserField::Password,
        UserField::PasswordConfirm,
        UserField::ExpiredAt,
    ];

    /// Key used in serialized payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmployeeCode => "employeeCode",
            Self::EmployeeName => "employeeName",
            Self::Email => "email",
            Self::Password => "password",
            Self::PasswordConfirm => "passwordConfirm",
            Self::ExpiredAt => "expiredAt",
        }
    }

    /// Human-readable label for form rows.
    pub fn label(&self) -> &'static str {
        match self {
            Self::EmployeeCode => "Employee code",
            Self::EmployeeName => "Employee name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::PasswordConfirm => "Confirm password",
            Self::ExpiredAt => "Expires on",
        }
    }

    /// Whether the input should be masked.
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::PasswordConfirm)
    }
}

/// User account as captured by the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub employee_code: String,
    pub employee_name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    /// Expiration date as ISO text (`YYYY-MM-DD`).
    pub expired_at: String,
}

impl User {
    /// Current value of `field`.
    pub fn value(&self, field: UserField) -> &str {
        match field {
            UserField::EmployeeCode => &self.employee_code,
            UserField::EmployeeName => &self.employee_name,
            UserField::Email => &self.email,
            UserField::Password => &self.password,
            UserField::PasswordConfirm => &self.password_confirm,
            UserField::ExpiredAt => &self.expired_at,
        }
    }

    /// Replace the value of `field`.
    pub fn set(&mut self, field: UserField, value: String) {
        let slot = match field {
            UserField::EmployeeCode => &mut self.employee_code,
            UserField::EmployeeName => &mut self.employee_name,
            UserField::Email => &mut self.email,
            UserField::Password => &mut self.password,
            UserField::PasswordConfirm => &mut self.password_confirm,
            UserField::ExpiredAt => &mut self.expired_at,
        };
        *slot = value;
    }
}

/// Create a user with every field blank.
pub fn create_empty_user() -> User {
    User::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_user_has_blank_fields() {
        let user = create_empty_user();
        for field in UserField::ALL {
            assert_eq!(user.value(field), "", "{} should be blank", field.as_str());
        }
    }

    #[test]
    fn set_writes_only_the_addressed_field() {
        let mut user = create_empty_user();
        user.set(UserField::Email, "a@example.com".into());

        assert_eq!(user.email, "a@example.com");
        assert_eq!(user.value(UserField::Email), "a@example.com");
        assert!(user.employee_code.is_empty());
        assert!(user.password.is_empty());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut user = create_empty_user();
        user.employee_code = "ABC123".into();
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["employeeCode"], "ABC123");
        assert!(json.get("passwordConfirm").is_some());
        for field in UserField::ALL {
            assert!(json.get(field.as_str()).is_some());
        }
    }
}
