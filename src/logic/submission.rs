// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic for handing a completed registration off as a JSON file.
//!
//! Responsibilities:
//! - Gate submission on every user field validating.
//! - Shape the payload that a receiving backend consumes.
//! - Write it to disk and suggest a safe file name.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::models::division::DivisionData;
use crate::models::user::User;
use crate::models::validation::{FieldErrors, validate_user};
use crate::utils::sanitize_component;

/// Account portion of the payload. Neither the password nor its confirmation is carried.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPayload {
    pub employee_code: String,
    pub employee_name: String,
    pub email: String,
    pub expired_at: String,
}

/// Validated registration ready to be written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub user: AccountPayload,
    pub divisions: Vec<DivisionData>,
    /// RFC 3339 UTC timestamp.
    pub submitted_at: String,
}

/// Build the payload, or return every failing field when the user is not valid.
pub fn build_payload(
    user: &User,
    divisions: &[DivisionData],
    submitted_at: OffsetDateTime,
) -> Result<RegistrationPayload, FieldErrors> {
    let errors = validate_user(user);
    if !errors.is_empty() {
        return Err(errors);
    }

    // Formatting a UTC timestamp with Rfc3339 only fails for years outside 0..=9999.
    let submitted_at = submitted_at.format(&Rfc3339).unwrap_or_default();

    Ok(RegistrationPayload {
        user: AccountPayload {
            employee_code: user.employee_code.clone(),
            employee_name: user.employee_name.clone(),
            email: user.email.clone(),
            expired_at: user.expired_at.clone(),
        },
        divisions: divisions.to_vec(),
        submitted_at,
    })
}

/// Suggest a file name derived from the employee code.
///
/// Uses [`crate::utils::sanitize_component()`] for the stem, which falls back to
/// `registration` when the code is blank.
pub fn suggested_file_name(employee_code: &str) -> String {
    let base = sanitize_component(employee_code).to_ascii_lowercase();
    format!("{}.json", base)
}

/// Force a specific extension onto a path when it is missing or different.
///
/// Keeps existing matching extension (case-insensitive); otherwise replaces it.
pub fn ensure_extension(mut path: PathBuf, extension: &str) -> PathBuf {
    let replace = !matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case(extension)
    );

    if replace {
        path.set_extension(extension);
    }
    path
}

/// Write `payload` as pretty-printed JSON to `output`.
///
/// Parent directories are created if missing.
///
/// # Errors
///
/// Returns an error when the directory or file cannot be created or written.
pub fn write_payload(output: &Path, payload: &RegistrationPayload) -> Result<()> {
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {:?}", parent))?;
    }

    let file = File::create(output)
        .with_context(|| format!("Failed to create submission file {:?}", output))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, payload)
        .context("Failed to serialize registration payload")?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write submission file {:?}", output))?;

    tracing::info!(
        path = %output.display(),
        divisions = payload.divisions.len(),
        "registration written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::division::sample_division_data;
    use crate::models::user::{UserField, create_empty_user};
    use tempfile::TempDir;
    use time::macros::datetime;

    fn valid_user() -> User {
        User {
            employee_code: "EMP001".into(),
            employee_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            password: "hunter22".into(),
            password_confirm: "hunter22".into(),
            expired_at: "2030-01-31".into(),
        }
    }

    #[test]
    fn build_payload_rejects_invalid_user() {
        let errors = build_payload(&create_empty_user(), &[], datetime!(2025-01-01 0:00 UTC))
            .unwrap_err();
        assert_eq!(errors.len(), UserField::ALL.len());
    }

    #[test]
    fn build_payload_drops_credentials_and_stamps_time() {
        let payload = build_payload(
            &valid_user(),
            &sample_division_data(),
            datetime!(2025-04-01 09:30 UTC),
        )
        .unwrap();

        assert_eq!(payload.submitted_at, "2025-04-01T09:30:00Z");
        assert_eq!(payload.divisions.len(), 3);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["user"]["employeeCode"], "EMP001");
        assert!(json["user"].get("password").is_none());
        assert!(json["user"].get("passwordConfirm").is_none());
        assert_eq!(json["divisions"][1]["endDate"], serde_json::Value::Null);
        assert_eq!(json["divisions"][0]["isMain"], true);
    }

    #[test]
    fn suggested_file_name_reuses_sanitizer_and_lowercases() {
        assert_eq!(suggested_file_name("EMP 001"), "emp_001.json");
        assert_eq!(suggested_file_name(""), "registration.json");
    }

    #[test]
    fn ensure_extension_preserves_matching_extension_case_insensitive() {
        let path = PathBuf::from("out.JSON");
        assert_eq!(ensure_extension(path.clone(), "json"), path);
    }

    #[test]
    fn ensure_extension_replaces_when_different() {
        assert_eq!(
            ensure_extension(PathBuf::from("out.txt"), "json"),
            PathBuf::from("out.json")
        );
        assert_eq!(
            ensure_extension(PathBuf::from("out"), "json"),
            PathBuf::from("out.json")
        );
    }

    #[test]
    fn write_payload_creates_parent_dirs_and_writes_json() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("nested").join("emp001.json");
        let payload = build_payload(&valid_user(), &[], datetime!(2025-01-01 0:00 UTC)).unwrap();

        write_payload(&output, &payload).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["user"]["email"], "jane@example.com");
        assert_eq!(parsed["divisions"], serde_json::json!([]));
    }

    #[test]
    fn written_file_never_contains_the_password() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("emp001.json");
        let mut user = valid_user();
        user.password = "s3cretpw".into();
        user.password_confirm = "s3cretpw".into();
        let payload = build_payload(&user, &[], datetime!(2025-01-01 0:00 UTC)).unwrap();

        write_payload(&output, &payload).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(!text.contains("s3cretpw"));
        assert!(text.contains("EMP001"));
    }
}
