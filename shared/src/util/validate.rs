//! Form field validation
//!
//! Mirrors the backend's request validation so forms can reject input
//! before a round trip.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Taiwan mobile: 09 followed by eight digits
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^09[0-9]{8}$").unwrap());

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    !phone.is_empty() && PHONE_RE.is_match(phone)
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

pub fn is_required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Validation rule applied to a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Email,
    Phone,
    Password,
    Required,
}

impl Rule {
    /// Message-table key for this rule.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::Required => "required",
        }
    }

    pub fn check(&self, value: &str) -> bool {
        match self {
            Self::Email => is_valid_email(value),
            Self::Phone => is_valid_phone(value),
            Self::Password => is_valid_password(value),
            Self::Required => is_required(value),
        }
    }
}

/// User-facing message for a field name or rule key.
pub fn validation_message(key: &str) -> Option<&'static str> {
    let msg = match key {
        "email" => "請輸入有效的電子郵件格式",
        "phone" => "請輸入有效的手機號碼（例：0912345678）",
        "password" => "密碼長度至少需要 6 個字元",
        "required" => "此欄位為必填",
        "fullName" => "請輸入收件人姓名",
        "address" => "請輸入配送地址",
        "city" => "請輸入縣市",
        _ => return None,
    };
    Some(msg)
}

/// Outcome of [`validate_field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidation {
    pub valid: bool,
    pub message: String,
}

impl FieldValidation {
    fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }
}

/// Run `rules` in order and stop at the first failure.
///
/// A message registered for the field name wins over the rule's generic one.
pub fn validate_field(field: &str, value: &str, rules: &[Rule]) -> FieldValidation {
    match rules.iter().find(|rule| !rule.check(value)) {
        Some(rule) => FieldValidation {
            valid: false,
            message: validation_message(field)
                .or_else(|| validation_message(rule.key()))
                .unwrap_or_default()
                .to_string(),
        },
        None => FieldValidation::ok(),
    }
}
