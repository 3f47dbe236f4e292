use crate::types::errors::FieldError;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const FIELD_COUNT: usize = 11;

/// One of the eleven fixed keys of a submission record.
///
/// The declaration order is the canonical order used for rendering and for the
/// request body, and each variant doubles as an index into the record storage.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum FieldName {
    UserId,
    SignupTime,
    PurchaseTime,
    PurchaseValue,
    DeviceId,
    Source,
    Browser,
    Sex,
    Age,
    IpAddress,
    Country
}

/// A suggested value for a select-style field.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str
}

/// How a field is meant to be entered. Used for rendering hints only; values are never checked against it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FieldKind {
    Text,
    Number,
    DateTimeLocal,
    Select(&'static [SelectOption])
}

const SOURCE_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "SEO", label: "SEO" },
    SelectOption { value: "Ads", label: "Ads" },
    SelectOption { value: "Referral", label: "Referral" }
];

const BROWSER_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "chrome", label: "Chrome" },
    SelectOption { value: "firefox", label: "Firefox" },
    SelectOption { value: "safari", label: "Safari" }
];

const SEX_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "M", label: "Male" },
    SelectOption { value: "F", label: "Female" }
];

impl FieldName {
    pub const ALL: [FieldName; FIELD_COUNT] = [
        FieldName::UserId,
        FieldName::SignupTime,
        FieldName::PurchaseTime,
        FieldName::PurchaseValue,
        FieldName::DeviceId,
        FieldName::Source,
        FieldName::Browser,
        FieldName::Sex,
        FieldName::Age,
        FieldName::IpAddress,
        FieldName::Country
    ];

    /// The wire key sent to the prediction endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::UserId => "user_id",
            FieldName::SignupTime => "signup_time",
            FieldName::PurchaseTime => "purchase_time",
            FieldName::PurchaseValue => "purchase_value",
            FieldName::DeviceId => "device_id",
            FieldName::Source => "source",
            FieldName::Browser => "browser",
            FieldName::Sex => "sex",
            FieldName::Age => "age",
            FieldName::IpAddress => "ip_address",
            FieldName::Country => "country"
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldName::UserId => "User ID",
            FieldName::SignupTime => "Signup Time",
            FieldName::PurchaseTime => "Purchase Time",
            FieldName::PurchaseValue => "Purchase Value",
            FieldName::DeviceId => "Device ID",
            FieldName::Source => "Source",
            FieldName::Browser => "Browser",
            FieldName::Sex => "Sex",
            FieldName::Age => "Age",
            FieldName::IpAddress => "IP Address",
            FieldName::Country => "Country"
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldName::SignupTime | FieldName::PurchaseTime => FieldKind::DateTimeLocal,
            FieldName::PurchaseValue | FieldName::Age => FieldKind::Number,
            FieldName::Source => FieldKind::Select(SOURCE_OPTIONS),
            FieldName::Browser => FieldKind::Select(BROWSER_OPTIONS),
            FieldName::Sex => FieldKind::Select(SEX_OPTIONS),
            _ => FieldKind::Text
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl Display for FieldName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        FieldName::ALL.into_iter()
            .find(|field| field.as_str() == value)
            .ok_or_else(|| FieldError::unknown_field(value))
    }
}

impl Display for FieldKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => formatter.write_str("text"),
            FieldKind::Number => formatter.write_str("number"),
            FieldKind::DateTimeLocal => formatter.write_str("datetime-local"),
            FieldKind::Select(options) => {
                let values: Vec<&str> = options.iter().map(|option| option.value).collect();
                write!(formatter, "{}", values.join(" | "))
            }
        }
    }
}
