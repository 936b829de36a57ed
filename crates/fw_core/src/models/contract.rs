use serde::{Deserialize, Deserializer, Serialize};

use super::role::Role;

/// A contract offer for one fighter.
///
/// Pay fields arrive in whatever shape the offer form produced (numbers,
/// numeric strings, blanks); they are normalised only when scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractOffer {
    pub fighter_name: String,
    #[serde(default)]
    pub base_pay: PayField,
    #[serde(default)]
    pub bonus: PayField,
    /// Unknown or missing roles deserialize to `None` and score as undercard.
    #[serde(default, deserialize_with = "lenient_role", skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl ContractOffer {
    pub fn new(
        fighter_name: impl Into<String>,
        base_pay: impl Into<PayField>,
        bonus: impl Into<PayField>,
        role: Role,
    ) -> Self {
        Self {
            fighter_name: fighter_name.into(),
            base_pay: base_pay.into(),
            bonus: bonus.into(),
            role: Some(role),
        }
    }
}

/// Raw pay amount as submitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PayField {
    Number(f64),
    Text(String),
    #[default]
    Missing,
    Other(serde_json::Value),
}

impl PayField {
    /// Whole-number amount; anything unparseable is 0.
    ///
    /// Strings take their leading integer ("10000abc" is 10000, "3.9" is 3,
    /// "0x1f" is 31), numbers truncate toward zero.
    pub fn amount(&self) -> f64 {
        match self {
            PayField::Number(n) if n.is_finite() => n.trunc(),
            PayField::Text(s) => parse_leading_int(s),
            _ => 0.0,
        }
    }
}

impl From<f64> for PayField {
    fn from(value: f64) -> Self {
        PayField::Number(value)
    }
}

impl From<i64> for PayField {
    fn from(value: i64) -> Self {
        PayField::Number(value as f64)
    }
}

impl From<&str> for PayField {
    fn from(value: &str) -> Self {
        PayField::Text(value.to_string())
    }
}

impl From<String> for PayField {
    fn from(value: String) -> Self {
        PayField::Text(value)
    }
}

fn parse_leading_int(raw: &str) -> f64 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = if rest.starts_with("0x") || rest.starts_with("0X") {
        (16, &rest[2..])
    } else {
        (10, rest)
    };

    let mut value = 0.0;
    let mut seen = false;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => {
                value = value * radix as f64 + d as f64;
                seen = true;
            }
            None => break,
        }
    }

    match (seen, negative) {
        (false, _) => 0.0,
        (true, true) => -value,
        (true, false) => value,
    }
}

fn lenient_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_str().and_then(|s| s.parse().ok())))
}
