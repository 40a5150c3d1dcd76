use std::str::FromStr;

use chrono::NaiveDate;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Custom deserializer for search fees that accepts both numbers and numeric strings
pub fn deserialize_fee<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let fee = match value {
        // Go through the textual form so 0.1 stays exactly 0.1
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string()))
            .map_err(|e| Error::custom(format!("invalid search fee {}: {}", n, e)))?,
        Value::String(s) => Decimal::from_str(s.trim())
            .map_err(|e| Error::custom(format!("invalid search fee '{}': {}", s, e)))?,
        Value::Null => Decimal::ZERO,
        _ => return Err(Error::custom("search fee must be a number or string")),
    };

    if fee.is_sign_negative() && !fee.is_zero() {
        return Err(Error::custom(format!("search fee cannot be negative: {}", fee)));
    }

    Ok(fee)
}

/// Custom deserializer for `loginResult`, which the service sends as `"0"` or `0`
pub fn deserialize_login_result<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| Error::custom("invalid login result")),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| Error::custom(format!("invalid login result '{}': {}", s, e))),
        _ => Err(Error::custom("login result must be a number or string")),
    }
}

/// Custom deserializer for optional dates; `null` and `""` both mean absent
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|e| Error::custom(format!("invalid date '{}': {}", s, e))),
    }
}

/// Custom deserializer for IANA time zone names such as `America/New_York`
pub fn deserialize_timezone<'de, D>(deserializer: D) -> Result<Tz, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.trim().parse::<Tz>().map_err(|e| Error::custom(format!("unknown time zone '{}': {}", s, e)))
}
