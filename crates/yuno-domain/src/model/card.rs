//! Raw card descriptors as they come off the fleet markup or a catalog file

use serde::{Deserialize, Serialize};

/// Attribute value as written in the source: a number, a boolean, or text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl RawValue {
    /// Interpret as a whole-currency rate.
    ///
    /// Blank text is 0. Unparsable, negative or non-finite values are also 0
    /// and reported through `Err` so the caller can log them.
    pub fn to_rate(&self) -> Result<u64, String> {
        let value = match self {
            RawValue::Number(n) => *n,
            RawValue::Bool(b) => return Err(b.to_string()),
            RawValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(0);
                }
                trimmed.parse::<f64>().map_err(|_| s.clone())?
            }
        };
        if value.is_finite() && value >= 0.0 {
            Ok(value.round() as u64)
        } else {
            Err(value.to_string())
        }
    }

    /// Only an explicit `false` marks a card unavailable
    pub fn is_false(&self) -> bool {
        match self {
            RawValue::Bool(b) => !b,
            RawValue::Text(s) => s.trim().eq_ignore_ascii_case("false"),
            RawValue::Number(_) => false,
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

/// One vehicle card: data attributes plus its child text fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardDescriptor {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "type")]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub available: Option<RawValue>,
    /// Daily rate (`data-day`)
    #[serde(default)]
    pub day: Option<RawValue>,
    /// Weekly rate (`data-week`), 0 or absent means no weekly tier
    #[serde(default)]
    pub week: Option<RawValue>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_from_text_and_number() {
        assert_eq!(RawValue::from("500").to_rate(), Ok(500));
        assert_eq!(RawValue::from(" 3000 ").to_rate(), Ok(3000));
        assert_eq!(RawValue::Number(449.6).to_rate(), Ok(450));
        assert_eq!(RawValue::from("").to_rate(), Ok(0));
    }

    #[test]
    fn test_rate_rejects_garbage() {
        assert!(RawValue::from("abc").to_rate().is_err());
        assert!(RawValue::Number(-5.0).to_rate().is_err());
        assert!(RawValue::Bool(true).to_rate().is_err());
    }

    #[test]
    fn test_availability_flag() {
        assert!(RawValue::Bool(false).is_false());
        assert!(RawValue::from("false").is_false());
        assert!(!RawValue::from("true").is_false());
        assert!(!RawValue::from("").is_false());
    }

    #[test]
    fn test_descriptor_from_json() {
        let json = r#"{"id":"fz-01","type":"bike","day":"500","week":3000,"available":false,"name":"FZ"}"#;
        let card: CardDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(card.vehicle_type.as_deref(), Some("bike"));
        assert_eq!(card.week, Some(RawValue::Number(3000.0)));
        assert_eq!(card.available, Some(RawValue::Bool(false)));
        assert!(card.subtitle.is_none());
    }
}
