//! PreferredTime value object.

use super::errors::ValidationError;
use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A 24-hour `HHmm` time of day at which a contact wants to be greeted.
///
/// The original string is kept so it round-trips unchanged; ordering is
/// chronological, which for zero-padded `HHmm` is also lexicographic.
///
/// # Example
///
/// ```
/// use morning_greetings::domain::PreferredTime;
///
/// let time = PreferredTime::new("0830").unwrap();
/// assert_eq!((time.hour(), time.minute()), (8, 30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PreferredTime(String);

impl PreferredTime {
    /// Create a new PreferredTime.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidTime` unless the string is exactly four
    /// ASCII digits with hours in `00..=23` and minutes in `00..=59`.
    pub fn new(time: impl Into<String>) -> Result<Self, ValidationError> {
        let time = time.into();

        if Self::parse_parts(&time).is_none() {
            return Err(ValidationError::InvalidTime(time));
        }

        Ok(Self(time))
    }

    fn parse_parts(time: &str) -> Option<(u32, u32)> {
        let bytes = time.as_bytes();
        if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
            return None;
        }

        let digit = |i: usize| u32::from(bytes[i] - b'0');
        let hour = digit(0) * 10 + digit(1);
        let minute = digit(2) * 10 + digit(3);

        (hour <= 23 && minute <= 59).then_some((hour, minute))
    }

    /// Hour component (0-23).
    pub fn hour(&self) -> u32 {
        Self::parse_parts(&self.0).map_or(0, |(h, _)| h)
    }

    /// Minute component (0-59).
    pub fn minute(&self) -> u32 {
        Self::parse_parts(&self.0).map_or(0, |(_, m)| m)
    }

    /// The time as a chrono `NaiveTime`.
    pub fn as_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or(NaiveTime::MIN)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for PreferredTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PreferredTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PreferredTime::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PreferredTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_accepts_every_valid_minute_of_the_day() {
        for hour in 0..24 {
            for minute in 0..60 {
                let s = format!("{:02}{:02}", hour, minute);
                let time = PreferredTime::new(s.clone()).unwrap();
                assert_eq!(time.hour(), hour);
                assert_eq!(time.minute(), minute);
                assert_eq!(time.as_str(), s);
            }
        }
    }

    #[test]
    fn test_time_rejects_malformed() {
        for bad in ["2460", "2400", "0060", "99 ", "1", "abcd", "", "08:30", "10:00AM", "０８３０", " 0830"] {
            assert_eq!(
                PreferredTime::new(bad),
                Err(ValidationError::InvalidTime(bad.to_string())),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_time_ordering_is_chronological() {
        let mut times: Vec<PreferredTime> = ["1200", "0005", "2359", "0830"]
            .into_iter()
            .map(|t| PreferredTime::new(t).unwrap())
            .collect();
        times.sort();
        let sorted: Vec<&str> = times.iter().map(PreferredTime::as_str).collect();
        assert_eq!(sorted, vec!["0005", "0830", "1200", "2359"]);
    }

    #[test]
    fn test_time_as_naive_time() {
        let time = PreferredTime::new("0745").unwrap();
        assert_eq!(time.as_naive_time(), NaiveTime::from_hms_opt(7, 45, 0).unwrap());
    }

    #[test]
    fn test_time_deserialization_invalid_fails() {
        let result: Result<PreferredTime, _> = serde_json::from_str("\"2575\"");
        assert!(result.is_err());
    }
}
