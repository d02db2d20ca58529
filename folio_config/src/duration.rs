use std::{ops::Deref, str::FromStr};

use serde::Deserialize;

/// Human readable duration such as `"1d 2h 3m 4s"`.
///
/// Each whitespace separated part is a decimal number followed by one of the
/// units `s`, `m`, `h` or `d`. An empty string is a zero duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDuration(String);

impl std::fmt::Display for InvalidDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid duration part {:?}", self.0)
    }
}

impl std::error::Error for InvalidDuration {}

impl FromStr for Duration {
    type Err = InvalidDuration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .try_fold(std::time::Duration::ZERO, |acc, part| {
                let invalid = || InvalidDuration(part.into());
                let unit_start = part.char_indices().next_back().map_or(0, |(i, _)| i);
                let (value, unit) = part.split_at(unit_start);
                let value = value.parse::<u64>().map_err(|_| invalid())?;
                let factor = match unit {
                    "s" => 1,
                    "m" => 60,
                    "h" => 60 * 60,
                    "d" => 24 * 60 * 60,
                    _ => return Err(invalid()),
                };
                Ok(acc + std::time::Duration::from_secs(value * factor))
            })
            .map(Self)
    }
}

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration() {
        for (input, expected) in [
            ("13s", Some(13)),
            ("42m", Some(42 * 60)),
            ("7h", Some(7 * 60 * 60)),
            ("20d", Some(20 * 24 * 60 * 60)),
            ("", Some(0)),
            ("1d 2h 3m 4s", Some(((24 + 2) * 60 + 3) * 60 + 4)),
            ("xyz", None),
            ("7dd", None),
            ("s", None),
            ("-3s", None),
        ] {
            let input = serde_json::Value::String(input.into());
            let output = serde_json::from_value::<Duration>(input)
                .ok()
                .map(|x| x.0.as_secs());
            assert_eq!(output, expected);
        }
    }
}
