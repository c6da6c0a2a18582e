//! XSD date and dateTime values.
//!
//! Both keep the lexical form they were parsed from, so `lexical()` on a
//! typed literal reproduces the input, and keep the explicit timezone offset
//! when one was written. Values without an offset are read as UTC instants
//! with `offset()` returning `None`.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// `xsd:dateTime`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct XsdDateTime {
    instant: DateTime<Utc>,
    offset: Option<FixedOffset>,
    original: Arc<str>,
}

impl XsdDateTime {
    /// Parse an `xsd:dateTime` lexical form.
    ///
    /// Accepts RFC 3339 (`2010-01-01T12:00:00Z`, `...+05:30`), the same with
    /// a compact `+0530` offset, and offset-less forms with optional
    /// fractional seconds.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let original = Arc::from(s);

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self {
                instant: dt.with_timezone(&Utc),
                offset: Some(*dt.offset()),
                original,
            });
        }

        for fmt in ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M:%S%z"] {
            if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
                return Some(Self {
                    instant: dt.with_timezone(&Utc),
                    offset: Some(*dt.offset()),
                    original,
                });
            }
        }

        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(Self {
                    instant: ndt.and_utc(),
                    offset: None,
                    original,
                });
            }
        }

        None
    }

    /// The instant in UTC
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// The offset written in the lexical form, if any
    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    /// `Z` for UTC, `+HH:MM`/`-HH:MM` otherwise
    pub fn timezone(&self) -> Option<String> {
        self.offset.map(render_offset)
    }

    pub fn lexical(&self) -> &str {
        &self.original
    }
}

impl PartialEq for XsdDateTime {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant && self.offset.is_some() == other.offset.is_some()
    }
}

impl fmt::Display for XsdDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl TryFrom<String> for XsdDateTime {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).ok_or_else(|| format!("invalid xsd:dateTime: {}", s))
    }
}

impl From<XsdDateTime> for String {
    fn from(value: XsdDateTime) -> Self {
        value.original.to_string()
    }
}

/// `xsd:date`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct XsdDate {
    date: NaiveDate,
    offset: Option<FixedOffset>,
    original: Arc<str>,
}

impl XsdDate {
    /// Parse an `xsd:date` lexical form: `YYYY-MM-DD` with an optional `Z`
    /// or `+HH:MM`/`-HH:MM` suffix.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.len() < 10 || !s.is_char_boundary(10) {
            return None;
        }
        let (day, tz) = s.split_at(10);
        if !is_date_lexical(day) {
            return None;
        }
        let offset = match tz {
            "" => None,
            "Z" => Some(FixedOffset::east_opt(0)?),
            _ => Some(parse_offset(tz)?),
        };
        let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()?;
        Some(Self {
            date,
            offset,
            original: Arc::from(s),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    pub fn timezone(&self) -> Option<String> {
        self.offset.map(render_offset)
    }

    pub fn lexical(&self) -> &str {
        &self.original
    }
}

impl fmt::Display for XsdDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl TryFrom<String> for XsdDate {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).ok_or_else(|| format!("invalid xsd:date: {}", s))
    }
}

impl From<XsdDate> for String {
    fn from(value: XsdDate) -> Self {
        value.original.to_string()
    }
}

fn is_date_lexical(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
}

/// `+HH:MM` or `-HH:MM`
fn parse_offset(tz: &str) -> Option<FixedOffset> {
    let b = tz.as_bytes();
    if b.len() != 6 || b[3] != b':' {
        return None;
    }
    let sign = match b[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let hours: i32 = tz.get(1..3)?.parse().ok()?;
    let minutes: i32 = tz.get(4..6)?.parse().ok()?;
    if hours > 14 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

fn render_offset(offset: FixedOffset) -> String {
    let secs = offset.local_minus_utc();
    if secs == 0 {
        return "Z".to_string();
    }
    let sign = if secs < 0 { '-' } else { '+' };
    let secs = secs.abs();
    format!("{}{:02}:{:02}", sign, secs / 3600, (secs % 3600) / 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_date_time_with_utc_zone() {
        let dt = XsdDateTime::parse("2010-01-01T12:00:00Z").unwrap();
        assert_eq!(dt.instant().hour(), 12);
        assert_eq!(dt.timezone().as_deref(), Some("Z"));
        assert_eq!(dt.lexical(), "2010-01-01T12:00:00Z");
    }

    #[test]
    fn test_date_time_keeps_offset() {
        let dt = XsdDateTime::parse("2010-01-01T12:00:00+05:30").unwrap();
        assert_eq!(dt.timezone().as_deref(), Some("+05:30"));
        assert_eq!(dt.instant().hour(), 6);
        assert_eq!(dt.instant().minute(), 30);

        let compact = XsdDateTime::parse("2010-01-01T12:00:00-0800").unwrap();
        assert_eq!(compact.timezone().as_deref(), Some("-08:00"));
    }

    #[test]
    fn test_date_time_without_zone() {
        let dt = XsdDateTime::parse("2010-01-01T12:00:00.250").unwrap();
        assert_eq!(dt.offset(), None);
        assert_eq!(dt.timezone(), None);
        assert_eq!(dt.instant().timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_invalid_date_times() {
        for input in [
            "not a date at all",
            "",
            "2010-01-01",
            "2010-13-01T12:00:00Z",
            "2010-01-01T25:00:00",
            "2010-01-01 12:00",
        ] {
            assert!(XsdDateTime::parse(input).is_none(), "{:?}", input);
        }
    }

    #[test]
    fn test_dates() {
        let plain = XsdDate::parse("2024-02-29").unwrap();
        assert_eq!((plain.date().year(), plain.date().month(), plain.date().day()), (2024, 2, 29));
        assert_eq!(plain.timezone(), None);

        assert_eq!(XsdDate::parse("2024-02-29Z").unwrap().timezone().as_deref(), Some("Z"));
        assert_eq!(
            XsdDate::parse("2024-02-29-05:00").unwrap().timezone().as_deref(),
            Some("-05:00")
        );

        for input in ["not a date at all", "2023-02-29", "2024-2-29", "2024-02-29+5", "2024-02-29T00:00:00"] {
            assert!(XsdDate::parse(input).is_none(), "{:?}", input);
        }
    }

    #[test]
    fn test_serde_uses_lexical_form() {
        let dt = XsdDateTime::parse("2010-01-01T12:00:00+01:00").unwrap();
        let json = serde_json::to_string(&dt).unwrap();
        assert_eq!(json, "\"2010-01-01T12:00:00+01:00\"");
        let back: XsdDateTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back.timezone().as_deref(), Some("+01:00"));

        assert!(serde_json::from_str::<XsdDate>("\"nope\"").is_err());
    }
}
