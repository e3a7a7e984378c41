//! ISO-8601 date-time parsing and formatting.
//!
//! Only the fixed-width `YYYY-MM-DDThh:mm:ss[.xxx]Z` subset is handled:
//! every field has an exact digit count, every separator is mandatory, and
//! any deviation fails the whole parse. Nothing partial is ever returned.

use crate::{DecodeError, query::JsonStr};

/// Destination length for [`JsonDateTime::format_into`] without
/// milliseconds: `YYYY-MM-DDThh:mm:ssZ`.
pub const DATETIME_LEN_TRUNCATED: usize = 20;

/// Destination length for [`JsonDateTime::format_into`] with milliseconds:
/// `YYYY-MM-DDThh:mm:ss.xxxZ`.
pub const DATETIME_LEN_FULL: usize = 24;

/// A decoded ISO-8601 UTC timestamp.
///
/// # Examples
///
/// ```rust
/// use jsonarena::JsonDateTime;
///
/// let dt = JsonDateTime::parse("2022-01-02T03:04:05.006Z").unwrap();
/// assert_eq!((dt.year, dt.month, dt.day), (2022, 1, 2));
/// assert_eq!(dt.milliseconds, 6);
///
/// let mut buf = [0u8; 24];
/// dt.format_into(&mut buf).unwrap();
/// assert_eq!(&buf, b"2022-01-02T03:04:05.006Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JsonDateTime {
    /// Four-digit year.
    pub year: u16,
    /// Month, `01`–`12` in the text.
    pub month: u8,
    /// Day of month.
    pub day: u8,
    /// Hours.
    pub hours: u8,
    /// Minutes.
    pub minutes: u8,
    /// Seconds.
    pub seconds: u8,
    /// Milliseconds; zero when the truncated form was parsed.
    pub milliseconds: u16,
}

impl JsonDateTime {
    /// Parses the fixed-width subset out of `text`.
    ///
    /// # Errors
    ///
    /// [`DecodeError::MalformedDateTime`] on any deviation: a non-digit in
    /// a numeric field, a wrong separator, a missing `Z`, or trailing bytes
    /// after it.
    #[allow(clippy::cast_possible_truncation)]
    pub fn parse(text: &str) -> Result<Self, DecodeError> {
        let b = text.as_bytes();
        if b.len() != DATETIME_LEN_TRUNCATED && b.len() != DATETIME_LEN_FULL {
            return Err(DecodeError::MalformedDateTime);
        }

        let year = read_fixed(b, 0, 4)?;
        expect(b, 4, b'-')?;
        let month = read_fixed(b, 5, 2)?;
        expect(b, 7, b'-')?;
        let day = read_fixed(b, 8, 2)?;
        expect(b, 10, b'T')?;
        let hours = read_fixed(b, 11, 2)?;
        expect(b, 13, b':')?;
        let minutes = read_fixed(b, 14, 2)?;
        expect(b, 16, b':')?;
        let seconds = read_fixed(b, 17, 2)?;

        let milliseconds = if b.len() == DATETIME_LEN_FULL {
            expect(b, 19, b'.')?;
            let ms = read_fixed(b, 20, 3)?;
            expect(b, 23, b'Z')?;
            ms
        } else {
            expect(b, 19, b'Z')?;
            0
        };

        Ok(Self {
            year: year as u16,
            month: month as u8,
            day: day as u8,
            hours: hours as u8,
            minutes: minutes as u8,
            seconds: seconds as u8,
            milliseconds: milliseconds as u16,
        })
    }

    /// Parses a timestamp straight out of a string node's raw span.
    ///
    /// # Errors
    ///
    /// Same as [`parse`](JsonDateTime::parse).
    pub fn from_json_str(s: &JsonStr<'_>) -> Result<Self, DecodeError> {
        Self::parse(s.raw())
    }

    /// Writes the zero-padded fixed-width encoding into `dest`.
    ///
    /// `dest` must be exactly [`DATETIME_LEN_TRUNCATED`] bytes (no
    /// milliseconds) or [`DATETIME_LEN_FULL`] bytes (with `.xxx`). Any
    /// other length is rejected with nothing written.
    ///
    /// # Errors
    ///
    /// [`DecodeError::DateTimeBufferSize`] for any other destination length.
    pub fn format_into(&self, dest: &mut [u8]) -> Result<(), DecodeError> {
        let with_millis = match dest.len() {
            DATETIME_LEN_TRUNCATED => false,
            DATETIME_LEN_FULL => true,
            _ => return Err(DecodeError::DateTimeBufferSize),
        };

        write_padded(&mut dest[0..4], u32::from(self.year));
        dest[4] = b'-';
        write_padded(&mut dest[5..7], u32::from(self.month));
        dest[7] = b'-';
        write_padded(&mut dest[8..10], u32::from(self.day));
        dest[10] = b'T';
        write_padded(&mut dest[11..13], u32::from(self.hours));
        dest[13] = b':';
        write_padded(&mut dest[14..16], u32::from(self.minutes));
        dest[16] = b':';
        write_padded(&mut dest[17..19], u32::from(self.seconds));
        if with_millis {
            dest[19] = b'.';
            write_padded(&mut dest[20..23], u32::from(self.milliseconds));
            dest[23] = b'Z';
        } else {
            dest[19] = b'Z';
        }
        Ok(())
    }
}

/// Reads a fixed-width run of digits.
fn read_fixed(b: &[u8], start: usize, width: usize) -> Result<u32, DecodeError> {
    let mut value: u32 = 0;
    for &c in &b[start..start + width] {
        if !c.is_ascii_digit() {
            return Err(DecodeError::MalformedDateTime);
        }
        value = value * 10 + u32::from(c - b'0');
    }
    Ok(value)
}

fn expect(b: &[u8], at: usize, c: u8) -> Result<(), DecodeError> {
    if b[at] == c {
        Ok(())
    } else {
        Err(DecodeError::MalformedDateTime)
    }
}

/// Writes `value` zero-padded across the whole destination slice.
#[allow(clippy::cast_possible_truncation)]
fn write_padded(dest: &mut [u8], mut value: u32) {
    for slot in dest.iter_mut().rev() {
        *slot = b'0' + (value % 10) as u8;
        value /= 10;
    }
}
