/*!
Support for `strftime` and `strptime` style formatting and parsing.

While the directives supported here closely resemble those of the POSIX
[`strftime`] and [`strptime`] functions, it is not a goal to match POSIX
semantics precisely. There is no support for localization: names of months
and weekdays are always in English.

# Example

```
use isochron::{civil::date, fmt::strtime};

let tm = strtime::parse("%A, %B %-d, %Y", "Monday, June 30, 2008")?;
assert_eq!(tm.to_date()?, date(2008, 6, 30));

let string = strtime::format("%a %d %b %Y", date(2008, 6, 30))?;
assert_eq!(string, "Mon 30 Jun 2008");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Usage

Most uses go through [`OffsetDateTime::strftime`](crate::OffsetDateTime::strftime)
and [`OffsetDateTime::strptime`](crate::OffsetDateTime::strptime). The
[`BrokenDownTime`] type in this module is what parsing writes to and what
formatting reads from. It makes it possible to parse values that are less
than a full offset datetime, and to observe formatting errors without going
through `core::fmt::Display`:

```
use isochron::{civil::time, fmt::strtime};

assert_eq!(
    strtime::format("%Y", time(23, 59, 59, 0)).unwrap_err().to_string(),
    "strftime formatting failed: %Y failed: required component 'date' is missing",
);
```

# Directives

When parsing, names are matched without regard to ASCII case. Whitespace in
the format string matches any amount of whitespace (including none) in the
input.

| Directive | Example | Description |
| --------- | ------- | ----------- |
| `%%` | `%` | A literal `%`. |
| `%A`, `%a` | `Monday`, `Mon` | The full and abbreviated weekday name. |
| `%B`, `%b`, `%h` | `June`, `Jun`, `Jun` | The full and abbreviated month name. |
| `%D` | `06/30/08` | Equivalent to `%m/%d/%y`. |
| `%d`, `%e` | `05`, ` 5` | The day of the month. `%e` is space padded. |
| `%F` | `2008-06-30` | Equivalent to `%Y-%m-%d`. |
| `%f` | `5` | The fraction of the second, without trailing zeros. |
| `%H`, `%k` | `09`, ` 9` | The hour of a 24 hour clock. `%k` is space padded. |
| `%I`, `%l` | `09`, ` 9` | The hour of a 12 hour clock. `%l` is space padded. |
| `%j` | `182` | The day of the year. |
| `%M` | `05` | The minute. |
| `%m` | `06` | The month. |
| `%N` | `500000000` | The fraction of the second, always with 9 digits. |
| `%n`, `%t` | | A newline and a tab. When parsing, any whitespace. |
| `%P`, `%p` | `pm`, `PM` | Whether the time is before or after noon. |
| `%R` | `23:30` | Equivalent to `%H:%M`. |
| `%S` | `59` | The second. |
| `%T` | `23:30:59` | Equivalent to `%H:%M:%S`. |
| `%u` | `1` | The weekday, where Monday is `1` and Sunday is `7`. |
| `%Y` | `2008` | The year, zero padded to 4 digits. |
| `%y` | `08` | The year modulo 100. When parsing, `69-99` is `1969-1999`. |
| `%z` | `+0530` | The UTC offset as `+HHMM`, with seconds when non-zero. |
| `%:z` | `+05:30` | The UTC offset as `+HH:MM`, with seconds when non-zero. |
| `%::z` | `+05:30:00` | The UTC offset as `+HH:MM:SS`. |

When formatting, one of the following flags may follow the `%`:

* `_` - Pad a number with spaces.
* `-` - Do not pad a number.
* `0` - Pad a number with zeros.

A decimal width may follow the flag. It sets the minimum width of a padded
number. For `%f`, it sets the exact number of fractional digits instead.
When parsing, flags are ignored and a width only raises the maximum number
of digits a directive consumes.

[`strftime`]: https://pubs.opengroup.org/onlinepubs/9699919799/functions/strftime.html
[`strptime`]: https://pubs.opengroup.org/onlinepubs/9699919799/functions/strptime.html
*/

use alloc::string::String;

use crate::{
    civil::{LocalDate, LocalDateTime, LocalTime, Weekday},
    error::{fmt::strtime::Error as E, ErrorContext},
    fmt::{
        strtime::{format::Formatter, parse::Parser},
        Source, Write,
    },
    tz::ZoneOffset,
    util::escape,
    Error, Instant, OffsetDateTime, ZonedDateTime,
};

mod format;
mod parse;

/// Parses `input` according to the `format` string.
///
/// This is the same as [`BrokenDownTime::parse`].
///
/// # Errors
///
/// This returns an error when the format string is invalid, or when the
/// input doesn't match it.
///
/// # Example
///
/// ```
/// use isochron::fmt::strtime;
///
/// let odt = strtime::parse(
///     "%a, %d %b %Y %T %z",
///     "Mon, 30 Jun 2008 11:30:59 -0400",
/// )?.to_offset_datetime()?;
/// assert_eq!(odt.to_string(), "2008-06-30T11:30:59-04:00");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[inline]
pub fn parse(
    format: impl AsRef<[u8]>,
    input: impl AsRef<[u8]>,
) -> Result<BrokenDownTime, Error> {
    BrokenDownTime::parse(format, input)
}

/// Formats anything that converts into a [`BrokenDownTime`] according to
/// the `format` string.
///
/// # Errors
///
/// This returns an error when the format string is invalid, or when it
/// requires a component that the value doesn't have. For example, `%z`
/// requires an offset, so formatting a [`LocalDateTime`] with it fails.
///
/// # Example
///
/// ```
/// use isochron::{civil::datetime, fmt::strtime, tz};
///
/// let odt = datetime(2008, 6, 30, 16, 24, 59, 0).at_offset(tz::offset(-4));
/// let string = strtime::format("%a %b %e %I:%M:%S %p %Y %:z", odt)?;
/// assert_eq!(string, "Mon Jun 30 04:24:59 PM 2008 -04:00");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[inline]
pub fn format(
    format: impl AsRef<[u8]>,
    broken_down_time: impl Into<BrokenDownTime>,
) -> Result<String, Error> {
    let broken_down_time: BrokenDownTime = broken_down_time.into();

    let mut buf = String::new();
    broken_down_time.format(format, &mut buf)?;
    Ok(buf)
}

/// The "broken down time" used by parsing and formatting.
///
/// Every component is optional. Parsing sets the components it finds, and
/// the `to_*` methods combine them into the value types of this crate,
/// returning an error when a required component is absent. Formatting reads
/// components, and fails when a directive needs one that isn't set.
// Each piece is tracked separately so that a format like `%m-%d` never
// silently picks a year. Time components may be left out, in which case they
// default to zero, but only from the smallest unit upwards: `%M` without
// `%H` is an error.
#[derive(Clone, Debug, Default)]
pub struct BrokenDownTime {
    year: Option<i32>,
    month: Option<i8>,
    day: Option<i8>,
    day_of_year: Option<i16>,
    hour: Option<i8>,
    minute: Option<i8>,
    second: Option<i8>,
    nanosecond: Option<i32>,
    offset: Option<ZoneOffset>,
    // Only checked against the date. It cannot pick a date on its own.
    weekday: Option<Weekday>,
    // Applies to the parsed hour. Mostly useful with `%I`.
    meridiem: Option<Meridiem>,
}

impl BrokenDownTime {
    /// Parses `input` according to the `format` string.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::date, fmt::strtime::BrokenDownTime};
    ///
    /// let tm = BrokenDownTime::parse("%m/%d/%y", "6/30/08")?;
    /// assert_eq!(tm.to_date()?, date(2008, 6, 30));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn parse(
        format: impl AsRef<[u8]>,
        input: impl AsRef<[u8]>,
    ) -> Result<BrokenDownTime, Error> {
        BrokenDownTime::parse_mono(format.as_ref(), input.as_ref())
    }

    #[inline]
    fn parse_mono(fmt: &[u8], inp: &[u8]) -> Result<BrokenDownTime, Error> {
        let source = Source::new("strptime input", inp);
        let mut pieces = BrokenDownTime::default();
        let mut p = Parser { source: &source, fmt, inp, tm: &mut pieces };
        p.parse()?;
        if !p.inp.is_empty() {
            return Err(source.fail(p.inp, E::unconsumed(p.inp)));
        }
        trace!(
            "parsed {input:?} with format {format:?}",
            input = escape::Bytes(inp),
            format = escape::Bytes(fmt),
        );
        Ok(pieces)
    }

    /// Formats this broken down time into the given writer according to the
    /// `format` string.
    ///
    /// # Errors
    ///
    /// This returns an error when the format string is invalid, when it
    /// requires a component that isn't set, or when writing fails.
    #[inline]
    pub fn format<W: Write>(
        &self,
        format: impl AsRef<[u8]>,
        mut wtr: W,
    ) -> Result<(), Error> {
        let fmt = format.as_ref();
        let mut formatter = Formatter { fmt, tm: self, wtr: &mut wtr };
        formatter.format().context(E::FailedStrftime)?;
        Ok(())
    }

    /// Returns an offset datetime from the parsed date, time and offset.
    ///
    /// # Errors
    ///
    /// This returns an error when the date or the offset is missing, or when
    /// the components don't form a valid date and time.
    #[inline]
    pub fn to_offset_datetime(&self) -> Result<OffsetDateTime, Error> {
        let dt = self.to_datetime()?;
        let offset = self.to_offset()?;
        Ok(dt.at_offset(offset))
    }

    /// Returns the instant identified by the parsed date, time and offset.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::fmt::strtime;
    ///
    /// let instant = strtime::parse("%F %H:%M %:z", "2008-06-30 21:14 -04:00")?
    ///     .to_instant()?;
    /// assert_eq!(instant.to_string(), "2008-07-01T01:14:00Z");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn to_instant(&self) -> Result<Instant, Error> {
        self.to_offset_datetime()?.to_instant()
    }

    /// Returns the parsed offset.
    ///
    /// # Errors
    ///
    /// This returns a missing component error when no offset was parsed.
    #[inline]
    pub fn to_offset(&self) -> Result<ZoneOffset, Error> {
        self.offset.ok_or_else(|| Error::missing("offset"))
    }

    /// Returns a local datetime from the parsed date and time.
    ///
    /// Time components default to zero when absent.
    #[inline]
    pub fn to_datetime(&self) -> Result<LocalDateTime, Error> {
        let date = self.to_date()?;
        let time = self.to_time()?;
        Ok(LocalDateTime::from_parts(date, time))
    }

    /// Returns a local date from the parsed components.
    ///
    /// A date requires a year, and either a month and day or a day of the
    /// year. When a weekday was parsed, it must agree with the date.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::date, fmt::strtime};
    ///
    /// let tm = strtime::parse("%Y-%j", "2008-182")?;
    /// assert_eq!(tm.to_date()?, date(2008, 6, 30));
    ///
    /// assert!(strtime::parse("%m-%d", "06-30")?.to_date().unwrap_err().is_missing());
    /// assert!(strtime::parse("%F %a", "2008-06-30 Tue")?.to_date().is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_date(&self) -> Result<LocalDate, Error> {
        let Some(year) = self.year else {
            return Err(Error::missing("year"));
        };
        let date = match (self.month, self.day, self.day_of_year) {
            (Some(month), Some(day), _) => {
                LocalDate::new(year, month, day).context(E::InvalidDate)?
            }
            (_, _, Some(doy)) => {
                LocalDate::of_year_day(year, doy).context(E::InvalidDate)?
            }
            (None, _, None) => return Err(Error::missing("month")),
            (_, None, None) => return Err(Error::missing("day")),
        };
        if let Some(parsed) = self.day_of_year {
            let got = date.day_of_year();
            if parsed != got {
                return Err(Error::from(E::MismatchDayOfYear { parsed, got }));
            }
        }
        if let Some(parsed) = self.weekday {
            let got = date.weekday();
            if parsed != got {
                return Err(Error::from(E::MismatchWeekday { parsed, got }));
            }
        }
        Ok(date)
    }

    /// Returns a local time from the parsed components.
    ///
    /// Absent components default to zero, as long as no smaller unit is
    /// present. So `%H` alone is fine, but `%M` without `%H` is an error.
    pub fn to_time(&self) -> Result<LocalTime, Error> {
        let gap = |smaller, bigger| E::TimeUnitGap { smaller, bigger };
        let Some(mut hour) = self.hour else {
            if self.minute.is_some() {
                return Err(Error::from(gap("minute", "hour")));
            }
            if self.second.is_some() {
                return Err(Error::from(gap("second", "hour")));
            }
            if self.nanosecond.is_some() {
                return Err(Error::from(gap("fraction", "hour")));
            }
            return Ok(LocalTime::MIN);
        };
        if self.minute.is_none() && self.second.is_some() {
            return Err(Error::from(gap("second", "minute")));
        }
        if self.second.is_none() && self.nanosecond.is_some() {
            return Err(Error::from(gap("fraction", "second")));
        }
        if let Some(meridiem) = self.meridiem {
            hour = match meridiem {
                Meridiem::AM => hour % 12,
                Meridiem::PM => hour % 12 + 12,
            };
        }
        LocalTime::new(
            hour,
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
            self.nanosecond.unwrap_or(0),
        )
        .context(E::InvalidTime)
    }

    /// Returns the parsed year, if any.
    #[inline]
    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// Returns the parsed month, if any.
    #[inline]
    pub fn month(&self) -> Option<i8> {
        self.month
    }

    /// Returns the parsed day of the month, if any.
    #[inline]
    pub fn day(&self) -> Option<i8> {
        self.day
    }

    /// Returns the parsed hour, if any. This is the hour as parsed, before a
    /// parsed AM or PM is applied.
    #[inline]
    pub fn hour(&self) -> Option<i8> {
        self.hour
    }

    /// Returns the parsed minute, if any.
    #[inline]
    pub fn minute(&self) -> Option<i8> {
        self.minute
    }

    /// Returns the parsed second, if any.
    #[inline]
    pub fn second(&self) -> Option<i8> {
        self.second
    }

    /// Returns the parsed weekday, if any.
    #[inline]
    pub fn weekday(&self) -> Option<Weekday> {
        self.weekday
    }
}

impl From<OffsetDateTime> for BrokenDownTime {
    fn from(odt: OffsetDateTime) -> BrokenDownTime {
        BrokenDownTime {
            offset: Some(odt.offset()),
            ..BrokenDownTime::from(odt.datetime())
        }
    }
}

impl<'a> From<&'a ZonedDateTime> for BrokenDownTime {
    fn from(zdt: &'a ZonedDateTime) -> BrokenDownTime {
        BrokenDownTime::from(zdt.to_offset_datetime())
    }
}

impl From<Instant> for BrokenDownTime {
    fn from(instant: Instant) -> BrokenDownTime {
        BrokenDownTime::from(instant.at_offset(ZoneOffset::UTC))
    }
}

impl From<LocalDateTime> for BrokenDownTime {
    fn from(dt: LocalDateTime) -> BrokenDownTime {
        BrokenDownTime::from(dt.time()).with_date(dt.date())
    }
}

impl From<LocalDate> for BrokenDownTime {
    fn from(d: LocalDate) -> BrokenDownTime {
        BrokenDownTime::default().with_date(d)
    }
}

impl From<LocalTime> for BrokenDownTime {
    fn from(t: LocalTime) -> BrokenDownTime {
        BrokenDownTime {
            hour: Some(t.hour()),
            minute: Some(t.minute()),
            second: Some(t.second()),
            nanosecond: Some(t.nanosecond()),
            meridiem: Some(Meridiem::from(t)),
            ..BrokenDownTime::default()
        }
    }
}

impl BrokenDownTime {
    fn with_date(self, d: LocalDate) -> BrokenDownTime {
        BrokenDownTime {
            year: Some(d.year()),
            month: Some(d.month()),
            day: Some(d.day()),
            day_of_year: Some(d.day_of_year()),
            weekday: Some(d.weekday()),
            ..self
        }
    }
}

/// A lazy implementation of `core::fmt::Display` for `strftime`.
///
/// Values of this type are returned by
/// [`OffsetDateTime::strftime`](crate::OffsetDateTime::strftime). The
/// formatting happens when the `Display` implementation is used.
///
/// # Errors
///
/// `core::fmt::Display` can't report why formatting failed, so every error
/// collapses into `core::fmt::Error`. This in turn makes `to_string()` panic.
/// Use [`BrokenDownTime::format`] or [`format`](format()) to see the actual
/// error.
pub struct Display<'f> {
    fmt: &'f [u8],
    tm: BrokenDownTime,
}

impl<'f> Display<'f> {
    pub(crate) fn new(fmt: &'f [u8], tm: BrokenDownTime) -> Display<'f> {
        Display { fmt, tm }
    }
}

impl<'f> core::fmt::Display for Display<'f> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use crate::fmt::FmtWrite;

        self.tm.format(self.fmt, FmtWrite(f)).map_err(|_| core::fmt::Error)
    }
}

impl<'f> core::fmt::Debug for Display<'f> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Display")
            .field("fmt", &escape::Bytes(self.fmt))
            .field("tm", &self.tm)
            .finish()
    }
}

#[derive(Clone, Copy, Debug)]
enum Meridiem {
    AM,
    PM,
}

impl From<LocalTime> for Meridiem {
    fn from(t: LocalTime) -> Meridiem {
        if t.hour() < 12 {
            Meridiem::AM
        } else {
            Meridiem::PM
        }
    }
}

const WEEKDAYS: [(Weekday, &str); 7] = [
    (Weekday::Monday, "Monday"),
    (Weekday::Tuesday, "Tuesday"),
    (Weekday::Wednesday, "Wednesday"),
    (Weekday::Thursday, "Thursday"),
    (Weekday::Friday, "Friday"),
    (Weekday::Saturday, "Saturday"),
    (Weekday::Sunday, "Sunday"),
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the full weekday name.
fn weekday_name_full(wd: Weekday) -> &'static str {
    WEEKDAYS[usize::from(wd.to_monday_one_offset().unsigned_abs()) - 1].1
}

/// Returns the three letter weekday name.
fn weekday_name_abbrev(wd: Weekday) -> &'static str {
    &weekday_name_full(wd)[..3]
}

/// Returns the full month name.
fn month_name_full(month: i8) -> &'static str {
    MONTHS[usize::from(month.unsigned_abs()) - 1]
}

/// Returns the three letter month name.
fn month_name_abbrev(month: i8) -> &'static str {
    &month_name_full(month)[..3]
}

/// Padding and width settings parsed from between a `%` and its directive.
#[derive(Clone, Copy, Debug, Default)]
struct Extension {
    flag: Option<Flag>,
    width: Option<u8>,
    colons: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Flag {
    PadSpace,
    PadZero,
    NoPad,
}

impl Extension {
    /// Parses the flag, width and colons after a `%`, returning the
    /// remaining format string. The remaining string is never empty.
    fn parse(fmt: &[u8]) -> Result<(Extension, &[u8]), Error> {
        let mut ext = Extension::default();
        let mut fmt = fmt;
        if let Some((&byte, rest)) = fmt.split_first() {
            let flag = match byte {
                b'_' => Some(Flag::PadSpace),
                b'0' => Some(Flag::PadZero),
                b'-' => Some(Flag::NoPad),
                _ => None,
            };
            if let Some(flag) = flag {
                if rest.is_empty() {
                    return Err(Error::from(E::ExpectedDirectiveAfterFlag {
                        flag: byte,
                    }));
                }
                ext.flag = Some(flag);
                fmt = rest;
            }
        }
        let digits = fmt.iter().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 {
            let (width, rest) = fmt.split_at(digits);
            let width = crate::util::parse::i64(width)
                .ok()
                .and_then(|w| u8::try_from(w).ok())
                .ok_or(E::FailedWidth)?;
            if rest.is_empty() {
                return Err(Error::from(E::ExpectedDirectiveAfterWidth));
            }
            ext.width = Some(width);
            fmt = rest;
        }
        while let Some((&b':', rest)) = fmt.split_first() {
            if rest.is_empty() {
                return Err(Error::from(E::ExpectedDirectiveAfterColons));
            }
            ext.colons = ext.colons.saturating_add(1);
            fmt = rest;
        }
        if fmt.is_empty() {
            return Err(Error::from(E::UnexpectedEndAfterPercent));
        }
        Ok((ext, fmt))
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::{
        civil::{date, datetime, time},
        tz,
    };

    use super::*;

    #[test]
    fn names() {
        assert_eq!(weekday_name_full(Weekday::Sunday), "Sunday");
        assert_eq!(weekday_name_abbrev(Weekday::Wednesday), "Wed");
        assert_eq!(month_name_full(9), "September");
        assert_eq!(month_name_abbrev(5), "May");
    }

    #[test]
    fn to_time() {
        let p = |fmt: &str, inp: &str| parse(fmt, inp).unwrap().to_time();

        assert_eq!(p("", "").unwrap(), LocalTime::MIN);
        assert_eq!(p("%H", "7").unwrap(), time(7, 0, 0, 0));
        assert_eq!(p("%I:%M %p", "12:05 am").unwrap(), time(0, 5, 0, 0));
        assert_eq!(p("%I:%M %p", "12:05 PM").unwrap(), time(12, 5, 0, 0));
        assert_eq!(p("%l%P", " 7pm").unwrap(), time(19, 0, 0, 0));
        assert_eq!(p("%T.%f", "23:30:59.5").unwrap(), time(23, 30, 59, 500_000_000));

        insta::assert_snapshot!(
            p("%M:%S", "15:36").unwrap_err(),
            @"format includes minute but not hour (smaller time units require all bigger ones)",
        );
        insta::assert_snapshot!(
            p("%H", "24").unwrap_err(),
            @"invalid time: parameter 'hour' with value 24 is not in the required range of 0..=23",
        );
    }

    #[test]
    fn to_date() {
        let p = |fmt: &str, inp: &str| parse(fmt, inp).unwrap().to_date();

        assert_eq!(p("%D", "02/29/08").unwrap(), date(2008, 2, 29));
        assert_eq!(p("%y-%m-%d", "69-01-01").unwrap(), date(1969, 1, 1));
        assert_eq!(p("%F %A", "2008-06-30 monday").unwrap(), date(2008, 6, 30));
        assert_eq!(p("%Y %j %u", "2008 366 3").unwrap(), date(2008, 12, 31));

        assert!(p("%m-%d", "06-30").unwrap_err().is_missing());
        assert!(p("%Y-%m", "2008-06").unwrap_err().is_missing());
        insta::assert_snapshot!(
            p("%F %a", "2008-06-30 Tue").unwrap_err(),
            @"parsed weekday Tuesday does not match weekday Monday from parsed date",
        );
        insta::assert_snapshot!(
            p("%F", "2009-02-29").unwrap_err(),
            @"invalid date: parameter 'day-of-month' with value 29 is not in the required range of 1..=28",
        );
    }

    #[test]
    fn to_offset_datetime() {
        let tm = parse("%F %T %z", "2008-06-30 11:30:59 +0530").unwrap();
        let odt = tm.to_offset_datetime().unwrap();
        assert_eq!(odt.to_string(), "2008-06-30T11:30:59+05:30");

        let tm = parse("%F %T", "2008-06-30 11:30:59").unwrap();
        let err = tm.to_offset_datetime().unwrap_err();
        assert!(err.is_missing());
        insta::assert_snapshot!(err, @"required component 'offset' is missing");
    }

    #[test]
    fn format_conversions() {
        let odt = datetime(2008, 6, 30, 11, 30, 59, 0).at_offset(tz::offset(1));
        assert_eq!(format("%F %T %:z", odt).unwrap(), "2008-06-30 11:30:59 +01:00");
        let instant = odt.to_instant().unwrap();
        assert_eq!(format("%F %T %z", instant).unwrap(), "2008-06-30 10:30:59 +0000");
        let zdt = odt.to_zoned();
        assert_eq!(format("%R %::z", &zdt).unwrap(), "11:30 +01:00:00");

        insta::assert_snapshot!(
            format("%z", odt.datetime()).unwrap_err(),
            @"strftime formatting failed: %z failed: required component 'offset' is missing",
        );
        let display = odt.strftime("%Y");
        assert_eq!(display.to_string(), "2008");
    }
}
