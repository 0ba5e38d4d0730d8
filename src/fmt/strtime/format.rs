use crate::{
    error::{fmt::strtime::Error as E, ErrorContext},
    fmt::{
        strtime::{
            month_name_abbrev, month_name_full, weekday_name_abbrev,
            weekday_name_full, BrokenDownTime, Extension, Flag, Meridiem,
        },
        util::{DecimalFormatter, FractionalFormatter},
        Write, WriteExt,
    },
    tz::ZoneOffset,
    Error,
};

pub(super) struct Formatter<'f, 't, 'w, W> {
    pub(super) fmt: &'f [u8],
    pub(super) tm: &'t BrokenDownTime,
    pub(super) wtr: &'w mut W,
}

impl<'f, 't, 'w, W: Write> Formatter<'f, 't, 'w, W> {
    pub(super) fn format(&mut self) -> Result<(), Error> {
        while !self.fmt.is_empty() {
            if self.fmt[0] != b'%' {
                self.format_literal()?;
                continue;
            }
            let (ext, fmt) = Extension::parse(&self.fmt[1..])?;
            self.fmt = fmt;
            let directive = self.fmt[0];
            self.format_one(directive, ext).context(E::DirectiveFailure {
                directive,
                colons: ext.colons,
            })?;
            self.fmt = &self.fmt[1..];
        }
        Ok(())
    }

    /// Writes everything up to the next `%` (or the end of the format
    /// string) verbatim.
    fn format_literal(&mut self) -> Result<(), Error> {
        let end = self
            .fmt
            .iter()
            .position(|&b| b == b'%')
            .unwrap_or(self.fmt.len());
        let (literal, rest) = self.fmt.split_at(end);
        let literal = core::str::from_utf8(literal)
            .map_err(|_| Error::from(crate::error::fmt::Error::InvalidUtf8))?;
        self.wtr.write_str(literal)?;
        self.fmt = rest;
        Ok(())
    }

    fn format_one(
        &mut self,
        directive: u8,
        ext: Extension,
    ) -> Result<(), Error> {
        if ext.colons > 0 && directive != b'z' {
            return Err(Error::from(E::ColonCount { directive }));
        }
        match directive {
            b'%' => self.wtr.write_str("%"),
            b'A' => {
                let name = weekday_name_full(self.weekday()?);
                self.wtr.write_str(name)
            }
            b'a' => {
                let name = weekday_name_abbrev(self.weekday()?);
                self.wtr.write_str(name)
            }
            b'B' => {
                let name = month_name_full(self.month()?);
                self.wtr.write_str(name)
            }
            b'b' | b'h' => {
                let name = month_name_abbrev(self.month()?);
                self.wtr.write_str(name)
            }
            b'D' => self.format_expansion(b"%m/%d/%y"),
            b'd' => self.fmt_number(ext, b'0', 2, self.day()?),
            b'e' => self.fmt_number(ext, b' ', 2, self.day()?),
            b'F' => self.format_expansion(b"%Y-%m-%d"),
            b'f' => self.fmt_fraction(ext),
            b'H' => self.fmt_number(ext, b'0', 2, self.hour()?),
            b'I' => self.fmt_number(ext, b'0', 2, self.hour12()?),
            b'j' => self.fmt_number(ext, b'0', 3, self.day_of_year()?),
            b'k' => self.fmt_number(ext, b' ', 2, self.hour()?),
            b'l' => self.fmt_number(ext, b' ', 2, self.hour12()?),
            b'M' => self.fmt_number(ext, b'0', 2, self.minute()?),
            b'm' => self.fmt_number(ext, b'0', 2, self.month()?),
            b'N' => self.fmt_nanoseconds(ext),
            b'n' => self.wtr.write_str("\n"),
            b'P' | b'p' => {
                let name = match (self.meridiem()?, directive) {
                    (Meridiem::AM, b'P') => "am",
                    (Meridiem::PM, b'P') => "pm",
                    (Meridiem::AM, _) => "AM",
                    (Meridiem::PM, _) => "PM",
                };
                self.wtr.write_str(name)
            }
            b'R' => self.format_expansion(b"%H:%M"),
            b'S' => self.fmt_number(ext, b'0', 2, self.second()?),
            b'T' => self.format_expansion(b"%H:%M:%S"),
            b't' => self.wtr.write_str("\t"),
            b'u' => {
                let weekday = self.weekday()?.to_monday_one_offset();
                self.fmt_number(ext, b'0', 1, weekday)
            }
            b'Y' => self.fmt_number(ext, b'0', 4, self.year()?),
            b'y' => {
                let year = self.year()?.rem_euclid(100);
                self.fmt_number(ext, b'0', 2, year)
            }
            b'z' => self.fmt_offset(ext),
            _ => Err(Error::from(E::UnknownDirective { directive })),
        }
    }

    fn format_expansion(&mut self, fmt: &'static [u8]) -> Result<(), Error> {
        Formatter { fmt, tm: self.tm, wtr: &mut *self.wtr }.format()
    }

    /// Writes a number padded to `width` digits with `pad`, unless the
    /// extension says otherwise.
    fn fmt_number(
        &mut self,
        ext: Extension,
        pad: u8,
        width: u8,
        n: impl Into<i64>,
    ) -> Result<(), Error> {
        let (pad, width) = match ext.flag {
            None => (pad, ext.width.unwrap_or(width)),
            Some(Flag::PadZero) => (b'0', ext.width.unwrap_or(width)),
            Some(Flag::PadSpace) => (b' ', ext.width.unwrap_or(width)),
            Some(Flag::NoPad) => (pad, ext.width.unwrap_or(0)),
        };
        let formatter =
            DecimalFormatter::new().padding(width).padding_byte(pad);
        self.wtr.write_int(&formatter, n)
    }

    /// Writes `%f`. Without a width, trailing zeros are trimmed (but at
    /// least one digit is always written). A width sets the exact number of
    /// digits.
    fn fmt_fraction(&mut self, ext: Extension) -> Result<(), Error> {
        let nanos = self.nanosecond()?;
        let formatter = FractionalFormatter::new().precision(ext.width);
        let fraction = formatter.format(i64::from(nanos));
        if fraction.as_str().is_empty() {
            return self.wtr.write_str("0");
        }
        self.wtr.write_str(fraction.as_str())
    }

    /// Writes `%N`, which always has 9 digits unless a width says otherwise.
    fn fmt_nanoseconds(&mut self, ext: Extension) -> Result<(), Error> {
        let nanos = self.nanosecond()?;
        let precision = ext.width.unwrap_or(9);
        let formatter = FractionalFormatter::new().precision(Some(precision));
        self.wtr.write_fraction(&formatter, nanos)
    }

    /// Writes `%z`, `%:z` or `%::z`.
    fn fmt_offset(&mut self, ext: Extension) -> Result<(), Error> {
        if ext.colons > 2 {
            return Err(Error::from(E::ColonCount { directive: b'z' }));
        }
        let offset = self.offset()?;
        let (hours, minutes, seconds) = offset.parts();
        let two = DecimalFormatter::new().padding(2);
        let separator = if ext.colons == 0 { "" } else { ":" };
        self.wtr.write_str(if offset.is_negative() { "-" } else { "+" })?;
        self.wtr.write_int(&two, hours.unsigned_abs())?;
        self.wtr.write_str(separator)?;
        self.wtr.write_int(&two, minutes.unsigned_abs())?;
        if seconds != 0 || ext.colons == 2 {
            self.wtr.write_str(separator)?;
            self.wtr.write_int(&two, seconds.unsigned_abs())?;
        }
        Ok(())
    }

    fn year(&self) -> Result<i32, Error> {
        self.tm.year.ok_or_else(|| Error::missing("date"))
    }

    fn month(&self) -> Result<i8, Error> {
        self.tm.month.ok_or_else(|| Error::missing("date"))
    }

    fn day(&self) -> Result<i8, Error> {
        self.tm.day.ok_or_else(|| Error::missing("date"))
    }

    fn day_of_year(&self) -> Result<i16, Error> {
        self.tm.day_of_year.ok_or_else(|| Error::missing("date"))
    }

    fn weekday(&self) -> Result<crate::civil::Weekday, Error> {
        self.tm.weekday.ok_or_else(|| Error::missing("date"))
    }

    fn hour(&self) -> Result<i8, Error> {
        self.tm.hour.ok_or_else(|| Error::missing("time"))
    }

    fn hour12(&self) -> Result<i8, Error> {
        let hour = self.hour()? % 12;
        Ok(if hour == 0 { 12 } else { hour })
    }

    fn minute(&self) -> Result<i8, Error> {
        self.tm.minute.ok_or_else(|| Error::missing("time"))
    }

    fn second(&self) -> Result<i8, Error> {
        self.tm.second.ok_or_else(|| Error::missing("time"))
    }

    fn nanosecond(&self) -> Result<i32, Error> {
        self.tm.nanosecond.ok_or_else(|| Error::missing("time"))
    }

    fn meridiem(&self) -> Result<Meridiem, Error> {
        if let Some(meridiem) = self.tm.meridiem {
            return Ok(meridiem);
        }
        let hour = self.hour()?;
        Ok(if hour < 12 { Meridiem::AM } else { Meridiem::PM })
    }

    fn offset(&self) -> Result<ZoneOffset, Error> {
        self.tm.offset.ok_or_else(|| Error::missing("offset"))
    }
}
