use crate::{
    civil::Weekday,
    error::{fmt::strtime::Error as E, ErrorContext},
    fmt::{
        offset,
        strtime::{BrokenDownTime, Extension, Meridiem, MONTHS, WEEKDAYS},
        Parsed, Source,
    },
    util::parse,
    Error,
};

pub(super) struct Parser<'s, 'f, 'i, 't> {
    pub(super) source: &'s Source<'i>,
    pub(super) fmt: &'f [u8],
    pub(super) inp: &'i [u8],
    pub(super) tm: &'t mut BrokenDownTime,
}

impl<'s, 'f, 'i, 't> Parser<'s, 'f, 'i, 't> {
    pub(super) fn parse(&mut self) -> Result<(), Error> {
        while let Some(&byte) = self.fmt.first() {
            if byte != b'%' {
                self.parse_literal()?;
                continue;
            }
            let (ext, fmt) = Extension::parse(&self.fmt[1..])?;
            self.fmt = fmt;
            let directive = self.f();
            let expansion: Option<&'static [u8]> = match directive {
                b'D' => Some(b"%m/%d/%y"),
                b'F' => Some(b"%Y-%m-%d"),
                b'R' => Some(b"%H:%M"),
                b'T' => Some(b"%H:%M:%S"),
                _ => None,
            };
            if let Some(fmt) = expansion {
                self.parse_expansion(fmt)?;
            } else if directive == b'z' {
                self.parse_offset(ext)?;
            } else {
                let source = self.source;
                let start = self.inp;
                self.parse_one(ext).map_err(|err| {
                    let failure =
                        E::DirectiveFailure { directive, colons: ext.colons };
                    source.fail(start, err.context(failure))
                })?;
            }
            self.bump_fmt();
        }
        Ok(())
    }

    fn parse_one(&mut self, ext: Extension) -> Result<(), Error> {
        match self.f() {
            b'%' => self.parse_byte(b'%'),
            b'A' | b'a' => self.parse_weekday_name(),
            b'B' | b'b' | b'h' => self.parse_month_name(),
            b'd' | b'e' => {
                let day = self.parse_number(ext, 2, "day")?;
                self.tm.day = Some(day as i8);
                Ok(())
            }
            b'f' | b'N' => self.parse_fraction(),
            b'H' | b'k' | b'I' | b'l' => {
                let hour = self.parse_number(ext, 2, "hour")?;
                self.tm.hour = Some(hour as i8);
                Ok(())
            }
            b'j' => {
                let doy = self.parse_number(ext, 3, "day of year")?;
                self.tm.day_of_year = Some(doy as i16);
                Ok(())
            }
            b'M' => {
                let minute = self.parse_number(ext, 2, "minute")?;
                self.tm.minute = Some(minute as i8);
                Ok(())
            }
            b'm' => {
                let month = self.parse_number(ext, 2, "month")?;
                self.tm.month = Some(month as i8);
                Ok(())
            }
            b'n' | b't' => {
                self.skip_whitespace();
                Ok(())
            }
            b'P' | b'p' => self.parse_ampm(),
            b'S' => {
                let second = self.parse_number(ext, 2, "second")?;
                self.tm.second = Some(second as i8);
                Ok(())
            }
            b'u' => {
                let n = self.parse_number(ext, 1, "weekday")?;
                let weekday = Weekday::from_monday_one_offset(n as i8)?;
                self.tm.weekday = Some(weekday);
                Ok(())
            }
            b'Y' => self.parse_year(ext),
            b'y' => {
                let n = self.parse_number(ext, 2, "two digit year")? as i32;
                self.tm.year = Some(if n < 69 { 2000 + n } else { 1900 + n });
                Ok(())
            }
            directive => Err(Error::from(E::UnknownDirective { directive })),
        }
    }

    /// Returns the byte at the current position of the format string.
    ///
    /// # Panics
    ///
    /// This panics when the entire format string has been consumed.
    fn f(&self) -> u8 {
        self.fmt[0]
    }

    fn bump_fmt(&mut self) {
        self.fmt = &self.fmt[1..];
    }

    /// Matches a literal byte from the format string. Whitespace in the
    /// format string matches any amount of whitespace in the input.
    fn parse_literal(&mut self) -> Result<(), Error> {
        let expected = self.f();
        if expected.is_ascii_whitespace() {
            self.skip_whitespace();
            self.bump_fmt();
            return Ok(());
        }
        let start = self.inp;
        self.parse_byte(expected).map_err(|err| self.source.fail(start, err))?;
        self.bump_fmt();
        Ok(())
    }

    fn parse_byte(&mut self, expected: u8) -> Result<(), Error> {
        let Some((&found, rest)) = self.inp.split_first() else {
            return Err(Error::from(E::ExpectedMatchLiteralEndOfInput {
                expected,
            }));
        };
        if found != expected {
            return Err(Error::from(E::ExpectedMatchLiteralByte {
                expected,
                found,
            }));
        }
        self.inp = rest;
        Ok(())
    }

    /// Parses `%D`, `%F`, `%R` and `%T` by parsing their expansion.
    fn parse_expansion(&mut self, fmt: &'static [u8]) -> Result<(), Error> {
        let mut p = Parser {
            source: self.source,
            fmt,
            inp: self.inp,
            tm: &mut *self.tm,
        };
        p.parse()?;
        self.inp = p.inp;
        Ok(())
    }

    /// Parses `%z`, `%:z` and `%::z`. Every one of them accepts an offset
    /// with or without colons.
    fn parse_offset(&mut self, ext: Extension) -> Result<(), Error> {
        if ext.colons > 2 {
            return Err(Error::from(E::ColonCount { directive: b'z' }));
        }
        let Parsed { value, input } =
            offset::parse_offset(self.source, self.inp)?;
        self.tm.offset = Some(value);
        self.inp = input;
        Ok(())
    }

    /// Parses `%A` and `%a`. Both accept a full or abbreviated name.
    fn parse_weekday_name(&mut self) -> Result<(), Error> {
        let names = WEEKDAYS.map(|(_, name)| name);
        let index = self.parse_name(&names, "weekday")?;
        self.tm.weekday = Some(WEEKDAYS[index].0);
        Ok(())
    }

    /// Parses `%B`, `%b` and `%h`. All of them accept a full or abbreviated
    /// name.
    fn parse_month_name(&mut self) -> Result<(), Error> {
        let index = self.parse_name(&MONTHS, "month")?;
        // OK because there are 12 months.
        self.tm.month = Some(index as i8 + 1);
        Ok(())
    }

    /// Finds the first name whose full form or three letter abbreviation
    /// starts the input, ignoring ASCII case, and returns its index.
    fn parse_name(
        &mut self,
        names: &[&str],
        what: &'static str,
    ) -> Result<usize, Error> {
        for (index, name) in names.iter().enumerate() {
            for candidate in [name.as_bytes(), &name.as_bytes()[..3]] {
                if starts_with_ignore_case(self.inp, candidate) {
                    self.inp = &self.inp[candidate.len()..];
                    return Ok(index);
                }
            }
        }
        Err(Error::from(E::ExpectedName { what }))
    }

    fn parse_ampm(&mut self) -> Result<(), Error> {
        let meridiem = if starts_with_ignore_case(self.inp, b"am") {
            Meridiem::AM
        } else if starts_with_ignore_case(self.inp, b"pm") {
            Meridiem::PM
        } else {
            return Err(Error::from(E::ExpectedName { what: "AM/PM" }));
        };
        self.inp = &self.inp[2..];
        self.tm.meridiem = Some(meridiem);
        Ok(())
    }

    /// Parses `%Y`. Without a sign, at most 4 digits are consumed (unless a
    /// wider width is given). With a sign, up to 9 digits are consumed.
    fn parse_year(&mut self, ext: Extension) -> Result<(), Error> {
        let sign = match self.inp.first() {
            Some(&b'-') => -1,
            Some(&b'+') => 1,
            _ => 0,
        };
        let max_digits = if sign == 0 {
            ext.width.map_or(4, |w| usize::from(w).clamp(4, 9))
        } else {
            self.inp = &self.inp[1..];
            9
        };
        let n = self.parse_digits(max_digits, "year")?;
        // OK because there are at most 9 digits.
        let year = n as i32;
        self.tm.year = Some(if sign < 0 { -year } else { year });
        Ok(())
    }

    /// Parses `%f` and `%N`, a fraction of a second with 1 to 9 digits.
    fn parse_fraction(&mut self) -> Result<(), Error> {
        let len = self.inp.iter().take_while(|b| b.is_ascii_digit()).count();
        if len == 0 {
            return Err(Error::from(E::ExpectedDigits { what: "fraction" }));
        }
        let (digits, rest) = self.inp.split_at(len);
        let nanos = parse::fraction(digits, 9)?;
        self.tm.nanosecond = Some(nanos as i32);
        self.inp = rest;
        Ok(())
    }

    /// Parses a number of at most `max_digits` digits, after skipping any
    /// leading spaces. The width of the extension can only widen the
    /// maximum.
    fn parse_number(
        &mut self,
        ext: Extension,
        max_digits: usize,
        what: &'static str,
    ) -> Result<i64, Error> {
        while let Some((&b' ', rest)) = self.inp.split_first() {
            self.inp = rest;
        }
        let max_digits =
            ext.width.map_or(max_digits, |w| max_digits.max(usize::from(w)));
        self.parse_digits(max_digits.min(18), what)
    }

    fn parse_digits(
        &mut self,
        max_digits: usize,
        what: &'static str,
    ) -> Result<i64, Error> {
        let len = self
            .inp
            .iter()
            .take(max_digits)
            .take_while(|b| b.is_ascii_digit())
            .count();
        if len == 0 {
            return Err(Error::from(E::ExpectedDigits { what }));
        }
        let (digits, rest) = self.inp.split_at(len);
        let n = parse::i64(digits).context(E::ExpectedDigits { what })?;
        self.inp = rest;
        Ok(n)
    }

    fn skip_whitespace(&mut self) {
        while let Some((&byte, rest)) = self.inp.split_first() {
            if !byte.is_ascii_whitespace() {
                break;
            }
            self.inp = rest;
        }
    }
}

fn starts_with_ignore_case(input: &[u8], prefix: &[u8]) -> bool {
    input.len() >= prefix.len()
        && input[..prefix.len()].eq_ignore_ascii_case(prefix)
}

#[cfg(test)]
mod tests {
    use crate::{civil::date, fmt::strtime::parse, tz};

    #[test]
    fn ok_parse() {
        let p = |fmt: &str, inp: &str| parse(fmt, inp).unwrap();

        assert_eq!(p("%Y%m%d", "20080630").to_date().unwrap(), date(2008, 6, 30));
        assert_eq!(p("%Y", "-0044").year(), Some(-44));
        assert_eq!(p("%Y", "+12345").year(), Some(12345));
        assert_eq!(p("%6Y", "012345").year(), Some(12345));
        assert_eq!(p("%b %e", "SEP  9").day(), Some(9));
        assert_eq!(p("%B", "september").month(), Some(9));
        assert_eq!(p("%a", "wednesday").weekday(), Some(crate::civil::Weekday::Wednesday));
        assert_eq!(p("%H%M", "0930").minute(), Some(30));
        assert_eq!(p("%%%H", "%9").hour(), Some(9));
        assert_eq!(p("%d%n%m", "30 \t\n06").month(), Some(6));
        assert_eq!(p("%F  %T", "2008-06-30   11:30:59").second(), Some(59));
        assert_eq!(p("%z", "Z").to_offset().unwrap(), tz::offset(0));
        assert_eq!(p("%:z", "-0530").to_offset().unwrap().total_seconds(), -19_800);
        assert_eq!(
            p("%T.%N", "11:30:59.000000500").to_time().unwrap().nanosecond(),
            500,
        );
    }

    #[test]
    fn err_parse() {
        let p = |fmt: &str, inp: &str| parse(fmt, inp).unwrap_err();

        insta::assert_snapshot!(
            p("%Y-%m-%d", "2008-6x-30"),
            @r#"failed to parse strptime input from "2008-6x-30" at position 6: expected to match literal byte "-" from format string, but found byte "x" in input"#,
        );
        insta::assert_snapshot!(
            p("%Y %B", "2008 Juin"),
            @r#"failed to parse strptime input from "2008 Juin" at position 5: %B failed: expected to find a recognized month name"#,
        );
        insta::assert_snapshot!(
            p("%H:%M", "11:"),
            @r#"failed to parse strptime input from "11:" at position 3: %M failed: expected one or more digits for minute"#,
        );
        insta::assert_snapshot!(
            p("%F", "2008-06-30 extra"),
            @r#"failed to parse strptime input from "2008-06-30 extra" at position 10: strptime expects to consume the entire input, but " extra" remains unparsed"#,
        );
        insta::assert_snapshot!(
            p("%Q", "x"),
            @r#"failed to parse strptime input from "x" at position 0: %Q failed: found unrecognized directive `Q`"#,
        );
        insta::assert_snapshot!(
            p("%Y%", "2008"),
            @"expected to find directive after `%`, but found end of format string",
        );
        assert_eq!(p("%:z", "+01:AA").position(), Some(4));
        assert!(p("%z", "+01:AA").is_format());
    }
}
