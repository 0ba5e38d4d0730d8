use crate::{
    civil::{LocalDate, LocalDateTime, LocalTime},
    fmt::{
        util::{DecimalFormatter, FractionalFormatter},
        Write, WriteExt,
    },
    tz::{ZoneId, ZoneIdRepr, ZoneOffset},
    Duration, Error, Instant, OffsetDateTime, Period, ZonedDateTime,
};

/// A printer for the ISO 8601 datetime formats.
#[derive(Clone, Debug)]
pub(crate) struct DateTimePrinter {
    separator: u8,
}

impl DateTimePrinter {
    pub(crate) const fn new() -> DateTimePrinter {
        DateTimePrinter { separator: b'T' }
    }

    /// Formats the given zoned datetime into the writer given.
    ///
    /// The bracketed zone is omitted when the zone is just the offset.
    pub(crate) fn print_zoned<W: Write>(
        &self,
        zdt: &ZonedDateTime,
        mut wtr: W,
    ) -> Result<(), Error> {
        self.print_datetime(&zdt.datetime(), &mut wtr)?;
        self.print_offset(&zdt.offset(), &mut wtr)?;
        if *zdt.zone() != ZoneId::fixed(zdt.offset()) {
            wtr.write_str("[")?;
            self.print_zone_id(zdt.zone(), &mut wtr)?;
            wtr.write_str("]")?;
        }
        Ok(())
    }

    /// Formats the given offset datetime into the writer given.
    pub(crate) fn print_offset_datetime<W: Write>(
        &self,
        odt: &OffsetDateTime,
        mut wtr: W,
    ) -> Result<(), Error> {
        self.print_datetime(&odt.datetime(), &mut wtr)?;
        self.print_offset(&odt.offset(), &mut wtr)?;
        Ok(())
    }

    /// Formats the given instant into the writer given.
    ///
    /// Unlike the other formats, seconds are always written.
    pub(crate) fn print_instant<W: Write>(
        &self,
        instant: &Instant,
        mut wtr: W,
    ) -> Result<(), Error> {
        static FMT_TWO: DecimalFormatter = DecimalFormatter::new().padding(2);

        let dt = instant.to_datetime_with_offset(ZoneOffset::UTC);
        self.print_date(&dt.date(), &mut wtr)?;
        wtr.write_char(char::from(self.separator))?;
        let time = dt.time();
        wtr.write_int(&FMT_TWO, time.hour())?;
        wtr.write_str(":")?;
        wtr.write_int(&FMT_TWO, time.minute())?;
        wtr.write_str(":")?;
        wtr.write_int(&FMT_TWO, time.second())?;
        self.print_fraction(time.nanosecond(), &mut wtr)?;
        wtr.write_str("Z")?;
        Ok(())
    }

    /// Formats the given datetime into the writer given.
    pub(crate) fn print_datetime<W: Write>(
        &self,
        dt: &LocalDateTime,
        mut wtr: W,
    ) -> Result<(), Error> {
        self.print_date(&dt.date(), &mut wtr)?;
        wtr.write_char(char::from(self.separator))?;
        self.print_time(&dt.time(), &mut wtr)?;
        Ok(())
    }

    /// Formats the given date into the writer given.
    ///
    /// Years outside of `0..=9999` always carry a sign.
    pub(crate) fn print_date<W: Write>(
        &self,
        date: &LocalDate,
        mut wtr: W,
    ) -> Result<(), Error> {
        static FMT_YEAR: DecimalFormatter = DecimalFormatter::new().padding(4);
        static FMT_YEAR_SIGNED: DecimalFormatter =
            DecimalFormatter::new().padding(4).force_sign(true);
        static FMT_TWO: DecimalFormatter = DecimalFormatter::new().padding(2);

        if date.year() > 9999 {
            wtr.write_int(&FMT_YEAR_SIGNED, date.year())?;
        } else {
            wtr.write_int(&FMT_YEAR, date.year())?;
        }
        wtr.write_str("-")?;
        wtr.write_int(&FMT_TWO, date.month())?;
        wtr.write_str("-")?;
        wtr.write_int(&FMT_TWO, date.day())?;
        Ok(())
    }

    /// Formats the given time into the writer given.
    pub(crate) fn print_time<W: Write>(
        &self,
        time: &LocalTime,
        mut wtr: W,
    ) -> Result<(), Error> {
        static FMT_TWO: DecimalFormatter = DecimalFormatter::new().padding(2);

        wtr.write_int(&FMT_TWO, time.hour())?;
        wtr.write_str(":")?;
        wtr.write_int(&FMT_TWO, time.minute())?;
        if time.second() == 0 && time.nanosecond() == 0 {
            return Ok(());
        }
        wtr.write_str(":")?;
        wtr.write_int(&FMT_TWO, time.second())?;
        self.print_fraction(time.nanosecond(), &mut wtr)?;
        Ok(())
    }

    /// Formats the given offset into the writer given.
    ///
    /// UTC is written as `Z`. Seconds are only written when non-zero.
    pub(crate) fn print_offset<W: Write>(
        &self,
        offset: &ZoneOffset,
        mut wtr: W,
    ) -> Result<(), Error> {
        static FMT_TWO: DecimalFormatter = DecimalFormatter::new().padding(2);

        if *offset == ZoneOffset::UTC {
            return wtr.write_str("Z");
        }
        let (hours, minutes, seconds) = offset.parts();
        wtr.write_str(if offset.is_negative() { "-" } else { "+" })?;
        wtr.write_int(&FMT_TWO, hours.abs())?;
        wtr.write_str(":")?;
        wtr.write_int(&FMT_TWO, minutes.abs())?;
        if seconds != 0 {
            wtr.write_str(":")?;
            wtr.write_int(&FMT_TWO, seconds.abs())?;
        }
        Ok(())
    }

    /// Formats the given zone identifier into the writer given.
    pub(crate) fn print_zone_id<W: Write>(
        &self,
        zone: &ZoneId,
        mut wtr: W,
    ) -> Result<(), Error> {
        match *zone.repr() {
            ZoneIdRepr::Fixed(ref offset) => self.print_offset(offset, wtr),
            ZoneIdRepr::Prefixed { prefix, ref offset } => {
                wtr.write_str(prefix.as_str())?;
                if *offset != ZoneOffset::UTC {
                    self.print_offset(offset, wtr)?;
                }
                Ok(())
            }
            ZoneIdRepr::Region(ref name) => wtr.write_str(name),
        }
    }

    /// Writes a fraction of a second, if non-zero, in groups of 3 digits.
    fn print_fraction<W: Write>(
        &self,
        nanosecond: i32,
        mut wtr: W,
    ) -> Result<(), Error> {
        static FMT_FRACTION: FractionalFormatter =
            FractionalFormatter::new().grouped(true);

        if nanosecond != 0 {
            wtr.write_str(".")?;
            wtr.write_fraction(&FMT_FRACTION, nanosecond)?;
        }
        Ok(())
    }
}

impl Default for DateTimePrinter {
    fn default() -> DateTimePrinter {
        DateTimePrinter::new()
    }
}

/// A printer for periods and durations.
#[derive(Debug)]
pub(crate) struct PeriodPrinter {
    /// There are currently no configuration options for this printer.
    _priv: (),
}

impl PeriodPrinter {
    pub(crate) const fn new() -> PeriodPrinter {
        PeriodPrinter { _priv: () }
    }

    /// Print the given period to the writer given.
    ///
    /// Only non-zero components are written, each with its own sign. The
    /// zero period is written as `P0D`.
    pub(crate) fn print_period<W: Write>(
        &self,
        period: &Period,
        mut wtr: W,
    ) -> Result<(), Error> {
        static FMT_INT: DecimalFormatter = DecimalFormatter::new();

        if period.is_zero() {
            return wtr.write_str("P0D");
        }
        wtr.write_str("P")?;
        if period.get_years() != 0 {
            wtr.write_int(&FMT_INT, period.get_years())?;
            wtr.write_str("Y")?;
        }
        if period.get_months() != 0 {
            wtr.write_int(&FMT_INT, period.get_months())?;
            wtr.write_str("M")?;
        }
        if period.get_days() != 0 {
            wtr.write_int(&FMT_INT, period.get_days())?;
            wtr.write_str("D")?;
        }
        Ok(())
    }

    /// Print the given duration to the writer given.
    ///
    /// Whole seconds are split into hours, minutes and seconds, each with
    /// its own sign. Days are never written. The zero duration is written as
    /// `PT0S`.
    pub(crate) fn print_duration<W: Write>(
        &self,
        duration: &Duration,
        mut wtr: W,
    ) -> Result<(), Error> {
        static FMT_INT: DecimalFormatter = DecimalFormatter::new();
        static FMT_FRACTION: FractionalFormatter = FractionalFormatter::new();

        if duration.is_zero() {
            return wtr.write_str("PT0S");
        }
        let (total, nanos) = (duration.seconds(), duration.nanos());
        let hours = total / 3_600;
        let minutes = (total % 3_600) / 60;
        let seconds = total % 60;

        wtr.write_str("PT")?;
        if hours != 0 {
            wtr.write_int(&FMT_INT, hours)?;
            wtr.write_str("H")?;
        }
        if minutes != 0 {
            wtr.write_int(&FMT_INT, minutes)?;
            wtr.write_str("M")?;
        }
        if seconds == 0 && nanos == 0 {
            return Ok(());
        }
        // The fraction is always positive in storage, so a negative number
        // of seconds with a fraction is written as one second closer to
        // zero with the complement of the fraction.
        let fraction = if seconds < 0 && nanos > 0 {
            if seconds == -1 {
                wtr.write_str("-0")?;
            } else {
                wtr.write_int(&FMT_INT, seconds + 1)?;
            }
            1_000_000_000 - nanos
        } else {
            wtr.write_int(&FMT_INT, seconds)?;
            nanos
        };
        if fraction != 0 {
            wtr.write_str(".")?;
            wtr.write_fraction(&FMT_FRACTION, fraction)?;
        }
        wtr.write_str("S")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::{
        civil::{date, datetime, time},
        tz,
    };

    use super::*;

    #[test]
    fn print_date() {
        let p = |date: LocalDate| -> String {
            let mut buf = String::new();
            DateTimePrinter::new().print_date(&date, &mut buf).unwrap();
            buf
        };

        insta::assert_snapshot!(p(date(2008, 6, 30)), @"2008-06-30");
        insta::assert_snapshot!(p(date(0, 1, 1)), @"0000-01-01");
        insta::assert_snapshot!(p(date(-1, 1, 1)), @"-0001-01-01");
        insta::assert_snapshot!(p(date(-12345, 1, 1)), @"-12345-01-01");
        insta::assert_snapshot!(p(date(9999, 12, 31)), @"9999-12-31");
        insta::assert_snapshot!(p(date(10000, 1, 1)), @"+10000-01-01");
    }

    #[test]
    fn print_time() {
        let p = |time: LocalTime| -> String {
            let mut buf = String::new();
            DateTimePrinter::new().print_time(&time, &mut buf).unwrap();
            buf
        };

        insta::assert_snapshot!(p(time(11, 30, 0, 0)), @"11:30");
        insta::assert_snapshot!(p(time(11, 30, 59, 0)), @"11:30:59");
        insta::assert_snapshot!(p(time(11, 30, 0, 1_000_000)), @"11:30:00.001");
        insta::assert_snapshot!(p(time(11, 30, 59, 999_000)), @"11:30:59.000999");
        insta::assert_snapshot!(p(time(11, 30, 59, 999)), @"11:30:59.000000999");
        insta::assert_snapshot!(p(time(0, 0, 0, 10_000_000)), @"00:00:00.010");
    }

    #[test]
    fn print_offsets_and_instants() {
        let mut buf = String::new();
        let odt = datetime(2008, 6, 30, 11, 30, 59, 500).at_offset(tz::offset(1));
        DateTimePrinter::new().print_offset_datetime(&odt, &mut buf).unwrap();
        assert_eq!(buf, "2008-06-30T11:30:59.000000500+01:00");

        let mut buf = String::new();
        let offset = ZoneOffset::of_hours_minutes_seconds(-5, -30, -15).unwrap();
        DateTimePrinter::new().print_offset(&offset, &mut buf).unwrap();
        assert_eq!(buf, "-05:30:15");

        let mut buf = String::new();
        let instant = odt.to_instant().unwrap();
        DateTimePrinter::new().print_instant(&instant, &mut buf).unwrap();
        assert_eq!(buf, "2008-06-30T10:30:59.000000500Z");

        let mut buf = String::new();
        DateTimePrinter::new().print_instant(&Instant::EPOCH, &mut buf).unwrap();
        assert_eq!(buf, "1970-01-01T00:00:00Z");
    }

    #[test]
    fn print_period() {
        let p = |period: Period| -> String {
            let mut buf = String::new();
            PeriodPrinter::new().print_period(&period, &mut buf).unwrap();
            buf
        };

        insta::assert_snapshot!(p(Period::ZERO), @"P0D");
        insta::assert_snapshot!(p(Period::new(1, 2, 3)), @"P1Y2M3D");
        insta::assert_snapshot!(p(Period::new(0, -1, 0)), @"P-1M");
        insta::assert_snapshot!(p(Period::weeks(2).unwrap()), @"P14D");
        insta::assert_snapshot!(
            p(Period::new(i32::MIN, 0, i32::MAX)),
            @"P-2147483648Y2147483647D",
        );
    }

    #[test]
    fn print_duration() {
        let p = |secs: i64, nanos: i64| -> String {
            let dur = Duration::of_seconds_and_adjustment(secs, nanos).unwrap();
            let mut buf = String::new();
            PeriodPrinter::new().print_duration(&dur, &mut buf).unwrap();
            buf
        };

        insta::assert_snapshot!(p(0, 0), @"PT0S");
        insta::assert_snapshot!(p(29_172, 345_000_000), @"PT8H6M12.345S");
        insta::assert_snapshot!(p(3_600, 0), @"PT1H");
        insta::assert_snapshot!(p(86_400 * 2, 0), @"PT48H");
        insta::assert_snapshot!(p(-3_661, 0), @"PT-1H-1M-1S");
        insta::assert_snapshot!(p(0, -500_000_000), @"PT-0.5S");
        insta::assert_snapshot!(p(-1, -1), @"PT-1.000000001S");
        insta::assert_snapshot!(p(-59, -1), @"PT-1M0.999999999S");
        insta::assert_snapshot!(p(0, 1), @"PT0.000000001S");
        insta::assert_snapshot!(
            p(i64::MIN, 0),
            @"PT-2562047788015215H-30M-8S",
        );
    }
}
