use crate::{
    civil::LocalDate,
    error::{period::Error as E, ErrorContext},
    fmt::{
        temporal::{DEFAULT_PERIOD_PARSER, DEFAULT_PERIOD_PRINTER},
        FmtWrite,
    },
    util::{
        arith::{to_i32_exact, Exact},
        common,
    },
    Error, Unit,
};

/// A calendar based amount of time, such as `1 year, 2 months and 3 days`.
///
/// A period is a triple of years, months and days. Each component is an
/// independent 32-bit signed integer, and the components are not required
/// to share a sign. That is, `P1Y-2M` (one year minus two months) is a valid
/// period distinct from `P10M`. Use [`Period::normalized`] to fold months
/// into years.
///
/// Since the length of a month or year depends on where it's applied, a
/// period has no fixed length. It only becomes concrete when added to a
/// date with [`Period::add_to`] (or [`LocalDate::plus_period`]).
///
/// # Example
///
/// ```
/// use isochron::{civil::date, Period};
///
/// let period: Period = "P1Y2M3D".parse()?;
/// assert_eq!(period, Period::new(1, 2, 3));
/// assert_eq!(period.add_to(date(2008, 1, 31))?, date(2009, 4, 3));
///
/// let between = Period::between(date(2008, 6, 30), date(2010, 1, 1));
/// assert_eq!(between.to_string(), "P1Y6M2D");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Equality
///
/// Periods compare structurally. So `P12M` and `P1Y` are not equal, even
/// though adding either to a date always gives the same result. Compare the
/// [normalized](Period::normalized) periods when that matters.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct Period {
    years: i32,
    months: i32,
    days: i32,
}

impl Period {
    /// The zero period, `P0D`.
    pub const ZERO: Period = Period::new(0, 0, 0);

    /// Creates a new period from its components.
    #[inline]
    pub const fn new(years: i32, months: i32, days: i32) -> Period {
        Period { years, months, days }
    }

    /// Creates a period of the given number of years.
    #[inline]
    pub const fn years(years: i32) -> Period {
        Period::new(years, 0, 0)
    }

    /// Creates a period of the given number of months.
    #[inline]
    pub const fn months(months: i32) -> Period {
        Period::new(0, months, 0)
    }

    /// Creates a period of the given number of weeks.
    ///
    /// Weeks are not a component of a period. They are converted to days.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the number of days doesn't fit in
    /// an `i32`.
    #[inline]
    pub fn weeks(weeks: i32) -> Result<Period, Error> {
        Ok(Period::days(weeks.mul_exact(7, "weeks to days")?))
    }

    /// Creates a period of the given number of days.
    #[inline]
    pub const fn days(days: i32) -> Period {
        Period::new(0, 0, days)
    }

    /// Returns the period between two dates.
    ///
    /// Whole years are taken first, then whole months, and then the remaining
    /// days. The result is such that `period.add_to(start) == end`. When
    /// `end` is before `start`, every component is zero or negative.
    ///
    /// This never fails, since the difference between any two dates fits
    /// in a period.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::date, Period};
    ///
    /// let period = Period::between(date(2010, 2, 28), date(2008, 2, 29));
    /// assert_eq!(period, Period::new(-1, -11, -28));
    ///
    /// let period = Period::between(date(2008, 1, 31), date(2008, 3, 1));
    /// assert_eq!(period, Period::new(0, 1, 1));
    /// ```
    pub fn between(start: LocalDate, end: LocalDate) -> Period {
        let mut total_months = end.proleptic_month() - start.proleptic_month();
        let mut days = i32::from(end.day()) - i32::from(start.day());
        if total_months > 0 && days < 0 {
            total_months -= 1;
            // The date `total_months` after `start`, clamped. It's always
            // between `start` and `end`, so always valid.
            let pm = start.proleptic_month() + total_months;
            let year = pm.div_euclid(12) as i32;
            let month = pm.rem_euclid(12) as i8 + 1;
            let day = start.day().min(common::days_in_month(year, month));
            let epoch_day = common::epoch_day_from_date(year, month, day);
            days = (end.to_epoch_day() - epoch_day) as i32;
        } else if total_months < 0 && days > 0 {
            total_months += 1;
            days -= i32::from(end.days_in_month());
        }
        // The largest difference in years is under 2 billion.
        let years = (total_months / 12) as i32;
        let months = (total_months % 12) as i32;
        Period::new(years, months, days)
    }

    /// Returns the years component.
    #[inline]
    pub const fn get_years(self) -> i32 {
        self.years
    }

    /// Returns the months component.
    #[inline]
    pub const fn get_months(self) -> i32 {
        self.months
    }

    /// Returns the days component.
    #[inline]
    pub const fn get_days(self) -> i32 {
        self.days
    }

    /// Returns the component for the given unit.
    ///
    /// # Errors
    ///
    /// Only [`Unit::Year`], [`Unit::Month`] and [`Unit::Day`] are supported.
    /// Any other unit returns an unsupported error.
    pub fn get(self, unit: Unit) -> Result<i64, Error> {
        match unit {
            Unit::Year => Ok(i64::from(self.years)),
            Unit::Month => Ok(i64::from(self.months)),
            Unit::Day => Ok(i64::from(self.days)),
            _ => Err(Error::unsupported_unit(unit, "period")),
        }
    }

    /// Returns the units supported by [`Period::get`], largest first.
    #[inline]
    pub const fn units(self) -> [Unit; 3] {
        [Unit::Year, Unit::Month, Unit::Day]
    }

    /// Returns this period with the years replaced.
    #[inline]
    pub const fn with_years(self, years: i32) -> Period {
        Period { years, ..self }
    }

    /// Returns this period with the months replaced.
    #[inline]
    pub const fn with_months(self, months: i32) -> Period {
        Period { months, ..self }
    }

    /// Returns this period with the days replaced.
    #[inline]
    pub const fn with_days(self, days: i32) -> Period {
        Period { days, ..self }
    }

    /// Returns true if every component is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Returns true if any component is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }

    /// Adds two periods component-wise.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when any component overflows.
    #[inline]
    pub fn plus(self, other: Period) -> Result<Period, Error> {
        Ok(Period::new(
            self.years.add_exact(other.years, "adding period years")?,
            self.months.add_exact(other.months, "adding period months")?,
            self.days.add_exact(other.days, "adding period days")?,
        ))
    }

    /// Subtracts one period from another component-wise.
    #[inline]
    pub fn minus(self, other: Period) -> Result<Period, Error> {
        Ok(Period::new(
            self.years.sub_exact(other.years, "subtracting period years")?,
            self.months.sub_exact(other.months, "subtracting period months")?,
            self.days.sub_exact(other.days, "subtracting period days")?,
        ))
    }

    /// Returns this period with `years` added to the years component.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::Period;
    ///
    /// assert_eq!(Period::years(1).plus_years(2)?, Period::years(3));
    /// assert!(Period::years(i32::MAX).plus_years(1).unwrap_err().is_overflow());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn plus_years(self, years: i32) -> Result<Period, Error> {
        Ok(self.with_years(self.years.add_exact(years, "adding years")?))
    }

    /// Returns this period with `months` added to the months component.
    #[inline]
    pub fn plus_months(self, months: i32) -> Result<Period, Error> {
        Ok(self.with_months(self.months.add_exact(months, "adding months")?))
    }

    /// Returns this period with `days` added to the days component.
    #[inline]
    pub fn plus_days(self, days: i32) -> Result<Period, Error> {
        Ok(self.with_days(self.days.add_exact(days, "adding days")?))
    }

    /// Returns this period with `years` subtracted from the years component.
    #[inline]
    pub fn minus_years(self, years: i32) -> Result<Period, Error> {
        Ok(self.with_years(self.years.sub_exact(years, "subtracting years")?))
    }

    /// Returns this period with `months` subtracted from the months
    /// component.
    #[inline]
    pub fn minus_months(self, months: i32) -> Result<Period, Error> {
        let months = self.months.sub_exact(months, "subtracting months")?;
        Ok(self.with_months(months))
    }

    /// Returns this period with `days` subtracted from the days component.
    #[inline]
    pub fn minus_days(self, days: i32) -> Result<Period, Error> {
        Ok(self.with_days(self.days.sub_exact(days, "subtracting days")?))
    }

    /// Multiplies every component by `scalar`.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when any component overflows.
    #[inline]
    pub fn multiplied_by(self, scalar: i32) -> Result<Period, Error> {
        if scalar == 1 || self.is_zero() {
            return Ok(self);
        }
        Ok(Period::new(
            self.years.mul_exact(scalar, "multiplying period years")?,
            self.months.mul_exact(scalar, "multiplying period months")?,
            self.days.mul_exact(scalar, "multiplying period days")?,
        ))
    }

    /// Negates every component.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when any component is `i32::MIN`.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::Period;
    ///
    /// assert_eq!(Period::new(1, -2, 3).negated()?, Period::new(-1, 2, -3));
    /// assert!(Period::years(i32::MIN).negated().unwrap_err().is_overflow());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn negated(self) -> Result<Period, Error> {
        self.multiplied_by(-1)
    }

    /// Folds months into years, such that the months component is in the
    /// range `-11..=11` and has the same sign as the years component. Days
    /// are left unchanged.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the years don't fit in an `i32`.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::Period;
    ///
    /// assert_eq!(Period::new(1, 15, 40).normalized()?, Period::new(2, 3, 40));
    /// assert_eq!(Period::new(1, -25, 0).normalized()?, Period::new(-1, -1, 0));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn normalized(self) -> Result<Period, Error> {
        let total = self.to_total_months();
        let years = to_i32_exact(total / 12, "normalizing period years")?;
        let months = (total % 12) as i32;
        Ok(Period::new(years, months, self.days))
    }

    /// Returns the total number of months in the years and months
    /// components. Days are ignored.
    #[inline]
    pub const fn to_total_months(self) -> i64 {
        self.years as i64 * 12 + self.months as i64
    }

    /// Adds this period to a date.
    ///
    /// When both years and months are non-zero, the total number of months
    /// is added in one step. Otherwise years, then months are added. Days
    /// are added last. The day of the month is clamped after adding months
    /// or years, but not after adding days.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::date, Period};
    ///
    /// let d = date(2012, 2, 29);
    /// assert_eq!(Period::years(1).add_to(d)?, date(2013, 2, 28));
    /// assert_eq!(Period::new(0, 1, 1).add_to(date(2008, 1, 31))?, date(2008, 3, 1));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn add_to(self, date: LocalDate) -> Result<LocalDate, Error> {
        self.add_to_impl(date).with_context(|| E::FailedAddTo { period: self })
    }

    /// Subtracts this period from a date.
    ///
    /// This mirrors [`Period::add_to`]: months, then days, are subtracted in
    /// the same order.
    pub fn subtract_from(self, date: LocalDate) -> Result<LocalDate, Error> {
        self.subtract_from_impl(date)
            .with_context(|| E::FailedSubtractFrom { period: self })
    }

    fn add_to_impl(self, mut date: LocalDate) -> Result<LocalDate, Error> {
        if self.years != 0 && self.months != 0 {
            date = date.plus_months(self.to_total_months())?;
        } else if self.years != 0 {
            date = date.plus_years(i64::from(self.years))?;
        } else if self.months != 0 {
            date = date.plus_months(i64::from(self.months))?;
        }
        if self.days != 0 {
            date = date.plus_days(i64::from(self.days))?;
        }
        Ok(date)
    }

    fn subtract_from_impl(self, mut date: LocalDate) -> Result<LocalDate, Error> {
        if self.years != 0 && self.months != 0 {
            date = date.minus_months(self.to_total_months())?;
        } else if self.years != 0 {
            date = date.minus_years(i64::from(self.years))?;
        } else if self.months != 0 {
            date = date.minus_months(i64::from(self.months))?;
        }
        if self.days != 0 {
            date = date.minus_days(i64::from(self.days))?;
        }
        Ok(date)
    }
}

impl LocalDate {
    /// Adds a period to this date. See [`Period::add_to`].
    #[inline]
    pub fn plus_period(self, period: Period) -> Result<LocalDate, Error> {
        period.add_to(self)
    }

    /// Subtracts a period from this date. See [`Period::subtract_from`].
    #[inline]
    pub fn minus_period(self, period: Period) -> Result<LocalDate, Error> {
        period.subtract_from(self)
    }
}

impl core::fmt::Debug for Period {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if f.alternate() {
            f.debug_struct("Period")
                .field("years", &self.years)
                .field("months", &self.months)
                .field("days", &self.days)
                .finish()
        } else {
            core::fmt::Display::fmt(self, f)
        }
    }
}

impl core::fmt::Display for Period {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_PERIOD_PRINTER
            .print_period(self, FmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl core::str::FromStr for Period {
    type Err = Error;

    fn from_str(string: &str) -> Result<Period, Error> {
        DEFAULT_PERIOD_PARSER.parse_period(string.as_bytes())
    }
}

crate::fmt::serde::impl_serde_str!(Period, "an ISO 8601 period string");

#[cfg(test)]
impl quickcheck::Arbitrary for Period {
    fn arbitrary(g: &mut quickcheck::Gen) -> Period {
        Period::new(
            i32::arbitrary(g),
            i32::arbitrary(g),
            i32::arbitrary(g),
        )
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        alloc::boxed::Box::new(
            (self.years, self.months, self.days)
                .shrink()
                .map(|(y, m, d)| Period::new(y, m, d)),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::civil::date;

    use super::*;

    #[test]
    fn factories() {
        assert_eq!(Period::years(0), Period::ZERO);
        assert_eq!(Period::months(0), Period::ZERO);
        assert_eq!(Period::days(0), Period::ZERO);
        assert_eq!(Period::new(0, 0, 0), Period::default());
        assert_eq!(Period::weeks(3).unwrap(), Period::days(21));
        assert!(Period::weeks(i32::MAX).unwrap_err().is_overflow());
    }

    // Rows are (start, end, years, months, days).
    #[test]
    fn between_table() {
        let table = [
            ((2010, 1, 1), (2010, 1, 1), 0, 0, 0),
            ((2010, 1, 1), (2010, 1, 2), 0, 0, 1),
            ((2010, 1, 1), (2010, 1, 31), 0, 0, 30),
            ((2010, 1, 1), (2010, 2, 1), 0, 1, 0),
            ((2010, 1, 1), (2011, 1, 1), 1, 0, 0),
            ((2010, 1, 15), (2010, 2, 14), 0, 0, 30),
            ((2010, 1, 31), (2010, 3, 1), 0, 1, 1),
            ((2010, 1, 31), (2010, 2, 28), 0, 0, 28),
            ((2008, 2, 29), (2009, 2, 28), 0, 11, 30),
            ((2008, 2, 29), (2010, 2, 28), 1, 11, 30),
            ((2010, 2, 28), (2008, 2, 29), -1, -11, -28),
            ((2010, 3, 1), (2010, 1, 31), 0, -1, -1),
            ((2010, 1, 2), (2010, 1, 1), 0, 0, -1),
            ((2010, 2, 1), (2010, 1, 31), 0, 0, -1),
        ];
        for ((y1, m1, d1), (y2, m2, d2), y, m, d) in table {
            let (start, end) = (date(y1, m1, d1), date(y2, m2, d2));
            let got = Period::between(start, end);
            assert_eq!(got, Period::new(y, m, d), "{start} to {end}");
        }
    }

    #[test]
    fn between_extremes() {
        let period = Period::between(LocalDate::MIN, LocalDate::MAX);
        assert_eq!(period, Period::new(1_999_999_998, 11, 30));
        let period = Period::between(LocalDate::MAX, LocalDate::MIN);
        assert_eq!(period, Period::new(-1_999_999_998, -11, -30));
    }

    #[test]
    fn arithmetic() {
        let p = Period::new(1, 2, 3);
        assert_eq!(p.plus(Period::new(-1, 1, 0)).unwrap(), Period::new(0, 3, 3));
        assert_eq!(p.minus(p).unwrap(), Period::ZERO);
        assert_eq!(p.plus_days(0).unwrap(), p);
        assert_eq!(p.minus_months(2).unwrap(), Period::new(1, 0, 3));
        assert_eq!(p.multiplied_by(0).unwrap(), Period::ZERO);
        assert_eq!(p.multiplied_by(-2).unwrap(), Period::new(-2, -4, -6));
        assert!(Period::days(i32::MIN).minus_days(1).unwrap_err().is_overflow());
        assert!(Period::months(i32::MAX)
            .plus(Period::months(1))
            .unwrap_err()
            .is_overflow());
        assert!(Period::new(i32::MAX, 12, 0)
            .normalized()
            .unwrap_err()
            .is_overflow());
        assert_eq!(Period::new(0, 0, -1).is_negative(), true);
        assert_eq!(Period::new(1, 0, 0).is_negative(), false);
        assert_eq!(Period::new(2, -3, 0).to_total_months(), 21);
    }

    #[test]
    fn units() {
        let p = Period::new(1, 2, 3);
        let values: alloc::vec::Vec<i64> =
            p.units().iter().map(|&u| p.get(u).unwrap()).collect();
        assert_eq!(values, [1, 2, 3]);
        assert!(p.get(Unit::Week).unwrap_err().is_unsupported());
    }

    #[test]
    fn add_and_subtract() {
        let d = date(2008, 1, 31);
        // Total months in one step, so no intermediate clamp.
        assert_eq!(Period::new(1, 1, 0).add_to(d).unwrap(), date(2009, 2, 28));
        assert_eq!(Period::new(0, 1, 1).add_to(d).unwrap(), date(2008, 3, 1));
        assert_eq!(
            Period::new(0, 1, 1).subtract_from(date(2008, 3, 31)).unwrap(),
            date(2008, 2, 28),
        );
        assert_eq!(Period::years(1).add_to(date(2011, 2, 28)).unwrap(), date(2012, 2, 28));
        assert_eq!(Period::years(1).add_to(date(2012, 2, 29)).unwrap(), date(2013, 2, 28));

        let err = Period::years(1).add_to(LocalDate::MAX).unwrap_err();
        assert!(err.is_range());
        insta::assert_snapshot!(
            err,
            @"failed to add period `P1Y` to date: parameter 'year' with value 1000000000 is not in the required range of -999999999..=999999999",
        );
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(Period::ZERO.to_string(), "P0D");
        assert_eq!(Period::new(-1, 0, 5).to_string(), "P-1Y5D");
        assert_eq!("P1Y2M3W4D".parse::<Period>().unwrap(), Period::new(1, 2, 25));
        assert_eq!("-P-2D".parse::<Period>().unwrap(), Period::days(2));
        assert_eq!(alloc::format!("{:?}", Period::days(2)), "P2D");
        insta::assert_snapshot!(
            alloc::format!("{:#?}", Period::new(1, 2, 3)),
            @r"
        Period {
            years: 1,
            months: 2,
            days: 3,
        }
        ",
        );
    }

    quickcheck::quickcheck! {
        fn prop_roundtrip(period: Period) -> bool {
            period.to_string().parse::<Period>().unwrap() == period
        }

        fn prop_between_adds_up(start: LocalDate, end: LocalDate) -> bool {
            Period::between(start, end).add_to(start).unwrap() == end
        }

        fn prop_normalized_preserves_months(period: Period) -> bool {
            match period.normalized() {
                Ok(n) => n.to_total_months() == period.to_total_months(),
                Err(_) => true,
            }
        }
    }
}
