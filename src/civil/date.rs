use crate::{
    civil::{LocalDateTime, LocalTime, Weekday},
    error::{civil::Error as E, ErrorContext},
    fmt::{
        temporal::{DEFAULT_DATETIME_PARSER, DEFAULT_DATETIME_PRINTER},
        FmtWrite,
    },
    util::{arith::Exact, b, common},
    Error, Field, Period, Unit,
};

/// A date in the ISO 8601 calendar system, such as `2008-06-30`.
///
/// A `LocalDate` is a triple of year, month and day. Every value is a valid
/// date in the proleptic Gregorian calendar. That is, the Gregorian rules for
/// leap years are applied to every year, including years before the calendar
/// was introduced. Year `0` is `1 BCE` and year `-1` is `2 BCE`.
///
/// The year must be in the range `-999_999_999..=999_999_999`.
///
/// # Arithmetic
///
/// Adding days or weeks is exact. Adding months or years first computes the
/// new year and month and then clamps the day of the month to the last valid
/// day. For example, one month after `2008-01-31` is `2008-02-29`. Clamping is
/// not an error.
///
/// ```
/// use isochron::civil::date;
///
/// assert_eq!(date(2008, 1, 31).plus_months(1)?, date(2008, 2, 29));
/// assert_eq!(date(2012, 2, 29).plus_years(1)?, date(2013, 2, 28));
/// assert_eq!(date(2011, 2, 28).plus_years(1)?, date(2012, 2, 28));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// An error is returned only when the result would be outside of the
/// supported range or when integer arithmetic overflows.
///
/// # Parsing and printing
///
/// Dates use the ISO 8601 `yyyy-MM-dd` format. Years outside of `0..=9999`
/// carry a sign, and years with more than four digits must use a sign:
///
/// ```
/// use isochron::civil::{date, LocalDate};
///
/// assert_eq!(date(2008, 6, 30).to_string(), "2008-06-30");
/// assert_eq!(date(-1, 1, 1).to_string(), "-0001-01-01");
/// assert_eq!(date(12_345, 1, 1).to_string(), "+12345-01-01");
///
/// let d: LocalDate = "+12345-01-01".parse()?;
/// assert_eq!(d.year(), 12_345);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct LocalDate {
    year: i32,
    month: i8,
    day: i8,
}

impl LocalDate {
    /// The minimum supported date, `-999999999-01-01`.
    pub const MIN: LocalDate = LocalDate::constant(b::Year::MIN, 1, 1);

    /// The maximum supported date, `+999999999-12-31`.
    pub const MAX: LocalDate = LocalDate::constant(b::Year::MAX, 12, 31);

    /// The Unix epoch, `1970-01-01`.
    pub const EPOCH: LocalDate = LocalDate::constant(1970, 1, 1);

    /// Creates a new date from its year, month and day.
    ///
    /// # Errors
    ///
    /// This returns a range error when the year, month or day is out of
    /// range. The day must be at most the number of days in the given month.
    /// So `2024-02-29` is valid but `2023-02-29` is not.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::civil::LocalDate;
    ///
    /// let d = LocalDate::new(2024, 2, 29)?;
    /// assert_eq!((d.year(), d.month(), d.day()), (2024, 2, 29));
    ///
    /// assert!(LocalDate::new(2023, 2, 29).unwrap_err().is_range());
    /// assert!(LocalDate::new(2023, 13, 1).unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn new(year: i32, month: i8, day: i8) -> Result<LocalDate, Error> {
        let year = b::Year::check(year)?;
        let month = b::Month::check(month)?;
        let day = b::Day::check(day)?;
        let max = common::days_in_month(year, month);
        if day > max {
            return Err(Error::range("day-of-month", day, 1, max));
        }
        Ok(LocalDate { year, month, day })
    }

    /// Creates a new date in a `const` context.
    ///
    /// # Panics
    ///
    /// This panics when [`LocalDate::new`] would return an error.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::civil::LocalDate;
    ///
    /// const D: LocalDate = LocalDate::constant(2008, 6, 30);
    /// assert_eq!(D.day_of_year(), 182);
    /// ```
    #[inline]
    pub const fn constant(year: i32, month: i8, day: i8) -> LocalDate {
        if !b::Year::contains(year as i64) {
            panic!("invalid year");
        }
        if !b::Month::contains(month as i64) {
            panic!("invalid month");
        }
        if day < 1 || day > common::days_in_month(year, month) {
            panic!("invalid day");
        }
        LocalDate { year, month, day }
    }

    /// Creates a date from a year and a day of that year.
    ///
    /// # Errors
    ///
    /// This returns a range error when the year is out of range or when the
    /// day of the year is not in `1..=365` (`1..=366` for leap years).
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::civil::{date, LocalDate};
    ///
    /// assert_eq!(LocalDate::of_year_day(2008, 182)?, date(2008, 6, 30));
    /// assert_eq!(LocalDate::of_year_day(2008, 366)?, date(2008, 12, 31));
    /// assert!(LocalDate::of_year_day(2007, 366).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn of_year_day(year: i32, day: i16) -> Result<LocalDate, Error> {
        let year = b::Year::check(year)?;
        let day = b::DayOfYear::check(day)?;
        if day == 366 && !common::is_leap_year(year) {
            return Err(Error::range("day-of-year", day, 1, 365)
                .context(E::InvalidDayOfYear { year }));
        }
        let jan1 = common::epoch_day_from_date(year, 1, 1);
        let (year, month, day) =
            common::date_from_epoch_day(jan1 + i64::from(day) - 1);
        Ok(LocalDate { year, month, day })
    }

    /// Creates a date from the number of days since `1970-01-01`.
    ///
    /// # Errors
    ///
    /// This returns a range error when the date would be outside of
    /// [`LocalDate::MIN`] and [`LocalDate::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::civil::{date, LocalDate};
    ///
    /// assert_eq!(LocalDate::from_epoch_day(14_060)?, date(2008, 6, 30));
    /// assert_eq!(LocalDate::from_epoch_day(-1)?, date(1969, 12, 31));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn from_epoch_day(epoch_day: i64) -> Result<LocalDate, Error> {
        let epoch_day = b::EpochDay::check(epoch_day)?;
        Ok(LocalDate::from_epoch_day_unchecked(epoch_day))
    }

    /// Returns the number of days since `1970-01-01`.
    #[inline]
    pub const fn to_epoch_day(self) -> i64 {
        common::epoch_day_from_date(self.year, self.month, self.day)
    }

    /// Returns the year.
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month, from `1` to `12`.
    #[inline]
    pub const fn month(self) -> i8 {
        self.month
    }

    /// Returns the day of the month, from `1` to `31`.
    #[inline]
    pub const fn day(self) -> i8 {
        self.day
    }

    /// Returns the day of the week.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::civil::{date, Weekday};
    ///
    /// assert_eq!(date(1970, 1, 1).weekday(), Weekday::Thursday);
    /// assert_eq!(date(2008, 6, 30).weekday(), Weekday::Monday);
    /// ```
    #[inline]
    pub const fn weekday(self) -> Weekday {
        let n = common::weekday_from_epoch_day(self.to_epoch_day());
        Weekday::from_monday_one_offset_unchecked(n)
    }

    /// Returns the day of the year, from `1` to `366`.
    #[inline]
    pub const fn day_of_year(self) -> i16 {
        common::day_of_year(self.year, self.month, self.day)
    }

    /// Returns the number of days in this date's month.
    #[inline]
    pub const fn days_in_month(self) -> i8 {
        common::days_in_month(self.year, self.month)
    }

    /// Returns the number of days in this date's year.
    #[inline]
    pub const fn days_in_year(self) -> i16 {
        common::days_in_year(self.year)
    }

    /// Returns true if and only if this date's year is a leap year.
    #[inline]
    pub const fn in_leap_year(self) -> bool {
        common::is_leap_year(self.year)
    }

    /// Returns the number of months since year zero, i.e., `year * 12 +
    /// month - 1`.
    #[inline]
    pub const fn proleptic_month(self) -> i64 {
        common::proleptic_month(self.year, self.month)
    }

    /// Returns a new date `days` after this one.
    ///
    /// A negative number of days moves the date backwards.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::civil::{date, LocalDate};
    ///
    /// assert_eq!(date(2008, 12, 31).plus_days(1)?, date(2009, 1, 1));
    /// assert_eq!(date(2008, 3, 1).plus_days(-1)?, date(2008, 2, 29));
    /// assert!(LocalDate::MAX.plus_days(1).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn plus_days(self, days: i64) -> Result<LocalDate, Error> {
        if days == 0 {
            return Ok(self);
        }
        let epoch_day =
            self.to_epoch_day().add_exact(days, "adding days to date")?;
        LocalDate::from_epoch_day(epoch_day)
    }

    /// Returns a new date `weeks` after this one.
    #[inline]
    pub fn plus_weeks(self, weeks: i64) -> Result<LocalDate, Error> {
        self.plus_days(weeks.mul_exact(7, "converting weeks to days")?)
    }

    /// Returns a new date `months` after this one.
    ///
    /// The day of the month is clamped to the last valid day of the
    /// resulting month.
    ///
    /// # Errors
    ///
    /// This returns an error when the resulting year is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::civil::date;
    ///
    /// assert_eq!(date(2008, 3, 31).plus_months(1)?, date(2008, 4, 30));
    /// assert_eq!(date(2008, 3, 31).plus_months(-13)?, date(2007, 2, 28));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn plus_months(self, months: i64) -> Result<LocalDate, Error> {
        if months == 0 {
            return Ok(self);
        }
        let pm = self
            .proleptic_month()
            .add_exact(months, "adding months to date")?;
        let year = b::Year::check(pm.div_euclid(12))?;
        let month = (pm.rem_euclid(12) + 1) as i8;
        Ok(LocalDate::clamped(year, month, self.day))
    }

    /// Returns a new date `years` after this one.
    ///
    /// A February 29 becomes February 28 when the resulting year is not a
    /// leap year.
    pub fn plus_years(self, years: i64) -> Result<LocalDate, Error> {
        if years == 0 {
            return Ok(self);
        }
        let year = i64::from(self.year).add_exact(years, "adding years to date")?;
        let year = b::Year::check(year)?;
        Ok(LocalDate::clamped(year, self.month, self.day))
    }

    /// Returns a new date `days` before this one.
    #[inline]
    pub fn minus_days(self, days: i64) -> Result<LocalDate, Error> {
        self.plus_days(days.neg_exact("subtracting days from date")?)
    }

    /// Returns a new date `weeks` before this one.
    #[inline]
    pub fn minus_weeks(self, weeks: i64) -> Result<LocalDate, Error> {
        self.plus_weeks(weeks.neg_exact("subtracting weeks from date")?)
    }

    /// Returns a new date `months` before this one, clamping the day of the
    /// month.
    #[inline]
    pub fn minus_months(self, months: i64) -> Result<LocalDate, Error> {
        self.plus_months(months.neg_exact("subtracting months from date")?)
    }

    /// Returns a new date `years` before this one, clamping the day of the
    /// month.
    #[inline]
    pub fn minus_years(self, years: i64) -> Result<LocalDate, Error> {
        self.plus_years(years.neg_exact("subtracting years from date")?)
    }

    /// Returns this date with the year changed, clamping the day of the
    /// month.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::civil::date;
    ///
    /// assert_eq!(date(2008, 2, 29).with_year(2007)?, date(2007, 2, 28));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn with_year(self, year: i32) -> Result<LocalDate, Error> {
        let year = b::Year::check(year)?;
        Ok(LocalDate::clamped(year, self.month, self.day))
    }

    /// Returns this date with the month changed, clamping the day of the
    /// month.
    #[inline]
    pub fn with_month(self, month: i8) -> Result<LocalDate, Error> {
        let month = b::Month::check(month)?;
        Ok(LocalDate::clamped(self.year, month, self.day))
    }

    /// Returns this date with the day of the month changed.
    ///
    /// # Errors
    ///
    /// Unlike [`LocalDate::with_month`], this does not clamp. An error is
    /// returned when the day is invalid for this date's month.
    #[inline]
    pub fn with_day(self, day: i8) -> Result<LocalDate, Error> {
        LocalDate::new(self.year, self.month, day)
    }

    /// Returns this date with the day of the year changed.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::civil::date;
    ///
    /// assert_eq!(date(2008, 6, 30).with_day_of_year(33)?, date(2008, 2, 2));
    /// assert!(date(2007, 6, 30).with_day_of_year(366).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn with_day_of_year(self, day: i16) -> Result<LocalDate, Error> {
        LocalDate::of_year_day(self.year, day)
    }

    /// Returns true if and only if the given field can be read from a date.
    ///
    /// This is true precisely for the fields that are date based.
    #[inline]
    pub fn is_supported(self, field: Field) -> bool {
        field.is_date_based()
    }

    /// Returns the value of a date based field as a 32-bit integer.
    ///
    /// # Errors
    ///
    /// This returns an error when the field is not date based, or when it is
    /// [`Field::EpochDay`] or [`Field::ProlepticMonth`], whose values don't
    /// fit in 32 bits. Use [`LocalDate::get_long`] for those.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::date, Field};
    ///
    /// let d = date(2008, 6, 30);
    /// assert_eq!(d.get(Field::DayOfYear)?, 182);
    /// assert_eq!(d.get(Field::AlignedWeekOfYear)?, 26);
    /// assert!(d.get(Field::EpochDay).unwrap_err().is_unsupported());
    /// assert!(d.get(Field::HourOfDay).unwrap_err().is_unsupported());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn get(self, field: Field) -> Result<i32, Error> {
        let value = self.get_long(field)?;
        if !field.fits_i32() {
            return Err(Error::field_too_large(field));
        }
        Ok(value as i32)
    }

    /// Returns the value of a date based field.
    ///
    /// # Errors
    ///
    /// This returns an error when the field is not date based.
    pub fn get_long(self, field: Field) -> Result<i64, Error> {
        use crate::Field::*;

        let doy = i64::from(self.day_of_year());
        let day = i64::from(self.day);
        let value = match field {
            DayOfWeek => i64::from(self.weekday().to_monday_one_offset()),
            AlignedDayOfWeekInMonth => (day - 1) % 7 + 1,
            AlignedDayOfWeekInYear => (doy - 1) % 7 + 1,
            DayOfMonth => day,
            DayOfYear => doy,
            EpochDay => self.to_epoch_day(),
            AlignedWeekOfMonth => (day - 1) / 7 + 1,
            AlignedWeekOfYear => (doy - 1) / 7 + 1,
            MonthOfYear => i64::from(self.month),
            ProlepticMonth => self.proleptic_month(),
            YearOfEra if self.year >= 1 => i64::from(self.year),
            YearOfEra => 1 - i64::from(self.year),
            Year => i64::from(self.year),
            Era if self.year >= 1 => 1,
            Era => 0,
            _ => return Err(Error::unsupported_field(field, "local date")),
        };
        Ok(value)
    }

    /// Returns this date with the given field set to a new value.
    ///
    /// Setting the day of the week, or one of the aligned fields, moves the
    /// date within its current week (or aligned week, month or year).
    /// Setting the year, year of era or month clamps the day of the month.
    ///
    /// # Errors
    ///
    /// This returns an error when the field is not date based, when the value
    /// is outside the field's range or when the resulting date is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::date, Field};
    ///
    /// // 2008-06-30 is a Monday.
    /// let d = date(2008, 6, 30);
    /// assert_eq!(d.with_field(Field::DayOfWeek, 3)?, date(2008, 7, 2));
    /// assert_eq!(d.with_field(Field::MonthOfYear, 2)?, date(2008, 2, 29));
    /// assert_eq!(d.with_field(Field::Era, 0)?, date(-2007, 6, 30));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_field(
        self,
        field: Field,
        value: i64,
    ) -> Result<LocalDate, Error> {
        use crate::Field::*;

        if !self.is_supported(field) {
            return Err(Error::unsupported_field(field, "local date"));
        }
        let value = field.check(value)?;
        let result = match field {
            DayOfWeek | AlignedDayOfWeekInMonth | AlignedDayOfWeekInYear => {
                self.plus_days(value - self.get_long(field)?)
            }
            DayOfMonth => self.with_day(value as i8),
            DayOfYear => self.with_day_of_year(value as i16),
            EpochDay => LocalDate::from_epoch_day(value),
            AlignedWeekOfMonth | AlignedWeekOfYear => {
                self.plus_weeks(value - self.get_long(field)?)
            }
            MonthOfYear => self.with_month(value as i8),
            ProlepticMonth => self.plus_months(value - self.proleptic_month()),
            YearOfEra if self.year >= 1 => self.with_year(value as i32),
            YearOfEra => self.with_year((1 - value) as i32),
            Year => self.with_year(value as i32),
            Era if i64::from(self.year >= 1) == value => Ok(self),
            Era => self.with_year(1 - self.year),
            _ => Err(Error::unsupported_field(field, "local date")),
        };
        result.with_context(|| E::FailedWithField { field })
    }

    /// Returns true if and only if amounts of the given unit can be added to
    /// a date.
    #[inline]
    pub fn is_supported_unit(self, unit: Unit) -> bool {
        unit.is_date_based()
    }

    /// Adds an amount of the given unit to this date.
    ///
    /// # Errors
    ///
    /// This returns an error when the unit is not date based or when the
    /// result is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::date, Unit};
    ///
    /// let d = date(2008, 6, 30);
    /// assert_eq!(d.plus_unit(2, Unit::Decade)?, date(2028, 6, 30));
    /// assert_eq!(d.plus_unit(-1, Unit::Week)?, date(2008, 6, 23));
    /// assert!(d.plus_unit(1, Unit::Hour).unwrap_err().is_unsupported());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn plus_unit(self, amount: i64, unit: Unit) -> Result<LocalDate, Error> {
        let what = "multiplying amount by unit length";
        let result = match unit {
            Unit::Day => self.plus_days(amount),
            Unit::Week => self.plus_weeks(amount),
            Unit::Month => self.plus_months(amount),
            Unit::Year => self.plus_years(amount),
            Unit::Decade => self.plus_years(amount.mul_exact(10, what)?),
            Unit::Century => self.plus_years(amount.mul_exact(100, what)?),
            Unit::Millennium => {
                self.plus_years(amount.mul_exact(1_000, what)?)
            }
            Unit::Era => {
                let era = self
                    .get_long(Field::Era)?
                    .add_exact(amount, "adding eras to date")?;
                self.with_field(Field::Era, era)
            }
            _ => return Err(Error::unsupported_unit(unit, "local date")),
        };
        result.with_context(|| E::FailedAddUnit { unit })
    }

    /// Returns the number of whole units from this date until `end`.
    ///
    /// The result is negative when `end` is before this date. Partial units
    /// are truncated towards zero.
    ///
    /// # Errors
    ///
    /// This returns an error when the unit is not date based.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::{civil::date, Unit};
    ///
    /// let start = date(2008, 1, 31);
    /// assert_eq!(start.until(date(2008, 2, 29), Unit::Month)?, 0);
    /// assert_eq!(start.until(date(2008, 3, 31), Unit::Month)?, 2);
    /// assert_eq!(start.until(date(2008, 3, 31), Unit::Week)?, 8);
    /// assert_eq!(start.until(date(2007, 1, 31), Unit::Year)?, -1);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn until(self, end: LocalDate, unit: Unit) -> Result<i64, Error> {
        let amount = match unit {
            Unit::Day => self.days_until(end),
            Unit::Week => self.days_until(end) / 7,
            Unit::Era => end.get_long(Field::Era)? - self.get_long(Field::Era)?,
            _ => match unit.months() {
                Some(months) => self.months_until(end) / months,
                None => {
                    return Err(Error::unsupported_unit(unit, "local date"))
                }
            },
        };
        Ok(amount)
    }

    /// Returns the period of years, months and days from this date until
    /// `end`.
    ///
    /// This is equivalent to [`Period::between`].
    #[inline]
    pub fn until_period(self, end: LocalDate) -> Period {
        Period::between(self, end)
    }

    /// Combines this date with a time to create a datetime.
    #[inline]
    pub const fn at(self, time: LocalTime) -> LocalDateTime {
        LocalDateTime::from_parts(self, time)
    }

    /// Returns the datetime at midnight at the start of this date.
    #[inline]
    pub const fn at_start_of_day(self) -> LocalDateTime {
        self.at(LocalTime::MIDNIGHT)
    }

    pub(crate) fn days_until(self, end: LocalDate) -> i64 {
        end.to_epoch_day() - self.to_epoch_day()
    }

    /// Returns the number of whole months until `end`.
    ///
    /// The month and day are packed into a single number so that a partial
    /// month at the end is truncated.
    pub(crate) fn months_until(self, end: LocalDate) -> i64 {
        let packed1 = self.proleptic_month() * 32 + i64::from(self.day);
        let packed2 = end.proleptic_month() * 32 + i64::from(end.day);
        (packed2 - packed1) / 32
    }

    /// Creates a date from an epoch day that is known to be in range.
    #[inline]
    pub(crate) const fn from_epoch_day_unchecked(epoch_day: i64) -> LocalDate {
        let (year, month, day) = common::date_from_epoch_day(epoch_day);
        LocalDate { year, month, day }
    }

    /// Creates a date from valid components, clamping the day of the month.
    #[inline]
    fn clamped(year: i32, month: i8, day: i8) -> LocalDate {
        let day = day.min(common::days_in_month(year, month));
        LocalDate { year, month, day }
    }
}

impl core::fmt::Debug for LocalDate {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for LocalDate {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_DATETIME_PRINTER
            .print_date(self, FmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl core::str::FromStr for LocalDate {
    type Err = Error;

    fn from_str(string: &str) -> Result<LocalDate, Error> {
        DEFAULT_DATETIME_PARSER.parse_date(string.as_bytes())
    }
}

crate::fmt::serde::impl_serde_str!(LocalDate, "a date string");

#[cfg(test)]
impl quickcheck::Arbitrary for LocalDate {
    fn arbitrary(g: &mut quickcheck::Gen) -> LocalDate {
        let span = b::EpochDay::MAX - b::EpochDay::MIN + 1;
        let epoch_day = b::EpochDay::MIN + i64::arbitrary(g).rem_euclid(span);
        let (year, month, day) = common::date_from_epoch_day(epoch_day);
        LocalDate { year, month, day }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::civil::date;

    use super::*;

    #[test]
    fn new_errors() {
        insta::assert_snapshot!(
            LocalDate::new(2023, 2, 29).unwrap_err(),
            @"parameter 'day-of-month' with value 29 is not in the required range of 1..=28",
        );
        insta::assert_snapshot!(
            LocalDate::new(1_000_000_000, 1, 1).unwrap_err(),
            @"parameter 'year' with value 1000000000 is not in the required range of -999999999..=999999999",
        );
        insta::assert_snapshot!(
            LocalDate::of_year_day(2007, 366).unwrap_err(),
            @"day-of-year 366 is invalid in non-leap year 2007: parameter 'day-of-year' with value 366 is not in the required range of 1..=365",
        );
    }

    #[test]
    fn extremes() {
        assert_eq!(LocalDate::MIN.to_epoch_day(), b::EpochDay::MIN);
        assert_eq!(LocalDate::MAX.to_epoch_day(), b::EpochDay::MAX);
        assert!(LocalDate::MIN.plus_days(-1).unwrap_err().is_range());
        assert!(LocalDate::MAX.plus_months(1).unwrap_err().is_range());
        assert!(LocalDate::MAX.plus_days(i64::MAX).unwrap_err().is_overflow());
        assert!(LocalDate::MAX.plus_weeks(i64::MAX).unwrap_err().is_overflow());
        assert!(LocalDate::MIN.minus_days(i64::MIN).unwrap_err().is_overflow());
        assert_eq!(LocalDate::EPOCH.to_epoch_day(), 0);
    }

    #[test]
    fn plus_months_clamps() {
        let d = date(2007, 1, 31);
        let got: alloc::vec::Vec<LocalDate> =
            (1..=12).map(|m| d.plus_months(m).unwrap()).collect();
        assert_eq!(
            got,
            [
                date(2007, 2, 28),
                date(2007, 3, 31),
                date(2007, 4, 30),
                date(2007, 5, 31),
                date(2007, 6, 30),
                date(2007, 7, 31),
                date(2007, 8, 31),
                date(2007, 9, 30),
                date(2007, 10, 31),
                date(2007, 11, 30),
                date(2007, 12, 31),
                date(2008, 1, 31),
            ],
        );
        assert_eq!(date(0, 1, 15).plus_months(-1).unwrap(), date(-1, 12, 15));
        assert_eq!(date(2008, 2, 29).minus_years(4).unwrap(), date(2004, 2, 29));
        assert_eq!(date(2008, 2, 29).minus_years(1).unwrap(), date(2007, 2, 28));
    }

    #[test]
    fn fields() {
        let d = date(2008, 6, 30);
        assert_eq!(d.get(Field::DayOfWeek).unwrap(), 1);
        assert_eq!(d.get(Field::AlignedDayOfWeekInMonth).unwrap(), 2);
        assert_eq!(d.get(Field::AlignedDayOfWeekInYear).unwrap(), 7);
        assert_eq!(d.get(Field::AlignedWeekOfMonth).unwrap(), 5);
        assert_eq!(d.get(Field::AlignedWeekOfYear).unwrap(), 26);
        assert_eq!(d.get(Field::YearOfEra).unwrap(), 2008);
        assert_eq!(d.get(Field::Era).unwrap(), 1);
        assert_eq!(d.get_long(Field::EpochDay).unwrap(), 14_060);
        assert_eq!(d.get_long(Field::ProlepticMonth).unwrap(), 2008 * 12 + 5);

        let bce = date(-5, 3, 1);
        assert_eq!(bce.get(Field::YearOfEra).unwrap(), 6);
        assert_eq!(bce.get(Field::Era).unwrap(), 0);

        insta::assert_snapshot!(
            d.get(Field::ProlepticMonth).unwrap_err(),
            @"field `ProlepticMonth` is too large for a 32-bit integer (use `get_long` instead)",
        );
        insta::assert_snapshot!(
            d.get(Field::NanoOfSecond).unwrap_err(),
            @"unsupported field `NanoOfSecond` for local date",
        );
    }

    #[test]
    fn with_fields() {
        let d = date(2008, 6, 30);
        let w = |field, value| d.with_field(field, value).unwrap();
        assert_eq!(w(Field::DayOfWeek, 7), date(2008, 7, 6));
        assert_eq!(w(Field::AlignedDayOfWeekInMonth, 1), date(2008, 6, 29));
        assert_eq!(w(Field::AlignedDayOfWeekInYear, 1), date(2008, 6, 24));
        assert_eq!(w(Field::DayOfMonth, 1), date(2008, 6, 1));
        assert_eq!(w(Field::DayOfYear, 33), date(2008, 2, 2));
        assert_eq!(w(Field::EpochDay, 0), date(1970, 1, 1));
        assert_eq!(w(Field::AlignedWeekOfMonth, 1), date(2008, 6, 2));
        assert_eq!(w(Field::AlignedWeekOfYear, 1), date(2008, 1, 7));
        assert_eq!(w(Field::ProlepticMonth, 0), date(0, 1, 30));
        assert_eq!(w(Field::YearOfEra, 2007), date(2007, 6, 30));
        assert_eq!(w(Field::Year, -1), date(-1, 6, 30));
        assert_eq!(w(Field::Era, 1), d);
        assert_eq!(
            date(-1, 6, 30).with_field(Field::YearOfEra, 5).unwrap(),
            date(-4, 6, 30),
        );

        let err = d.with_field(Field::DayOfMonth, 31).unwrap_err();
        assert!(err.is_range());
        insta::assert_snapshot!(
            err,
            @"failed to set field `DayOfMonth`: parameter 'day-of-month' with value 31 is not in the required range of 1..=30",
        );
        insta::assert_snapshot!(
            d.with_field(Field::MonthOfYear, 13).unwrap_err(),
            @"parameter 'MonthOfYear' with value 13 is not in the required range of 1..=12",
        );
        assert!(d
            .with_field(Field::HourOfDay, 1)
            .unwrap_err()
            .is_unsupported());
    }

    #[test]
    fn units() {
        let d = date(2008, 6, 30);
        assert_eq!(d.plus_unit(1, Unit::Day).unwrap(), date(2008, 7, 1));
        assert_eq!(d.plus_unit(1, Unit::Month).unwrap(), date(2008, 7, 30));
        assert_eq!(d.plus_unit(-1, Unit::Year).unwrap(), date(2007, 6, 30));
        assert_eq!(d.plus_unit(1, Unit::Century).unwrap(), date(2108, 6, 30));
        assert_eq!(
            d.plus_unit(1, Unit::Millennium).unwrap(),
            date(3008, 6, 30),
        );
        assert_eq!(d.plus_unit(-1, Unit::Era).unwrap(), date(-2007, 6, 30));
        assert!(d.plus_unit(1, Unit::Era).unwrap_err().is_range());
        assert!(d.plus_unit(1, Unit::Forever).unwrap_err().is_unsupported());

        let end = date(2138, 7, 1);
        assert_eq!(d.until(end, Unit::Day).unwrap(), 47_482);
        assert_eq!(d.until(end, Unit::Year).unwrap(), 130);
        assert_eq!(d.until(end, Unit::Decade).unwrap(), 13);
        assert_eq!(d.until(end, Unit::Century).unwrap(), 1);
        assert_eq!(d.until(end, Unit::Millennium).unwrap(), 0);
        assert_eq!(d.until(end, Unit::Era).unwrap(), 0);
        assert_eq!(end.until(d, Unit::Month).unwrap(), -1_560);
        assert!(d.until(end, Unit::Second).unwrap_err().is_unsupported());
    }

    #[test]
    fn display() {
        assert_eq!(date(2008, 6, 30).to_string(), "2008-06-30");
        assert_eq!(date(0, 1, 1).to_string(), "0000-01-01");
        assert_eq!(date(-1, 1, 1).to_string(), "-0001-01-01");
        assert_eq!(date(-999, 1, 1).to_string(), "-0999-01-01");
        assert_eq!(date(-1_000, 1, 1).to_string(), "-1000-01-01");
        assert_eq!(date(9_999, 12, 31).to_string(), "9999-12-31");
        assert_eq!(date(10_000, 1, 1).to_string(), "+10000-01-01");
        assert_eq!(LocalDate::MIN.to_string(), "-999999999-01-01");
        assert_eq!(LocalDate::MAX.to_string(), "+999999999-12-31");
        assert_eq!(alloc::format!("{:?}", date(2008, 6, 30)), "2008-06-30");
    }

    quickcheck::quickcheck! {
        fn prop_roundtrip_display(d: LocalDate) -> bool {
            d.to_string().parse::<LocalDate>().unwrap() == d
        }

        fn prop_until_days_inverse(d1: LocalDate, d2: LocalDate) -> bool {
            let days = d1.until(d2, Unit::Day).unwrap();
            d1.plus_days(days).unwrap() == d2
        }

        fn prop_months_until_never_overshoots(
            d1: LocalDate,
            d2: LocalDate
        ) -> bool {
            let months = d1.until(d2, Unit::Month).unwrap();
            let moved = d1.plus_months(months).unwrap();
            if d1 <= d2 { moved <= d2 } else { moved >= d2 }
        }
    }
}
