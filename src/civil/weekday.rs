use crate::{util::b, Error};

/// A representation for the day of the week.
///
/// The default representation follows ISO 8601. That is, the week starts with
/// Monday and numbering starts at `1`.
///
/// # Example
///
/// ```
/// use isochron::civil::{date, Weekday};
///
/// let wd = date(2008, 6, 30).weekday();
/// assert_eq!(wd, Weekday::Monday);
/// assert_eq!(wd.to_monday_one_offset(), 1);
/// assert_eq!(wd.plus(-1), Weekday::Sunday);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// Converts an ISO 8601 day number to a weekday, where Monday is `1` and
    /// Sunday is `7`.
    ///
    /// # Errors
    ///
    /// This returns an error when `offset` is not in the range `1..=7`.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::civil::Weekday;
    ///
    /// assert_eq!(Weekday::from_monday_one_offset(3)?, Weekday::Wednesday);
    /// assert!(Weekday::from_monday_one_offset(0).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn from_monday_one_offset(offset: i8) -> Result<Weekday, Error> {
        let offset = b::Weekday::check(offset)?;
        Ok(Weekday::from_monday_one_offset_unchecked(offset))
    }

    /// Returns the ISO 8601 day number for this weekday.
    #[inline]
    pub const fn to_monday_one_offset(self) -> i8 {
        self as i8
    }

    /// Returns the weekday `days` after this one, wrapping around the week
    /// as needed. A negative count moves backwards.
    ///
    /// This never fails.
    #[inline]
    pub const fn plus(self, days: i64) -> Weekday {
        let offset = (self as i64 - 1 + days.rem_euclid(7)) % 7;
        Weekday::from_monday_one_offset_unchecked(offset as i8 + 1)
    }

    /// Returns the weekday `days` before this one, wrapping around the week
    /// as needed.
    #[inline]
    pub const fn minus(self, days: i64) -> Weekday {
        // This avoids negating `i64::MIN`.
        self.plus(-(days % 7))
    }

    /// Returns the weekday following this one.
    #[inline]
    pub const fn next(self) -> Weekday {
        self.plus(1)
    }

    /// Returns the weekday preceding this one.
    #[inline]
    pub const fn previous(self) -> Weekday {
        self.plus(-1)
    }

    /// The full English name of this weekday, e.g., `Monday`.
    pub(crate) const fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Callers must ensure `offset` is in `1..=7`. Anything else is treated
    /// as Sunday.
    pub(crate) const fn from_monday_one_offset_unchecked(
        offset: i8,
    ) -> Weekday {
        match offset {
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            6 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }
}

impl core::fmt::Display for Weekday {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Weekday {
    fn arbitrary(g: &mut quickcheck::Gen) -> Weekday {
        let offset = (i8::arbitrary(g).rem_euclid(7)) + 1;
        Weekday::from_monday_one_offset_unchecked(offset)
    }
}
