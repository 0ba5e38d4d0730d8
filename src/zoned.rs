use alloc::string::ToString;

use crate::{
    civil::{LocalDate, LocalDateTime, LocalTime},
    error::tz::Error as E,
    fmt::{
        temporal::{DEFAULT_DATETIME_PARSER, DEFAULT_DATETIME_PRINTER},
        FmtWrite,
    },
    tz::{AmbiguousOffset, ZoneId, ZoneOffset, ZoneRulesProvider},
    Duration, Error, Instant, OffsetDateTime, Period,
};

/// A datetime with an offset and a time zone, such as
/// `2008-06-30T11:30+02:00[Europe/Paris]`.
///
/// A zoned datetime is an [`OffsetDateTime`] associated with a [`ZoneId`].
/// Every operation that can change the offset consults a
/// [`ZoneRulesProvider`] to find the offset that the zone had at the new
/// datetime. Values produced by parsing are not checked against any rules.
///
/// When the zone is a fixed offset equal to the offset of the datetime, the
/// zone is left out when printing.
///
/// # Example
///
/// ```
/// use isochron::{tz::ZoneId, ZonedDateTime};
///
/// let zdt: ZonedDateTime = "2008-06-30T11:30+02:00[Europe/Paris]".parse()?;
/// assert_eq!(zdt.zone().region_name(), Some("Europe/Paris"));
/// assert_eq!(zdt.to_offset_datetime().to_string(), "2008-06-30T11:30+02:00");
///
/// let zdt: ZonedDateTime = "2008-06-30T11:30+02:00".parse()?;
/// assert_eq!(zdt.zone(), &ZoneId::fixed(zdt.offset()));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct ZonedDateTime {
    odt: OffsetDateTime,
    zone: ZoneId,
}

impl ZonedDateTime {
    /// Returns the given instant in the given zone.
    ///
    /// # Errors
    ///
    /// This returns an error when the provider fails to find the rules for
    /// the zone.
    pub fn of_instant(
        instant: Instant,
        zone: &ZoneId,
        provider: &dyn ZoneRulesProvider,
    ) -> Result<ZonedDateTime, Error> {
        let offset = zone.rules(provider)?.offset_at(instant);
        Ok(ZonedDateTime::from_parts_unchecked(
            instant.at_offset(offset),
            zone.clone(),
        ))
    }

    /// Returns the given local datetime in the given zone.
    ///
    /// When the local datetime falls in a gap, it is moved forward by the
    /// length of the gap. When it falls in a fold, the earlier offset is
    /// used.
    #[inline]
    pub fn of_local(
        datetime: LocalDateTime,
        zone: &ZoneId,
        provider: &dyn ZoneRulesProvider,
    ) -> Result<ZonedDateTime, Error> {
        ZonedDateTime::of_local_preferred(datetime, zone, provider, None)
    }

    /// Returns the given local datetime in the given zone, using the
    /// preferred offset in a fold if it's valid.
    ///
    /// This is like [`ZonedDateTime::of_local`], except when the local
    /// datetime falls in a fold and `preferred` is one of its two offsets.
    /// Then `preferred` is used instead of the earlier offset.
    pub fn of_local_preferred(
        datetime: LocalDateTime,
        zone: &ZoneId,
        provider: &dyn ZoneRulesProvider,
        preferred: Option<ZoneOffset>,
    ) -> Result<ZonedDateTime, Error> {
        let rules = zone.rules(provider)?;
        let odt = match rules.to_ambiguous_offset(datetime) {
            AmbiguousOffset::Unambiguous { offset } => {
                datetime.at_offset(offset)
            }
            AmbiguousOffset::Gap { before, after } => {
                let gap = i64::from(after.total_seconds())
                    - i64::from(before.total_seconds());
                trace!(
                    "{datetime} falls in a gap in {zone}, \
                     moving it forward by {gap} seconds",
                );
                datetime.plus_seconds(gap)?.at_offset(after)
            }
            AmbiguousOffset::Fold { before, after } => {
                let offset = match preferred {
                    Some(offset) if offset == before || offset == after => {
                        offset
                    }
                    _ => before,
                };
                trace!(
                    "{datetime} falls in a fold in {zone}, \
                     picked offset {offset} out of {before} and {after}",
                );
                datetime.at_offset(offset)
            }
        };
        Ok(ZonedDateTime::from_parts_unchecked(odt, zone.clone()))
    }

    /// Returns the given local datetime in the given zone, requiring that
    /// the offset is valid for it.
    ///
    /// # Errors
    ///
    /// This returns an error when the local datetime falls in a gap, or when
    /// the offset isn't one of the valid offsets for the local datetime.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use isochron::{civil::datetime, tz::{self, RulesMap, FixedRules, ZoneId}, ZonedDateTime};
    ///
    /// let mut provider = RulesMap::new();
    /// provider.insert("Asia/Kolkata", Arc::new(FixedRules(tz::ZoneOffset::constant(5, 30, 0))));
    /// let zone = ZoneId::region("Asia/Kolkata")?;
    ///
    /// let dt = datetime(2008, 6, 30, 11, 30, 0, 0);
    /// let offset = tz::ZoneOffset::constant(5, 30, 0);
    /// assert!(ZonedDateTime::of_strict(dt, offset, &zone, &provider).is_ok());
    /// assert!(ZonedDateTime::of_strict(dt, tz::offset(5), &zone, &provider).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn of_strict(
        datetime: LocalDateTime,
        offset: ZoneOffset,
        zone: &ZoneId,
        provider: &dyn ZoneRulesProvider,
    ) -> Result<ZonedDateTime, Error> {
        let rules = zone.rules(provider)?;
        let valid = match rules.to_ambiguous_offset(datetime) {
            AmbiguousOffset::Unambiguous { offset: valid } => offset == valid,
            AmbiguousOffset::Gap { .. } => {
                return Err(Error::from(E::StrictGap {
                    datetime,
                    zone: zone.to_string().into(),
                }));
            }
            AmbiguousOffset::Fold { before, after } => {
                offset == before || offset == after
            }
        };
        if !valid {
            return Err(Error::from(E::StrictOffset {
                datetime,
                offset,
                zone: zone.to_string().into(),
            }));
        }
        Ok(ZonedDateTime::from_parts_unchecked(
            datetime.at_offset(offset),
            zone.clone(),
        ))
    }

    /// Returns the offset datetime of this value.
    #[inline]
    pub fn to_offset_datetime(&self) -> OffsetDateTime {
        self.odt
    }

    /// Returns the local datetime.
    #[inline]
    pub fn datetime(&self) -> LocalDateTime {
        self.odt.datetime()
    }

    /// Returns the local date.
    #[inline]
    pub fn date(&self) -> LocalDate {
        self.odt.date()
    }

    /// Returns the local time.
    #[inline]
    pub fn time(&self) -> LocalTime {
        self.odt.time()
    }

    /// Returns the offset.
    #[inline]
    pub fn offset(&self) -> ZoneOffset {
        self.odt.offset()
    }

    /// Returns the zone.
    #[inline]
    pub fn zone(&self) -> &ZoneId {
        &self.zone
    }

    /// Returns the instant identified by this value.
    ///
    /// See [`OffsetDateTime::to_instant`] for when this fails.
    #[inline]
    pub fn to_instant(&self) -> Result<Instant, Error> {
        self.odt.to_instant()
    }

    /// Returns the number of seconds since the Unix epoch.
    #[inline]
    pub fn to_epoch_second(&self) -> i64 {
        self.odt.to_epoch_second()
    }

    /// Returns the same instant in another zone.
    pub fn with_zone_same_instant(
        &self,
        zone: &ZoneId,
        provider: &dyn ZoneRulesProvider,
    ) -> Result<ZonedDateTime, Error> {
        if *zone == self.zone {
            return Ok(self.clone());
        }
        self.odt.at_zone_same_instant(zone, provider)
    }

    /// Returns the same local datetime in another zone, keeping the offset
    /// of this value where possible.
    pub fn with_zone_same_local(
        &self,
        zone: &ZoneId,
        provider: &dyn ZoneRulesProvider,
    ) -> Result<ZonedDateTime, Error> {
        if *zone == self.zone {
            return Ok(self.clone());
        }
        self.odt.at_zone_similar_local(zone, provider)
    }

    /// Returns this value with the earlier of the two offsets when the local
    /// datetime falls in a fold. Otherwise, this returns the value unchanged.
    pub fn with_earlier_offset_at_overlap(
        &self,
        provider: &dyn ZoneRulesProvider,
    ) -> Result<ZonedDateTime, Error> {
        let rules = self.zone.rules(provider)?;
        match rules.to_ambiguous_offset(self.datetime()) {
            AmbiguousOffset::Fold { before, .. } => Ok(self.with_offset(before)),
            _ => Ok(self.clone()),
        }
    }

    /// Returns this value with the later of the two offsets when the local
    /// datetime falls in a fold. Otherwise, this returns the value unchanged.
    pub fn with_later_offset_at_overlap(
        &self,
        provider: &dyn ZoneRulesProvider,
    ) -> Result<ZonedDateTime, Error> {
        let rules = self.zone.rules(provider)?;
        match rules.to_ambiguous_offset(self.datetime()) {
            AmbiguousOffset::Fold { after, .. } => Ok(self.with_offset(after)),
            _ => Ok(self.clone()),
        }
    }

    /// Adds a duration to the instant of this value. The offset is then the
    /// one in effect at the new instant.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use isochron::{
    ///     tz::{self, RulesMap, Transition, TransitionRules},
    ///     Duration, Period, ZonedDateTime,
    /// };
    ///
    /// let (cet, cest) = (tz::offset(1), tz::offset(2));
    /// let paris = TransitionRules::new(cet, [
    ///     Transition::new("2008-03-30T01:00Z".parse()?, cet, cest)?,
    /// ])?;
    /// let mut provider = RulesMap::new();
    /// provider.insert("Europe/Paris", Arc::new(paris));
    ///
    /// let zdt: ZonedDateTime = "2008-03-29T12:00+01:00[Europe/Paris]".parse()?;
    /// let got = zdt.plus(Duration::of_hours(24)?, &provider)?;
    /// assert_eq!(got.to_string(), "2008-03-30T13:00+02:00[Europe/Paris]");
    /// let got = zdt.plus_period(Period::days(1), &provider)?;
    /// assert_eq!(got.to_string(), "2008-03-30T12:00+02:00[Europe/Paris]");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn plus(
        &self,
        duration: Duration,
        provider: &dyn ZoneRulesProvider,
    ) -> Result<ZonedDateTime, Error> {
        let instant = self.to_instant()?.plus(duration)?;
        ZonedDateTime::of_instant(instant, &self.zone, provider)
    }

    /// Subtracts a duration from the instant of this value.
    pub fn minus(
        &self,
        duration: Duration,
        provider: &dyn ZoneRulesProvider,
    ) -> Result<ZonedDateTime, Error> {
        let instant = self.to_instant()?.minus(duration)?;
        ZonedDateTime::of_instant(instant, &self.zone, provider)
    }

    /// Adds a period to the local date of this value. The local datetime is
    /// then resolved in the zone, keeping the offset of this value where
    /// possible.
    pub fn plus_period(
        &self,
        period: Period,
        provider: &dyn ZoneRulesProvider,
    ) -> Result<ZonedDateTime, Error> {
        let datetime = self.datetime().plus_period(period)?;
        ZonedDateTime::of_local_preferred(
            datetime,
            &self.zone,
            provider,
            Some(self.offset()),
        )
    }

    /// Subtracts a period from the local date of this value.
    pub fn minus_period(
        &self,
        period: Period,
        provider: &dyn ZoneRulesProvider,
    ) -> Result<ZonedDateTime, Error> {
        let datetime = self.datetime().minus_period(period)?;
        ZonedDateTime::of_local_preferred(
            datetime,
            &self.zone,
            provider,
            Some(self.offset()),
        )
    }

    #[inline]
    pub(crate) fn from_parts_unchecked(
        odt: OffsetDateTime,
        zone: ZoneId,
    ) -> ZonedDateTime {
        ZonedDateTime { odt, zone }
    }

    fn with_offset(&self, offset: ZoneOffset) -> ZonedDateTime {
        ZonedDateTime::from_parts_unchecked(
            self.odt.with_offset_same_local(offset),
            self.zone.clone(),
        )
    }
}

impl From<ZonedDateTime> for OffsetDateTime {
    #[inline]
    fn from(zdt: ZonedDateTime) -> OffsetDateTime {
        zdt.to_offset_datetime()
    }
}

impl core::fmt::Debug for ZonedDateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for ZonedDateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_DATETIME_PRINTER
            .print_zoned(self, FmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl core::str::FromStr for ZonedDateTime {
    type Err = Error;

    fn from_str(string: &str) -> Result<ZonedDateTime, Error> {
        DEFAULT_DATETIME_PARSER.parse_zoned(string.as_bytes())
    }
}

crate::fmt::serde::impl_serde_str!(
    ZonedDateTime,
    "an ISO 8601 datetime string with an offset and an optional time zone"
);

#[cfg(test)]
mod tests {
    use crate::{
        civil::datetime,
        tz::{self, testdata},
    };

    use super::*;

    fn zdt(s: &str) -> ZonedDateTime {
        s.parse().unwrap()
    }

    #[test]
    fn of_local() {
        let _ = env_logger::try_init();

        let provider = testdata::provider();
        let paris = ZoneId::region("Europe/Paris").unwrap();

        let got =
            ZonedDateTime::of_local(datetime(2008, 3, 30, 2, 30, 0, 0), &paris, &provider)
                .unwrap();
        assert_eq!(got, zdt("2008-03-30T03:30+02:00[Europe/Paris]"));
        let got =
            ZonedDateTime::of_local(datetime(2008, 10, 26, 2, 30, 0, 0), &paris, &provider)
                .unwrap();
        assert_eq!(got, zdt("2008-10-26T02:30+02:00[Europe/Paris]"));

        let later = got.with_later_offset_at_overlap(&provider).unwrap();
        assert_eq!(later, zdt("2008-10-26T02:30+01:00[Europe/Paris]"));
        assert_eq!(later.with_earlier_offset_at_overlap(&provider).unwrap(), got);
        let summer = zdt("2008-06-30T11:30+02:00[Europe/Paris]");
        assert_eq!(summer.with_later_offset_at_overlap(&provider).unwrap(), summer);
    }

    #[test]
    fn of_strict() {
        let provider = testdata::provider();
        let paris = ZoneId::region("Europe/Paris").unwrap();

        let dt = datetime(2008, 10, 26, 2, 30, 0, 0);
        for offset in [tz::offset(1), tz::offset(2)] {
            let got = ZonedDateTime::of_strict(dt, offset, &paris, &provider).unwrap();
            assert_eq!(got.offset(), offset);
        }
        insta::assert_snapshot!(
            ZonedDateTime::of_strict(dt, tz::offset(3), &paris, &provider).unwrap_err(),
            @"offset `+03:00` is not valid for datetime `2008-10-26T02:30` in time zone `Europe/Paris`",
        );
        let dt = datetime(2008, 3, 30, 2, 30, 0, 0);
        insta::assert_snapshot!(
            ZonedDateTime::of_strict(dt, tz::offset(1), &paris, &provider).unwrap_err(),
            @"datetime `2008-03-30T02:30` does not exist in time zone `Europe/Paris` because it falls in a gap",
        );
    }

    #[test]
    fn arithmetic() {
        let provider = testdata::provider();

        let start = zdt("2008-10-25T12:00+02:00[Europe/Paris]");
        let got = start.plus(Duration::of_hours(24).unwrap(), &provider).unwrap();
        assert_eq!(got, zdt("2008-10-26T11:00+01:00[Europe/Paris]"));
        let got = start.plus_period(Period::days(1), &provider).unwrap();
        assert_eq!(got, zdt("2008-10-26T12:00+01:00[Europe/Paris]"));
        assert_eq!(got.minus_period(Period::days(1), &provider).unwrap(), start);
        assert_eq!(
            got.minus(Duration::of_hours(25).unwrap(), &provider).unwrap(),
            start,
        );
    }

    #[test]
    fn zones() {
        let provider = testdata::provider();
        let start = zdt("2008-06-30T11:30+02:00[Europe/Paris]");
        let kolkata = ZoneId::region("Asia/Kolkata").unwrap();

        let got = start.with_zone_same_instant(&kolkata, &provider).unwrap();
        assert_eq!(got.to_string(), "2008-06-30T15:00+05:30[Asia/Kolkata]");
        assert_eq!(got.to_instant().unwrap(), start.to_instant().unwrap());
        let got = start.with_zone_same_local(&kolkata, &provider).unwrap();
        assert_eq!(got.to_string(), "2008-06-30T11:30+05:30[Asia/Kolkata]");

        let odt = start.to_offset_datetime();
        assert_eq!(odt.to_zoned().to_string(), "2008-06-30T11:30+02:00");
        assert_eq!(OffsetDateTime::from(start.clone()), odt);
    }
}
