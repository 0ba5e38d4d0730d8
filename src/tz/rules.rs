use alloc::{
    boxed::Box,
    collections::BTreeMap,
    string::String,
    sync::Arc,
    vec,
    vec::Vec,
};

use crate::{
    civil::LocalDateTime, error::tz::Error as E, tz::ZoneOffset, Duration,
    Error, Instant,
};

/// The rules for how the offset from UTC varies in a time zone.
///
/// Implementations answer two questions. Given an instant, what is the
/// offset? And given a local datetime, which offsets are valid for it? The
/// second question may have zero answers (in a gap) or two answers (in a
/// fold).
///
/// This crate only provides rules for fixed offsets ([`FixedRules`]) and for
/// an explicit list of transitions ([`TransitionRules`]). Rules for named
/// regions, like `Europe/Paris`, are supplied by the caller via a
/// [`ZoneRulesProvider`].
pub trait ZoneRules: core::fmt::Debug + Send + Sync {
    /// Returns the offset in effect at the given instant.
    fn offset_at(&self, instant: Instant) -> ZoneOffset;

    /// Returns the offsets that are valid for the given local datetime.
    fn to_ambiguous_offset(&self, dt: LocalDateTime) -> AmbiguousOffset;

    /// Returns true if these rules always use the same offset.
    fn is_fixed_offset(&self) -> bool {
        false
    }

    /// Returns every offset that is valid for the given local datetime.
    ///
    /// This is empty in a gap, has one offset for an unambiguous datetime
    /// and two offsets in a fold.
    fn valid_offsets(&self, dt: LocalDateTime) -> Vec<ZoneOffset> {
        match self.to_ambiguous_offset(dt) {
            AmbiguousOffset::Unambiguous { offset } => vec![offset],
            AmbiguousOffset::Gap { .. } => vec![],
            AmbiguousOffset::Fold { before, after } => vec![before, after],
        }
    }
}

/// A source of rules for named time zone regions.
///
/// Nothing in this crate reads a time zone database. Callers that need
/// regions supply an implementation of this trait. A [`RulesMap`] is a
/// simple in-memory provider.
pub trait ZoneRulesProvider: core::fmt::Debug + Send + Sync {
    /// Returns the rules for the region with the given name, such as
    /// `Europe/Paris`.
    ///
    /// # Errors
    ///
    /// This should return an error when the region is unknown.
    fn rules(&self, region: &str) -> Result<Arc<dyn ZoneRules>, Error>;
}

/// The possible offsets for a local datetime in some time zone.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AmbiguousOffset {
    /// The offset for the local datetime is unambiguous.
    ///
    /// This is the overwhelmingly common case. It doesn't hold only around
    /// a transition, typically to or from daylight saving time.
    Unambiguous {
        /// The only valid offset.
        offset: ZoneOffset,
    },
    /// The local datetime was skipped by a transition, usually when clocks
    /// move forward in spring.
    Gap {
        /// The offset in effect before the gap.
        before: ZoneOffset,
        /// The offset in effect after the gap.
        after: ZoneOffset,
    },
    /// The local datetime occurs twice, usually when clocks move back in
    /// autumn.
    Fold {
        /// The offset of the first occurrence.
        before: ZoneOffset,
        /// The offset of the second occurrence.
        after: ZoneOffset,
    },
}

impl AmbiguousOffset {
    /// Returns true for a gap or a fold.
    #[inline]
    pub fn is_ambiguous(&self) -> bool {
        !matches!(*self, AmbiguousOffset::Unambiguous { .. })
    }
}

/// A change of offset at a particular instant.
///
/// # Example
///
/// ```
/// use isochron::{civil::datetime, tz::{self, Transition}, Instant};
///
/// let instant: Instant = "2008-03-30T01:00Z".parse()?;
/// let t = Transition::new(instant, tz::offset(1), tz::offset(2))?;
/// assert!(t.is_gap());
/// assert_eq!(t.local_before(), datetime(2008, 3, 30, 2, 0, 0, 0));
/// assert_eq!(t.local_after(), datetime(2008, 3, 30, 3, 0, 0, 0));
/// assert_eq!(t.duration().to_string(), "PT1H");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Transition {
    instant: Instant,
    before: ZoneOffset,
    after: ZoneOffset,
}

impl Transition {
    /// Creates a transition from `before` to `after` at the given instant.
    ///
    /// # Errors
    ///
    /// This returns an error when `before` and `after` are equal.
    pub fn new(
        instant: Instant,
        before: ZoneOffset,
        after: ZoneOffset,
    ) -> Result<Transition, Error> {
        if before == after {
            return Err(Error::from(E::TransitionSameOffset { offset: before }));
        }
        Ok(Transition { instant, before, after })
    }

    /// Returns the instant at which the offset changes.
    #[inline]
    pub fn instant(&self) -> Instant {
        self.instant
    }

    /// Returns the offset in effect before this transition.
    #[inline]
    pub fn offset_before(&self) -> ZoneOffset {
        self.before
    }

    /// Returns the offset in effect from this transition onwards.
    #[inline]
    pub fn offset_after(&self) -> ZoneOffset {
        self.after
    }

    /// Returns the local datetime of the transition at the offset before it.
    #[inline]
    pub fn local_before(&self) -> LocalDateTime {
        self.instant.to_datetime_with_offset(self.before)
    }

    /// Returns the local datetime of the transition at the offset after it.
    #[inline]
    pub fn local_after(&self) -> LocalDateTime {
        self.instant.to_datetime_with_offset(self.after)
    }

    /// Returns true when clocks move forward, skipping local times.
    #[inline]
    pub fn is_gap(&self) -> bool {
        self.after.total_seconds() > self.before.total_seconds()
    }

    /// Returns true when clocks move back, repeating local times.
    #[inline]
    pub fn is_fold(&self) -> bool {
        !self.is_gap()
    }

    /// Returns the change in offset. This is negative for a fold.
    #[inline]
    pub fn duration(&self) -> Duration {
        let diff = self.after.total_seconds() - self.before.total_seconds();
        Duration::of_seconds(i64::from(diff))
    }
}

/// Rules that always use the same offset.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FixedRules(pub ZoneOffset);

impl ZoneRules for FixedRules {
    fn offset_at(&self, _instant: Instant) -> ZoneOffset {
        self.0
    }

    fn to_ambiguous_offset(&self, _dt: LocalDateTime) -> AmbiguousOffset {
        AmbiguousOffset::Unambiguous { offset: self.0 }
    }

    fn is_fixed_offset(&self) -> bool {
        true
    }
}

/// Rules made from an initial offset and a list of transitions.
///
/// # Example
///
/// This builds the rules for Paris in 2008:
///
/// ```
/// use isochron::{
///     civil::datetime,
///     tz::{self, AmbiguousOffset, Transition, TransitionRules, ZoneRules},
/// };
///
/// let (cet, cest) = (tz::offset(1), tz::offset(2));
/// let rules = TransitionRules::new(cet, [
///     Transition::new("2008-03-30T01:00Z".parse()?, cet, cest)?,
///     Transition::new("2008-10-26T01:00Z".parse()?, cest, cet)?,
/// ])?;
///
/// let dt = datetime(2008, 3, 30, 2, 30, 0, 0);
/// assert_eq!(
///     rules.to_ambiguous_offset(dt),
///     AmbiguousOffset::Gap { before: cet, after: cest },
/// );
/// assert_eq!(rules.offset_at("2008-06-30T00:00Z".parse()?), cest);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransitionRules {
    initial: ZoneOffset,
    transitions: Box<[Transition]>,
}

impl TransitionRules {
    /// Creates rules that use `initial` before the first transition.
    ///
    /// # Errors
    ///
    /// This returns an error when the transitions are not in strictly
    /// increasing order, or when the offset before a transition isn't the
    /// offset after the previous one (or `initial`, for the first).
    pub fn new(
        initial: ZoneOffset,
        transitions: impl IntoIterator<Item = Transition>,
    ) -> Result<TransitionRules, Error> {
        let transitions: Box<[Transition]> =
            transitions.into_iter().collect();
        let mut expected = initial;
        for (i, t) in transitions.iter().enumerate() {
            if i > 0 && transitions[i - 1].instant >= t.instant {
                return Err(Error::from(E::TransitionOrder));
            }
            if t.before != expected {
                return Err(Error::from(E::TransitionUnchained {
                    expected,
                    found: t.before,
                }));
            }
            expected = t.after;
        }
        Ok(TransitionRules { initial, transitions })
    }

    /// Returns the transitions in order.
    #[inline]
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Returns the first transition strictly after the given instant.
    pub fn next_transition(&self, instant: Instant) -> Option<Transition> {
        let i = self.transitions.partition_point(|t| t.instant <= instant);
        self.transitions.get(i).copied()
    }
}

impl ZoneRules for TransitionRules {
    fn offset_at(&self, instant: Instant) -> ZoneOffset {
        let i = self.transitions.partition_point(|t| t.instant <= instant);
        match i.checked_sub(1) {
            None => self.initial,
            Some(i) => self.transitions[i].after,
        }
    }

    fn to_ambiguous_offset(&self, dt: LocalDateTime) -> AmbiguousOffset {
        let mut offset = self.initial;
        for t in self.transitions.iter() {
            let (before, after) = (t.local_before(), t.local_after());
            if t.is_gap() {
                if dt < before {
                    break;
                }
                if dt < after {
                    return AmbiguousOffset::Gap {
                        before: t.before,
                        after: t.after,
                    };
                }
            } else {
                if dt < after {
                    break;
                }
                if dt < before {
                    return AmbiguousOffset::Fold {
                        before: t.before,
                        after: t.after,
                    };
                }
            }
            offset = t.after;
        }
        AmbiguousOffset::Unambiguous { offset }
    }

    fn is_fixed_offset(&self) -> bool {
        self.transitions.is_empty()
    }
}

/// An in-memory [`ZoneRulesProvider`] that maps region names to rules.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use isochron::tz::{self, FixedRules, RulesMap, ZoneRulesProvider};
///
/// let mut map = RulesMap::new();
/// map.insert("Asia/Kolkata", Arc::new(FixedRules(tz::ZoneOffset::constant(5, 30, 0))));
/// assert!(map.rules("Asia/Kolkata")?.is_fixed_offset());
/// assert!(map.rules("Europe/Paris").is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct RulesMap {
    regions: BTreeMap<String, Arc<dyn ZoneRules>>,
}

impl RulesMap {
    /// Creates an empty map.
    pub fn new() -> RulesMap {
        RulesMap::default()
    }

    /// Adds or replaces the rules for a region.
    pub fn insert(&mut self, region: &str, rules: Arc<dyn ZoneRules>) {
        self.regions.insert(String::from(region), rules);
    }
}

impl ZoneRulesProvider for RulesMap {
    fn rules(&self, region: &str) -> Result<Arc<dyn ZoneRules>, Error> {
        match self.regions.get(region) {
            Some(rules) => Ok(Arc::clone(rules)),
            None => Err(Error::from(E::UnknownRegion { name: region.into() })),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{civil::datetime, tz};

    use super::*;

    fn instant(s: &str) -> Instant {
        s.parse().unwrap()
    }

    #[test]
    fn transition_rules() {
        let rules = tz::testdata::paris_2008();
        let (cet, cest) = (tz::offset(1), tz::offset(2));
        assert_eq!(rules.offset_at(instant("2008-01-01T00:00Z")), cet);
        assert_eq!(rules.offset_at(instant("2008-03-30T00:59:59Z")), cet);
        assert_eq!(rules.offset_at(instant("2008-03-30T01:00Z")), cest);
        assert_eq!(rules.offset_at(instant("2008-10-26T00:59:59Z")), cest);
        assert_eq!(rules.offset_at(instant("2008-10-26T01:00Z")), cet);

        let unambiguous = |offset| AmbiguousOffset::Unambiguous { offset };
        let ambiguous = |dt| rules.to_ambiguous_offset(dt);
        assert_eq!(ambiguous(datetime(2008, 3, 30, 1, 59, 59, 0)), unambiguous(cet));
        assert_eq!(
            ambiguous(datetime(2008, 3, 30, 2, 0, 0, 0)),
            AmbiguousOffset::Gap { before: cet, after: cest },
        );
        assert_eq!(ambiguous(datetime(2008, 3, 30, 3, 0, 0, 0)), unambiguous(cest));
        assert_eq!(ambiguous(datetime(2008, 10, 26, 1, 59, 59, 0)), unambiguous(cest));
        assert_eq!(
            ambiguous(datetime(2008, 10, 26, 2, 30, 0, 0)),
            AmbiguousOffset::Fold { before: cest, after: cet },
        );
        assert_eq!(ambiguous(datetime(2008, 10, 26, 3, 0, 0, 0)), unambiguous(cet));

        assert_eq!(rules.valid_offsets(datetime(2008, 3, 30, 2, 30, 0, 0)), vec![]);
        assert_eq!(
            rules.valid_offsets(datetime(2008, 10, 26, 2, 30, 0, 0)),
            vec![cest, cet],
        );
        assert!(!rules.is_fixed_offset());

        let next = rules.next_transition(instant("2008-03-30T01:00Z")).unwrap();
        assert_eq!(next.instant(), instant("2008-10-26T01:00Z"));
        assert!(next.is_fold());
        assert_eq!(next.duration(), Duration::of_seconds(-3_600));
    }

    #[test]
    fn invalid_transitions() {
        let (cet, cest) = (tz::offset(1), tz::offset(2));
        insta::assert_snapshot!(
            Transition::new(Instant::EPOCH, cet, cet).unwrap_err(),
            @"a transition must change the offset, but both sides of it are `+01:00`",
        );
        let t = Transition::new(Instant::EPOCH, cest, cet).unwrap();
        insta::assert_snapshot!(
            TransitionRules::new(cet, [t]).unwrap_err(),
            @"offset before a transition must be `+01:00` (the offset in effect before it), but found `+02:00`",
        );
        let t1 = Transition::new(Instant::EPOCH, cet, cest).unwrap();
        let t2 = Transition::new(Instant::EPOCH, cest, cet).unwrap();
        insta::assert_snapshot!(
            TransitionRules::new(cet, [t1, t2]).unwrap_err(),
            @"transitions must be in strictly increasing order of their instants",
        );
    }

    #[test]
    fn rules_map() {
        let provider = tz::testdata::provider();
        assert!(provider.rules("Europe/Paris").is_ok());
        let err = provider.rules("Mars/Olympus_Mons").unwrap_err();
        assert!(!err.is_unsupported());
        insta::assert_snapshot!(
            err,
            @"time zone region `Mars/Olympus_Mons` is unknown to the rules provider",
        );
    }
}
