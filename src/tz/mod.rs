/*!
UTC offsets, time zone identifiers and time zone rules.

The central type of this module is [`ZoneOffset`], a fixed offset from UTC.
A [`ZoneId`] identifies a time zone, which is either a fixed offset (like
`+01:00` or `UTC+01:00`) or a named region (like `Europe/Paris`).

This crate does not ship a time zone database. The offsets in effect for a
region are described by [`ZoneRules`], and the rules for a region are looked
up through a [`ZoneRulesProvider`] that the caller supplies. [`RulesMap`]
and [`TransitionRules`] make it straight-forward to build a provider in
memory.

# Example

```
use std::sync::Arc;

use isochron::{
    civil::datetime,
    tz::{self, RulesMap, Transition, TransitionRules, ZoneId},
};

let (cet, cest) = (tz::offset(1), tz::offset(2));
let paris = TransitionRules::new(cet, [
    Transition::new("2008-03-30T01:00Z".parse()?, cet, cest)?,
    Transition::new("2008-10-26T01:00Z".parse()?, cest, cet)?,
])?;
let mut provider = RulesMap::new();
provider.insert("Europe/Paris", Arc::new(paris));

let zone: ZoneId = "Europe/Paris".parse()?;
let odt = datetime(2008, 6, 30, 11, 30, 0, 0).at_offset(cet);
let zdt = odt.at_zone_same_instant(&zone, &provider)?;
assert_eq!(zdt.to_string(), "2008-06-30T12:30+02:00[Europe/Paris]");

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use alloc::sync::Arc;

use crate::{
    error::{tz::Error as E, ErrorContext},
    fmt::{
        temporal::{DEFAULT_DATETIME_PARSER, DEFAULT_DATETIME_PRINTER},
        FmtWrite,
    },
    Error,
};

pub use self::{
    offset::ZoneOffset,
    rules::{
        AmbiguousOffset, FixedRules, RulesMap, Transition, TransitionRules,
        ZoneRules, ZoneRulesProvider,
    },
};

mod offset;
mod rules;
#[cfg(test)]
pub(crate) mod testdata;

/// Creates a new offset from a whole number of hours.
///
/// This is a convenience for `ZoneOffset::constant(hours, 0, 0)`.
///
/// # Panics
///
/// This panics when `hours` is not in `-18..=18`. When called in a const
/// context, the panic is a compile time error.
///
/// # Example
///
/// ```
/// use isochron::tz::{self, ZoneOffset};
///
/// assert_eq!(tz::offset(-5), ZoneOffset::of_hours(-5)?);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[inline]
pub const fn offset(hours: i8) -> ZoneOffset {
    ZoneOffset::constant(hours, 0, 0)
}

/// An identifier for a time zone.
///
/// A zone ID is one of:
///
/// * A fixed offset, like `Z` or `+01:00`.
/// * A fixed offset with a `UTC`, `GMT` or `UT` prefix, like `UTC+01:00` or
/// just `GMT`.
/// * A region name, like `Europe/Paris`. A region name starts with an ASCII
/// letter and otherwise contains ASCII letters, digits and `~/._+-`.
///
/// Region names are not validated against any database when parsed. Looking
/// up the [`ZoneRules`] for a region requires a [`ZoneRulesProvider`].
///
/// # Example
///
/// ```
/// use isochron::tz::{self, Prefix, ZoneId};
///
/// let zone: ZoneId = "UTC+01:00".parse()?;
/// assert_eq!(zone, ZoneId::prefixed(Prefix::Utc, tz::offset(1)));
/// assert_eq!(zone.to_fixed_offset(), Some(tz::offset(1)));
///
/// let zone: ZoneId = "Europe/Paris".parse()?;
/// assert_eq!(zone.region_name(), Some("Europe/Paris"));
/// assert_eq!(zone.to_fixed_offset(), None);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct ZoneId {
    repr: ZoneIdRepr,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub(crate) enum ZoneIdRepr {
    Fixed(ZoneOffset),
    Prefixed { prefix: Prefix, offset: ZoneOffset },
    Region(Arc<str>),
}

/// The prefix of a zone ID like `UTC+01:00`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Prefix {
    /// `UTC`
    Utc,
    /// `GMT`
    Gmt,
    /// `UT`
    Ut,
}

impl Prefix {
    /// Returns this prefix as it's written in a zone ID.
    pub fn as_str(self) -> &'static str {
        match self {
            Prefix::Utc => "UTC",
            Prefix::Gmt => "GMT",
            Prefix::Ut => "UT",
        }
    }
}

impl ZoneId {
    /// Returns a zone ID for the given fixed offset.
    #[inline]
    pub fn fixed(offset: ZoneOffset) -> ZoneId {
        ZoneId::from_repr(ZoneIdRepr::Fixed(offset))
    }

    /// Returns a zone ID for a fixed offset written with a prefix.
    #[inline]
    pub fn prefixed(prefix: Prefix, offset: ZoneOffset) -> ZoneId {
        ZoneId::from_repr(ZoneIdRepr::Prefixed { prefix, offset })
    }

    /// Returns a zone ID for the given region name.
    ///
    /// # Errors
    ///
    /// This returns an error when the name is not a syntactically valid
    /// region name.
    ///
    /// # Example
    ///
    /// ```
    /// use isochron::tz::ZoneId;
    ///
    /// assert!(ZoneId::region("America/New_York").is_ok());
    /// assert!(ZoneId::region("+01:00").is_err());
    /// assert!(ZoneId::region("Europe/Paris!").is_err());
    /// ```
    pub fn region(name: &str) -> Result<ZoneId, Error> {
        DEFAULT_DATETIME_PARSER.parse_region(name.as_bytes())
    }

    /// Returns the region name, if this is a region.
    #[inline]
    pub fn region_name(&self) -> Option<&str> {
        match self.repr {
            ZoneIdRepr::Region(ref name) => Some(name),
            _ => None,
        }
    }

    /// Returns the fixed offset of this zone ID, if it has one.
    #[inline]
    pub fn to_fixed_offset(&self) -> Option<ZoneOffset> {
        match self.repr {
            ZoneIdRepr::Fixed(offset) => Some(offset),
            ZoneIdRepr::Prefixed { offset, .. } => Some(offset),
            ZoneIdRepr::Region(_) => None,
        }
    }

    /// Returns the rules for this zone.
    ///
    /// Fixed offsets never consult the provider.
    ///
    /// # Errors
    ///
    /// This returns an error when the provider fails to find the rules for
    /// a region.
    pub fn rules(
        &self,
        provider: &dyn ZoneRulesProvider,
    ) -> Result<Arc<dyn ZoneRules>, Error> {
        match self.repr {
            ZoneIdRepr::Fixed(offset)
            | ZoneIdRepr::Prefixed { offset, .. } => {
                Ok(Arc::new(FixedRules(offset)))
            }
            ZoneIdRepr::Region(ref name) => {
                trace!("looking up rules for time zone region {name:?}");
                provider
                    .rules(name)
                    .with_context(|| E::FailedRules { zone: name[..].into() })
            }
        }
    }

    #[inline]
    pub(crate) fn from_repr(repr: ZoneIdRepr) -> ZoneId {
        ZoneId { repr }
    }

    #[inline]
    pub(crate) fn repr(&self) -> &ZoneIdRepr {
        &self.repr
    }
}

impl From<ZoneOffset> for ZoneId {
    #[inline]
    fn from(offset: ZoneOffset) -> ZoneId {
        ZoneId::fixed(offset)
    }
}

impl core::fmt::Debug for ZoneId {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_DATETIME_PRINTER
            .print_zone_id(self, FmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl core::str::FromStr for ZoneId {
    type Err = Error;

    fn from_str(string: &str) -> Result<ZoneId, Error> {
        DEFAULT_DATETIME_PARSER.parse_zone_id(string.as_bytes())
    }
}

crate::fmt::serde::impl_serde_str!(ZoneId, "a time zone identifier");

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display() {
        assert_eq!(ZoneId::fixed(ZoneOffset::UTC).to_string(), "Z");
        assert_eq!(ZoneId::fixed(offset(-5)).to_string(), "-05:00");
        assert_eq!(ZoneId::prefixed(Prefix::Utc, ZoneOffset::UTC).to_string(), "UTC");
        assert_eq!(ZoneId::prefixed(Prefix::Gmt, offset(1)).to_string(), "GMT+01:00");
        assert_eq!(ZoneId::region("Europe/Paris").unwrap().to_string(), "Europe/Paris");
    }

    #[test]
    fn rules() {
        let provider = testdata::provider();
        let zone = ZoneId::fixed(offset(3));
        assert!(zone.rules(&provider).unwrap().is_fixed_offset());

        let zone = ZoneId::region("Asia/Kolkata").unwrap();
        let rules = zone.rules(&provider).unwrap();
        assert_eq!(rules.offset_at(crate::Instant::EPOCH), ZoneOffset::constant(5, 30, 0));

        let zone = ZoneId::region("Europe/London").unwrap();
        insta::assert_snapshot!(
            zone.rules(&provider).unwrap_err(),
            @"failed to find rules for time zone `Europe/London`: time zone region `Europe/London` is unknown to the rules provider",
        );
    }

    #[test]
    fn region_errors() {
        insta::assert_snapshot!(
            ZoneId::region("E").unwrap_err(),
            @r#"failed to parse zone region from "E" at position 0: time zone region name must be at least two bytes long and start with an ASCII letter"#,
        );
    }
}
