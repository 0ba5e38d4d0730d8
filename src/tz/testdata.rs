use alloc::sync::Arc;

use crate::tz::{self, RulesMap, Transition, TransitionRules};

/// Rules for `Europe/Paris` in 2008.
///
/// Summer time started at `2008-03-30T01:00Z` and ended at
/// `2008-10-26T01:00Z`. There are no other transitions, so the offset is
/// `+01:00` for every instant outside of that range.
pub(crate) fn paris_2008() -> TransitionRules {
    let (cet, cest) = (tz::offset(1), tz::offset(2));
    let transitions = [
        ("2008-03-30T01:00Z", cet, cest),
        ("2008-10-26T01:00Z", cest, cet),
    ]
    .map(|(instant, before, after)| {
        Transition::new(instant.parse().unwrap(), before, after).unwrap()
    });
    TransitionRules::new(cet, transitions).unwrap()
}

/// A provider that knows about `Europe/Paris` (as in 2008) and
/// `Asia/Kolkata`.
pub(crate) fn provider() -> RulesMap {
    let mut map = RulesMap::new();
    map.insert("Europe/Paris", Arc::new(paris_2008()));
    map.insert(
        "Asia/Kolkata",
        Arc::new(tz::FixedRules(tz::ZoneOffset::constant(5, 30, 0))),
    );
    map
}
