use isochron::{
    civil::{date, datetime, time},
    tz::{self, ZoneOffset},
    Duration, Field, OffsetDateTime, Period, Unit,
};

use crate::Result;

/// `(year, month, day, hour, minute, second, nanosecond)` at `+01:00`.
const SAMPLE_TIMES: &[(i32, i8, i8, i8, i8, i8, i32)] = &[
    (2008, 6, 30, 11, 30, 20, 500),
    (2008, 6, 30, 11, 0, 0, 0),
    (2008, 6, 30, 23, 59, 59, 999_999_999),
    (-1, 1, 1, 0, 0, 0, 0),
];

#[test]
fn sample_times() -> Result {
    let offset = tz::offset(1);
    for &(y, mo, d, h, mi, s, n) in SAMPLE_TIMES {
        let odt = OffsetDateTime::new(date(y, mo, d), time(h, mi, s, n), offset);
        assert_eq!(odt.year(), y);
        assert_eq!(odt.month(), mo);
        assert_eq!(odt.day(), d);
        assert_eq!(odt.hour(), h);
        assert_eq!(odt.minute(), mi);
        assert_eq!(odt.second(), s);
        assert_eq!(odt.nanosecond(), n);
        assert_eq!(odt.offset(), offset);
        assert_eq!(odt.get(Field::Year)?, y);
        assert_eq!(odt.get(Field::NanoOfSecond)?, n);
        assert_eq!(odt.get(Field::OffsetSeconds)?, 3_600);

        assert_eq!(odt.with_year(y)?, odt);
        assert_eq!(odt.with_month(mo)?, odt);
        assert_eq!(odt.with_day(d)?, odt);
        assert_eq!(odt.with_hour(h)?, odt);
        assert_eq!(odt.with_minute(mi)?, odt);
        assert_eq!(odt.with_second(s)?, odt);
        assert_eq!(odt.with_nanosecond(n)?, odt);

        let string = odt.to_string();
        assert_eq!(string.parse::<OffsetDateTime>()?, odt, "{string}");

        let instant = odt.to_instant()?;
        assert_eq!(OffsetDateTime::of_instant(instant, offset), odt);
        assert_eq!(instant.epoch_second(), odt.to_epoch_second());
    }
    Ok(())
}

#[test]
fn to_string() -> Result {
    let tests = [
        (2008, 6, 30, 11, 30, 59, 0, "Z", "2008-06-30T11:30:59Z"),
        (2008, 6, 30, 11, 30, 59, 0, "+01:00", "2008-06-30T11:30:59+01:00"),
        (2008, 6, 30, 11, 30, 59, 999_000_000, "Z", "2008-06-30T11:30:59.999Z"),
        (
            2008,
            6,
            30,
            11,
            30,
            59,
            999_000_000,
            "+01:00",
            "2008-06-30T11:30:59.999+01:00",
        ),
        (2008, 6, 30, 11, 30, 59, 999_000, "Z", "2008-06-30T11:30:59.000999Z"),
        (
            2008,
            6,
            30,
            11,
            30,
            59,
            999_000,
            "+01:00",
            "2008-06-30T11:30:59.000999+01:00",
        ),
        (2008, 6, 30, 11, 30, 59, 999, "Z", "2008-06-30T11:30:59.000000999Z"),
        (
            2008,
            6,
            30,
            11,
            30,
            59,
            999,
            "+01:00",
            "2008-06-30T11:30:59.000000999+01:00",
        ),
    ];
    for (y, mo, d, h, mi, s, n, offset, expected) in tests {
        let offset: ZoneOffset = offset.parse()?;
        let odt = datetime(y, mo, d, h, mi, s, n).at_offset(offset);
        assert_eq!(odt.to_string(), expected);
        assert_eq!(expected.parse::<OffsetDateTime>()?, odt);
    }
    Ok(())
}

#[test]
fn parse_invalid() {
    let tests = [
        "2008-06-30T11:30:59",
        "2008-06-30T11:30:59+19:00",
        "2008-06-32T11:30:59+01:00",
        "2008-06-30T24:30:59+01:00",
        "2008-06-30 11:30:59+01:00",
        "2008-06-30T11:30:59+01:00[Europe/Paris]",
    ];
    for input in tests {
        let err = input.parse::<OffsetDateTime>().unwrap_err();
        assert!(err.is_format(), "{input:?} gave {err}");
    }
}

#[test]
fn instant_ordering() -> Result {
    let a = datetime(2008, 6, 30, 11, 30, 0, 0).at_offset(tz::offset(1));
    let b = datetime(2008, 6, 30, 10, 30, 0, 0).at_offset(ZoneOffset::UTC);
    let c = datetime(2008, 6, 30, 11, 30, 0, 1).at_offset(tz::offset(1));

    assert!(a.is_equal(&b));
    assert_ne!(a, b);
    assert!(b < a, "same instant, earlier local time sorts first");
    assert!(a.is_before(&c) && c.is_after(&b));
    assert!(!a.is_before(&b) && !a.is_after(&b));
    assert_eq!(OffsetDateTime::MIN.cmp(&OffsetDateTime::MAX).is_lt(), true);
    Ok(())
}

#[test]
fn arithmetic() -> Result {
    let odt = datetime(2008, 6, 30, 23, 30, 59, 0).at_offset(tz::offset(-5));

    assert_eq!(odt.plus_minutes(30)?.date(), date(2008, 7, 1));
    assert_eq!(odt.plus_period(Period::new(1, 8, 1))?.date(), date(2010, 3, 1));
    assert_eq!(odt.minus_months(4)?.date(), date(2008, 2, 29));
    assert_eq!(
        odt.plus(Duration::of_seconds_and_adjustment(1, 500)?)?.time(),
        time(23, 31, 0, 500),
    );
    assert_eq!(odt.plus_unit(3, Unit::Decade)?.year(), 2038);
    assert_eq!(odt.minus_unit(1, Unit::HalfDay)?.hour(), 11);
    assert!(odt.plus_unit(1, Unit::Forever).unwrap_err().is_unsupported());

    let end = datetime(2009, 6, 30, 23, 30, 58, 0).at_offset(tz::offset(-4));
    assert_eq!(odt.until(&end, Unit::Year)?, 0);
    assert_eq!(odt.until(&end, Unit::Month)?, 11);
    assert_eq!(odt.until(&end, Unit::Hour)?, 365 * 24 - 2);
    Ok(())
}

#[test]
fn strftime_and_strptime() -> Result {
    let odt = datetime(2008, 6, 30, 21, 14, 0, 0).at_offset(tz::offset(-4));
    assert_eq!(
        odt.strftime("%a, %d %b %Y %T %z").to_string(),
        "Mon, 30 Jun 2008 21:14:00 -0400",
    );
    let parsed = OffsetDateTime::strptime(
        "%a, %d %b %Y %T %z",
        "Mon, 30 Jun 2008 21:14:00 -0400",
    )?;
    assert_eq!(parsed, odt);

    let err =
        OffsetDateTime::strptime("%Y-%m-%d %H:%M", "2008-06-30 21:14").unwrap_err();
    assert!(err.is_missing());
    Ok(())
}
