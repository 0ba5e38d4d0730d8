use isochron::{civil::date, Period};

use crate::Result;

/// `(y1, m1, d1, y2, m2, d2, years, months, days)`
const BETWEEN: &[(i32, i8, i8, i32, i8, i8, i32, i32, i32)] = &[
    (2010, 1, 1, 2010, 1, 1, 0, 0, 0),
    (2010, 1, 1, 2010, 1, 2, 0, 0, 1),
    (2010, 1, 1, 2010, 1, 31, 0, 0, 30),
    (2010, 1, 1, 2010, 2, 1, 0, 1, 0),
    (2010, 1, 1, 2010, 2, 28, 0, 1, 27),
    (2010, 1, 1, 2010, 3, 1, 0, 2, 0),
    (2010, 1, 1, 2010, 12, 31, 0, 11, 30),
    (2010, 1, 1, 2011, 1, 1, 1, 0, 0),
    (2010, 1, 1, 2011, 12, 31, 1, 11, 30),
    (2010, 1, 1, 2012, 1, 1, 2, 0, 0),
    (2010, 1, 10, 2010, 1, 1, 0, 0, -9),
    (2010, 1, 10, 2010, 1, 2, 0, 0, -8),
    (2010, 1, 10, 2010, 1, 9, 0, 0, -1),
    (2010, 1, 10, 2010, 1, 10, 0, 0, 0),
    (2010, 1, 10, 2010, 1, 11, 0, 0, 1),
    (2010, 1, 10, 2010, 1, 31, 0, 0, 21),
    (2010, 1, 10, 2010, 2, 1, 0, 0, 22),
    (2010, 1, 10, 2010, 2, 9, 0, 0, 30),
    (2010, 1, 10, 2010, 2, 10, 0, 1, 0),
    (2010, 1, 10, 2010, 2, 28, 0, 1, 18),
    (2010, 1, 10, 2010, 3, 1, 0, 1, 19),
    (2010, 1, 10, 2010, 3, 9, 0, 1, 27),
    (2010, 1, 10, 2010, 3, 10, 0, 2, 0),
    (2010, 1, 10, 2010, 12, 31, 0, 11, 21),
    (2010, 1, 10, 2011, 1, 1, 0, 11, 22),
    (2010, 1, 10, 2011, 1, 9, 0, 11, 30),
    (2010, 1, 10, 2011, 1, 10, 1, 0, 0),
    (2010, 3, 30, 2011, 5, 1, 1, 1, 1),
    (2010, 4, 30, 2011, 5, 1, 1, 0, 1),
    (2010, 2, 28, 2012, 2, 27, 1, 11, 30),
    (2010, 2, 28, 2012, 2, 28, 2, 0, 0),
    (2010, 2, 28, 2012, 2, 29, 2, 0, 1),
    (2012, 2, 28, 2014, 2, 27, 1, 11, 30),
    (2012, 2, 28, 2014, 2, 28, 2, 0, 0),
    (2012, 2, 28, 2014, 3, 1, 2, 0, 1),
    (2012, 2, 29, 2014, 2, 28, 1, 11, 30),
    (2012, 2, 29, 2014, 3, 1, 2, 0, 1),
    (2012, 2, 29, 2014, 3, 2, 2, 0, 2),
    (2012, 2, 29, 2016, 2, 28, 3, 11, 30),
    (2012, 2, 29, 2016, 2, 29, 4, 0, 0),
    (2012, 2, 29, 2016, 3, 1, 4, 0, 1),
    (2010, 1, 1, 2009, 12, 31, 0, 0, -1),
    (2010, 1, 1, 2009, 12, 30, 0, 0, -2),
    (2010, 1, 1, 2009, 12, 2, 0, 0, -30),
    (2010, 1, 1, 2009, 12, 1, 0, -1, 0),
    (2010, 1, 1, 2009, 11, 30, 0, -1, -1),
    (2010, 1, 1, 2009, 11, 2, 0, -1, -29),
    (2010, 1, 1, 2009, 11, 1, 0, -2, 0),
    (2010, 1, 1, 2009, 1, 2, 0, -11, -30),
    (2010, 1, 1, 2009, 1, 1, -1, 0, 0),
    (2010, 1, 15, 2010, 1, 15, 0, 0, 0),
    (2010, 1, 15, 2010, 1, 14, 0, 0, -1),
    (2010, 1, 15, 2010, 1, 1, 0, 0, -14),
    (2010, 1, 15, 2009, 12, 31, 0, 0, -15),
    (2010, 1, 15, 2009, 12, 16, 0, 0, -30),
    (2010, 1, 15, 2009, 12, 15, 0, -1, 0),
    (2010, 1, 15, 2009, 12, 14, 0, -1, -1),
    (2010, 2, 28, 2009, 3, 1, 0, -11, -27),
    (2010, 2, 28, 2009, 2, 28, -1, 0, 0),
    (2010, 2, 28, 2009, 2, 27, -1, 0, -1),
    (2010, 2, 28, 2008, 2, 29, -1, -11, -28),
    (2010, 2, 28, 2008, 2, 28, -2, 0, 0),
    (2010, 2, 28, 2008, 2, 27, -2, 0, -1),
    (2012, 2, 29, 2009, 3, 1, -2, -11, -28),
    (2012, 2, 29, 2009, 2, 28, -3, 0, -1),
    (2012, 2, 29, 2009, 2, 27, -3, 0, -2),
    (2012, 2, 29, 2008, 3, 1, -3, -11, -28),
    (2012, 2, 29, 2008, 2, 29, -4, 0, 0),
    (2012, 2, 29, 2008, 2, 28, -4, 0, -1),
];

#[test]
fn between() -> Result {
    for &(y1, m1, d1, y2, m2, d2, years, months, days) in BETWEEN {
        let (start, end) = (date(y1, m1, d1), date(y2, m2, d2));
        let period = Period::between(start, end);
        assert_eq!(
            period,
            Period::new(years, months, days),
            "between {start} and {end}",
        );
        assert_eq!(start.until_period(end), period);
    }
    Ok(())
}

#[test]
fn parse() -> Result {
    let tests: &[(&str, Period)] = &[
        ("P0D", Period::ZERO),
        ("P0W", Period::ZERO),
        ("P0M", Period::ZERO),
        ("P0Y", Period::ZERO),
        ("P0Y0D", Period::ZERO),
        ("P0Y0W", Period::ZERO),
        ("P0Y0M", Period::ZERO),
        ("P0M0D", Period::ZERO),
        ("P0M0W", Period::ZERO),
        ("P0W0D", Period::ZERO),
        ("P1D", Period::days(1)),
        ("P2D", Period::days(2)),
        ("P-2D", Period::days(-2)),
        ("-P2D", Period::days(-2)),
        ("-P-2D", Period::days(2)),
        ("P2147483647D", Period::days(i32::MAX)),
        ("P-2147483648D", Period::days(i32::MIN)),
        ("P1W", Period::days(7)),
        ("P2W", Period::days(14)),
        ("P-2W", Period::days(-14)),
        ("-P2W", Period::days(-14)),
        ("-P-2W", Period::days(14)),
        ("P1M", Period::months(1)),
        ("P-2M", Period::months(-2)),
        ("-P-2M", Period::months(2)),
        ("P2147483647M", Period::months(i32::MAX)),
        ("P-2147483648M", Period::months(i32::MIN)),
        ("P1Y", Period::years(1)),
        ("-P2Y", Period::years(-2)),
        ("P2147483647Y", Period::years(i32::MAX)),
        ("P-2147483648Y", Period::years(i32::MIN)),
        ("P1Y2M3W4D", Period::new(1, 2, 3 * 7 + 4)),
        ("p1y2m3d", Period::new(1, 2, 3)),
        ("+P1Y", Period::years(1)),
    ];
    for &(input, expected) in tests {
        assert_eq!(input.parse::<Period>()?, expected, "parsing {input:?}");
    }
    Ok(())
}

#[test]
fn parse_invalid() {
    let tests = [
        "",
        "PTD",
        "AT0D",
        "PA0D",
        "PT0D",
        "PXS",
        "P1Y2Y",
        "PD",
        "P1",
        "P1W2M",
        "P2147483648D",
        "P-2147483649D",
        "P1D ",
        "-P-2147483648D",
        "P306783379W",
    ];
    for input in tests {
        let err = input.parse::<Period>().unwrap_err();
        assert!(err.is_format(), "{input:?} gave {err}");
    }
}

#[test]
fn to_string_and_parse() -> Result {
    let tests = [
        (Period::ZERO, "P0D"),
        (Period::days(0), "P0D"),
        (Period::years(1), "P1Y"),
        (Period::months(1), "P1M"),
        (Period::days(1), "P1D"),
        (Period::new(1, 2, 3), "P1Y2M3D"),
        (Period::new(-1, 0, -3), "P-1Y-3D"),
    ];
    for (period, expected) in tests {
        assert_eq!(period.to_string(), expected);
        assert_eq!(expected.parse::<Period>()?, period);
    }
    Ok(())
}

#[test]
fn plus_and_minus() -> Result {
    let p = Period::new;
    let tests = [
        (p(0, 0, 0), p(0, 0, 0), p(0, 0, 0)),
        (p(0, 0, 0), p(5, 0, 0), p(5, 0, 0)),
        (p(0, 0, 0), p(-5, 0, 0), p(-5, 0, 0)),
        (p(0, 0, 0), p(0, 5, 0), p(0, 5, 0)),
        (p(0, 0, 0), p(0, -5, 0), p(0, -5, 0)),
        (p(0, 0, 0), p(0, 0, 5), p(0, 0, 5)),
        (p(0, 0, 0), p(0, 0, -5), p(0, 0, -5)),
        (p(0, 0, 0), p(2, 3, 4), p(2, 3, 4)),
        (p(0, 0, 0), p(-2, -3, -4), p(-2, -3, -4)),
        (p(4, 5, 6), p(2, 3, 4), p(6, 8, 10)),
        (p(4, 5, 6), p(-2, -3, -4), p(2, 2, 2)),
    ];
    for (base, add, expected) in tests {
        assert_eq!(base.plus(add)?, expected);
        assert_eq!(expected.minus(add)?, base);
    }

    assert!(Period::years(i32::MAX).plus_years(1).unwrap_err().is_overflow());
    assert!(Period::days(i32::MIN).minus_days(1).unwrap_err().is_overflow());
    Ok(())
}

#[test]
fn normalized() -> Result {
    let tests: &[(i32, i32, i32, i32)] = &[
        (0, 0, 0, 0),
        (1, 0, 1, 0),
        (-1, 0, -1, 0),
        (1, 1, 1, 1),
        (1, 2, 1, 2),
        (1, 11, 1, 11),
        (1, 12, 2, 0),
        (1, 13, 2, 1),
        (1, 23, 2, 11),
        (1, 24, 3, 0),
        (1, 25, 3, 1),
        (1, -1, 0, 11),
        (1, -2, 0, 10),
        (1, -11, 0, 1),
        (1, -12, 0, 0),
        (1, -13, 0, -1),
        (1, -23, 0, -11),
        (1, -24, -1, 0),
        (1, -25, -1, -1),
        (1, -35, -1, -11),
        (1, -36, -2, 0),
        (1, -37, -2, -1),
        (-1, 1, 0, -11),
        (-1, 11, 0, -1),
        (-1, 12, 0, 0),
        (-1, 13, 0, 1),
        (-1, 23, 0, 11),
        (-1, 24, 1, 0),
        (-1, 25, 1, 1),
        (-1, -1, -1, -1),
        (-1, -11, -1, -11),
        (-1, -12, -2, 0),
        (-1, -13, -2, -1),
    ];
    for &(years, months, expected_years, expected_months) in tests {
        let normalized = Period::new(years, months, 0).normalized()?;
        assert_eq!(
            normalized,
            Period::new(expected_years, expected_months, 0),
            "normalizing {years} years and {months} months",
        );
    }
    Ok(())
}

#[test]
fn add_to() -> Result {
    let p = Period::new;
    let tests = [
        (p(0, 0, 0), date(2012, 6, 30), date(2012, 6, 30)),
        (p(1, 0, 0), date(2012, 6, 10), date(2013, 6, 10)),
        (p(0, 1, 0), date(2012, 6, 10), date(2012, 7, 10)),
        (p(0, 0, 1), date(2012, 6, 10), date(2012, 6, 11)),
        (p(-1, 0, 0), date(2012, 6, 10), date(2011, 6, 10)),
        (p(0, -1, 0), date(2012, 6, 10), date(2012, 5, 10)),
        (p(0, 0, -1), date(2012, 6, 10), date(2012, 6, 9)),
        (p(1, 2, 3), date(2012, 6, 27), date(2013, 8, 30)),
        (p(1, 2, 3), date(2012, 6, 28), date(2013, 8, 31)),
        (p(1, 2, 3), date(2012, 6, 29), date(2013, 9, 1)),
        (p(1, 2, 3), date(2012, 6, 30), date(2013, 9, 2)),
        (p(1, 2, 3), date(2012, 7, 1), date(2013, 9, 4)),
        (p(1, 0, 0), date(2011, 2, 28), date(2012, 2, 28)),
        (p(4, 0, 0), date(2011, 2, 28), date(2015, 2, 28)),
        (p(1, 0, 0), date(2012, 2, 29), date(2013, 2, 28)),
        (p(4, 0, 0), date(2012, 2, 29), date(2016, 2, 29)),
        (p(1, 1, 0), date(2011, 1, 29), date(2012, 2, 29)),
        (p(1, 2, 0), date(2012, 2, 29), date(2013, 4, 29)),
    ];
    for (period, base, expected) in tests {
        assert_eq!(period.add_to(base)?, expected, "{period} added to {base}");
        assert_eq!(base.plus_period(period)?, expected);
    }
    Ok(())
}

#[test]
fn subtract_from() -> Result {
    let p = Period::new;
    let tests = [
        (p(0, 0, 0), date(2012, 6, 30), date(2012, 6, 30)),
        (p(1, 0, 0), date(2012, 6, 10), date(2011, 6, 10)),
        (p(0, 1, 0), date(2012, 6, 10), date(2012, 5, 10)),
        (p(0, 0, 1), date(2012, 6, 10), date(2012, 6, 9)),
        (p(-1, 0, 0), date(2012, 6, 10), date(2013, 6, 10)),
        (p(0, -1, 0), date(2012, 6, 10), date(2012, 7, 10)),
        (p(0, 0, -1), date(2012, 6, 10), date(2012, 6, 11)),
        (p(1, 2, 3), date(2012, 8, 30), date(2011, 6, 27)),
        (p(1, 2, 3), date(2012, 8, 31), date(2011, 6, 27)),
        (p(1, 2, 3), date(2012, 9, 1), date(2011, 6, 28)),
        (p(1, 2, 3), date(2012, 9, 2), date(2011, 6, 29)),
        (p(1, 2, 3), date(2012, 9, 3), date(2011, 6, 30)),
        (p(1, 2, 3), date(2012, 9, 4), date(2011, 7, 1)),
        (p(1, 0, 0), date(2011, 2, 28), date(2010, 2, 28)),
        (p(4, 0, 0), date(2011, 2, 28), date(2007, 2, 28)),
        (p(1, 0, 0), date(2012, 2, 29), date(2011, 2, 28)),
        (p(4, 0, 0), date(2012, 2, 29), date(2008, 2, 29)),
        (p(1, 1, 0), date(2013, 3, 29), date(2012, 2, 29)),
        (p(1, 2, 0), date(2012, 2, 29), date(2010, 12, 29)),
    ];
    for (period, base, expected) in tests {
        assert_eq!(
            period.subtract_from(base)?,
            expected,
            "{period} subtracted from {base}",
        );
        assert_eq!(base.minus_period(period)?, expected);
    }
    Ok(())
}

#[test]
fn add_to_out_of_range() {
    let err = Period::days(1).add_to(isochron::civil::LocalDate::MAX);
    assert!(err.unwrap_err().is_range());
    let err = Period::years(-1).subtract_from(isochron::civil::LocalDate::MAX);
    assert!(err.unwrap_err().is_range());
}
