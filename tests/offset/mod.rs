use isochron::tz::ZoneOffset;

use crate::Result;

#[test]
fn parse_zero() -> Result {
    let tests = [
        "Z", "+0", "+00", "+0000", "+00:00", "+000000", "+00:00:00", "-00",
        "-0000", "-00:00", "-000000", "-00:00:00",
    ];
    for input in tests {
        assert_eq!(input.parse::<ZoneOffset>()?, ZoneOffset::UTC, "{input:?}");
    }
    Ok(())
}

#[test]
fn parse_invalid() {
    let tests = [
        "", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
        "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "ZZ",
        "0", "+0:00", "+00:0", "+0:0", "+000", "+00000", "+0:00:00",
        "+00:0:00", "+00:00:0", "+0:0:0", "+0:0:00", "+00:0:0", "+0:00:0",
        "+01_00", "+01;00", "+01@00", "+01:AA", "+19", "+19:00", "+18:01",
        "+18:00:01", "+1801", "+180001", "-0:00", "-00:0", "-0:0", "-000",
        "-00000", "-0:00:00", "-00:0:00", "-00:00:0", "-0:0:0", "-0:0:00",
        "-00:0:0", "-0:00:0", "-19", "-19:00", "-18:01", "-18:00:01",
        "-1801", "-180001", "-01_00", "-01;00", "-01@00", "-01:AA",
        "@01:00", "+01:00 ",
    ];
    for input in tests {
        let err = input.parse::<ZoneOffset>().unwrap_err();
        assert!(err.is_format(), "{input:?} gave {err}");
    }

    // A valid grammar with an invalid value is also a range error.
    let err = "+18:01".parse::<ZoneOffset>().unwrap_err();
    assert!(err.is_range());
    assert_eq!(err.position(), Some(0));
}

#[test]
fn parse_hours() -> Result {
    for hours in -18..=18 {
        let sign = if hours < 0 { "-" } else { "+" };
        let short = format!("{sign}{}", i32::abs(hours));
        let long = format!("{sign}{:02}", i32::abs(hours));
        let expected = ZoneOffset::of_hours(hours)?;
        assert_eq!(long.parse::<ZoneOffset>()?, expected, "{long}");
        if hours.abs() < 10 {
            assert_eq!(short.parse::<ZoneOffset>()?, expected, "{short}");
        }
    }
    Ok(())
}

#[test]
fn hours_minutes_seconds() -> Result {
    for hours in -17..=17 {
        for minutes in -59..=59 {
            for seconds in (-59..=59).step_by(7) {
                let same_sign = (hours < 0 && minutes <= 0 && seconds <= 0)
                    || (hours > 0 && minutes >= 0 && seconds >= 0)
                    || (hours == 0
                        && ((minutes < 0 && seconds <= 0)
                            || (minutes > 0 && seconds >= 0)
                            || minutes == 0));
                let got =
                    ZoneOffset::of_hours_minutes_seconds(hours, minutes, seconds);
                if !same_sign {
                    assert!(got.unwrap_err().is_range());
                    continue;
                }
                let offset = got?;
                let total = hours * 3_600 + minutes * 60 + seconds;
                assert_eq!(offset.total_seconds(), total);
                assert_eq!(ZoneOffset::of_total_seconds(total)?, offset);

                let id = offset.id();
                assert_eq!(id.parse::<ZoneOffset>()?, offset, "{id}");
                assert_eq!(offset.to_string(), id);
            }
        }
    }
    Ok(())
}

#[test]
fn ids() -> Result {
    let tests = [
        (0, "Z"),
        (3_600, "+01:00"),
        (-3_600, "-01:00"),
        (5_430, "+01:30:30"),
        (-5_430, "-01:30:30"),
        (64_800, "+18:00"),
        (-64_800, "-18:00"),
    ];
    for (seconds, expected) in tests {
        assert_eq!(ZoneOffset::of_total_seconds(seconds)?.id(), expected);
    }
    Ok(())
}

#[test]
fn ordering() -> Result {
    let mut offsets = vec![
        ZoneOffset::of_hours(-2)?,
        ZoneOffset::MAX,
        ZoneOffset::UTC,
        ZoneOffset::of_hours_minutes(5, 30)?,
        ZoneOffset::MIN,
    ];
    offsets.sort();
    let ids: Vec<String> = offsets.iter().map(|o| o.id()).collect();
    assert_eq!(ids, ["+18:00", "+05:30", "Z", "-02:00", "-18:00"]);
    Ok(())
}
