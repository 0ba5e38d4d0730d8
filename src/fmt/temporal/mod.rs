/*!
The canonical ISO 8601 formats.

Every value type in this crate uses the parsers and printers in this module
for its `FromStr` and `Display` implementations. The formats are:

| Type | Example |
| ---- | ------- |
| `LocalDate` | `2008-06-30`, `-0001-01-01`, `+10000-01-01` |
| `LocalTime` | `11:30`, `11:30:59`, `11:30:59.000000500` |
| `LocalDateTime` | `2008-06-30T11:30:59.5` |
| `ZoneOffset` | `Z`, `+01:00`, `-05:30:15` |
| `OffsetDateTime` | `2008-06-30T11:30:59+01:00` |
| `Instant` | `2008-06-30T10:30:59Z` |
| `ZonedDateTime` | `2008-06-30T11:30+02:00[Europe/Paris]` |
| `ZoneId` | `Europe/Paris`, `+01:00`, `UTC+01:00` |
| `Period` | `P1Y2M3D`, `P-2D`, `P0D` |
| `Duration` | `PT8H6M12.345S`, `PT-0.5S`, `PT0S` |

Printing always produces the shortest canonical form. In particular, seconds
are omitted from times when both the seconds and the fraction are zero, and a
fraction is written with 3, 6 or 9 digits. Parsing accepts the canonical form
along with a few common variations: lowercase `t` and `z`, a `,` as the
decimal separator, compact UTC offsets like `+0100` and lowercase
designators in periods and durations.
*/

pub(crate) use self::{
    parser::{DateTimeParser, PeriodParser},
    printer::{DateTimePrinter, PeriodPrinter},
};

mod parser;
mod printer;

pub(crate) static DEFAULT_DATETIME_PARSER: DateTimeParser =
    DateTimeParser::new();

pub(crate) static DEFAULT_DATETIME_PRINTER: DateTimePrinter =
    DateTimePrinter::new();

pub(crate) static DEFAULT_PERIOD_PARSER: PeriodParser = PeriodParser::new();

pub(crate) static DEFAULT_PERIOD_PRINTER: PeriodPrinter = PeriodPrinter::new();
