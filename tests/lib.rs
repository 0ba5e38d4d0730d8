mod offset;
mod offset_datetime;
mod period;

/// A type alias we use for tests.
///
/// Table driven tests read better with `?` than with a wall of `unwrap`.
type Result = std::result::Result<(), isochron::Error>;
