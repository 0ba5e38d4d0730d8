// Not every level is used by every feature combination.
#![allow(unused_macros)]

/// Expands to its body only when the `logging` feature is enabled.
///
/// Without the feature, nothing in the arguments is evaluated, so callers
/// may freely format values that are somewhat costly to render.
macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! error {
    ($($tt:tt)*) => { log!(log::error!(target: "isochron", $($tt)*)) }
}

macro_rules! warn {
    ($($tt:tt)*) => { log!(log::warn!(target: "isochron", $($tt)*)) }
}

macro_rules! info {
    ($($tt:tt)*) => { log!(log::info!(target: "isochron", $($tt)*)) }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!(target: "isochron", $($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!(target: "isochron", $($tt)*)) }
}
