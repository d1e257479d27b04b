// Conditional logging shim: uses `tracing` when enabled, falls back to eprintln!
//
// `warn` shares its name with the built-in lint attribute, so the macro is
// defined as `warn_event` and re-exported under the short name.

#[cfg(feature = "tracing")]
macro_rules! warn_event {
    ($($arg:tt)*) => {{
        tracing::warn!($($arg)*);
    }};
}

#[cfg(feature = "tracing")]
macro_rules! debug {
    ($($arg:tt)*) => {{
        tracing::debug!($($arg)*);
    }};
}

#[cfg(not(feature = "tracing"))]
macro_rules! warn_event {
    ($($arg:tt)*) => {{
        eprintln!($($arg)*);
    }};
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

pub(crate) use debug;
pub(crate) use warn_event as warn;
