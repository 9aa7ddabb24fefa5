// Logging shims: forward to `log` when the `logging` feature is on,
// otherwise type-check the arguments and emit nothing.

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        { log::debug!($($arg)*); }
        #[cfg(not(feature = "logging"))]
        { let _ = format_args!($($arg)*); }
    }};
}

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        { log::trace!($($arg)*); }
        #[cfg(not(feature = "logging"))]
        { let _ = format_args!($($arg)*); }
    }};
}

pub(crate) use debug;
pub(crate) use trace;
