//! Crate-internal logging macros.
//!
//! With the `defmt` feature these forward to `defmt`. Without it they only
//! type-check their arguments, so host builds link without a global logger.
//! Format strings must stick to plain `{}` placeholders to work in both modes.

#[cfg(feature = "defmt")]
macro_rules! log_info {
    ($($arg:tt)*) => {
        ::defmt::info!($($arg)*)
    };
}

#[cfg(not(feature = "defmt"))]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        let _ = ::core::format_args!($($arg)*);
    }};
}

#[cfg(feature = "defmt")]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        ::defmt::warn!($($arg)*)
    };
}

#[cfg(not(feature = "defmt"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        let _ = ::core::format_args!($($arg)*);
    }};
}

#[cfg(feature = "defmt")]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        ::defmt::trace!($($arg)*)
    };
}

#[cfg(not(feature = "defmt"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        let _ = ::core::format_args!($($arg)*);
    }};
}
