//! logging that works with or without a defmt transport
//!
//! with the `defmt` feature the macros forward to defmt,
//! otherwise the arguments are evaluated and dropped.
//! Only use `{}` style placeholders and defmt::Format-able arguments.

#[cfg(feature = "defmt")]
macro_rules! debug {
    ($($arg:expr),*) => {
        defmt::debug!($($arg,)*)
    };
}

#[cfg(feature = "defmt")]
macro_rules! warn {
    ($($arg:expr),*) => {
        defmt::warn!($($arg,)*)
    };
}

#[cfg(not(feature = "defmt"))]
macro_rules! debug {
    ($($arg:expr),*) => {{
        let _ = ($($arg),*);
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! warn {
    ($($arg:expr),*) => {{
        let _ = ($($arg),*);
    }};
}
