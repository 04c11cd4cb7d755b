//! Macros that do run-time consistency checks of a capture being built.
//! These can be disabled, at the risk of producing streams the replay engine rejects.

/// `assert!` that is exists only if `"no-slow-safety-checks"` feature is not enabled.
#[cfg(not(feature = "no-slow-safety-checks"))]
#[macro_export]
macro_rules! replica_slow_assert {
    ($($arg:tt)*) => {
        assert!($($arg)*);
    }
}

/// `assert_eq!` that is exists only if `"no-slow-safety-checks"` feature is not enabled.
#[cfg(not(feature = "no-slow-safety-checks"))]
#[macro_export]
macro_rules! replica_slow_assert_eq {
    ($($arg:tt)*) => {
        assert_eq!($($arg)*);
    }
}

/// `assert!` that is exists only if `"no-slow-safety-checks"` feature is not enabled.
#[cfg(feature = "no-slow-safety-checks")]
#[macro_export]
macro_rules! replica_slow_assert {
    ($($arg:tt)*) => {};
}

/// `assert_eq!` that is exists only if `"no-slow-safety-checks"` feature is not enabled.
#[cfg(feature = "no-slow-safety-checks")]
#[macro_export]
macro_rules! replica_slow_assert_eq {
    ($($arg:tt)*) => {};
}
