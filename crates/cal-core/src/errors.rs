//! Error types for calgen.
//!
//! The workspace shares a single `thiserror`-derived enum. Validation
//! failures surface as `Result`s from constructors; filesystem failures
//! carry the offending path alongside the underlying `io::Error` so the
//! caller can report them and keep going.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The top-level error type used throughout calgen.
#[derive(Debug, Error)]
pub enum Error {
    /// Date or year validation error.
    #[error("date error: {0}")]
    Date(String),

    /// A month folder could not be created.
    #[error("failed to create folder `{}`: {source}", path.display())]
    CreateDir {
        /// The folder that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A day marker file could not be created.
    #[error("failed to create file `{}`: {source}", path.display())]
    CreateFile {
        /// The file that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A statistics report could not be written.
    #[error("failed to write report `{}`: {source}", path.display())]
    WriteReport {
        /// The report file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Shorthand `Result` type used throughout calgen.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validation guard: returns `Err(Error::Date(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cal_core::{ensure, Year};
/// fn checked(year: Year) -> cal_core::Result<Year> {
///     ensure!(year >= 1, "year {year} out of range (must be >= 1)");
///     Ok(year)
/// }
/// assert!(checked(2026).is_ok());
/// assert!(checked(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Date(format!($($msg)*)));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_variants_render_the_path() {
        let err = Error::CreateDir {
            path: PathBuf::from("work-calendar-2026/Month01-Jan2026"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("work-calendar-2026/Month01-Jan2026"));
        assert!(rendered.contains("denied"));
    }

    #[test]
    fn date_variant_renders_the_message() {
        let err = Error::Date("month 13 out of range [1, 12]".into());
        assert_eq!(err.to_string(), "date error: month 13 out of range [1, 12]");
    }
}
