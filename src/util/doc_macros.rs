//! Macros for reducing doc comment boilerplate.

/// Documents panics due to absurdly large numbers
macro_rules! panic_absurd_size {
    () => {
        r"May theoretically panic for absurdly large scales or digit counts, however the numbers involved would not fit in memory anyway.
"
    };
}
pub(crate) use panic_absurd_size;

/// Default explanation for [`crate::Error::NoConverge`] errors.
macro_rules! errors_no_converge {
    () => {
        r"- `NoConverge`: the refinement did not finish within the configured number of steps. The tightest bracket found so far is returned with the error.
"
    };
}
pub(crate) use errors_no_converge;
