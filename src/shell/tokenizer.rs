//! Line tokenizer.
//!
//! Splits a submitted line into at most `MAX_ARGS` tokens on the space byte.
//! No quoting or escaping: a token is any maximal run of non-space bytes, so
//! tabs and other control bytes stay inside tokens.

use core::fmt;

/// Tokenizer failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// The line has more tokens than the argument vector can hold
    TooManyArguments {
        /// Capacity of the argument vector
        max: usize,
    },
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizeError::TooManyArguments { max } => {
                write!(f, "Too many arguments (max {})", max)
            }
        }
    }
}

/// Split `line` into tokens, left to right.
///
/// A line of only spaces yields no tokens. More than `MAX_ARGS` tokens is an
/// error; nothing is truncated.
///
/// ```rust,ignore
/// let argv = tokenize::<4>("set  led on")?;
/// assert_eq!(argv.as_slice(), &["set", "led", "on"]);
/// ```
pub fn tokenize<const MAX_ARGS: usize>(
    line: &str,
) -> Result<heapless::Vec<&str, MAX_ARGS>, TokenizeError> {
    let mut argv = heapless::Vec::new();

    for token in line.split(' ').filter(|t| !t.is_empty()) {
        argv.push(token)
            .map_err(|_| TokenizeError::TooManyArguments { max: MAX_ARGS })?;
    }

    Ok(argv)
}
