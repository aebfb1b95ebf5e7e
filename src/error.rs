//! Errors reported by [`Lcd`](crate::lcd::Lcd)

use core::fmt;

/// `E` is the error type of the [`SendCommand`](crate::sender::SendCommand) in use
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Transport failure, passed through untouched
    Bus(E),
    /// A character in a write payload has no single byte code.
    /// Bytes before it were already sent.
    InvalidPayloadElement(char),
    /// CGRAM only holds 8 glyphs
    CgramIndexOutOfRange(u8),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "bus error: {e:?}"),
            Error::InvalidPayloadElement(c) => {
                write!(f, "character {c:?} cannot be written as a single byte")
            }
            Error::CgramIndexOutOfRange(index) => {
                write!(f, "CGRAM index {index} out of range, only 8 graphs allowed")
            }
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
