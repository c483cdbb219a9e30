use core::error::Error;
use core::fmt;

/// This enum lets one figure out what kind of error occurred during
/// an `ArrList` operation.
///
/// The discriminants are stable, start at `1` and can be recovered with
/// [`ErrorReason::from_code`].
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorReason {
    /// The arguments describe a range the list cannot serve.
    InvalidArgs = 1,
    /// Some length, index or byte size calculation would overflow.
    Overflow,
    /// Some length or index subtraction would go below zero.
    Underflow,
    /// The allocator could not provide memory.
    OutOfMemory,
    /// The index is not below the list's length.
    IndexTooBig,
    /// The capacity already is the largest the list can hold.
    ReachedCapacityMax,
    /// Tried to pop or remove from a list with no elements.
    PopEmptyList,
}

impl ErrorReason {
    const ALL: [Self; 7] = [
        Self::InvalidArgs,
        Self::Overflow,
        Self::Underflow,
        Self::OutOfMemory,
        Self::IndexTooBig,
        Self::ReachedCapacityMax,
        Self::PopEmptyList,
    ];

    #[inline]
    pub const fn code(self) -> u8 {
        return self as u8;
    }

    /// Maps a numeric code back to its reason. `0` and anything past the last
    /// reason give `None`.
    pub const fn from_code(code: u8) -> Option<Self> {
        if code == 0 || code as usize > Self::ALL.len() {
            return None;
        }
        return Some(Self::ALL[code as usize - 1]);
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgs => "Invalid arguments.",
            Self::Overflow => "Overflow.",
            Self::Underflow => "Underflow.",
            Self::OutOfMemory => "Not enough memory.",
            Self::IndexTooBig => "Index too big.",
            Self::ReachedCapacityMax => "The list's maximum capacity was reached.",
            Self::PopEmptyList => "Popping an empty list is disallowed.",
        }
    }
}

impl fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type alias for `Result<T, ArrListErr>`
pub type ArrListResult<T> = Result<T, ArrListErr>;

/// This is used to indicate an error during an `ArrList` operation.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ArrListErr(ErrorReason);

impl ArrListErr {
    pub(crate) const fn new(reason: ErrorReason) -> Self {
        return Self(reason);
    }
    pub const fn reason(self) -> ErrorReason {
        return self.0;
    }
}

impl From<ErrorReason> for ArrListErr {
    fn from(reason: ErrorReason) -> Self {
        return Self::new(reason);
    }
}

impl Error for ArrListErr {}

impl fmt::Display for ArrListErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
