use core::error::Error;
use core::fmt;

/// This enum lets one figure out what kind of error occurred during
/// a `DynArr` operation.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorReason {
    /// The capacity would not fit in the array's `LengthType`.
    CapacityOverflow = 1,
    /// A size or offset would not fit in a `usize`.
    UsizeOverflow,
    /// The buffer size is not a valid layout.
    LayoutFailure,
    /// The allocator refused to allocate or grow the buffer.
    AllocFailure,
    /// The index lies at or past the allocated capacity.
    IndexOutOfBounds,
}

/// A type alias for `Result<T, DynArrErr>`
pub type DynArrResult<T> = Result<T, DynArrErr>;

/// This is used to indicate an error during a `DynArr` operation.
///
/// A failed operation leaves the array exactly as it was before the call.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DynArrErr(ErrorReason);

impl DynArrErr {
    pub(crate) const fn new(reason: ErrorReason) -> Self {
        return Self(reason);
    }

    pub const fn reason(self) -> ErrorReason {
        return self.0;
    }
}

impl Error for DynArrErr {}

impl fmt::Display for DynArrErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ErrorReason::CapacityOverflow => f.write_str("Capacity type overflowed."),
            ErrorReason::UsizeOverflow => f.write_str("usize overflowed."),
            ErrorReason::LayoutFailure => f.write_str("Failed to create layout."),
            ErrorReason::AllocFailure => f.write_str("An allocation failure occurred."),
            ErrorReason::IndexOutOfBounds => f.write_str("Index is outside the allocated capacity."),
        }
    }
}
