use core::cmp;
use core::ops;

/// The integer type a `DynArr` uses for its length, capacity, and indices.
///
/// Picking something narrower than `usize` (e.g. `u16`) shrinks the array header
/// and caps how many slots it can ever hold. Implement this for your own type if it
/// behaves like an unsigned integer.
///
/// It's marked as unsafe since your type must be continuous and ordered
/// under common operations such as addition and subtraction like integers,
/// and `as_usize` must agree with `from_usize` for every value that fits.
pub unsafe trait LengthType
where
    Self: Copy,
    Self: cmp::Eq,
    Self: cmp::Ord,
    Self: ops::Add<Output = Self>,
    Self: ops::AddAssign,
    Self: ops::Sub<Output = Self>,
    Self: ops::SubAssign,
    Self: Sized,
    Self: From<u8>,
    usize: TryFrom<Self>,
{
    const MAX_VALUE: Self;
    const ONE_VALUE: Self;
    const ZERO_VALUE: Self;

    /// Converts to a `usize`. Only called on values that have already been
    /// checked to fit, such as indices below the capacity.
    fn as_usize(self) -> usize;
    fn from_usize(value: usize) -> Option<Self>;
    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_length_type {
    ($typ:ty) => {
        unsafe impl LengthType for $typ {
            const MAX_VALUE: Self = Self::MAX;
            const ONE_VALUE: Self = 1;
            const ZERO_VALUE: Self = 0;

            #[inline(always)]
            fn as_usize(self) -> usize {
                return self as usize;
            }

            #[inline]
            fn from_usize(value: usize) -> Option<Self> {
                return Self::try_from(value).ok();
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                return self.checked_add(rhs);
            }
            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                return self.checked_mul(rhs);
            }
        }
    };
}

impl_length_type!(usize);
impl_length_type!(u8);
impl_length_type!(u16);
impl_length_type!(u32);
impl_length_type!(u64);
