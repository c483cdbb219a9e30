use core::cmp;
use core::fmt;
use core::ops;

/// The integer type an `ArrList` uses for its length, its capacity and
/// its indices. Overflow is checked against this type's range, so a list
/// with `u8` lengths can never hold more than 255 elements.
///
/// It's marked as unsafe since your type must be continuous and ordered
/// under common operations such as addition and multiplication, like the
/// unsigned integers.
pub unsafe trait LengthType
where
    Self: Copy,
    Self: fmt::Debug,
    Self: cmp::Eq,
    Self: cmp::Ord,
    Self: ops::Add<Output = Self>,
    Self: ops::AddAssign,
    Self: ops::Mul<Output = Self>,
    Self: ops::Shr<Output = Self>,
    Self: ops::Sub<Output = Self>,
    Self: ops::SubAssign,
    Self: Sized,
    Self: From<u8>,
    usize: TryFrom<Self>,
{
    const MAX_VALUE: Self;
    const ONE_VALUE: Self;
    const ZERO_VALUE: Self;

    /// Only called on values already known to fit a `usize`.
    fn as_usize(self) -> usize;
    fn from_usize(value: usize) -> Option<Self>;
    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_sub(self, rhs: Self) -> Option<Self>;
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
            fn checked_sub(self, rhs: Self) -> Option<Self> {
                return self.checked_sub(rhs);
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
