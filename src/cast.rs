//! Conversions between a storage type and the type a proxy exposes.
//!
//! [`CastFrom`] is the unchecked, infallible conversion used on every read and
//! write through a [`Reference`](crate::Reference). Between primitive numbers
//! it is exactly an `as` cast, so narrowing truncates, signedness changes wrap
//! and float to integer saturates.
//!
//! Other types opt in by implementing [`CastFrom`] by hand:
//!
//! ```
//! use proxyref::CastFrom;
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! enum Mode {
//!     Input,
//!     Output,
//!     Reserved,
//! }
//!
//! impl CastFrom<u8> for Mode {
//!     fn cast_from(bits: u8) -> Self {
//!         match bits {
//!             0 => Mode::Input,
//!             1 => Mode::Output,
//!             _ => Mode::Reserved,
//!         }
//!     }
//! }
//!
//! impl CastFrom<Mode> for u8 {
//!     fn cast_from(mode: Mode) -> Self {
//!         match mode {
//!             Mode::Input => 0,
//!             Mode::Output => 1,
//!             Mode::Reserved => 3,
//!         }
//!     }
//! }
//! ```
//!
//! or, when `From` already relates the two types, with [`cast_via_from!`].

/// Unchecked conversion from `T`.
pub trait CastFrom<T>: Sized {
    /// Converts `value` into `Self`.
    fn cast_from(value: T) -> Self;
}

/// Unchecked conversion into `U`. Implemented for every [`CastFrom`] pair.
pub trait CastInto<U> {
    /// Converts `self` into `U`.
    fn cast_into(self) -> U;
}

impl<T, U: CastFrom<T>> CastInto<U> for T {
    #[inline(always)]
    fn cast_into(self) -> U {
        U::cast_from(self)
    }
}

/// Implements [`CastFrom`] through an existing `From` impl.
///
/// ```
/// #[derive(Clone, Copy)]
/// struct Celsius(i16);
///
/// impl From<i16> for Celsius {
///     fn from(raw: i16) -> Self {
///         Celsius(raw)
///     }
/// }
///
/// impl From<Celsius> for i16 {
///     fn from(c: Celsius) -> Self {
///         c.0
///     }
/// }
///
/// proxyref::cast_via_from!(i16 => Celsius, Celsius => i16, Celsius => Celsius);
/// ```
#[macro_export]
macro_rules! cast_via_from {
    ($($from:ty => $to:ty),+ $(,)?) => {
        $(
            impl $crate::CastFrom<$from> for $to {
                #[inline(always)]
                fn cast_from(value: $from) -> Self {
                    <$to as ::core::convert::From<$from>>::from(value)
                }
            }
        )+
    };
}

macro_rules! impl_primitive_casts {
    (@from [$($T:ty),*] $targets:tt) => {
        $( impl_primitive_casts!(@to $T, $targets); )*
    };
    (@to $T:ty, [$($U:ty),*]) => {
        $(
            impl CastFrom<$T> for $U {
                #[allow(clippy::unnecessary_cast)]
                #[inline(always)]
                fn cast_from(value: $T) -> Self {
                    value as $U
                }
            }
        )*
    };
    ($($T:ty),*) => {
        impl_primitive_casts!(@from [$($T),*] [$($T),*]);
    };
}

impl_primitive_casts!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_casts_follow_as() {
        assert_eq!(u8::cast_from(0x1234u16), 0x34);
        assert_eq!(u16::cast_from(0xffu8), 0x00ff);
        assert_eq!(i8::cast_from(200u8), -56);
        assert_eq!(u32::cast_from(-1i32), u32::MAX);
        assert_eq!(i32::cast_from(3.9f64), 3);
        assert_eq!(u8::cast_from(-5.0f32), 0);
        assert_eq!(u8::cast_from(1e9f64), u8::MAX);
        assert_eq!(f64::cast_from(7u64), 7.0);
    }

    #[test]
    fn identity_casts_exist() {
        assert_eq!(i64::cast_from(-42i64), -42);
        let v: f32 = 1.5f32.cast_into();
        assert_eq!(v, 1.5);
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Ticks(u32);

    impl From<u32> for Ticks {
        fn from(raw: u32) -> Self {
            Ticks(raw)
        }
    }

    impl From<Ticks> for u32 {
        fn from(t: Ticks) -> Self {
            t.0
        }
    }

    crate::cast_via_from!(u32 => Ticks, Ticks => u32);

    #[test]
    fn cast_via_from_uses_from() {
        assert_eq!(Ticks::cast_from(9u32), Ticks(9));
        let raw: u32 = Ticks(11).cast_into();
        assert_eq!(raw, 11);
    }
}
