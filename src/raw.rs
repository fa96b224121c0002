/// Arithmetic a storage type must support for the proxy's compound
/// operations.
///
/// Integers wrap on overflow in every build profile, the way a hardware
/// counter does. Floats use plain IEEE arithmetic.
pub trait RawValue: Copy {
    /// Additive identity.
    const ZERO: Self;
    /// Unit step used by `pre_increment` and `post_increment`.
    const ONE: Self;

    /// `self + rhs` in the storage domain.
    fn raw_add(self, rhs: Self) -> Self;

    /// `self - rhs` in the storage domain.
    fn raw_sub(self, rhs: Self) -> Self;
}

macro_rules! raw_int {
    ($($T:ty),*) => {
        $(
            impl RawValue for $T {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline(always)]
                fn raw_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline(always)]
                fn raw_sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }
            }
        )*
    };
}

macro_rules! raw_float {
    ($($T:ty),*) => {
        $(
            impl RawValue for $T {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline(always)]
                fn raw_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline(always)]
                fn raw_sub(self, rhs: Self) -> Self {
                    self - rhs
                }
            }
        )*
    };
}

raw_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
raw_float!(f32, f64);
