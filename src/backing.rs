//! Storage locations a [`Reference`](crate::Reference) can target.

use core::cell::Cell;
use vcell::VolatileCell;

/// A shared, interior-mutable location holding a `T`.
///
/// Implementors only move values in and out; they never own anything on the
/// proxy's behalf.
pub trait Backing<T: Copy> {
    /// Reads the current value.
    fn load(&self) -> T;

    /// Overwrites the current value.
    fn store(&self, value: T);

    /// Returns the underlying memory address.
    fn as_ptr(&self) -> *mut T;

    /// Reinterprets a raw location as a backing cell.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null, aligned for `T`, point to an initialized `T`
    /// and stay valid for `'a`. All other accesses during `'a` must go
    /// through shared references to the same backing type.
    unsafe fn from_ptr<'a>(ptr: *mut T) -> &'a Self
    where
        Self: Sized;
}

impl<T: Copy> Backing<T> for Cell<T> {
    #[inline(always)]
    fn load(&self) -> T {
        self.get()
    }

    #[inline(always)]
    fn store(&self, value: T) {
        self.set(value)
    }

    #[inline(always)]
    fn as_ptr(&self) -> *mut T {
        Cell::as_ptr(self)
    }

    #[inline(always)]
    unsafe fn from_ptr<'a>(ptr: *mut T) -> &'a Self {
        // `Cell<T>` has the same in-memory representation as `T`.
        &*(ptr as *const Cell<T>)
    }
}

/// Every access is volatile, so reads and writes through the proxy are never
/// elided or merged.
impl<T: Copy> Backing<T> for VolatileCell<T> {
    #[inline(always)]
    fn load(&self) -> T {
        self.get()
    }

    #[inline(always)]
    fn store(&self, value: T) {
        self.set(value)
    }

    #[inline(always)]
    fn as_ptr(&self) -> *mut T {
        VolatileCell::as_ptr(self)
    }

    #[inline(always)]
    unsafe fn from_ptr<'a>(ptr: *mut T) -> &'a Self {
        &*(ptr as *const VolatileCell<T>)
    }
}

#[cfg(feature = "atomics")]
mod atomic {
    use super::Backing;
    use portable_atomic::Ordering;

    macro_rules! impl_atomics {
        ($U:ty, $Atomic:ty) => {
            /// Loads and stores are `SeqCst`. Compound proxy operations are
            /// still a separate load and store.
            impl Backing<$U> for $Atomic {
                #[inline(always)]
                fn load(&self) -> $U {
                    <$Atomic>::load(self, Ordering::SeqCst)
                }

                #[inline(always)]
                fn store(&self, value: $U) {
                    <$Atomic>::store(self, value, Ordering::SeqCst)
                }

                #[inline(always)]
                fn as_ptr(&self) -> *mut $U {
                    <$Atomic>::as_ptr(self)
                }

                #[inline(always)]
                unsafe fn from_ptr<'a>(ptr: *mut $U) -> &'a Self {
                    <$Atomic>::from_ptr(ptr)
                }
            }
        };
    }

    impl_atomics!(u8, portable_atomic::AtomicU8);
    impl_atomics!(u16, portable_atomic::AtomicU16);
    impl_atomics!(usize, portable_atomic::AtomicUsize);
    impl_atomics!(i8, portable_atomic::AtomicI8);
    impl_atomics!(i16, portable_atomic::AtomicI16);
    impl_atomics!(isize, portable_atomic::AtomicIsize);

    // Exclude 16-bit archs from 32-bit atomics
    #[cfg(not(target_pointer_width = "16"))]
    impl_atomics!(u32, portable_atomic::AtomicU32);
    #[cfg(not(target_pointer_width = "16"))]
    impl_atomics!(i32, portable_atomic::AtomicI32);

    #[cfg(any(target_pointer_width = "64", target_has_atomic = "64"))]
    impl_atomics!(u64, portable_atomic::AtomicU64);
    #[cfg(any(target_pointer_width = "64", target_has_atomic = "64"))]
    impl_atomics!(i64, portable_atomic::AtomicI64);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip<C: Backing<u16>>(cell: &C) {
        assert_eq!(cell.load(), 7);
        cell.store(9);
        assert_eq!(cell.load(), 9);
        let alias = unsafe { C::from_ptr(cell.as_ptr()) };
        alias.store(11);
        assert_eq!(cell.load(), 11);
        assert_eq!(alias.as_ptr(), cell.as_ptr());
    }

    #[test]
    fn cell_backing() {
        roundtrip(&Cell::new(7u16));
    }

    #[test]
    fn volatile_backing() {
        roundtrip(&VolatileCell::new(7u16));
    }

    #[cfg(feature = "atomics")]
    #[test]
    fn atomic_backing() {
        roundtrip(&portable_atomic::AtomicU16::new(7));
    }
}
