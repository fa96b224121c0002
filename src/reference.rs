use core::cell::Cell;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{AddAssign, SubAssign};

use crate::backing::Backing;
use crate::cast::CastInto;
use crate::raw::RawValue;

/// Value-like access to a cell of `T`, spoken in the vocabulary of `U`.
///
/// A `Reference` borrows its backing cell and never owns it. Any number of
/// references may target the same cell, and a write through one of them is
/// visible through all the others.
///
/// ```
/// use core::cell::Cell;
/// use proxyref::Reference;
///
/// let cell = Cell::new(0x1234u16);
/// let low: Reference<u16, u8> = Reference::new(&cell);
/// assert_eq!(low.get(), 0x34);
///
/// low.set(0xff);
/// assert_eq!(cell.get(), 0x00ff);
/// ```
///
/// Assigning one proxy from another copies the pointed-to value and leaves
/// both proxies bound where they were:
///
/// ```
/// use core::cell::Cell;
/// use proxyref::Reference;
///
/// let (c1, c2) = (Cell::new(10), Cell::new(20));
/// let p1: Reference<i32> = Reference::new(&c1);
/// let p2: Reference<i32> = Reference::new(&c2);
///
/// p1.assign(&p2);
/// assert_eq!((c1.get(), c2.get()), (20, 20));
/// assert!(!p1.targets_same_cell(&p2));
/// ```
///
/// `Reference` is `Clone` but deliberately not `Copy`. Cloning produces a
/// second proxy over the same cell; use [`assign`](Reference::assign) to copy
/// values between cells.
pub struct Reference<'a, T, U = T, C = Cell<T>> {
    cell: &'a C,
    _marker: PhantomData<fn(T) -> U>,
}

impl<'a, T, U, C> Reference<'a, T, U, C>
where
    T: Copy,
    C: Backing<T>,
{
    /// Binds a new proxy to `cell`. No conversion happens here.
    #[inline(always)]
    pub const fn new(cell: &'a C) -> Self {
        Self {
            cell,
            _marker: PhantomData,
        }
    }

    /// Binds a new proxy to the cell at `ptr`.
    ///
    /// # Safety
    ///
    /// See [`Backing::from_ptr`]. Null and misaligned pointers are caught by
    /// debug assertions only.
    #[inline(always)]
    pub unsafe fn from_ptr(ptr: *mut T) -> Self {
        debug_assert!(!ptr.is_null(), "proxy bound to a null cell");
        debug_assert!(
            ptr.align_offset(core::mem::align_of::<C>()) == 0,
            "proxy bound to a misaligned cell"
        );
        Self::new(C::from_ptr(ptr))
    }

    /// Retargets this proxy to `cell`. The previous cell is left untouched.
    #[inline(always)]
    pub fn rebind(&mut self, cell: &'a C) -> &mut Self {
        self.cell = cell;
        self
    }

    /// Retargets this proxy to the cell at `ptr`.
    ///
    /// # Safety
    ///
    /// Same contract as [`from_ptr`](Reference::from_ptr).
    #[inline(always)]
    pub unsafe fn rebind_ptr(&mut self, ptr: *mut T) -> &mut Self {
        debug_assert!(!ptr.is_null(), "proxy rebound to a null cell");
        debug_assert!(
            ptr.align_offset(core::mem::align_of::<C>()) == 0,
            "proxy rebound to a misaligned cell"
        );
        self.rebind(C::from_ptr(ptr))
    }

    /// The cell this proxy currently targets.
    #[inline(always)]
    pub fn cell(&self) -> &'a C {
        self.cell
    }

    /// Returns the underlying memory address of the target cell.
    #[inline(always)]
    pub fn as_ptr(&self) -> *mut T {
        self.cell.as_ptr()
    }

    /// Whether both proxies target the same cell, whatever type they expose.
    #[inline(always)]
    pub fn targets_same_cell<V, D>(&self, other: &Reference<'_, T, V, D>) -> bool
    where
        D: Backing<T>,
    {
        self.as_ptr() == other.as_ptr()
    }

    /// Reads the stored value without conversion.
    #[inline(always)]
    pub fn raw(&self) -> T {
        self.cell.load()
    }

    /// Reads the stored value, converted to the exposed type.
    #[inline(always)]
    pub fn get(&self) -> U
    where
        T: CastInto<U>,
    {
        self.cell.load().cast_into()
    }

    /// Converts `value` to the storage type and overwrites the cell.
    #[inline(always)]
    pub fn set(&self, value: U) -> &Self
    where
        U: CastInto<T>,
    {
        self.cell.store(value.cast_into());
        self
    }

    /// Copies the value stored behind `other` into this proxy's cell.
    ///
    /// The raw `T` is copied as is. Neither proxy is rebound.
    #[inline(always)]
    pub fn assign<V, D>(&self, other: &Reference<'_, T, V, D>) -> &Self
    where
        D: Backing<T>,
    {
        self.cell.store(other.raw());
        self
    }

    /// Reads, converts, lets `f` compute a new exposed value and writes it
    /// back.
    ///
    /// ```
    /// use core::cell::Cell;
    /// use proxyref::Reference;
    ///
    /// let cell = Cell::new(6u32);
    /// Reference::<u32>::new(&cell).modify(|v| v * 7);
    /// assert_eq!(cell.get(), 42);
    /// ```
    #[inline(always)]
    pub fn modify<F>(&self, f: F) -> &Self
    where
        T: CastInto<U>,
        U: CastInto<T>,
        F: FnOnce(U) -> U,
    {
        self.cell.store(f(self.get()).cast_into());
        self
    }

    /// `cell = cell + value`, computed in the storage type (see [`RawValue`]).
    #[inline(always)]
    pub fn add_assign(&self, value: U) -> &Self
    where
        T: RawValue,
        U: CastInto<T>,
    {
        self.cell.store(self.cell.load().raw_add(value.cast_into()));
        self
    }

    /// `cell = cell - value`, computed in the storage type.
    #[inline(always)]
    pub fn sub_assign(&self, value: U) -> &Self
    where
        T: RawValue,
        U: CastInto<T>,
    {
        self.cell.store(self.cell.load().raw_sub(value.cast_into()));
        self
    }

    /// Advances the cell by one and returns the value it held before, as `U`.
    #[inline(always)]
    pub fn post_increment(&self) -> U
    where
        T: RawValue + CastInto<U>,
    {
        let old = self.cell.load();
        self.cell.store(old.raw_add(T::ONE));
        old.cast_into()
    }

    /// Advances the cell by one.
    #[inline(always)]
    pub fn pre_increment(&self) -> &Self
    where
        T: RawValue,
    {
        self.cell.store(self.cell.load().raw_add(T::ONE));
        self
    }
}

impl<'a, T: Copy, U> Reference<'a, T, U, Cell<T>> {
    /// Binds a new proxy to a plain mutable location.
    ///
    /// The exclusive borrow is turned into a shared cell, so further proxies
    /// can be bound with `Reference::new(proxy.cell())`.
    #[inline(always)]
    pub fn from_mut(value: &'a mut T) -> Self {
        Self::new(Cell::from_mut(value))
    }
}

impl<'a, T, U, C> Clone for Reference<'a, T, U, C> {
    /// Produces another proxy over the same cell. The cell is not read.
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            cell: self.cell,
            _marker: PhantomData,
        }
    }
}

impl<'a, T, U, C> AddAssign<U> for Reference<'a, T, U, C>
where
    T: RawValue,
    U: CastInto<T>,
    C: Backing<T>,
{
    #[inline(always)]
    fn add_assign(&mut self, value: U) {
        Reference::add_assign(&*self, value);
    }
}

impl<'a, T, U, C> SubAssign<U> for Reference<'a, T, U, C>
where
    T: RawValue,
    U: CastInto<T>,
    C: Backing<T>,
{
    #[inline(always)]
    fn sub_assign(&mut self, value: U) {
        Reference::sub_assign(&*self, value);
    }
}

impl<'a, T, U, C> fmt::Debug for Reference<'a, T, U, C>
where
    T: Copy + fmt::Debug,
    C: Backing<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reference")
            .field("cell", &self.as_ptr())
            .field("value", &self.raw())
            .finish()
    }
}
