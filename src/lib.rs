//! Typed, non-owning reference proxies over foreign storage cells
//!
//! A [`Reference<T, U>`](Reference) is a handle to a cell that stores a `T`,
//! used as if it were a value of type `U`. Reading converts `T -> U`.
//! Writing converts `U -> T` and stores the result in the cell. Compound
//! addition, subtraction and increments run in `T`'s own arithmetic. The
//! proxy never allocates, frees or owns the cell; it only borrows it.
//!
//! The typical use is presenting raw storage through a narrower or more
//! meaningful type: the low byte of a 16-bit counter, an enumeration encoded
//! in a bit field, a float view of a fixed-point sample.
//!
//! # Binding
//!
//! ```
//! use core::cell::Cell;
//! use proxyref::Reference;
//!
//! let cell = Cell::new(5);
//! let p: Reference<i32> = Reference::new(&cell);
//!
//! p.add_assign(3);
//! assert_eq!(cell.get(), 8);
//! assert_eq!(p.post_increment(), 8);
//! assert_eq!(cell.get(), 9);
//! assert_eq!(p.pre_increment().get(), 10);
//! ```
//!
//! A proxy can also be bound to a plain `&mut T` with
//! [`Reference::from_mut`], or to a raw address with the `unsafe`
//! [`Reference::from_ptr`]. Raw addresses are checked for null and alignment
//! by debug assertions only; release builds do not check them.
//!
//! # Rebinding
//!
//! [`rebind`](Reference::rebind) points an existing proxy at another cell of
//! the same storage type. Operations before the rebind affected the old cell;
//! operations after it affect the new one.
//!
//! ```
//! use core::cell::Cell;
//! use proxyref::Reference;
//!
//! let (a, b) = (Cell::new(1u8), Cell::new(100u8));
//! let mut p: Reference<u8> = Reference::new(&a);
//! p.pre_increment();
//! p.rebind(&b).pre_increment();
//! assert_eq!((a.get(), b.get()), (2, 101));
//! ```
//!
//! # Value assignment between proxies
//!
//! In Rust, `p1 = p2` moves a proxy object. It never writes through it. The
//! value copy is the dedicated [`assign`](Reference::assign) method. It copies
//! the raw `T` from `p2`'s cell into `p1`'s cell, and `p1` stays bound where
//! it was. `Reference` implements `Clone` but not `Copy`, so a proxy object
//! is only ever duplicated explicitly.
//!
//! ```
//! use core::cell::Cell;
//! use proxyref::Reference;
//!
//! let (c1, c2) = (Cell::new(10), Cell::new(20));
//! let p1: Reference<i32> = Reference::new(&c1);
//! let p2: Reference<i32> = Reference::new(&c2);
//! p1.assign(&p2);
//! assert_eq!((c1.get(), c2.get()), (20, 20));
//! assert_eq!(p1.as_ptr(), c1.as_ptr());
//! ```
//!
//! # Conversions
//!
//! Conversions go through [`CastFrom`]/[`CastInto`]. Every pair of primitive
//! numbers is covered with `as` semantics. Other types implement
//! [`CastFrom`] themselves or use [`cast_via_from!`].
//!
//! ```
//! use core::cell::Cell;
//! use proxyref::Reference;
//!
//! let cell = Cell::new(0x1234u16);
//! let low: Reference<u16, u8> = Reference::new(&cell);
//! assert_eq!(low.get(), 0x34);
//! low.set(0xff);
//! assert_eq!(cell.get(), 0x00ff);
//! ```
//!
//! # Backings
//!
//! The cell type is the third parameter and defaults to
//! [`Cell<T>`](core::cell::Cell). [`VolatileCell<T>`] makes every access
//! volatile, for memory-mapped storage. With the `atomics` feature the
//! `portable_atomic` integer atomics can back a proxy too. This makes the
//! proxy `Send + Sync`, but compound operations are still a separate load and
//! store, not an atomic read-modify-write.
//!
//! ```
//! use proxyref::{VolatileCell, VolatileReference};
//!
//! let reg = VolatileCell::new(0u32);
//! let p: VolatileReference<u32> = VolatileReference::new(&reg);
//! p.set(7).add_assign(1);
//! assert_eq!(reg.get(), 8);
//! ```
//!
//! # Scripts
//!
//! With the `json` or `yaml` feature, the [`script`] module runs declarative
//! scenarios of cells, proxies and operations through real proxies. The
//! `proxyref` binary is a command line front end for it.

#![deny(missing_docs)]

pub mod backing;
pub mod cast;
mod raw;
mod reference;

#[cfg(any(feature = "json", feature = "yaml"))]
#[allow(missing_docs)]
pub mod config;
#[cfg(any(feature = "json", feature = "yaml"))]
#[allow(missing_docs)]
pub mod script;

pub use crate::backing::Backing;
pub use crate::cast::{CastFrom, CastInto};
pub use crate::raw::RawValue;
pub use crate::reference::Reference;
pub use vcell::VolatileCell;

/// A [`Reference`] whose cell is accessed with volatile loads and stores.
pub type VolatileReference<'a, T, U = T> = Reference<'a, T, U, VolatileCell<T>>;
