//! Tagged numeric newtypes.
//!
//! `NewType<R, Tag>` stores an integer or float `R` and is only ever combined
//! with values of the exact same `R` and `Tag`. Byte counts and second counts
//! can both be `u64` underneath and still refuse to mix:
//!
//! ```
//! use tagged_newtype::{newtype, newtype_simple_output};
//!
//! newtype!(pub Count: i32);
//! newtype_simple_output!(Count);
//!
//! assert_eq!(Count::new(3) + Count::new(4), Count::new(7));
//! assert!(Count::new(3) < Count::new(4));
//! assert_eq!(Count::default().get(), 0);
//! ```
//!
//! The wrapper is `#[repr(transparent)]`, so it costs nothing at runtime.
//!
//! Some notes:
//! - Conversions in and out are explicit: `new`, `from_value`, `try_new`,
//!   `set`, `set_from`, `get`. There is no `From`, `Into` or `Deref` to the raw value.
//! - `get_mut` hands out `&mut R` for code that only understands the raw
//!   value. Writes through it skip the operators.
//! - `!=`, `<=` and `>=` are negations of `==`, `>` and `<`. See [`cmp`] for
//!   what that means for NaN.
//! - Shift operators are not provided. Whether a tagged quantity should shift
//!   at all is still undecided.
//! - Printing is opt-in per alias, see [`output`].
//!
//! Things that do not compile:
//!
//! Different tags over the same representation:
//!
//! ```compile_fail
//! use tagged_newtype::newtype;
//!
//! newtype!(Meters: i64);
//! newtype!(Seconds: i64);
//!
//! let _ = Meters::new(5) + Seconds::new(2);
//! ```
//!
//! A bare representation value on either side:
//!
//! ```compile_fail
//! use tagged_newtype::newtype;
//!
//! newtype!(Count: i32);
//!
//! let _ = Count::new(3) + 4i32;
//! ```
//!
//! Assigning a bare value:
//!
//! ```compile_fail
//! use tagged_newtype::newtype;
//!
//! newtype!(Count: i32);
//!
//! let mut c = Count::new(3);
//! c = 4i32;
//! ```
//!
//! A value with no lossless conversion into the representation:
//!
//! ```compile_fail
//! use tagged_newtype::newtype;
//!
//! newtype!(Count: i32);
//!
//! let _ = Count::from_value(1i64);
//! ```
//!
//! ```compile_fail
//! use tagged_newtype::newtype;
//!
//! newtype!(Count: i32);
//!
//! let mut c = Count::default();
//! c.set_from(1i64);
//! ```
//!
//! ```compile_fail
//! use tagged_newtype::newtype;
//!
//! newtype!(Count: i32);
//!
//! let mut c = Count::default();
//! c.set(1u32);
//! ```
//!
//! A representation that is not a number:
//!
//! ```compile_fail
//! use tagged_newtype::NewType;
//!
//! enum NameTag {}
//! let _ = NewType::<bool, NameTag>::default();
//! ```
//!
//! Shifting:
//!
//! ```compile_fail
//! use tagged_newtype::newtype;
//!
//! newtype!(Mask: u32);
//!
//! let _ = Mask::new(1) << Mask::new(3);
//! ```
//!
//! Printing an alias that never opted in:
//!
//! ```compile_fail
//! use tagged_newtype::newtype;
//!
//! newtype!(Hidden: u8);
//!
//! let _ = format!("{:?}", Hidden::new(1));
//! ```
//!
//! Bitwise operators on a float representation:
//!
//! ```compile_fail
//! use tagged_newtype::newtype;
//!
//! newtype!(Ratio: f64);
//!
//! let _ = Ratio::new(1.0) | Ratio::new(2.0);
//! ```
#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod cmp;
mod macros;
mod newtype;
mod ops;
pub mod output;
mod repr;

pub use newtype::{NewType, Tagged};
pub use output::{simple_debug_print, SimpleOutput};
pub use repr::Repr;

#[doc(hidden)]
pub mod __private {
	pub use paste::paste;
}
