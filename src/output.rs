//! Opt-in printing for aliases.
//!
//! A wrapper prints as its raw value, never its tag. Nothing is printable
//! until the alias's tag implements [`SimpleOutput`], usually through
//! [`newtype_simple_output!`](crate::newtype_simple_output).
use alloc::string::String;
use core::fmt;

use crate::newtype::NewType;
use crate::repr::Repr;

/// Marker on a tag type. Gives its alias `Debug`, `Display` and
/// [`NewType::debug_print`].
pub trait SimpleOutput {}

/// Debug text of the stored value.
pub fn simple_debug_print<R: Repr, Tag>(nt: &NewType<R, Tag>) -> String {
	alloc::format!("{:?}", nt.get_ref())
}

impl<R: Repr, Tag: SimpleOutput> NewType<R, Tag> {
	pub fn debug_print(&self) -> String {
		simple_debug_print(self)
	}
}

// Both forward the formatter as is, so width, fill and precision apply to
// the raw value.
impl<R: Repr, Tag: SimpleOutput> fmt::Debug for NewType<R, Tag> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self.get_ref(), f)
	}
}

impl<R: Repr, Tag: SimpleOutput> fmt::Display for NewType<R, Tag> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Debug::fmt(self.get_ref(), f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	enum BytesTag {}
	impl SimpleOutput for BytesTag {}
	type Bytes = NewType<u64, BytesTag>;

	enum SecondsTag {}
	impl SimpleOutput for SecondsTag {}
	type Seconds = NewType<f64, SecondsTag>;

	enum SilentTag {}
	type Silent = NewType<i32, SilentTag>;

	#[test]
	fn prints_raw_value() {
		let b = Bytes::new(4096);
		assert_eq!(b.debug_print(), "4096");
		assert_eq!(format!("{:?}", b), "4096");
		assert_eq!(format!("{}", b), "4096");
	}

	#[test]
	fn floats_keep_debug_form() {
		let s = Seconds::new(1.0);
		assert_eq!(format!("{}", s), "1.0");
		assert_eq!(format!("{:?}", Seconds::new(f64::NAN)), "NaN");
	}

	#[test]
	fn honours_width_and_precision() {
		assert_eq!(format!("{:>5}", Bytes::new(42)), format!("{:>5?}", 42u64));
		assert_eq!(format!("{:>5}", Bytes::new(42)), "   42");
		assert_eq!(format!("{:<4?}|", Bytes::new(7)), "7   |");
		assert_eq!(format!("{:08.3}", Seconds::new(2.5)), "0002.500");
		assert_eq!(format!("{:.1?}", Seconds::new(0.25)), format!("{:.1?}", 0.25f64));
	}

	#[test]
	fn helper_ignores_opt_in() {
		assert_eq!(simple_debug_print(&Silent::new(-3)), "-3");
	}

	#[test]
	fn compared_wrappers_show_values() {
		assert_eq!(Bytes::new(7), Bytes::new(3) + Bytes::new(4));
		assert_eq!(format!("{:?}", [Bytes::new(1), Bytes::ZERO]), "[1, 0]");
	}
}
