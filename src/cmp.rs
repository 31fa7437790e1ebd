//! Comparisons between wrappers of one alias.
//!
//! `==`, `<` and `>` go straight to the representation. `!=`, `<=` and `>=`
//! are their negations: `a <= b` is `!(a > b)`, `a >= b` is `!(a < b)`.
//! With a NaN on either side that makes `<=` and `>=` true while `<`, `>` and
//! `==` are all false, which differs from `f64`'s own `<=`.
use core::cmp::Ordering;

use crate::newtype::NewType;
use crate::repr::Repr;

#[allow(clippy::partialeq_ne_impl)]
impl<R: Repr, Tag> PartialEq for NewType<R, Tag> {
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		self.get() == other.get()
	}

	#[inline]
	fn ne(&self, other: &Self) -> bool {
		!(self.get() == other.get())
	}
}

impl<R: Repr + Eq, Tag> Eq for NewType<R, Tag> {}

impl<R: Repr, Tag> PartialOrd for NewType<R, Tag> {
	#[inline]
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		self.get().partial_cmp(&other.get())
	}

	#[inline]
	fn lt(&self, other: &Self) -> bool {
		self.get() < other.get()
	}

	#[inline]
	fn gt(&self, other: &Self) -> bool {
		self.get() > other.get()
	}

	#[inline]
	fn le(&self, other: &Self) -> bool {
		!(self.get() > other.get())
	}

	#[inline]
	fn ge(&self, other: &Self) -> bool {
		!(self.get() < other.get())
	}
}

impl<R: Repr + Ord, Tag> Ord for NewType<R, Tag> {
	#[inline]
	fn cmp(&self, other: &Self) -> Ordering {
		self.get().cmp(&other.get())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	enum RankTag {}
	type Rank = NewType<u16, RankTag>;

	enum ScoreTag {}
	type Score = NewType<f32, ScoreTag>;

	#[test]
	fn integer_ordering() {
		let (a, b) = (Rank::new(3), Rank::new(4));
		assert!(a < b);
		assert!(b > a);
		assert!(a <= b);
		assert!(a <= a);
		assert!(b >= a);
		assert!(a != b);
		assert!(a == Rank::new(3));
		assert_eq!(a.cmp(&b), Ordering::Less);
		assert_eq!(a.max(b).get(), 4);
	}

	#[test]
	fn sorts_by_value() {
		let mut ranks = [5u16, 1, 3, 1].map(Rank::new);
		ranks.sort();
		let raw: [u16; 4] = ranks.map(|r| r.get());
		assert_eq!(raw, [1, 1, 3, 5]);
	}

	#[test]
	fn nan_negated_comparisons() {
		let nan = Score::new(f32::NAN);
		let one = Score::new(1.0);

		assert!(!(nan == one));
		assert!(nan != one);
		assert!(!(nan < one));
		assert!(!(nan > one));
		assert_eq!(nan.partial_cmp(&one), None);

		// negation of `>` and `<`, not IEEE `<=`/`>=`
		assert!(nan <= one);
		assert!(nan >= one);
		assert!(one <= nan);
		assert!(one >= nan);
		assert!(!(f32::NAN <= 1.0));

		assert!(nan != nan);
		assert!(nan <= nan);
	}

	#[test]
	fn signed_zero_is_equal() {
		assert!(Score::new(0.0) == Score::new(-0.0));
		assert!(Score::new(0.0) <= Score::new(-0.0));
		assert!(Score::new(0.0) >= Score::new(-0.0));
	}

	proptest! {
		#[test]
		fn integer_trichotomy(a in any::<u16>(), b in any::<u16>()) {
			let (x, y) = (Rank::new(a), Rank::new(b));
			let held = [x < y, x == y, x > y].iter().filter(|h| **h).count();
			prop_assert_eq!(held, 1);
			prop_assert_eq!(x <= y, a <= b);
			prop_assert_eq!(x >= y, a >= b);
			prop_assert_eq!(x != y, a != b);
		}

		#[test]
		fn finite_floats_agree_with_repr(a in -1e6f32..1e6, b in -1e6f32..1e6) {
			let (x, y) = (Score::new(a), Score::new(b));
			prop_assert_eq!(x < y, a < b);
			prop_assert_eq!(x <= y, a <= b);
			prop_assert_eq!(x >= y, a >= b);
			prop_assert_eq!(x == y, a == b);
		}
	}
}
