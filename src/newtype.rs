//! The tagged numeric wrapper itself.
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::repr::Repr;

/// A numeric `R` that only combines with other values carrying the same
/// `Tag`.
///
/// `Tag` is never instantiated. Two aliases over the same `R` with different
/// tags are unrelated types, and neither converts to or from a bare `R`
/// implicitly. Use [`newtype!`](crate::newtype) to declare one.
#[repr(transparent)]
pub struct NewType<R: Repr, Tag> {
	value: R,
	// fn() -> Tag keeps Send/Sync/Copy independent of the tag
	_tag: PhantomData<fn() -> Tag>,
}

/// Names the pieces an alias was built from.
pub trait Tagged {
	type Repr: Repr;
	type Tag;
}

impl<R: Repr, Tag> Tagged for NewType<R, Tag> {
	type Repr = R;
	type Tag = Tag;
}

impl<R: Repr, Tag> NewType<R, Tag> {
	/// Wrapper holding the representation's default value.
	pub const ZERO: Self = Self::new(R::ZERO);

	#[inline]
	pub const fn new(value: R) -> Self {
		Self { value, _tag: PhantomData }
	}

	/// Explicit construction from anything losslessly convertible to `R`.
	#[inline]
	pub fn from_value<V: Into<R>>(v: V) -> Self {
		Self::new(v.into())
	}

	/// Construction from a value that may not fit in `R`.
	pub fn try_new<V: TryInto<R>>(v: V) -> Result<Self, V::Error> {
		v.try_into().map(Self::new)
	}

	pub fn set(&mut self, value: R) -> &mut Self {
		self.value = value;
		self
	}

	/// [`set`](Self::set) from anything losslessly convertible to `R`.
	pub fn set_from<V: Into<R>>(&mut self, v: V) -> &mut Self {
		self.set(v.into())
	}

	#[inline]
	pub const fn get(&self) -> R {
		self.value
	}

	#[inline]
	pub const fn get_ref(&self) -> &R {
		&self.value
	}

	/// Raw access to the stored value. Writes through here skip every
	/// operator on this type; meant for code that only speaks `R`.
	#[inline]
	pub fn get_mut(&mut self) -> &mut R {
		&mut self.value
	}

	#[inline]
	pub fn into_inner(self) -> R {
		self.value
	}

	/// Pre-increment.
	pub fn inc(&mut self) -> &mut Self {
		self.value += R::ONE;
		self
	}

	/// Pre-decrement.
	pub fn dec(&mut self) -> &mut Self {
		self.value -= R::ONE;
		self
	}

	/// Post-increment: returns the value held before the step.
	pub fn post_inc(&mut self) -> Self {
		let prev = *self;
		self.value += R::ONE;
		prev
	}

	/// Post-decrement: returns the value held before the step.
	pub fn post_dec(&mut self) -> Self {
		let prev = *self;
		self.value -= R::ONE;
		prev
	}
}

impl<R: Repr, Tag> Clone for NewType<R, Tag> {
	#[inline]
	fn clone(&self) -> Self {
		*self
	}
}

impl<R: Repr, Tag> Copy for NewType<R, Tag> {}

impl<R: Repr, Tag> Default for NewType<R, Tag> {
	fn default() -> Self {
		Self::ZERO
	}
}

impl<R: Repr + Hash, Tag> Hash for NewType<R, Tag> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.value.hash(state)
	}
}

// SAFETY: repr(transparent) over a Pod `R`; the marker is zero sized.
unsafe impl<R: Repr, Tag> bytemuck::Zeroable for NewType<R, Tag> {}
unsafe impl<R: Repr, Tag: 'static> bytemuck::Pod for NewType<R, Tag> {}
