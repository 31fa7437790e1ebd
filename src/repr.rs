//! Representation types a [`NewType`](crate::NewType) may wrap.
use core::{fmt, ops};

mod sealed {
	pub trait Sealed {}
}

/// Integral and floating point primitives. Sealed: nothing outside this
/// crate can widen the set.
#[diagnostic::on_unimplemented(
	message = "NewType can be used only with integral and floating point type.",
	label = "`{Self}` is not an integral or floating point type"
)]
pub trait Repr:
	sealed::Sealed
	+ Copy
	+ Default
	+ PartialEq
	+ PartialOrd
	+ fmt::Debug
	+ fmt::Display
	+ bytemuck::Pod
	+ ops::Add<Output = Self>
	+ ops::Sub<Output = Self>
	+ ops::Mul<Output = Self>
	+ ops::Div<Output = Self>
	+ ops::Rem<Output = Self>
	+ ops::AddAssign
	+ ops::SubAssign
	+ ops::MulAssign
	+ ops::DivAssign
	+ ops::RemAssign
	+ 'static
{
	/// The value a default constructed wrapper holds.
	const ZERO: Self;
	/// Step used by increment and decrement.
	const ONE: Self;
}

macro_rules! impl_repr_for {
	($zero:expr, $one:expr; $($t:ty),+) => {
		$(
			impl sealed::Sealed for $t {}

			impl Repr for $t {
				const ZERO: Self = $zero;
				const ONE: Self = $one;
			}
		)+
	};
}

impl_repr_for!(0, 1; i8, i16, i32, i64, i128, isize);
impl_repr_for!(0, 1; u8, u16, u32, u64, u128, usize);
impl_repr_for!(0.0, 1.0; f32, f64);
