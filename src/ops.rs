//! Arithmetic and bitwise operators between wrappers of one alias.
//!
//! Every operator takes `Self` on both sides: a `Meters` never meets a
//! `Seconds` or a bare integer. The bitwise forms only exist when the
//! representation has them, so float-backed aliases get the arithmetic set
//! alone. Shifts are left out on purpose.
use core::ops;

use crate::newtype::NewType;
use crate::repr::Repr;

macro_rules! impl_newtype_op {
	($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt, $assign_op:tt) => {
		impl<R, Tag> ops::$trait_name for NewType<R, Tag>
		where
			R: Repr + ops::$trait_name<Output = R>,
		{
			type Output = Self;

			#[inline]
			fn $method(self, rhs: Self) -> Self::Output {
				Self::new(self.get() $op rhs.get())
			}
		}

		impl<R, Tag> ops::$assign_trait for NewType<R, Tag>
		where
			R: Repr + ops::$assign_trait,
		{
			#[inline]
			fn $assign_method(&mut self, rhs: Self) {
				*self.get_mut() $assign_op rhs.get();
			}
		}
	};
}

impl_newtype_op!(Add, add, AddAssign, add_assign, +, +=);
impl_newtype_op!(Sub, sub, SubAssign, sub_assign, -, -=);
impl_newtype_op!(Mul, mul, MulAssign, mul_assign, *, *=);
impl_newtype_op!(Div, div, DivAssign, div_assign, /, /=);
impl_newtype_op!(Rem, rem, RemAssign, rem_assign, %, %=);
impl_newtype_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^, ^=);
impl_newtype_op!(BitOr, bitor, BitOrAssign, bitor_assign, |, |=);
impl_newtype_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &, &=);
