//! Declaring aliases.

/// Declares a tagged alias over a numeric representation.
///
/// `newtype!(pub Bytes: u64)` expands to a hidden, uninhabited `BytesTag`
/// and `pub type Bytes = NewType<u64, BytesTag>`. Attributes and doc
/// comments are carried onto the alias.
///
/// ```
/// use tagged_newtype::newtype;
///
/// newtype!(
/// 	/// Number of retries left.
/// 	pub Retries: u8
/// );
///
/// let mut r = Retries::new(3);
/// r -= Retries::new(1);
/// assert_eq!(r.get(), 2);
/// ```
#[macro_export]
macro_rules! newtype {
	($(#[$attr:meta])* $vis:vis $name:ident: $repr:ty) => {
		$crate::__private::paste! {
			#[doc(hidden)]
			$vis enum [<$name Tag>] {}

			$(#[$attr])*
			$vis type $name = $crate::NewType<$repr, [<$name Tag>]>;
		}
	};
}

/// Opts an alias declared with [`newtype!`] into `Debug` and `Display`.
///
/// Must be used where the alias's tag is visible, normally right after the
/// declaration.
///
/// ```
/// use tagged_newtype::{newtype, newtype_simple_output};
///
/// newtype!(pub Port: u16);
/// newtype_simple_output!(Port);
///
/// assert_eq!(format!("{} / {:?}", Port::new(80), Port::new(443)), "80 / 443");
/// ```
#[macro_export]
macro_rules! newtype_simple_output {
	($name:ident) => {
		$crate::__private::paste! {
			impl $crate::SimpleOutput for [<$name Tag>] {}
		}
	};
}
