//! Type-level positions, written as unary numbers: zero is [`Z`] and `n + 1` is [`S<n>`](S).
//!
//! Every position in a [`Chain`](crate::chain::Chain) is named at the type level by one of these:
//! the first element sits at [`Z`], the second at `S<Z>`, and so on. Recursive operations peel one
//! [`S`] per link until they reach [`Z`]. Callers rarely spell the nesting out; [`UnaryOf`] turns
//! an ordinary `usize` constant into it, which is what lets [`Tuple::get`](crate::Tuple::get) take
//! its position as `get::<2>()`.

/// The first position of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// The position just after `N`.
///
/// # Examples
///
/// ```
/// use catena::unary::{Unary, S, Z};
///
/// let third: S<S<Z>> = S(S(Z));
/// assert_eq!(<S<S<Z>>>::VALUE, 2);
/// # let _ = third;
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// The unary position equal to the constant `N`.
///
/// # Examples
///
/// ```
/// use catena::unary::{UnaryOf, S, Z};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(UnaryOf<0>, Z);
/// assert_type_eq_all!(UnaryOf<2>, S<S<Z>>);
/// ```
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

/// A type-level position, with its index available at runtime.
///
/// # Examples
///
/// ```
/// use catena::unary::{Unary, UnaryOf};
///
/// assert_eq!(<UnaryOf<0>>::VALUE, 0);
/// assert_eq!(<UnaryOf<17>>::VALUE, 17);
/// assert_eq!(<UnaryOf<64>>::VALUE, 64);
/// ```
pub trait Unary: sealed::Unary + Sized + Sync + Send + 'static {
    /// The zero-based index this position names.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Holds when position `Self` comes strictly before `N`; used to check a position against a
/// chain's [`Length`](crate::chain::Chain::Length).
///
/// # Examples
///
/// A two-element chain has a position `1`:
///
/// ```
/// use catena::unary::*;
///
/// fn in_range() where UnaryOf<1>: LessThan<UnaryOf<2>> {}
/// ```
///
/// but no position `2`:
///
/// ```compile_fail
/// # use catena::unary::*;
/// #
/// fn out_of_range() where UnaryOf<2>: LessThan<UnaryOf<2>> {}
/// ```
pub trait LessThan<N: Unary>
where
    Self: Unary,
{
}

impl<N: Unary> LessThan<S<N>> for Z {}

impl<N: Unary, M: LessThan<N>> LessThan<S<N>> for S<M> {}

/// Marks the [`Number`] wrappers.
pub trait Constant: sealed::Constant {}

/// A `usize` constant lifted into a type, so that traits can map it to its unary position.
#[allow(missing_debug_implementations)]
pub struct Number<const N: usize>;

impl<const N: usize> Constant for Number<N> {}

/// Maps a [`Number`] to the unary position with the same value.
///
/// Implemented for every constant from `0` up to `64`, which bounds the positions reachable with
/// [`UnaryOf`].
pub trait ToUnary {
    /// The unary position.
    type AsUnary: Unary + ToConstant<AsConstant = Self>;
}

/// Maps a unary position back to its [`Number`].
pub trait ToConstant: Unary {
    /// The wrapped constant.
    type AsConstant: Constant + ToUnary<AsUnary = Self>;
}

catena_macro::generate_unary_conversion_impls!(64);

mod sealed {
    use super::*;

    pub trait Unary: 'static {}
    impl Unary for Z {}
    impl<N: Unary> Unary for S<N> {}

    pub trait Constant: 'static {}
    impl<const N: usize> Constant for Number<N> {}
}
