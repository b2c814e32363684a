//! Inductive type-level chains and the records built from them.
//!
//! A chain is a type-level list like `Link<A, Link<B, Link<C, End>>>`. The same type is also the
//! runtime record: each [`Link`] owns exactly one value and, by composition, the rest of the
//! record. The [`End`] terminator is zero-sized and is the base case of every recursive operation
//! in this crate.
//!
//! Writing chains by hand is tedious, so the [`Chain!`](crate::Chain) macro expands a flat list of
//! types into the nested form.

use static_assertions::assert_eq_size;

use crate::unary::{Unary, S, Z};

/// The empty chain, terminating every record.
///
/// # Examples
///
/// ```
/// use catena::chain::{Chain, End};
///
/// assert_eq!(End::SIZE, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct End;

assert_eq_size!(End, ());

/// One link of a record: a value of type `H` followed by the rest of the record `T`.
///
/// Default construction default-constructs every slot independently.
#[derive(Debug, Clone, Copy, Hash, Default)]
pub struct Link<H, T> {
    pub(crate) head: H,
    pub(crate) tail: T,
}

/// A type-level list of element types, which is also the record storing one value per element.
///
/// This trait is implemented for [`End`] and every [`Link`] ending in [`End`], and cannot be
/// extended by users of this crate.
pub trait Chain: sealed::Chain + Sized {
    /// The number of elements in the chain.
    const SIZE: usize;

    /// The number of elements in the chain, as a unary type-level number.
    type Length: Unary;
}

impl Chain for End {
    const SIZE: usize = 0;
    type Length = Z;
}

impl<H, T: Chain> Chain for Link<H, T> {
    const SIZE: usize = T::SIZE + 1;
    type Length = S<T::Length>;
}

impl<H, T> Link<H, T> {
    /// Construct a link from its head value and the rest of the record.
    pub fn new(head: H, tail: T) -> Self {
        Link { head, tail }
    }

    /// The value stored in this link.
    pub fn head(&self) -> &H {
        &self.head
    }

    /// Mutable access to the value stored in this link.
    pub fn head_mut(&mut self) -> &mut H {
        &mut self.head
    }

    /// The rest of the record following this link.
    pub fn tail(&self) -> &T {
        &self.tail
    }

    /// Mutable access to the rest of the record following this link.
    pub fn tail_mut(&mut self) -> &mut T {
        &mut self.tail
    }

    /// Split this link into its head value and the rest of the record.
    pub fn into_parts(self) -> (H, T) {
        (self.head, self.tail)
    }
}

/// Append one element type `V` at the end of a chain, just before [`End`].
///
/// # Examples
///
/// ```
/// use catena::Chain;
/// use catena::chain::Push;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<Chain![u8, u16] as Push<u32>>::Output, Chain![u8, u16, u32]);
/// ```
pub trait Push<V>: Chain {
    /// The chain with `V` appended.
    type Output: Chain;

    /// Append a value, copying the existing record's state into the longer record.
    fn push(self, value: V) -> Self::Output;
}

impl<V> Push<V> for End {
    type Output = Link<V, End>;

    fn push(self, value: V) -> Self::Output {
        Link::new(value, End)
    }
}

impl<H, T: Push<V>, V> Push<V> for Link<H, T> {
    type Output = Link<H, T::Output>;

    fn push(self, value: V) -> Self::Output {
        Link::new(self.head, self.tail.push(value))
    }
}

/// Remove the last element of a non-empty chain.
///
/// # Examples
///
/// ```
/// use catena::Chain;
/// use catena::chain::Pop;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<Chain![u8, u16, u32] as Pop>::Output, Chain![u8, u16]);
/// assert_type_eq_all!(<Chain![u8, u16, u32] as Pop>::Popped, u32);
/// ```
///
/// The empty chain has no last element:
///
/// ```compile_fail
/// use catena::chain::{End, Pop};
///
/// let _ = End.pop();
/// ```
pub trait Pop: Chain {
    /// The chain with its last element removed.
    type Output: Chain;

    /// The type of the removed element.
    type Popped;

    /// Split off the last value, returning the shorter record and that value.
    fn pop(self) -> (Self::Output, Self::Popped);
}

impl<H> Pop for Link<H, End> {
    type Output = End;
    type Popped = H;

    fn pop(self) -> (End, H) {
        (End, self.head)
    }
}

impl<H, N, T> Pop for Link<H, Link<N, T>>
where
    T: Chain,
    Link<N, T>: Pop,
{
    type Output = Link<H, <Link<N, T> as Pop>::Output>;
    type Popped = <Link<N, T> as Pop>::Popped;

    fn pop(self) -> (Self::Output, Self::Popped) {
        let (rest, popped) = self.tail.pop();
        (Link::new(self.head, rest), popped)
    }
}

/// Resolve the link holding the final element of a non-empty chain.
pub trait Last: Chain {
    /// The final link, always of the shape `Link<_, End>`.
    type Link;

    /// The type of the final element.
    type Output;

    /// A reference to the final element.
    fn last(&self) -> &Self::Output;

    /// A mutable reference to the final element.
    fn last_mut(&mut self) -> &mut Self::Output;
}

impl<H> Last for Link<H, End> {
    type Link = Self;
    type Output = H;

    fn last(&self) -> &H {
        &self.head
    }

    fn last_mut(&mut self) -> &mut H {
        &mut self.head
    }
}

impl<H, N, T> Last for Link<H, Link<N, T>>
where
    T: Chain,
    Link<N, T>: Last,
{
    type Link = <Link<N, T> as Last>::Link;
    type Output = <Link<N, T> as Last>::Output;

    fn last(&self) -> &Self::Output {
        self.tail.last()
    }

    fn last_mut(&mut self) -> &mut Self::Output {
        self.tail.last_mut()
    }
}

/// Index into a chain by peeling one link at a time, resolving the link whose head is the `N`th
/// element (counting from zero at the front).
///
/// # Examples
///
/// ```
/// use catena::Chain;
/// use catena::chain::Select;
/// use catena::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<Chain![u8, u16, u32] as Select<UnaryOf<1>>>::Selected, Chain![u16, u32]);
/// ```
///
/// Selecting past the end fails to compile:
///
/// ```compile_fail
/// use catena::Chain;
/// use catena::chain::Select;
/// use catena::unary::UnaryOf;
///
/// type Missing = <Chain![u8, u16] as Select<UnaryOf<2>>>::Selected;
/// let _: Option<Missing> = None;
/// ```
pub trait Select<N> {
    /// The link found at position `N`.
    type Selected;

    /// A reference to the link at position `N`.
    fn select(&self) -> &Self::Selected;

    /// A mutable reference to the link at position `N`.
    fn select_mut(&mut self) -> &mut Self::Selected;
}

impl<H, T> Select<Z> for Link<H, T> {
    type Selected = Self;

    fn select(&self) -> &Self {
        self
    }

    fn select_mut(&mut self) -> &mut Self {
        self
    }
}

impl<H, T: Select<N>, N> Select<S<N>> for Link<H, T> {
    type Selected = T::Selected;

    fn select(&self) -> &Self::Selected {
        self.tail.select()
    }

    fn select_mut(&mut self) -> &mut Self::Selected {
        self.tail.select_mut()
    }
}

/// Typed access to the element at compile-time position `N` of a record.
///
/// This is how [`Tuple::get`](crate::Tuple::get) and friends reach their slot; like [`Select`],
/// it is only implemented for positions inside the chain.
pub trait Lookup<N> {
    /// The type of the element at position `N`.
    type Output;

    /// A reference to the element at position `N`.
    fn lookup(&self) -> &Self::Output;

    /// A mutable reference to the element at position `N`.
    fn lookup_mut(&mut self) -> &mut Self::Output;
}

impl<H, T> Lookup<Z> for Link<H, T> {
    type Output = H;

    fn lookup(&self) -> &H {
        &self.head
    }

    fn lookup_mut(&mut self) -> &mut H {
        &mut self.head
    }
}

impl<H, T: Lookup<N>, N> Lookup<S<N>> for Link<H, T> {
    type Output = T::Output;

    fn lookup(&self) -> &Self::Output {
        self.tail.lookup()
    }

    fn lookup_mut(&mut self) -> &mut Self::Output {
        self.tail.lookup_mut()
    }
}

/// Construct a record from another record of the same length whose elements convert pointwise
/// into this record's elements.
///
/// # Examples
///
/// ```
/// use catena::Chain;
/// use catena::chain::{ConvertFrom, End, Link};
///
/// let narrow: Chain![i32, &str] = Link::new(7, Link::new("seven", End));
/// let wide = <Chain![i64, String]>::convert_from(narrow);
/// assert_eq!(wide.head(), &7i64);
/// ```
///
/// Records of different lengths are not compatible:
///
/// ```compile_fail
/// use catena::Chain;
/// use catena::chain::{ConvertFrom, End, Link};
///
/// let short: Chain![i32] = Link::new(7, End);
/// let _ = <Chain![i64, i64]>::convert_from(short);
/// ```
///
/// Nor are records whose elements do not convert pointwise:
///
/// ```compile_fail
/// use catena::Chain;
/// use catena::chain::{ConvertFrom, End, Link};
///
/// let text: Chain![String] = Link::new(String::new(), End);
/// let _ = <Chain![i32]>::convert_from(text);
/// ```
pub trait ConvertFrom<Other>: Chain {
    /// Perform the pointwise conversion.
    fn convert_from(other: Other) -> Self;
}

impl ConvertFrom<End> for End {
    fn convert_from(_: End) -> Self {
        End
    }
}

impl<H, T, OH, OT> ConvertFrom<Link<OH, OT>> for Link<H, T>
where
    H: From<OH>,
    T: ConvertFrom<OT>,
{
    fn convert_from(other: Link<OH, OT>) -> Self {
        Link::new(H::from(other.head), T::convert_from(other.tail))
    }
}

/// The zero-argument starting point for building a tuple from a left-to-right sequence of values.
///
/// Use the shared [`ACCU`] constant rather than constructing this directly.
///
/// # Examples
///
/// ```
/// use catena::ACCU;
///
/// let t = ACCU.push(1).push("two").push(3.0);
/// assert_eq!(t.size(), 3);
/// assert_eq!(*t.last(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Accumulator {
    _priv: (),
}

/// The shared accumulation starter.
pub const ACCU: Accumulator = Accumulator { _priv: () };

impl Accumulator {
    /// Start a tuple holding exactly `value`.
    pub fn push<V>(self, value: V) -> crate::Tuple<Link<V, End>> {
        crate::Tuple::new(End.push(value))
    }
}

/// Expand a flat list of element types into the equivalent [`Chain`](trait@Chain).
///
/// # Examples
///
/// ```
/// use catena::Chain;
/// use catena::chain::{End, Link};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Chain![], End);
/// assert_type_eq_all!(Chain![i32, String], Link<i32, Link<String, End>>);
/// ```
#[macro_export]
macro_rules! Chain {
    () => { $crate::chain::End };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::chain::Link<$head, $crate::Chain![$($tail),*]>
    };
}

mod sealed {
    use super::*;

    pub trait Chain {}
    impl Chain for End {}
    impl<H, T: Chain> Chain for Link<H, T> {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unary::UnaryOf;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    type Three = crate::Chain![i32, String, f64];

    assert_type_eq_all!(<Three as Chain>::Length, UnaryOf<3>);
    assert_type_eq_all!(<Three as Last>::Link, Link<f64, End>);
    assert_type_eq_all!(<Three as Lookup<UnaryOf<1>>>::Output, String);
    assert_impl_all!(Three: Select<UnaryOf<2>>, Lookup<UnaryOf<2>>, Pop);
    assert_not_impl_any!(Three: Lookup<UnaryOf<3>>, Select<UnaryOf<3>>);
    assert_not_impl_any!(End: Pop, Last, Lookup<Z>);
    assert_impl_all!(crate::Chain![i64, String]: ConvertFrom<crate::Chain![i32, &'static str]>);
    assert_not_impl_any!(crate::Chain![i32]: ConvertFrom<crate::Chain![String]>, ConvertFrom<crate::Chain![i64]>);

    fn three() -> Three {
        Link::new(1, Link::new("two".to_string(), Link::new(3.0, End)))
    }

    #[test]
    fn size_counts_links() {
        assert_eq!(End::SIZE, 0);
        assert_eq!(Three::SIZE, 3);
    }

    #[test]
    fn lookup_reaches_each_slot() {
        let mut record = three();
        assert_eq!(*Lookup::<Z>::lookup(&record), 1);
        assert_eq!(Lookup::<UnaryOf<1>>::lookup(&record), "two");
        *Lookup::<UnaryOf<2>>::lookup_mut(&mut record) = 4.5;
        assert_eq!(*record.last(), 4.5);
    }

    #[test]
    fn select_returns_suffix() {
        let record = three();
        let suffix = Select::<UnaryOf<1>>::select(&record);
        assert_eq!(suffix.head(), "two");
        assert_eq!(suffix.tail().head(), &3.0);
    }

    #[test]
    fn push_then_pop_restores_record() {
        let record = three().push('x');
        assert_eq!(<crate::Chain![i32, String, f64, char]>::SIZE, 4);
        assert_eq!(*record.last(), 'x');

        let (record, popped) = record.pop();
        assert_eq!(popped, 'x');
        assert_eq!(*record.last(), 3.0);
    }

    #[test]
    fn default_initializes_every_slot() {
        let record = Three::default();
        assert_eq!(*record.head(), 0);
        assert_eq!(record.tail().head(), "");
        assert_eq!(*record.last(), 0.0);
    }

    #[test]
    fn convert_from_widens_pointwise() {
        let narrow: crate::Chain![i32, &str] = Link::new(-3, Link::new("x", End));
        let wide = <crate::Chain![i64, String]>::convert_from(narrow);
        assert_eq!(*wide.head(), -3i64);
        assert_eq!(wide.tail().head(), "x");
    }
}
