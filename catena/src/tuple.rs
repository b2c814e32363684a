//! The [`Tuple`](struct@Tuple) façade, and conversions back and forth between native Rust tuples and their
//! corresponding chains.
//!
//! Internally, this library uses inductive type-level lists, but presents an external interface in
//! terms of flat tuples, for readability. The [`Native`] and [`Nested`] traits convert between the
//! two equivalent representations.
//!
//! With the `tuples` feature (on by default), native tuples up to size 32 are supported.

use std::cmp::Ordering;
use std::fmt::{self, Display};

use crate::accessor::Accessor;
use crate::chain::{Chain, ConvertFrom, Last, Lookup, Pop, Push};
use crate::compare::{self, ChainEq, ChainOrd};
use crate::convert::{Converter, Slots};
use crate::cursor::{Collector, Distributor};
use crate::iter::Cursor;
use crate::text::Textual;
use crate::unary::{LessThan, Number, ToUnary, UnaryOf, Z};
use crate::visit::{self, Accept, AcceptMut, Joiner};

/// Convert a native tuple into its corresponding chain.
pub trait Native: Sized {
    /// The corresponding chain.
    type AsChain: Chain + Nested<AsNative = Self>;

    /// Move the tuple's values into a record of the corresponding chain.
    fn into_chain(self) -> Self::AsChain;
}

/// Convert a chain into its corresponding native tuple.
pub trait Nested: Chain {
    /// The corresponding native tuple.
    type AsNative: Native<AsChain = Self>;

    /// Move the record's values out into a native tuple.
    fn into_native(self) -> Self::AsNative;
}

#[cfg(feature = "tuples")]
catena_macro::impl_tuples!(32);

/// A fixed-arity heterogeneous tuple, storing one value for each element type of the chain `R`.
///
/// Most operations are checked at compile time against the chain: positions passed to
/// [`get`](Tuple::get) and its relatives must be in range, and the values fed to a
/// [`collector`](Tuple::collector) must fit the slots they land in. The runtime-indexed operations
/// ([`get_as`](Tuple::get_as), [`iter`](Tuple::iter), [`join`](Tuple::join)) instead convert each
/// element through its [`Textual`] form.
///
/// # Examples
///
/// ```
/// use catena::Tuple;
///
/// let mut t: Tuple![i32, String, f64] = Tuple::from((42, "foo".to_string(), 47.11));
///
/// assert_eq!(*t.get::<0>(), 42);
/// t.set::<1>("bar".to_string());
/// assert_eq!(t.get_as::<f64>(0), 42.0);
/// assert_eq!(t.get_as::<String>(2), "47.11");
/// assert_eq!(t.join(" | "), "42 | bar | 47.11");
/// assert_eq!(t.to_string(), "(42, bar, 47.11)");
/// ```
///
/// Positions outside the tuple are rejected at compile time:
///
/// ```compile_fail
/// use catena::Tuple;
///
/// let t: Tuple![i32, String] = Tuple::default();
/// let _ = t.get::<2>();
/// ```
#[derive(Debug, Clone, Copy, Default, Hash)]
pub struct Tuple<R> {
    record: R,
}

impl<R: Chain> From<R> for Tuple<R> {
    fn from(record: R) -> Self {
        Tuple::new(record)
    }
}

impl<R: Chain> Tuple<R> {
    /// The number of elements.
    pub const SIZE: usize = R::SIZE;

    /// Wrap a record.
    pub fn new(record: R) -> Self {
        Tuple { record }
    }

    /// Construct a tuple from another of the same length whose elements convert pointwise into
    /// this tuple's element types.
    ///
    /// # Examples
    ///
    /// ```
    /// use catena::Tuple;
    ///
    /// let narrow: Tuple![i32, &str] = Tuple::from((7, "seven"));
    /// let wide = <Tuple![i64, String]>::from_compatible(narrow);
    /// assert_eq!(wide.into_native(), (7i64, "seven".to_string()));
    /// ```
    ///
    /// Narrowing conversions are not pointwise `From`, so they are rejected:
    ///
    /// ```compile_fail
    /// use catena::Tuple;
    ///
    /// let wide: Tuple![i64] = Tuple::from((1i64,));
    /// let _ = <Tuple![u8]>::from_compatible(wide);
    /// ```
    pub fn from_compatible<O>(other: Tuple<O>) -> Self
    where
        R: ConvertFrom<O>,
    {
        Tuple::new(R::convert_from(other.record))
    }

    /// Convert this tuple pointwise into a compatible one of the same length.
    pub fn into_compatible<O>(self) -> Tuple<O>
    where
        O: ConvertFrom<R>,
    {
        Tuple::from_compatible(self)
    }

    /// The number of elements.
    pub fn size(&self) -> usize {
        R::SIZE
    }

    /// The underlying record.
    pub fn record(&self) -> &R {
        &self.record
    }

    /// Mutable access to the underlying record.
    pub fn record_mut(&mut self) -> &mut R {
        &mut self.record
    }

    /// Unwrap the underlying record.
    pub fn into_record(self) -> R {
        self.record
    }

    /// Move the values out into a native tuple.
    pub fn into_native(self) -> R::AsNative
    where
        R: Nested,
    {
        self.record.into_native()
    }

    /// A reference to the element at compile-time position `C`.
    pub fn get<const C: usize>(&self) -> &<R as Lookup<UnaryOf<C>>>::Output
    where
        Number<C>: ToUnary,
        R: Lookup<UnaryOf<C>>,
        UnaryOf<C>: LessThan<R::Length>,
    {
        self.record.lookup()
    }

    /// A mutable reference to the element at compile-time position `C`.
    pub fn get_mut<const C: usize>(&mut self) -> &mut <R as Lookup<UnaryOf<C>>>::Output
    where
        Number<C>: ToUnary,
        R: Lookup<UnaryOf<C>>,
        UnaryOf<C>: LessThan<R::Length>,
    {
        self.record.lookup_mut()
    }

    /// Replace the element at compile-time position `C` with `value`.
    pub fn set<const C: usize>(&mut self, value: <R as Lookup<UnaryOf<C>>>::Output) -> &mut Self
    where
        Number<C>: ToUnary,
        R: Lookup<UnaryOf<C>>,
        UnaryOf<C>: LessThan<R::Length>,
    {
        *self.record.lookup_mut() = value;
        self
    }

    /// A reusable view of the element at compile-time position `C`.
    pub fn accessor<const C: usize>(&mut self) -> Accessor<'_, R, UnaryOf<C>>
    where
        Number<C>: ToUnary,
        R: Lookup<UnaryOf<C>>,
        UnaryOf<C>: LessThan<R::Length>,
    {
        Accessor::new(&mut self.record)
    }

    /// The element at runtime position `index`, converted to an `O`.
    ///
    /// An `index` past the end, or an element whose text does not read back as an `O`, yields
    /// `O::default()`.
    pub fn get_as<O>(&self, index: usize) -> O
    where
        R: Slots<R, O, Z> + 'static,
        O: Textual + Default + Clone + 'static,
    {
        Converter::<R, O>::get(&self.record, index)
    }

    /// The first element.
    pub fn first(&self) -> &<R as Lookup<Z>>::Output
    where
        R: Lookup<Z>,
    {
        self.record.lookup()
    }

    /// Mutable access to the first element.
    pub fn first_mut(&mut self) -> &mut <R as Lookup<Z>>::Output
    where
        R: Lookup<Z>,
    {
        self.record.lookup_mut()
    }

    /// The last element.
    pub fn last(&self) -> &R::Output
    where
        R: Last,
    {
        self.record.last()
    }

    /// Mutable access to the last element.
    pub fn last_mut(&mut self) -> &mut R::Output
    where
        R: Last,
    {
        self.record.last_mut()
    }

    /// A cursor at the first element, presenting every element as an `O`.
    pub fn begin<O>(&self) -> Cursor<'_, R, O>
    where
        R: Slots<R, O, Z> + 'static,
        O: Textual + Default + Clone + 'static,
    {
        Cursor::begin(&self.record)
    }

    /// A cursor one past the last element, matching [`begin`](Tuple::begin).
    pub fn end<O>(&self) -> Cursor<'_, R, O>
    where
        R: Slots<R, O, Z> + 'static,
        O: Textual + Default + Clone + 'static,
    {
        Cursor::end(&self.record)
    }

    /// Iterate over every element, converted to an `O`.
    pub fn iter<O>(&self) -> Cursor<'_, R, O>
    where
        R: Slots<R, O, Z> + 'static,
        O: Textual + Default + Clone + 'static,
    {
        self.begin()
    }

    /// Start assigning values into successive positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use catena::Tuple;
    ///
    /// let mut t: Tuple![u8, String] = Tuple::default();
    /// t.collector().put(7u8).put("seven");
    /// assert_eq!(t.into_native(), (7, "seven".to_string()));
    /// ```
    pub fn collector(&mut self) -> Collector<'_, R, R, Z> {
        Collector::new(&mut self.record)
    }

    /// Start copying successive positions out into destinations.
    pub fn distributor(&self) -> Distributor<'_, R, R, Z> {
        Distributor::new(&self.record)
    }

    /// Visit every element left to right, then return the visitor.
    pub fn accept<V>(&self, visitor: V) -> V
    where
        R: Accept<V>,
    {
        visit::accept(&self.record, visitor)
    }

    /// Visit every element left to right, possibly modifying each, then return the visitor.
    pub fn accept_mut<V>(&mut self, visitor: V) -> V
    where
        R: AcceptMut<V>,
    {
        visit::accept_mut(&mut self.record, visitor)
    }

    /// Write every element as text, placing `separator` before each element but the first.
    pub fn join(&self, separator: &str) -> String
    where
        R: Accept<Joiner>,
    {
        self.accept(Joiner::new(separator)).into_string()
    }

    /// Append `value`, producing a tuple one element longer.
    pub fn push<V>(self, value: V) -> Tuple<R::Output>
    where
        R: Push<V>,
    {
        Tuple::new(self.record.push(value))
    }

    /// Split off the last element, producing a tuple one element shorter.
    pub fn pop(self) -> (Tuple<R::Output>, R::Popped)
    where
        R: Pop,
    {
        let (record, popped) = self.record.pop();
        (Tuple::new(record), popped)
    }
}

impl<R> Display for Tuple<R>
where
    R: Chain + Accept<Joiner>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.join(", "))
    }
}

impl<R, O> PartialEq<Tuple<O>> for Tuple<R>
where
    R: ChainEq<O>,
{
    fn eq(&self, other: &Tuple<O>) -> bool {
        self.record.chain_eq(&other.record)
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Tuple<O>) -> bool {
        self.record.chain_ne(&other.record)
    }
}

impl<R, O> PartialOrd<Tuple<O>> for Tuple<R>
where
    R: ChainEq<O> + ChainOrd<O>,
{
    fn partial_cmp(&self, other: &Tuple<O>) -> Option<Ordering> {
        compare::partial_cmp(&self.record, &other.record)
    }

    fn lt(&self, other: &Tuple<O>) -> bool {
        self.record.chain_lt(&other.record)
    }

    fn gt(&self, other: &Tuple<O>) -> bool {
        self.record.chain_gt(&other.record)
    }

    fn le(&self, other: &Tuple<O>) -> bool {
        self.record.chain_le(&other.record)
    }

    fn ge(&self, other: &Tuple<O>) -> bool {
        self.record.chain_ge(&other.record)
    }
}

/// Name the [`Tuple`](struct@Tuple) type holding a flat list of element types.
///
/// # Examples
///
/// ```
/// use catena::{Chain, Tuple};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Tuple![i32, String], Tuple<Chain![i32, String]>);
/// assert_type_eq_all!(Tuple![], Tuple<catena::chain::End>);
/// ```
#[macro_export]
macro_rules! Tuple {
    ($($t:ty),* $(,)?) => {
        $crate::Tuple<$crate::Chain![$($t),*]>
    };
}
