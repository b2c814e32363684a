//! A handle bound to one fixed position of a record.

use std::marker::PhantomData;

use crate::chain::Lookup;
use crate::unary::Unary;

/// A reusable reference to the element at position `N` of a record `R`, supporting repeated reads
/// and writes of that one slot.
///
/// # Examples
///
/// ```
/// use catena::Tuple;
///
/// let mut t = Tuple::<catena::Chain![i32, String]>::default();
/// let mut name = t.accessor::<1>();
/// name.write("first".to_string()).write("second".to_string());
/// assert_eq!(name.as_str(), "second");
/// assert_eq!(t.get::<1>(), "second");
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = "R: std::fmt::Debug"))]
pub struct Accessor<'a, R, N> {
    record: &'a mut R,
    #[derivative(Debug = "ignore")]
    position: PhantomData<fn() -> N>,
}

impl<'a, R, N> Accessor<'a, R, N>
where
    R: Lookup<N>,
{
    /// An accessor for position `N` of `record`.
    pub fn new(record: &'a mut R) -> Self {
        Accessor {
            record,
            position: PhantomData,
        }
    }

    /// The position this accessor is bound to.
    pub fn position(&self) -> usize
    where
        N: Unary,
    {
        N::VALUE
    }

    /// A reference to the element.
    pub fn read(&self) -> &R::Output {
        self.record.lookup()
    }

    /// A copy of the element.
    pub fn get(&self) -> R::Output
    where
        R::Output: Clone,
    {
        self.read().clone()
    }

    /// Replace the element, returning the accessor so writes can be chained.
    pub fn write(&mut self, value: R::Output) -> &mut Self {
        *self.record.lookup_mut() = value;
        self
    }

    /// A mutable reference to the element.
    pub fn as_mut(&mut self) -> &mut R::Output {
        self.record.lookup_mut()
    }
}

impl<'a, R, N> Accessor<'a, R, N>
where
    R: Lookup<N, Output = String>,
{
    /// The element, when it is a string.
    pub fn as_str(&self) -> &str {
        self.read()
    }
}
