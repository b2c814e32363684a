//! Filling and draining a record positionally through a chain of method calls.
//!
//! A [`Collector`] assigns one value per call into successive positions of a record; a
//! [`Distributor`] copies one position per call out into successive destinations. Either accepts
//! the [`NA`] marker in place of a value or destination to skip a position.
//!
//! Both cursors carry the unvisited suffix of the record's chain in their type, and each step
//! returns a cursor over one fewer link. Once the suffix is [`End`](crate::chain::End), no
//! further step exists, so supplying more values than the record has positions is a compile-time
//! error:
//!
//! ```compile_fail
//! use catena::Tuple;
//!
//! let mut t = Tuple::<catena::Chain![i32]>::default();
//! t.collector().put(1).put(2);
//! ```
//!
//! and so is supplying more destinations:
//!
//! ```compile_fail
//! use catena::Tuple;
//!
//! let t = Tuple::<catena::Chain![i32]>::default();
//! let (mut a, mut b) = (0i32, 0i32);
//! t.distributor().take(&mut a).take(&mut b);
//! ```

use std::marker::PhantomData;

use static_assertions::assert_eq_size;

use crate::chain::{Link, Lookup};
use crate::unary::{Unary, S, Z};

/// The marker meaning "skip this position" when filling or draining a record.
///
/// Use the shared [`NA`] constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ignore;

assert_eq_size!(Ignore, ());

/// The shared skip marker.
pub const NA: Ignore = Ignore;

/// How a value or destination is applied to a slot: by conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Assigned {}

/// How a value or destination is applied to a slot: not at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Skipped {}

/// A value which can be written into a slot of type `H`.
///
/// The `How` parameter is inferred, and only exists to keep the conversion and skip impls apart.
pub trait Fill<H, How> {
    /// Write into the slot.
    fn fill(self, slot: &mut H);
}

impl<H: From<V>, V> Fill<H, Assigned> for V {
    fn fill(self, slot: &mut H) {
        *slot = H::from(self);
    }
}

impl<H> Fill<H, Skipped> for Ignore {
    fn fill(self, _: &mut H) {}
}

/// A destination which can receive a copy of a slot of type `H`.
///
/// The `How` parameter is inferred, and only exists to keep the conversion and skip impls apart.
pub trait Drain<H, How> {
    /// Copy out of the slot.
    fn drain(self, slot: &H);
}

impl<'b, H: Clone, V: From<H>> Drain<H, Assigned> for &'b mut V {
    fn drain(self, slot: &H) {
        *self = V::from(slot.clone());
    }
}

impl<H> Drain<H, Skipped> for Ignore {
    fn drain(self, _: &H) {}
}

/// Assigns values into successive positions of a record `R`.
///
/// `Rest` is the part of the chain not yet filled and `N` is the current position.
///
/// # Examples
///
/// ```
/// use catena::{Tuple, NA};
///
/// let mut t = Tuple::<catena::Chain![i32, String, f64]>::default();
/// t.collector().put(42).put("foo").put(47.11);
/// assert_eq!(t.get::<1>(), "foo");
///
/// t.collector().put(7).put(NA).put(1.5);
/// assert_eq!(t.into_native(), (7, "foo".to_string(), 1.5));
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = "R: std::fmt::Debug"))]
pub struct Collector<'a, R, Rest, N> {
    record: &'a mut R,
    #[derivative(Debug = "ignore")]
    rest: PhantomData<fn() -> (Rest, N)>,
}

impl<'a, R> Collector<'a, R, R, Z> {
    /// A collector at the first position of `record`.
    pub fn new(record: &'a mut R) -> Self {
        Collector {
            record,
            rest: PhantomData,
        }
    }
}

impl<'a, R, Rest, N: Unary> Collector<'a, R, Rest, N> {
    /// The position the next value will be written to.
    pub fn position(&self) -> usize {
        N::VALUE
    }

    /// Stop filling, handing back the record. Positions not yet reached keep their values.
    pub fn finish(self) -> &'a mut R {
        self.record
    }
}

impl<'a, R, H, T, N> Collector<'a, R, Link<H, T>, N>
where
    R: Lookup<N, Output = H>,
{
    /// Assign `value` (converted into the slot's type) to the current position and move on, or
    /// skip the position if `value` is [`NA`].
    pub fn put<V, How>(self, value: V) -> Collector<'a, R, T, S<N>>
    where
        V: Fill<H, How>,
    {
        value.fill(self.record.lookup_mut());
        self.advance()
    }

    /// Leave the current position untouched and move on.
    pub fn skip(self) -> Collector<'a, R, T, S<N>> {
        self.advance()
    }

    fn advance(self) -> Collector<'a, R, T, S<N>> {
        Collector {
            record: self.record,
            rest: PhantomData,
        }
    }
}

/// Copies successive positions of a record `R` out into destinations.
///
/// `Rest` is the part of the chain not yet read and `N` is the current position.
///
/// # Examples
///
/// ```
/// use catena::{Tuple, NA};
///
/// let t = Tuple::<catena::Chain![i32, String, f64]>::from((42, "foo".to_string(), 47.11));
///
/// let (mut i, mut s, mut d) = (0i64, String::new(), 0.0f64);
/// t.distributor().take(&mut i).take(&mut s).take(&mut d);
/// assert_eq!((i, s.as_str(), d), (42, "foo", 47.11));
///
/// let mut z = 0.0f64;
/// t.distributor().take(NA).take(NA).take(&mut z);
/// assert_eq!(z, 47.11);
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = "R: std::fmt::Debug"))]
pub struct Distributor<'a, R, Rest, N> {
    record: &'a R,
    #[derivative(Debug = "ignore")]
    rest: PhantomData<fn() -> (Rest, N)>,
}

impl<'a, R> Distributor<'a, R, R, Z> {
    /// A distributor at the first position of `record`.
    pub fn new(record: &'a R) -> Self {
        Distributor {
            record,
            rest: PhantomData,
        }
    }
}

impl<'a, R, Rest, N: Unary> Distributor<'a, R, Rest, N> {
    /// The position the next destination will be copied from.
    pub fn position(&self) -> usize {
        N::VALUE
    }

    /// Stop reading, handing back the record.
    pub fn finish(self) -> &'a R {
        self.record
    }
}

impl<'a, R, H, T, N> Distributor<'a, R, Link<H, T>, N>
where
    R: Lookup<N, Output = H>,
{
    /// Copy the current position (converted into the destination's type) into `destination` and
    /// move on, or skip the position if `destination` is [`NA`].
    pub fn take<D, How>(self, destination: D) -> Distributor<'a, R, T, S<N>>
    where
        D: Drain<H, How>,
    {
        destination.drain(self.record.lookup());
        self.advance()
    }

    /// Leave the current position unread and move on.
    pub fn skip(self) -> Distributor<'a, R, T, S<N>> {
        self.advance()
    }

    fn advance(self) -> Distributor<'a, R, T, S<N>> {
        Distributor {
            record: self.record,
            rest: PhantomData,
        }
    }
}
