//! Iterating over every position of a record as a single output type.

use std::iter::FusedIterator;
use std::mem;
use std::ptr;

use crate::chain::Chain;
use crate::convert::{Converter, Slots};
use crate::text::Textual;
use crate::unary::Z;

/// A forward-only cursor over the positions of one record, presenting each element as an `O`.
///
/// A cursor is positioned at an index in `0..=R::SIZE` and holds the converted value at that
/// index; the position `R::SIZE` is one past the end and marks exhaustion. Two cursors are equal
/// when they refer to the same record instance at the same position, so a
/// [`begin`](crate::Tuple::begin)/[`end`](crate::Tuple::end) pair delimits the whole record.
///
/// Cursors also implement [`Iterator`], yielding each remaining converted element once. A cursor
/// cannot be rewound; make a new one to iterate again.
///
/// # Examples
///
/// ```
/// use catena::Tuple;
///
/// let t = Tuple::<catena::Chain![i32, String, f64]>::from((1, "2".to_string(), 3.4));
/// let items: Vec<String> = t.iter::<String>().collect();
/// assert_eq!(items, ["1", "2", "3.4"]);
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = "R: std::fmt::Debug, O: std::fmt::Debug"))]
pub struct Cursor<'a, R, O> {
    record: &'a R,
    position: usize,
    current: O,
}

impl<'a, R, O> Cursor<'a, R, O>
where
    R: Chain + Slots<R, O, Z> + 'static,
    O: Textual + Default + Clone + 'static,
{
    /// A cursor at `position`, which is clamped to one past the end of the record.
    pub fn at(record: &'a R, position: usize) -> Self {
        let position = position.min(R::SIZE);
        Cursor {
            record,
            position,
            current: Self::convert_at(record, position),
        }
    }

    fn convert_at(record: &R, position: usize) -> O {
        if position < R::SIZE {
            Converter::<R, O>::get(record, position)
        } else {
            O::default()
        }
    }

    /// A cursor at the first position of `record`.
    pub fn begin(record: &'a R) -> Self {
        Self::at(record, 0)
    }

    /// A cursor one past the last position of `record`.
    pub fn end(record: &'a R) -> Self {
        Self::at(record, R::SIZE)
    }

    /// The converted element at the current position.
    ///
    /// An exhausted cursor holds `O::default()`.
    pub fn current(&self) -> &O {
        &self.current
    }

    /// The current position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the cursor is one past the last position.
    pub fn is_exhausted(&self) -> bool {
        self.position >= R::SIZE
    }

    /// Move to the next position, converting the element found there.
    ///
    /// Advancing an exhausted cursor leaves it exhausted.
    pub fn advance(&mut self) {
        if !self.is_exhausted() {
            self.position += 1;
            self.current = Self::convert_at(self.record, self.position);
        }
    }
}

/// Cursors are equal when they point into the same record, by address, at the same position.
///
/// Zero-sized records such as [`End`](crate::chain::End) may share an address, so cursors over
/// two distinct empty records can compare equal.
impl<'a, R, O> PartialEq for Cursor<'a, R, O> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.record, other.record) && self.position == other.position
    }
}

impl<'a, R, O> Eq for Cursor<'a, R, O> {}

impl<'a, R, O> Iterator for Cursor<'a, R, O>
where
    R: Chain + Slots<R, O, Z> + 'static,
    O: Textual + Default + Clone + 'static,
{
    type Item = O;

    fn next(&mut self) -> Option<O> {
        if self.is_exhausted() {
            return None;
        }
        self.position += 1;
        let next = Self::convert_at(self.record, self.position);
        Some(mem::replace(&mut self.current, next))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = R::SIZE - self.position;
        (remaining, Some(remaining))
    }
}

impl<'a, R, O> ExactSizeIterator for Cursor<'a, R, O>
where
    R: Chain + Slots<R, O, Z> + 'static,
    O: Textual + Default + Clone + 'static,
{
}

impl<'a, R, O> FusedIterator for Cursor<'a, R, O>
where
    R: Chain + Slots<R, O, Z> + 'static,
    O: Textual + Default + Clone + 'static,
{
}
