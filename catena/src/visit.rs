//! Applying a per-element operation to every position of a record, in order.
//!
//! A visitor implements [`Visit<T>`] (or [`VisitMut<T>`]) for every element type `T` it can
//! handle, so one visitor value can process a heterogeneous record. Visiting hands the visitor
//! back afterwards, which lets it carry state accumulated along the way; [`Joiner`] uses this to
//! build a single string.

use crate::chain::{End, Link};
use crate::text::Textual;

/// An operation applied to an element of type `T` together with its position.
pub trait Visit<T: ?Sized> {
    /// Visit `value`, found at position `index`.
    fn visit(&mut self, value: &T, index: usize);
}

impl<T: ?Sized, V: Visit<T> + ?Sized> Visit<T> for &mut V {
    fn visit(&mut self, value: &T, index: usize) {
        (**self).visit(value, index);
    }
}

/// An operation applied to a mutable element of type `T` together with its position.
pub trait VisitMut<T: ?Sized> {
    /// Visit `value`, found at position `index`, possibly modifying it.
    fn visit_mut(&mut self, value: &mut T, index: usize);
}

impl<T: ?Sized, V: VisitMut<T> + ?Sized> VisitMut<T> for &mut V {
    fn visit_mut(&mut self, value: &mut T, index: usize) {
        (**self).visit_mut(value, index);
    }
}

/// A record whose every element can be visited by `V`.
pub trait Accept<V> {
    /// Visit every element from position `index` on.
    fn accept_from(&self, visitor: &mut V, index: usize);
}

impl<V> Accept<V> for End {
    fn accept_from(&self, _: &mut V, _: usize) {}
}

impl<V, H, T> Accept<V> for Link<H, T>
where
    V: Visit<H>,
    T: Accept<V>,
{
    fn accept_from(&self, visitor: &mut V, index: usize) {
        visitor.visit(&self.head, index);
        self.tail.accept_from(visitor, index + 1);
    }
}

/// A record whose every element can be visited mutably by `V`.
pub trait AcceptMut<V> {
    /// Visit every element from position `index` on, possibly modifying each.
    fn accept_mut_from(&mut self, visitor: &mut V, index: usize);
}

impl<V> AcceptMut<V> for End {
    fn accept_mut_from(&mut self, _: &mut V, _: usize) {}
}

impl<V, H, T> AcceptMut<V> for Link<H, T>
where
    V: VisitMut<H>,
    T: AcceptMut<V>,
{
    fn accept_mut_from(&mut self, visitor: &mut V, index: usize) {
        visitor.visit_mut(&mut self.head, index);
        self.tail.accept_mut_from(visitor, index + 1);
    }
}

/// Visit every element of `record` left to right, then return the visitor.
pub fn accept<R: Accept<V>, V>(record: &R, mut visitor: V) -> V {
    record.accept_from(&mut visitor, 0);
    visitor
}

/// Visit every element of `record` left to right, possibly modifying each, then return the
/// visitor.
pub fn accept_mut<R: AcceptMut<V>, V>(record: &mut R, mut visitor: V) -> V {
    record.accept_mut_from(&mut visitor, 0);
    visitor
}

/// A visitor which writes every element as text, placing a separator before every element but
/// the first.
///
/// # Examples
///
/// ```
/// use catena::visit::Joiner;
/// use catena::Tuple;
///
/// let t = Tuple::<catena::Chain![i32, String, f64]>::from((1, "2".to_string(), 3.4));
/// assert_eq!(t.accept(Joiner::new(", ")).into_string(), "1, 2, 3.4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Joiner {
    separator: String,
    text: String,
}

impl Joiner {
    /// A joiner placing `separator` between elements.
    pub fn new(separator: impl Into<String>) -> Self {
        Joiner {
            separator: separator.into(),
            text: String::new(),
        }
    }

    /// The text joined so far.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The joined text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl<T: Textual> Visit<T> for Joiner {
    fn visit(&mut self, value: &T, index: usize) {
        if index > 0 {
            self.text.push_str(&self.separator);
        }
        value.write_text(&mut self.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Display;

    type Mixed = crate::Chain![i32, String, f64];

    fn mixed() -> Mixed {
        Link::new(1, Link::new("2".to_string(), Link::new(3.4, End)))
    }

    #[derive(Default)]
    struct Positions(Vec<(usize, String)>);

    impl<T: Display> Visit<T> for Positions {
        fn visit(&mut self, value: &T, index: usize) {
            self.0.push((index, value.to_string()));
        }
    }

    struct Double;

    impl VisitMut<i32> for Double {
        fn visit_mut(&mut self, value: &mut i32, _: usize) {
            *value *= 2;
        }
    }

    impl VisitMut<String> for Double {
        fn visit_mut(&mut self, value: &mut String, _: usize) {
            *value = value.repeat(2);
        }
    }

    impl VisitMut<f64> for Double {
        fn visit_mut(&mut self, value: &mut f64, _: usize) {
            *value *= 2.0;
        }
    }

    #[test]
    fn visits_in_order_with_positions() {
        let Positions(seen) = accept(&mixed(), Positions::default());
        assert_eq!(
            seen,
            [
                (0, "1".to_string()),
                (1, "2".to_string()),
                (2, "3.4".to_string())
            ]
        );
    }

    #[test]
    fn visitor_by_reference_keeps_state() {
        let mut positions = Positions::default();
        let _ = accept(&mixed(), &mut positions);
        let _ = accept(&mixed(), &mut positions);
        assert_eq!(positions.0.len(), 6);
    }

    #[test]
    fn empty_record_visits_nothing() {
        let joined = accept(&End, Joiner::new(", "));
        assert_eq!(joined.as_str(), "");
    }

    #[test]
    fn joiner_separates_all_but_first() {
        assert_eq!(accept(&mixed(), Joiner::new(", ")).into_string(), "1, 2, 3.4");
        assert_eq!(accept(&mixed(), Joiner::new("")).into_string(), "123.4");
    }

    #[test]
    fn mutable_visit_modifies_in_place() {
        let mut record = mixed();
        let _ = accept_mut(&mut record, Double);
        assert_eq!(accept(&record, Joiner::new(" ")).into_string(), "2 22 6.8");
    }
}
