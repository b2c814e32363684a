//! Runtime-indexed access to a record, converting the selected element to a single output type.
//!
//! Positions are only known at runtime here, so each (record type, output type) pair gets a
//! dispatch table: one function per position, each reading its fixed slot and converting it. The
//! table is built the first time the pair is used and then shared by every record of that type
//! for the rest of the process.
//!
//! # Concurrency
//!
//! This registry is the only shared mutable state in the crate. Tables are looked up under a read
//! lock; on a miss the write lock is taken and the table is inserted through the map's entry API,
//! so concurrent first uses of the same pair build exactly one table and all observe it.
//!
//! # Parsing
//!
//! The textual form of an element must parse completely as the output type. Text that only
//! begins like one, such as `"34.56"` read as an integer, yields the default rather than its
//! leading numeric prefix:
//!
//! ```
//! use catena::Tuple;
//!
//! let t = Tuple::<catena::Chain![i32, String, f64]>::from((12, "34.56".to_string(), 78.9));
//! let ints: Vec<i32> = t.iter().collect();
//! assert_eq!(ints, [12, 0, 0]);
//! ```

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::chain::{Chain, End, Link, Lookup};
use crate::text::Textual;
use crate::unary::{S, Z};

/// A function reading and converting the element at one fixed position of a record `R`.
pub type SlotFn<R, O> = fn(&R) -> O;

type Registry = RwLock<HashMap<(TypeId, TypeId), &'static (dyn Any + Send + Sync)>>;

fn registry() -> &'static Registry {
    static TABLES: OnceLock<Registry> = OnceLock::new();
    TABLES.get_or_init(Default::default)
}

/// Whether the table for the pair `(R, O)` has been built yet.
#[cfg(test)]
pub(crate) fn is_built<R: 'static, O: 'static>() -> bool {
    registry()
        .read()
        .contains_key(&(TypeId::of::<R>(), TypeId::of::<O>()))
}

/// Read the element at position `N` of `record` as an `O`.
///
/// If the element already is an `O` it is cloned out unchanged; otherwise it is written as text
/// and read back as an `O`, falling back to `O::default()` when the text does not parse.
fn convert_slot<R, N, O>(record: &R) -> O
where
    R: Lookup<N>,
    R::Output: Textual + 'static,
    O: Textual + Default + Clone + 'static,
{
    let value = record.lookup();
    if let Some(same) = (value as &dyn Any).downcast_ref::<O>() {
        return same.clone();
    }
    O::parse_text(&value.to_text()).unwrap_or_else(|error| {
        log::trace!("{}; using the default value", error);
        O::default()
    })
}

/// Fill a dispatch table for the record `R`, one entry per remaining position starting at `N`.
///
/// Implemented by walking the suffix of the chain which begins at position `N`.
pub trait Slots<R, O, N> {
    /// Append the entries for this suffix to `table`, in position order.
    fn fill(table: &mut Vec<SlotFn<R, O>>);
}

impl<R, O, N> Slots<R, O, N> for End {
    fn fill(_: &mut Vec<SlotFn<R, O>>) {}
}

impl<R, O, N, H, T> Slots<R, O, N> for Link<H, T>
where
    R: Lookup<N, Output = H>,
    H: Textual + 'static,
    O: Textual + Default + Clone + 'static,
    T: Slots<R, O, S<N>>,
{
    fn fill(table: &mut Vec<SlotFn<R, O>>) {
        table.push(convert_slot::<R, N, O>);
        T::fill(table);
    }
}

/// Runtime-indexed, type-converting access to records of type `R`, producing `O`s.
///
/// # Examples
///
/// ```
/// use catena::convert::Converter;
/// use catena::Tuple;
///
/// let t = Tuple::<catena::Chain![i32, String, f64]>::from((12, "34.56".to_string(), 78.9));
///
/// assert_eq!(Converter::<_, f64>::get(t.record(), 1), 34.56);
/// assert_eq!(Converter::<_, String>::get(t.record(), 2), "78.9");
/// assert_eq!(Converter::<_, i32>::get(t.record(), 3), 0);
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""))]
pub struct Converter<R, O> {
    #[derivative(Debug = "ignore")]
    types: PhantomData<fn(&R) -> O>,
}

impl<R, O> Converter<R, O>
where
    R: Chain + Slots<R, O, Z> + 'static,
    O: Textual + Default + Clone + 'static,
{
    /// The element at `index` converted to an `O`, or `O::default()` if `index` is not a
    /// position of the record.
    pub fn get(record: &R, index: usize) -> O {
        match Self::table().get(index) {
            Some(convert) => convert(record),
            None => {
                log::trace!(
                    "index {} is outside a record of size {}; using the default value",
                    index,
                    R::SIZE,
                );
                O::default()
            }
        }
    }

    /// The dispatch table for this pair, building it if this is the first use in the process.
    pub fn table() -> &'static [SlotFn<R, O>] {
        let key = (TypeId::of::<R>(), TypeId::of::<O>());

        let cached = registry().read().get(&key).copied();
        let erased = match cached {
            Some(table) => table,
            None => *registry().write().entry(key).or_insert_with(|| {
                let mut table = Vec::with_capacity(R::SIZE);
                <R as Slots<R, O, Z>>::fill(&mut table);
                log::debug!(
                    "built {}-entry conversion table from `{}` to `{}`",
                    table.len(),
                    type_name::<R>(),
                    type_name::<O>(),
                );
                let table: &'static (dyn Any + Send + Sync) = Box::leak(Box::new(table));
                table
            }),
        };

        erased
            .downcast_ref::<Vec<SlotFn<R, O>>>()
            .expect("conversion tables are keyed by their own record and output types")
    }
}
