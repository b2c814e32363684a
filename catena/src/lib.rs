/*!
> **catena (noun):** A chain, or a connected series of things.
>
> **catena (crate):** Fixed-arity heterogeneous tuples built from inductive type-level chains.

A [`Tuple`](struct@Tuple) bundles a statically known, ordered sequence of differently-typed values into one
value. Underneath, every tuple is a [`Chain`](chain::Chain): a type-level list like
`Link<i32, Link<String, Link<f64, End>>>` which doubles as the record holding one value per
element. Every operation is written once, recursively over the chain, so it works at any arity.

What you can do with a tuple:

- **Positional access checked at compile time**, with [`get`](Tuple::get),
  [`set`](Tuple::set), [`first`](Tuple::first), [`last`](Tuple::last) and
  [`accessor`](Tuple::accessor). A position out of range does not compile.
- **Runtime-indexed access** with [`get_as`](Tuple::get_as), converting whichever element is
  selected into one requested type through its [`Textual`](text::Textual) form.
- **Iteration** over every element as one type, with [`iter`](Tuple::iter) or a
  [`begin`](Tuple::begin)/[`end`](Tuple::end) cursor pair.
- **Structural comparison** against any other tuple whose positions are comparable, using all of
  `==`, `!=`, `<`, `>`, `<=` and `>=` lexicographically.
- **Building** a tuple from a left-to-right sequence of values starting at [`ACCU`], and
  **filling** or **draining** an existing one positionally with a
  [`collector`](Tuple::collector) or [`distributor`](Tuple::distributor), skipping positions with
  [`NA`].
- **Visiting** every element with [`accept`](Tuple::accept), and joining the elements into text
  with [`join`](Tuple::join).

## Quick reference

```
use catena::{Tuple, ACCU, NA};

// Construct from a native tuple, or by accumulation:
let t: Tuple![i32, String, f64] = Tuple::from((42, "foo".to_string(), 47.11));
let u = ACCU.push(42).push("foo".to_string()).push(47.11);
assert!(t == u);

// Compile-time positions:
assert_eq!(t.get::<1>(), "foo");

// Runtime positions, converting each element:
assert_eq!(t.get_as::<f64>(0), 42.0);
assert_eq!(t.get_as::<String>(2), "47.11");
assert_eq!(t.get_as::<i32>(9), 0);

// Iteration and joining:
let items: Vec<String> = t.iter::<String>().collect();
assert_eq!(items, ["42", "foo", "47.11"]);
assert_eq!(t.join(", "), "42, foo, 47.11");

// Destructuring, skipping the middle position:
let (mut i, mut d) = (0i64, 0.0f64);
t.distributor().take(&mut i).take(NA).take(&mut d);
assert_eq!((i, d), (42, 47.11));
```
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

pub mod accessor;
pub mod chain;
pub mod compare;
pub mod convert;
pub mod cursor;
pub mod iter;
pub mod text;
pub mod tuple;
pub mod unary;
pub mod visit;

pub use chain::{Accumulator, ACCU};
pub use cursor::{Ignore, NA};
pub use tuple::Tuple;

/// The prelude module for quickly getting started with Catena.
///
/// This module is designed to be imported as `use catena::prelude::*;`, which brings into scope
/// the tuple type, its macros, the traits its operations are bounded by, and the shared
/// [`ACCU`] and [`NA`] constants.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::chain::{Chain as _, ConvertFrom, Last, Lookup, Pop, Push};
    #[doc(no_inline)]
    pub use crate::text::Textual;
    #[doc(no_inline)]
    pub use crate::tuple::{Native, Nested};
    #[doc(no_inline)]
    pub use crate::visit::{Accept, AcceptMut, Visit, VisitMut};
    #[doc(no_inline)]
    pub use crate::{Chain, Tuple, ACCU, NA};
}
