use catena::chain::End;
use catena::text::{format_significant, SIGNIFICANT_DIGITS};
use catena::{Tuple, ACCU, NA};

type Mixed = Tuple![i32, String, f64];
type Pair = Tuple![i32, i32];

fn pair(a: i32, b: i32) -> Pair {
    Tuple::from((a, b))
}

fn mixed(i: i32, s: &str, d: f64) -> Mixed {
    Tuple::from((i, s.to_string(), d))
}

#[test]
fn equality_is_pointwise() {
    let a = mixed(1, "x", 2.5);
    assert!(a == mixed(1, "x", 2.5));
    assert!(!(a != mixed(1, "x", 2.5)));

    for b in [mixed(0, "x", 2.5), mixed(1, "y", 2.5), mixed(1, "x", 2.0)] {
        assert!(a != b);
        assert!(!(a == b));
    }
}

#[test]
fn nan_positions_are_unequal() {
    let a: Tuple![f64] = Tuple::from((f64::NAN,));
    assert!(!(a == a));
    assert!(a != a);
}

#[test]
fn terminator_truth_table() {
    let empty = Tuple::<End>::default();
    let nonempty: Tuple![i32] = Tuple::from((1,));

    assert!(!(nonempty < empty));
    assert!(empty < nonempty);
    assert!(!(empty < empty));

    assert!(nonempty > empty);
    assert!(!(empty > nonempty));
    assert!(!(empty > empty));

    assert!(empty <= empty);
    assert!(empty >= empty);
    assert!(empty == empty);
    assert!(!(empty != empty));
}

#[test]
fn lexicographic_ordering() {
    assert!(pair(1, 2) < pair(1, 3));
    assert!(!(pair(2, 1) < pair(1, 9)));
    assert!(pair(2, 1) > pair(1, 9));
    assert!(pair(4, 4) <= pair(4, 4));
    assert!(pair(4, 4) >= pair(4, 4));
    assert!(!(pair(4, 4) > pair(4, 4)));
}

#[test]
fn accumulate_then_distribute_round_trip() {
    let t = ACCU.push(42).push("foo".to_string()).push(47.11);
    assert_eq!(t.size(), 3);

    let (mut i, mut s, mut d) = (0i32, String::new(), 0.0f64);
    t.distributor().take(&mut i).take(&mut s).take(&mut d);

    assert_eq!(i, 42);
    assert_eq!(s, "foo");
    assert_eq!(
        format_significant(d, SIGNIFICANT_DIGITS),
        format_significant(47.11, SIGNIFICANT_DIGITS),
    );
}

#[test]
fn collect_into_existing_tuple() {
    let mut t = Mixed::default();
    t.collector().put(42).put("foo").put(47.11);
    assert!(t == mixed(42, "foo", 47.11));

    t.collector().put(NA).put("bar").skip();
    assert!(t == mixed(42, "bar", 47.11));
}

#[test]
fn runtime_access_out_of_bounds_is_default() {
    let t = mixed(12, "34.56", 78.9);
    for index in [3, 4, 100, usize::MAX] {
        assert_eq!(t.get_as::<i32>(index), 0);
        assert_eq!(t.get_as::<String>(index), "");
        assert_eq!(t.get_as::<f64>(index), 0.0);
    }
    assert_eq!(Tuple::<End>::default().get_as::<u8>(0), 0);
}

#[test]
fn runtime_access_bridges_through_text() {
    let t = mixed(12, "34.56", 78.9);
    assert_eq!(t.get_as::<i32>(0), 12);
    assert_eq!(t.get_as::<f64>(1), 34.56);
    assert_eq!(t.get_as::<String>(2), "78.9");
    assert_eq!(t.get_as::<String>(0), "12");
    // "34.56" is not an integer.
    assert_eq!(t.get_as::<i32>(1), 0);
}

#[test]
fn iteration_yields_each_position_then_stops() {
    let t = mixed(1, "2", 3.4);
    let mut items = t.iter::<String>();
    assert_eq!(items.next().as_deref(), Some("1"));
    assert_eq!(items.next().as_deref(), Some("2"));
    assert_eq!(items.next().as_deref(), Some("3.4"));
    assert_eq!(items.next(), None);
    assert!(items.is_exhausted());
}

#[test]
fn independent_iterators_do_not_interfere() {
    let t = mixed(1, "2", 3.4);
    let mut first = t.begin::<String>();
    let mut second = t.begin::<String>();
    assert!(first == second);

    first.advance();
    first.advance();
    assert_eq!(first.current(), "3.4");
    assert_eq!(second.current(), "1");
    assert!(first != second);

    second.advance();
    second.advance();
    assert!(first == second);

    let mut count = 0;
    let mut cursor = t.begin::<f64>();
    while cursor != t.end::<f64>() {
        count += 1;
        cursor.advance();
    }
    assert_eq!(count, 3);
}

#[test]
fn join_separates_all_but_the_first() {
    let t = mixed(1, "2", 3.4);
    assert_eq!(t.join(", "), "1, 2, 3.4");
    assert_eq!(t.join(""), "123.4");
    assert_eq!(Tuple::<End>::default().join(", "), "");
    let one: Tuple![String] = Tuple::from(("only".to_string(),));
    assert_eq!(one.join(", "), "only");
}

#[test]
fn skipped_destination_is_untouched() {
    let t = mixed(7, "ignored", 0.5);
    let (mut x, y, mut z) = (0i64, String::from("untouched"), 0.0f64);
    t.distributor().take(&mut x).take(NA).take(&mut z);
    assert_eq!(x, 7);
    assert_eq!(y, "untouched");
    assert_eq!(z, 0.5);
}

#[test]
fn compatible_construction_converts_pointwise() {
    let narrow: Tuple![i32, &str, f32] = Tuple::from((-1, "x", 0.5));
    let wide = <Tuple![i64, String, f64]>::from_compatible(narrow);
    assert_eq!(wide.into_native(), (-1, "x".to_string(), 0.5));
}

#[test]
fn accessor_reads_and_writes() {
    let mut t = mixed(1, "a", 2.0);
    {
        let mut name = t.accessor::<1>();
        assert_eq!(name.as_str(), "a");
        let _ = name.write("b".to_string());
        name.as_mut().push('c');
    }
    assert_eq!(t.get::<1>(), "bc");
}
