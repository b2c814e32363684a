//! Decomposing a number of seconds into hours, minutes and seconds, with each step's quotient and
//! remainder passed along as a tuple.

use catena::{Tuple, ACCU};

type Split = Tuple![u64, u64];

fn divmod(n: u64, d: u64) -> Split {
    ACCU.push(n / d).push(n % d)
}

fn hms(total: u64) -> Tuple![u64, u64, u64] {
    let (mut minutes, mut seconds) = (0u64, 0u64);
    divmod(total, 60)
        .distributor()
        .take(&mut minutes)
        .take(&mut seconds);

    let (mut hours, mut minutes_left) = (0u64, 0u64);
    divmod(minutes, 60)
        .distributor()
        .take(&mut hours)
        .take(&mut minutes_left);

    let mut out = <Tuple![u64, u64, u64]>::default();
    out.collector().put(hours).put(minutes_left).put(seconds);
    out
}

#[test]
fn decomposes_3723_seconds() {
    let t = hms(3723);
    assert_eq!(t.into_native(), (1, 2, 3));
    assert_eq!(t.join(", "), "1, 2, 3");
    assert_eq!(t.to_string(), "(1, 2, 3)");
}

#[test]
fn decomposes_boundaries() {
    assert_eq!(hms(0).into_native(), (0, 0, 0));
    assert_eq!(hms(59).into_native(), (0, 0, 59));
    assert_eq!(hms(3600).into_native(), (1, 0, 0));
    assert_eq!(hms(86399).join(":"), "23:59:59");
}
