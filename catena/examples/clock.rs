//! Split durations given in seconds into hours, minutes and seconds.
//!
//! ```text
//! cargo run --example clock -- 3723 86399
//! ```

use catena::{Tuple, ACCU, NA};
use colored::*;
use structopt::StructOpt;

/// Split durations given in seconds into hours, minutes and seconds.
#[derive(Debug, Clone, StructOpt)]
struct Options {
    /// Separator placed between the hours, minutes and seconds.
    #[structopt(short, long, default_value = ":")]
    separator: String,
    /// Only print the number of whole hours.
    #[structopt(long)]
    hours_only: bool,
    /// Durations to split, in seconds.
    #[structopt(required = true)]
    seconds: Vec<u64>,
}

type Clock = Tuple![u64, u64, u64];

fn divmod(n: u64, d: u64) -> Tuple![u64, u64] {
    ACCU.push(n / d).push(n % d)
}

fn hms(total: u64) -> Clock {
    let (mut minutes, mut seconds) = (0u64, 0u64);
    let _ = divmod(total, 60)
        .distributor()
        .take(&mut minutes)
        .take(&mut seconds);

    let mut clock = Clock::default();
    let _ = clock
        .collector()
        .put(divmod(minutes, 60).into_native().0)
        .put(minutes % 60)
        .put(seconds);
    clock
}

fn main() {
    env_logger::init();
    let options = Options::from_args();

    for total in options.seconds {
        let clock = hms(total);
        if options.hours_only {
            let mut hours = 0u64;
            let _ = clock.distributor().take(&mut hours).take(NA).take(NA);
            println!("{} {}", format!("{}s", total).blue(), hours.to_string().green());
        } else {
            println!(
                "{} {}",
                format!("{}s", total).blue(),
                clock.join(&options.separator).green(),
            );
        }
    }
}
