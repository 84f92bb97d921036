use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use merge_sort::{SortError, is_sorted, try_sort};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

const SEQUENCE_LEN: usize = 70;
const VALUE_BOUND: i32 = 200;
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let seed = time_seed();
    debug!(seed, len = SEQUENCE_LEN, bound = VALUE_BOUND, "filling sequence");

    let mut seq = [0_i32; SEQUENCE_LEN];
    let mut rng = StdRng::seed_from_u64(seed);
    fill_random(&mut rng, &mut seq, VALUE_BOUND);

    if let Err(err) = sort_sequence(&mut seq) {
        error!(%err, "sort failed");
        return ExitCode::FAILURE;
    }

    let mut stdout = io::stdout().lock();
    if let Err(err) = writeln!(stdout, "{}", render(&seq)) {
        error!(%err, "failed to write sorted sequence");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Seconds since the UNIX epoch; a clock set before 1970 seeds with 0.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

fn fill_random<R: Rng + ?Sized>(rng: &mut R, seq: &mut [i32], bound: i32) {
    for x in seq.iter_mut() {
        *x = rng.random_range(0..bound);
    }
}

fn sort_sequence(seq: &mut [i32]) -> Result<(), SortError> {
    try_sort(seq)?;
    debug_assert!(is_sorted(seq));
    debug!(min = ?seq.first(), max = ?seq.last(), "sorted sequence");
    Ok(())
}

fn render(seq: &[i32]) -> String {
    seq.iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
