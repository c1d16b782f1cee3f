use rand_core::{RngCore, SeedableRng};
use rand_philox::Philox2x64Rng;

fn main() {
    let seed = std::env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(0);
    let mut rng = Philox2x64Rng::seed_from_u64(seed);
    println!("Next u32: {0:>#18X} = {0:>20}", rng.next_u32());
    println!("Next u64: {0:>#18X} = {0:>20}", rng.next_u64());
    println!("Next f64: {:>39}", rng.random());
}
