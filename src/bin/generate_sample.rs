//! Writes a synthetic `airbnb.csv` so the dashboard runs out of the box.
//! Deterministic output: same file every run.

use polars::prelude::*;
use std::fs::File;

const NEIGHBORHOODS: [&str; 5] = ["Centro", "Norte", "Retiro", "Salamanca", "Chamberi"];
const LISTING_TYPES: [&str; 3] = ["Entire home/apt", "Private room", "Shared room"];

/// Base nightly price per listing type, scaled per neighborhood.
const BASE_PRICE: [f64; 3] = [120.0, 55.0, 30.0];
const HOOD_FACTOR: [f64; 5] = [1.3, 0.9, 1.1, 1.5, 1.0];

const ROWS: usize = 400;
const OUTPUT: &str = "airbnb.csv";

/// Minimal deterministic PRNG (xorshift64*)
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Uniform in [0, 1)
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick(&mut self, upper: usize) -> usize {
        (self.next_u64() % upper as u64) as usize
    }
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(0x1157_1065_EED5_EED);

    let mut room_types: Vec<&str> = Vec::with_capacity(ROWS);
    let mut neighbourhoods: Vec<&str> = Vec::with_capacity(ROWS);
    let mut prices: Vec<Option<f64>> = Vec::with_capacity(ROWS);
    let mut min_nights: Vec<i64> = Vec::with_capacity(ROWS);
    let mut reviews_ltm: Vec<i64> = Vec::with_capacity(ROWS);
    let mut reviews_per_month: Vec<f64> = Vec::with_capacity(ROWS);

    for _ in 0..ROWS {
        let type_idx = rng.pick(LISTING_TYPES.len());
        let hood_idx = rng.pick(NEIGHBORHOODS.len());

        room_types.push(LISTING_TYPES[type_idx]);
        neighbourhoods.push(NEIGHBORHOODS[hood_idx]);

        // ~3% of listings have no price, exercising the loader's cleanup
        if rng.next_f64() < 0.03 {
            prices.push(None);
        } else {
            let spread = 0.5 + rng.next_f64();
            let price = BASE_PRICE[type_idx] * HOOD_FACTOR[hood_idx] * spread;
            prices.push(Some((price * 100.0).round() / 100.0));
        }

        min_nights.push(1 + rng.pick(14) as i64);
        let ltm = rng.pick(60) as i64;
        reviews_ltm.push(ltm);
        reviews_per_month.push((ltm as f64 / 12.0 * 100.0).round() / 100.0);
    }

    let mut df = df!(
        "room_type" => room_types,
        "neighbourhood" => neighbourhoods,
        "price" => prices,
        "minimum_nights" => min_nights,
        "number_of_reviews_ltm" => reviews_ltm,
        "reviews_per_month" => reviews_per_month,
    )?;

    let file = File::create(OUTPUT)?;
    CsvWriter::new(file).finish(&mut df)?;

    println!("wrote {} rows to {OUTPUT}", df.height());
    Ok(())
}
