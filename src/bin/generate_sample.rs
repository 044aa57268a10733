use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const REGIONS: [&str; 4] = ["North", "South", "East", "West"];
const SENSORS: [&str; 3] = ["alpha", "beta", "gamma"];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Monthly revenue per region with a seasonal bump.
fn write_sales(path: &Path, rng: &mut SimpleRng) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating regional_sales.csv")?;
    writer.write_record(["month", "region", "revenue", "units"])?;

    for (i, month) in MONTHS.iter().enumerate() {
        let season = 1.0 + 0.3 * (i as f64 / 12.0 * std::f64::consts::TAU).sin();
        for region in REGIONS {
            let revenue = (rng.gauss(12_000.0, 1_500.0) * season).max(0.0);
            let units = (revenue / 40.0).round() as i64;
            writer.write_record([
                month.to_string(),
                region.to_string(),
                format!("{revenue:.2}"),
                units.to_string(),
            ])?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Noisy sensor readings, some of them missing.
fn write_measurements(path: &Path, rng: &mut SimpleRng, n: usize) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating measurements.csv")?;
    writer.write_record(["time", "sensor", "temperature", "humidity"])?;

    for t in 0..n {
        let sensor = rng.pick(&SENSORS);
        let temperature = rng.gauss(21.0, 2.5);
        let humidity = if rng.next_f64() < 0.05 {
            String::new()
        } else {
            format!("{:.1}", rng.gauss(45.0, 8.0).clamp(0.0, 100.0))
        };
        writer.write_record([
            t.to_string(),
            sensor.to_string(),
            format!("{temperature:.2}"),
            humidity,
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);
    write_sales(&out_dir.join("regional_sales.csv"), &mut rng)?;
    write_measurements(&out_dir.join("measurements.csv"), &mut rng, 500)?;

    println!("Wrote sample CSV files to {}", out_dir.display());
    Ok(())
}
