//! Writes a synthetic motor-control telemetry CSV for trying out the viewer:
//!
//! ```sh
//! cargo run --bin generate_sample -- sample_telemetry.csv
//! cargo run -- sample_telemetry.csv
//! ```

use std::path::PathBuf;

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

    fn uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller.
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.uniform().max(1e-12);
        let u2 = self.uniform();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> anyhow::Result<()> {
    let out: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_telemetry.csv".to_string())
        .into();

    let mut writer = csv::Writer::from_path(&out)?;
    writer.write_record([
        "run:0",
        "tick",
        "currentPosition",
        "targetPosition",
        "currentSpeed:2",
        "targetSpeed:2",
        "error:3",
        "integral:3",
        "output:3",
        "current:4",
    ])?;

    let mut rng = SimpleRng::new(42);
    let mut position = 0.0f64;
    let mut integral = 0.0f64;

    // 10 s run at 10 ms ticks: ramp to 90 000 m°, hold, return to zero.
    for step in 0..1000u32 {
        let tick = step as f64 * 10.0;
        let target = match step {
            0..=399 => step as f64 * 225.0,
            400..=699 => 90_000.0,
            _ => 90_000.0 * (1.0 - (step as f64 - 700.0) / 300.0),
        };

        let error = target - position;
        integral = (integral + error * 0.01).clamp(-20_000.0, 20_000.0);
        let target_speed = error * 0.8;
        let speed = target_speed * 0.9 + rng.gauss(0.0, 40.0);
        position += speed * 0.01;

        let output = (error * 0.002 + integral * 0.0001).clamp(-100.0, 100.0);
        let current = 800.0 + output.abs() * 14.0 + rng.gauss(0.0, 25.0);

        writer.write_record([
            "1".to_string(),
            format!("{tick:.0}"),
            format!("{position:.1}"),
            format!("{target:.1}"),
            format!("{speed:.1}"),
            format!("{target_speed:.1}"),
            format!("{error:.1}"),
            format!("{integral:.1}"),
            format!("{output:.2}"),
            format!("{current:.1}"),
        ])?;
    }

    writer.flush()?;
    println!("Wrote {}", out.display());
    Ok(())
}
