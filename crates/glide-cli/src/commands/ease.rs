use anyhow::{bail, Result};
use serde::Serialize;

use glide_core::ease_in_out_cubic;

#[derive(Debug, Serialize)]
struct Sample {
    elapsed: f64,
    offset: f64,
}

fn samples(duration: f64, distance: f64, count: usize) -> Vec<Sample> {
    let last = (count - 1).max(1) as f64;
    (0..count)
        .map(|i| {
            let elapsed = duration * i as f64 / last;
            Sample {
                elapsed,
                offset: ease_in_out_cubic(elapsed, 0.0, distance, duration),
            }
        })
        .collect()
}

pub fn run(duration: f64, distance: f64, count: usize, json: bool) -> Result<()> {
    if count < 2 {
        bail!("need at least 2 samples");
    }
    if duration <= 0.0 {
        bail!("duration must be positive");
    }

    let samples = samples(duration, distance, count);

    if json {
        println!("{}", serde_json::to_string_pretty(&samples)?);
        return Ok(());
    }

    println!("{:>10}  {:>10}", "elapsed", "offset");
    for sample in &samples {
        let bar_len = if distance != 0.0 {
            (sample.offset / distance * 40.0).round().max(0.0) as usize
        } else {
            0
        };
        println!(
            "{:>10.1}  {:>10.2}  {}",
            sample.elapsed,
            sample.offset,
            "█".repeat(bar_len)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_cover_both_ends() {
        let samples = samples(800.0, 800.0, 9);
        assert_eq!(samples.len(), 9);
        assert_eq!(samples[0].offset, 0.0);
        assert_eq!(samples[4].elapsed, 400.0);
        assert_eq!(samples[4].offset, 400.0);
        assert_eq!(samples[8].offset, 800.0);
    }

    #[test]
    fn test_samples_serialize() {
        let json = serde_json::to_value(samples(100.0, 10.0, 2)).unwrap();
        assert_eq!(json[1]["elapsed"], 100.0);
        assert_eq!(json[1]["offset"], 10.0);
    }
}
