use anyhow::{Context, Result};
use common::req::{DataResponse, SensorReading};

// actual values shown next to the simulated model output
const SAMPLE_READINGS: &str = include_str!("../assets/sample_readings.json");

pub fn sample_readings() -> Result<Vec<SensorReading>> {
    let resp: DataResponse =
        serde_json::from_str(SAMPLE_READINGS).context("decoding bundled sample readings")?;
    Ok(resp.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_readings_decode() {
        let readings = sample_readings().unwrap();
        assert_eq!(readings.len(), 7);
        assert_eq!(readings[0].timestamp_ms, 1_747_872_000_000);
        assert_eq!(readings[0].timestamp_formatted, "2025-05-22");
        assert!(readings.windows(2).all(|w| w[0].timestamp_ms < w[1].timestamp_ms));
        assert!(readings.iter().all(|r| r.air_temp_c.is_some()));
    }
}
