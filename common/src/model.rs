//! Stand-in for the prediction model: actual readings with uniform noise.

use rand::Rng;

use crate::{dataset::Metric, req::SensorReading};

/// Half-width of the noise added per metric.
const JITTER: [(Metric, f64); 4] = [
    (Metric::AirHumidity, 2.5),
    (Metric::AirTemp, 1.5),
    (Metric::SoilMoisture, 2.5),
    (Metric::SoilTemp, 1.0),
];

pub fn simulate_predictions<R: Rng>(actual: &[SensorReading], rng: &mut R) -> Vec<SensorReading> {
    actual
        .iter()
        .map(|reading| {
            let mut predicted = reading.clone();
            for (metric, spread) in JITTER {
                if let Some(v) = metric.value_mut(&mut predicted) {
                    *v += rng.gen_range(-spread..spread);
                }
            }
            predicted
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    fn reading(ts: i64) -> SensorReading {
        SensorReading {
            device_id: "verde-terra-esp32-001".to_string(),
            timestamp_ms: ts,
            timestamp_formatted: format!("t{ts}"),
            air_temp_c: Some(27.4),
            air_humidity_pct: Some(65.2),
            soil_moisture_pct: None,
            soil_temp_c: Some(22.5),
        }
    }

    #[test]
    fn test_predictions_stay_within_spread() {
        let actual: Vec<_> = (0..50).map(reading).collect();
        let mut rng = SmallRng::seed_from_u64(7);
        let predicted = simulate_predictions(&actual, &mut rng);

        assert_eq!(predicted.len(), actual.len());
        for (a, p) in actual.iter().zip(&predicted) {
            assert_eq!(a.timestamp_ms, p.timestamp_ms);
            assert!((a.air_temp_c.unwrap() - p.air_temp_c.unwrap()).abs() <= 1.5);
            assert!((a.air_humidity_pct.unwrap() - p.air_humidity_pct.unwrap()).abs() <= 2.5);
            assert!((a.soil_temp_c.unwrap() - p.soil_temp_c.unwrap()).abs() <= 1.0);
            assert_eq!(p.soil_moisture_pct, None);
        }
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let actual: Vec<_> = (0..5).map(reading).collect();
        let a = simulate_predictions(&actual, &mut SmallRng::seed_from_u64(1));
        let b = simulate_predictions(&actual, &mut SmallRng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
