use crate::req::SensorReading;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    AirTemp,
    AirHumidity,
    SoilMoisture,
    SoilTemp,
}

impl Metric {
    /// Field name in the API response.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::AirTemp => "air_temp_c",
            Metric::AirHumidity => "air_humidity_pct",
            Metric::SoilMoisture => "soil_moisture_pct",
            Metric::SoilTemp => "soil_temp_c",
        }
    }

    pub fn value(&self, reading: &SensorReading) -> Option<f64> {
        match self {
            Metric::AirTemp => reading.air_temp_c,
            Metric::AirHumidity => reading.air_humidity_pct,
            Metric::SoilMoisture => reading.soil_moisture_pct,
            Metric::SoilTemp => reading.soil_temp_c,
        }
    }

    pub fn value_mut<'a>(&self, reading: &'a mut SensorReading) -> &'a mut Option<f64> {
        match self {
            Metric::AirTemp => &mut reading.air_temp_c,
            Metric::AirHumidity => &mut reading.air_humidity_pct,
            Metric::SoilMoisture => &mut reading.soil_moisture_pct,
            Metric::SoilTemp => &mut reading.soil_temp_c,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Left to the plotting library
    Auto,
    Fixed(f64),
}

impl Bound {
    pub fn fixed(&self) -> Option<f64> {
        match self {
            Bound::Auto => None,
            Bound::Fixed(v) => Some(*v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDomain {
    pub min: Bound,
    pub max: Bound,
}

impl AxisDomain {
    pub const AUTO: Self = Self {
        min: Bound::Auto,
        max: Bound::Auto,
    };

    pub const fn fixed(min: f64, max: f64) -> Self {
        Self {
            min: Bound::Fixed(min),
            max: Bound::Fixed(max),
        }
    }

    pub fn is_auto(&self) -> bool {
        self.min == Bound::Auto && self.max == Bound::Auto
    }

    /// Concrete y range for the plot. `None` leaves both bounds to the
    /// plotting library; a single `Auto` bound is taken from the data.
    pub fn resolve(&self, series: &[Series]) -> Option<(f64, f64)> {
        if self.is_auto() {
            return None;
        }
        let stats = series.stats();
        let min = self.min.fixed().or(stats.map(|s| s.y_min))?;
        let max = self.max.fixed().or(stats.map(|s| s.y_max))?;
        Some((min, max))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStats {
    pub y_min: f64,
    pub y_max: f64,
}

pub trait Stats {
    /// `None` when there is no value at all.
    fn stats(&self) -> Option<SeriesStats>;
}

impl Stats for [Series] {
    fn stats(&self) -> Option<SeriesStats> {
        self.iter()
            .flat_map(|s| s.points.iter().filter_map(|p| p.value))
            .fold(None, |acc, y| {
                Some(match acc {
                    None => SeriesStats { y_min: y, y_max: y },
                    Some(s) => SeriesStats {
                        y_min: s.y_min.min(y),
                        y_max: s.y_max.max(y),
                    },
                })
            })
    }
}

/// How one metric is drawn: legend name and stroke color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLine {
    pub metric: Metric,
    pub name: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSpec {
    pub title: &'static str,
    pub line: ChartLine,
    pub domain: AxisDomain,
}

pub const DASHBOARD_CHARTS: [ChartSpec; 4] = [
    ChartSpec {
        title: "Air Temperature (°C)",
        line: ChartLine {
            metric: Metric::AirTemp,
            name: "Air Temp",
            color: "#8884d8",
        },
        domain: AxisDomain::AUTO,
    },
    ChartSpec {
        title: "Air Humidity (%)",
        line: ChartLine {
            metric: Metric::AirHumidity,
            name: "Air Humidity",
            color: "#82ca9d",
        },
        domain: AxisDomain::fixed(0.0, 100.0),
    },
    ChartSpec {
        title: "Soil Moisture (%)",
        line: ChartLine {
            metric: Metric::SoilMoisture,
            name: "Soil Moisture",
            color: "#ffc658",
        },
        domain: AxisDomain::fixed(0.0, 100.0),
    },
    ChartSpec {
        title: "Soil Temperature (°C)",
        line: ChartLine {
            metric: Metric::SoilTemp,
            name: "Soil Temp",
            color: "#ff7300",
        },
        domain: AxisDomain::AUTO,
    },
];

pub const COMPARISON_TITLE: &str = "Model vs Actual Values";
pub const COMPARISON_DOMAIN: AxisDomain = AxisDomain::fixed(20.0, 40.0);
pub const COMPARISON_ACTUAL: ChartLine = ChartLine {
    metric: Metric::AirTemp,
    name: "Actual Values",
    color: "#8884d8",
};
pub const COMPARISON_MODEL: ChartLine = ChartLine {
    metric: Metric::AirTemp,
    name: "Model Predictions",
    color: "#82ca9d",
};

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub label: String, // category on the x axis
    pub timestamp_ms: i64,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: String,
    pub metric: Metric,
    pub points: Vec<Point>,
}

impl Series {
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    pub fn values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.value).collect()
    }
}

pub fn series(readings: &[SensorReading], line: &ChartLine) -> Series {
    Series {
        name: line.name.to_owned(),
        color: line.color.to_owned(),
        metric: line.metric,
        points: readings
            .iter()
            .map(|r| Point {
                label: r.timestamp_formatted.clone(),
                timestamp_ms: r.timestamp_ms,
                value: line.metric.value(r),
            })
            .collect(),
    }
}

/// Maps both inputs independently. The series may differ in length and
/// timestamps; nothing is aligned or interpolated.
pub fn dual_series(
    first: &[SensorReading],
    first_line: &ChartLine,
    second: &[SensorReading],
    second_line: &ChartLine,
) -> [Series; 2] {
    [series(first, first_line), series(second, second_line)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(ts: i64, label: &str, air_temp_c: Option<f64>) -> SensorReading {
        SensorReading {
            device_id: "d1".to_string(),
            timestamp_ms: ts,
            timestamp_formatted: label.to_string(),
            air_temp_c,
            air_humidity_pct: Some(50.0),
            soil_moisture_pct: None,
            soil_temp_c: None,
        }
    }

    #[test]
    fn test_series_keeps_order_and_gaps() {
        let readings = vec![
            reading(1, "10:00", Some(20.5)),
            reading(2, "10:02", None),
            reading(3, "10:04", Some(21.0)),
        ];
        let s = series(&readings, &DASHBOARD_CHARTS[0].line);

        assert_eq!(s.name, "Air Temp");
        assert_eq!(s.color, "#8884d8");
        assert_eq!(s.labels(), vec!["10:00", "10:02", "10:04"]);
        assert_eq!(s.values(), vec![Some(20.5), None, Some(21.0)]);
        assert_eq!(s.points[1].timestamp_ms, 2);
    }

    #[test]
    fn test_missing_metric_is_not_zero() {
        let readings = vec![reading(1, "a", Some(1.0))];
        let s = series(&readings, &DASHBOARD_CHARTS[2].line);
        assert_eq!(s.values(), vec![None]);
    }

    #[test]
    fn test_dual_series_independent_lengths() {
        let actual = vec![reading(1, "a", Some(1.0)), reading(2, "b", Some(2.0))];
        let model = vec![
            reading(2, "b", Some(2.5)),
            reading(3, "c", Some(3.5)),
            reading(4, "d", None),
        ];
        let [a, m] = dual_series(&actual, &COMPARISON_ACTUAL, &model, &COMPARISON_MODEL);

        assert_eq!(a.points.len(), 2);
        assert_eq!(m.points.len(), 3);
        assert_eq!(m.name, "Model Predictions");
        assert_eq!(a.labels(), vec!["a", "b"]);
        assert_eq!(m.labels(), vec!["b", "c", "d"]);
        assert_eq!(m.values(), vec![Some(2.5), Some(3.5), None]);
    }

    #[test]
    fn test_domains() {
        assert!(DASHBOARD_CHARTS[0].domain.is_auto());
        assert_eq!(DASHBOARD_CHARTS[1].domain.min.fixed(), Some(0.0));
        assert_eq!(DASHBOARD_CHARTS[1].domain.max.fixed(), Some(100.0));
        assert!(!COMPARISON_DOMAIN.is_auto());
    }

    #[test]
    fn test_resolve_domain() {
        let readings = vec![
            reading(1, "a", Some(18.0)),
            reading(2, "b", None),
            reading(3, "c", Some(26.5)),
        ];
        let s = [series(&readings, &DASHBOARD_CHARTS[0].line)];

        assert_eq!(AxisDomain::AUTO.resolve(&s), None);
        assert_eq!(AxisDomain::fixed(0.0, 100.0).resolve(&s), Some((0.0, 100.0)));

        let half = AxisDomain {
            min: Bound::Fixed(0.0),
            max: Bound::Auto,
        };
        assert_eq!(half.resolve(&s), Some((0.0, 26.5)));
        // nothing to take the upper bound from
        assert_eq!(half.resolve(&[]), None);
    }

    #[test]
    fn test_metric_keys() {
        let keys: Vec<_> = DASHBOARD_CHARTS.iter().map(|c| c.line.metric.key()).collect();
        assert_eq!(
            keys,
            vec!["air_temp_c", "air_humidity_pct", "soil_moisture_pct", "soil_temp_c"]
        );
    }
}
