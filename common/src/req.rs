// keep in sync with the data API response shape

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SensorReading {
    pub device_id: String,
    pub timestamp_ms: i64, // ms since epoch
    pub timestamp_formatted: String,
    #[serde(default)]
    pub air_temp_c: Option<f64>, // °C
    #[serde(default)]
    pub air_humidity_pct: Option<f64>, // percent
    #[serde(default)]
    pub soil_moisture_pct: Option<f64>, // percent
    #[serde(default)]
    pub soil_temp_c: Option<f64>, // °C
}

/// Success body of `GET /data`.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct DataResponse {
    #[serde(default)]
    pub data: Vec<SensorReading>,
}

/// Error body of `GET /data`. Any other shape is tolerated by the client.
#[derive(Debug, serde::Deserialize)]
pub struct ErrorResponse {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_null_metrics_are_absent() {
        let reading: SensorReading = serde_json::from_str(
            r#"{"device_id":"d1","timestamp_ms":5,"timestamp_formatted":"00:00",
                "air_temp_c":21.5,"soil_temp_c":null}"#,
        )
        .unwrap();

        assert_eq!(reading.air_temp_c, Some(21.5));
        assert_eq!(reading.air_humidity_pct, None);
        assert_eq!(reading.soil_moisture_pct, None);
        assert_eq!(reading.soil_temp_c, None);
    }

    #[test]
    fn test_missing_data_field_is_empty() {
        let resp: DataResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.data.is_empty());
    }
}
