use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Point-in-time reading for the plot location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub observed_at: DateTime<Utc>,
    pub temp_c: f64,
    pub humidity_pct: u8, // 0-100
    pub wind_kph: f64,
    pub rain_mm: f64,
}

/// Aggregated forecast for one day.
///
/// `id` exists only so list renderers can diff entries; it never
/// participates in comparisons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    pub id: Uuid,
    pub date: NaiveDate,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub humidity_mean_pct: f64,
    pub wind_max_kph: f64,
    pub rain_sum_mm: f64,
}

impl DailyForecast {
    pub fn new(
        date: NaiveDate,
        temp_min_c: f64,
        temp_max_c: f64,
        humidity_mean_pct: f64,
        wind_max_kph: f64,
        rain_sum_mm: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            temp_min_c,
            temp_max_c,
            humidity_mean_pct,
            wind_max_kph,
            rain_sum_mm,
        }
    }
}

/// Complete weather snapshot for one advisory evaluation: current
/// conditions plus the daily forecast ordered by date ascending, with
/// index 0 being today. Built fresh on every fetch, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherBundle {
    pub location: String,
    pub current: CurrentWeather,
    pub days: Vec<DailyForecast>,
}

impl WeatherBundle {
    /// Forecast days from `start` through `end` inclusive, clamped to
    /// whatever is actually available. An out-of-range window yields an
    /// empty slice rather than panicking.
    pub fn day_window(&self, start: usize, end: usize) -> &[DailyForecast] {
        let lo = start.min(self.days.len());
        let hi = (end + 1).min(self.days.len());
        &self.days[lo..hi]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bundle_with_days(n: usize) -> WeatherBundle {
        let base = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        WeatherBundle {
            location: "Test".into(),
            current: CurrentWeather {
                observed_at: Utc::now(),
                temp_c: 22.0,
                humidity_pct: 60,
                wind_kph: 10.0,
                rain_mm: 0.0,
            },
            days: (0..n)
                .map(|i| {
                    DailyForecast::new(
                        base + chrono::Duration::days(i as i64),
                        15.0,
                        25.0,
                        60.0,
                        10.0,
                        0.0,
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn day_window_full_range() {
        let bundle = bundle_with_days(4);
        assert_eq!(bundle.day_window(1, 2).len(), 2);
        assert_eq!(bundle.day_window(1, 3).len(), 3);
        assert_eq!(bundle.day_window(0, 3).len(), 4);
    }

    #[test]
    fn day_window_clamps_to_available_days() {
        let bundle = bundle_with_days(2);
        assert_eq!(bundle.day_window(1, 2).len(), 1);
        assert_eq!(bundle.day_window(1, 3).len(), 1);
        assert!(bundle.day_window(2, 3).is_empty());
    }

    #[test]
    fn day_window_empty_forecast() {
        let bundle = bundle_with_days(0);
        assert!(bundle.day_window(0, 3).is_empty());
        assert!(bundle.day_window(1, 2).is_empty());
    }

    #[test]
    fn forecast_ids_are_display_only() {
        let base = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let a = DailyForecast::new(base, 15.0, 25.0, 60.0, 10.0, 0.0);
        let b = DailyForecast::new(base, 15.0, 25.0, 60.0, 10.0, 0.0);
        assert_ne!(a.id, b.id);
        assert_eq!(a.date, b.date);
    }
}
