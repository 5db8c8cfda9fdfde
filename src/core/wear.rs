//! Wear model: distance driven against a part's expected lifespan.

use crate::core::{Distance, Rejection, ServiceRecord, WearResult, WearStatus};

/// Wear percent at or above which a part is flagged for replacement.
pub const REPLACE_THRESHOLD_PERCENT: u32 = 100;

/// Upper bound of a chart bar.
pub const CHART_MAX_PERCENT: f64 = 100.0;

/// Computes wear for one reading. `lifespan == 0` is treated as an unknown
/// part; a current reading below the service reading is declined.
pub fn compute(
    part_name: &str,
    lifespan: Distance,
    last_serviced: Distance,
    current: Distance,
) -> Result<WearResult, Rejection> {
    if lifespan == 0 {
        return Err(Rejection::UnknownPart {
            name: part_name.to_string(),
        });
    }
    if current < last_serviced {
        return Err(Rejection::ReadingBelowService {
            last: last_serviced,
            current,
        });
    }

    let distance_driven = current - last_serviced;
    let wear_ratio = f64::from(distance_driven) / f64::from(lifespan);
    // Integer division truncates: 99.999% reads as 99, never 100.
    let wear_percent = u64::from(distance_driven) * 100 / u64::from(lifespan);
    let wear_percent = u32::try_from(wear_percent).unwrap_or(u32::MAX);

    Ok(WearResult {
        distance_driven,
        wear_ratio,
        wear_percent,
        status: classify(wear_percent),
    })
}

pub fn classify(wear_percent: u32) -> WearStatus {
    if wear_percent >= REPLACE_THRESHOLD_PERCENT {
        WearStatus::Replace
    } else {
        WearStatus::Ok
    }
}

/// Wear of a stored record against `current`, clamped to `0..=100` for display.
pub fn chart_percent(record: &ServiceRecord, current: Distance) -> f64 {
    if record.lifespan_distance == 0 {
        return 0.0;
    }
    let driven = f64::from(current) - f64::from(record.last_serviced_distance);
    let wear = driven / f64::from(record.lifespan_distance) * 100.0;
    wear.clamp(0.0, CHART_MAX_PERCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(last: Distance, lifespan: Distance) -> ServiceRecord {
        ServiceRecord {
            part_name: "Engine Oil (Synthetic)".to_string(),
            last_serviced_distance: last,
            lifespan_distance: lifespan,
        }
    }

    #[test]
    fn test_half_worn_part_is_ok() {
        let result = compute("Engine Oil (Synthetic)", 10_000, 0, 5_000).unwrap();
        assert_eq!(result.distance_driven, 5_000);
        assert_eq!(result.wear_percent, 50);
        assert!((result.wear_ratio - 0.5).abs() < 1e-9);
        assert_eq!(result.status, WearStatus::Ok);
    }

    #[test]
    fn test_exactly_at_lifespan_needs_replacement() {
        let result = compute("Brake Pads (Front)", 50_000, 0, 50_000).unwrap();
        assert_eq!(result.wear_percent, 100);
        assert_eq!(result.status, WearStatus::Replace);
    }

    #[test]
    fn test_reading_below_service_is_declined() {
        let rejection = compute("Tires (All-Season)", 60_000, 10_000, 5_000).unwrap_err();
        assert_eq!(
            rejection,
            Rejection::ReadingBelowService {
                last: 10_000,
                current: 5_000
            }
        );
    }

    #[test]
    fn test_zero_lifespan_is_declined() {
        let rejection = compute("Mystery Part", 0, 0, 1_000).unwrap_err();
        assert!(matches!(rejection, Rejection::UnknownPart { .. }));
    }

    #[test]
    fn test_percent_truncates_instead_of_rounding() {
        let result = compute("Timing Belt", 100_000, 0, 99_999).unwrap();
        assert_eq!(result.wear_percent, 99);
        assert_eq!(result.status, WearStatus::Ok);

        // 0.29 * 100 in floating point is 28.999..., integer math keeps 29
        let result = compute("Timing Belt", 100, 0, 29).unwrap();
        assert_eq!(result.wear_percent, 29);
    }

    #[test]
    fn test_table_percent_is_not_clamped() {
        let result = compute("Engine Oil (Conventional)", 5_000, 0, 12_500).unwrap();
        assert_eq!(result.wear_percent, 250);
        assert_eq!(result.status, WearStatus::Replace);
    }

    #[test]
    fn test_same_reading_as_service_is_zero_wear() {
        let result = compute("Fuel Filter", 60_000, 42_000, 42_000).unwrap();
        assert_eq!(result.wear_percent, 0);
        assert_eq!(result.status, WearStatus::Ok);
    }

    #[test]
    fn test_chart_percent_is_clamped_both_ways() {
        assert!((chart_percent(&record(0, 10_000), 5_000) - 50.0).abs() < 1e-9);
        assert!((chart_percent(&record(0, 10_000), 30_000) - 100.0).abs() < 1e-9);
        assert!(chart_percent(&record(20_000, 10_000), 5_000).abs() < 1e-9);
    }
}
