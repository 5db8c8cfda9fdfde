use crate::core::wear::chart_percent;
use crate::core::{ChartBar, Distance, ServiceRecord};

/// Reading used for the chart when no live odometer value is available:
/// the newest record's service reading plus half its lifespan.
pub fn estimated_current(records: &[ServiceRecord]) -> Option<Distance> {
    records
        .last()
        .map(|last| last.last_serviced_distance.saturating_add(last.lifespan_distance / 2))
}

/// Recomputes every record's bar against one odometer reading.
/// A missing or zero reading falls back to [`estimated_current`].
pub fn chart_bars(records: &[ServiceRecord], current: Option<Distance>) -> Vec<ChartBar> {
    let current = match current.filter(|km| *km > 0) {
        Some(km) => km,
        None => match estimated_current(records) {
            Some(estimate) => {
                tracing::debug!("No odometer reading; charting against estimate {} km", estimate);
                estimate
            }
            None => return Vec::new(),
        },
    };

    records
        .iter()
        .map(|record| ChartBar {
            category: record.part_name.clone(),
            wear_percent: chart_percent(record, current),
        })
        .collect()
}
