use anyhow::Result;
use wear_logger::core::wear::compute;
use wear_logger::core::{PartLookup, WearStatus};
use wear_logger::{PartCatalog, Session};

fn session() -> Session<PartCatalog> {
    Session::with_id(PartCatalog::builtin(), "examples")
}

/// 10 000 km oil change, 5 000 km driven: half worn.
#[test]
fn test_half_worn_oil_is_ok() -> Result<()> {
    let mut session = session();
    let row = session
        .submit("Engine Oil (Synthetic)", 0, 5_000)
        .map_err(|r| anyhow::anyhow!("{}", r))?;

    assert_eq!(row.wear_percent, 50);
    assert_eq!(row.status, WearStatus::Ok);
    Ok(())
}

/// Pads exactly at their 50 000 km lifespan need replacing.
#[test]
fn test_pads_at_lifespan_need_replacement() -> Result<()> {
    let mut session = session();
    let row = session
        .submit("Brake Pads (Front)", 0, 50_000)
        .map_err(|r| anyhow::anyhow!("{}", r))?;

    assert_eq!(row.wear_percent, 100);
    assert_eq!(row.status, WearStatus::Replace);
    assert_eq!(row.action, "Service Required");
    Ok(())
}

#[test]
fn test_reading_below_service_creates_no_record() {
    let mut session = session();
    assert!(session.submit("Tires (All-Season)", 10_000, 5_000).is_err());
    assert!(session.is_empty());
    assert!(session.chart(None).is_empty());
}

#[test]
fn test_truncation_keeps_timing_belt_ok() {
    let result = compute("Timing Belt", 100_000, 0, 99_999).unwrap();
    assert_eq!(result.wear_percent, 99);
    assert_eq!(result.status, WearStatus::Ok);
}

#[test]
fn test_chart_estimates_reading_when_none_given() {
    let mut session = session();
    session.submit("Engine Oil (Synthetic)", 0, 1_000).unwrap();
    session.set_odometer(None);

    let bars = session.chart(None);
    assert_eq!(bars.len(), 1);
    assert!((bars[0].wear_percent - 50.0).abs() < 1e-9);
}

#[test]
fn test_wear_percent_matches_formula_across_catalog() {
    let catalog = PartCatalog::builtin();
    let readings = [(0, 0), (0, 1), (1_234, 8_765), (0, 99_999), (50_000, 250_000)];

    for name in catalog.part_names() {
        let lifespan = catalog.lookup(name).unwrap();
        for (last, current) in readings {
            let result = compute(name, lifespan, last, current).unwrap();
            let expected = (u64::from(current - last) * 100 / u64::from(lifespan)) as u32;
            assert_eq!(result.wear_percent, expected, "{} {}..{}", name, last, current);
            assert_eq!(result.status == WearStatus::Replace, expected >= 100);
        }
    }
}

#[test]
fn test_chart_never_exceeds_full_bar() {
    let mut session = session();
    session.submit("Engine Oil (Conventional)", 0, 20_000).unwrap();
    session.submit("Coolant (Flush)", 0, 1_000).unwrap();
    assert_eq!(session.rows()[0].wear_percent, 400);

    for reading in [None, Some(1), Some(40_000), Some(9_999_999)] {
        for bar in session.chart(reading) {
            assert!((0.0..=100.0).contains(&bar.wear_percent));
        }
    }
}
