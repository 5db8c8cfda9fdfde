use crate::core::chart::chart_bars;
use crate::core::wear::compute;
use crate::core::{ChartBar, Distance, PartLookup, Rejection, ServiceRecord, TableRow};

/// In-memory logbook for one run of the program. Records are appended in
/// entry order and dropped on exit.
pub struct Session<L: PartLookup> {
    catalog: L,
    id: String,
    records: Vec<ServiceRecord>,
    rows: Vec<TableRow>,
    odometer: Option<Distance>,
}

impl<L: PartLookup> Session<L> {
    pub fn new(catalog: L) -> Self {
        let id = format!("session_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"));
        Self::with_id(catalog, id)
    }

    pub fn with_id(catalog: L, id: impl Into<String>) -> Self {
        Self {
            catalog,
            id: id.into(),
            records: Vec::new(),
            rows: Vec::new(),
            odometer: None,
        }
    }

    /// Looks up the part, computes its wear and appends a record.
    /// A rejected calculation leaves the session untouched, apart from the
    /// remembered odometer reading.
    pub fn submit(
        &mut self,
        part_name: &str,
        last_serviced: Distance,
        current: Distance,
    ) -> Result<&TableRow, Rejection> {
        self.odometer = Some(current);

        let lifespan = self.catalog.lifespan_of(part_name).unwrap_or(0);
        let result = match compute(part_name, lifespan, last_serviced, current) {
            Ok(result) => result,
            Err(rejection) => {
                tracing::debug!("Calculation for '{}' declined: {}", part_name, rejection);
                return Err(rejection);
            }
        };

        tracing::info!(
            "{}: {} km driven of {} km, wear {}% ({})",
            part_name,
            result.distance_driven,
            lifespan,
            result.wear_percent,
            result.status
        );

        self.records.push(ServiceRecord {
            part_name: part_name.to_string(),
            last_serviced_distance: last_serviced,
            lifespan_distance: lifespan,
        });

        let row_index = self.rows.len();
        self.rows.push(TableRow {
            part_name: part_name.to_string(),
            lifespan_distance: lifespan,
            status: result.status,
            wear_percent: result.wear_percent,
            action: result.status.action().to_string(),
        });
        Ok(&self.rows[row_index])
    }

    /// Bars for every record so far, against `current` or, failing that,
    /// the last odometer reading entered.
    pub fn chart(&self, current: Option<Distance>) -> Vec<ChartBar> {
        chart_bars(&self.records, current.or(self.odometer))
    }

    pub fn set_odometer(&mut self, reading: Option<Distance>) {
        self.odometer = reading;
    }

    pub fn odometer(&self) -> Option<Distance> {
        self.odometer
    }

    pub fn catalog(&self) -> &L {
        &self.catalog
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn records(&self) -> &[ServiceRecord] {
        &self.records
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
