use crate::core::{Distance, PartLookup, Storage, TableRow};
use crate::core::session::Session;
use crate::utils::error::{Result, WearError};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Tsv,
    Json,
}

impl ReportFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "csv" => Some(ReportFormat::Csv),
            "tsv" => Some(ReportFormat::Tsv),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_name)
    }

    /// The extension wins; otherwise the configured format, then CSV.
    pub fn resolve(path: &str, configured: Option<&str>) -> Result<Self> {
        if let Some(format) = Self::from_path(path) {
            return Ok(format);
        }
        match configured {
            Some(name) => Self::from_name(name).ok_or_else(|| WearError::InvalidConfigValueError {
                field: "report.format".to_string(),
                value: name.to_string(),
                reason: "Unsupported format. Valid formats: csv, tsv, json".to_string(),
            }),
            None => Ok(ReportFormat::Csv),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    session: &'a str,
    generated_at: String,
    odometer_km: Option<Distance>,
    rows: &'a [TableRow],
}

fn delimited(rows: &[TableRow], delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    writer.into_inner().map_err(|e| WearError::IoError(e.into_error()))
}

pub fn render_report<L: PartLookup>(session: &Session<L>, format: ReportFormat) -> Result<Vec<u8>> {
    match format {
        ReportFormat::Csv => delimited(session.rows(), b','),
        ReportFormat::Tsv => delimited(session.rows(), b'\t'),
        ReportFormat::Json => {
            let report = JsonReport {
                session: session.id(),
                generated_at: chrono::Local::now().to_rfc3339(),
                odometer_km: session.odometer(),
                rows: session.rows(),
            };
            Ok(serde_json::to_vec_pretty(&report)?)
        }
    }
}

/// Writes the session table through `storage` and returns the path written.
pub fn export<L: PartLookup, S: Storage>(
    session: &Session<L>,
    storage: &S,
    path: &str,
    configured_format: Option<&str>,
) -> Result<PathBuf> {
    let format = ReportFormat::resolve(path, configured_format)?;
    let data = render_report(session, format)?;
    let written = storage.write_file(path, &data)?;
    tracing::info!(
        "Exported {} rows as {:?} to {}",
        session.rows().len(),
        format,
        written.display()
    );
    Ok(written)
}
