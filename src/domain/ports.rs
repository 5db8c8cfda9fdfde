use crate::domain::model::{Distance, PartSpec};
use crate::utils::error::Result;
use std::path::PathBuf;

/// Name-to-lifespan lookup backing the wear calculation.
pub trait PartLookup {
    fn lifespan_of(&self, name: &str) -> Option<Distance>;
    fn part_names(&self) -> Vec<&str>;
    /// Name at a 1-based selector position, in listing order.
    fn name_at(&self, position: usize) -> Option<&str>;
}

/// Where exported reports end up.
pub trait Storage {
    /// Returns the location actually written.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<PathBuf>;
}

pub trait ConfigProvider {
    fn extra_parts(&self) -> &[PartSpec];
    fn replace_default_parts(&self) -> bool;
    fn max_distance(&self) -> Distance;
    fn chart_width(&self) -> usize;
    fn output_path(&self) -> &str;
}
