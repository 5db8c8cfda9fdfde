use crate::core::{ConfigProvider, Distance, PartLookup, PartSpec};
use crate::utils::error::{Result, WearError};
use std::collections::BTreeMap;

/// Factory service intervals, in kilometres.
pub const DEFAULT_PARTS: [(&str, Distance); 13] = [
    ("Engine Oil (Synthetic)", 10_000),
    ("Engine Oil (Conventional)", 5_000),
    ("Tires (All-Season)", 60_000),
    ("Brake Pads (Front)", 50_000),
    ("Brake Pads (Rear)", 70_000),
    ("Brake Fluid", 40_000),
    ("Engine Air Filter", 30_000),
    ("Cabin Air Filter", 25_000),
    ("Timing Belt", 100_000),
    ("Spark Plugs (Long Life)", 100_000),
    ("Transmission Fluid", 90_000),
    ("Coolant (Flush)", 80_000),
    ("Fuel Filter", 60_000),
];

/// Immutable part table. Built once at startup; names iterate in sorted order.
#[derive(Debug, Clone)]
pub struct PartCatalog {
    parts: BTreeMap<String, Distance>,
}

impl PartCatalog {
    pub fn builtin() -> Self {
        let parts = DEFAULT_PARTS
            .iter()
            .map(|(name, lifespan)| (name.to_string(), *lifespan))
            .collect();
        Self { parts }
    }

    /// Builds a catalog from explicit entries, rejecting blank names,
    /// duplicates and zero lifespans.
    pub fn from_specs<I>(specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = PartSpec>,
    {
        let mut parts = BTreeMap::new();
        for spec in specs {
            Self::insert_checked(&mut parts, spec)?;
        }
        Ok(Self { parts })
    }

    /// Applies the configured catalog: defaults (unless replaced) plus extra entries.
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let keep_defaults = !config.replace_default_parts();
        let defaults = DEFAULT_PARTS
            .iter()
            .filter(|_| keep_defaults)
            .map(|(name, lifespan)| PartSpec::new(*name, *lifespan));

        let catalog = Self::from_specs(defaults.chain(config.extra_parts().iter().cloned()))?;
        if catalog.is_empty() {
            return Err(WearError::MissingConfigError {
                field: "catalog.parts".to_string(),
            });
        }

        tracing::debug!("Part catalog ready with {} entries", catalog.len());
        Ok(catalog)
    }

    fn insert_checked(parts: &mut BTreeMap<String, Distance>, spec: PartSpec) -> Result<()> {
        if spec.name.trim().is_empty() {
            return Err(WearError::InvalidConfigValueError {
                field: "catalog.parts.name".to_string(),
                value: spec.name,
                reason: "Part name cannot be empty".to_string(),
            });
        }
        if spec.lifespan_distance == 0 {
            return Err(WearError::InvalidConfigValueError {
                field: "catalog.parts.lifespan_km".to_string(),
                value: spec.name,
                reason: "Lifespan must be greater than zero".to_string(),
            });
        }
        if parts.contains_key(&spec.name) {
            return Err(WearError::InvalidConfigValueError {
                field: "catalog.parts.name".to_string(),
                value: spec.name,
                reason: "Duplicate part name".to_string(),
            });
        }
        parts.insert(spec.name, spec.lifespan_distance);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<Distance> {
        self.parts.get(name).copied()
    }

    pub fn specs(&self) -> impl Iterator<Item = PartSpec> + '_ {
        self.parts
            .iter()
            .map(|(name, lifespan)| PartSpec::new(name.clone(), *lifespan))
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl Default for PartCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PartLookup for PartCatalog {
    fn lifespan_of(&self, name: &str) -> Option<Distance> {
        self.lookup(name)
    }

    fn part_names(&self) -> Vec<&str> {
        self.parts.keys().map(String::as_str).collect()
    }

    fn name_at(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|index| self.parts.keys().nth(index))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_has_thirteen_parts() {
        let catalog = PartCatalog::builtin();
        assert_eq!(catalog.len(), 13);
        assert_eq!(catalog.lookup("Engine Oil (Synthetic)"), Some(10_000));
        assert_eq!(catalog.lookup("Tires (All-Season)"), Some(60_000));
        assert_eq!(catalog.lookup("Timing Belt"), Some(100_000));
        assert!(catalog.specs().all(|spec| spec.lifespan_distance > 0));
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = PartCatalog::builtin();
        assert_eq!(catalog.lookup("timing belt"), None);
        assert_eq!(catalog.lookup("Timing Belt "), None);
        assert_eq!(catalog.lookup("Flux Capacitor"), None);
    }

    #[test]
    fn test_selector_positions_follow_sorted_names() {
        let catalog = PartCatalog::builtin();
        assert_eq!(catalog.name_at(1), Some("Brake Fluid"));
        assert_eq!(catalog.name_at(13), Some("Transmission Fluid"));
        assert_eq!(catalog.name_at(0), None);
        assert_eq!(catalog.name_at(14), None);
    }

    #[test]
    fn test_from_specs_rejects_bad_entries() {
        assert!(PartCatalog::from_specs(vec![PartSpec::new("Wiper Blades", 0)]).is_err());
        assert!(PartCatalog::from_specs(vec![PartSpec::new("  ", 1_000)]).is_err());
        assert!(PartCatalog::from_specs(vec![
            PartSpec::new("Wiper Blades", 20_000),
            PartSpec::new("Wiper Blades", 25_000),
        ])
        .is_err());

        let catalog = PartCatalog::from_specs(vec![PartSpec::new("Wiper Blades", 20_000)]).unwrap();
        assert_eq!(catalog.part_names(), vec!["Wiper Blades"]);
    }
}
