//! Prepared datasets
//!
//! `Datasets` is the immutable handle produced once at startup: both tables
//! carry their normalised bubble size and the temporal table is ordered by
//! year. Everything downstream only borrows it.

use super::error::{DataError, DataResult};
use super::loader::{load_delta, load_temporal};
use super::scaling::min_max_scale;
use super::types::{CountryDeltaRecord, CountryYearRecord, Quartile, Region};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

/// Both prepared tables
#[derive(Debug, Clone, PartialEq)]
pub struct Datasets {
    temporal: Vec<CountryYearRecord>,
    delta: Vec<CountryDeltaRecord>,
}

/// Overview of the loaded data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub temporal_records: usize,
    pub delta_records: usize,
    pub countries: usize,
    pub years: Vec<i32>,
    pub regions: Vec<Region>,
    pub quartiles: Vec<Quartile>,
}

impl Datasets {
    /// Attach normalised sizes and order the temporal table by year.
    ///
    /// Each table is scaled over its own GDP column. The year sort is stable,
    /// so rows within a year keep their file order.
    pub fn prepare(
        mut temporal: Vec<CountryYearRecord>,
        mut delta: Vec<CountryDeltaRecord>,
    ) -> DataResult<Self> {
        if temporal.is_empty() {
            return Err(DataError::EmptyDataset("temporal"));
        }
        if delta.is_empty() {
            return Err(DataError::EmptyDataset("delta"));
        }

        let gdp: Vec<f64> = temporal.iter().map(|r| r.gdp).collect();
        for (record, size) in temporal.iter_mut().zip(min_max_scale(&gdp)?) {
            record.size = size;
        }

        let gdp: Vec<f64> = delta.iter().map(|r| r.gdp).collect();
        for (record, size) in delta.iter_mut().zip(min_max_scale(&gdp)?) {
            record.size = size;
        }

        temporal.sort_by_key(|r| r.year);

        Ok(Self { temporal, delta })
    }

    /// Load both files and prepare them
    pub fn load(temporal_path: &Path, delta_path: &Path) -> DataResult<Self> {
        let temporal = load_temporal(temporal_path)?;
        let delta = load_delta(delta_path)?;
        let datasets = Self::prepare(temporal, delta)?;

        tracing::info!(
            temporal = datasets.temporal.len(),
            delta = datasets.delta.len(),
            "Datasets prepared"
        );

        Ok(datasets)
    }

    /// Temporal records, ascending by year
    pub fn temporal(&self) -> &[CountryYearRecord] {
        &self.temporal
    }

    /// Delta records in file order
    pub fn delta(&self) -> &[CountryDeltaRecord] {
        &self.delta
    }

    /// Distinct years of the temporal table, ascending
    pub fn years(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self.temporal.iter().map(|r| r.year).collect();
        years.into_iter().collect()
    }

    pub fn summary(&self) -> DatasetSummary {
        let countries: BTreeSet<&str> = self
            .temporal
            .iter()
            .map(|r| r.country.as_str())
            .chain(self.delta.iter().map(|r| r.country.as_str()))
            .collect();
        let regions: BTreeSet<Region> = self
            .temporal
            .iter()
            .map(|r| r.region)
            .chain(self.delta.iter().map(|r| r.region))
            .collect();
        let quartiles: BTreeSet<Quartile> = self.delta.iter().map(|r| r.quartile).collect();

        DatasetSummary {
            temporal_records: self.temporal.len(),
            delta_records: self.delta.len(),
            countries: countries.len(),
            years: self.years(),
            regions: regions.into_iter().collect(),
            quartiles: quartiles.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{sample_datasets, DELTA_CSV, TEMPORAL_CSV};
    use crate::data::loader::{read_delta, read_temporal};
    use std::io::Write;

    #[test]
    fn test_prepare_sorts_by_year() {
        let datasets = sample_datasets();
        let years: Vec<i32> = datasets.temporal().iter().map(|r| r.year).collect();

        let mut sorted = years.clone();
        sorted.sort();
        assert_eq!(years, sorted);
    }

    #[test]
    fn test_prepare_sort_is_stable() {
        let datasets = sample_datasets();
        let in_2012: Vec<&str> = datasets
            .temporal()
            .iter()
            .filter(|r| r.year == 2012)
            .map(|r| r.country.as_str())
            .collect();
        assert_eq!(in_2012, vec!["Norway", "Chad", "Afghanistan"]);
    }

    #[test]
    fn test_sizes_within_unit_interval() {
        let datasets = sample_datasets();

        for record in datasets.temporal() {
            assert!((0.0..=1.0).contains(&record.size));
        }
        for record in datasets.delta() {
            assert!((0.0..=1.0).contains(&record.size));
        }
    }

    #[test]
    fn test_sizes_anchor_extremes() {
        let datasets = sample_datasets();

        let smallest = datasets
            .temporal()
            .iter()
            .find(|r| r.country == "Afghanistan" && r.year == 2022)
            .unwrap();
        let largest = datasets
            .temporal()
            .iter()
            .find(|r| r.country == "Norway" && r.year == 2022)
            .unwrap();
        assert_eq!(smallest.size, 0.0);
        assert_eq!(largest.size, 1.0);

        let delta = datasets.delta();
        assert_eq!(delta.iter().find(|r| r.country == "Afghanistan").unwrap().size, 0.0);
        assert_eq!(delta.iter().find(|r| r.country == "Ireland").unwrap().size, 1.0);
    }

    #[test]
    fn test_sizes_scaled_per_dataset() {
        let temporal = vec![
            CountryYearRecord::new("A", Region::Oceania, 2020, 5.0, 5.0, 10.0),
            CountryYearRecord::new("B", Region::Oceania, 2020, 5.0, 5.0, 20.0),
            CountryYearRecord::new("C", Region::Oceania, 2020, 5.0, 5.0, 30.0),
        ];
        let delta = vec![
            CountryDeltaRecord::new("A", Region::Oceania, Quartile::Q1, 0.1, 0.1, 100.0, 5.0),
            CountryDeltaRecord::new("B", Region::Oceania, Quartile::Q2, 0.1, 0.1, 200.0, 5.0),
        ];

        let datasets = Datasets::prepare(temporal, delta).unwrap();
        let sizes: Vec<f64> = datasets.temporal().iter().map(|r| r.size).collect();
        assert_eq!(sizes, vec![0.0, 0.5, 1.0]);
        let sizes: Vec<f64> = datasets.delta().iter().map(|r| r.size).collect();
        assert_eq!(sizes, vec![0.0, 1.0]);
    }

    #[test]
    fn test_prepare_rejects_empty() {
        let delta = read_delta(DELTA_CSV.as_bytes()).unwrap();
        let err = Datasets::prepare(Vec::new(), delta).unwrap_err();
        assert!(matches!(err, DataError::EmptyDataset("temporal")));

        let temporal = read_temporal(TEMPORAL_CSV.as_bytes()).unwrap();
        let err = Datasets::prepare(temporal, Vec::new()).unwrap_err();
        assert!(matches!(err, DataError::EmptyDataset("delta")));
    }

    #[test]
    fn test_summary() {
        let summary = sample_datasets().summary();

        assert_eq!(summary.temporal_records, 9);
        assert_eq!(summary.delta_records, 5);
        assert_eq!(summary.years, vec![2012, 2017, 2022]);
        assert_eq!(summary.countries, 6);
        assert_eq!(summary.quartiles, Quartile::all().to_vec());
        assert_eq!(summary.regions[0], Region::WesternEurope);
    }

    #[test]
    fn test_load_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let temporal_path = dir.path().join("slider.csv");
        let delta_path = dir.path().join("change.csv");
        std::fs::File::create(&temporal_path)
            .unwrap()
            .write_all(TEMPORAL_CSV.as_bytes())
            .unwrap();
        std::fs::File::create(&delta_path)
            .unwrap()
            .write_all(DELTA_CSV.as_bytes())
            .unwrap();

        let datasets = Datasets::load(&temporal_path, &delta_path).unwrap();
        assert_eq!(datasets, sample_datasets());
    }
}
