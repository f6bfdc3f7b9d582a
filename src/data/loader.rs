//! CSV loading
//!
//! Reads the two input files into typed records. The column names are fixed
//! by the upstream export; extra columns are ignored.
//!
//! Loading is all-or-nothing: the first malformed row, unknown category or
//! duplicate key fails the whole file with the offending line number.

use super::error::{DataError, DataResult};
use super::types::{CountryDeltaRecord, CountryYearRecord, Quartile, Region};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Raw temporal row as it appears in the file
#[derive(Debug, Deserialize)]
struct YearRow {
    #[serde(rename = "countries")]
    country: String,
    region: String,
    year: i32,
    #[serde(rename = "women_specific_pf")]
    freedom: f64,
    #[serde(rename = "Life Ladder")]
    happiness: f64,
    #[serde(rename = "Log GDP per capita")]
    gdp: f64,
}

/// Raw delta row as it appears in the file
#[derive(Debug, Deserialize)]
struct DeltaRow {
    #[serde(rename = "countries")]
    country: String,
    region: String,
    #[serde(rename = "wspf_quartile")]
    quartile: String,
    #[serde(rename = "delta_wspf")]
    delta_freedom: f64,
    #[serde(rename = "delta_life_ladder")]
    delta_happiness: f64,
    #[serde(rename = "Log GDP per capita")]
    gdp: f64,
    #[serde(rename = "women_specific_pf")]
    freedom: f64,
}

/// Load the temporal (country, year) dataset from a file
pub fn load_temporal(path: &Path) -> DataResult<Vec<CountryYearRecord>> {
    let file = open(path)?;
    let records = read_temporal(file)?;
    tracing::debug!("Loaded {} temporal records from {:?}", records.len(), path);
    Ok(records)
}

/// Load the decade-change dataset from a file
pub fn load_delta(path: &Path) -> DataResult<Vec<CountryDeltaRecord>> {
    let file = open(path)?;
    let records = read_delta(file)?;
    tracing::debug!("Loaded {} delta records from {:?}", records.len(), path);
    Ok(records)
}

/// Read temporal records from any reader
pub fn read_temporal<R: Read>(reader: R) -> DataResult<Vec<CountryYearRecord>> {
    let mut reader = csv_reader(reader);
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for (idx, result) in reader.deserialize::<YearRow>().enumerate() {
        let line = idx + 2;
        let row = result.map_err(|source| DataError::Csv { line, source })?;

        let region = parse_region(&row.region, line)?;
        check_finite(row.freedom, "women_specific_pf", line)?;
        check_finite(row.happiness, "Life Ladder", line)?;
        check_finite(row.gdp, "Log GDP per capita", line)?;

        if !seen.insert((row.country.clone(), row.year)) {
            return Err(DataError::DuplicateRecord {
                line,
                key: format!("({}, {})", row.country, row.year),
            });
        }

        records.push(CountryYearRecord::new(
            row.country,
            region,
            row.year,
            row.freedom,
            row.happiness,
            row.gdp,
        ));
    }

    Ok(records)
}

/// Read delta records from any reader
pub fn read_delta<R: Read>(reader: R) -> DataResult<Vec<CountryDeltaRecord>> {
    let mut reader = csv_reader(reader);
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for (idx, result) in reader.deserialize::<DeltaRow>().enumerate() {
        let line = idx + 2;
        let row = result.map_err(|source| DataError::Csv { line, source })?;

        let region = parse_region(&row.region, line)?;
        let quartile =
            Quartile::from_label(&row.quartile).ok_or_else(|| DataError::UnknownQuartile {
                line,
                value: row.quartile.clone(),
            })?;
        check_finite(row.delta_freedom, "delta_wspf", line)?;
        check_finite(row.delta_happiness, "delta_life_ladder", line)?;
        check_finite(row.gdp, "Log GDP per capita", line)?;
        check_finite(row.freedom, "women_specific_pf", line)?;

        if !seen.insert(row.country.clone()) {
            return Err(DataError::DuplicateRecord {
                line,
                key: row.country,
            });
        }

        records.push(CountryDeltaRecord::new(
            row.country,
            region,
            quartile,
            row.delta_freedom,
            row.delta_happiness,
            row.gdp,
            row.freedom,
        ));
    }

    Ok(records)
}

fn open(path: &Path) -> DataResult<File> {
    File::open(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn parse_region(value: &str, line: usize) -> DataResult<Region> {
    Region::from_label(value).ok_or_else(|| DataError::UnknownRegion {
        line,
        value: value.to_string(),
    })
}

fn check_finite(value: f64, column: &'static str, line: usize) -> DataResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DataError::NonFinite { line, column })
    }
}
