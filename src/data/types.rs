//! Core data types for the freedom/happiness datasets
//!
//! - `Region` and `Quartile`: fixed category enums used for colouring
//! - `CountryYearRecord`: one row of the temporal dataset
//! - `CountryDeltaRecord`: one row of the decade-change dataset

use serde::{Serialize, Serializer};

/// World region of a country
///
/// Variants are declared in legend order, so `Ord` follows the order the
/// charts list regions in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    WesternEurope,
    NorthAmerica,
    Oceania,
    EasternEurope,
    EastAsia,
    MiddleEastNorthAfrica,
    LatinAmericaCaribbean,
    CaucasusCentralAsia,
    SouthAsia,
    SubSaharanAfrica,
}

impl Region {
    /// All regions in legend order
    pub fn all() -> &'static [Region] {
        &[
            Region::WesternEurope,
            Region::NorthAmerica,
            Region::Oceania,
            Region::EasternEurope,
            Region::EastAsia,
            Region::MiddleEastNorthAfrica,
            Region::LatinAmericaCaribbean,
            Region::CaucasusCentralAsia,
            Region::SouthAsia,
            Region::SubSaharanAfrica,
        ]
    }

    /// Label as it appears in the `region` column
    pub fn as_str(self) -> &'static str {
        match self {
            Region::WesternEurope => "Western Europe",
            Region::NorthAmerica => "North America",
            Region::Oceania => "Oceania",
            Region::EasternEurope => "Eastern Europe",
            Region::EastAsia => "East Asia",
            Region::MiddleEastNorthAfrica => "Middle East & North Africa",
            Region::LatinAmericaCaribbean => "Latin America & the Caribbean",
            Region::CaucasusCentralAsia => "Caucasus & Central Asia",
            Region::SouthAsia => "South Asia",
            Region::SubSaharanAfrica => "Sub-Saharan Africa",
        }
    }

    /// Parse a dataset label. Surrounding whitespace is ignored.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Region::all().iter().copied().find(|r| r.as_str() == label)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Bucket of a country's decade-long change in freedom index
///
/// `Q1` holds the countries that gained the most freedom, `Q4` the ones that
/// gained the least (or lost it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Quartile {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quartile {
    /// All quartiles in legend order
    pub fn all() -> &'static [Quartile] {
        &[Quartile::Q1, Quartile::Q2, Quartile::Q3, Quartile::Q4]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Quartile::Q1 => "Q1",
            Quartile::Q2 => "Q2",
            Quartile::Q3 => "Q3",
            Quartile::Q4 => "Q4",
        }
    }

    /// Parse a `wspf_quartile` label.
    ///
    /// Only the bucket prefix before `:` is significant, so
    /// `"Q1: més llibertat"`, `"Q1: more freedom"` and `"Q1"` are the same.
    pub fn from_label(label: &str) -> Option<Self> {
        let prefix = label.split(':').next().unwrap_or_default().trim();
        Quartile::all()
            .iter()
            .copied()
            .find(|q| q.as_str().eq_ignore_ascii_case(prefix))
    }
}

impl std::fmt::Display for Quartile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One country in one year (temporal dataset)
#[derive(Debug, Clone, PartialEq)]
pub struct CountryYearRecord {
    pub country: String,
    pub region: Region,
    pub year: i32,
    /// Women's personal freedom index
    pub freedom: f64,
    /// Happiness (life ladder) score
    pub happiness: f64,
    /// GDP proxy (log GDP per capita)
    pub gdp: f64,
    /// Min-max scaled GDP proxy, filled in by `Datasets::prepare`
    pub size: f64,
}

impl CountryYearRecord {
    pub fn new(
        country: impl Into<String>,
        region: Region,
        year: i32,
        freedom: f64,
        happiness: f64,
        gdp: f64,
    ) -> Self {
        Self {
            country: country.into(),
            region,
            year,
            freedom,
            happiness,
            gdp,
            size: 0.0,
        }
    }
}

/// One country's change over the decade (delta dataset)
#[derive(Debug, Clone, PartialEq)]
pub struct CountryDeltaRecord {
    pub country: String,
    pub region: Region,
    pub quartile: Quartile,
    /// Change in women's freedom index over the decade
    pub delta_freedom: f64,
    /// Change in happiness score over the decade
    pub delta_happiness: f64,
    pub gdp: f64,
    /// Absolute freedom index at the end of the decade
    pub freedom: f64,
    pub size: f64,
}

impl CountryDeltaRecord {
    pub fn new(
        country: impl Into<String>,
        region: Region,
        quartile: Quartile,
        delta_freedom: f64,
        delta_happiness: f64,
        gdp: f64,
        freedom: f64,
    ) -> Self {
        Self {
            country: country.into(),
            region,
            quartile,
            delta_freedom,
            delta_happiness,
            gdp,
            freedom,
            size: 0.0,
        }
    }
}
