//! Data Preparation
//!
//! Loads the two CSV datasets and enriches them for charting:
//!
//! - **Temporal**: one row per (country, year) with freedom, happiness and
//!   GDP proxy, sorted by year after loading
//! - **Delta**: one row per country with the decade change in freedom and
//!   happiness plus its quartile bucket
//!
//! Both tables get a `size` column, the GDP proxy min-max scaled to `[0, 1]`
//! over that table alone.

pub mod dataset;
pub mod error;
pub mod loader;
pub mod scaling;
pub mod types;

pub use dataset::{DatasetSummary, Datasets};
pub use error::{DataError, DataResult};
pub use loader::{load_delta, load_temporal, read_delta, read_temporal};
pub use scaling::min_max_scale;
pub use types::{CountryDeltaRecord, CountryYearRecord, Quartile, Region};

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Three countries over three years, deliberately not in year order
    pub const TEMPORAL_CSV: &str = "\
countries,region,year,women_specific_pf,Life Ladder,Log GDP per capita
Norway,Western Europe,2022,9.8,7.3,11.1
Norway,Western Europe,2012,9.6,7.7,11.0
Chad,Sub-Saharan Africa,2012,5.0,4.0,7.3
Afghanistan,South Asia,2012,3.9,3.8,7.5
Norway,Western Europe,2017,9.7,7.5,11.05
Chad,Sub-Saharan Africa,2017,4.8,4.3,7.4
Afghanistan,South Asia,2017,3.5,2.7,7.6
Chad,Sub-Saharan Africa,2022,4.6,4.4,7.3
Afghanistan,South Asia,2022,2.1,1.3,7.2
";

    /// Ireland and Iceland tie on the maximum freedom index
    pub const DELTA_CSV: &str = "\
countries,region,wspf_quartile,delta_wspf,delta_life_ladder,Log GDP per capita,women_specific_pf
Ireland,Western Europe,Q1: més llibertat,0.9,0.2,11.5,9.6
Japan,East Asia,Q2,0.3,-0.1,10.6,8.7
Chad,Sub-Saharan Africa,Q3,-0.4,0.4,7.3,4.6
Iceland,Western Europe,Q2,0.2,0.1,10.9,9.6
Afghanistan,South Asia,Q4: menys llibertat,-1.8,-2.5,7.2,2.1
";

    pub fn sample_datasets() -> Datasets {
        let temporal = read_temporal(TEMPORAL_CSV.as_bytes()).unwrap();
        let delta = read_delta(DELTA_CSV.as_bytes()).unwrap();
        Datasets::prepare(temporal, delta).unwrap()
    }
}
