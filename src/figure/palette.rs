//! Category colours
//!
//! Regions use the Okabe-Ito colour-blind-safe palette; quartiles use a
//! diverging blue-to-red scale where blue is the most freedom gained.
//! Both lookups are exhaustive matches, so every category has a colour.

use crate::data::{Quartile, Region};

pub const BACKGROUND: &str = "white";
pub const REFERENCE_LINE: &str = "gray";
pub const ANNOTATION_TEXT: &str = "white";

pub fn region_color(region: Region) -> &'static str {
    match region {
        Region::SubSaharanAfrica => "#E69F00",
        Region::EasternEurope => "#56B4E9",
        Region::LatinAmericaCaribbean => "#009E73",
        Region::WesternEurope => "#F0E442",
        Region::SouthAsia => "#0072B2",
        Region::MiddleEastNorthAfrica => "#D55E00",
        Region::CaucasusCentralAsia => "#CC79A7",
        Region::EastAsia => "#999999",
        Region::NorthAmerica => "#882255",
        Region::Oceania => "#117733",
    }
}

pub fn quartile_color(quartile: Quartile) -> &'static str {
    match quartile {
        Quartile::Q1 => "#2C7BB6",
        Quartile::Q2 => "#ABD9E9",
        Quartile::Q3 => "#FDAE61",
        Quartile::Q4 => "#D7191C",
    }
}
