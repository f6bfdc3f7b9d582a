//! Figure text in English and Catalan

use crate::data::Quartile;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Language of titles, axis labels, hover text and callouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ca,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ca => "ca",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ca" | "catalan" | "català" => Ok(Locale::Ca),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static strings for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub temporal_title: &'static str,
    pub delta_title: &'static str,
    pub freedom_axis: &'static str,
    pub happiness_axis: &'static str,
    pub year: &'static str,
    pub freedom_index: &'static str,
    pub happiness_index: &'static str,
    pub quartile: &'static str,
    pub freedom_change: &'static str,
    pub happiness_change: &'static str,
    pub delta_legend: &'static str,
    pub less_freedom: &'static str,
    pub more_freedom: &'static str,
    pub play: &'static str,
    pub pause: &'static str,
    pub temporal_mode: &'static str,
    pub delta_mode: &'static str,
    pub size_note: &'static str,
}

const ENGLISH: Labels = Labels {
    temporal_title: "Evolution of women's personal freedom and happiness by country",
    delta_title: "Change in women's freedom and happiness by country (last decade)",
    freedom_axis: "Women's freedom",
    happiness_axis: "Happiness",
    year: "Year",
    freedom_index: "Freedom index",
    happiness_index: "Happiness index",
    quartile: "Quartile",
    freedom_change: "Freedom change",
    happiness_change: "Happiness change",
    delta_legend: "Women's freedom",
    less_freedom: "less freedom",
    more_freedom: "more freedom",
    play: "Play",
    pause: "Pause",
    temporal_mode: "Evolution over time",
    delta_mode: "Change",
    size_note: "Bubble size represents GDP per capita: the bigger the bubble, the higher the country's GDP.",
};

const CATALAN: Labels = Labels {
    temporal_title: "Evolució de la Llibertat personal de les dones i la Felicitat per país",
    delta_title: "Canvi en la Llibertat de les dones i la Felicitat per país (última dècada)",
    freedom_axis: "Llibertat dones",
    happiness_axis: "Felicitat",
    year: "Any",
    freedom_index: "Índex Llibertat",
    happiness_index: "Índex Felicitat",
    quartile: "Quartil",
    freedom_change: "Variació Llibertat",
    happiness_change: "Variació Felicitat",
    delta_legend: "Llibertat Dones",
    less_freedom: "menys llibertat",
    more_freedom: "més llibertat",
    play: "Reprodueix",
    pause: "Pausa",
    temporal_mode: "Evolució temporal",
    delta_mode: "Canvi",
    size_note: "La mida de les bombolles representa el PIB per càpita: com més gran la bombolla, més alt el PIB del país.",
};

impl Labels {
    pub fn for_locale(locale: Locale) -> &'static Labels {
        match locale {
            Locale::En => &ENGLISH,
            Locale::Ca => &CATALAN,
        }
    }

    /// Legend name of a quartile; the two extremes carry a descriptor
    pub fn quartile_name(&self, quartile: Quartile) -> String {
        match quartile {
            Quartile::Q1 => format!("Q1: {}", self.more_freedom),
            Quartile::Q4 => format!("Q4: {}", self.less_freedom),
            other => other.as_str().to_string(),
        }
    }
}
