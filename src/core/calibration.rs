//! MTL calibration constants.
//!
//! Landsat Level-1 scenes ship a plain-text `*_MTL.txt` file carrying, among
//! hundreds of other keys, the per-band radiance rescaling factors and the
//! TIRS thermal conversion constants. One pass over the text collects the
//! four tag families the pipeline needs; everything else is ignored.
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static MULT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*RADIANCE_MULT_BAND_(\d+)\s*=\s*([0-9.eE+\-]+)").expect("valid regex")
});
static ADD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*RADIANCE_ADD_BAND_(\d+)\s*=\s*([0-9.eE+\-]+)").expect("valid regex")
});
static K1_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*K1_CONSTANT_BAND_10\s*=\s*([0-9.eE+\-]+)").expect("valid regex")
});
static K2_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*K2_CONSTANT_BAND_10\s*=\s*([0-9.eE+\-]+)").expect("valid regex")
});

/// Linear radiance rescaling for one band: `L = mult * DN + add`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadianceScaling {
    pub mult: f64,
    pub add: f64,
}

/// Per-band radiance rescaling factors plus the TIRS thermal constants,
/// collected once from MTL text and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct CalibrationTable {
    mult: BTreeMap<u32, f64>,
    add: BTreeMap<u32, f64>,
    k1: Option<f64>,
    k2: Option<f64>,
}

impl CalibrationTable {
    /// Scan MTL text line by line. Matching is case-insensitive, line order is
    /// irrelevant, and a repeated tag overwrites the earlier value.
    pub fn parse(text: &str) -> Result<Self> {
        let mut table = CalibrationTable::default();

        for line in text.lines() {
            if let Some(cap) = MULT_RE.captures(line) {
                let band = parse_band(&cap[1], "RADIANCE_MULT_BAND")?;
                let key = format!("RADIANCE_MULT_BAND_{}", band);
                table.mult.insert(band, parse_value(&cap[2], &key)?);
            }
            if let Some(cap) = ADD_RE.captures(line) {
                let band = parse_band(&cap[1], "RADIANCE_ADD_BAND")?;
                let key = format!("RADIANCE_ADD_BAND_{}", band);
                table.add.insert(band, parse_value(&cap[2], &key)?);
            }
            if let Some(cap) = K1_RE.captures(line) {
                table.k1 = Some(parse_value(&cap[1], "K1_CONSTANT_BAND_10")?);
            }
            if let Some(cap) = K2_RE.captures(line) {
                table.k2 = Some(parse_value(&cap[1], "K2_CONSTANT_BAND_10")?);
            }
        }

        Ok(table)
    }

    /// Band numbers with a multiplicative factor, in ascending order.
    pub fn band_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.mult.keys().copied()
    }

    /// Complete rescaling pair for a band, or `None` when either factor is
    /// missing. Callers skip such bands with a warning rather than failing.
    pub fn scaling(&self, band: u32) -> Option<RadianceScaling> {
        Some(RadianceScaling {
            mult: *self.mult.get(&band)?,
            add: *self.add.get(&band)?,
        })
    }

    /// K1/K2 for brightness temperature. Fails fast when either constant was
    /// never seen so the thermal chain cannot silently run without them.
    pub fn thermal_constants(&self) -> Result<(f64, f64)> {
        match (self.k1, self.k2) {
            (Some(k1), Some(k2)) => Ok((k1, k2)),
            _ => Err(Error::MissingThermalConstants),
        }
    }
}

fn parse_band(digits: &str, family: &str) -> Result<u32> {
    digits.parse().map_err(|_| Error::MalformedConstant {
        key: format!("{}_{}", family, digits),
        value: digits.to_string(),
    })
}

fn parse_value(literal: &str, key: &str) -> Result<f64> {
    literal.parse().map_err(|_| Error::MalformedConstant {
        key: key.to_string(),
        value: literal.to_string(),
    })
}
