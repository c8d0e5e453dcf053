//! Extraction of RD (EPSG:28992) coordinates from the Locatieserver centroid field.
//!
//! `centroide_rd` arrives as WKT text such as `POINT(121394.851 487383.532)`.
//! RD coordinates inside the Netherlands are always positive, so only unsigned
//! decimals are matched and the first two are taken as X then Y.

use crate::error::{LocatorError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("valid decimal regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RdPoint {
    pub x: String,
    pub y: String,
}

/// Parse the first two unsigned decimals of `centroid` as X and Y.
pub fn parse_rd_point(centroid: &str) -> Result<RdPoint> {
    let mut numbers = DECIMAL.find_iter(centroid).map(|m| m.as_str().to_string());
    match (numbers.next(), numbers.next()) {
        (Some(x), Some(y)) => Ok(RdPoint { x, y }),
        _ => Err(LocatorError::Coordinates(centroid.to_string())),
    }
}
