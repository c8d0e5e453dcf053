use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One entry from the suggest endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub display_name: String,
    pub service_id: String,
}

/// Decoded suggest response: the service's hit count plus the returned rows
#[derive(Debug, Clone, Default)]
pub struct Suggestions {
    pub num_found: u64,
    pub candidates: Vec<Candidate>,
}

/// A fully resolved address as written to the output file.
///
/// Field order and serde names define the CSV columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Street")]
    pub street: String,
    #[serde(rename = "House_number")]
    pub house_number: String,
    /// The Locatieserver omits `postcode` for some addresses
    #[serde(rename = "Postal_code")]
    pub postal_code: Option<String>,
    #[serde(rename = "Place_name")]
    pub place_name: String,
    #[serde(rename = "Municipality")]
    pub municipality: String,
    #[serde(rename = "Province")]
    pub province: String,
    #[serde(rename = "RD_X_coord")]
    pub rd_x: String,
    #[serde(rename = "RD_Y_coord")]
    pub rd_y: String,
}

impl fmt::Display for AddressRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {} {} ({}, {}) RD {} {}",
            self.street,
            self.house_number,
            self.postal_code.as_deref().unwrap_or("-"),
            self.place_name,
            self.municipality,
            self.province,
            self.rd_x,
            self.rd_y
        )?;
        if !self.description.is_empty() {
            write!(f, " [{}]", self.description)?;
        }
        Ok(())
    }
}

/// Text encoding of the output file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(try_from = "String")]
pub enum OutputEncoding {
    #[default]
    Utf8,
    Latin1,
}

impl FromStr for OutputEncoding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(OutputEncoding::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(OutputEncoding::Latin1),
            other => Err(format!("unknown encoding '{other}'")),
        }
    }
}

impl TryFrom<String> for OutputEncoding {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}
