//! Locatieserver endpoints and fixed query parameters.

// PDOK Locatieserver v3_1 (current) and the v3 endpoint the legacy profile targets
pub const LOCATIESERVER_BASE_URL: &str = "https://api.pdok.nl/bzk/locatieserver/search/v3_1";
pub const LEGACY_LOCATIESERVER_BASE_URL: &str =
    "https://geodata.nationaalgeoregister.nl/locatieserver/v3";

pub const SUGGEST_PATH: &str = "suggest";
pub const LOOKUP_PATH: &str = "lookup";

/// Maximum number of suggestions requested from the service
pub const SUGGEST_ROWS: u32 = 15;

/// Appended to every search so only address documents come back
pub const ADDRESS_TYPE_QUALIFIER: &str = " and type:adres";

// Output file
pub const DEFAULT_OUTPUT_FILE: &str = "addresses.csv";
pub const CSV_DELIMITER: u8 = b';';

/// Column order of the output file; matches the serde renames on `AddressRecord`
pub const CSV_FIELDNAMES: [&str; 9] = [
    "Description",
    "Street",
    "House_number",
    "Postal_code",
    "Place_name",
    "Municipality",
    "Province",
    "RD_X_coord",
    "RD_Y_coord",
];

pub const DEFAULT_CONFIG_FILE: &str = "nl_address_locator.toml";

// Environment overrides (read after .env is loaded)
pub const ENV_BASE_URL: &str = "NL_LOCATOR_BASE_URL";
pub const ENV_OUTPUT: &str = "NL_LOCATOR_OUTPUT";
pub const ENV_ENCODING: &str = "NL_LOCATOR_ENCODING";
pub const ENV_LOG_DIR: &str = "NL_LOCATOR_LOG_DIR";
