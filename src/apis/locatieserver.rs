use crate::app::ports::HttpClientPort;
use crate::constants::{ADDRESS_TYPE_QUALIFIER, LOOKUP_PATH, SUGGEST_PATH, SUGGEST_ROWS};
use crate::error::{LocatorError, Result};
use crate::parser::parse_rd_point;
use crate::types::{AddressRecord, Candidate, Suggestions};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    response: T,
}

#[derive(Debug, Deserialize)]
struct SuggestBody {
    #[serde(rename = "numFound")]
    num_found: u64,
    docs: Vec<SuggestDoc>,
}

#[derive(Debug, Deserialize)]
struct SuggestDoc {
    weergavenaam: String,
    id: String,
}

#[derive(Debug, Deserialize)]
struct LookupBody {
    docs: Vec<LookupDoc>,
}

/// The subset of a lookup document that ends up in the output file.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupDoc {
    pub straatnaam: String,
    pub huis_nlt: String,
    #[serde(default)]
    pub postcode: Option<String>,
    pub woonplaatsnaam: String,
    pub gemeentenaam: String,
    pub provincienaam: String,
    pub centroide_rd: String,
}

/// Client for the PDOK Locatieserver suggest and lookup endpoints.
pub struct LocatieserverClient {
    http: Arc<dyn HttpClientPort>,
    base_url: String,
    rows: u32,
}

impl LocatieserverClient {
    /// `base_url` is the search root, e.g. `https://api.pdok.nl/bzk/locatieserver/search/v3_1`.
    pub fn new(http: Arc<dyn HttpClientPort>, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            rows: SUGGEST_ROWS,
        }
    }

    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    pub fn suggest_url(&self, fragment: &str) -> Result<Url> {
        let query = format!("{fragment}{ADDRESS_TYPE_QUALIFIER}");
        let rows = self.rows.to_string();
        self.endpoint(SUGGEST_PATH, &[("rows", rows.as_str()), ("q", query.as_str())])
    }

    pub fn lookup_url(&self, service_id: &str) -> Result<Url> {
        self.endpoint(LOOKUP_PATH, &[("id", service_id)])
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let raw = format!("{}/{}", self.base_url, path);
        Url::parse_with_params(&raw, params)
            .map_err(|e| LocatorError::Config(format!("Invalid Locatieserver URL '{raw}': {e}")))
    }

    /// Fetch up to `rows` address suggestions for a free-text fragment.
    #[instrument(skip(self))]
    pub async fn suggest(&self, fragment: &str) -> Result<Suggestions> {
        let url = self.suggest_url(fragment)?;
        let body: SuggestBody = self.fetch(&url).await?;
        info!(num_found = body.num_found, returned = body.docs.len(), "suggest complete");

        let candidates = body
            .docs
            .into_iter()
            .map(|d| Candidate {
                display_name: d.weergavenaam,
                service_id: d.id,
            })
            .collect();
        Ok(Suggestions {
            num_found: body.num_found,
            candidates,
        })
    }

    /// Fetch the full details for one suggestion id.
    ///
    /// The returned record has an empty description.
    #[instrument(skip(self))]
    pub async fn lookup(&self, service_id: &str) -> Result<AddressRecord> {
        let url = self.lookup_url(service_id)?;
        let body: LookupBody = self.fetch(&url).await?;
        if body.docs.len() > 1 {
            warn!(count = body.docs.len(), "lookup returned several documents, keeping the last");
        }
        record_from_docs(&body.docs)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        debug!(%url, "GET");
        let resp = self.http.get(url.as_str()).await?;
        if !resp.is_success() {
            return Err(LocatorError::Status {
                status: resp.status,
                url: url.to_string(),
            });
        }
        let envelope: Envelope<T> = serde_json::from_slice(&resp.bytes)?;
        Ok(envelope.response)
    }
}

/// Fold lookup documents into one record; later documents overwrite earlier ones.
pub fn record_from_docs(docs: &[LookupDoc]) -> Result<AddressRecord> {
    if docs.is_empty() {
        return Err(LocatorError::MissingField("response.docs is empty".into()));
    }

    let mut record = AddressRecord::default();
    for doc in docs {
        record.street = doc.straatnaam.clone();
        record.house_number = doc.huis_nlt.clone();
        if let Some(postcode) = &doc.postcode {
            record.postal_code = Some(postcode.clone());
        }
        record.place_name = doc.woonplaatsnaam.clone();
        record.municipality = doc.gemeentenaam.clone();
        record.province = doc.provincienaam.clone();
        let point = parse_rd_point(&doc.centroide_rd)?;
        record.rd_x = point.x;
        record.rd_y = point.y;
    }
    Ok(record)
}
