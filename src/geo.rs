// Geocoding — resolves street addresses to coordinates for the center
// directory. Out of the analysis pipeline's path entirely; only the
// add-center flow touches it.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Trait for address geocoding. `Ok(None)` means the service answered but
/// found nothing for the address.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Option<GeoPoint>>;
}

/// Nominatim (OpenStreetMap) geocoder.
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimGeocoder {
    /// Create a geocoder pointing at the given base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        // Nominatim's usage policy requires an identifying User-Agent.
        let client = reqwest::Client::builder()
            .user_agent("lantern/0.1 (service-center directory)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<GeoPoint>> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .context("Geocoding request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Geocoder returned {}: {}", status, body);
        }

        let results: Vec<SearchResult> = response
            .json()
            .await
            .context("Failed to parse geocoder response")?;

        let Some(hit) = results.into_iter().next() else {
            debug!(address, "Geocoder found no match");
            return Ok(None);
        };

        // Nominatim returns coordinates as strings.
        let latitude: f64 = hit.lat.parse().context("Invalid latitude in geocoder response")?;
        let longitude: f64 = hit.lon.parse().context("Invalid longitude in geocoder response")?;

        Ok(Some(GeoPoint {
            latitude,
            longitude,
        }))
    }
}

#[derive(Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}
