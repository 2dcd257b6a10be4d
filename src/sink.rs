use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::debug;

use crate::error::TransportError;
use crate::parser::SlotRecord;

/// Writes one JSON document per slot to a daily Elasticsearch index
/// (`{index}-YYYY.MM.DD`, Logstash convention). One client is built at
/// startup and reused across poll cycles.
pub struct EsSink {
    client: reqwest::Client,
    base_url: String,
    index: String,
    shipper: String,
}

impl EsSink {
    pub fn new(destination: &str, index: &str, shipper: &str) -> Result<Self> {
        let (host, port) = destination
            .rsplit_once(':')
            .with_context(|| format!("destination {destination:?} is not host:port"))?;
        port.parse::<u16>()
            .with_context(|| format!("destination port {port:?} is not a number"))?;

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: format!("http://{host}:{port}"),
            index: index.to_string(),
            shipper: shipper.to_string(),
        })
    }

    pub async fn index_record(&self, record: &SlotRecord) -> Result<(), TransportError> {
        let now = Utc::now();
        let url = format!("{}/{}/_doc", self.base_url, daily_index(&self.index, now));
        let doc = document(record, &self.shipper, now);

        debug!("Indexing slot {} to {}", record.slot_number, url);
        let response = self
            .client
            .post(&url)
            .json(&doc)
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Rejected {
                url,
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }
        Ok(())
    }
}

fn daily_index(index: &str, now: DateTime<Utc>) -> String {
    format!("{}-{}", index, now.format("%Y.%m.%d"))
}

fn document(record: &SlotRecord, shipper: &str, now: DateTime<Utc>) -> serde_json::Value {
    json!({
        "@timestamp": now.to_rfc3339(),
        "shipper": shipper,
        "slot_number": record.slot_number,
        "media_error_count": record.media_error_count,
        "other_error_count": record.other_error_count,
        "serial_number": record.serial_number,
        "model_number": record.model_number,
        "firmware_version": record.firmware_version,
        "smart_alert": record.smart_alert,
        "state": record.state,
    })
}

// ── Tests ──
