use std::time::Duration;

use dioxus::logger::tracing::debug;
use reqwest::{Client, Url};

use crate::domain::entities::record::ExtractedRecord;
use crate::usecase::ports::sink::{RecordSink, SubmitError};

/// Posts records as JSON to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpWebhook {
    client: Client,
    url: Url,
}

impl HttpWebhook {
    pub fn new(url: Url, timeout: Option<Duration>) -> Result<Self, SubmitError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| SubmitError::Transport(err.to_string()))?;
        Ok(Self { client, url })
    }
}

impl RecordSink for HttpWebhook {
    async fn deliver(&self, record: &ExtractedRecord) -> Result<(), SubmitError> {
        debug!(url = %self.url, fields = record.len(), "posting extracted record");

        // `json` sets `Content-Type: application/json`.
        let response = self
            .client
            .post(self.url.clone())
            .json(record)
            .send()
            .await
            .map_err(|err| SubmitError::Transport(err.to_string()))?;

        let status = response.status();
        debug!(%status, "webhook responded");
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmitError::Status(status.as_u16()))
        }
    }
}
