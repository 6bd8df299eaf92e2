use dioxus::logger::tracing::{info, warn};

use crate::domain::entities::session::Session;
use crate::usecase::ports::sink::{RecordSink, SubmitError};

pub struct SubmitService<S> {
    sink: S,
}

impl<S: RecordSink> SubmitService<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Sends the held record once. The session is only read.
    pub async fn submit(&self, session: &Session) -> Result<(), SubmitError> {
        let Some(record) = session.record() else {
            warn!("submit requested with no extracted record");
            return Err(SubmitError::NoData);
        };

        match self.sink.deliver(record).await {
            Ok(()) => {
                info!(fields = record.len(), "record delivered");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "record delivery failed");
                Err(err)
            }
        }
    }
}

impl<S: Clone> Clone for SubmitService<S> {
    fn clone(&self) -> Self {
        Self {
            sink: self.sink.clone(),
        }
    }
}
