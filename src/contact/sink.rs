//! Destinations for accepted contact submissions

use super::ContactSubmission;
use crate::error::Result;
use parking_lot::Mutex;
use tracing::info;

/// Records an accepted submission
pub trait ContactSink: Send + Sync {
    fn record(&self, submission: &ContactSubmission) -> Result<()>;

    /// Human-readable sink name for logs
    fn name(&self) -> &'static str;
}

/// Writes each submission to the operational log
#[derive(Debug, Default)]
pub struct TracingSink;

impl ContactSink for TracingSink {
    fn record(&self, submission: &ContactSubmission) -> Result<()> {
        info!(
            target: "contact",
            id = %submission.id,
            name = %submission.name,
            email = %submission.email,
            subject = submission.subject.as_deref().unwrap_or(""),
            message = %submission.message,
            received_at = %submission.received_at.to_rfc3339(),
            "Contact form submission"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "tracing"
    }
}

/// Keeps submissions in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    submissions: Mutex<Vec<ContactSubmission>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> Vec<ContactSubmission> {
        self.submissions.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.submissions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.lock().is_empty()
    }
}

impl ContactSink for MemorySink {
    fn record(&self, submission: &ContactSubmission) -> Result<()> {
        self.submissions.lock().push(submission.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
