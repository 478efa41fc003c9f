//! Log repository trait (port)

use async_trait::async_trait;
use crate::domain::LogEntry;
use crate::error::DomainError;

#[async_trait]
pub trait LogRepository: Send + Sync {
    /// All log rows, newest `COMPENSATIONDATE` first
    async fn list(&self) -> Result<Vec<LogEntry>, DomainError>;
}
