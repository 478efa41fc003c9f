//! PostgreSQL repository implementations

mod sql;
pub mod import_session;
pub mod campaign_repo_impl;
pub mod lookup_repo_impl;
pub mod log_repo_impl;

pub use import_session::{PgImportSession, PgImportSessionFactory};
pub use campaign_repo_impl::PgCampaignRepository;
pub use lookup_repo_impl::PgLookupRepository;
pub use log_repo_impl::PgLogRepository;
