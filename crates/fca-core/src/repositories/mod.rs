//! Repository traits (ports)

pub mod record_store;
pub mod campaign_repository;
pub mod lookup_repository;
pub mod log_repository;

pub use record_store::{ImportSessionFactory, RecordStore};
pub use campaign_repository::CampaignRepository;
pub use lookup_repository::LookupRepository;
pub use log_repository::LogRepository;
