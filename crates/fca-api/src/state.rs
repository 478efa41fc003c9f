use std::sync::Arc;

use fca_core::repositories::{
    CampaignRepository, ImportSessionFactory, LogRepository, LookupRepository,
};
use fca_shared::config::AppConfig;

use crate::views::Views;

#[derive(Clone)]
pub struct AppState {
    pub campaigns: Arc<dyn CampaignRepository>,
    pub lookups: Arc<dyn LookupRepository>,
    pub logs: Arc<dyn LogRepository>,
    pub import_sessions: Arc<dyn ImportSessionFactory>,
    pub views: Arc<Views>,
    pub config: AppConfig,
}
