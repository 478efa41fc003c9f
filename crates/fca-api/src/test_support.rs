//! In-memory repositories and request helpers for handler tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
};
use mockall::mock;

use fca_core::domain::{Campaign, LogEntry, Lookup, LookupKey, Row};
use fca_core::error::{DomainError, StoreError};
use fca_core::repositories::{
    CampaignRepository, ImportSessionFactory, LogRepository, LookupRepository, RecordStore,
};
use fca_shared::config::{AppConfig, AppSettings, DatabaseSettings};
use fca_shared::constants::DEFAULT_MAX_UPLOAD_BYTES;

use crate::state::AppState;
use crate::views::Views;

#[derive(Default)]
pub struct FakeCampaigns {
    pub campaigns: Mutex<Vec<Campaign>>,
    pub created: Mutex<Vec<Row>>,
    pub updated: Mutex<Vec<(i64, Row)>>,
}

#[async_trait]
impl CampaignRepository for FakeCampaigns {
    async fn list(&self) -> Result<Vec<Campaign>, DomainError> {
        Ok(self.campaigns.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Campaign>, DomainError> {
        let campaigns = self.campaigns.lock().unwrap();
        Ok(campaigns.iter().find(|c| c.campaign_id == id).cloned())
    }

    async fn create(&self, row: &Row) -> Result<i64, DomainError> {
        let mut created = self.created.lock().unwrap();
        created.push(row.clone());
        Ok(created.len() as i64)
    }

    async fn update(&self, id: i64, row: &Row) -> Result<(), DomainError> {
        if self.find_by_id(id).await?.is_none() {
            return Err(DomainError::CampaignNotFound(id));
        }
        self.updated.lock().unwrap().push((id, row.clone()));
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut campaigns = self.campaigns.lock().unwrap();
        let before = campaigns.len();
        campaigns.retain(|c| c.campaign_id != id);
        if campaigns.len() == before {
            return Err(DomainError::CampaignNotFound(id));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeLookups {
    pub lookups: Mutex<Vec<Lookup>>,
    pub updated: Mutex<Vec<(LookupKey, Row)>>,
}

#[async_trait]
impl LookupRepository for FakeLookups {
    async fn list(&self) -> Result<Vec<Lookup>, DomainError> {
        Ok(self.lookups.lock().unwrap().clone())
    }

    async fn find(&self, key: &LookupKey) -> Result<Option<Lookup>, DomainError> {
        let lookups = self.lookups.lock().unwrap();
        Ok(lookups.iter().find(|l| l.key() == *key).cloned())
    }

    async fn create(&self, _row: &Row) -> Result<(), DomainError> {
        Ok(())
    }

    async fn update(&self, key: &LookupKey, row: &Row) -> Result<(), DomainError> {
        if self.find(key).await?.is_none() {
            return Err(DomainError::LookupNotFound(key.clone()));
        }
        self.updated.lock().unwrap().push((key.clone(), row.clone()));
        Ok(())
    }

    async fn delete(&self, key: &LookupKey) -> Result<(), DomainError> {
        let mut lookups = self.lookups.lock().unwrap();
        lookups.retain(|l| l.key() != *key);
        Ok(())
    }
}

mock! {
    pub Logs {}

    #[async_trait]
    impl LogRepository for Logs {
        async fn list(&self) -> Result<Vec<LogEntry>, DomainError>;
    }
}

/// Sessions whose inserts land in `committed` only on commit.
/// `fail_on_insert` makes the n-th insert (1-based) of a session fail.
#[derive(Default)]
pub struct FakeSessions {
    pub committed: Arc<Mutex<Vec<Row>>>,
    pub fail_on_insert: Option<usize>,
}

struct FakeSession {
    pending: Vec<Row>,
    inserts: usize,
    fail_on_insert: Option<usize>,
    committed: Arc<Mutex<Vec<Row>>>,
}

#[async_trait]
impl RecordStore for FakeSession {
    async fn insert(&mut self, row: &Row) -> Result<Option<i64>, StoreError> {
        self.inserts += 1;
        if self.fail_on_insert == Some(self.inserts) {
            return Err(StoreError::UniqueViolation("ACH_FCA_LOOKUP_PK".to_string()));
        }
        self.pending.push(row.clone());
        Ok(None)
    }

    async fn commit(&mut self) -> Result<(), StoreError> {
        self.committed.lock().unwrap().append(&mut self.pending);
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), StoreError> {
        self.pending.clear();
        Ok(())
    }
}

#[async_trait]
impl ImportSessionFactory for FakeSessions {
    async fn begin(&self) -> Result<Box<dyn RecordStore>, StoreError> {
        Ok(Box::new(FakeSession {
            pending: Vec::new(),
            inserts: 0,
            fail_on_insert: self.fail_on_insert,
            committed: Arc::clone(&self.committed),
        }))
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            env: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            name: "FCA Console".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        },
        database: DatabaseSettings {
            url: "postgres://localhost/fca_test".to_string(),
            schema: "public".to_string(),
            max_connections: 1,
            acquire_timeout_seconds: 1,
        },
    }
}

pub struct TestState {
    pub campaigns: Arc<FakeCampaigns>,
    pub lookups: Arc<FakeLookups>,
    pub logs: MockLogs,
    pub sessions: FakeSessions,
}

impl Default for TestState {
    fn default() -> Self {
        let mut logs = MockLogs::new();
        logs.expect_list().returning(|| Ok(Vec::new()));
        Self {
            campaigns: Arc::new(FakeCampaigns::default()),
            lookups: Arc::new(FakeLookups::default()),
            logs,
            sessions: FakeSessions::default(),
        }
    }
}

impl TestState {
    pub fn build(self) -> AppState {
        AppState {
            campaigns: self.campaigns,
            lookups: self.lookups,
            logs: Arc::new(self.logs),
            import_sessions: Arc::new(self.sessions),
            views: Arc::new(Views::new().unwrap()),
            config: test_config(),
        }
    }
}

pub fn multipart_request(uri: &str, filename: &str, bytes: &[u8]) -> Request<Body> {
    let boundary = "fca-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}
