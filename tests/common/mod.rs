#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use urlsnip::application::services::UrlService;
use urlsnip::domain::entities::UrlRecord;
use urlsnip::domain::repositories::UrlRepository;
use urlsnip::error::AppError;
use urlsnip::infrastructure::length_hint::StaticLengthHint;
use urlsnip::state::AppState;
use urlsnip::utils::code_generator::CodeGenerator;
use urlsnip::utils::random::OsRandom;

pub const BASE_URL: &str = "https://snip.example.com";

/// In-memory record store with the same observable contract as the Postgres
/// repository, including the duplicate-id conflict signal.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    records: Mutex<HashMap<String, UrlRecord>>,
}

impl InMemoryUrlRepository {
    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.lock().unwrap().contains_key(id)
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn insert(&self, record: UrlRecord) -> Result<UrlRecord, AppError> {
        let mut records = self.records.lock().unwrap();
        if records.contains_key(&record.id) {
            return Err(AppError::conflict("Short code already exists"));
        }
        records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UrlRecord>, AppError> {
        Ok(self.records.lock().unwrap().get(id).cloned())
    }

    async fn find_unexpired_by_id(
        &self,
        id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<UrlRecord>, AppError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .get(id)
            .filter(|r| r.expires_at.is_none_or(|e| e > now))
            .cloned())
    }

    async fn find_by_session(&self, session_token: &str) -> Result<Vec<UrlRecord>, AppError> {
        let mut records: Vec<UrlRecord> = self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.session_token == session_token)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn find_expired(&self, now: DateTime<Utc>) -> Result<Vec<UrlRecord>, AppError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.expires_at.is_some_and(|e| e < now))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let mut records: Vec<UrlRecord> =
            self.records.lock().unwrap().values().cloned().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn delete_by_id_and_session(
        &self,
        id: &str,
        session_token: &str,
    ) -> Result<bool, AppError> {
        let mut records = self.records.lock().unwrap();
        let matches = records
            .get(id)
            .is_some_and(|r| r.session_token == session_token);
        if matches {
            records.remove(id);
        }
        Ok(matches)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<Vec<String>, AppError> {
        let mut records = self.records.lock().unwrap();
        let purged: Vec<String> = records
            .values()
            .filter(|r| r.expires_at.is_some_and(|e| e < now))
            .map(|r| r.id.clone())
            .collect();
        for id in &purged {
            records.remove(id);
        }
        Ok(purged)
    }
}

pub fn make_record(
    id: &str,
    session_token: &str,
    expires_at: Option<DateTime<Utc>>,
) -> UrlRecord {
    UrlRecord {
        id: id.to_string(),
        destination: "https://example.com/page".to_string(),
        created_at: Utc::now(),
        short_url: format!("{BASE_URL}/{id}"),
        expires_at,
        session_token: session_token.to_string(),
        password_hash: None,
    }
}

/// Builds handler state over an in-memory store with a fixed length hint of 6.
pub fn create_test_state() -> (AppState, Arc<InMemoryUrlRepository>) {
    let repository = Arc::new(InMemoryUrlRepository::default());

    let url_service = Arc::new(UrlService::new(
        repository.clone(),
        Arc::new(StaticLengthHint::new(6)),
        CodeGenerator::new(Arc::new(OsRandom)),
        BASE_URL,
    ));

    (AppState { url_service }, repository)
}
