use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::interview::{Interview, NewInterview, UpdateInterviewRequest};
use crate::store::{InterviewFilter, RecordStore, SortField, SortOrder, SortSpec, StoreError};

/// In-process store backing the test suite. Records are kept in insertion
/// order, which serves as the natural tiebreak for sorted reads.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Interview>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn matches_filter(interview: &Interview, filter: &InterviewFilter) -> bool {
    if let Some(search) = &filter.search {
        let term = search.to_lowercase();
        let hit = contains_ci(&interview.company, &term)
            || contains_ci(&interview.position, &term)
            || contains_ci(&interview.location, &term)
            || interview
                .contact_person
                .as_deref()
                .map(|p| contains_ci(p, &term))
                .unwrap_or(false);
        if !hit {
            return false;
        }
    }
    if let Some(status) = filter.status {
        if interview.status != status {
            return false;
        }
    }
    if let Some(interview_type) = filter.interview_type {
        if interview.interview_type != interview_type {
            return false;
        }
    }
    true
}

fn sort_records(records: &mut [Interview], sort: SortSpec) {
    // sort_by is stable, so equal keys keep insertion order.
    records.sort_by(|a, b| {
        let ordering = match sort.field {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Company => a.company.cmp(&b.company),
            SortField::Position => a.position.cmp(&b.position),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        match sort.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert(&self, interview: NewInterview) -> Result<Interview, StoreError> {
        let now = Utc::now();
        let created = Interview {
            id: Uuid::new_v4(),
            company: interview.company,
            position: interview.position,
            date: interview.date,
            time: interview.time,
            location: interview.location,
            interview_type: interview.interview_type,
            status: interview.status,
            contact_person: interview.contact_person,
            contact_email: interview.contact_email,
            notes: interview.notes,
            created_at: now,
            updated_at: now,
        };

        self.records.write().await.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Interview>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|i| i.id == id).cloned())
    }

    async fn find_many(
        &self,
        filter: &InterviewFilter,
        sort: SortSpec,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Interview>, StoreError> {
        let records = self.records.read().await;
        let mut matched: Vec<Interview> = records
            .iter()
            .filter(|i| matches_filter(i, filter))
            .cloned()
            .collect();
        sort_records(&mut matched, sort);

        let skip = skip.max(0) as usize;
        let limit = limit.max(0) as usize;
        Ok(matched.into_iter().skip(skip).take(limit).collect())
    }

    async fn count(&self, filter: &InterviewFilter) -> Result<i64, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|i| matches_filter(i, filter)).count() as i64)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: UpdateInterviewRequest,
    ) -> Result<Option<Interview>, StoreError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|i| i.id == id) {
            Some(interview) => {
                patch.apply_to(interview);
                interview.updated_at = Utc::now();
                Ok(Some(interview.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|i| i.id != id);
        Ok(records.len() < before)
    }
}
