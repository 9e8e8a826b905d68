pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::interview::{
    Interview, InterviewStatus, InterviewType, NewInterview, UpdateInterviewRequest,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Filter applied to reads. Each clause is optional; set clauses compose
/// with logical AND. The search clause matches case-insensitively if the
/// term appears as a substring of company, position, location or
/// contact person.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterviewFilter {
    pub search: Option<String>,
    pub status: Option<InterviewStatus>,
    pub interview_type: Option<InterviewType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Date,
    Company,
    Position,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

/// Persistence boundary for interview records. Ties under a sort key are
/// broken by the store's natural (insertion) order.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert(&self, interview: NewInterview) -> Result<Interview, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Interview>, StoreError>;

    async fn find_many(
        &self,
        filter: &InterviewFilter,
        sort: SortSpec,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Interview>, StoreError>;

    async fn count(&self, filter: &InterviewFilter) -> Result<i64, StoreError>;

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: UpdateInterviewRequest,
    ) -> Result<Option<Interview>, StoreError>;

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError>;
}
