use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::interview::{Interview, NewInterview, UpdateInterviewRequest};
use crate::store::{InterviewFilter, RecordStore, SortField, SortOrder, SortSpec, StoreError};
use crate::utils::logger::LOGGER;

const FILTER_CLAUSE: &str = r#"
    ($1::text IS NULL
        OR company ILIKE '%' || $1 || '%'
        OR position ILIKE '%' || $1 || '%'
        OR location ILIKE '%' || $1 || '%'
        OR contact_person ILIKE '%' || $1 || '%')
    AND ($2::interview_status IS NULL OR status = $2)
    AND ($3::interview_type IS NULL OR interview_type = $3)
"#;

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn sort_column(field: SortField) -> &'static str {
    match field {
        SortField::Date => "interview_date",
        SortField::Company => "company",
        SortField::Position => "position",
        SortField::CreatedAt => "created_at",
    }
}

fn sort_direction(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn insert(&self, interview: NewInterview) -> Result<Interview, StoreError> {
        let now = Utc::now();
        let created = sqlx::query_as::<_, Interview>(
            r#"
            INSERT INTO interviews
                (id, company, position, interview_date, interview_time, location,
                 interview_type, status, contact_person, contact_email, notes,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&interview.company)
        .bind(&interview.position)
        .bind(&interview.date)
        .bind(&interview.time)
        .bind(&interview.location)
        .bind(interview.interview_type)
        .bind(interview.status)
        .bind(&interview.contact_person)
        .bind(&interview.contact_email)
        .bind(&interview.notes)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Interview>, StoreError> {
        let interview = sqlx::query_as::<_, Interview>("SELECT * FROM interviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(interview)
    }

    async fn find_many(
        &self,
        filter: &InterviewFilter,
        sort: SortSpec,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Interview>, StoreError> {
        // The sort column comes from a closed enum, never from user input.
        let query = format!(
            "SELECT * FROM interviews WHERE {} ORDER BY {} {}, created_at ASC OFFSET $4 LIMIT $5",
            FILTER_CLAUSE,
            sort_column(sort.field),
            sort_direction(sort.order),
        );

        let start_time = Instant::now();
        let interviews = sqlx::query_as::<_, Interview>(&query)
            .bind(&filter.search)
            .bind(filter.status)
            .bind(filter.interview_type)
            .bind(skip)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        LOGGER.log_database_query(
            &query,
            start_time.elapsed().as_millis(),
            Some(interviews.len()),
        );

        Ok(interviews)
    }

    async fn count(&self, filter: &InterviewFilter) -> Result<i64, StoreError> {
        let query = format!("SELECT COUNT(*) FROM interviews WHERE {}", FILTER_CLAUSE);

        let total = sqlx::query_scalar::<_, i64>(&query)
            .bind(&filter.search)
            .bind(filter.status)
            .bind(filter.interview_type)
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: UpdateInterviewRequest,
    ) -> Result<Option<Interview>, StoreError> {
        let updated = sqlx::query_as::<_, Interview>(
            r#"
            UPDATE interviews
            SET company = COALESCE($2, company),
                position = COALESCE($3, position),
                interview_date = COALESCE($4, interview_date),
                interview_time = COALESCE($5, interview_time),
                location = COALESCE($6, location),
                interview_type = COALESCE($7, interview_type),
                status = COALESCE($8, status),
                contact_person = CASE WHEN $9::text IS NULL THEN contact_person
                                      ELSE NULLIF($9, '') END,
                contact_email = CASE WHEN $10::text IS NULL THEN contact_email
                                     ELSE NULLIF($10, '') END,
                notes = CASE WHEN $11::text IS NULL THEN notes
                             ELSE NULLIF($11, '') END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.company.as_deref().map(str::trim))
        .bind(patch.position.as_deref().map(str::trim))
        .bind(patch.date.as_deref().map(str::trim))
        .bind(patch.time.as_deref().map(str::trim))
        .bind(patch.location.as_deref().map(str::trim))
        .bind(patch.interview_type)
        .bind(patch.status)
        .bind(patch.contact_person.as_deref().map(str::trim))
        .bind(
            patch
                .contact_email
                .as_deref()
                .map(|e| e.trim().to_lowercase()),
        )
        .bind(patch.notes.as_deref().map(str::trim))
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM interviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
