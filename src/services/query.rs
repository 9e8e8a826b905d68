use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::interview::{Interview, InterviewStatus, InterviewType};
use crate::store::{InterviewFilter, RecordStore, SortField, SortOrder, SortSpec, StoreError};
use crate::utils::errors::AppError;

pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Raw query-string parameters as the client sends them. Everything is
/// optional; `ListQuery::from_params` applies the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub interview_type: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<String>,
}

/// Normalized list request: clamped page, positive limit, closed filter and
/// sort values.
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub page: i64,
    pub limit: i64,
    pub filter: InterviewFilter,
    pub sort: SortSpec,
}

impl ListQuery {
    /// Normalizes the raw parameters once, at the API boundary:
    /// - `page` below 1 clamps to 1
    /// - `limit` of 0 or less falls back to the default of 10
    /// - unknown `sortBy` falls back to the date field; any `sortOrder`
    ///   other than the literal "desc" sorts ascending
    /// - unknown `status`/`type` filter values are rejected
    pub fn from_params(params: ListParams) -> Result<Self, AppError> {
        let page = params.page.unwrap_or(1).max(1);
        let limit = params
            .limit
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let search = params
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let status = match params.status.as_deref() {
            None | Some("all") => None,
            Some("scheduled") => Some(InterviewStatus::Scheduled),
            Some("completed") => Some(InterviewStatus::Completed),
            Some("cancelled") => Some(InterviewStatus::Cancelled),
            Some(other) => {
                return Err(AppError::Validation(format!(
                    "status must be one of all, scheduled, completed, cancelled (got '{}')",
                    other
                )))
            }
        };

        let interview_type = match params.interview_type.as_deref() {
            None | Some("all") => None,
            Some("phone") => Some(InterviewType::Phone),
            Some("video") => Some(InterviewType::Video),
            Some("onsite") => Some(InterviewType::Onsite),
            Some(other) => {
                return Err(AppError::Validation(format!(
                    "type must be one of all, phone, video, onsite (got '{}')",
                    other
                )))
            }
        };

        let field = match params.sort_by.as_deref() {
            Some("company") => SortField::Company,
            Some("position") => SortField::Position,
            Some("createdAt") => SortField::CreatedAt,
            // "date", absent, or anything unrecognized.
            _ => SortField::Date,
        };
        let order = match params.sort_order.as_deref() {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        };

        Ok(Self {
            page,
            limit,
            filter: InterviewFilter {
                search,
                status,
                interview_type,
            },
            sort: SortSpec { field, order },
        })
    }
}

/// One page of results plus the bookkeeping the client's pagination control
/// needs. `total_pages` is 0 when nothing matches.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewPage {
    pub items: Vec<Interview>,
    pub total_count: i64,
    pub total_pages: i64,
    pub current_page: i64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

pub struct QueryService {
    store: Arc<dyn RecordStore>,
}

impl QueryService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Runs the composed filter against the store, orders and slices the
    /// result, and shapes the page envelope.
    pub async fn list(&self, query: ListQuery) -> Result<InterviewPage, StoreError> {
        let total_count = self.store.count(&query.filter).await?;
        // Saturating keeps an absurd page/limit pair from wrapping into a
        // negative offset; the page just comes back empty.
        let skip = (query.page - 1).saturating_mul(query.limit);
        let items = self
            .store
            .find_many(&query.filter, query.sort, skip, query.limit)
            .await?;

        let total_pages = if total_count == 0 {
            0
        } else {
            (total_count - 1) / query.limit + 1
        };

        Ok(InterviewPage {
            items,
            total_count,
            total_pages,
            current_page: query.page,
            has_next_page: query.page < total_pages,
            has_prev_page: query.page > 1,
        })
    }
}
