use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use tracing::{error, info, warn};

#[derive(Debug)]
pub struct StructuredLogger;

impl StructuredLogger {
    pub fn log_request(&self, method: &str, path: &str, status: u16) {
        let log_entry = json!({
            "timestamp": Utc::now().to_rfc3339(),
            "event_type": "http_request",
            "method": method,
            "path": path,
            "status_code": status,
            "service": "interview-tracker-backend"
        });

        info!("{}", log_entry);
    }

    pub fn log_database_query(&self, query: &str, duration_ms: u128, result_count: Option<usize>) {
        let log_entry = json!({
            "timestamp": Utc::now().to_rfc3339(),
            "event_type": "database_query",
            "query_hash": format!("{:x}", md5::compute(query)),
            "query_preview": if query.len() > 100 {
                format!("{}...", &query[..100])
            } else {
                query.to_string()
            },
            "duration_ms": duration_ms,
            "result_count": result_count,
            "service": "interview-tracker-backend"
        });

        if duration_ms > 1000 {
            warn!("Slow query detected: {}", log_entry);
        } else {
            info!("{}", log_entry);
        }
    }

    pub fn log_error(&self, error: &str, context: HashMap<String, serde_json::Value>) {
        let mut log_entry = json!({
            "timestamp": Utc::now().to_rfc3339(),
            "event_type": "error",
            "error_message": error,
            "service": "interview-tracker-backend"
        });

        for (key, value) in context {
            log_entry[key] = value;
        }

        error!("{}", log_entry);
    }
}

pub static LOGGER: StructuredLogger = StructuredLogger;
