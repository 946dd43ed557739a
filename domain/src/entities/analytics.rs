//! Analytics aggregate

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::DomainResult;
use crate::guard;

/// A computed analytics report for a user over a period, e.g. a weekly volume
/// summary. Data points are free-form JSON keyed by metric name.
#[derive(Debug, Clone, PartialEq)]
pub struct Analytics {
    id: Uuid,
    user_id: Uuid,
    analytics_type: String,
    period_start: DateTime<Utc>,
    period_end: DateTime<Utc>,
    data: HashMap<String, Value>,
    generated_at: DateTime<Utc>,
}

impl Analytics {
    pub fn new(
        id: Uuid,
        user_id: Uuid,
        analytics_type: impl Into<String>,
        period_start: DateTime<Utc>,
        period_end: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let analytics_type = analytics_type.into();

        guard::against_nil_id(id, "id")?;
        guard::against_nil_id(user_id, "user_id")?;
        guard::against_blank(&analytics_type, "analytics_type")?;
        guard::against_invalid_date_range(period_start, Some(period_end), "period_end")?;

        Ok(Self {
            id,
            user_id,
            analytics_type,
            period_start,
            period_end,
            data: HashMap::new(),
            generated_at: Utc::now(),
        })
    }

    /// Reconstruct a report from stored fields. For persistence adapters
    /// only; restores the data map wholesale and the original generation
    /// timestamp.
    pub fn rehydrate(
        id: Uuid,
        user_id: Uuid,
        analytics_type: String,
        period_start: DateTime<Utc>,
        period_end: DateTime<Utc>,
        data: HashMap<String, Value>,
        generated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        guard::against_nil_id(id, "id")?;
        guard::against_nil_id(user_id, "user_id")?;
        guard::against_blank(&analytics_type, "analytics_type")?;
        guard::against_invalid_date_range(period_start, Some(period_end), "period_end")?;

        Ok(Self {
            id,
            user_id,
            analytics_type,
            period_start,
            period_end,
            data,
            generated_at,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn analytics_type(&self) -> &str {
        &self.analytics_type
    }

    pub fn period_start(&self) -> DateTime<Utc> {
        self.period_start
    }

    pub fn period_end(&self) -> DateTime<Utc> {
        self.period_end
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn data(&self) -> &HashMap<String, Value> {
        &self.data
    }

    /// Record a metric value, overwriting any previous value for the key.
    pub fn add_data_point(&mut self, key: impl Into<String>, value: Value) -> DomainResult<()> {
        let key = key.into();
        guard::against_blank(&key, "key")?;
        self.data.insert(key, value);
        Ok(())
    }

    pub fn data_point(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}
