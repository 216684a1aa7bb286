/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Rental periods are bounded by calendar dates; time-of-day is irrelevant.
pub type Date = chrono::NaiveDate;
