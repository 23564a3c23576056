/// All primary keys are PostgreSQL UUIDs, serialized as strings.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar date without a time component (task due dates).
pub type Date = chrono::NaiveDate;
