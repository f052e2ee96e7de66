pub type UtcTimestamp = chrono::DateTime<chrono::Utc>;
