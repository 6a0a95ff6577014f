use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{self, Result, Row};
use thiserror::Error;

use crate::models::activity::{Activity, ActivityTag};

#[derive(Debug, Error)]
#[error("unknown activity tag '{0}'")]
pub(crate) struct UnknownTagError(String);

pub(crate) fn to_utc_datetime(index: usize, value: String) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

pub(crate) fn to_activity_tag(index: usize, value: String) -> Result<ActivityTag> {
    ActivityTag::from_key(&value).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(UnknownTagError(value)))
    })
}

pub(crate) fn map_activity_row(row: &Row<'_>) -> Result<Activity> {
    Ok(Activity {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        name: row.get(2)?,
        details: row.get(3)?,
        tag: to_activity_tag(4, row.get(4)?)?,
        occurs_at: to_utc_datetime(5, row.get(5)?)?,
    })
}
