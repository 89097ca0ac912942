//! Database models.

use derive_new::new;
use diesel::prelude::*;

use crate::storage::schema;

/// One key-value row.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::kv_store)]
pub(crate) struct KvEntry {
    key: String,
    value: String,
}
