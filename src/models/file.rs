use std::fs::Metadata;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Metadata for one file in the upload directory, derived on demand from
/// filesystem state. The directory itself is the system of record; nothing
/// here is persisted separately.
#[derive(Debug, Serialize, Clone)]
pub struct StoredFile {
    /// On-disk filename, `<epochMillis>-<originalName>`. Doubles as the
    /// public handle for list, delete and download.
    pub id: String,
    pub name: String,
    pub size: u64,
    #[serde(rename = "uploadDate")]
    pub upload_date: DateTime<Utc>,
    pub path: String,
}

impl StoredFile {
    /// Record returned right after an upload: the original name is still at
    /// hand and the timestamp is the server's current time.
    pub fn uploaded(id: String, name: String, size: u64) -> Self {
        let path = public_path(&id);
        Self {
            id,
            name,
            size,
            upload_date: Utc::now(),
            path,
        }
    }

    /// Record derived from a directory entry on list. The display name is
    /// recovered from the id; the timestamp is the file's birth time, or its
    /// modification time where the platform exposes no birth time.
    pub fn from_metadata(id: String, meta: &Metadata) -> Self {
        let upload_date = meta
            .created()
            .or_else(|_| meta.modified())
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());

        Self {
            name: display_name(&id),
            size: meta.len(),
            upload_date,
            path: public_path(&id),
            id,
        }
    }
}

/// Generated on-disk filename for a fresh upload. Unique unless two uploads
/// of the same original name land in the same millisecond (accepted risk).
pub fn new_id(original_name: &str) -> String {
    format!("{}-{}", Utc::now().timestamp_millis(), original_name)
}

pub fn public_path(id: &str) -> String {
    format!("/uploads/{}", id)
}

/// Recovers the display name by dropping the `<epochMillis>-` prefix: split
/// on `-`, drop the first segment, rejoin with `-`. Lossy by contract: an id
/// with no hyphen recovers to an empty name, and an original filename that
/// itself began with digits and a hyphen misparses.
pub fn display_name(id: &str) -> String {
    id.split('-').skip(1).collect::<Vec<_>>().join("-")
}
