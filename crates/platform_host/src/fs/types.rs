//! Virtual filesystem record types shared across store contracts and implementations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// IndexedDB database name used by the browser virtual filesystem.
pub const VIRTUAL_FS_DB_NAME: &str = "Win11FS";
/// Object store (collection) name holding every [`FileSystemEntry`].
pub const VIRTUAL_FS_STORE_NAME: &str = "Files";
/// Schema version of the persisted collection.
pub const VIRTUAL_FS_SCHEMA_VERSION: u32 = 1;
/// Secondary index over [`FileSystemEntry::path`].
pub const PATH_INDEX: &str = "path";
/// Secondary index over [`FileSystemEntry::is_deleted`].
pub const DELETED_INDEX: &str = "isDeleted";
/// Directory path of the filesystem root.
pub const ROOT_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Store-assigned primary key of a [`FileSystemEntry`].
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Kind of a virtual filesystem entry.
pub enum EntryKind {
    /// Directory that other entries can live in.
    Folder,
    /// File with an optional payload.
    File,
    /// Non-deletable special node such as the trash container.
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Entry payload before the store has assigned it an id.
pub struct NewEntry {
    /// Display name.
    pub name: String,
    /// Entry kind.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Directory this entry lives in.
    pub path: String,
    /// Mirror of `path`, kept for schema compatibility.
    pub parent_path: String,
    /// File payload (text or an opaque encoded blob).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Trash flag.
    #[serde(default)]
    pub is_deleted: bool,
    /// Symbolic icon identifier.
    pub icon: String,
}

impl NewEntry {
    /// Builds a folder living in `dir`.
    pub fn folder(dir: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self::with_kind(EntryKind::Folder, dir.into(), name.into(), icon.into(), None)
    }

    /// Builds a file living in `dir` with the given payload.
    pub fn file(
        dir: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::with_kind(
            EntryKind::File,
            dir.into(),
            name.into(),
            icon.into(),
            Some(content.into()),
        )
    }

    /// Builds a system node living in `dir`.
    pub fn system(dir: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self::with_kind(EntryKind::System, dir.into(), name.into(), icon.into(), None)
    }

    fn with_kind(
        kind: EntryKind,
        dir: String,
        name: String,
        icon: String,
        content: Option<String>,
    ) -> Self {
        Self {
            name,
            kind,
            parent_path: dir.clone(),
            path: dir,
            content,
            is_deleted: false,
            icon,
        }
    }

    /// Attaches the store-assigned id.
    pub fn into_entry(self, id: EntryId) -> FileSystemEntry {
        FileSystemEntry {
            id,
            name: self.name,
            kind: self.kind,
            path: self.path,
            parent_path: self.parent_path,
            content: self.content,
            is_deleted: self.is_deleted,
            deleted_at: None,
            icon: self.icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One persisted record of the virtual filesystem.
///
/// `path` names the directory the entry lives in, not the entry's own full path. Trashing an
/// entry only flips `is_deleted`; the entry keeps its location so it can be restored in place.
pub struct FileSystemEntry {
    /// Store-assigned primary key.
    pub id: EntryId,
    /// Display name.
    pub name: String,
    /// Entry kind.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Directory this entry lives in.
    pub path: String,
    /// Mirror of `path`, kept for schema compatibility.
    pub parent_path: String,
    /// File payload (text or an opaque encoded blob).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Trash flag.
    #[serde(default)]
    pub is_deleted: bool,
    /// Unix milliseconds at which the entry was trashed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<u64>,
    /// Symbolic icon identifier.
    pub icon: String,
}

impl FileSystemEntry {
    /// Returns `true` for entries that may be moved to the trash.
    pub fn is_deletable(&self) -> bool {
        self.kind != EntryKind::System
    }

    /// Flags the entry as trashed at `now_unix_ms`.
    pub fn mark_deleted(&mut self, now_unix_ms: u64) {
        self.is_deleted = true;
        self.deleted_at = Some(now_unix_ms);
    }

    /// Clears the trash flag and its timestamp.
    pub fn clear_deleted(&mut self) {
        self.is_deleted = false;
        self.deleted_at = None;
    }
}
