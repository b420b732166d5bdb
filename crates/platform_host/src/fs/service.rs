//! Filesystem domain operations layered over a [`VirtualStore`].

use std::rc::Rc;

use futures::{future, TryStreamExt};
use leptos::logging;

use super::{
    path::normalize_virtual_path,
    seed::seed_entries,
    store::{StoreError, VirtualStore},
    types::{EntryId, EntryKind, FileSystemEntry, NewEntry},
};
use crate::time::{Clock, SystemClock};

const FOLDER_ICON: &str = "fas fa-folder";
const FILE_ICON: &str = "fas fa-file-alt";

#[derive(Clone)]
/// Directory listing, trash, and rename operations over the virtual filesystem store.
///
/// Operations that target an id treat a missing record as a no-op and report it by returning
/// `Ok(false)`. Only [`StoreError`]s are surfaced as errors. Every mutation resolves after the
/// underlying write has committed, so awaiting one call before issuing the next is enough to
/// sequence operations on the same id.
pub struct FileSystemService {
    store: Rc<dyn VirtualStore>,
    clock: Rc<dyn Clock>,
}

impl FileSystemService {
    /// Creates a service stamping trash times from the system clock.
    pub fn new(store: Rc<dyn VirtualStore>) -> Self {
        Self::with_clock(store, Rc::new(SystemClock))
    }

    /// Creates a service with an explicit clock.
    pub fn with_clock(store: Rc<dyn VirtualStore>, clock: Rc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Returns the backing store.
    pub fn store(&self) -> Rc<dyn VirtualStore> {
        self.store.clone()
    }

    /// Opens the store and seeds it if it holds no records.
    ///
    /// Returns `true` when seeding happened. Running it against a populated store changes
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the store cannot be opened.
    pub async fn initialize(&self) -> Result<bool, StoreError> {
        self.store.open().await?;
        if self.store.count().await? > 0 {
            return Ok(false);
        }
        let seeded = self.store.insert_all(seed_entries()).await?;
        logging::log!("virtual filesystem empty, seeded {} entries", seeded.len());
        Ok(true)
    }

    /// Lists entries living directly in `path`, in store order.
    ///
    /// Trashed entries are skipped unless `include_deleted` is set.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn list_directory(
        &self,
        path: &str,
        include_deleted: bool,
    ) -> Result<Vec<FileSystemEntry>, StoreError> {
        self.store.open().await?;
        let key = normalize_virtual_path(path);
        self.store
            .query_by_path(&key)
            .try_filter(|entry| future::ready(include_deleted || !entry.is_deleted))
            .try_collect()
            .await
    }

    /// Lists every trashed entry regardless of its directory.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn list_trash(&self) -> Result<Vec<FileSystemEntry>, StoreError> {
        self.store.open().await?;
        self.store.query_by_deleted_flag(true).try_collect().await
    }

    /// Loads one entry.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn get(&self, id: EntryId) -> Result<Option<FileSystemEntry>, StoreError> {
        self.store.open().await?;
        self.store.get(id).await
    }

    /// Moves an entry to the trash in place by flagging it and stamping `deletedAt`.
    ///
    /// Trashing an entry that is already in the trash re-stamps `deletedAt`. System nodes such as
    /// the trash container are never trashed.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn soft_delete(&self, id: EntryId) -> Result<bool, StoreError> {
        let now = self.clock.now_unix_ms();
        let changed = self
            .update(id, |entry| {
                if !entry.is_deletable() {
                    return false;
                }
                entry.mark_deleted(now);
                true
            })
            .await?;
        if changed {
            logging::log!("entry {id} moved to trash");
        }
        Ok(changed)
    }

    /// Takes an entry back out of the trash.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn restore(&self, id: EntryId) -> Result<bool, StoreError> {
        let changed = self
            .update(id, |entry| {
                if !entry.is_deleted {
                    return false;
                }
                entry.clear_deleted();
                true
            })
            .await?;
        if changed {
            logging::log!("entry {id} restored");
        }
        Ok(changed)
    }

    /// Removes an entry permanently. Absent ids are not an error.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn purge(&self, id: EntryId) -> Result<(), StoreError> {
        self.store.open().await?;
        self.store.delete(id).await
    }

    /// Renames an entry.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn rename(&self, id: EntryId, new_name: &str) -> Result<bool, StoreError> {
        let changed = self
            .update(id, |entry| {
                entry.name = new_name.to_string();
                true
            })
            .await?;
        if changed {
            logging::log!("entry {id} renamed to {new_name}");
        }
        Ok(changed)
    }

    /// Replaces the payload of a file entry. Folders and system nodes are left untouched.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn write_content(&self, id: EntryId, content: &str) -> Result<bool, StoreError> {
        self.update(id, |entry| {
            if entry.kind != EntryKind::File {
                return false;
            }
            entry.content = Some(content.to_string());
            true
        })
        .await
    }

    /// Creates a folder inside `dir`.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn create_folder(
        &self,
        dir: &str,
        name: &str,
    ) -> Result<FileSystemEntry, StoreError> {
        self.create(NewEntry::folder(normalize_virtual_path(dir), name, FOLDER_ICON))
            .await
    }

    /// Creates a file inside `dir` holding `content`.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn create_file(
        &self,
        dir: &str,
        name: &str,
        content: &str,
    ) -> Result<FileSystemEntry, StoreError> {
        self.create(NewEntry::file(
            normalize_virtual_path(dir),
            name,
            FILE_ICON,
            content,
        ))
        .await
    }

    /// Permanently removes everything currently in the trash and returns how many entries
    /// were removed.
    ///
    /// # Errors
    ///
    /// Propagates store failures. Entries purged before the failure stay purged.
    pub async fn empty_trash(&self) -> Result<usize, StoreError> {
        let trashed = self.list_trash().await?;
        for entry in &trashed {
            self.store.delete(entry.id).await?;
        }
        if !trashed.is_empty() {
            logging::log!("trash emptied, {} entries purged", trashed.len());
        }
        Ok(trashed.len())
    }

    async fn create(&self, entry: NewEntry) -> Result<FileSystemEntry, StoreError> {
        self.store.open().await?;
        let id = self.store.insert(entry.clone()).await?;
        Ok(entry.into_entry(id))
    }

    /// Loads `id`, lets `apply` mutate it, and writes it back when `apply` reports a change.
    async fn update(
        &self,
        id: EntryId,
        apply: impl FnOnce(&mut FileSystemEntry) -> bool,
    ) -> Result<bool, StoreError> {
        self.store.open().await?;
        let Some(mut entry) = self.store.get(id).await? else {
            return Ok(false);
        };
        if !apply(&mut entry) {
            return Ok(false);
        }
        self.store.put(&entry).await?;
        Ok(true)
    }
}
