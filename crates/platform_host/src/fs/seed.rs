//! First-run contents of an empty virtual filesystem.

use super::types::{NewEntry, ROOT_PATH};

/// Name of the seeded desktop folder.
pub const DESKTOP_DIR_NAME: &str = "Desktop";
/// Name of the seeded documents folder.
pub const DOCUMENTS_DIR_NAME: &str = "Documents";
/// Name of the seeded trash container.
pub const TRASH_NAME: &str = "Recycle Bin";
/// Directory key holding the desktop's files.
pub const DESKTOP_PATH: &str = "/Desktop";

/// Entries written when the store is found empty. Three root nodes, two desktop files.
pub fn seed_entries() -> Vec<NewEntry> {
    vec![
        NewEntry::folder(ROOT_PATH, DESKTOP_DIR_NAME, "fas fa-desktop"),
        NewEntry::folder(ROOT_PATH, DOCUMENTS_DIR_NAME, "fas fa-file"),
        NewEntry::system(ROOT_PATH, TRASH_NAME, "fas fa-trash"),
        NewEntry::file(
            DESKTOP_PATH,
            "My File.txt",
            "fas fa-file-alt",
            "Hello, this is WebOS!",
        ),
        NewEntry::file(DESKTOP_PATH, "WebOS.jpg", "fas fa-file-image", "Base64 image..."),
    ]
}
