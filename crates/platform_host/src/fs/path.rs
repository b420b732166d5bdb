//! Directory-key normalization for virtual filesystem lookups.

/// Normalizes a directory key so that equivalent spellings hit the same `path` index value.
///
/// Trims whitespace, converts backslashes to `/`, drops empty and `.` segments, resolves `..`,
/// and always yields a leading slash. Empty or fully-collapsed input maps to `/`. Whitespace
/// inside a segment is kept, so `"/My Files"` stays distinct from `"/MyFiles"`.
pub fn normalize_virtual_path(path: &str) -> String {
    let unified = path.trim().replace('\\', "/");
    let mut segments: Vec<&str> = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            name => segments.push(name),
        }
    }
    format!("/{}", segments.join("/"))
}
