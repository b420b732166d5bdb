use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppEntry {
    name: String,
    launch_reference: String,
    icon: String,
    #[serde(default)]
    show_on_desktop: bool,
    #[serde(default)]
    pinned_to_taskbar: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppManifest {
    schema_version: u32,
    #[serde(rename = "app", default)]
    apps: Vec<AppEntry>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("apps.manifest.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: AppManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }

    let mut window_ids = BTreeSet::new();
    for app in &manifest.apps {
        let window_id: String = app.name.chars().filter(|c| !c.is_whitespace()).collect();
        if window_id.is_empty() {
            panic!("blank app name in {}", path.display());
        }
        if !window_ids.insert(window_id.clone()) {
            panic!(
                "app `{}` in {} collides with another entry on window id `{window_id}`",
                app.name,
                path.display()
            );
        }
    }

    let json = serde_json::to_string_pretty(&manifest).expect("serialize app manifest catalog");
    let generated = format!(
        "/// Build-time validated app manifest catalog JSON.\n\
pub const APP_MANIFEST_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
