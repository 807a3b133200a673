use std::fs;
use std::path::{Path, PathBuf};

/// Build-time settings read with `option_env!` in `src/config.rs`.
const CONFIG_VARS: [&str; 4] = [
    "PORTFOLIO_GITHUB_URL",
    "PORTFOLIO_EMAIL",
    "PORTFOLIO_OWNER",
    "PORTFOLIO_COPYRIGHT",
];

fn add_watch_path(path: &Path) {
    println!("cargo:rerun-if-changed={}", path.display());
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else { return; };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk_dir(&path, files);
        } else {
            files.push(path);
        }
    }
}

fn main() {
    // option_env! values are baked in at compile time.
    for var in CONFIG_VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") else { return; };
    let assets = PathBuf::from(manifest_dir).join("assets");
    add_watch_path(&assets);

    let mut files = Vec::new();
    walk_dir(&assets, &mut files);
    for file in files {
        add_watch_path(&file);
    }
}
