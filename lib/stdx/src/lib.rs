use std::path::{Path, PathBuf};

mod macros;
pub mod pretty;

pub fn project_root() -> PathBuf {
    let dir = env!("CARGO_MANIFEST_DIR");
    let mut res = PathBuf::from(dir);
    while !res.join("README.md").exists() {
        res = res.parent().expect("reached fs root without finding project root").to_owned()
    }
    res
}

/// Directory holding the `.fil` corpus shared by the integration tests.
pub fn filament_test_data() -> PathBuf {
    project_root().join("filament").join("test_data")
}

pub fn is_fil_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()).map_or(false, |ext| ext == "fil")
}
