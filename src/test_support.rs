use crate::config::CONFIG_FILE_NAME;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create an install root with empty `scripts/` and `modules/` directories
/// and, if given, an `mcmod.yaml`.
pub(crate) fn create_install_root(config_yaml: Option<&str>) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    std::fs::create_dir_all(root.join("scripts")).unwrap();
    std::fs::create_dir_all(root.join("modules")).unwrap();

    if let Some(yaml) = config_yaml {
        std::fs::write(root.join(CONFIG_FILE_NAME), yaml).unwrap();
    }

    temp_dir
}

/// Write `scripts/<file_name>` under `root` and return its path.
pub(crate) fn write_script(root: &Path, file_name: &str, body: &str) -> PathBuf {
    let path = root.join("scripts").join(file_name);
    std::fs::write(&path, body).unwrap();
    path
}
