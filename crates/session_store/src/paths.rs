use std::path::{Path, PathBuf};

pub const STORAGE_DIR: [&str; 2] = [".raline", "storage"];
pub const STORAGE_FILE_NAME: &str = "local.json";

#[must_use]
pub fn storage_root(base: &Path) -> PathBuf {
    base.join(STORAGE_DIR[0]).join(STORAGE_DIR[1])
}

#[must_use]
pub fn storage_file(base: &Path) -> PathBuf {
    storage_root(base).join(STORAGE_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{storage_file, storage_root};

    #[test]
    fn storage_file_lives_under_hidden_root() {
        let base = Path::new("/home/user");
        assert_eq!(storage_root(base), Path::new("/home/user/.raline/storage"));
        assert_eq!(
            storage_file(base),
            Path::new("/home/user/.raline/storage/local.json")
        );
    }
}
