//! Shared fixtures for the cross-crate tests in `tests/`.

use std::io;
use std::path::{Path, PathBuf};

/// The repository's `packs/` directory.
pub fn fixture_packs_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../packs")
}

/// Copy every regular file of pack directory `src` into `dst`, creating
/// `dst` if needed.
pub fn copy_pack(src: &Path, dst: &Path) -> io::Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            std::fs::copy(entry.path(), dst.join(entry.file_name()))?;
        }
    }
    Ok(())
}

/// Route `tracing` output to the test harness, filtered by `RUST_LOG`.
/// Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
