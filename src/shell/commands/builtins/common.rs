use faccess::PathExt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use crate::shell::context::ShellContext;

pub fn resolve_path(ctx: &ShellContext, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        ctx.cwd().join(p)
    }
}

/// Asks the OS whether the current user may read `path`. Never opens it.
pub fn can_read(path: &Path) -> bool {
    path.readable()
}

/// Same as `can_read`, for write access. False when `path` is missing.
pub fn can_write(path: &Path) -> bool {
    path.writable()
}

pub fn is_dir_empty(path: &Path) -> io::Result<bool> {
    Ok(fs::read_dir(path)?.next().is_none())
}

/// `512 B`, `3 KB`, `12 MB`; integer truncation, 1024 base.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    if size < KB {
        format!("{} B", size)
    } else if size < MB {
        format!("{} KB", size / KB)
    } else {
        format!("{} MB", size / MB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size_buckets() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(2047), "1 KB");
        assert_eq!(format_file_size(1024 * 1024 - 1), "1023 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024 + 10), "5 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3072 MB");
    }

    #[test]
    fn test_write_access_follows_the_os() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("locked.txt");
        fs::write(&file, "x").unwrap();
        assert!(can_read(&file));
        assert!(can_write(&file));

        let mut perms = fs::metadata(&file).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&file, perms).unwrap();
        // root may still write a 0444 file
        let os_allows = fs::OpenOptions::new().write(true).open(&file).is_ok();
        assert_eq!(can_write(&file), os_allows);

        assert!(!can_write(&tmp.path().join("missing")));
        assert!(!can_read(&tmp.path().join("missing")));
    }
}
