//! Shared key generation for storage backends.
//!
//! Key format: `{folder}/{stem}_{unix_seconds}{.ext}`. The timestamp is
//! supplied by the caller so this stays a pure function.

use std::path::Path;

/// Generate a storage key for an uploaded file.
///
/// The original name is reduced to its final path component, so a client
/// sending `../../evil.png` cannot escape the destination folder. The
/// timestamp disambiguates repeated uploads of the same name to one-second
/// resolution; uploads of the same name within the same second collide.
pub fn unique_object_key(folder: &str, original_name: &str, unix_seconds: i64) -> String {
    let folder = folder.trim_matches('/');
    let name = Path::new(original_name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unnamed".to_string());

    let (stem, extension) = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            (stem.to_string(), Some(ext.to_string()))
        }
        _ => (name, None),
    };

    match extension {
        Some(ext) => format!("{}/{}_{}.{}", folder, stem, unix_seconds, ext),
        None => format!("{}/{}_{}", folder, stem, unix_seconds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamps_between_stem_and_extension() {
        let key = unique_object_key("weddings", "ceremony.jpg", 1700000000);
        assert_eq!(key, "weddings/ceremony_1700000000.jpg");
    }

    #[test]
    fn handles_names_without_extension() {
        let key = unique_object_key("misc", "raw", 1700000000);
        assert_eq!(key, "misc/raw_1700000000");
    }

    #[test]
    fn keeps_only_the_last_extension() {
        let key = unique_object_key("misc", "archive.tar.png", 42);
        assert_eq!(key, "misc/archive.tar_42.png");
    }

    #[test]
    fn strips_client_supplied_directories() {
        let key = unique_object_key("gallery", "../../etc/passwd.png", 7);
        assert_eq!(key, "gallery/passwd_7.png");
    }

    #[test]
    fn trims_folder_separators() {
        let key = unique_object_key("/gallery/", "a.png", 7);
        assert_eq!(key, "gallery/a_7.png");
    }

    #[test]
    fn same_name_same_second_collides() {
        let a = unique_object_key("g", "dup.png", 100);
        let b = unique_object_key("g", "dup.png", 100);
        assert_eq!(a, b);
    }
}
