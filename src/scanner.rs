use crate::config::Config;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "JPG", "JPEG", "PNG"];

/// ディレクトリ直下の画像ファイルを列挙する
///
/// ディレクトリが存在しない場合は空のプールを返す
pub fn scan_pool(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        return Vec::new();
    }

    let mut images: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| {
                    let ext_str = ext.to_string_lossy();
                    IMAGE_EXTENSIONS.iter().any(|&x| x == ext_str)
                })
                .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    // ファイル名でソート
    images.sort();

    images
}

/// プールを検査し、結果を表示して枚数を返す（警告のみで中断しない）
pub fn validate_pool(label: &str, dir: &Path) -> usize {
    if !dir.exists() {
        println!("⚠️  警告: {}画像ディレクトリが存在しません: {}", label, dir.display());
        return 0;
    }

    let images = scan_pool(dir);
    if images.is_empty() {
        println!("⚠️  警告: {}画像ディレクトリに画像がありません: {}", label, dir.display());
    } else {
        println!("✓ {}画像ディレクトリに{}枚の画像を検出: {}", label, images.len(), dir.display());
    }
    images.len()
}

/// OK/NG 両ディレクトリを検査する
pub fn validate_pools(config: &Config) {
    validate_pool("OK", &config.ok_images_path);
    validate_pool("NG", &config.ng_images_path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_scan_pool_nonexistent_dir() {
        let images = scan_pool(Path::new("/nonexistent/pool"));
        assert!(images.is_empty());
    }

    #[test]
    fn test_scan_pool_filters_by_extension() {
        let dir = tempdir().unwrap();

        File::create(dir.path().join("a.png")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("b.jpg")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("c.JPG")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("readme.txt")).unwrap().write_all(b"text").unwrap();

        let images = scan_pool(dir.path());
        assert_eq!(images.len(), 3);
    }

    #[test]
    fn test_scan_pool_sorted() {
        let dir = tempdir().unwrap();

        File::create(dir.path().join("c.png")).unwrap();
        File::create(dir.path().join("a.png")).unwrap();
        File::create(dir.path().join("b.png")).unwrap();

        let images = scan_pool(dir.path());
        let names: Vec<_> = images
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn test_scan_pool_skips_subdirectories() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        File::create(dir.path().join("nested").join("deep.png")).unwrap();
        File::create(dir.path().join("top.png")).unwrap();

        let images = scan_pool(dir.path());
        assert_eq!(images.len(), 1);
    }

    #[test]
    fn test_validate_pool_counts() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("1.png")).unwrap();
        File::create(dir.path().join("2.png")).unwrap();

        assert_eq!(validate_pool("OK", dir.path()), 2);
        assert_eq!(validate_pool("NG", &dir.path().join("missing")), 0);
    }
}
