use std::time::{Duration, SystemTime};

use hytale_installer::error::InstallerError;
use hytale_installer::fsops;

fn write_zip_with_mtime(dir: &std::path::Path, name: &str, age: Duration) {
    let path = dir.join(name);
    let file = std::fs::File::create(&path).unwrap();
    file.set_modified(SystemTime::now() - age).unwrap();
}

#[test]
fn newest_zip_wins() {
    let temp = tempfile::tempdir().unwrap();
    write_zip_with_mtime(temp.path(), "old.zip", Duration::from_secs(300));
    write_zip_with_mtime(temp.path(), "newest.zip", Duration::from_secs(10));
    write_zip_with_mtime(temp.path(), "middle.zip", Duration::from_secs(100));

    let found = fsops::find_newest_zip(temp.path()).unwrap();
    assert_eq!(found.file_name().unwrap(), "newest.zip");
}

#[test]
fn non_zip_entries_are_ignored() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("readme.txt"), "x").unwrap();
    std::fs::create_dir(temp.path().join("subdir.zip")).unwrap();

    let result = fsops::find_newest_zip(temp.path());
    assert!(matches!(result, Err(InstallerError::NoArchiveFound(_))));
}

#[test]
fn empty_directory_reports_no_archive() {
    let temp = tempfile::tempdir().unwrap();
    let result = fsops::find_newest_zip(temp.path());
    assert!(matches!(result, Err(InstallerError::NoArchiveFound(_))));
}

#[test]
fn move_all_merges_nested_tree_into_destination() {
    let temp = tempfile::tempdir().unwrap();
    let src = temp.path().join("staging");
    let dest = temp.path().join("install");
    std::fs::create_dir_all(src.join("config/worlds")).unwrap();
    std::fs::write(src.join("server.properties"), "port=5520").unwrap();
    std::fs::write(src.join("config/worlds/orbis.dat"), b"world data").unwrap();
    std::fs::create_dir_all(&dest).unwrap();
    std::fs::write(dest.join("existing.txt"), "keep me").unwrap();

    fsops::move_all(&src, &dest).unwrap();

    assert_eq!(
        std::fs::read_to_string(dest.join("server.properties")).unwrap(),
        "port=5520"
    );
    assert_eq!(
        std::fs::read(dest.join("config/worlds/orbis.dat")).unwrap(),
        b"world data"
    );
    assert_eq!(
        std::fs::read_to_string(dest.join("existing.txt")).unwrap(),
        "keep me"
    );
    // Source files were drained.
    assert!(!src.join("server.properties").exists());
    assert!(!src.join("config/worlds/orbis.dat").exists());
}

#[test]
fn delete_files_ignores_missing_paths() {
    let temp = tempfile::tempdir().unwrap();
    let present = temp.path().join("present.zip");
    let missing = temp.path().join("missing.zip");
    std::fs::write(&present, "x").unwrap();

    fsops::delete_files(&[&present, &missing]);
    assert!(!present.exists());
}

#[tokio::test]
async fn delete_dirs_removes_ordinary_directories() {
    let temp = tempfile::tempdir().unwrap();
    let victim = temp.path().join("staging");
    std::fs::create_dir_all(victim.join("inner")).unwrap();
    std::fs::write(victim.join("inner/file.txt"), "x").unwrap();

    fsops::delete_dirs(&[victim.as_path()]).await;
    assert!(!victim.exists());
}

#[tokio::test]
async fn delete_dirs_never_touches_the_current_directory() {
    let cwd = std::env::current_dir().unwrap();
    let before: Vec<_> = std::fs::read_dir(&cwd)
        .unwrap()
        .filter_map(Result::ok)
        .map(|entry| entry.file_name())
        .collect();

    fsops::delete_dirs(&[cwd.as_path()]).await;

    assert!(cwd.exists());
    let after: Vec<_> = std::fs::read_dir(&cwd)
        .unwrap()
        .filter_map(Result::ok)
        .map(|entry| entry.file_name())
        .collect();
    assert_eq!(before.len(), after.len());
}

#[tokio::test]
async fn delete_dirs_skips_missing_paths_silently() {
    let temp = tempfile::tempdir().unwrap();
    let missing = temp.path().join("never-created");
    fsops::delete_dirs(&[missing.as_path()]).await;
}
