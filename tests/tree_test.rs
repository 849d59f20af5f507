use magisk_setup::error::Error;
use magisk_setup::ignore::Exclusions;
use magisk_setup::tree::enumerate;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "x").unwrap();
}

fn relative(root: &Path, files: Vec<PathBuf>) -> Vec<String> {
    files
        .into_iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn test_enumerate_skips_control_paths() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(root, ".git/HEAD");
    touch(root, ".git/objects/ab/cdef");
    touch(root, ".vs/settings.json");
    touch(root, ".github/workflows/main.yml");
    touch(root, ".github/workflows/main.yml.release");
    touch(root, "module.prop");
    touch(root, "setup.yml");
    touch(root, "magisk-setup");
    touch(root, "system/bin/tool");

    let exclusions = Exclusions::new(Some("magisk-setup")).unwrap();
    let files = relative(root, enumerate(root, &exclusions).unwrap());

    assert_eq!(files, vec![".github/workflows/main.yml", "module.prop", "system/bin/tool"]);
    assert!(files.iter().all(|f| !f.starts_with(".git/")));
}

#[test]
fn test_excluded_name_only_prunes_directories() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    // A regular file named like a control directory is still a project file.
    touch(root, "docs/.vs");

    let exclusions = Exclusions::new(None).unwrap();
    let files = relative(root, enumerate(root, &exclusions).unwrap());
    assert_eq!(files, vec!["docs/.vs"]);
}

#[test]
fn test_setup_files_excluded_only_at_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(root, "setup.yml");
    touch(root, "setup.json");
    touch(root, ".github/workflows/setup.yml");
    touch(root, "tools/setup.json");

    let exclusions = Exclusions::new(None).unwrap();
    let files = relative(root, enumerate(root, &exclusions).unwrap());
    assert_eq!(files, vec![".github/workflows/setup.yml", "tools/setup.json"]);
}

#[cfg(unix)]
#[test]
fn test_linked_directory_is_walked() {
    let temp_dir = TempDir::new().unwrap();
    let shared = temp_dir.path().join("shared");
    let root = temp_dir.path().join("project");
    touch(&shared, "common/util.sh");
    touch(&root, "module.prop");
    std::os::unix::fs::symlink(shared.join("common"), root.join("common")).unwrap();

    let exclusions = Exclusions::new(None).unwrap();
    let files = relative(&root, enumerate(&root, &exclusions).unwrap());
    assert_eq!(files, vec!["common/util.sh", "module.prop"]);
}

#[cfg(unix)]
#[test]
fn test_dangling_link_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(root, "module.prop");
    std::os::unix::fs::symlink(root.join("gone"), root.join("broken")).unwrap();

    let exclusions = Exclusions::new(None).unwrap();
    let files = relative(root, enumerate(root, &exclusions).unwrap());
    assert_eq!(files, vec!["module.prop"]);
}

#[test]
fn test_enumerate_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    let exclusions = Exclusions::new(None).unwrap();

    let result = enumerate(temp_dir.path().join("missing"), &exclusions);
    assert!(matches!(result, Err(Error::WalkError(_))));
}
