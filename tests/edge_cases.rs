//! Edge case and error handling tests for tree-extended


use harness::{TestDir, body_lines, run_tree};
use std::fs;
#[cfg(unix)]
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
#[cfg(unix)]
fn test_symlink_to_directory_is_leaf() {
    let dir = TestDir::new();
    dir.add_file("realdir/file.rs", "");
    symlink(dir.path().join("realdir"), dir.path().join("linkdir"))
        .expect("Failed to create dir symlink");

    let (stdout, _stderr, success) = run_tree(dir.path(), &[]);
    assert!(success);
    assert_eq!(
        body_lines(&stdout),
        ["├── linkdir", "└── realdir", "    └── file.rs"]
    );
}

#[test]
#[cfg(unix)]
fn test_symlink_to_parent_no_infinite_loop() {
    let dir = TestDir::new();
    dir.add_file("subdir/file.rs", "");
    symlink("..", dir.path().join("subdir").join("parent"))
        .expect("Failed to create parent symlink");

    let (stdout, _stderr, success) = run_tree(dir.path(), &[]);
    assert!(success, "should not hang on parent symlink");
    assert_eq!(
        body_lines(&stdout),
        ["└── subdir", "    ├── file.rs", "    └── parent"]
    );
}

#[test]
#[cfg(unix)]
fn test_broken_symlink() {
    let dir = TestDir::new();
    dir.add_file("real.rs", "");
    symlink("nonexistent.rs", dir.path().join("broken_link.rs"))
        .expect("Failed to create broken symlink");

    let (stdout, _stderr, success) = run_tree(dir.path(), &[]);
    assert!(success, "should handle broken symlinks");
    assert!(stdout.contains("broken_link.rs"));
    assert!(stdout.contains("real.rs"));
}

// ============================================================================
// Permission Edge Cases
// ============================================================================

#[test]
#[cfg(unix)]
fn test_unreadable_directory() {
    let dir = TestDir::new();
    dir.add_file("readable/file.rs", "");

    let unreadable = dir.path().join("unreadable");
    fs::create_dir(&unreadable).expect("Failed to create dir");
    fs::write(unreadable.join("hidden.rs"), "").expect("Failed to write file");

    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&unreadable, perms).expect("Failed to set permissions");

    let (stdout, stderr, success) = run_tree(dir.path(), &[]);

    // Restore permissions for cleanup
    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&unreadable, perms).expect("Failed to restore permissions");

    assert!(success, "unreadable directories must not abort the walk");
    assert!(stdout.contains("readable"));
    assert!(stdout.contains("file.rs"));
    // Root can read anything, so only check the omission when it actually failed
    if stderr.contains("cannot read directory") {
        assert!(!stdout.contains("unreadable"));
        assert!(!stdout.contains("hidden.rs"));
    }
}

// ============================================================================
// Filename Edge Cases
// ============================================================================

#[test]
fn test_filename_with_spaces() {
    let dir = TestDir::new();
    dir.add_file("my file.txt", "");
    dir.add_file("dir with spaces/inner.txt", "");

    let (stdout, _stderr, success) = run_tree(dir.path(), &["--ignore", " my file.txt "]);
    assert!(success);
    assert!(!stdout.contains("my file.txt"));
    assert!(stdout.contains("dir with spaces"));
}

#[test]
fn test_filename_with_unicode() {
    let dir = TestDir::new();
    dir.add_file("日本語.rs", "");
    dir.add_file("émoji_🎉.rs", "");
    dir.add_file("中文目录/文件.rs", "");

    let (stdout, _stderr, success) = run_tree(dir.path(), &[]);
    assert!(success);
    assert!(stdout.contains("日本語.rs"));
    assert!(stdout.contains("émoji_🎉.rs"));
    assert!(stdout.contains("中文目录"));
}

#[test]
fn test_filter_is_case_sensitive() {
    let dir = TestDir::new();
    dir.add_file("README.md", "");
    dir.add_file("readme.md", "");

    let (stdout, _stderr, success) = run_tree(dir.path(), &["--ignore", "readme.md"]);
    assert!(success);
    assert_eq!(body_lines(&stdout), ["└── README.md"]);
}

#[test]
fn test_filter_is_not_a_glob() {
    let dir = TestDir::new();
    dir.add_file("a.rs", "");
    dir.add_file("b.rs", "");

    let (stdout, _stderr, success) = run_tree(dir.path(), &["--ignore", "*.rs"]);
    assert!(success);
    assert_eq!(body_lines(&stdout), ["├── a.rs", "└── b.rs"]);
}

// ============================================================================
// Structure Edge Cases
// ============================================================================

#[test]
fn test_empty_root() {
    let dir = TestDir::new();
    let (stdout, _stderr, success) = run_tree(dir.path(), &[]);
    assert!(success);
    assert_eq!(stdout, ".\n");
}

#[test]
fn test_max_zero() {
    let dir = TestDir::new();
    dir.add_file("a.txt", "");

    let (stdout, _stderr, success) = run_tree(dir.path(), &["--max", "0"]);
    assert!(success);
    assert_eq!(stdout, ".\n");

    let (stdout, _stderr, success) =
        run_tree(dir.path(), &["--max", "0", "--max-show-not-empty"]);
    assert!(success);
    assert_eq!(stdout, ".\n└── ...\n");
}

#[test]
fn test_very_deep_nesting() {
    let dir = TestDir::new();
    dir.add_file("a/b/c/d/e/f/g/h/deep.rs", "");

    let (stdout, _stderr, success) = run_tree(dir.path(), &[]);
    assert!(success);
    let last = stdout.lines().last().unwrap();
    assert_eq!(last, format!("{}└── deep.rs", "    ".repeat(8)));
}

#[test]
fn test_many_files_in_directory() {
    let dir = TestDir::new();
    for i in 0..100 {
        dir.add_file(&format!("file_{:03}.rs", i), "");
    }

    let (stdout, _stderr, success) = run_tree(dir.path(), &[]);
    assert!(success);
    let body = body_lines(&stdout);
    assert_eq!(body.len(), 100);
    assert_eq!(body[0], "├── file_000.rs");
    assert_eq!(body[99], "└── file_099.rs");
}

#[test]
fn test_sorting_order() {
    let dir = TestDir::new();
    dir.add_file("zebra.rs", "");
    dir.add_file("apple.rs", "");
    dir.add_dir("middle");

    let (stdout, _stderr, success) = run_tree(dir.path(), &[]);
    assert!(success);
    assert_eq!(
        body_lines(&stdout),
        ["├── apple.rs", "├── middle", "└── zebra.rs"]
    );
}

#[test]
fn test_only_with_level_prunes_other_levels() {
    let dir = TestDir::new();
    dir.add_file("src/main.rs", "");
    dir.add_file("docs/index.md", "");

    let (stdout, _stderr, success) = run_tree(dir.path(), &["--only", "1:src, 2:main.rs"]);
    assert!(success);
    assert_eq!(body_lines(&stdout), ["└── src", "    └── main.rs"]);
}

// ============================================================================
// Gitignore Edge Cases
// ============================================================================

#[test]
fn test_gitignore_without_file() {
    let dir = TestDir::new();
    dir.add_file(".git/HEAD", "");
    dir.add_file("main.rs", "");

    let (stdout, _stderr, success) = run_tree(dir.path(), &["--gitignore"]);
    assert!(success);
    assert_eq!(body_lines(&stdout), ["└── main.rs"]);
}

#[test]
fn test_malformed_gitignore() {
    let dir = TestDir::new();
    dir.add_file(".gitignore", "[invalid\n*.log\n");
    dir.add_file("debug.log", "");
    dir.add_file("main.rs", "");

    let (stdout, _stderr, success) = run_tree(dir.path(), &["--gitignore"]);
    assert!(success, "bad gitignore lines must not abort");
    assert!(stdout.contains("main.rs"));
    assert!(!stdout.contains("debug.log"));
}

#[test]
fn test_gitignore_combined_with_filters() {
    let dir = TestDir::new();
    dir.add_file(".gitignore", "*.log\n");
    dir.add_file("a.log", "");
    dir.add_file("b.txt", "");
    dir.add_file("c.txt", "");

    let (stdout, _stderr, success) =
        run_tree(dir.path(), &["--gitignore", "--ignore", "c.txt, .gitignore"]);
    assert!(success);
    assert_eq!(body_lines(&stdout), ["└── b.txt"]);
}
