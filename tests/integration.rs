use crunch::{CrunchBuilder, CrunchError, crunch, output};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/config")).unwrap();
    fs::create_dir_all(dir.path().join("a/.github/workflows")).unwrap();
    fs::write(dir.path().join("a/.gitignore"), "x").unwrap();
    fs::write(dir.path().join("a/.env"), "SECRET").unwrap();
    fs::write(dir.path().join("a/config/db.yml"), "y").unwrap();
    fs::write(dir.path().join("a/.github/workflows/ci.yml"), "z").unwrap();

    let options = CrunchBuilder::new(dir.path()).build();
    let result = crunch(options).unwrap();
    let text = String::from_utf8(output::render(&result)).unwrap();

    assert!(text.contains("=== BEGIN a/.gitignore ==="));
    assert!(text.contains("=== BEGIN a/config/db.yml ==="));
    assert!(text.contains("=== BEGIN a/.github/workflows/ci.yml ==="));
    assert!(!text.contains("=== BEGIN a/.env ==="));
    assert_eq!(result.stats.total_files, 3);
    assert_eq!(result.stats.total_bytes, 3);
}

#[test]
fn test_artifact_format() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hello.rb"), "puts 1\n").unwrap();

    let result = crunch(CrunchBuilder::new(dir.path()).build()).unwrap();
    let artifact = output::render(&result);

    let expected = "# Folder Structure\n\n\
                    hello.rb\n\
                    \n\
                    --- BEGIN CONCATENATED FILES ---\n\
                    \n\
                    === BEGIN hello.rb ===\n\
                    puts 1\n\
                    \n\
                    === END hello.rb ===\n\
                    \n";
    assert_eq!(artifact, expected.as_bytes());
}

#[test]
fn test_excluded_directories_are_pruned() {
    let dir = tempdir().unwrap();
    for sub in [
        ".git",
        "node_modules/pkg",
        "vendor",
        "coverage",
        "tmp",
        "log",
    ] {
        fs::create_dir_all(dir.path().join(sub)).unwrap();
    }
    fs::write(dir.path().join(".git/config.rb"), "a").unwrap();
    fs::write(dir.path().join("node_modules/pkg/index.js"), "b").unwrap();
    fs::write(dir.path().join("vendor/gem.rb"), "c").unwrap();
    fs::write(dir.path().join("coverage/report.rb"), "d").unwrap();
    fs::write(dir.path().join("tmp/cache.rb"), "e").unwrap();
    fs::write(dir.path().join("log/dev.rb"), "f").unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.rb"), "g").unwrap();

    let result = crunch(CrunchBuilder::new(dir.path()).build()).unwrap();
    let text = String::from_utf8(output::render(&result)).unwrap();

    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].path, PathBuf::from("src/main.rb"));
    for name in ["node_modules", "vendor", "coverage", "tmp", ".git"] {
        assert!(!text.contains(name), "expected no trace of {name}");
    }
    assert!(result.structure.contains(&"src".to_string()));
}

#[test]
fn test_structure_lists_directories_first() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("aa.rb"), "1").unwrap();
    fs::create_dir(dir.path().join("zz")).unwrap();
    fs::write(dir.path().join("zz/inner.rb"), "2").unwrap();

    let result = crunch(CrunchBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(
        result.structure,
        vec!["zz".to_string(), "    inner.rb".to_string(), "aa.rb".to_string()]
    );
}

#[test]
fn test_structure_marks_nested_directories() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/b")).unwrap();
    fs::write(dir.path().join("a/b/c.rb"), "1").unwrap();

    let result = crunch(CrunchBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(
        result.structure,
        vec![
            "a".to_string(),
            "    └── b".to_string(),
            "        c.rb".to_string(),
        ]
    );
}

#[test]
fn test_structure_keeps_empty_directories() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("main.rb"), "1").unwrap();

    let result = crunch(CrunchBuilder::new(dir.path()).build()).unwrap();
    assert!(result.structure.contains(&"docs".to_string()));
    assert_eq!(result.files.len(), 1);
}

#[test]
fn test_concatenation_order_is_lexicographic_dfs() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/b")).unwrap();
    fs::write(dir.path().join("0.rb"), "").unwrap();
    fs::write(dir.path().join("b.rb"), "").unwrap();
    fs::write(dir.path().join("a/z.rb"), "").unwrap();
    fs::write(dir.path().join("a/b/c.rb"), "").unwrap();

    let result = crunch(CrunchBuilder::new(dir.path()).build()).unwrap();
    let order: Vec<_> = result.files.iter().map(|f| f.path.clone()).collect();
    assert_eq!(
        order,
        vec![
            PathBuf::from("0.rb"),
            PathBuf::from("a/b/c.rb"),
            PathBuf::from("a/z.rb"),
            PathBuf::from("b.rb"),
        ]
    );
}

#[test]
fn test_include_patterns_govern_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("keep.rb"), "1").unwrap();
    fs::write(dir.path().join("skip.py"), "2").unwrap();
    fs::write(dir.path().join("Makefile"), "3").unwrap();

    let options = CrunchBuilder::new(dir.path())
        .include_patterns(vec!["*.rb".to_string()])
        .build();
    let result = crunch(options).unwrap();

    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].path, PathBuf::from("keep.rb"));
}

#[test]
fn test_exclude_patterns_suppress_known_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Makefile"), "1").unwrap();
    fs::write(dir.path().join("main.rb"), "2").unwrap();

    let options = CrunchBuilder::new(dir.path())
        .exclude_patterns(vec!["Makefile".to_string()])
        .build();
    let result = crunch(options).unwrap();

    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].path, PathBuf::from("main.rb"));
}

#[test]
fn test_runs_are_idempotent() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.rb"), "puts 1\n").unwrap();
    fs::write(dir.path().join("Gemfile"), "source 'x'\n").unwrap();

    let first = crunch(CrunchBuilder::new(dir.path()).build()).unwrap();
    let second = crunch(CrunchBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(output::render(&first), output::render(&second));
}

#[test]
fn test_write_to_file_round_trip() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("main.rb"), "puts 1\n").unwrap();

    let result = crunch(CrunchBuilder::new(dir.path()).build()).unwrap();
    let out_path = dir.path().join("crunch_output.txt");
    output::write_to_file(&result, &out_path).unwrap();

    assert_eq!(fs::read(&out_path).unwrap(), output::render(&result));
}

#[test]
fn test_missing_source_is_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    match crunch(CrunchBuilder::new(&missing).build()) {
        Err(CrunchError::InvalidPath(_)) => {}
        other => panic!("expected invalid path error, got {other:?}"),
    }
}

#[test]
fn test_empty_directory_artifact() {
    let dir = tempdir().unwrap();
    let result = crunch(CrunchBuilder::new(dir.path()).build()).unwrap();
    let artifact = output::render(&result);
    assert_eq!(
        artifact,
        b"# Folder Structure\n\n\n--- BEGIN CONCATENATED FILES ---\n\n"
    );
    assert_eq!(result.stats.total_files, 0);
    assert_eq!(result.stats.total_bytes, 0);
}

#[test]
fn test_binary_content_is_copied_verbatim() {
    let dir = tempdir().unwrap();
    let bytes = vec![0u8, 159, 146, 150];
    fs::write(dir.path().join("data.sql"), &bytes).unwrap();

    let result = crunch(CrunchBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(result.files[0].content, bytes);

    let artifact = output::render(&result);
    let needle = b"=== BEGIN data.sql ===\n";
    let pos = artifact
        .windows(needle.len())
        .position(|w| w == needle)
        .unwrap();
    assert_eq!(&artifact[pos + needle.len()..pos + needle.len() + 4], &bytes[..]);
}
