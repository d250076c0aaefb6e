//! Checks for the directory scan and the two aggregate files.

use std::fs;

use hpx_skel_codegen::ProjectIndex;
use tempfile::TempDir;

#[test]
fn test_scan_sorts_and_keeps_only_directories() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("b")).unwrap();
    fs::create_dir(temp.path().join("a")).unwrap();
    fs::create_dir(temp.path().join("_c")).unwrap();
    fs::write(temp.path().join("stray.txt"), "not a library").unwrap();

    let index = ProjectIndex::scan(temp.path()).unwrap();

    // Byte order puts `_` (0x5f) before the lowercase letters.
    assert_eq!(index.libraries(), ["_c", "a", "b"]);
}

#[test]
fn test_manifest_skips_underscore_entries_and_keeps_order() {
    let temp = TempDir::new().unwrap();
    for dir in ["b", "a", "_c"] {
        fs::create_dir(temp.path().join(dir)).unwrap();
    }

    let manifest = ProjectIndex::scan(temp.path()).unwrap().render_manifest();

    assert!(!manifest.contains("_c"));
    let a = manifest.find("add_subdirectory(a)").expect("a missing");
    let b = manifest.find("add_subdirectory(b)").expect("b missing");
    assert!(a < b);
}

#[test]
fn test_manifest_block_links_headers_into_staging_directory() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("cache")).unwrap();

    let manifest = ProjectIndex::scan(temp.path()).unwrap().render_manifest();

    assert!(manifest.contains("# This file is auto generated. Please do not edit manually"));
    assert!(manifest.contains("include(HPX_CreateSymbolicLink)"));
    assert!(manifest.contains(
        "execute_process(COMMAND \"${CMAKE_COMMAND}\" -E remove_directory ${CMAKE_BINARY_DIR}/include/hpx)"
    ));
    assert!(manifest.contains(
        "  RELATIVE ${CMAKE_CURRENT_SOURCE_DIR}/cache/include/hpx/\n  ${CMAKE_CURRENT_SOURCE_DIR}/cache/include/hpx/*)"
    ));
    assert!(manifest.contains(
        "    ${CMAKE_CURRENT_SOURCE_DIR}/cache/include/hpx/${include}\n    ${CMAKE_BINARY_DIR}/include/hpx/${include})"
    ));
}

#[test]
fn test_docs_index_lists_every_directory_in_order() {
    let temp = TempDir::new().unwrap();
    for dir in ["b", "a", "_c"] {
        fs::create_dir(temp.path().join(dir)).unwrap();
    }

    let docs = ProjectIndex::scan(temp.path()).unwrap().render_docs_index();

    let entries: Vec<&str> = docs
        .lines()
        .filter(|line| line.starts_with("   /libs/"))
        .collect();
    assert_eq!(
        entries,
        [
            "   /libs/_c/docs/index.rst",
            "   /libs/a/docs/index.rst",
            "   /libs/b/docs/index.rst",
        ]
    );
    assert!(docs.contains(":caption: Libraries"));
}

#[test]
fn test_empty_directory_yields_boilerplate_only() {
    let temp = TempDir::new().unwrap();

    let index = ProjectIndex::scan(temp.path()).unwrap();

    assert!(index.libraries().is_empty());
    assert!(!index.render_manifest().contains("add_subdirectory"));
    assert!(!index.render_docs_index().contains("/libs/"));
}

#[test]
fn test_write_fully_overwrites_previous_aggregates() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("cache")).unwrap();
    fs::write(temp.path().join("CMakeLists.txt"), "stale manifest\n").unwrap();
    fs::write(temp.path().join("index.rst"), "stale index\n").unwrap();

    let index = ProjectIndex::scan(temp.path()).unwrap();
    index.write(temp.path()).unwrap();

    let manifest = fs::read_to_string(temp.path().join("CMakeLists.txt")).unwrap();
    let docs = fs::read_to_string(temp.path().join("index.rst")).unwrap();
    assert_eq!(manifest, index.render_manifest());
    assert_eq!(docs, index.render_docs_index());
    assert!(!manifest.contains("stale"));
    assert!(!docs.contains("stale"));
}
