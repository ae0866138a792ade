//! End-to-end checks of collect-then-verify against real folders.

use std::path::Path;

use dirmatch::context::ServiceContext;
use dirmatch::listing::{collect, collect_pair, CollectError, DirectoryPath, Listing};
use dirmatch::verify::{verify, verify_with, CaseSensitivity};

fn make_dir(root: &Path, name: &str, files: &[&str]) -> DirectoryPath {
    let dir = root.join(name);
    std::fs::create_dir(&dir).unwrap();
    for file in files {
        std::fs::write(dir.join(file), b"").unwrap();
    }
    DirectoryPath::new(dir).unwrap()
}

fn report_flags(input: &Listing, output: &Listing) -> Vec<(String, bool)> {
    verify(input, output).iter().map(|r| (r.name.to_string(), r.matched)).collect()
}

#[test]
fn nonexistent_input_path_is_path_not_found() {
    let err = collect(&ServiceContext::live(), &DirectoryPath::new("/does/not/exist").unwrap())
        .unwrap_err();
    assert!(matches!(err, CollectError::PathNotFound { .. }));
}

#[test]
fn file_instead_of_folder_is_path_not_found() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join("plain.txt"), b"").unwrap();
    let path = DirectoryPath::new(root.path().join("plain.txt")).unwrap();
    let err = collect(&ServiceContext::live(), &path).unwrap_err();
    assert!(matches!(err, CollectError::PathNotFound { .. }));
}

#[test]
fn path_below_a_file_is_path_not_found() {
    let root = tempfile::tempdir().unwrap();
    std::fs::write(root.path().join("plain.txt"), b"").unwrap();
    let path = DirectoryPath::new(root.path().join("plain.txt").join("sub")).unwrap();
    let err = collect(&ServiceContext::live(), &path).unwrap_err();
    assert!(matches!(err, CollectError::PathNotFound { .. }), "{err:?}");
}

#[test]
fn report_follows_input_enumeration_order() {
    let root = tempfile::tempdir().unwrap();
    let ctx = ServiceContext::live();
    let input = collect(&ctx, &make_dir(root.path(), "in", &["c", "a", "d", "b"])).unwrap();
    let output = collect(&ctx, &make_dir(root.path(), "out", &["a", "b"])).unwrap();

    let flags = report_flags(&input, &output);
    let order: Vec<String> = input.iter().map(ToString::to_string).collect();
    assert_eq!(flags.iter().map(|(n, _)| n.clone()).collect::<Vec<_>>(), order);
    for (name, matched) in flags {
        assert_eq!(matched, name == "a" || name == "b", "{name}");
    }
}

#[test]
fn case_variants_pin_down_comparison() {
    let root = tempfile::tempdir().unwrap();
    let ctx = ServiceContext::live();
    let input = collect(&ctx, &make_dir(root.path(), "in", &["Photo.JPG"])).unwrap();
    let output = collect(&ctx, &make_dir(root.path(), "out", &["photo.jpg"])).unwrap();

    assert!(!verify(&input, &output).all_matched());
    assert!(verify_with(&input, &output, CaseSensitivity::Insensitive).all_matched());
}

#[tokio::test]
async fn concurrent_collection_feeds_verifier() {
    let root = tempfile::tempdir().unwrap();
    let input = make_dir(root.path(), "in", &["a.txt", "b.txt"]);
    let output = make_dir(root.path(), "out", &["a.txt", "b.txt"]);

    let (input, output) = collect_pair(&ServiceContext::live(), &input, &output).await.unwrap();
    let report = verify(&input, &output);
    assert_eq!(report.len(), 2);
    assert!(report.all_matched());
}
