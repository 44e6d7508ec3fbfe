//! Edge case and error handling tests for nettree


use harness::{TestTree, run_nettree, run_snapshot};
use serde_json::json;

// ============================================================================
// Names and ordering
// ============================================================================

#[test]
fn test_nameless_entries_are_not_printed() {
    let tree = TestTree::new();
    let snapshot = json!({ "roots": { "network:///": { "children": [
        { "display_name": "no name here", "type": "directory",
          "children": [ { "name": "unreachable" } ] },
        { "name": "named" }
    ] } } });

    let (stdout, _stderr, success) = run_snapshot(&tree, &snapshot, &[]);
    assert!(success);
    assert_eq!(stdout, "network:///\nnamed : named\n");
}

#[test]
fn test_order_is_bytewise_not_by_display_name() {
    let tree = TestTree::new();
    let snapshot = json!({ "roots": { "network:///": { "children": [
        { "name": "zeta", "display_name": "A first by display" },
        { "name": "Zeta", "display_name": "z" },
        { "name": "élan", "display_name": "e" },
        { "name": "alpha", "display_name": "Z last by display" }
    ] } } });

    let (stdout, _stderr, _) = run_snapshot(&tree, &snapshot, &[]);
    let names: Vec<&str> = stdout
        .lines()
        .skip(1)
        .map(|l| l.split(" : ").next().unwrap_or(""))
        .collect();
    assert_eq!(names, vec!["Zeta", "alpha", "zeta", "élan"]);
}

#[test]
fn test_output_is_idempotent() {
    let tree = TestTree::new();
    let snapshot = nettree::test_utils::generated_snapshot(4, 3);

    let (first, _, _) = run_snapshot(&tree, &snapshot, &[]);
    let (second, _, _) = run_snapshot(&tree, &snapshot, &[]);
    assert_eq!(first, second);
    assert!(first.lines().count() > 64);
}

// ============================================================================
// Redirects and cycles
// ============================================================================

#[test]
fn test_symlink_target_printed_without_separator() {
    let tree = TestTree::new();
    let snapshot = json!({ "roots": { "file:///": { "children": [
        { "name": "link", "type": "directory", "symlink_target": "/srv/real" }
    ] } } });

    let (stdout, _stderr, _) = run_snapshot(&tree, &snapshot, &["file:///"]);
    assert_eq!(stdout, "file:///\nlink/srv/real : link\n");
}

#[test]
fn test_redirect_cycle_is_reported_not_followed_forever() {
    let tree = TestTree::new();
    let snapshot = json!({ "roots": {
        "smb://a/": { "children": [ { "name": "to-b", "type": "directory", "target_uri": "smb://b/" } ] },
        "smb://b/": { "children": [ { "name": "to-a", "type": "directory", "target_uri": "smb://a/" } ] }
    } });

    let (stdout, _stderr, success) = run_snapshot(&tree, &snapshot, &["-l", "smb://a/"]);
    assert!(success);
    assert_eq!(
        stdout,
        "smb://a/\nto-b : smb://b/ : to-b\nto-a : smb://a/ : to-a\n[cycle detected: smb://a/]\n"
    );
}

#[test]
fn test_no_cycle_guard_is_bounded_by_level() {
    let tree = TestTree::new();
    let snapshot = json!({ "roots": {
        "smb://a/": { "children": [ { "name": "self", "type": "directory", "target_uri": "smb://a/" } ] }
    } });

    let (stdout, _stderr, success) =
        run_snapshot(&tree, &snapshot, &["-l", "--no-cycle-guard", "-L", "5", "smb://a/"]);
    assert!(success);
    assert_eq!(stdout.lines().filter(|l| l.starts_with("self")).count(), 5);
    assert!(!stdout.contains("cycle detected"));
}

#[cfg(unix)]
#[test]
fn test_local_symlink_loop_with_follow() {
    let tree = TestTree::new();
    tree.add_file("sub/file.txt", "");
    tree.add_symlink("..", "sub/parent");

    let (stdout, _stderr, success) = run_nettree(tree.path(), &[".", "-l"]);
    assert!(success, "must terminate on a parent symlink");
    assert!(stdout.contains("parent.. : parent"), "{}", stdout);
    assert!(stdout.contains("[cycle detected:"), "{}", stdout);
}

#[cfg(unix)]
#[test]
fn test_local_symlinked_dir_not_descended_by_default() {
    let tree = TestTree::new();
    tree.add_file("real/inside.txt", "");
    tree.add_symlink("real", "alias");

    let (stdout, _stderr, _) = run_nettree(tree.path(), &["."]);
    let inside = stdout
        .lines()
        .filter(|l| *l == "inside.txt : inside.txt")
        .count();
    assert_eq!(inside, 1, "{}", stdout);
    assert!(stdout.contains("aliasreal : alias"), "{}", stdout);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_nested_failure_does_not_stop_siblings() {
    let tree = TestTree::new();
    let snapshot = json!({ "roots": { "network:///": { "children": [
        { "name": "a", "type": "directory", "error": "Connection timed out" },
        { "name": "b", "type": "directory", "children": [ { "name": "c" } ] }
    ] } } });

    let (stdout, _stderr, success) = run_snapshot(&tree, &snapshot, &[]);
    assert!(success);
    assert_eq!(
        stdout,
        "network:///\na : a\n[Connection timed out]\nb : b\nc : c\n"
    );
}

#[test]
fn test_missing_local_root() {
    let tree = TestTree::new();
    let (stdout, _stderr, success) = run_nettree(tree.path(), &["does-not-exist"]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("[Error opening directory"), "{}", stdout);
}

#[test]
fn test_invalid_snapshot_fails() {
    let tree = TestTree::new();
    let path = tree.add_file("broken.json", "{ roots: ");
    let path = path.to_string_lossy().to_string();
    let (stdout, stderr, success) = run_nettree(tree.path(), &["--namespace", &path]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("invalid snapshot"), "{}", stderr);
}

#[test]
fn test_deep_tree_style_past_mask_width() {
    let tree = TestTree::new();
    let snapshot = nettree::test_utils::generated_snapshot(1, 70);

    let (stdout, _stderr, success) =
        run_snapshot(&tree, &snapshot, &["--tree", "--color", "never"]);
    assert!(success);
    assert_eq!(stdout.lines().count(), 72);
    assert!(stdout.lines().last().unwrap_or("").ends_with("└── file-000 : file-000"));
}
