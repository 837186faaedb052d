//! Project location from realistic trees

use bk_fs::{BuildkitPath, ProjectLayout, find_root_from};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

fn project_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(BuildkitPath::ProjectMarker),
        "[project]\nname = \"kernel\"\n",
    )
    .unwrap();
    for dir in ["src/boot", "src/libs/core", "meta/targets", ".buildkit/build"] {
        fs::create_dir_all(temp.path().join(dir)).unwrap();
    }
    temp
}

#[rstest]
#[case("")]
#[case("src")]
#[case("src/boot")]
#[case("src/libs/core")]
#[case("meta/targets")]
#[case(".buildkit/build")]
fn every_subdirectory_resolves_to_the_same_root(#[case] sub: &str) {
    let temp = project_tree();
    let expected = dunce::canonicalize(temp.path()).unwrap();

    let start = temp.path().join(sub);
    assert_eq!(find_root_from(&start), Some(expected));
}

#[test]
fn derived_paths_hang_off_located_root() {
    let temp = project_tree();
    let layout = ProjectLayout::locate(&temp.path().join("src/boot")).unwrap();

    assert!(layout.marker().is_file());
    assert!(layout.build_dir().is_dir());
    assert!(layout.targets_dir().is_dir());
    assert!(layout.src_dir().is_dir());
    assert!(layout.build_dir().starts_with(layout.state_dir()));
    assert!(layout.targets_dir().starts_with(layout.meta_dir()));
}

#[test]
fn removing_marker_is_observed_on_next_call() {
    let temp = project_tree();
    assert!(find_root_from(temp.path()).is_some());

    fs::remove_file(temp.path().join(BuildkitPath::ProjectMarker)).unwrap();

    assert!(find_root_from(temp.path()).is_none());
}

#[test]
fn layouts_located_from_different_depths_are_equal() {
    let temp = project_tree();

    let from_root = ProjectLayout::locate(temp.path()).unwrap();
    let from_deep = ProjectLayout::locate(&temp.path().join("src/libs/core")).unwrap();

    assert_eq!(from_root, from_deep);
    assert_eq!(from_root.src_dir(), from_deep.src_dir());
}
