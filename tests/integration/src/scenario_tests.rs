//! Cross-crate scenarios
//!
//! Exercise the flow a user sees: first run creates the host target, the
//! registry resolves declarations from a project tree, and the dispatcher
//! turns a command line into a build plan.

use bk_cli::App;
use bk_fs::{Environment, GlobalLayout};
use bk_meta::{ManifestKind, Registry, ensure_host_target};
use bk_test_utils::TestProject;
use std::fs;

fn dispatch(app: &mut App, argv: &[&str]) -> String {
    colored::control::set_override(false);
    let mut out = Vec::new();
    let status = app.main(argv, &mut out);
    assert_eq!(status, 0);
    String::from_utf8(out).unwrap()
}

#[test]
fn first_run_then_build_writes_plan() {
    let fixture = TestProject::new("kernel");
    fixture.binary("kernel", "kernel");
    fixture.library("libk", "libk");

    let env = fixture.env();
    let written = ensure_host_target(&env.global).unwrap();
    assert!(written.is_some());
    // second run sees the state directory and does nothing
    assert!(ensure_host_target(&env.global).unwrap().is_none());

    let mut app = App::new(env);
    let out = dispatch(&mut app, &["buildkit", "build", "--component", "kernel"]);
    assert_eq!(out, "Generated build graph for kernel (host)\n");

    let plan = fs::read_to_string(fixture.root().join(".buildkit/build/kernel-host.plan.json"))
        .unwrap();
    let plan: serde_json::Value = serde_json::from_str(&plan).unwrap();
    assert_eq!(plan["manifest"]["name"], "kernel");
    assert_eq!(plan["manifest"]["type"], "binary");
    assert_eq!(plan["target"]["name"], "host");
    assert!(plan["target"]["hash"].as_str().unwrap().starts_with("sha256:"));
}

#[test]
fn build_clean_nuke_cycle() {
    let fixture = TestProject::new("cycle");
    fixture.binary("app", "app");
    fixture.global_target("host");

    let mut app = App::new(fixture.env());
    dispatch(&mut app, &["buildkit", "b", "-c", "app"]);
    fixture.assert_exists(".buildkit/build/app-host.plan.json");

    dispatch(&mut app, &["buildkit", "clean"]);
    fixture.assert_missing(".buildkit/build");
    fixture.assert_exists(".buildkit");

    let out = dispatch(&mut app, &["buildkit", "clean"]);
    assert!(out.starts_with("Error: No build directory found"));

    dispatch(&mut app, &["buildkit", "nuke"]);
    fixture.assert_missing(".buildkit");
}

#[test]
fn registry_sees_whole_tree_from_nested_directory() {
    let fixture = TestProject::new("tree");
    fixture.binary("apps/shell", "shell");
    fixture.library("libs/io", "io");
    fixture.plugin("plugins/fmt", "fmt");
    fixture.global_target("host");
    fixture.local_target("board");

    let mut registry = Registry::open(fixture.env_in("libs/io"));
    registry.load().unwrap();

    assert_eq!(registry.main_project().unwrap().name, "tree");
    assert_eq!(registry.manifests().len(), 3);
    assert_eq!(registry.manifest("fmt").unwrap().kind, ManifestKind::Plugin);
    assert_eq!(registry.targets().len(), 2);
    assert!(registry.target("board").is_ok());
}

#[test]
fn commands_outside_any_project() {
    let temp = tempfile::TempDir::new().unwrap();
    let env = Environment::new(temp.path(), GlobalLayout::new(temp.path().join("home")));

    let mut app = App::new(env);
    assert!(app.registry().main_project().is_none());
    assert!(app.registry().projects().values().all(|p| p.is_placeholder()));

    let out = dispatch(&mut app, &["buildkit", "list"]);
    assert!(out.starts_with("Error: "));

    let out = dispatch(&mut app, &["buildkit", "version"]);
    assert!(out.starts_with("buildkit "));
}
