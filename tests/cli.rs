//! End-to-end tests driving the `blog-grid` binary against `fixtures/`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn feed() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/posts-data.json")
}

/// A command running in an empty temp dir, so no stray config.toml is picked up.
fn blog_grid(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("blog-grid").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn categories_lists_counts_in_feed_order() {
    let tmp = tempfile::tempdir().unwrap();
    blog_grid(&tmp)
        .arg("--data")
        .arg(feed())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("001 All Posts (20)"))
        .stdout(predicate::str::contains("002 tech (12)"))
        .stdout(predicate::str::contains("003 life (8)"));
}

#[test]
fn latest_returns_first_posts_in_feed_order() {
    let tmp = tempfile::tempdir().unwrap();
    blog_grid(&tmp)
        .arg("--data")
        .arg(feed())
        .arg("latest")
        .assert()
        .success()
        .stdout(predicate::str::contains("001 Shipping the new parser"))
        .stdout(predicate::str::contains("002 Morning walks"))
        .stdout(predicate::str::contains("003 Borrow checker field notes"))
        .stdout(predicate::str::contains("004 ").not());
}

#[test]
fn render_tech_second_page_to_file() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("dist/index.html");

    blog_grid(&tmp)
        .arg("--data")
        .arg(feed())
        .args(["render", "--category", "tech", "--page", "2", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("12 of 20 posts"))
        .stderr(predicate::str::contains("Page 2 of 2 (3 shown)"));

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("<article").count(), 3);
    assert!(html.contains(r#"class="category-btn active" data-category="tech""#));
    assert!(html.contains(r#"class="page-btn active" data-page="2""#));
}

#[test]
fn render_search_to_stdout() {
    let tmp = tempfile::tempdir().unwrap();
    blog_grid(&tmp)
        .arg("--data")
        .arg(feed())
        .args(["render", "--search", "RUST"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Async Rust in production"))
        .stdout(predicate::str::contains("Morning walks").not())
        .stdout(predicate::str::contains(r#"value="rust""#));
}

#[test]
fn render_missing_feed_shows_empty_state() {
    let tmp = tempfile::tempdir().unwrap();
    blog_grid(&tmp)
        .args(["--data", "missing.json", "render"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found."))
        .stderr(predicate::str::contains("Error loading posts"));
}

#[test]
fn check_fails_on_malformed_feed() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("posts-data.json"), "{\"posts\": [").unwrap();

    blog_grid(&tmp)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("EOF while parsing"));
}

#[test]
fn config_file_overrides_labels_and_data() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join("config.toml"),
        format!(
            "data = {:?}\n\n[labels]\nall_posts = \"Everything\"\n",
            feed().display().to_string()
        ),
    )
    .unwrap();

    blog_grid(&tmp)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("001 Everything (20)"));
}

#[test]
fn gen_config_prints_stock_config() {
    let tmp = tempfile::tempdir().unwrap();
    blog_grid(&tmp)
        .arg("gen-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("data = \"posts-data.json\""))
        .stdout(predicate::str::contains("[labels]"));
}

#[test]
fn gen_config_ignores_broken_config_file() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("config.toml"), "unknown_key = [").unwrap();

    blog_grid(&tmp)
        .arg("gen-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[latest]"));

    blog_grid(&tmp)
        .arg("categories")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Toml"));
}
