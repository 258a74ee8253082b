mod common;

use common::{stdout_of, CliContext};

#[test]
fn test_add_and_list() {
    let ctx = CliContext::new();

    let output = ctx.run(&["add", "milk, jeera", "--accept", "--date", "2024-05-01"]);
    assert!(output.status.success());
    let out = stdout_of(&output);
    assert!(out.contains("+ milk (Dairy)"));
    assert!(out.contains("? jeera -> cumin (Indian Pantry)"));
    assert!(out.contains("+ cumin (Indian Pantry)"));
    assert!(ctx.store_path().exists());

    let output = ctx.run(&["list", "--date", "2024-05-01"]);
    let out = stdout_of(&output);
    assert!(out.contains("[ ] milk (Dairy)"));
    assert!(out.contains("[ ] cumin (Indian Pantry)"));
}

#[test]
fn test_suggestions_wait_without_flag() {
    let ctx = CliContext::new();

    let output = ctx.run(&["say", "tumeric", "--date", "2024-05-01"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("--accept or --reject"));

    let out = stdout_of(&ctx.run(&["list", "--date", "2024-05-01"]));
    assert!(!out.contains("turmeric"));
}

#[test]
fn test_listen_reads_transcript_from_stdin() {
    let ctx = CliContext::new();

    let output = ctx.run_with_stdin(
        &["listen", "--date", "2024-05-01"],
        Some("~basm\nbasmati rice\nand eggs\n\n"),
    );
    assert!(output.status.success());

    let out = stdout_of(&ctx.run(&["list", "--date", "2024-05-01"]));
    assert!(out.contains("basmati rice (Asian Pantry)"));
    assert!(out.contains("eggs (Dairy)"));
}

#[test]
fn test_duplicates_are_not_added_twice() {
    let ctx = CliContext::new();
    ctx.run(&["add", "eggs", "--date", "2024-05-01"]);
    let output = ctx.run(&["add", "Eggs", "--date", "2024-05-01"]);
    assert!(stdout_of(&output).contains("Nothing to add."));
}

#[test]
fn test_check_shows_resolution() {
    let ctx = CliContext::new();
    let out = stdout_of(&ctx.run(&["check", "tumeric"]));
    assert!(out.contains("tumeric -> turmeric"));
    assert!(out.contains("Category: Indian Pantry"));
}
