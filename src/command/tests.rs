// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ArgumentVector, GitCommand, GitOptions, OptionMap, build};

fn argv(command: GitCommand, options: impl Into<GitOptions>) -> Vec<String> {
    build(command, &options.into()).into_vec()
}

#[test]
fn test_empty_options_yield_bare_subcommand() {
    assert_eq!(argv(GitCommand::Status, GitOptions::None), ["status"]);
    assert_eq!(argv(GitCommand::Status, ""), ["status"]);
    assert_eq!(argv(GitCommand::Status, Vec::<String>::new()), ["status"]);
    assert_eq!(argv(GitCommand::Status, OptionMap::new()), ["status"]);
}

#[test]
fn test_raw_string_split_on_whitespace() {
    assert_eq!(
        argv(GitCommand::Log, "  --oneline   -n 5 "),
        ["log", "--oneline", "-n", "5"]
    );
}

#[test]
fn test_raw_string_is_not_shell_interpreted() {
    assert_eq!(
        argv(GitCommand::Log, "$(rm -rf) ;|"),
        ["log", "$(rm", "-rf)", ";|"]
    );
}

#[test]
fn test_list_preserves_order() {
    let list = vec!["origin/main..HEAD", "--", "src dir/file.rs"];
    assert_eq!(
        argv(GitCommand::Log, list),
        ["log", "origin/main..HEAD", "--", "src dir/file.rs"]
    );
    assert_eq!(argv(GitCommand::Diff, ["b", "a"]), ["diff", "b", "a"]);
}

#[test]
fn test_map_flags_and_values() {
    let map = OptionMap::new()
        .with("no-ff", true)
        .with("squash", false)
        .with("strategy", "ours")
        .with("-v", true)
        .with("depth", 1_u32);
    assert_eq!(
        argv(GitCommand::Merge, map),
        ["merge", "--no-ff", "--strategy=ours", "-v", "--depth=1"]
    );
}

#[test]
fn test_map_replace_keeps_insertion_position() {
    let mut map = OptionMap::new().with("a", true).with("b", true);
    map.insert("a", "x");
    assert_eq!(map.len(), 2);
    assert_eq!(argv(GitCommand::Fetch, map), ["fetch", "--a=x", "--b"]);
}

#[test]
fn test_false_flags_never_emitted() {
    let map: OptionMap = [("all", false), ("prune", false), ("tags", true)]
        .into_iter()
        .collect();
    let args = argv(GitCommand::Fetch, map);
    assert!(!args.iter().any(|a| a == "--all" || a == "--prune"));
    assert_eq!(args, ["fetch", "--tags"]);
}

#[test]
fn test_vector_builders() {
    let vector = ArgumentVector::new(GitCommand::Commit)
        .args(["-m", "two words"])
        .arg_if(false, "--amend")
        .arg_if(true, "--allow-empty")
        .options(&GitOptions::from("--quiet"));

    assert_eq!(vector.command(), GitCommand::Commit);
    assert_eq!(vector.as_slice()[0], "commit");
    insta::assert_snapshot!(vector.to_string(), @r#"commit -m "two words" --allow-empty --quiet"#);
}

#[test]
fn test_command_names() {
    assert_eq!(GitCommand::CatFile.as_str(), "cat-file");
    assert_eq!(GitCommand::RevParse.to_string(), "rev-parse");
}

#[test]
fn test_options_is_empty() {
    assert!(GitOptions::from("   ").is_empty());
    assert!(GitOptions::default().is_empty());
    assert!(!GitOptions::from(["-a"]).is_empty());
}
