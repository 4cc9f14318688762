//! End-to-end command tests driving `omaha_cli::run` with in-memory streams.

use serial_test::serial;

fn run(args: &[&str]) -> (i32, String, String) {
    unsafe {
        std::env::remove_var("OMAHA_CONFIG");
        std::env::remove_var("OMAHA_FORMAT");
        std::env::remove_var("OMAHA_LIST_BETTER");
        std::env::remove_var("OMAHA_SEED");
    }
    let mut argv = vec!["omaha"];
    argv.extend_from_slice(args);
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = omaha_cli::run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
#[serial]
fn calc_on_the_flop_reports_both_streets() {
    let (code, out, err) = run(&["calc", "AsAhKsKh", "AdKdTd"]);
    assert_eq!(code, 0, "stderr: {err}");
    assert!(out.contains("Three of a Kind (Three Aces)"), "{out}");
    assert!(out.contains("TURN"));
    assert!(out.contains("RIVER"));
    assert!(out.contains("# Better / 990"));
}

#[test]
#[serial]
fn calc_on_the_river_reports_showdown() {
    let (code, out, _) = run(&["calc", "AsAhKsKh", "AdKdTd", "2c", "7h"]);
    assert_eq!(code, 0);
    assert!(out.contains("SHOWDOWN"));
    assert!(out.contains("out of 1 "));
    assert!(out.contains("# Better / 903"));
}

#[test]
#[serial]
fn calc_json_matches_the_engine() {
    let (code, out, _) = run(&["calc", "AsAhKsKh", "AdKdTd", "--json", "--list-better"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["hole"], serde_json::json!(["As", "Ah", "Ks", "Kh"]));
    assert_eq!(json["board"], serde_json::json!(["Ad", "Kd", "Td"]));
    assert_eq!(json["best"]["name"], "Three Aces");
    assert_eq!(json["best"]["hole_used"], serde_json::json!(["As", "Ah"]));

    let turn = &json["streets"][0];
    assert_eq!(turn["street"], "TURN");
    assert_eq!(turn["total"], 45);
    let counts = turn["counts"].as_array().unwrap();
    assert_eq!(counts.len(), 10);
    assert_eq!(counts[0]["category"], "RoyalFlush");
    let quads = counts
        .iter()
        .find(|c| c["category"] == "FourOfAKind")
        .unwrap();
    assert_eq!(quads["count"], 2);

    let groups = json["better"]["groups"].as_array().unwrap();
    assert_eq!(groups[0]["name"], "Royal flush");
    let listed: u64 = groups.iter().map(|g| g["count"].as_u64().unwrap()).sum();
    assert_eq!(listed, json["better"]["count"].as_u64().unwrap());
}

#[test]
#[serial]
fn calc_without_board_prints_the_score() {
    let (code, out, _) = run(&["calc", "AsAcKsKc"]);
    assert_eq!(code, 0);
    assert!(out.contains("Hutchison points: 54"));
    assert!(out.contains("Approximate win rate: 27.0%"));
}

#[test]
#[serial]
fn score_ranks_premium_above_rags() {
    let (_, premium, _) = run(&["score", "AsAcKsKc", "--json"]);
    let (_, rags, _) = run(&["score", "2s7c9d4h", "--json"]);
    let premium: serde_json::Value = serde_json::from_str(&premium).unwrap();
    let rags: serde_json::Value = serde_json::from_str(&rags).unwrap();
    assert!(premium["score"].as_i64().unwrap() > rags["score"].as_i64().unwrap());
}

#[test]
#[serial]
fn deal_is_reproducible_by_seed() {
    let (code, first, _) = run(&["deal", "--seed", "2024"]);
    assert_eq!(code, 0);
    let (_, second, _) = run(&["deal", "--seed", "2024"]);
    assert_eq!(first, second);
    assert!(first.starts_with("Seed: 2024\n"));

    let (_, other, _) = run(&["deal", "--seed", "2025"]);
    assert_ne!(first, other);
}

#[test]
#[serial]
fn deal_output_can_be_replayed_with_calc() {
    let (_, out, _) = run(&["deal", "--seed", "11", "--json"]);
    let dealt: serde_json::Value = serde_json::from_str(&out).unwrap();
    let codes = |key: &str| -> String {
        dealt[key]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c.as_str().unwrap())
            .collect()
    };
    let (hole, board) = (codes("hole"), codes("board"));

    let (code, replay, _) = run(&["calc", hole.as_str(), board.as_str(), "--json"]);
    assert_eq!(code, 0);
    let replay: serde_json::Value = serde_json::from_str(&replay).unwrap();
    assert_eq!(replay["best"], dealt["best"]);
    assert_eq!(replay["streets"], dealt["streets"]);
    assert!(replay.get("seed").is_none());
}

#[test]
fn help_goes_to_stdout() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = omaha_cli::run(["omaha", "--help"], &mut out, &mut err);
    assert_eq!(code, 0);
    let help = String::from_utf8(out).unwrap();
    for cmd in omaha_cli::cli::COMMANDS {
        assert!(help.contains(cmd), "help should list {cmd}\n{help}");
    }
    assert!(err.is_empty());
}

#[test]
fn version_goes_to_stdout() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = omaha_cli::run(["omaha", "--version"], &mut out, &mut err);
    assert_eq!(code, 0);
    assert!(String::from_utf8(out).unwrap().starts_with("omaha "));
}
