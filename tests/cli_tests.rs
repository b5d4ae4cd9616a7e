use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::io::Write;
use std::process::{Command, Stdio};

const FIXED: &[&str] = &["--seed", "11", "--solution", "Luis|Cuchillo|Biblioteca"];

fn run_with_stdin(input: &str, args: &[&str]) -> std::process::Output {
    let mut cmd = Command::cargo_bin("cluedeck").expect("binary exists");
    cmd.args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = cmd.spawn().expect("spawn");
    {
        let stdin = child.stdin.as_mut().expect("stdin");
        stdin.write_all(input.as_bytes()).expect("write stdin");
    }
    child.wait_with_output().expect("wait output")
}

fn replies(out: &std::process::Output) -> Vec<Value> {
    String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(|l| serde_json::from_str(l).expect("one JSON object per line"))
        .collect()
}

#[test]
fn bad_room_is_reported_and_session_continues() {
    let out = run_with_stdin("move Atico\nmove Biblioteca\npending\n", FIXED);
    assert!(out.status.success());
    let r = replies(&out);
    assert_eq!(r.len(), 3);
    assert_eq!(r[0]["kind"], "invalid_input");
    assert!(r[0]["error"].as_str().unwrap().contains("Atico"));
    assert_eq!(r[1]["room"], "Biblioteca");
    assert_eq!(r[2]["request"]["request"], "offer_suggestion");
    assert_eq!(r[2]["request"]["room"], "Biblioteca");
}

#[test]
fn full_turn_then_correct_accusation() {
    let script = "\
# seat 0 walks into the library and names the solution
move Biblioteca
suggest Luis|Cuchillo
end
accuse Luis|Cuchillo|Biblioteca
pending
end
";
    let out = run_with_stdin(script, FIXED);
    assert!(out.status.success());
    let r = replies(&out);
    assert_eq!(r.len(), 6);
    assert_eq!(r[1]["unrefuted"], true);
    assert_eq!(r[1]["suggestion"]["room"], "Biblioteca");
    assert_eq!(r[2]["current"], 1);
    assert_eq!(r[3]["correct"], true);
    assert_eq!(r[3]["winner"], 1);
    assert_eq!(r[4]["winner"], 1);
    assert!(r[4]["request"].is_null());
    assert_eq!(r[5]["kind"], "invalid_input");
}

#[test]
fn replies_after_game_over_are_errors() {
    let out = run_with_stdin("accuse Luis|Cuchillo|Biblioteca\nend\nquit\nend\n", FIXED);
    let r = replies(&out);
    assert_eq!(r.len(), 2, "nothing after quit is processed");
    assert_eq!(r[1]["kind"], "invalid_input");
}

#[test]
fn hand_and_notes_commands() {
    let out = run_with_stdin("hand\nnotes\ncheck Luis\nnotes\nfrobnicate\n", FIXED);
    let r = replies(&out);
    let hand = r[0]["hand"].as_array().unwrap();
    assert_eq!(hand.len(), 6, "18 dealt cards over 3 seats");
    assert_eq!(r[1]["notes"]["categories"].as_array().unwrap().len(), 3);
    assert_eq!(r[2]["checked"], true);
    assert_eq!(r[4]["kind"], "usage");
}

#[test]
fn same_seed_same_transcript() {
    let script = "move Cocina\nsuggest Pablo|Cuerda\nend\nmove Sala\nsuggest White|Revolver\njournal\n";
    let a = run_with_stdin(script, &["--seed", "123", "--players", "4"]);
    let b = run_with_stdin(script, &["--seed", "123", "--players", "4"]);
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn rejects_unsupported_player_count() {
    let mut cmd = assert_cmd::Command::cargo_bin("cluedeck").expect("binary exists");
    cmd.args(["--players", "7"]).write_stdin("");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("player count"));
}

#[test]
fn save_then_resume() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    let path_str = path.to_str().unwrap();

    let out = run_with_stdin(&format!("move Estudio\ndecline\nend\nsave {path_str}\n"), FIXED);
    let r = replies(&out);
    assert_eq!(r[3]["ok"], true);
    assert!(path.exists());

    let out = run_with_stdin("pending\n", &["--resume", path_str]);
    let r = replies(&out);
    assert_eq!(r[0]["current"], 1);
    assert_eq!(r[0]["request"]["request"], "choose_room");
}
