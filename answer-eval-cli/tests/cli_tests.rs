use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;

fn answer_eval() -> Command {
    let mut cmd = Command::cargo_bin("answer-eval").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("ANSWER_EVAL_CONFIG");
    cmd
}

#[test]
fn test_score_batch_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("batch.json");
    fs::write(
        &input,
        r#"{
            "hypotheses": {"1": ["the cat sat on the mat"], "2": ["a cat was on a mat"]},
            "references": {"1": ["the cat sat on the mat"], "2": ["the cat sat on the mat"]}
        }"#,
    )
    .unwrap();

    let output = answer_eval()
        .args(["--output", "json", "score", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let scores: Value = serde_json::from_slice(&output.stdout).unwrap();
    let rouge = scores["ROUGE_L"].as_f64().unwrap();
    assert!((rouge - 0.75).abs() < 1e-9);
    assert!((scores["Bleu_1"].as_f64().unwrap() - 0.75).abs() < 1e-9);
}

#[test]
fn test_score_batch_with_items() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("batch.json");
    fs::write(
        &input,
        r#"{"hypotheses": {"q": ["a b c"]}, "references": {"q": ["a b c"]}}"#,
    )
    .unwrap();

    let output = answer_eval()
        .args(["-o", "json", "--max-order", "2", "score", "--items", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["items"][0]["id"], "q");
    assert_eq!(report["items"][0]["bleu"].as_array().unwrap().len(), 2);
    assert!(report["scores"].get("Bleu_3").is_none());
}

#[test]
fn test_score_rejects_mismatched_keys() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("batch.json");
    fs::write(
        &input,
        r#"{"hypotheses": {"a": ["x"]}, "references": {"b": ["x"]}}"#,
    )
    .unwrap();

    answer_eval()
        .args(["score", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Key set mismatch"));
}

#[test]
fn test_files_command_renders_table() {
    let dir = tempfile::tempdir().unwrap();
    let reference = dir.path().join("reference.txt");
    let hypothesis = dir.path().join("hypothesis.txt");
    fs::write(&reference, "the cat sat\non the mat\n").unwrap();
    fs::write(&hypothesis, "the cat sat on the mat\n").unwrap();

    answer_eval()
        .arg("--no-color")
        .arg("files")
        .arg("--reference")
        .arg(&reference)
        .arg("--hypothesis")
        .arg(&hypothesis)
        .assert()
        .success()
        .stdout(predicate::str::contains("ROUGE_L"))
        .stdout(predicate::str::contains("1.0000"));
}

#[test]
fn test_invalid_max_order_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("batch.json");
    fs::write(&input, r#"{"hypotheses": {}, "references": {}}"#).unwrap();

    answer_eval()
        .args(["--max-order", "0", "score", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid scoring configuration"));
}
