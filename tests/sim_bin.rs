use std::process::Command;

fn run_sim(seed: &str) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--seed", seed])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    serde_json::from_str(stdout.trim()).expect("invalid json")
}

#[test]
fn sim_binary_smoke() {
    let v = run_sim("1");
    assert!(v["winner"].is_string());
    assert!(v["turns"].as_u64().unwrap() >= 17);
    let winner_hits = match v["winner_seat"].as_str().unwrap() {
        "First" => v["first"]["hits"].as_u64(),
        _ => v["second"]["hits"].as_u64(),
    };
    assert_eq!(winner_hits, Some(17));
}

#[test]
fn sim_binary_is_reproducible() {
    assert_eq!(run_sim("2024"), run_sim("2024"));
}

#[test]
fn sim_binary_gives_up_after_max_turns() {
    // a fleet of 17 segments cannot be sunk in 5 turns
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--seed", "7", "--max-turns", "5"])
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no winner after 5 turn attempts"));
}

#[test]
fn sim_binary_default_limit_allows_full_game() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--seed", "7", "--max-turns", "200"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
}
