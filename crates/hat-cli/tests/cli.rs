use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const RESULTS_CSV: &str = "\
Algorithm,Heuristic,MapSize,Difficulty,Cost,Time_ns,Success,NodesExpanded,PrunedNodes,MemoryUsed,MemoryLimit,OptimalCost
AStar,MLP,10,EASY,12.5,2000000,true,60,0,2048,-1,12.5
AStar,MLP,10,EASY,13.0,2100000,true,70,0,2100,-1,13.0
AStar,MLP,20,MEDIUM,30.0,4000000,true,210,0,4096,-1,30.0
AStar,SCALED_MANHATTAN,10,EASY,12.5,1500000,true,100,0,2300,-1,12.5
AStar,SCALED_MANHATTAN,20,MEDIUM,30.0,3100000,true,340,0,4500,-1,30.0
SMAStar,DIJKSTRA,10,EASY,12.5,5000000,true,400,120,1024,1000,12.5
SMAStar,DIJKSTRA,10,EASY,Infinity,6000000,false,500,300,1024,500,12.5
SMAStar,DIJKSTRA,20,MEDIUM,Infinity,9000000,false,900,640,1024,500,30.0
";

fn write_results(dir: &Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, RESULTS_CSV).unwrap();
    path
}

fn hat(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hat").unwrap();
    // Keep the test hermetic from any real ~/.hat/config.toml.
    cmd.env("HOME", home);
    cmd
}

#[test]
fn summary_prints_per_algorithm_rows() {
    let tmp = tempdir().unwrap();
    let data = write_results(tmp.path(), "results.csv");

    hat(tmp.path())
        .args(["summary", "--data", data.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALGORITHM"))
        .stdout(predicate::str::contains("SCALED_MANHATTAN"))
        .stdout(predicate::str::contains("SMAStar"))
        .stdout(predicate::str::contains("Total runs: 8 (6 successful)"));
}

#[test]
fn summary_emits_json_rows() {
    let tmp = tempdir().unwrap();
    let data = write_results(tmp.path(), "results.csv");

    hat(tmp.path())
        .args([
            "summary",
            "--data",
            data.to_str().unwrap(),
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"algorithm\": \"AStar\""))
        .stdout(predicate::str::contains("\"success_rate\""));
}

#[test]
fn report_runs_with_filters() {
    let tmp = tempdir().unwrap();
    let data = write_results(tmp.path(), "results.csv");

    hat(tmp.path())
        .args([
            "report",
            "--data",
            data.to_str().unwrap(),
            "--difficulty",
            "EASY",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pathfinding Algorithm Analysis"))
        .stdout(predicate::str::contains("Success Rate"))
        .stdout(predicate::str::contains("Failure & Survival Analysis"));
}

#[test]
fn report_swaps_headings_to_persian() {
    let tmp = tempdir().unwrap();
    let data = write_results(tmp.path(), "results.csv");

    hat(tmp.path())
        .args(["report", "--data", data.to_str().unwrap(), "--lang", "fa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("نرخ موفقیت"));
}

#[test]
fn auto_load_falls_back_to_alternate_filename() {
    let tmp = tempdir().unwrap();
    // Only the alternate filename exists in the data dir.
    write_results(tmp.path(), "Data.csv");

    hat(tmp.path())
        .args(["summary", "--dir", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total runs: 8"));
}

#[test]
fn exhausted_filename_chain_fails_with_manual_hint() {
    let tmp = tempdir().unwrap();

    hat(tmp.path())
        .args(["report", "--dir", tmp.path().to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn ml_report_writes_comparison_charts() {
    let tmp = tempdir().unwrap();
    let data = write_results(tmp.path(), "results.csv");
    let charts = tmp.path().join("charts");

    hat(tmp.path())
        .args([
            "ml",
            "--data",
            data.to_str().unwrap(),
            "--model",
            "MLP",
            "--charts-out",
            charts.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("AI (MLP) vs SCALED_MANHATTAN"))
        .stdout(predicate::str::contains("Avg Work Saved"));
    assert!(charts.join("ml_efficiency.json").exists());
    assert!(charts.join("ml_distribution.json").exists());
    assert!(charts.join("ml_time.json").exists());
}

#[test]
fn charts_exports_every_spec() {
    let tmp = tempdir().unwrap();
    let data = write_results(tmp.path(), "results.csv");
    let out = tmp.path().join("specs");

    hat(tmp.path())
        .args([
            "charts",
            "--data",
            data.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("chart spec(s) written to"));
    for spec in [
        "heuristic_efficiency.json",
        "memory_wall.json",
        "failure_rates.json",
        "time_space_tradeoff.json",
        "ml_bonus.json",
        "ml_efficiency.json",
    ] {
        assert!(out.join(spec).exists(), "missing {spec}");
    }
}

#[test]
fn completions_generate_for_bash() {
    let tmp = tempdir().unwrap();

    hat(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hat"));
}
