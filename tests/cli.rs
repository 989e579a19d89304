use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn split(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("split").unwrap();
    cmd.env("SPLIT_CLI_CONFIG_DIR", config_dir.path())
        .env_remove("SPLIT_LOG");
    cmd
}

#[test]
fn calc_end_to_end_scenario() {
    let dir = TempDir::new().unwrap();
    split(&dir)
        .args([
            "calc",
            "--toggle",
            "gas",
            "--toggle",
            "internet",
            "--value",
            "energia=100",
            "--value",
            "agua=50",
            "--payer",
            "Carlos",
            "--dependent",
            "carlos=Duda",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total bills:  R$ 150,00"))
        .stdout(predicate::str::contains("People:       2"))
        .stdout(predicate::str::contains("Per person:   R$ 75,00"))
        .stdout(predicate::str::contains("CARLOS (2 people)"));
}

#[test]
fn calc_json_output() {
    let dir = TempDir::new().unwrap();
    let output = split(&dir)
        .args([
            "calc",
            "--format",
            "json",
            "-v",
            "internet=100",
            "-p",
            "ana",
            "-d",
            "ana=bob",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["total_cost"], 100.0);
    assert_eq!(summary["value_per_person"], 50.0);
    assert_eq!(summary["payers"][0]["name"], "ANA");
    assert_eq!(summary["payers"][0]["share"], 100.0);
}

#[test]
fn calc_unknown_expense_fails() {
    let dir = TempDir::new().unwrap();
    split(&dir)
        .args(["calc", "--value", "aluguel=100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account not found: aluguel"));
}

#[test]
fn session_from_stdin() {
    let dir = TempDir::new().unwrap();
    split(&dir)
        .arg("session")
        .write_stdin(
            "set energia 12,50\n\
             add-payer \"   \"\n\
             add-payer ana\n\
             bogus\n\
             summary\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("energia = R$ 12,50"))
        .stdout(predicate::str::contains("Payer name cannot be empty"))
        .stdout(predicate::str::contains("Per person:   R$ 12,50"))
        .stdout(predicate::str::contains("split>").not());
}

#[test]
fn session_is_the_default_command() {
    let dir = TempDir::new().unwrap();
    split(&dir)
        .write_stdin("add-payer ana\npayers\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[A] ANA"));
}

#[test]
fn catalog_uses_custom_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "currency_symbol": "$", "decimal_separator": ".", "thousands_separator": ",",
             "catalog": [{ "id": "rent", "name": "RENT", "selected": true }] }"#,
    )
    .unwrap();

    split(&dir)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("RENT"))
        .stdout(predicate::str::contains("$ 0.00"))
        .stdout(predicate::str::contains("ENERGIA").not());
}

#[test]
fn invalid_settings_are_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ broken").unwrap();

    split(&dir)
        .arg("catalog")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings file"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();
    split(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("built-in"));
}
