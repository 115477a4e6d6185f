use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("atm-cash"));
    cmd.arg("tests/fixtures/test.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Restocked R$ 100,00 (quantity: 1)"))
        .stdout(predicate::str::contains(
            "Options for R$ 100,00:\n  1) R$ 100,00 ( 5x R$ 20,00 )\n  2) R$ 100,00 ( 2x R$ 50,00 )\n  3) R$ 100,00 ( 1x R$ 100,00 )",
        ))
        .stdout(predicate::str::contains("Withdrew R$ 100,00 ( 2x R$ 50,00 )"))
        .stdout(predicate::str::contains(
            "Withdrew R$ 170,00 ( 1x R$ 50,00 + 6x R$ 20,00 )",
        ))
        .stdout(predicate::str::contains("denomination,count,total"))
        .stdout(predicate::str::contains("100,1,100"))
        .stdout(predicate::str::contains("50,0,0"))
        .stdout(predicate::str::contains("20,0,0"));

    Ok(())
}

#[test]
fn test_cli_missing_script() {
    let mut cmd = Command::new(cargo_bin!("atm-cash"));
    cmd.arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}

#[test]
fn test_cli_verbose_logs_operations() {
    let mut cmd = Command::new(cargo_bin!("atm-cash"));
    cmd.env_remove("RUST_LOG")
        .arg("--verbose")
        .arg("tests/fixtures/test.csv");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("processing operation"))
        .stderr(predicate::str::contains("searched withdrawal options"));
}
