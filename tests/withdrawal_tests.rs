use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_withdraw_exact_stock() {
    let script = common::write_script(&[
        "restock, 100, 1",
        "restock, 50, 1",
        "restock, 20, 1",
        "withdraw, 170, ",
    ]);

    let mut cmd = Command::new(cargo_bin!("atm-cash"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Withdrew R$ 170,00 ( 1x R$ 100,00 + 1x R$ 50,00 + 1x R$ 20,00 )",
        ))
        .stdout(predicate::str::contains("100,0,0"))
        .stdout(predicate::str::contains("20,0,0"));
}

#[test]
fn test_amount_below_minimum_denomination() {
    let script = common::write_script(&["restock, 20, 5", "withdraw, 10, "]);

    let mut cmd = Command::new(cargo_bin!("atm-cash"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "No withdrawal options available for R$ 10,00",
        ))
        .stdout(predicate::str::contains("20,5,100"));
}

#[test]
fn test_amount_without_combination() {
    let script = common::write_script(&[
        "restock, 100, 1",
        "restock, 50, 1",
        "restock, 20, 1",
        "options, 110, ",
        "withdraw, 110, ",
    ]);

    let mut cmd = Command::new(cargo_bin!("atm-cash"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Withdrew").not())
        .stdout(predicate::str::contains(
            "No withdrawal options available for R$ 110,00",
        ))
        .stdout(predicate::str::contains("100,1,100"));
}

#[test]
fn test_restock_overwrites_count() {
    let script = common::write_script(&["restock, 100, 5", "restock, 100, 2"]);

    let mut cmd = Command::new(cargo_bin!("atm-cash"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("100,2,200"));
}

#[test]
fn test_choice_out_of_range_is_rejected() {
    let script = common::write_script(&["restock, 100, 1", "withdraw, 100, 4"]);

    let mut cmd = Command::new(cargo_bin!("atm-cash"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error processing operation"))
        .stdout(predicate::str::contains("100,1,100"));
}

#[test]
fn test_withdraw_until_empty() {
    let script = common::write_script(&[
        "restock, 50, 2",
        "withdraw, 50, ",
        "withdraw, 50, ",
        "withdraw, 50, ",
    ]);

    let mut cmd = Command::new(cargo_bin!("atm-cash"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No withdrawal options available for R$ 50,00"))
        .stdout(predicate::str::contains("50,0,0"));
}
