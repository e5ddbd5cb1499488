use assert_cmd::{cargo, prelude::*};
use predicates::prelude::*;
use std::process::Command;

#[test]
fn quote_prints_installment_and_total_lines() {
    let mut cmd = Command::new(cargo::cargo_bin!("br-loan"));
    cmd.args(["--principal", "1000", "--rate", "2", "--months", "12"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Valor das parcelas: R$94,56"))
        .stdout(predicate::str::contains(
            "Valor total pago no final: R$1.134,72",
        ));
}

#[test]
fn quote_whole_amounts_drop_cents() {
    let mut cmd = Command::new(cargo::cargo_bin!("br-loan"));
    cmd.args(["--principal", "1000", "--rate", "0", "--months", "10"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Valor das parcelas: R$100\n"))
        .stdout(predicate::str::contains("Valor total pago no final: R$1.000\n"));
}

#[test]
fn quote_json_output() {
    let mut cmd = Command::new(cargo::cargo_bin!("br-loan"));
    cmd.args(["--principal", "1000", "--rate", "2", "--months", "12", "--json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"quoted\""))
        .stdout(predicate::str::contains("94.56"))
        .stdout(predicate::str::contains("1134.72"));
}

#[test]
fn unparsable_field_shows_validation_message_and_fails() {
    let mut cmd = Command::new(cargo::cargo_bin!("br-loan"));
    cmd.args(["--principal", "abc", "--rate", "2", "--months", "12"]);

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Preencha todos os campos"));
}

#[test]
fn zero_months_shows_validation_message() {
    let mut cmd = Command::new(cargo::cargo_bin!("br-loan"));
    cmd.args(["--principal", "1000", "--rate", "2", "--months", "0"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Preencha todos os campos"));
}
