mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use std::process::Command;

fn iyzipay(server: &MockServer) -> Command {
    let mut cmd = Command::new(cargo_bin!("iyzipay"));
    cmd.env_remove("IYZICO_API_KEY")
        .env_remove("IYZICO_SECRET_KEY")
        .env("IYZICO_BASE_URL", server.base_url())
        .arg("--api-key")
        .arg("cli-key")
        .arg("--secret-key")
        .arg("cli-secret");
    cmd
}

#[test]
fn test_cli_requires_credentials() {
    let mut cmd = Command::new(cargo_bin!("iyzipay"));
    cmd.env_remove("IYZICO_API_KEY")
        .env_remove("IYZICO_SECRET_KEY")
        .args(["checkout-retrieve", "--token", "tok"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--api-key"));
}

#[test]
fn test_cli_checkout_init_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/payment/iyzipos/checkoutform/initialize/auth/ecom")
            .header_exists("x-iyzi-rnd")
            .json_body_partial(r#"{"conversationId":"123456789","enabledInstallments":[2,3,6,9]}"#);
        then.status(200).json_body(json!({
            "status": "success",
            "token": "cli-token",
            "tokenExpireTime": 1800
        }));
    });
    let params = common::write_json(&common::form_params());

    iyzipay(&server)
        .arg("checkout-init")
        .arg("--params")
        .arg(params.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"token\": \"cli-token\""));

    mock.assert();
    Ok(())
}

#[test]
fn test_cli_submerchant_update_uses_put() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/onboarding/submerchant")
            .json_body_partial(r#"{"currency":"TRY","subMerchantKey":"sm-key"}"#);
        then.status(200)
            .json_body(json!({"status": "success", "conversationId": "c-9"}));
    });
    let params = common::write_json(&json!({
        "conversationId": "c-9",
        "subMerchantKey": "sm-key",
        "iban": "TR180006200119000006672315",
        "address": "Nidakule Göztepe",
        "contactName": "John",
        "contactSurname": "Doe",
        "email": "email@submerchantemail.com",
        "gsmNumber": "+905350000000",
        "name": "John's market",
        "identityNumber": "31300864726"
    }));

    iyzipay(&server)
        .arg("submerchant-update")
        .arg("--params")
        .arg(params.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"success\""));

    mock.assert();
}

#[test]
fn test_cli_rejection_exits_with_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/payment/iyzipos/item/approve");
        then.status(200).json_body(json!({
            "status": "failure",
            "errorCode": "5030",
            "errorMessage": "Payment item not found"
        }));
    });

    iyzipay(&server)
        .args(["approve", "--payment-transaction-id", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("5030"));
}

#[test]
fn test_cli_negative_price_is_rejected_before_sending() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/payment/3dsecure/initialize");
        then.status(200).json_body(json!({"status": "success"}));
    });
    let mut params = common::threeds_params();
    params["price"] = json!("-1");
    let params = common::write_json(&params);

    iyzipay(&server)
        .arg("threeds-init")
        .arg("--params")
        .arg(params.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Price must be positive"));

    mock.assert_hits(0);
}

#[test]
fn test_cli_incomplete_params_file() {
    let server = MockServer::start();
    let params = common::write_json(&json!({"conversationId": "123456789"}));

    iyzipay(&server)
        .arg("checkout-init")
        .arg("--params")
        .arg(params.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}

#[test]
fn test_cli_credentials_after_subcommand() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/payment/iyzipos/item/disapprove")
            .json_body(json!({"locale": "tr", "paymentTransactionId": "ptx-9"}));
        then.status(200)
            .json_body(json!({"status": "success", "paymentTransactionId": "ptx-9"}));
    });

    let mut cmd = Command::new(cargo_bin!("iyzipay"));
    cmd.env_remove("IYZICO_API_KEY")
        .env_remove("IYZICO_SECRET_KEY")
        .env_remove("IYZICO_BASE_URL")
        .args(["disapprove", "--payment-transaction-id", "ptx-9"])
        .arg("--api-key")
        .arg("cli-key")
        .arg("--secret-key")
        .arg("cli-secret")
        .arg("--base-url")
        .arg(server.base_url());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ptx-9"));
    mock.assert();
}
