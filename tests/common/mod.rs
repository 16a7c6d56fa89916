#![allow(dead_code)]

use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;

pub fn buyer() -> Value {
    json!({
        "id": "BY789",
        "name": "John",
        "surname": "Doe",
        "gsmNumber": "+905350000000",
        "email": "email@email.com",
        "identityNumber": "74300864791",
        "lastLoginDate": "2015-10-05 12:43:35",
        "registrationDate": "2013-04-21 15:12:09",
        "registrationAddress": "Nidakule Göztepe, Merdivenköy Mah. Bora Sok. No:1",
        "ip": "85.34.78.112",
        "city": "Istanbul",
        "country": "Turkey",
        "zipCode": "34732"
    })
}

pub fn address() -> Value {
    json!({
        "contactName": "Jane Doe",
        "city": "Istanbul",
        "country": "Turkey",
        "address": "Nidakule Göztepe, Merdivenköy Mah. Bora Sok. No:1",
        "zipCode": "34742"
    })
}

pub fn basket_items() -> Value {
    json!([
        {
            "id": "BI101",
            "name": "Binocular",
            "category1": "Collectibles",
            "category2": "Accessories",
            "itemType": "PHYSICAL",
            "price": "0.3"
        },
        {
            "id": "BI102",
            "name": "Game code",
            "category1": "Game",
            "itemType": "VIRTUAL",
            "price": 0.7
        }
    ])
}

/// Checkout-form parameters in the CLI's JSON layout.
pub fn form_params() -> Value {
    json!({
        "price": "1",
        "pricePaid": "1.2",
        "enabledInstallments": [2, 3, 6, 9],
        "buyer": buyer(),
        "url": "https://www.merchant.com/callback",
        "conversationId": "123456789",
        "shippingAddress": address(),
        "billingAddress": address(),
        "basketItems": basket_items()
    })
}

pub fn threeds_params() -> Value {
    json!({
        "price": "1",
        "pricePaid": "1.2",
        "paymentCard": {
            "cardHolderName": "John Doe",
            "cardNumber": "5528790000000008",
            "expireMonth": "12",
            "expireYear": "2030",
            "cvc": "123",
            "registerCard": 0
        },
        "buyer": buyer(),
        "url": "https://www.merchant.com/3ds",
        "conversationId": "123456789",
        "shippingAddress": address(),
        "billingAddress": address(),
        "basketItems": basket_items()
    })
}

pub fn write_json(value: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", value).unwrap();
    file
}
