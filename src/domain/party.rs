use super::enums::BasketItemType;
use super::money::Price;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The paying customer as the gateway's fraud checks expect it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Buyer {
    pub id: String,
    pub name: String,
    pub surname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gsm_number: Option<String>,
    pub email: String,
    pub identity_number: String,
    /// Format `yyyy-MM-dd HH:mm:ss`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_date: Option<String>,
    /// Format `yyyy-MM-dd HH:mm:ss`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,
    pub registration_address: String,
    pub ip: String,
    pub city: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

/// Shipping or billing address.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub contact_name: String,
    pub city: String,
    pub country: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BasketItem {
    pub id: String,
    pub name: String,
    pub category1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category2: Option<String>,
    pub item_type: BasketItemType,
    pub price: Price,
    /// Routes this item's funds to a marketplace submerchant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_merchant_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_merchant_price: Option<Price>,
}

/// Raw card data for the 3-D secure flow.
#[derive(Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCard {
    pub card_holder_name: String,
    pub card_number: String,
    pub expire_month: String,
    pub expire_year: String,
    pub cvc: String,
    /// `1` stores the card at the gateway, `0` does not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub register_card: Option<u8>,
}

impl PaymentCard {
    /// Last four digits of the card number, for logs and receipts.
    pub fn last_four(&self) -> &str {
        let digits = self.card_number.trim();
        let start = digits.len().saturating_sub(4);
        digits.get(start..).unwrap_or("")
    }
}

impl fmt::Debug for PaymentCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentCard")
            .field("card_holder_name", &self.card_holder_name)
            .field("card_number", &format_args!("****{}", self.last_four()))
            .field("expire_month", &self.expire_month)
            .field("expire_year", &self.expire_year)
            .field("cvc", &"***")
            .field("register_card", &self.register_card)
            .finish()
    }
}
