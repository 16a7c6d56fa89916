//! Request bodies exactly as the gateway endpoints accept them.

use super::enums::{Currency, Locale, PaymentGroup, SubMerchantType};
use super::money::Price;
use super::party::{Address, BasketItem, Buyer, PaymentCard};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutFormInitializeRequest {
    pub locale: Locale,
    pub conversation_id: String,
    pub price: Price,
    pub paid_price: Price,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basket_id: Option<String>,
    pub payment_group: PaymentGroup,
    pub callback_url: String,
    pub enabled_installments: Vec<u8>,
    pub buyer: Buyer,
    pub shipping_address: Address,
    pub billing_address: Address,
    pub basket_items: Vec<BasketItem>,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutFormRetrieveRequest {
    pub locale: Locale,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    pub token: String,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ThreedsInitializeRequest {
    pub locale: Locale,
    pub conversation_id: String,
    pub price: Price,
    pub paid_price: Price,
    pub currency: Currency,
    pub installment: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basket_id: Option<String>,
    pub payment_group: PaymentGroup,
    pub payment_card: PaymentCard,
    pub buyer: Buyer,
    pub callback_url: String,
    pub shipping_address: Address,
    pub billing_address: Address,
    pub basket_items: Vec<BasketItem>,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ThreedsAuthRequest {
    pub locale: Locale,
    pub payment_id: String,
    pub conversation_id: String,
}

/// Body shared by item approval and disapproval.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ItemApprovalRequest {
    pub locale: Locale,
    pub payment_transaction_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubMerchantCreateRequest {
    pub locale: Locale,
    pub conversation_id: String,
    pub sub_merchant_external_id: String,
    pub sub_merchant_type: SubMerchantType,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_office: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_company_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_surname: Option<String>,
    pub email: String,
    pub gsm_number: String,
    pub name: String,
    pub iban: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_number: Option<String>,
    pub currency: Currency,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubMerchantUpdateRequest {
    pub locale: Locale,
    pub conversation_id: String,
    pub sub_merchant_key: String,
    pub iban: String,
    pub address: String,
    pub contact_name: String,
    pub contact_surname: String,
    pub email: String,
    pub gsm_number: String,
    pub name: String,
    pub identity_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_office: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_company_title: Option<String>,
    pub currency: Currency,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubMerchantRetrieveRequest {
    pub locale: Locale,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    pub sub_merchant_external_id: String,
}
