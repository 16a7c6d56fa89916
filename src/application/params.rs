use crate::domain::enums::{Currency, SubMerchantType};
use crate::domain::money::Price;
use crate::domain::party::{Address, BasketItem, Buyer, PaymentCard};
use crate::error::{IyzipayError, Result};
use serde::Deserialize;

/// Inputs for starting a hosted checkout-form payment.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PayFormParams {
    pub price: Price,
    pub price_paid: Price,
    pub enabled_installments: Vec<u8>,
    pub buyer: Buyer,
    /// Where the gateway posts the buyer back once the form completes.
    pub url: String,
    pub conversation_id: String,
    pub shipping_address: Address,
    pub billing_address: Address,
    pub basket_items: Vec<BasketItem>,
    #[serde(default)]
    pub basket_id: Option<String>,
}

impl PayFormParams {
    pub fn validate(&self) -> Result<()> {
        require("url", &self.url)?;
        require("conversationId", &self.conversation_id)?;
        require_basket(&self.basket_items)
    }
}

/// Inputs for starting a 3-D secure card payment.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Pay3dParams {
    pub price: Price,
    pub price_paid: Price,
    pub payment_card: PaymentCard,
    pub buyer: Buyer,
    pub url: String,
    pub conversation_id: String,
    pub shipping_address: Address,
    pub billing_address: Address,
    pub basket_items: Vec<BasketItem>,
    #[serde(default = "single_installment")]
    pub installment: u8,
    #[serde(default)]
    pub basket_id: Option<String>,
}

fn single_installment() -> u8 {
    1
}

impl Pay3dParams {
    pub fn validate(&self) -> Result<()> {
        require("url", &self.url)?;
        require("conversationId", &self.conversation_id)?;
        if self.installment == 0 {
            return Err(IyzipayError::ValidationError(
                "installment must be at least 1".to_string(),
            ));
        }
        require_basket(&self.basket_items)
    }
}

/// Inputs for onboarding a marketplace submerchant.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewSubMerchant {
    pub conversation_id: String,
    pub sub_merchant_external_id: String,
    pub sub_merchant_type: SubMerchantType,
    pub address: String,
    #[serde(default)]
    pub tax_office: Option<String>,
    #[serde(default)]
    pub tax_number: Option<String>,
    #[serde(default)]
    pub legal_company_title: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_surname: Option<String>,
    pub email: String,
    pub gsm_number: String,
    pub name: String,
    pub iban: String,
    #[serde(default)]
    pub identity_number: Option<String>,
    /// Falls back to the client's default currency.
    #[serde(default)]
    pub currency: Option<Currency>,
}

impl NewSubMerchant {
    pub fn validate(&self) -> Result<()> {
        require("conversationId", &self.conversation_id)?;
        require("subMerchantExternalId", &self.sub_merchant_external_id)?;
        require("iban", &self.iban)?;
        match self.sub_merchant_type {
            SubMerchantType::Personal => {
                if self.identity_number.as_deref().is_none_or(str::is_empty) {
                    return Err(IyzipayError::ValidationError(
                        "identityNumber is required for PERSONAL submerchants".to_string(),
                    ));
                }
            }
            SubMerchantType::PrivateCompany | SubMerchantType::LimitedOrJointStockCompany => {
                if self.tax_office.as_deref().is_none_or(str::is_empty) {
                    return Err(IyzipayError::ValidationError(
                        "taxOffice is required for company submerchants".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Inputs for updating an existing submerchant.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubMerchantParams {
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
    #[serde(default)]
    pub tax_office: Option<String>,
    #[serde(default)]
    pub legal_company_title: Option<String>,
}

impl UpdateSubMerchantParams {
    pub fn validate(&self) -> Result<()> {
        require("conversationId", &self.conversation_id)?;
        require("subMerchantKey", &self.sub_merchant_key)?;
        require("iban", &self.iban)
    }
}

pub(crate) fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(IyzipayError::ValidationError(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(())
}

/// Passes `None` through but rejects a present, blank value.
pub(crate) fn optional(field: &str, value: Option<&str>) -> Result<Option<String>> {
    match value {
        Some(value) => {
            require(field, value)?;
            Ok(Some(value.to_string()))
        }
        None => Ok(None),
    }
}

fn require_basket(items: &[BasketItem]) -> Result<()> {
    if items.is_empty() {
        return Err(IyzipayError::ValidationError(
            "basketItems must contain at least one item".to_string(),
        ));
    }
    Ok(())
}
