use super::enums::ApiStatus;
use crate::error::{IyzipayError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fields every gateway reply carries, successful or not.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    pub status: ApiStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_group: Option<String>,
}

impl ResponseMeta {
    pub fn is_success(&self) -> bool {
        self.status == ApiStatus::Success
    }

    /// Converts a `failure` reply into [`IyzipayError::Rejected`].
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }
        Err(IyzipayError::Rejected {
            code: self.error_code.unwrap_or_else(|| "unknown".to_string()),
            message: self
                .error_message
                .unwrap_or_else(|| "no error message returned".to_string()),
            group: self.error_group,
            conversation_id: self.conversation_id,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutFormInitialized {
    #[serde(flatten)]
    pub meta: ResponseMeta,
    pub token: String,
    /// Script snippet that renders the hosted form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_form_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_expire_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_page_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ThreedsInitialized {
    #[serde(flatten)]
    pub meta: ResponseMeta,
    #[serde(
        rename = "threeDSHtmlContent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub three_ds_html_content: Option<String>,
}

impl ThreedsInitialized {
    /// Decodes the base64 bank redirect page the buyer must be shown.
    pub fn html(&self) -> Result<Option<String>> {
        let Some(encoded) = &self.three_ds_html_content else {
            return Ok(None);
        };
        let bytes = STANDARD.decode(encoded.trim()).map_err(|e| {
            IyzipayError::ValidationError(format!("3DS HTML content is not base64: {}", e))
        })?;
        let html = String::from_utf8(bytes).map_err(|e| {
            IyzipayError::ValidationError(format!("3DS HTML content is not UTF-8: {}", e))
        })?;
        Ok(Some(html))
    }
}

/// Per-basket-item breakdown of a completed payment.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ItemTransaction {
    pub item_id: String,
    pub payment_transaction_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_status: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_payout_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_merchant_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_merchant_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_merchant_payout_amount: Option<Decimal>,
}

/// Result of a checkout-form retrieval or a 3-D secure confirmation.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
    #[serde(flatten)]
    pub meta: ResponseMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    /// Present on checkout-form results: `SUCCESS`, `FAILURE` or `INIT_THREEDS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basket_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fraud_status: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_association: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_four_digits: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(default)]
    pub item_transactions: Vec<ItemTransaction>,
}

impl PaymentResult {
    /// Fraud status `1` means the payment cleared the gateway's fraud check.
    pub fn is_fraud_approved(&self) -> bool {
        self.fraud_status == Some(1)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ItemApproval {
    #[serde(flatten)]
    pub meta: ResponseMeta,
    pub payment_transaction_id: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubMerchantCreated {
    #[serde(flatten)]
    pub meta: ResponseMeta,
    pub sub_merchant_key: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubMerchantDetail {
    #[serde(flatten)]
    pub meta: ResponseMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_merchant_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_merchant_external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_merchant_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gsm_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_office: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_company_title: Option<String>,
}
