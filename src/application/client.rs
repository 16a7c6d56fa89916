use super::params::{NewSubMerchant, PayFormParams, Pay3dParams, UpdateSubMerchantParams, optional, require};
use crate::domain::enums::{Currency, Locale, PaymentGroup};
use crate::domain::ports::{Endpoint, GatewayBox};
use crate::domain::request::{
    CheckoutFormInitializeRequest, CheckoutFormRetrieveRequest, ItemApprovalRequest,
    SubMerchantCreateRequest, SubMerchantRetrieveRequest, SubMerchantUpdateRequest,
    ThreedsAuthRequest, ThreedsInitializeRequest,
};
use crate::domain::response::{
    CheckoutFormInitialized, ItemApproval, PaymentResult, ResponseMeta, SubMerchantCreated,
    SubMerchantDetail, ThreedsInitialized,
};
use crate::error::{IyzipayError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Values stamped onto every request that the caller does not choose per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestDefaults {
    pub locale: Locale,
    pub currency: Currency,
    pub payment_group: PaymentGroup,
}

/// Typed entry point to the payment gateway.
///
/// Each operation shapes its request, performs exactly one gateway call and
/// resolves to either the decoded reply or a single error. Replies flagged
/// `failure` by the gateway surface as [`IyzipayError::Rejected`].
pub struct IyzipayClient {
    gateway: GatewayBox,
    defaults: RequestDefaults,
}

impl IyzipayClient {
    /// Creates a client using Turkish locale, TRY and the `PRODUCT` payment group.
    pub fn new(gateway: GatewayBox) -> Self {
        Self {
            gateway,
            defaults: RequestDefaults::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: RequestDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn defaults(&self) -> RequestDefaults {
        self.defaults
    }

    /// Starts a hosted checkout-form payment.
    pub async fn initialize_checkout_form(
        &self,
        params: PayFormParams,
    ) -> Result<CheckoutFormInitialized> {
        params.validate()?;
        let request = CheckoutFormInitializeRequest {
            locale: self.defaults.locale,
            conversation_id: params.conversation_id,
            price: params.price,
            paid_price: params.price_paid,
            currency: self.defaults.currency,
            basket_id: params.basket_id,
            payment_group: self.defaults.payment_group,
            callback_url: params.url,
            enabled_installments: params.enabled_installments,
            buyer: params.buyer,
            shipping_address: params.shipping_address,
            billing_address: params.billing_address,
            basket_items: params.basket_items,
        };
        self.send(Endpoint::CheckoutFormInitialize, &request).await
    }

    /// Fetches the outcome of a checkout form by the token issued at initialization.
    pub async fn retrieve_checkout_form(
        &self,
        token: &str,
        conversation_id: Option<&str>,
    ) -> Result<PaymentResult> {
        require("token", token)?;
        let request = CheckoutFormRetrieveRequest {
            locale: self.defaults.locale,
            conversation_id: optional("conversationId", conversation_id)?,
            token: token.to_string(),
        };
        self.send(Endpoint::CheckoutFormRetrieve, &request).await
    }

    /// Starts a 3-D secure payment; the reply carries the bank page to render.
    pub async fn initialize_threeds(&self, params: Pay3dParams) -> Result<ThreedsInitialized> {
        params.validate()?;
        debug!(
            conversation_id = %params.conversation_id,
            card = %params.payment_card.last_four(),
            "initializing 3DS payment"
        );
        let request = ThreedsInitializeRequest {
            locale: self.defaults.locale,
            conversation_id: params.conversation_id,
            price: params.price,
            paid_price: params.price_paid,
            currency: self.defaults.currency,
            installment: params.installment,
            basket_id: params.basket_id,
            payment_group: self.defaults.payment_group,
            payment_card: params.payment_card,
            buyer: params.buyer,
            callback_url: params.url,
            shipping_address: params.shipping_address,
            billing_address: params.billing_address,
            basket_items: params.basket_items,
        };
        self.send(Endpoint::ThreedsInitialize, &request).await
    }

    /// Completes a 3-D secure payment after the bank callback.
    pub async fn confirm_threeds(
        &self,
        payment_id: &str,
        conversation_id: &str,
    ) -> Result<PaymentResult> {
        require("paymentId", payment_id)?;
        require("conversationId", conversation_id)?;
        let request = ThreedsAuthRequest {
            locale: self.defaults.locale,
            payment_id: payment_id.to_string(),
            conversation_id: conversation_id.to_string(),
        };
        self.send(Endpoint::ThreedsAuth, &request).await
    }

    /// Releases a basket item's funds to its submerchant.
    pub async fn approve_item(
        &self,
        payment_transaction_id: &str,
        conversation_id: Option<&str>,
    ) -> Result<ItemApproval> {
        let request = self.approval_request(payment_transaction_id, conversation_id)?;
        self.send(Endpoint::ItemApprove, &request).await
    }

    /// Withdraws a previous approval of a basket item.
    pub async fn disapprove_item(
        &self,
        payment_transaction_id: &str,
        conversation_id: Option<&str>,
    ) -> Result<ItemApproval> {
        let request = self.approval_request(payment_transaction_id, conversation_id)?;
        self.send(Endpoint::ItemDisapprove, &request).await
    }

    pub async fn create_submerchant(&self, sub: NewSubMerchant) -> Result<SubMerchantCreated> {
        sub.validate()?;
        let request = SubMerchantCreateRequest {
            locale: self.defaults.locale,
            conversation_id: sub.conversation_id,
            sub_merchant_external_id: sub.sub_merchant_external_id,
            sub_merchant_type: sub.sub_merchant_type,
            address: sub.address,
            tax_office: sub.tax_office,
            tax_number: sub.tax_number,
            legal_company_title: sub.legal_company_title,
            contact_name: sub.contact_name,
            contact_surname: sub.contact_surname,
            email: sub.email,
            gsm_number: sub.gsm_number,
            name: sub.name,
            iban: sub.iban,
            identity_number: sub.identity_number,
            currency: sub.currency.unwrap_or(self.defaults.currency),
        };
        self.send(Endpoint::SubMerchantCreate, &request).await
    }

    pub async fn update_submerchant(&self, params: UpdateSubMerchantParams) -> Result<ResponseMeta> {
        params.validate()?;
        let request = SubMerchantUpdateRequest {
            locale: self.defaults.locale,
            conversation_id: params.conversation_id,
            sub_merchant_key: params.sub_merchant_key,
            iban: params.iban,
            address: params.address,
            contact_name: params.contact_name,
            contact_surname: params.contact_surname,
            email: params.email,
            gsm_number: params.gsm_number,
            name: params.name,
            identity_number: params.identity_number,
            tax_office: params.tax_office,
            legal_company_title: params.legal_company_title,
            currency: self.defaults.currency,
        };
        self.send(Endpoint::SubMerchantUpdate, &request).await
    }

    /// Looks up a submerchant by the id the marketplace assigned at onboarding.
    pub async fn retrieve_submerchant(
        &self,
        sub_merchant_external_id: &str,
        conversation_id: Option<&str>,
    ) -> Result<SubMerchantDetail> {
        require("subMerchantExternalId", sub_merchant_external_id)?;
        let request = SubMerchantRetrieveRequest {
            locale: self.defaults.locale,
            conversation_id: optional("conversationId", conversation_id)?,
            sub_merchant_external_id: sub_merchant_external_id.to_string(),
        };
        self.send(Endpoint::SubMerchantRetrieve, &request).await
    }

    fn approval_request(
        &self,
        payment_transaction_id: &str,
        conversation_id: Option<&str>,
    ) -> Result<ItemApprovalRequest> {
        require("paymentTransactionId", payment_transaction_id)?;
        Ok(ItemApprovalRequest {
            locale: self.defaults.locale,
            payment_transaction_id: payment_transaction_id.to_string(),
            conversation_id: optional("conversationId", conversation_id)?,
        })
    }

    async fn send<Req, Resp>(&self, endpoint: Endpoint, request: &Req) -> Result<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_value(request)?;
        debug!(%endpoint, "calling gateway");
        let reply = self.gateway.call(endpoint, body).await?;
        decode(reply).inspect_err(|e| {
            if let IyzipayError::Rejected { code, message, .. } = e {
                warn!(%endpoint, code = %code, message = %message, "gateway rejected request");
            }
        })
    }
}

fn decode<T: DeserializeOwned>(reply: Value) -> Result<T> {
    let meta: ResponseMeta = serde_json::from_value(reply.clone())?;
    meta.into_result()?;
    Ok(serde_json::from_value(reply)?)
}
