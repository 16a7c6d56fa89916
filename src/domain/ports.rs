use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum HttpMethod {
    Post,
    Put,
}

/// Every gateway operation this crate can invoke.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Endpoint {
    CheckoutFormInitialize,
    CheckoutFormRetrieve,
    ThreedsInitialize,
    ThreedsAuth,
    ItemApprove,
    ItemDisapprove,
    SubMerchantCreate,
    SubMerchantUpdate,
    SubMerchantRetrieve,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::CheckoutFormInitialize => "/payment/iyzipos/checkoutform/initialize/auth/ecom",
            Endpoint::CheckoutFormRetrieve => "/payment/iyzipos/checkoutform/auth/ecom/detail",
            Endpoint::ThreedsInitialize => "/payment/3dsecure/initialize",
            Endpoint::ThreedsAuth => "/payment/3dsecure/auth",
            Endpoint::ItemApprove => "/payment/iyzipos/item/approve",
            Endpoint::ItemDisapprove => "/payment/iyzipos/item/disapprove",
            Endpoint::SubMerchantCreate | Endpoint::SubMerchantUpdate => "/onboarding/submerchant",
            Endpoint::SubMerchantRetrieve => "/onboarding/submerchant/detail",
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::SubMerchantUpdate => HttpMethod::Put,
            _ => HttpMethod::Post,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match self.method() {
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        };
        write!(f, "{} {}", method, self.path())
    }
}

/// Transport to the payment gateway.
///
/// Implementations deliver one JSON body to one endpoint and hand back the
/// JSON reply untouched; interpreting `status` is left to the caller.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn call(&self, endpoint: Endpoint, body: Value) -> Result<Value>;
}

pub type GatewayBox = Box<dyn Gateway>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submerchant_update_is_put() {
        assert_eq!(Endpoint::SubMerchantUpdate.method(), HttpMethod::Put);
        assert_eq!(Endpoint::SubMerchantCreate.method(), HttpMethod::Post);
        assert_eq!(
            Endpoint::SubMerchantCreate.path(),
            Endpoint::SubMerchantUpdate.path()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Endpoint::ThreedsAuth.to_string(),
            "POST /payment/3dsecure/auth"
        );
    }
}
