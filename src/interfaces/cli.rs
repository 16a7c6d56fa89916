use super::json::params_reader::ParamsReader;
use crate::application::client::IyzipayClient;
use crate::application::params::{NewSubMerchant, PayFormParams, Pay3dParams, UpdateSubMerchantParams};
use crate::config::{GatewayConfig, SANDBOX_BASE_URL};
use crate::error::{IyzipayError, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Call the iyzico payment gateway", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub gateway: GatewayArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Gateway connection flags, accepted before or after the subcommand.
#[derive(Args, Debug)]
pub struct GatewayArgs {
    /// Merchant API key
    #[arg(long, global = true, env = "IYZICO_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Merchant secret key used to sign requests
    #[arg(long, global = true, env = "IYZICO_SECRET_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    /// Gateway base URL
    #[arg(long, global = true, env = "IYZICO_BASE_URL", default_value = SANDBOX_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "IYZICO_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

impl GatewayArgs {
    pub fn to_config(&self) -> Result<GatewayConfig> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            IyzipayError::ConfigError("missing --api-key (or IYZICO_API_KEY)".to_string())
        })?;
        let secret_key = self.secret_key.as_deref().ok_or_else(|| {
            IyzipayError::ConfigError("missing --secret-key (or IYZICO_SECRET_KEY)".to_string())
        })?;
        Ok(GatewayConfig::new(api_key, secret_key)
            .with_base_url(&self.base_url)
            .with_timeout(Duration::from_secs(self.timeout_secs)))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a hosted checkout-form payment
    CheckoutInit {
        /// JSON file with the checkout parameters
        #[arg(long)]
        params: PathBuf,
    },
    /// Retrieve a checkout-form result by token
    CheckoutRetrieve {
        #[arg(long)]
        token: String,
        #[arg(long)]
        conversation_id: Option<String>,
    },
    /// Start a 3-D secure payment
    ThreedsInit {
        /// JSON file with the 3DS parameters
        #[arg(long)]
        params: PathBuf,
    },
    /// Complete a 3-D secure payment
    ThreedsConfirm {
        #[arg(long)]
        payment_id: String,
        #[arg(long)]
        conversation_id: String,
    },
    /// Approve a basket item for payout to its submerchant
    Approve {
        #[arg(long)]
        payment_transaction_id: String,
        #[arg(long)]
        conversation_id: Option<String>,
    },
    /// Withdraw the approval of a basket item
    Disapprove {
        #[arg(long)]
        payment_transaction_id: String,
        #[arg(long)]
        conversation_id: Option<String>,
    },
    /// Onboard a marketplace submerchant
    SubmerchantCreate {
        #[arg(long)]
        params: PathBuf,
    },
    /// Update an existing submerchant
    SubmerchantUpdate {
        #[arg(long)]
        params: PathBuf,
    },
    /// Look up a submerchant by external id
    SubmerchantRetrieve {
        #[arg(long)]
        external_id: String,
        #[arg(long)]
        conversation_id: Option<String>,
    },
}

/// Runs one command and returns the gateway reply as JSON.
pub async fn execute(client: &IyzipayClient, command: Command) -> Result<Value> {
    let reply = match command {
        Command::CheckoutInit { params } => {
            let params: PayFormParams = ParamsReader::open(params)?.read()?;
            serde_json::to_value(client.initialize_checkout_form(params).await?)?
        }
        Command::CheckoutRetrieve {
            token,
            conversation_id,
        } => serde_json::to_value(
            client
                .retrieve_checkout_form(&token, conversation_id.as_deref())
                .await?,
        )?,
        Command::ThreedsInit { params } => {
            let params: Pay3dParams = ParamsReader::open(params)?.read()?;
            serde_json::to_value(client.initialize_threeds(params).await?)?
        }
        Command::ThreedsConfirm {
            payment_id,
            conversation_id,
        } => serde_json::to_value(client.confirm_threeds(&payment_id, &conversation_id).await?)?,
        Command::Approve {
            payment_transaction_id,
            conversation_id,
        } => serde_json::to_value(
            client
                .approve_item(&payment_transaction_id, conversation_id.as_deref())
                .await?,
        )?,
        Command::Disapprove {
            payment_transaction_id,
            conversation_id,
        } => serde_json::to_value(
            client
                .disapprove_item(&payment_transaction_id, conversation_id.as_deref())
                .await?,
        )?,
        Command::SubmerchantCreate { params } => {
            let sub: NewSubMerchant = ParamsReader::open(params)?.read()?;
            serde_json::to_value(client.create_submerchant(sub).await?)?
        }
        Command::SubmerchantUpdate { params } => {
            let params: UpdateSubMerchantParams = ParamsReader::open(params)?.read()?;
            serde_json::to_value(client.update_submerchant(params).await?)?
        }
        Command::SubmerchantRetrieve {
            external_id,
            conversation_id,
        } => serde_json::to_value(
            client
                .retrieve_submerchant(&external_id, conversation_id.as_deref())
                .await?,
        )?,
    };
    Ok(reply)
}
