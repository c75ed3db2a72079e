//! HTTP client for the Jupiter swap aggregator.
//!
//! [`JupiterClient`] is the dependent client of the Solana connection:
//! it composes the RPC client and the signing keypair with the Jupiter
//! v6 quote/swap API and the v1 limit-order API. Network errors from
//! requests propagate to the caller; nothing here retries or swallows.

use std::sync::Arc;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use tracing::debug;

use berth_types::ConnectionError;

/// Jupiter API endpoints.
#[derive(Debug, Clone)]
pub struct JupiterEndpoints {
    /// v6 quote endpoint.
    pub quote: String,
    /// v6 swap endpoint.
    pub swap: String,
    /// Limit-order creation endpoint.
    pub create_order: String,
    /// Limit-order cancellation endpoint.
    pub cancel_orders: String,
    /// Open-orders query endpoint (takes a `wallet` query parameter).
    pub open_orders: String,
    /// Order-history query endpoint.
    pub order_history: String,
    /// Trade-history query endpoint.
    pub trade_history: String,
}

impl Default for JupiterEndpoints {
    fn default() -> Self {
        Self {
            quote: "https://quote-api.jup.ag/v6/quote".into(),
            swap: "https://quote-api.jup.ag/v6/swap".into(),
            create_order: "https://jup.ag/api/limit/v1/createOrder".into(),
            cancel_orders: "https://jup.ag/api/limit/v1/cancelOrders".into(),
            open_orders: "https://jup.ag/api/limit/v1/openOrders".into(),
            order_history: "https://jup.ag/api/limit/v1/orderHistory".into(),
            trade_history: "https://jup.ag/api/limit/v1/tradeHistory".into(),
        }
    }
}

/// A swap quote returned by the v6 quote endpoint.
///
/// Only the route-defining fields are typed; the rest of the payload is
/// kept verbatim in `extra` because the swap endpoint expects the quote
/// echoed back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Input token mint address.
    pub input_mint: String,
    /// Input amount in base units.
    pub in_amount: String,
    /// Output token mint address.
    pub output_mint: String,
    /// Output amount in base units.
    pub out_amount: String,
    /// Price impact of the route, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_impact_pct: Option<String>,
    /// Remaining quote payload, preserved for the swap request.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Response of the v6 swap endpoint: a serialized transaction to sign.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapResponse {
    /// Base64-encoded unsigned versioned transaction.
    pub swap_transaction: String,
    /// Last block height at which the transaction is valid.
    #[serde(default)]
    pub last_valid_block_height: Option<u64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SwapRequest<'a> {
    user_public_key: String,
    quote_response: &'a QuoteResponse,
}

/// Swap-routing client layered on the Solana connection.
///
/// Holds the RPC client and keypair it was composed from; the keypair is
/// used for the wallet parameter of order queries and for the swap
/// request's public key. Signing and sending the returned transaction is
/// the caller's business.
pub struct JupiterClient {
    http: Client,
    rpc: RpcClient,
    signer: Arc<Keypair>,
    endpoints: JupiterEndpoints,
}

impl JupiterClient {
    /// Compose a client from the connection's RPC client and keypair.
    pub fn new(rpc: RpcClient, signer: Arc<Keypair>) -> Self {
        Self {
            http: Client::new(),
            rpc,
            signer,
            endpoints: JupiterEndpoints::default(),
        }
    }

    /// The endpoints this client talks to.
    pub fn endpoints(&self) -> &JupiterEndpoints {
        &self.endpoints
    }

    /// The wallet this client quotes and orders for.
    pub fn wallet(&self) -> Pubkey {
        self.signer.pubkey()
    }

    /// The underlying RPC client.
    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    /// Fetch a swap quote.
    ///
    /// `amount` is in base units of the input mint; `slippage_bps` is the
    /// allowed slippage in basis points.
    pub async fn quote(
        &self,
        input_mint: &str,
        output_mint: &str,
        amount: u64,
        slippage_bps: u16,
    ) -> Result<QuoteResponse, ConnectionError> {
        debug!(input_mint, output_mint, amount, "requesting swap quote");

        let resp = self
            .http
            .get(&self.endpoints.quote)
            .query(&[
                ("inputMint", input_mint),
                ("outputMint", output_mint),
                ("amount", &amount.to_string()),
                ("slippageBps", &slippage_bps.to_string()),
            ])
            .send()
            .await
            .map_err(|e| ConnectionError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ConnectionError::ApiError(format!(
                "quote returned {}",
                resp.status(),
            )));
        }

        resp.json()
            .await
            .map_err(|e| ConnectionError::RequestFailed(e.to_string()))
    }

    /// Build the swap transaction for a previously fetched quote.
    pub async fn swap_transaction(
        &self,
        quote: &QuoteResponse,
    ) -> Result<SwapResponse, ConnectionError> {
        let request = SwapRequest {
            user_public_key: self.wallet().to_string(),
            quote_response: quote,
        };

        let resp = self
            .http
            .post(&self.endpoints.swap)
            .json(&request)
            .send()
            .await
            .map_err(|e| ConnectionError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ConnectionError::ApiError(format!(
                "swap returned {}",
                resp.status(),
            )));
        }

        resp.json()
            .await
            .map_err(|e| ConnectionError::RequestFailed(e.to_string()))
    }

    /// Fetch the wallet's open limit orders.
    pub async fn open_orders(&self) -> Result<serde_json::Value, ConnectionError> {
        let resp = self
            .http
            .get(&self.endpoints.open_orders)
            .query(&[("wallet", self.wallet().to_string())])
            .send()
            .await
            .map_err(|e| ConnectionError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ConnectionError::ApiError(format!(
                "openOrders returned {}",
                resp.status(),
            )));
        }

        resp.json()
            .await
            .map_err(|e| ConnectionError::RequestFailed(e.to_string()))
    }
}
