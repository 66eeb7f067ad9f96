//! Voucher service.
//!
//! Discount decisions are authoritative SERVER-SIDE: the API hosts the
//! same evaluator that lives in `toko-core`, and this service only ships
//! the code/subtotal pair over and displays the outcome. A client that
//! re-runs the evaluator locally gets a preview, never a decision;
//! quotas and redemption counts can only be enforced where they are
//! stored.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use toko_core::{AppliedVoucher, CoreError, Money, Voucher};

use crate::error::{ClientError, ClientResult};
use crate::transport::ApiClient;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidateVoucherRequest<'a> {
    code: &'a str,
    subtotal: Money,
}

/// The API's answer to a validation request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateVoucherResponse {
    valid: bool,
    message: String,
    #[serde(default)]
    discount_amount: Money,
    #[serde(default)]
    free_shipping: bool,
    voucher: Option<Voucher>,
}

/// Voucher service: server-side validation plus the admin catalog.
pub struct VoucherService {
    client: Arc<ApiClient>,
}

impl VoucherService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        VoucherService { client }
    }

    /// Validates a voucher code against the current subtotal.
    ///
    /// ## Returns
    /// - `Ok(AppliedVoucher)` with the server-computed discount
    /// - `Err(VoucherRejected)` carrying the server's user-facing reason
    /// - `Err(Domain(VoucherExhausted))` when the returned record's quota
    ///   is spent; re-checked here on top of the server's own check,
    ///   both must hold before checkout proceeds
    pub async fn validate(&self, code: &str, subtotal: Money) -> ClientResult<AppliedVoucher> {
        debug!(code, subtotal = subtotal.rupiah(), "Validating voucher");

        let response: ValidateVoucherResponse = self
            .client
            .post("/vouchers/validate", &ValidateVoucherRequest { code, subtotal })
            .await?;

        into_outcome(response)
    }

    /// Lists the voucher catalog (admin).
    pub async fn list(&self) -> ClientResult<Vec<Voucher>> {
        self.client.get("/vouchers").await
    }
}

/// Maps the wire response onto the typed outcome.
fn into_outcome(response: ValidateVoucherResponse) -> ClientResult<AppliedVoucher> {
    if !response.valid {
        warn!(message = %response.message, "Voucher rejected by API");
        return Err(ClientError::VoucherRejected {
            message: response.message,
        });
    }

    let voucher = response.voucher.ok_or_else(|| {
        ClientError::Serialization("valid voucher response missing voucher record".to_string())
    })?;

    if voucher.is_exhausted() {
        return Err(ClientError::Domain(CoreError::VoucherExhausted));
    }

    Ok(AppliedVoucher {
        discount_amount: response.discount_amount,
        free_shipping: response.free_shipping,
        message: response.message,
        voucher,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
