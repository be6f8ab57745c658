//! Challan collection operations.
//!
//! Every function is one request/response round trip; none mutates local
//! state. Callers reload the list to reflect server truth. The one
//! fan-out, [`bulk_delete`], issues its deletes concurrently and collects
//! every outcome — all-settled, not fail-fast.

use futures_util::future::join_all;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Challan, ChallanDraft, ChallanListBody, DashboardStats, OtpMessage};

/// Fetch the full collection. Tolerates the bare-array and wrapped
/// response shapes; a non-JSON body surfaces as [`ApiError::Gateway`].
pub async fn list(client: &ApiClient) -> Result<Vec<Challan>, ApiError> {
    let body: ChallanListBody = client.get_json("/challans").await?;
    Ok(body.into_vec())
}

pub async fn get(client: &ApiClient, challan_no: &str) -> Result<Challan, ApiError> {
    client.get_json(&format!("/challan/{challan_no}")).await
}

/// Tenant-wide counts for the dashboard.
pub async fn dashboard(client: &ApiClient) -> Result<DashboardStats, ApiError> {
    client.get_json("/dashboard").await
}

/// An image attached to a create/update submission.
#[derive(Clone, Debug)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// The whole draft goes into one JSON-encoded `data` field; each image is
/// an `images` part of the same multipart request.
fn submission_form(
    draft: &ChallanDraft,
    images: Vec<ImageUpload>,
) -> Result<reqwest::multipart::Form, ApiError> {
    let data = serde_json::to_string(draft).map_err(|err| ApiError::Decode(err.to_string()))?;
    let mut form = reqwest::multipart::Form::new().text("data", data);
    for image in images {
        form = form.part(
            "images",
            reqwest::multipart::Part::bytes(image.bytes).file_name(image.file_name),
        );
    }
    Ok(form)
}

pub async fn create(
    client: &ApiClient,
    draft: &ChallanDraft,
    images: Vec<ImageUpload>,
) -> Result<(), ApiError> {
    client
        .post_multipart_unit("/challan", submission_form(draft, images)?)
        .await
}

pub async fn update(
    client: &ApiClient,
    challan_no: &str,
    draft: &ChallanDraft,
    images: Vec<ImageUpload>,
) -> Result<(), ApiError> {
    client
        .put_multipart_unit(
            &format!("/challan/{challan_no}"),
            submission_form(draft, images)?,
        )
        .await
}

pub async fn delete(client: &ApiClient, challan_no: &str) -> Result<(), ApiError> {
    client.delete(&format!("/challan/{challan_no}")).await
}

pub async fn send_otp(client: &ApiClient, challan_no: &str) -> Result<OtpMessage, ApiError> {
    client
        .post_empty(&format!("/challan/{challan_no}/send_otp"))
        .await
}

pub async fn verify_otp(
    client: &ApiClient,
    challan_no: &str,
    otp: &str,
) -> Result<OtpMessage, ApiError> {
    client
        .post_json(
            &format!("/challan/{challan_no}/verify_otp"),
            &serde_json::json!({ "otp": otp }),
        )
        .await
}

/// Bodiless PUT asking the backend to re-send the stored PDF to the
/// customer. Deliberately distinct from [`update`], which PUTs a
/// multipart payload to the same path.
pub async fn resend_pdf(client: &ApiClient, challan_no: &str) -> Result<(), ApiError> {
    client.put_empty(&format!("/challan/{challan_no}")).await
}

/// Outcome of a concurrent bulk delete.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BulkDeleteOutcome {
    pub requested: usize,
    /// Identities whose delete call failed, in request order.
    pub failed: Vec<String>,
}

impl BulkDeleteOutcome {
    pub fn succeeded(&self) -> usize {
        self.requested - self.failed.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    /// User-facing summary, naming the identities that failed.
    pub fn summary(&self) -> String {
        if self.failed.is_empty() {
            format!("Deleted {} challan(s) successfully.", self.requested)
        } else {
            format!(
                "Deleted {} challan(s). Failed: {}",
                self.succeeded(),
                self.failed.join(", ")
            )
        }
    }
}

/// Delete every selected challan concurrently. Individual failures do not
/// abort the rest; the caller reloads the list afterwards regardless of
/// partial failure. Nothing is retried.
pub async fn bulk_delete(client: &ApiClient, challan_nos: Vec<String>) -> BulkDeleteOutcome {
    let results = join_all(challan_nos.iter().map(|no| delete(client, no))).await;
    settle(challan_nos, results)
}

fn settle(challan_nos: Vec<String>, results: Vec<Result<(), ApiError>>) -> BulkDeleteOutcome {
    let requested = challan_nos.len();
    let failed = challan_nos
        .into_iter()
        .zip(results)
        .filter_map(|(no, result)| match result {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!("delete {no} failed: {err}");
                Some(no)
            }
        })
        .collect();
    BulkDeleteOutcome { requested, failed }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn settle_reports_partial_failure() {
        let outcome = settle(
            ids(&["CH-1", "CH-2", "CH-3"]),
            vec![
                Ok(()),
                Err(ApiError::Status {
                    code: 500,
                    message: "boom".to_string(),
                }),
                Ok(()),
            ],
        );
        assert_eq!(outcome.requested, 3);
        assert_eq!(outcome.succeeded(), 2);
        assert_eq!(outcome.failed, ids(&["CH-2"]));
        assert_eq!(outcome.summary(), "Deleted 2 challan(s). Failed: CH-2");
    }

    #[test]
    fn settle_reports_full_success() {
        let outcome = settle(ids(&["CH-1", "CH-2"]), vec![Ok(()), Ok(())]);
        assert!(outcome.all_succeeded());
        assert_eq!(outcome.summary(), "Deleted 2 challan(s) successfully.");
    }

    #[tokio::test]
    async fn all_settled_collects_every_outcome() {
        // Stub futures standing in for delete calls: the failure in the
        // middle must not stop later outcomes from being collected.
        let calls = ids(&["CH-1", "CH-2", "CH-3"]);
        let results = join_all(calls.iter().map(|no| {
            let fail = no == "CH-2";
            async move {
                if fail {
                    Err(ApiError::Network("connection reset".to_string()))
                } else {
                    Ok(())
                }
            }
        }))
        .await;
        let outcome = settle(calls, results);
        assert_eq!(outcome.failed, ids(&["CH-2"]));
        assert_eq!(outcome.succeeded(), 2);
    }
}
