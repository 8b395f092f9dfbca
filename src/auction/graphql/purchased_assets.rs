use anyhow::Context;

use super::queries::PURCHASED_ASSETS_QUERY;
use super::types::{GraphqlResponse, QueryResponse};
use crate::auction::Client;

/// Sends the fixed purchased-assets query for one auction code and
/// returns the decoded envelope, errors included.
pub(crate) async fn query_purchased_assets(
    client: &Client,
    auction_code: &str,
) -> anyhow::Result<GraphqlResponse<QueryResponse>> {
    let payload = serde_json::json!({
        "query": PURCHASED_ASSETS_QUERY,
        "variables": { "auctionCode": auction_code },
    });

    let response = client
        .http()
        .post(client.endpoint())
        .json(&payload)
        .send()
        .await
        .context("GraphQL request failed")?
        .error_for_status()
        .context("GraphQL endpoint returned an error status")?;

    response
        .json::<GraphqlResponse<QueryResponse>>()
        .await
        .context("failed to decode GraphQL response")
}
