use serde::{Deserialize, Serialize};

/// Root of the purchased-assets response graph.
///
/// Every nested object defaults to an empty instance and tolerates an
/// explicit JSON `null`, so walking the graph never faults on absent
/// server data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryResponse {
    #[serde(deserialize_with = "null_default")]
    pub auction: Auction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Auction {
    #[serde(deserialize_with = "null_default")]
    pub details: AuctionDetails,
    #[serde(deserialize_with = "null_default")]
    pub assets: Assets,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuctionDetails {
    #[serde(deserialize_with = "null_default")]
    pub ams: AmsDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AmsDetails {
    #[serde(deserialize_with = "null_default")]
    pub site_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Assets {
    #[serde(deserialize_with = "null_default")]
    pub purchased: PurchasedAssets,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PurchasedAssets {
    #[serde(deserialize_with = "null_default")]
    pub items: Vec<Asset>,
}

/// The remote schema models `year` as a string; keep it that way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Asset {
    #[serde(deserialize_with = "null_default")]
    pub vin: String,
    #[serde(deserialize_with = "null_default")]
    pub year: String,
    #[serde(deserialize_with = "null_default")]
    pub make: String,
    #[serde(deserialize_with = "null_default")]
    pub model: String,
}

/// GraphQL response envelope: `data` plus an optional `errors` list.
/// A non-empty list means the query failed at the GraphQL layer even
/// though the HTTP call succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphqlError>>,
}

impl<T> GraphqlResponse<T> {
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
