mod purchased_assets;
mod queries;
mod types;

pub use types::{
    AmsDetails, Asset, Assets, Auction, AuctionDetails, GraphqlError, GraphqlResponse,
    PurchasedAssets, QueryResponse,
};

pub(crate) use purchased_assets::query_purchased_assets;
