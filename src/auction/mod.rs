mod auth;
mod client;
mod graphql;

pub use auth::{AuthOutcome, initiate_user_password_auth};
pub use client::Client;
pub use graphql::{GraphqlResponse, QueryResponse};
pub(crate) use graphql::query_purchased_assets;

pub(crate) mod prelude {
    pub use super::AuthOutcome;
    pub use super::Client;
    pub(crate) use super::initiate_user_password_auth;
    pub(crate) use super::query_purchased_assets;
}
