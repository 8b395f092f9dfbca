pub(crate) const PURCHASED_ASSETS_QUERY: &str = include_str!("queries/purchased_assets.graphql");
