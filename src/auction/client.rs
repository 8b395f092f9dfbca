use anyhow::Context;
use reqwest::header;

/// GraphQL-over-HTTP client scoped to one API host and one bearer token.
pub struct Client {
    http: reqwest::Client,
    endpoint: String,
}

impl Client {
    pub fn new(api_host: &str, access_token: &str) -> anyhow::Result<Self> {
        Self::with_endpoint(graphql_endpoint(api_host), access_token)
    }

    pub(crate) fn with_endpoint(endpoint: String, access_token: &str) -> anyhow::Result<Self> {
        let mut auth_value = header::HeaderValue::from_str(&format!("Bearer {access_token}"))
            .context("access token is not a valid header value")?;
        auth_value.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth_value);

        // The Authorization header rides on every request made through
        // this instance, never on a shared global client.
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { http, endpoint })
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn graphql_endpoint(api_host: &str) -> String {
    format!("https://{api_host}/graphql")
}
