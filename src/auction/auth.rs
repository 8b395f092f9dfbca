use anyhow::Context;
use aws_config::BehaviorVersion;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_cognitoidentityprovider::types::AuthFlowType;
use colored::Colorize;

/// What the identity provider answered to a USER_PASSWORD_AUTH attempt.
///
/// A challenge is a plain outcome, not an error; the caller decides
/// whether it is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated { access_token: String },
    ChallengeRequired { challenge: String },
}

/// Exchanges a username/password pair for a bearer access token via
/// Cognito's InitiateAuth call.
///
/// The Cognito endpoint itself is reached anonymously; only the end
/// user is being authenticated here.
pub async fn initiate_user_password_auth(
    client_id: &str,
    username: &str,
    password: &str,
) -> anyhow::Result<AuthOutcome> {
    let region = RegionProviderChain::default_provider().or_else("us-east-1");
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region)
        .no_credentials()
        .load()
        .await;
    let cognito = aws_sdk_cognitoidentityprovider::Client::new(&aws_config);

    let response = cognito
        .initiate_auth()
        .auth_flow(AuthFlowType::UserPasswordAuth)
        .client_id(client_id)
        .auth_parameters("USERNAME", username)
        .auth_parameters("PASSWORD", password)
        .send()
        .await
        .context("InitiateAuth request failed")?;

    let outcome = classify_auth_response(
        response
            .authentication_result()
            .and_then(|result| result.access_token()),
        response.challenge_name().map(|name| name.as_str()),
    )?;

    if let AuthOutcome::Authenticated { .. } = outcome {
        println!(
            "{}",
            "Authentication successful for USER_PASSWORD_AUTH".green()
        );
    }

    Ok(outcome)
}

fn classify_auth_response(
    access_token: Option<&str>,
    challenge_name: Option<&str>,
) -> anyhow::Result<AuthOutcome> {
    match (access_token, challenge_name) {
        (Some(token), _) if !token.is_empty() => Ok(AuthOutcome::Authenticated {
            access_token: token.to_string(),
        }),
        (_, Some(challenge)) => Ok(AuthOutcome::ChallengeRequired {
            challenge: challenge.to_string(),
        }),
        _ => anyhow::bail!("authentication response carried neither an access token nor a challenge"),
    }
}
