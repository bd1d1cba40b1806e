//! @ai:module:intent OAuth 1.0a HMAC-SHA1 request signing for the Twitter API
//! @ai:module:layer infrastructure
//! @ai:module:public_api OAuthCredentials, OAuthSigner
//! @ai:module:stateless true

use anyhow::{anyhow, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha1::Sha1;

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";
const NONCE_LEN: usize = 32;

/// @ai:intent The four user-context credentials issued for a Twitter app
#[derive(Debug, Clone)]
pub struct OAuthCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_secret: String,
}

/// @ai:intent Produces `Authorization` header values for signed requests
#[derive(Debug, Clone)]
pub struct OAuthSigner {
    credentials: OAuthCredentials,
}

impl OAuthSigner {
    /// @ai:intent Create a signer
    /// @ai:pre all credentials are non-empty
    /// @ai:effects pure
    pub fn new(credentials: OAuthCredentials) -> Self {
        Self { credentials }
    }

    /// @ai:intent Build an Authorization header with a fresh nonce and timestamp
    /// @ai:effects random, time
    pub fn authorization_header(
        &self,
        method: &str,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<String> {
        let nonce: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(NONCE_LEN)
            .map(char::from)
            .collect();
        let timestamp = chrono::Utc::now().timestamp();

        self.authorization_header_with(method, url, params, &nonce, timestamp)
    }

    /// @ai:intent Build an Authorization header for a fixed nonce and timestamp
    /// @ai:effects pure
    pub fn authorization_header_with(
        &self,
        method: &str,
        url: &str,
        params: &[(&str, String)],
        nonce: &str,
        timestamp: i64,
    ) -> Result<String> {
        let mut oauth_params = self.oauth_params(nonce, timestamp);
        let signature = self.sign(method, url, params, &oauth_params)?;
        oauth_params.push(("oauth_signature", signature));

        let fields = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!("OAuth {}", fields))
    }

    fn oauth_params(&self, nonce: &str, timestamp: i64) -> Vec<(&'static str, String)> {
        vec![
            ("oauth_consumer_key", self.credentials.consumer_key.clone()),
            ("oauth_nonce", nonce.to_string()),
            ("oauth_signature_method", SIGNATURE_METHOD.to_string()),
            ("oauth_timestamp", timestamp.to_string()),
            ("oauth_token", self.credentials.access_token.clone()),
            ("oauth_version", OAUTH_VERSION.to_string()),
        ]
    }

    /// @ai:intent Compute the base64 HMAC-SHA1 signature of a request
    /// @ai:effects pure
    fn sign(
        &self,
        method: &str,
        url: &str,
        params: &[(&str, String)],
        oauth_params: &[(&'static str, String)],
    ) -> Result<String> {
        let base = signature_base_string(method, url, params.iter().chain(oauth_params));
        let key = format!(
            "{}&{}",
            encode(&self.credentials.consumer_secret),
            encode(&self.credentials.access_secret)
        );

        let mut mac = Hmac::<Sha1>::new_from_slice(key.as_bytes())
            .map_err(|e| anyhow!("HMAC error: {}", e))?;
        mac.update(base.as_bytes());

        Ok(STANDARD.encode(mac.finalize().into_bytes()))
    }
}

/// RFC 3986 encoding: everything but `A-Z a-z 0-9 - . _ ~` is escaped.
fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn signature_base_string<'a, I>(method: &str, url: &str, params: I) -> String
where
    I: Iterator<Item = &'a (&'a str, String)>,
{
    let mut encoded: Vec<(String, String)> = params.map(|(k, v)| (encode(k), encode(v))).collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        encode(url),
        encode(&param_string)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // Values from Twitter's "Creating a signature" developer guide.
    const NONCE: &str = "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg";
    const TIMESTAMP: i64 = 1318622958;
    const URL: &str = "https://api.twitter.com/1.1/statuses/update.json";

    fn signer() -> OAuthSigner {
        OAuthSigner::new(OAuthCredentials {
            consumer_key: "xvz1evFS4wEEPTGEFPHBog".to_string(),
            consumer_secret: "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw".to_string(),
            access_token: "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb".to_string(),
            access_secret: "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE".to_string(),
        })
    }

    fn request_params() -> Vec<(&'static str, String)> {
        vec![
            ("status", "Hello Ladies + Gentlemen, a signed OAuth request!".to_string()),
            ("include_entities", "true".to_string()),
        ]
    }

    #[test]
    fn test_encode_reserved_characters() {
        assert_eq!(encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
        assert_eq!(encode("a-b.c_d~e"), "a-b.c_d~e");
        assert_eq!(encode("!"), "%21");
    }

    #[test]
    fn test_signature_base_string_matches_reference() {
        let s = signer();
        let oauth = s.oauth_params(NONCE, TIMESTAMP);
        let params = request_params();
        let base = signature_base_string("post", URL, params.iter().chain(&oauth));

        assert_eq!(
            base,
            "POST&https%3A%2F%2Fapi.twitter.com%2F1.1%2Fstatuses%2Fupdate.json&\
             include_entities%3Dtrue%26oauth_consumer_key%3Dxvz1evFS4wEEPTGEFPHBog%26\
             oauth_nonce%3DkYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg%26\
             oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1318622958%26\
             oauth_token%3D370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb%26\
             oauth_version%3D1.0%26status%3DHello%2520Ladies%2520%252B%2520Gentlemen\
             %252C%2520a%2520signed%2520OAuth%2520request%2521"
        );
    }

    #[test]
    fn test_signature_matches_reference() {
        let s = signer();
        let oauth = s.oauth_params(NONCE, TIMESTAMP);
        let signature = s.sign("POST", URL, &request_params(), &oauth).unwrap();

        assert_eq!(signature, "hCtSmYh+iHYCEqBWrE7C7hYmtUk=");
    }

    #[test]
    fn test_header_carries_encoded_signature() {
        let header = signer()
            .authorization_header_with("POST", URL, &request_params(), NONCE, TIMESTAMP)
            .unwrap();

        assert!(header.starts_with("OAuth oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\""));
        assert!(header.contains("oauth_signature=\"hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D\""));
        assert!(header.contains("oauth_signature_method=\"HMAC-SHA1\""));
    }

    #[test]
    fn test_fresh_nonce_per_header() {
        let s = signer();
        let a = s.authorization_header("GET", URL, &[]).unwrap();
        let b = s.authorization_header("GET", URL, &[]).unwrap();
        assert_ne!(a, b);
    }
}
