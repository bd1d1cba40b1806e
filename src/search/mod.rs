//! @ai:module:intent Tweet search over the Twitter API
//! @ai:module:layer infrastructure
//! @ai:module:public_api SearchClientTrait, TwitterClient, MockSearchClient, PostLike, extract_text

pub mod client;
pub mod oauth;
pub mod status;

pub use client::{MockSearchClient, SearchClientTrait, TwitterClient};
pub use oauth::{OAuthCredentials, OAuthSigner};
pub use status::{extract_text, PostLike, SearchResponse, Status};
