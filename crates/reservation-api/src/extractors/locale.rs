//! Locale extractor
//!
//! Picks the response language from `?lang=` or `Accept-Language`.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{header, request::Parts, HeaderMap, Uri},
};
use reservation_common::Locale;
use serde::Deserialize;

/// Raw language query parameter
#[derive(Debug, Deserialize)]
struct LangParams {
    #[serde(default)]
    lang: Option<String>,
}

/// Language negotiated for the current request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestLocale(pub Locale);

impl RequestLocale {
    /// Negotiate from request parts. An explicit `?lang=` wins over the
    /// header; anything unsupported falls back to the default locale.
    pub fn negotiate(uri: &Uri, headers: &HeaderMap) -> Locale {
        let from_query = Query::<LangParams>::try_from_uri(uri)
            .ok()
            .and_then(|Query(params)| params.lang)
            .and_then(|lang| Locale::parse(&lang));

        from_query
            .or_else(|| {
                headers
                    .get(header::ACCEPT_LANGUAGE)
                    .and_then(|v| v.to_str().ok())
                    .and_then(Locale::from_accept_language)
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestLocale
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(Self::negotiate(&parts.uri, &parts.headers)))
    }
}
