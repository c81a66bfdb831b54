//! Credential cookie construction and parsing.
//!
//! Both tokens are delivered as cookies in addition to the JSON body:
//! HttpOnly, Secure, SameSite=None so a browser frontend on another origin
//! can carry them. Plain header strings -- no cookie crate is needed for
//! two fixed cookies.

/// Cookie name for the short-lived access token.
pub const ACCESS_COOKIE: &str = "accessToken";

/// Cookie name for the long-lived refresh token.
pub const REFRESH_COOKIE: &str = "refreshToken";

/// Build a `Set-Cookie` value for a credential cookie.
pub fn credential_cookie(name: &str, value: &str, max_age_secs: i64) -> String {
    format!("{name}={value}; Path=/; Max-Age={max_age_secs}; HttpOnly; Secure; SameSite=None")
}

/// Build a `Set-Cookie` value that expires a credential cookie.
pub fn clearing_cookie(name: &str) -> String {
    format!("{name}=; Path=/; Max-Age=0; HttpOnly; Secure; SameSite=None")
}

/// Extract a cookie's value from a raw `Cookie` request header.
pub fn cookie_value<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}
