//! One-shot status messages carried across a redirect in a short-lived cookie.

use axum::{
    http::{
        HeaderMap,
        header::{COOKIE, SET_COOKIE},
    },
    response::{IntoResponse, Redirect, Response},
};

const FLASH_COOKIE: &str = "flash";
const FLASH_MAX_AGE_SECS: u32 = 6;

/// Redirects to `location`, leaving `message` for the next page to show.
pub fn redirect_with(location: &str, message: &str) -> Response {
    let cookie = format!(
        "{FLASH_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={FLASH_MAX_AGE_SECS}",
        urlencoding::encode(message)
    );

    ([(SET_COOKIE, cookie)], Redirect::to(location)).into_response()
}

/// Reads the pending message, if any, from the request cookies.
pub fn read(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == FLASH_COOKIE)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|message| message.into_owned())
        .filter(|message| !message.is_empty())
}

/// Expires the cookie so the message is shown once.
pub fn consumed(response: impl IntoResponse) -> Response {
    let cookie = format!("{FLASH_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    ([(SET_COOKIE, cookie)], response).into_response()
}
