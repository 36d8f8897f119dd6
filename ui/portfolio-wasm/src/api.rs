//! HTTP client.
//!
//! Wraps `gloo-net` for the three outbound calls the page makes: GitHub
//! repository listing, spreadsheet values, and the contact relay POST.
//! No timeouts or retries; a hung request leaves its loading placeholder.

use gloo_net::http::Request;
use pf_content::Error;

fn network(err: gloo_net::Error) -> Error {
    Error::Network(err.to_string())
}

/// GET `url` and return the body, failing on any non-2xx status.
pub async fn get_text(url: &str) -> Result<String, Error> {
    let resp = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(network)?;

    if !resp.ok() {
        return Err(Error::Http {
            status: resp.status(),
        });
    }

    resp.text().await.map_err(|e| Error::Decode(e.to_string()))
}

/// POST a JSON body and return the response status.
pub async fn post_json(url: &str, body: &serde_json::Value) -> Result<u16, Error> {
    let resp = Request::post(url)
        .header("Accept", "application/json")
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;

    Ok(resp.status())
}
