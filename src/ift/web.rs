//! Download of the latest numbering plan from the authority's web site.
//!
//! The download page is a JSF form; the ZIP comes back from posting the form
//! with its hidden view-state fields and the submit button name.

use crate::config;
use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;
use std::path::{Path, PathBuf};

lazy_static! {
    static ref FORM_RE: Regex =
        Regex::new(r#"(?s)<form[^>]*id="FORM_planes".*?</form>"#).expect("Invalid Regex");
    static ref ACTION_RE: Regex =
        Regex::new(r#"<form[^>]*action="([^"]*)""#).expect("Invalid Regex");
    static ref INPUT_RE: Regex =
        Regex::new(r#"<input[^>]*name="([^"]*)"[^>]*value="([^"]*)""#).expect("Invalid Regex");
    static ref BUTTON_RE: Regex =
        Regex::new(r#"<button[^>]*name="([^"]*)""#).expect("Invalid Regex");
    static ref FILENAME_RE: Regex =
        Regex::new(r#"filename="?([^";]+)"?"#).expect("Invalid Regex");
}

/// Download form scraped from the page: post target plus field values.
struct DownloadForm {
    action: String,
    fields: Vec<(String, String)>,
}

/// Pull the download form out of the page HTML.
fn parse_download_form(html: &str) -> Result<DownloadForm, Box<dyn Error>> {
    let form = FORM_RE
        .find(html)
        .ok_or("Download page carries no FORM_planes form")?
        .as_str();
    let action = ACTION_RE
        .captures(form)
        .ok_or("Download form has no action")?[1]
        .to_string();

    let mut fields: Vec<(String, String)> = INPUT_RE
        .captures_iter(form)
        .map(|c| (c[1].to_string(), c[2].to_string()))
        .collect();

    // the submit button is posted with an empty value
    let button = BUTTON_RE
        .captures(form)
        .ok_or("Download form has no submit button")?[1]
        .to_string();
    fields.push((button, String::new()));

    Ok(DownloadForm { action, fields })
}

/// File name from a Content-Disposition header.
fn attachment_file_name(content_disposition: &str) -> Option<String> {
    FILENAME_RE
        .captures(content_disposition)
        .map(|c| c[1].to_string())
}

/// Download the latest plan ZIP into `dir` and return its path.
pub async fn download_latest(dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    log::info!(
        "Accessing numbering plan information web site at {}",
        config::BASE_URL
    );

    // the site runs with a certificate chain the default store rejects
    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(true)
        .cookie_store(true)
        .build()?;

    let page = client
        .get(config::BASE_URL)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    let form = parse_download_form(&page)?;

    let action_url = reqwest::Url::parse(config::BASE_URL)?.join(&form.action)?;
    log::info!("Requesting ZIP from web site...");
    let response = client
        .post(action_url)
        .form(&form.fields)
        .send()
        .await?
        .error_for_status()?;

    let file_name = response
        .headers()
        .get(reqwest::header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .and_then(attachment_file_name)
        .ok_or("Download response carries no attachment file name")?;

    let path = dir.join(&file_name);
    let body = response.bytes().await?;
    std::fs::write(&path, &body)
        .map_err(|e| format!("Error writing {}: {e}", path.display()))?;
    log::info!("Saved {} ({} bytes)", path.display(), body.len());

    Ok(path)
}
