// Hands URLs (trailers) to the desktop's default handler, i.e. a new browser tab.

use std::path::PathBuf;
use std::process::Stdio;

use anyhow::bail;
use tokio::process::Command;

#[cfg(target_os = "macos")]
const OPENERS: &[&str] = &["open"];
#[cfg(target_os = "windows")]
const OPENERS: &[&str] = &["explorer"];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENERS: &[&str] = &["xdg-open", "wslview"];

/// First URL opener found on `PATH`.
pub fn find_opener() -> Option<PathBuf> {
    OPENERS.iter().find_map(|name| which::which(name).ok())
}

/// Only web URLs are handed to the opener.
pub fn is_web_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

pub async fn open_url(url: &str) -> anyhow::Result<()> {
    if !is_web_url(url) {
        bail!("refusing to open non-web URL: {}", url);
    }
    let Some(opener) = find_opener() else {
        bail!("no URL opener found (tried {})", OPENERS.join(", "));
    };

    tracing::info!(url, opener = %opener.display(), "opening URL");
    let mut child = Command::new(&opener)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // Reap the opener once it hands off to the browser.
    tokio::spawn(async move {
        let _ = child.wait().await;
    });
    Ok(())
}
