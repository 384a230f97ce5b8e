//! Shareable image links
//!
//! Species photos are referenced by links copied from a cloud drive. Only the
//! bare file id is stored; display URLs are rebuilt from it.

use once_cell::sync::Lazy;
use regex::Regex;

/// Default width requested from the thumbnail endpoint
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 1000;

const DRIVE_HOST: &str = "drive.google.com";

static FILE_PATH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/file/d/([a-zA-Z0-9_-]+)").unwrap());

static ID_PARAM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[?&]id=([a-zA-Z0-9_-]+)").unwrap());

static UC_PATH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/uc\?id=([a-zA-Z0-9_-]+)").unwrap());

/// Extract the file id from a shareable link, or `None` if no known link
/// shape matches
pub fn extract_drive_id(link: &str) -> Option<String> {
    let link = link.trim();
    if link.is_empty() {
        return None;
    }

    // First pattern with a non-empty capture wins
    [&*FILE_PATH_PATTERN, &*ID_PARAM_PATTERN, &*UC_PATH_PATTERN]
        .into_iter()
        .find_map(|pattern| {
            pattern
                .captures(link)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
                .filter(|id| !id.is_empty())
                .map(str::to_string)
        })
}

/// True for drive links that carry an extractable id
pub fn is_drive_link(url: &str) -> bool {
    url.contains(DRIVE_HOST) && extract_drive_id(url).is_some()
}

pub fn thumbnail_url(id: &str, width: u32) -> String {
    format!("https://{}/thumbnail?id={}&sz=w{}", DRIVE_HOST, id, width)
}

pub fn preview_url(id: &str) -> String {
    format!("https://{}/file/d/{}/preview", DRIVE_HOST, id)
}

pub fn direct_download_url(id: &str) -> String {
    format!("https://{}/uc?export=download&id={}", DRIVE_HOST, id)
}
