use crate::error::{PatchError, Result};
use lazy_static::lazy_static;
use plist::Dictionary;
use regex::Regex;
use std::fs;
use std::path::Path;

const XML_START: &[u8] = b"<?xml";
const PLIST_END: &[u8] = b"</plist>";

lazy_static! {
    // TEAMID is exactly 10 uppercase alphanumerics before the first dot.
    static ref TEAM_ID_RE: Regex = Regex::new(r"^[A-Z0-9]{10}\.(.+)$").unwrap();
}

/// Strip the leading team-identifier prefix from an application identifier.
///
/// `ABCDE12345.com.example.app` becomes `com.example.app`. Identifiers that
/// don't carry a team-id prefix are returned unchanged.
pub fn strip_team_id(app_identifier: &str) -> &str {
    match TEAM_ID_RE.captures(app_identifier) {
        Some(caps) => caps.get(1).map(|m| m.as_str()).unwrap_or(app_identifier),
        None => app_identifier,
    }
}

/// Locate the XML plist embedded in a mobileprovision blob and decode it.
///
/// A provisioning profile is a CMS-wrapped binary container; the plist inside
/// it is found by a raw marker search (`<?xml` through `</plist>`) rather than
/// by parsing the outer format. The end-marker search is independent of the
/// start marker, matching the behavior this tool replaces; an inverted or
/// empty region fails decoding.
pub fn locate_and_decode_plist(raw: &[u8]) -> Result<Dictionary> {
    let start = find(raw, XML_START)
        .ok_or_else(|| PatchError::MalformedProfile("no embedded plist found".to_string()))?;
    let end = find(raw, PLIST_END)
        .ok_or_else(|| PatchError::MalformedProfile("no embedded plist found".to_string()))?
        + PLIST_END.len();

    let region = raw.get(start..end).unwrap_or(&[]);
    plist::from_bytes(region)
        .map_err(|e| PatchError::MalformedProfile(format!("plist decode failed: {}", e)))
}

/// Read the `application-identifier` entitlement from a decoded profile plist
/// and strip its team-id prefix.
pub fn application_identifier(profile: &Dictionary) -> Result<String> {
    let entitlements = profile
        .get("Entitlements")
        .and_then(|v| v.as_dictionary());

    let app_id = entitlements
        .and_then(|e| e.get("application-identifier"))
        .and_then(|v| v.as_string())
        .filter(|s| !s.is_empty())
        .ok_or(PatchError::MissingIdentifier)?;

    Ok(strip_team_id(app_id).to_string())
}

/// Derive the bundle identifier from a .mobileprovision file on disk.
pub fn application_identifier_from_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let content = fs::read(path)?;
    let profile = locate_and_decode_plist(&content)?;
    application_identifier(&profile)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
