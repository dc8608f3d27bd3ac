//! # Plan Transports
//!
//! The planner hands plans over in a few shapes. All of them end up as the
//! same [`PlanDocument`]:
//!
//! - clipboard payload: `LIMBUS_PLAN:` followed by base64 of UTF-8 JSON
//! - protocol URL: `limbus-planner://open?plan=<base64>`
//! - plain JSON text

use crate::error::{GiftPlanError, Result};
use crate::model::PlanDocument;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use url::Url;

pub const CLIPBOARD_PREFIX: &str = "LIMBUS_PLAN:";
pub const PROTOCOL_SCHEME: &str = "limbus-planner";

/// Where a decoded plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    Clipboard,
    ProtocolUrl,
    Json,
}

pub fn decode_plan_text(text: &str) -> Result<(PlanDocument, PlanSource)> {
    let text = text.trim();
    if let Some(payload) = text.strip_prefix(CLIPBOARD_PREFIX) {
        return Ok((decode_base64_plan(payload)?, PlanSource::Clipboard));
    }
    if text.starts_with(&format!("{}://", PROTOCOL_SCHEME)) {
        return Ok((decode_protocol_url(text)?, PlanSource::ProtocolUrl));
    }
    Ok((parse_plan_json(text)?, PlanSource::Json))
}

pub fn parse_plan_json(json: &str) -> Result<PlanDocument> {
    let doc = serde_json::from_str(json).map_err(GiftPlanError::Serialization)?;
    Ok(doc)
}

pub fn decode_base64_plan(payload: &str) -> Result<PlanDocument> {
    let cleaned: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(cleaned)?;
    let json = String::from_utf8(bytes)?;
    parse_plan_json(&json)
}

// The `plan` value is taken from the raw query: form decoding would turn the
// base64 `+` into a space.
pub fn decode_protocol_url(raw: &str) -> Result<PlanDocument> {
    let url = Url::parse(raw).map_err(|e| GiftPlanError::Decode(format!("invalid URL: {}", e)))?;
    if url.scheme() != PROTOCOL_SCHEME {
        return Err(GiftPlanError::Decode(format!(
            "unexpected URL scheme: {}",
            url.scheme()
        )));
    }
    let payload = url
        .query()
        .into_iter()
        .flat_map(|q| q.split('&'))
        .find_map(|pair| pair.strip_prefix("plan="))
        .filter(|v| !v.is_empty())
        .ok_or_else(|| GiftPlanError::Decode("URL has no plan parameter".to_string()))?;
    decode_base64_plan(payload)
}

/// Encodes a plan in the clipboard format.
pub fn encode_clipboard_payload(doc: &PlanDocument) -> Result<String> {
    let json = serde_json::to_string(doc).map_err(GiftPlanError::Serialization)?;
    Ok(format!("{}{}", CLIPBOARD_PREFIX, STANDARD.encode(json)))
}
