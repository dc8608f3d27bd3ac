//! Image locations for gifts, packs and keyword icons on the planner site.

use once_cell::sync::Lazy;
use std::collections::HashSet;

pub const DEFAULT_IMAGE_BASE_URL: &str = "https://limbusgiftplanner.pages.dev/";

/// The catch-all keyword; it has no icon.
pub const GENERIC_KEYWORD: &str = "범용";

static STATUS_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["화상", "출혈", "진동", "파열", "침잠", "호흡", "충전"]
        .into_iter()
        .collect()
});

static ATTACK_KEYWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["참격", "관통", "타격"].into_iter().collect());

/// Percent-encodes each segment of `path`, keeping the separators.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

pub struct AssetUrls {
    base: String,
}

impl AssetUrls {
    pub fn new(base: &str) -> Self {
        let base = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{}/", base)
        };
        Self { base }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, encode_path(path))
    }

    pub fn gift_image(&self, image: &str) -> Option<String> {
        (!image.is_empty()).then(|| self.url(&format!("에고기프트/{}", image)))
    }

    pub fn pack_image(&self, image: &str) -> Option<String> {
        (!image.is_empty()).then(|| self.url(&format!("테마팩/{}", image)))
    }

    pub fn keyword_icon(&self, keyword: &str) -> Option<String> {
        if keyword.is_empty() || keyword == GENERIC_KEYWORD {
            return None;
        }
        if STATUS_KEYWORDS.contains(keyword) {
            Some(self.url(&format!("기타/기믹_{}.webp", keyword)))
        } else if ATTACK_KEYWORDS.contains(keyword) {
            Some(self.url(&format!("기타/공격유형_{}.webp", keyword)))
        } else {
            None
        }
    }
}

impl Default for AssetUrls {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_URL)
    }
}
