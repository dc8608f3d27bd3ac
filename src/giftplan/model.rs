use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub type GiftId = u32;

/// Quality rank of a gift: `1`..`5` or the special `EX` label.
///
/// Plans written by different tool versions store the tier either as a JSON
/// number or as a string (with `EX` in either case), so the raw label is kept
/// as-is and comparisons go through [`Tier::canonical`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tier(String);

impl Tier {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Upper-cased label, so `ex` and `EX` compare equal.
    pub fn canonical(&self) -> String {
        self.0.to_uppercase()
    }

    pub fn is_ex(&self) -> bool {
        self.canonical() == "EX"
    }

    pub fn numeral(&self) -> &str {
        match self.0.as_str() {
            "1" => "I",
            "2" => "II",
            "3" => "III",
            "4" => "IV",
            "5" => "V",
            _ if self.is_ex() => "EX",
            other => other,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTier {
    Number(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for Tier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawTier::deserialize(deserializer)? {
            RawTier::Number(n) => Tier(n.to_string()),
            RawTier::Text(s) => Tier(s),
        })
    }
}

impl Serialize for Tier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A catalog entry the user can mark acquired.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Gift {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<GiftId>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub keywords: Vec<String>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub ingredients: Vec<GiftId>,
}

impl Gift {
    pub fn new(id: GiftId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = Some(Tier::new(tier));
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_ingredients(mut self, ingredients: Vec<GiftId>) -> Self {
        self.ingredients = ingredients;
        self
    }

    /// The primary keyword, falling back to the first legacy tag.
    pub fn primary_keyword(&self) -> Option<&str> {
        self.keyword
            .as_deref()
            .filter(|k| !k.is_empty())
            .or_else(|| self.tags.first().map(String::as_str))
            .filter(|k| !k.is_empty())
    }

    /// Primary keyword followed by the auxiliary keywords.
    pub fn keywords(&self) -> Vec<&str> {
        self.primary_keyword()
            .into_iter()
            .chain(self.keywords.iter().map(String::as_str))
            .filter(|k| !k.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Floor {
    #[serde(deserialize_with = "null_as_default")]
    pub number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pack_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pack_image: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub gifts: Vec<Gift>,
    #[serde(deserialize_with = "null_as_default")]
    pub synthesis_gifts: Vec<Gift>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// One row of the acquisition order. Each priority group is a set of gifts
/// that can be picked up in parallel before moving to the next group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcquisitionStep {
    #[serde(deserialize_with = "null_as_default")]
    pub priorities: Vec<Vec<Gift>>,
}

/// The plan document as it arrives from the planner, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub floor_targets: Vec<Floor>,
    #[serde(deserialize_with = "null_as_default")]
    pub starting_gifts: Vec<Gift>,
    #[serde(deserialize_with = "null_as_default")]
    pub general_gifts: Vec<Gift>,
    #[serde(deserialize_with = "null_as_default")]
    pub all_gifts: Vec<Gift>,
    #[serde(deserialize_with = "null_as_default")]
    pub synthesis_ids: Vec<GiftId>,
    #[serde(deserialize_with = "null_as_default")]
    pub acquisition_order: Vec<AcquisitionStep>,
}
