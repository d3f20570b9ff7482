//! NFT records as returned by the Alchemy v2 NFT API.
//!
//! Only the fields the gallery consumes are modelled. Every field tolerates
//! being absent, `null` or of the wrong type, so any JSON object decodes into
//! a record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Decodes `T`, falling back to its default when the value is `null` or has
/// an unexpected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Text field; numbers and booleans are stringified, anything else is empty.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Attribute list. Anything but an array means no attributes; array elements
/// that are not attribute objects are dropped.
fn lenient_attributes<'de, D>(deserializer: D) -> Result<Option<Vec<NftAttribute>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

/// Token identity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftId {
    #[serde(default, deserialize_with = "lenient_text")]
    pub token_id: String,
}

/// One media entry; `gateway` is an HTTP(S) URL for the image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NftMedia {
    #[serde(default, deserialize_with = "lenient_text")]
    pub gateway: String,
}

/// A `{trait_type, value}` pair from the token metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NftAttribute {
    #[serde(default, deserialize_with = "lenient_text")]
    pub trait_type: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

impl NftAttribute {
    /// Value as shown to a user: strings unquoted, `null` empty.
    pub fn display_value(&self) -> String {
        match &self.value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NftMetadata {
    /// `None` when the token metadata carries no attributes at all.
    #[serde(default, deserialize_with = "lenient_attributes", skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<NftAttribute>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractRef {
    #[serde(default, deserialize_with = "lenient_text")]
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSeaMetadata {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub floor_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractMetadata {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub open_sea: OpenSeaMetadata,
}

/// NFT record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nft {
    #[serde(default, deserialize_with = "lenient")]
    pub id: NftId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient")]
    pub media: Vec<NftMedia>,
    #[serde(default, deserialize_with = "lenient")]
    pub metadata: NftMetadata,
    #[serde(default, deserialize_with = "lenient")]
    pub contract: ContractRef,
    #[serde(default, deserialize_with = "lenient")]
    pub contract_metadata: ContractMetadata,
}

impl Nft {
    /// Collection floor price; absent counts as zero.
    pub fn floor_price(&self) -> f64 {
        self.contract_metadata.open_sea.floor_price.unwrap_or(0.0)
    }

    /// Gateway URL of the first media entry, if any.
    pub fn image_url(&self) -> Option<&str> {
        self.media
            .first()
            .map(|m| m.gateway.as_str())
            .filter(|url| !url.is_empty())
    }

    pub fn attributes(&self) -> Option<&[NftAttribute]> {
        self.metadata.attributes.as_deref()
    }
}

/// One page of a collection listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPage {
    pub nfts: Vec<Nft>,
    /// Token for the following page; `nextPageKey` is accepted too.
    #[serde(default, alias = "nextPageKey", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Query string for the collection JSON endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionQuery {
    #[serde(default)]
    pub page_key: Option<String>,
}
