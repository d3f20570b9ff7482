use serde::{Deserialize, Serialize};

use crate::gallery::Gallery;

/// JSON error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Health check body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Submitted form fields.
///
/// Unchecked checkboxes are simply absent from a urlencoded body. A disabled
/// input is absent too, so a missing text field leaves the stored value alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormInput {
    pub wallet: Option<String>,
    pub collection: Option<String>,
    pub fetch_for_collection: Option<String>,
    pub filter_by_floor_price: Option<String>,
    pub page_key: Option<String>,
}

fn checked(value: &Option<String>) -> bool {
    matches!(value.as_deref(), Some(v) if !v.is_empty() && v != "off" && v != "false")
}

impl FormInput {
    pub fn apply(self, gallery: &mut Gallery) {
        if let Some(wallet) = self.wallet {
            gallery.set_wallet(wallet.trim());
        }
        if let Some(collection) = self.collection {
            gallery.set_collection(collection.trim());
        }
        gallery.set_fetch_for_collection(checked(&self.fetch_for_collection));
        gallery.set_filter_by_floor_price(checked(&self.filter_by_floor_price));
        gallery.set_page_key(self.page_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_text_field_keeps_value() {
        let mut gallery = Gallery::new();
        gallery.set_wallet("0xkept");

        FormInput {
            collection: Some(" 0xcol ".to_string()),
            fetch_for_collection: Some("on".to_string()),
            ..Default::default()
        }
        .apply(&mut gallery);

        assert_eq!(gallery.form().wallet, "0xkept");
        assert_eq!(gallery.form().collection, "0xcol");
        assert!(gallery.form().fetch_for_collection);
        assert!(!gallery.form().filter_by_floor_price);
        assert_eq!(gallery.form().page_key, None);
    }

    #[test]
    fn test_unchecked_boxes_turn_toggles_off() {
        let mut gallery = Gallery::new();
        gallery.set_fetch_for_collection(true);
        gallery.set_filter_by_floor_price(true);

        FormInput::default().apply(&mut gallery);

        assert!(!gallery.form().fetch_for_collection);
        assert!(!gallery.form().filter_by_floor_price);
    }
}
