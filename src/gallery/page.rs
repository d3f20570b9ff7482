//! Full page markup: the form on top, the card grid below.

use std::fmt::Write;

use super::card::{escape_html, render_card};
use super::view::Gallery;

const STYLE: &str = "\
body{font-family:sans-serif;background:#0f172a;margin:0}\
.controls{display:flex;flex-direction:column;align-items:center;gap:.5rem;padding:2rem 0 1rem}\
.controls input[type=text]{width:25%;text-align:center}\
.controls label{color:#94a3b8}\
.controls button{background:#60a5fa;color:#fff;border:0;padding:.5rem 1rem;width:20%}\
.grid{display:flex;flex-wrap:wrap;gap:3rem .5rem;justify-content:center;width:83%;margin:1rem auto}\
.nft-card{width:25%;height:24rem;display:flex;flex-direction:column;border-radius:.375rem;overflow:hidden;background:#f8fafc}\
.nft-media{height:50%}.nft-media img{object-fit:cover;width:100%;height:100%}\
.nft-body{height:50%;overflow:auto;padding:1rem;text-align:center}\
.nft-title{font-size:1.25rem;color:#1f2937;margin:0 0 .5rem}\
.trait{font-weight:bold;color:#4b5563}.value{color:#4b5563}\
.status{color:#e2e8f0}";

fn checkbox(name: &str, label: &str, checked: bool) -> String {
    format!(
        "<label><input type=\"checkbox\" name=\"{}\" value=\"on\"{}> {}</label>",
        name,
        if checked { " checked" } else { "" },
        label
    )
}

/// Renders the whole gallery page from the current view state.
///
/// On error the message replaces the grid and no cards are shown.
pub fn render_page(gallery: &mut Gallery) -> String {
    let form = gallery.form().clone();
    let error = gallery.active_error().map(str::to_string);
    let loading = gallery.active_loading();
    let next_page_key = gallery.next_page_key().map(str::to_string);
    let displayed = gallery.displayed();

    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    let _ = write!(html, "<title>NFT Gallery</title><style>{}</style></head><body>", STYLE);

    html.push_str("<form class=\"controls\" method=\"post\" action=\"/fetch\">");
    let _ = write!(
        html,
        "<input type=\"text\" name=\"wallet\" value=\"{}\" placeholder=\"Add your wallet address\"{}>",
        escape_html(&form.wallet),
        if form.fetch_for_collection { " disabled" } else { "" }
    );
    let _ = write!(
        html,
        "<input type=\"text\" name=\"collection\" value=\"{}\" placeholder=\"Add the collection address\">",
        escape_html(&form.collection)
    );
    html.push_str(&checkbox("fetch_for_collection", "Fetch for collection", form.fetch_for_collection));
    html.push_str(&checkbox(
        "filter_by_floor_price",
        "Sort by floor price (higher to lower)",
        form.filter_by_floor_price,
    ));
    // First submit button is the one Enter activates.
    let _ = write!(
        html,
        "<button type=\"submit\" id=\"go\"{}>Let's go!</button>",
        if loading { " disabled" } else { "" }
    );
    html.push_str("<button type=\"submit\" formaction=\"/form\">Apply</button>");
    if let Some(key) = &next_page_key {
        let _ = write!(
            html,
            "<button type=\"submit\" name=\"page_key\" value=\"{}\">Next page</button>",
            escape_html(key)
        );
    }
    html.push_str("</form>");

    html.push_str("<div class=\"grid\">");
    if let Some(message) = &error {
        let _ = write!(html, "<div class=\"status error\">An error occurred: {}</div>", escape_html(message));
    } else if loading {
        html.push_str("<div class=\"status loading\">Loading...</div>");
    } else if let Some(nfts) = displayed {
        for nft in nfts.iter() {
            html.push_str(&render_card(nft));
        }
    }
    html.push_str("</div></body></html>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::nft::Nft;
    use crate::core::errors::GalleryError;

    fn titled(title: &str) -> Nft {
        Nft { title: title.to_string(), ..Default::default() }
    }

    #[test]
    fn test_empty_page_has_form_and_no_cards() {
        let mut gallery = Gallery::new();
        let html = render_page(&mut gallery);
        assert!(html.contains("placeholder=\"Add your wallet address\""));
        assert!(html.contains("placeholder=\"Add the collection address\""));
        assert!(html.contains("Let's go!"));
        assert_eq!(html.matches("class=\"nft-card\"").count(), 0);
    }

    #[test]
    fn test_cards_rendered_for_each_nft() {
        let mut gallery = Gallery::new();
        gallery.begin_fetch();
        gallery.complete_wallet(Ok(vec![titled("one"), titled("two"), titled("three")]));

        let html = render_page(&mut gallery);
        assert_eq!(html.matches("class=\"nft-card\"").count(), 3);
        assert!(html.contains(">two</h2>"));
    }

    #[test]
    fn test_error_replaces_grid() {
        let mut gallery = Gallery::new();
        gallery.begin_fetch();
        gallery.complete_wallet(Err(GalleryError::Network("timed out".to_string())));

        let html = render_page(&mut gallery);
        assert!(html.contains("An error occurred: Network error: timed out"));
        assert_eq!(html.matches("class=\"nft-card\"").count(), 0);
    }

    #[test]
    fn test_wallet_input_disabled_in_collection_mode() {
        let mut gallery = Gallery::new();
        gallery.set_fetch_for_collection(true);
        let html = render_page(&mut gallery);
        assert!(html.contains("placeholder=\"Add your wallet address\" disabled>"));
        assert!(html.contains("name=\"fetch_for_collection\" value=\"on\" checked"));
    }

    #[test]
    fn test_fetch_button_is_the_default_submit() {
        let mut gallery = Gallery::new();
        let html = render_page(&mut gallery);
        let first_button = html.find("<button").unwrap();
        assert!(html[first_button..].starts_with("<button type=\"submit\" id=\"go\">"));
        assert!(html.find("id=\"go\"").unwrap() < html.find("formaction=\"/form\"").unwrap());
    }

    #[test]
    fn test_loading_state_disables_trigger() {
        let mut gallery = Gallery::new();
        gallery.begin_fetch();
        let html = render_page(&mut gallery);
        assert!(html.contains("Loading..."));
        assert!(html.contains("id=\"go\" disabled"));
    }
}
