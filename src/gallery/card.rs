//! Card markup for a single NFT.

use std::fmt::Write;

use crate::api::nft::Nft;

/// Escapes text for use inside HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders one card: first media image, title, then one line per attribute.
/// Records without attributes get an empty attribute block.
pub fn render_card(nft: &Nft) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"nft-card\">");

    html.push_str("<div class=\"nft-media\">");
    if let Some(url) = nft.image_url() {
        let _ = write!(html, "<img src=\"{}\" alt=\"{}\">", escape_html(url), escape_html(&nft.title));
    }
    html.push_str("</div>");

    html.push_str("<div class=\"nft-body\">");
    let _ = write!(html, "<h2 class=\"nft-title\">{}</h2>", escape_html(&nft.title));

    html.push_str("<div class=\"nft-attributes\">");
    for attribute in nft.attributes().unwrap_or_default() {
        let _ = write!(
            html,
            "<div class=\"nft-attribute\"><span class=\"trait\">{}:</span><span class=\"value\">{}</span></div>",
            escape_html(&attribute.trait_type),
            escape_html(&attribute.display_value())
        );
    }
    html.push_str("</div></div></div>");
    html
}
