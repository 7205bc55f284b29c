//! HTML rendering for invite previews.
//!
//! A preview page is what link-preview fetchers read: Open Graph and Twitter
//! Card tags in `<head>`, an immediate meta refresh to the SPA for any human
//! who lands here, and a small visible fallback body.
//!
//! Rendering uses [maud](https://maud.lambda.xyz/), so every interpolated
//! value is HTML-escaped.

pub mod components;

use maud::{DOCTYPE, Markup, PreEscaped, html};

use self::components::{INVITE_CSS, OG_IMAGE_HEIGHT, OG_IMAGE_WIDTH, absolute_url};
use crate::config::BrandConfig;
use crate::resolve::OgMetadata;

/// Render preview metadata into a complete HTML document.
///
/// Pure and deterministic: identical input yields byte-identical output.
pub fn render(brand: &BrandConfig, og: &OgMetadata) -> String {
    render_page(brand, og).into_string()
}

/// Render preview metadata into maud markup.
pub fn render_page(brand: &BrandConfig, og: &OgMetadata) -> Markup {
    let image = absolute_url(&og.image, &brand.base_url);
    let short_name = brand.short_name();
    let refresh = format!("0;url={}", og.url);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (og.title) }
                meta name="description" content=(og.description);
                link rel="canonical" href=(og.url);

                // Open Graph
                meta property="og:type" content="website";
                meta property="og:site_name" content=(brand.site_name);
                meta property="og:title" content=(og.title);
                meta property="og:description" content=(og.description);
                meta property="og:image" content=(image);
                meta property="og:image:width" content=(OG_IMAGE_WIDTH);
                meta property="og:image:height" content=(OG_IMAGE_HEIGHT);
                meta property="og:url" content=(og.url);

                // Twitter Card
                meta name="twitter:card" content="summary_large_image";
                meta name="twitter:title" content=(og.title);
                meta name="twitter:description" content=(og.description);
                meta name="twitter:image" content=(image);

                meta name="theme-color" content=(brand.theme_color);

                // Browsers that get here are sent on to the SPA
                meta http-equiv="refresh" content=(refresh);

                style { (PreEscaped(INVITE_CSS)) }
            }
            body style={"--accent:" (brand.theme_color)} {
                h1 {
                    @if let Some(name) = &og.character_name {
                        "Check out " (name)
                    } @else {
                        "You've been invited to " (short_name)
                    }
                }
                @if let Some(tagline) = &og.tagline {
                    p class="tagline" { (tagline) }
                }
                p { (og.description) }
                p {
                    a href=(og.url) { "Open in " (short_name) " →" }
                }
            }
        }
    }
}
