//! Dropdown markup generation.
//!
//! Renders resolved bookmarks as a self-contained fragment the host drops
//! into its admin header: a `<style>` block, a toggle anchor, the bookmark
//! list, and a `<script>` block wiring up open/close behavior (toggle click
//! shows or hides the list; any outside click hides it). Interactive state
//! lives entirely in the rendered page — each render call is stateless.
//!
//! With no bookmarks the fragment is empty and the widget is invisible.
//!
//! HTML is generated with [maud](https://maud.lambda.xyz/): compile-time
//! checked templates with auto-escaped interpolation, so page titles cannot
//! inject markup. The CSS and JS are embedded at compile time.

use crate::host::UrlBuilder;
use crate::types::ResolvedBookmark;
use maud::{Markup, PreEscaped, html};

const CSS: &str = include_str!("../static/dropdown.css");
const JS: &str = include_str!("../static/dropdown.js");

/// Render the bookmarks dropdown fragment.
///
/// Anchors appear in `bookmarks` order with hrefs built by `urls`. Empty
/// input produces empty markup.
pub fn render_dropdown(
    bookmarks: &[ResolvedBookmark],
    urls: &impl UrlBuilder,
    toggle_label: &str,
) -> Markup {
    if bookmarks.is_empty() {
        return html! {};
    }

    html! {
        style { (CSS) }
        div.admin-bookmarks-dropdown {
            a.admin-bookmarks-toggle { (toggle_label) }
            ul.admin-bookmarks-list {
                @for bookmark in bookmarks {
                    li.admin-bookmarks-item {
                        a.admin-bookmarks-link href=(urls.build(&bookmark.url)) {
                            (bookmark.label)
                        }
                    }
                }
            }
        }
        script { (PreEscaped(JS)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::AdminUrls;

    fn bookmark(label: &str, url: &str) -> ResolvedBookmark {
        ResolvedBookmark {
            label: label.to_string(),
            url: url.to_string(),
        }
    }

    fn admin() -> AdminUrls {
        AdminUrls::new("/admin/")
    }

    #[test]
    fn no_bookmarks_render_nothing() {
        let html = render_dropdown(&[], &admin(), "Bookmarks").into_string();
        assert!(html.is_empty());
    }

    #[test]
    fn dropdown_contains_toggle_and_links() {
        let bookmarks = vec![bookmark("Settings -- General", "settings/general")];
        let html = render_dropdown(&bookmarks, &admin(), "Bookmarks").into_string();

        assert!(html.contains("admin-bookmarks-toggle"));
        assert!(html.contains(">Bookmarks</a>"));
        assert!(html.contains("Settings -- General"));
    }

    #[test]
    fn hrefs_go_through_the_url_builder() {
        let bookmarks = vec![bookmark("Settings", "settings")];
        let html = render_dropdown(&bookmarks, &admin(), "Bookmarks").into_string();
        assert!(html.contains(r#"href="/admin/settings""#));
    }

    #[test]
    fn links_preserve_bookmark_order() {
        let bookmarks = vec![bookmark("Beta", "beta"), bookmark("Alpha", "alpha")];
        let html = render_dropdown(&bookmarks, &admin(), "Bookmarks").into_string();
        assert!(html.find("Beta").unwrap() < html.find("Alpha").unwrap());
    }

    #[test]
    fn style_and_script_blocks_are_embedded() {
        let bookmarks = vec![bookmark("Settings", "settings")];
        let html = render_dropdown(&bookmarks, &admin(), "Bookmarks").into_string();

        assert!(html.contains("<style>"));
        assert!(html.contains(".admin-bookmarks-dropdown"));
        assert!(html.contains("<script>"));
        assert!(html.contains("addEventListener"));
    }

    #[test]
    fn custom_toggle_label_is_rendered() {
        let bookmarks = vec![bookmark("Settings", "settings")];
        let html = render_dropdown(&bookmarks, &admin(), "Quick Links").into_string();
        assert!(html.contains("Quick Links"));
    }

    #[test]
    fn labels_are_escaped() {
        // Maud should automatically escape HTML in content
        let bookmarks = vec![bookmark("<script>alert('xss')</script>", "settings")];
        let html = render_dropdown(&bookmarks, &admin(), "Bookmarks").into_string();

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
