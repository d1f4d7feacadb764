//! Random snip selection and HTML fragment construction.

use crate::models::SnipStore;
use crate::sanitize::{escape_html_attr, escape_html_text, sanitize_plain_text, sanitize_rich_text};
use rand::Rng;
use rand::seq::SliceRandom;

/// Inert marker returned when the collection is empty.
pub const EMPTY_PLACEHOLDER: &str = "<!-- No weather snips available -->";

/// Options controlling the rendered fragment
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Tag name the snip is wrapped in.
    pub wrapper: String,
    /// CSS class attribute value; the attribute is omitted when empty.
    pub class: String,
    /// Inline style attribute value; the attribute is omitted when empty.
    pub style: String,
    /// Markup inserted before the snip text; safe-HTML subset allowed.
    pub prefix: String,
    /// Markup inserted after the snip text; safe-HTML subset allowed.
    pub suffix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            wrapper: String::from("p"),
            class: String::new(),
            style: String::new(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

/// Renders one randomly chosen snip from a [`SnipStore`]
#[derive(Debug)]
pub struct SnipRenderer {
    store: SnipStore,
}

impl SnipRenderer {
    pub fn new(store: SnipStore) -> Self {
        Self { store }
    }

    /// Picks one snip uniformly at random and wraps it per the options.
    ///
    /// Every snip is equally likely and every call draws independently.
    /// An empty collection renders as [`EMPTY_PLACEHOLDER`], never an error.
    pub fn render(&self, options: &RenderOptions) -> String {
        self.render_with_rng(options, &mut rand::thread_rng())
    }

    /// Same as [`render`](Self::render) with a caller-supplied random source.
    pub fn render_with_rng<R: Rng + ?Sized>(&self, options: &RenderOptions, rng: &mut R) -> String {
        let snips = self.store.list();
        match snips.choose(rng) {
            Some(snip) => render_fragment(snip, options),
            None => EMPTY_PLACEHOLDER.to_string(),
        }
    }
}

/// Wraps an already-chosen snip in a markup fragment.
///
/// The snip text is always escaped as plain text, whatever it contains.
/// Wrapper, class, and style are treated as plain text; prefix and suffix
/// keep the allow-listed tag subset. The wrapper is not validated as a legal
/// tag name.
pub fn render_fragment(snip: &str, options: &RenderOptions) -> String {
    let wrapper = sanitize_plain_text(&options.wrapper);
    let class = sanitize_plain_text(&options.class);
    let style = sanitize_plain_text(&options.style);

    let mut html = String::new();
    html.push('<');
    html.push_str(&wrapper);
    if !class.is_empty() {
        html.push_str(" class=\"");
        html.push_str(&escape_html_attr(&class));
        html.push('"');
    }
    if !style.is_empty() {
        html.push_str(" style=\"");
        html.push_str(&escape_html_attr(&style));
        html.push('"');
    }
    html.push('>');
    html.push_str(&sanitize_rich_text(&options.prefix));
    html.push_str(&escape_html_text(snip));
    html.push_str(&sanitize_rich_text(&options.suffix));
    html.push_str("</");
    html.push_str(&wrapper);
    html.push('>');
    html
}
