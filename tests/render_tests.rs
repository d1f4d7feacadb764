// Rendering contract: uniform selection, plain-text escaping of snip text,
// allow-list filtering of prefix/suffix, and attribute omission.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use tempfile::TempDir;
use wxsnips::models::SnipStore;
use wxsnips::render::{EMPTY_PLACEHOLDER, RenderOptions, SnipRenderer, render_fragment};
use wxsnips::sanitize::{sanitize_plain_text, sanitize_rich_text};

fn renderer_over(texts: &[&str]) -> (TempDir, SnipRenderer) {
    let dir = TempDir::new().unwrap();
    let store = SnipStore::new(dir.path().join("snips.json"));
    for text in texts {
        assert!(store.add(*text));
    }
    (dir, SnipRenderer::new(store))
}

#[test]
fn empty_collection_renders_the_placeholder() {
    let (_dir, renderer) = renderer_over(&[]);

    assert_eq!(renderer.render(&RenderOptions::default()), EMPTY_PLACEHOLDER);
}

#[test]
fn snip_text_is_always_escaped() {
    let html = render_fragment("<script>alert(1)</script>", &RenderOptions::default());

    assert_eq!(html, "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>");
}

#[test]
fn prefix_keeps_allowed_tags_and_drops_others() {
    let options = RenderOptions {
        prefix: "<strong>Forecast</strong>: <script>alert(1)</script>".to_string(),
        ..RenderOptions::default()
    };

    let html = render_fragment("ok", &options);

    assert_eq!(html, "<p><strong>Forecast</strong>: alert(1)ok</p>");
}

#[test]
fn suffix_passes_through_the_rich_filter() {
    let options = RenderOptions {
        suffix: " <em>(updated)</em>".to_string(),
        ..RenderOptions::default()
    };

    let html = render_fragment("ok", &options);

    assert_eq!(html, "<p>ok <em>(updated)</em></p>");
}

#[test]
fn empty_class_and_style_emit_no_attributes() {
    let html = render_fragment("x", &RenderOptions::default());

    assert_eq!(html, "<p>x</p>");
}

#[test]
fn wrapper_class_and_style_are_treated_as_plain_text() {
    let options = RenderOptions {
        wrapper: "div".to_string(),
        class: "fc <b>bold</b>".to_string(),
        style: "color: red".to_string(),
        ..RenderOptions::default()
    };

    let html = render_fragment("x", &options);

    assert_eq!(html, r#"<div class="fc bold" style="color: red">x</div>"#);
}

#[test]
fn rich_text_drops_attributes_from_allowed_tags() {
    let cleaned = sanitize_rich_text(r#"<a href="https://x" onclick="evil()">link</a>"#);

    assert_eq!(cleaned, "<a>link</a>");
}

#[test]
fn plain_text_strips_markup_and_collapses_whitespace() {
    assert_eq!(sanitize_plain_text("  a <b>b</b>\n\tc  "), "a b c");
}

#[test]
fn renders_the_concrete_scenario() {
    let (_dir, renderer) = renderer_over(&["Sunny skies", "Rain expected"]);
    let options = RenderOptions {
        wrapper: "div".to_string(),
        class: "fc".to_string(),
        prefix: "Forecast: ".to_string(),
        ..RenderOptions::default()
    };

    let html = renderer.render(&options);

    assert!(
        html == r#"<div class="fc">Forecast: Sunny skies</div>"#
            || html == r#"<div class="fc">Forecast: Rain expected</div>"#,
        "unexpected fragment: {html}"
    );
}

#[test]
fn selection_is_uniform_over_two_snips() {
    let (_dir, renderer) = renderer_over(&["Sunny skies", "Rain expected"]);
    let options = RenderOptions::default();

    let mut rng = Xoshiro256StarStar::seed_from_u64(0x5eed);
    let mut counts = [0usize; 2];
    for _ in 0..4000 {
        match renderer.render_with_rng(&options, &mut rng).as_str() {
            "<p>Sunny skies</p>" => counts[0] += 1,
            "<p>Rain expected</p>" => counts[1] += 1,
            other => panic!("unexpected fragment: {other}"),
        }
    }

    // Each snip should land near half of the 4000 draws.
    for count in counts {
        assert!((1700..=2300).contains(&count), "skewed selection: {counts:?}");
    }
}
