use choco_web::catalog::{CatalogDocument, ComicEntry, FAILURE_MESSAGE, SectionContent, SectionKind};
use choco_web::components::sections::{Props, SectionView};
use futures::executor::block_on;
use yew::{Callback, LocalServerRenderer};

fn sample_catalog() -> CatalogDocument {
    CatalogDocument::from_json(include_str!("../static/comics.json")).expect("sample catalog parses")
}

fn render(kind: SectionKind, content: SectionContent) -> String {
    let props = Props {
        kind,
        content,
        seed: 0x5EED,
        on_activate: Callback::noop(),
    };
    block_on(LocalServerRenderer::<SectionView>::with_props(props).render())
}

fn render_section(kind: SectionKind) -> String {
    let content = SectionContent::from_catalog(&sample_catalog(), kind).expect("section present");
    render(kind, content)
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("`{needle}` missing from {html}"))
}

#[test]
fn new_releases_render_one_card_per_entry_in_order() {
    let html = render_section(SectionKind::NewReleases);
    assert_eq!(html.matches("class=\"comic-card\"").count(), 2, "{html}");
    assert!(
        position(&html, "nr-absolute-batman-11") < position(&html, "nr-transformers-23"),
        "input order should be preserved: {html}"
    );
    assert!(html.contains("by Scott Snyder"));
    assert!(html.contains("$5.99"));
    assert!(html.contains("class=\"tag\""), "tags render as badges: {html}");
}

#[test]
fn order_follows_input_not_titles() {
    let comics = vec![
        ComicEntry::new("z", "Zzz"),
        ComicEntry::new("a", "Aaa"),
        ComicEntry::new("m", "Mmm"),
    ];
    let html = render(SectionKind::StaffPicks, SectionContent::Comics(comics));
    let z = position(&html, "data-id=\"z\"");
    let a = position(&html, "data-id=\"a\"");
    let m = position(&html, "data-id=\"m\"");
    assert!(z < a && a < m, "{html}");
    assert_eq!(html.matches("class=\"staff-pick-card\"").count(), 3);
}

#[test]
fn empty_lists_show_the_section_message() {
    for kind in SectionKind::ALL {
        let html = render(kind, SectionContent::Empty(kind.empty_message()));
        assert!(
            html.contains(kind.empty_message()),
            "{kind} should announce its empty list: {html}"
        );
        assert!(!html.contains("data-id"), "{html}");
    }
}

#[test]
fn failure_shows_uniform_message() {
    let html = render(SectionKind::Trending, SectionContent::failure());
    assert!(html.contains(FAILURE_MESSAGE), "{html}");
    assert!(html.contains("section-error"));
}

#[test]
fn missing_optional_fields_use_defaults() {
    let mut bare = ComicEntry::new("bare", "Bare Bones");
    bare.description = None;

    let html = render(SectionKind::StaffPicks, SectionContent::Comics(vec![bare.clone()]));
    assert!(html.contains("Description coming soon..."), "{html}");
    assert!(html.contains("staff-pick-cover-fallback"), "{html}");
    assert!(!html.contains("staff-pick-publisher"), "{html}");
    assert!(!html.contains("<img"), "{html}");

    let html = render(SectionKind::NewReleases, SectionContent::Comics(vec![bare.clone()]));
    assert!(!html.contains("comic-writer"), "writer line is omitted: {html}");
    assert!(html.contains("comic-cover-fallback"));

    let html = render(
        SectionKind::Trending,
        SectionContent::Comics(vec![bare]),
    );
    assert!(html.contains("Great comic!"), "{html}");
}

#[test]
fn trending_items_carry_rating_likes_and_five_stars() {
    let html = render_section(SectionKind::Trending);
    assert_eq!(html.matches("class=\"trending-item\"").count(), 2, "{html}");
    assert_eq!(html.matches("class=\"star star--").count(), 10, "{html}");
    assert_eq!(html.matches(" likes</span>").count(), 2, "{html}");
    assert!(html.contains("class=\"rating\">4.") || html.contains("class=\"rating\">5.0"));
}

#[test]
fn trending_excerpt_is_truncated() {
    let html = render_section(SectionKind::Trending);
    assert!(html.contains("Peter Parker was never bitten."));
    assert!(html.contains("..."), "long description is cut: {html}");
    assert!(!html.contains("put on the mask"), "{html}");
}

#[test]
fn pull_list_ends_with_add_tile() {
    let html = render_section(SectionKind::PullList);
    assert_eq!(html.matches("data-id=").count(), 2, "{html}");
    assert!(html.contains("Add Comic"));
    assert!(
        position(&html, "pl-spawn-367") < position(&html, "add-comic-item"),
        "add tile comes last: {html}"
    );
    assert_eq!(html.matches("star star--full").count(), 9, "5 + 4 full stars: {html}");
}

#[test]
fn staff_picks_show_price_line_and_rating() {
    let html = render_section(SectionKind::StaffPicks);
    assert!(html.contains("$2.99 • 3/14/12"), "{html}");
    assert!(html.contains("class=\"staff-rating\">4.9"), "{html}");
    assert!(html.contains("Image Comics"), "author alias fills publisher: {html}");
}

#[test]
fn news_cards_are_not_activatable() {
    let html = render_section(SectionKind::News);
    assert_eq!(html.matches("class=\"news-card\"").count(), 1);
    assert!(html.contains("Midnight release party"));
    assert!(!html.contains("role=\"button\""), "{html}");
}

#[test]
fn pull_list_stars_drop_the_fraction() {
    let mut comic = ComicEntry::new("half", "Half Rated");
    comic.rating = Some(4.5);
    let html = render(SectionKind::PullList, SectionContent::Comics(vec![comic]));
    assert_eq!(html.matches("star star--full").count(), 4, "{html}");
    assert_eq!(html.matches("star star--half").count(), 0, "{html}");
    assert_eq!(html.matches("star star--empty").count(), 1, "{html}");
}
