//! Formatter tests for publication items, list rendering, and profile blocks.
//!
//! Covers the language-fallback decision table, line omission rules, and
//! special character handling.

use researchmap_publist::config::api;
use researchmap_publist::formatters::{self, ListOptions, Summary};
use researchmap_publist::models::{
    Affiliation, Bilingual, Identifiers, Profile, Publication, PublicationPage,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn make_publication(ja: Option<&str>, en: Option<&str>) -> Publication {
    Publication { paper_title: Some(Bilingual::new(ja, en)), ..Default::default() }
}

fn make_profile(ja: Option<&str>, en: Option<&str>) -> Profile {
    Profile { name: Some(Bilingual::new(ja, en)), ..Default::default() }
}

// =============================================================================
// Title Selection Tests
// =============================================================================

#[test]
fn test_title_both_languages() {
    let item = formatters::publication_item(&make_publication(Some("機械学習の研究"), Some("A Study of Machine Learning")));

    let ja_pos = item.find("機械学習の研究").expect("Japanese title present");
    let en_pos = item.find("A Study of Machine Learning").expect("English title present");
    assert!(ja_pos < en_pos, "Japanese title renders first");
    assert!(item.contains("<strong>機械学習の研究</strong>"));
    assert!(item.contains("<span class=\"pub-title-en\">A Study of Machine Learning</span>"));
}

#[test]
fn test_title_japanese_only() {
    let item = formatters::publication_item(&make_publication(Some("機械学習の研究"), None));
    assert!(item.contains("<strong>機械学習の研究</strong>"));
    assert!(!item.contains("pub-title-en"));
}

#[test]
fn test_title_english_only() {
    let item = formatters::publication_item(&make_publication(None, Some("A Study")));
    assert!(item.contains("<strong>A Study</strong>"));
    assert!(!item.contains("pub-title-en"));
}

#[test]
fn test_title_neither_language() {
    let item = formatters::publication_item(&make_publication(None, None));
    assert!(item.contains("<em>[No title available]</em>"));
}

#[test]
fn test_title_empty_strings_treated_as_missing() {
    let item = formatters::publication_item(&make_publication(Some(""), Some("")));
    assert!(item.contains("<em>[No title available]</em>"));
}

// =============================================================================
// Venue / Year / Type Line Tests
// =============================================================================

#[test]
fn test_venue_with_year_and_type() {
    let publication = Publication {
        paper_title: Some(Bilingual::new(None, Some("A Study"))),
        publication_name: Some(Bilingual::new(None, Some("Nature"))),
        publication_date: Some("2021-03-15".to_string()),
        published_paper_type: Some("scientific_journal".to_string()),
        ..Default::default()
    };

    let item = formatters::publication_item(&publication);
    assert!(item.contains("<i>Nature</i> (2021) [scientific_journal]"));
}

#[test]
fn test_venue_prefers_japanese() {
    let publication = Publication {
        publication_name: Some(Bilingual::new(Some("日本物理学会誌"), Some("Butsuri"))),
        ..Default::default()
    };

    let item = formatters::publication_item(&publication);
    assert!(item.contains("<i>日本物理学会誌</i>"));
    assert!(!item.contains("Butsuri"));
}

#[test]
fn test_year_only_line() {
    let publication = Publication {
        publication_date: Some("2018".to_string()),
        ..Default::default()
    };

    let item = formatters::publication_item(&publication);
    assert!(item.contains("Published: 2018"));
}

#[test]
fn test_no_venue_no_year_line_omitted() {
    let publication = Publication {
        paper_title: Some(Bilingual::new(Some("研究"), None)),
        published_paper_type: Some("in_book".to_string()),
        ..Default::default()
    };

    let item = formatters::publication_item(&publication);
    // Type alone is not enough to produce the line.
    assert!(!item.contains("pub-info"));
    assert!(!item.contains("in_book"));
}

// =============================================================================
// DOI Line Tests
// =============================================================================

#[test]
fn test_doi_link_target() {
    let publication = Publication {
        identifiers: Some(Identifiers { doi: Some(vec!["10.1038/s41586-021-1".to_string()]) }),
        ..Default::default()
    };

    let item = formatters::publication_item(&publication);
    assert!(item.contains("DOI: <a href=\"https://doi.org/10.1038/s41586-021-1\" target=\"_blank\">10.1038/s41586-021-1</a>"));
}

#[test]
fn test_doi_absent_identifiers() {
    let item = formatters::publication_item(&make_publication(Some("研究"), None));
    assert!(!item.contains("DOI"));
}

#[test]
fn test_doi_empty_list() {
    let publication = Publication {
        identifiers: Some(Identifiers { doi: Some(vec![]) }),
        ..Default::default()
    };

    let item = formatters::publication_item(&publication);
    assert!(!item.contains("DOI"));
}

// =============================================================================
// List Rendering Tests
// =============================================================================

#[test]
fn test_list_renders_every_item() {
    let page = PublicationPage {
        items: vec![
            make_publication(Some("研究一"), None),
            make_publication(None, None),
            make_publication(None, Some("Third")),
        ],
        number_of_items: 3,
    };

    let rendered = formatters::publication_list(&page, &ListOptions::direct());
    assert_eq!(rendered.html.matches("<li>").count(), 3, "untitled items are never dropped");
    assert_eq!(rendered.displayed, 3);
}

#[test]
fn test_empty_list_placeholder_wording_per_flow() {
    let page = PublicationPage::default();

    let direct = formatters::publication_list(&page, &ListOptions::direct());
    assert!(direct.html.contains("No publications found matching the criteria."));

    let search = formatters::publication_list(&page, &ListOptions::search());
    assert!(search.html.contains("No publications found for this researcher."));
}

#[test]
fn test_empty_list_counts() {
    let page = PublicationPage { items: vec![], number_of_items: 8 };
    let rendered = formatters::publication_list(&page, &ListOptions::search());

    assert_eq!(rendered.displayed, 0);
    assert_eq!(rendered.total, 8);
    assert!(rendered.html.contains("Showing 0 publications out of 8 total."));
}

#[test]
fn test_summary_modes() {
    let page = PublicationPage {
        items: vec![make_publication(Some("研究"), None)],
        number_of_items: 40,
    };

    let visible = formatters::publication_list(&page, &ListOptions::search());
    assert_eq!(visible.html.matches("Showing 1 publications out of 40 total.").count(), 1);

    let logged = formatters::publication_list(
        &page,
        &ListOptions { empty_message: "none", summary: Summary::Log },
    );
    assert!(!logged.html.contains("Showing"));
}

// =============================================================================
// Profile Block Tests
// =============================================================================

#[test]
fn test_profile_block_complete() {
    let profile = Profile {
        name: Some(Bilingual::new(Some("田中太郎"), Some("Taro Tanaka"))),
        image_url: Some("https://example.org/photo.jpg".to_string()),
        affiliation: Some(vec![Affiliation {
            name: Some(Bilingual::new(Some("東京大学"), None)),
        }]),
        ..Default::default()
    };

    let block = formatters::profile_block(&profile, "tanaka_taro", api::SITE_URL);
    assert!(block.starts_with("<div class=\"researcher-profile\">"));
    assert!(block.contains("<h2>田中太郎</h2>"));
    assert!(block.contains("<img src=\"https://example.org/photo.jpg\""));
    assert!(block.contains("<p><strong>所属:</strong> 東京大学</p>"));
    assert!(block.contains("View Full Profile on ResearchMap"));
    assert!(block.contains("View All Publications (論文)"));
}

#[test]
fn test_profile_block_minimal() {
    let block = formatters::profile_block(&Profile::default(), "x_y", api::SITE_URL);
    assert!(block.contains("<h2>Unknown Name</h2>"));
    assert!(!block.contains("<img"));
    assert!(!block.contains("所属"));
    assert!(block.contains("href=\"https://researchmap.jp/x_y\""));
}

#[test]
fn test_profile_name_english_fallback() {
    let block = formatters::profile_block(&make_profile(None, Some("Taro Tanaka")), "t", api::SITE_URL);
    assert!(block.contains("<h2>Taro Tanaka</h2>"));
}

// =============================================================================
// Escaping Tests
// =============================================================================

#[test]
fn test_title_special_characters_escaped() {
    let item = formatters::publication_item(&make_publication(
        Some("<script>alert(1)</script>"),
        Some("AT&T \"study\""),
    ));

    assert!(!item.contains("<script>"));
    assert!(item.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(item.contains("AT&amp;T &quot;study&quot;"));
}

#[test]
fn test_profile_name_escaped() {
    let block =
        formatters::profile_block(&make_profile(Some("<b>太郎</b>"), None), "t", api::SITE_URL);
    assert!(block.contains("&lt;b&gt;太郎&lt;/b&gt;"));
}
