use leptos::reactive::owner::Owner;

use super::*;

fn article(id: &str, title: &str, banner: Option<&str>, published: bool) -> Article {
    Article {
        id: id.to_owned(),
        title: title.to_owned(),
        synopsis: format!("{title} synopsis"),
        content: "<p>Body</p>".to_owned(),
        banner_image_url: banner.map(str::to_owned),
        published,
        last_edited: None,
    }
}

fn slots_for(owner: &Owner, id: &str) -> ArticleSlots {
    owner.with(|| {
        let slots = ArticleSlots::new();
        slots.reset(id.to_owned());
        slots
    })
}

#[test]
fn update_article_path_nests_id_under_dashboard() {
    assert_eq!(update_article_path("66a1f0"), "/dashboard/66a1f0/update");
}

#[test]
fn pending_message_names_each_action() {
    assert_eq!(pending_message(PendingAction::Saving), "Saving...");
    assert_eq!(pending_message(PendingAction::Publishing), "Updating publication status...");
    assert_eq!(pending_message(PendingAction::Deleting), "Deleting...");
}

#[test]
fn confirmation_copy_matches_dashboard_wording() {
    assert_eq!(PUBLISH_CONFIRM_TITLE, "Publish this article?");
    assert_eq!(PUBLISH_CONFIRM_MESSAGE, "Publishing this article will make it visible to the public");
    assert_eq!(DELETE_CONFIRM_TITLE, "Delete this article?");
    assert_eq!(DELETE_CONFIRM_MESSAGE, "This is irreversible!");
}

#[test]
fn banner_link_ignores_missing_or_blank_urls() {
    assert_eq!(banner_link(None), None);
    assert_eq!(banner_link(Some(&article("a1", "Tides", None, false))), None);
    assert_eq!(banner_link(Some(&article("a1", "Tides", Some("  "), false))), None);
    assert_eq!(
        banner_link(Some(&article("a1", "Tides", Some("https://cdn.test/b.jpg"), false))).as_deref(),
        Some("https://cdn.test/b.jpg")
    );
}

#[test]
fn first_fetch_seeds_title_and_synopsis() {
    let owner = Owner::new();
    let slots = slots_for(&owner, "a1");

    assert!(slots.apply("a1", Ok(article("a1", "Tides", None, false))));
    assert_eq!(slots.title.get_untracked(), "Tides");
    assert_eq!(slots.synopsis.get_untracked(), "Tides synopsis");
    assert!(slots.load_error.get_untracked().is_none());
}

#[test]
fn refetch_refreshes_status_and_banner_but_keeps_edits() {
    let owner = Owner::new();
    let slots = slots_for(&owner, "a1");
    assert!(slots.apply("a1", Ok(article("a1", "Tides", None, false))));
    slots.title.set("Tides, revised".to_owned());

    let saved = article("a1", "Tides, revised", Some("https://cdn.test/new.jpg"), true);
    assert!(slots.apply("a1", Ok(saved)));

    assert_eq!(slots.title.get_untracked(), "Tides, revised");
    let (published, link) = slots
        .article
        .with_untracked(|a| (a.as_ref().is_some_and(|a| a.published), banner_link(a.as_ref())));
    assert!(published);
    assert_eq!(link.as_deref(), Some("https://cdn.test/new.jpg"));
}

#[test]
fn fetch_error_is_recorded_without_clearing_article() {
    let owner = Owner::new();
    let slots = slots_for(&owner, "a1");
    assert!(slots.apply("a1", Ok(article("a1", "Tides", None, false))));

    assert!(slots.apply("a1", Err("request failed with status 500".to_owned())));
    assert_eq!(slots.load_error.get_untracked().as_deref(), Some("request failed with status 500"));
    assert!(slots.article.with_untracked(Option::is_some));
}

#[test]
fn fetch_for_previous_route_id_is_dropped() {
    let owner = Owner::new();
    let slots = slots_for(&owner, "a1");
    owner.with(|| slots.reset("b2".to_owned()));

    assert!(!slots.apply("a1", Ok(article("a1", "Old", None, true))));
    assert!(slots.article.with_untracked(Option::is_none));
    assert!(slots.title.get_untracked().is_empty());
}

#[test]
fn fetch_completing_after_page_disposed_is_ignored() {
    let owner = Owner::new();
    let slots = slots_for(&owner, "a1");
    drop(owner);

    assert!(!slots.apply("a1", Ok(article("a1", "Tides", None, false))));
    assert!(!slots.apply("a1", Err("network error: aborted".to_owned())));
}
