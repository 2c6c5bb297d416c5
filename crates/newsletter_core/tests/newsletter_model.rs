use newsletter_core::{Item, Newsletter};

fn weekly_update() -> Newsletter {
    let mut newsletter = Newsletter::new("Weekly Update");
    newsletter.add_item(&Item::text("This is a note from Rob."));
    newsletter.add_item(&Item::picture("RobFlattering.jpg"));
    newsletter
}

#[test]
fn new_starts_empty() {
    let newsletter = Newsletter::new("Empty");
    assert_eq!(newsletter.title(), "Empty");
    assert!(newsletter.is_empty());
    assert_eq!(newsletter.render(), "Title: Empty\n");
}

#[test]
fn render_lists_items_in_order() {
    let newsletter = weekly_update();
    assert!(newsletter.render().starts_with("Title: Weekly Update\n"));
    assert_eq!(
        newsletter.render(),
        "Title: Weekly Update\nText:This is a note from Rob.\nPicture:RobFlattering.jpg\n"
    );
}

#[test]
fn add_item_preserves_order_across_variants() {
    let a = Item::text("a");
    let b = Item::picture("b.png");
    let c = Item::text("c");

    let mut newsletter = Newsletter::new("T");
    newsletter.add_item(&a);
    newsletter.add_item(&b);
    newsletter.add_item(&c);

    assert_eq!(newsletter.items(), &[a, b, c]);
}

#[test]
fn add_item_allows_duplicates() {
    let item = Item::text("same");
    let mut newsletter = Newsletter::new("T");
    newsletter.add_item(&item);
    newsletter.add_item(&item);
    assert_eq!(newsletter.len(), 2);
}

#[test]
fn add_item_stores_a_copy() {
    let mut source = Item::text("draft");
    let mut newsletter = Newsletter::new("T");
    newsletter.add_item(&source);

    if let Item::Text { content } = &mut source {
        *content = "edited".to_string();
    }

    assert_eq!(newsletter.items()[0].content(), "draft");
}

#[test]
fn clone_is_deep_in_both_directions() {
    let mut original = weekly_update();
    let mut copy = original.clone();

    copy.add_item(&Item::text("This is a note from Nik"));
    copy.add_item(&Item::picture("Nik.jpg"));
    assert_eq!(original.len(), 2);
    assert_eq!(copy.len(), 4);

    original.add_item(&Item::text("late addition"));
    assert_eq!(original.len(), 3);
    assert_eq!(copy.len(), 4);
    assert_eq!(copy.items()[2].content(), "This is a note from Nik");
}

#[test]
fn assignment_replaces_previous_items() {
    let mut target = weekly_update();
    let mut source = Newsletter::new("Replacement");
    source.add_item(&Item::picture("only.png"));

    target.clone_from(&source);
    assert_eq!(target, source);

    source.add_item(&Item::text("after assignment"));
    assert_eq!(target.len(), 1);
    assert_eq!(target.title(), "Replacement");
}

#[test]
#[allow(clippy::redundant_clone)]
fn self_assignment_leaves_newsletter_unchanged() {
    let mut newsletter = weekly_update();
    let before = newsletter.render();

    newsletter = newsletter.clone();

    assert_eq!(newsletter.render(), before);
    assert_eq!(newsletter.len(), 2);
}

#[test]
fn serialization_round_trips_through_json() {
    let newsletter = weekly_update();
    let json = serde_json::to_value(&newsletter).unwrap();
    assert_eq!(json["title"], "Weekly Update");
    assert_eq!(json["items"][1]["type"], "picture");

    let decoded: Newsletter = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, newsletter);
}
