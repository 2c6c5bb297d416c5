use newsletter_core::{Item, ItemKind};

#[test]
fn constructors_set_kind_and_content() {
    let note = Item::text("This is a note.");
    assert_eq!(note.kind(), ItemKind::Text);
    assert_eq!(note.content(), "This is a note.");

    let picture = Item::picture("Flattering.jpg");
    assert_eq!(picture.kind(), ItemKind::Picture);
    assert_eq!(picture.content(), "Flattering.jpg");
}

#[test]
fn clone_is_independent() {
    let original = Item::text("before");
    let mut copy = original.clone();
    if let Item::Text { content } = &mut copy {
        content.push_str(" and after");
    }

    assert_eq!(original.content(), "before");
    assert_eq!(copy.content(), "before and after");
}

#[test]
fn render_has_no_trailing_newline() {
    let rendered = Item::text("Hi").render();
    assert_eq!(rendered, "Text:Hi");
    assert!(!rendered.ends_with('\n'));
    assert_eq!(Item::picture("p.png").to_string(), "Picture:p.png");
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let json = serde_json::to_value(Item::text("hello")).unwrap();
    assert_eq!(json["type"], "text");
    assert_eq!(json["content"], "hello");

    let json = serde_json::to_value(Item::picture("a.png")).unwrap();
    assert_eq!(json["type"], "picture");
    assert_eq!(json["location"], "a.png");

    let decoded: Item = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, Item::picture("a.png"));
}

#[test]
fn deserialize_rejects_unknown_type() {
    let value = serde_json::json!({ "type": "video", "content": "clip.mp4" });
    assert!(serde_json::from_value::<Item>(value).is_err());
}
