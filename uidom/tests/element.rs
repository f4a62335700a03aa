use uidom::{Element, ImageSource, Kind, Rect, find_by_test_id, find_element};

const ARROW: ImageSource = ImageSource::asset("ic_arrow");

fn sample_tree() -> Element {
    Element::container()
        .id("root")
        .child(
            Element::pressable()
                .id("button")
                .test_id(Some("button".into()))
                .data("action", "toggle")
                .child(Element::text("Label").test_id(Some("label".into())))
                .child(Element::image(ARROW)),
        )
        .child(Element::list().id("list").child(Element::text("row").key("r1")))
}

#[test]
fn test_find_element_by_id() {
    let root = sample_tree();
    assert_eq!(find_element(&root, "root").unwrap().id, "root");
    assert_eq!(find_element(&root, "list").unwrap().kind, Kind::List);
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_find_by_test_id_descends() {
    let root = sample_tree();
    let label = find_by_test_id(&root, "label").unwrap();
    assert_eq!(label.kind, Kind::Text);
    assert_eq!(label.text_content(), Some("Label"));
}

#[test]
fn test_child_appends_in_order() {
    let root = sample_tree();
    let button = find_element(&root, "button").unwrap();
    assert_eq!(button.children().len(), 2);
    assert_eq!(button.children()[1].image_source(), Some(ARROW));
    assert_eq!(button.get_data("action"), Some("toggle"));
}

#[test]
fn test_leaf_has_no_children() {
    assert!(Element::text("x").children().is_empty());
    assert_eq!(Element::container().text_content(), None);
}

#[test]
fn test_generated_ids_are_unique() {
    assert_ne!(Element::container().id, Element::container().id);
}

#[test]
fn test_rect_keeps_negative_origin() {
    let rect = Rect::new(-4, -120, 128, 48);
    assert_eq!((rect.x, rect.y), (-4, -120));
    assert_eq!((rect.width, rect.height), (128, 48));
    assert_eq!(Rect::default(), Rect::new(0, 0, 0, 0));
}
