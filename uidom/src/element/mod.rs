mod content;
mod node;

pub use content::{Content, ImageSource};
pub use node::{Element, Kind};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    find(root, &|el: &Element| el.id == id)
}

/// Find an element by the identifier exposed to UI automation.
pub fn find_by_test_id<'a>(root: &'a Element, test_id: &str) -> Option<&'a Element> {
    find(root, &|el: &Element| el.test_id.as_deref() == Some(test_id))
}

fn find<'a>(root: &'a Element, pred: &dyn Fn(&Element) -> bool) -> Option<&'a Element> {
    if pred(root) {
        return Some(root);
    }

    root.children().iter().find_map(|child| find(child, pred))
}
