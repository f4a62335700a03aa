//! Items shown in the dropdown list.

use serde::Deserialize;

/// One selectable entry.
///
/// `value` identifies the entry within its list; `text` is what the user
/// sees. Two items are the same selection when their values match, whatever
/// their labels say.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Item {
    pub value: String,
    pub text: String,
}

impl Item {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }

    /// Selection identity: equal values, labels ignored.
    pub fn same_value(&self, other: &Item) -> bool {
        self.value == other.value
    }
}

/// Trait for types that can be offered as select items.
///
/// # Example
///
/// ```
/// use themed_select::SelectItem;
///
/// struct Priority {
///     id: u32,
///     name: String,
/// }
///
/// impl SelectItem for Priority {
///     fn select_value(&self) -> String {
///         self.id.to_string()
///     }
///
///     fn select_text(&self) -> String {
///         self.name.clone()
///     }
/// }
///
/// let item = Priority { id: 3, name: "High".into() }.to_item();
/// assert_eq!(item.value, "3");
/// ```
pub trait SelectItem {
    /// Unique identifier for this item.
    fn select_value(&self) -> String;

    /// Display text for this item.
    fn select_text(&self) -> String;

    fn to_item(&self) -> Item {
        Item::new(self.select_value(), self.select_text())
    }
}

impl SelectItem for Item {
    fn select_value(&self) -> String {
        self.value.clone()
    }

    fn select_text(&self) -> String {
        self.text.clone()
    }

    fn to_item(&self) -> Item {
        self.clone()
    }
}

// (value, text) tuples
impl<S1, S2> SelectItem for (S1, S2)
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    fn select_value(&self) -> String {
        self.0.as_ref().to_string()
    }

    fn select_text(&self) -> String {
        self.1.as_ref().to_string()
    }
}
