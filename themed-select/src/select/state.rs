//! Open/closed state of the item list and the current selection.

use super::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    Closed,
    Open,
}

/// What a single interaction did to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed,
    /// The list closed after the consumer was handed this item.
    Picked(Item),
    /// Nothing changed.
    Ignored,
}

impl Transition {
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// State owned by one select instance.
///
/// Transitions:
///
/// | from   | event                 | to     |
/// |--------|-----------------------|--------|
/// | Closed | activate, enabled     | Open   |
/// | Open   | activate              | Closed |
/// | Open   | dismiss               | Closed |
/// | Open   | pick                  | Closed |
///
/// Anything else is [`Transition::Ignored`].
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    list: ListState,
    selected_item: Option<Item>,
    dirty: bool,
}

impl SelectionState {
    pub fn new(selected_item: Option<Item>) -> Self {
        Self {
            list: ListState::Closed,
            selected_item,
            dirty: false,
        }
    }

    pub fn list_state(&self) -> ListState {
        self.list
    }

    pub fn is_list_open(&self) -> bool {
        self.list == ListState::Open
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected_item.as_ref()
    }

    /// Whether `item` is the current selection, by value.
    pub fn is_selected(&self, item: &Item) -> bool {
        self.selected_item
            .as_ref()
            .is_some_and(|selected| selected.same_value(item))
    }

    /// Replace the selection wholesale.
    pub fn replace_selection(&mut self, item: Option<Item>) {
        if self.selected_item != item {
            self.selected_item = item;
            self.dirty = true;
        }
    }

    /// Press on the root control.
    pub fn activate(&mut self, disabled: bool) -> Transition {
        if disabled {
            log::debug!("select disabled, ignoring activation");
            return Transition::Ignored;
        }

        match self.list {
            ListState::Closed => {
                self.set_list(ListState::Open);
                Transition::Opened
            }
            ListState::Open => {
                self.set_list(ListState::Closed);
                Transition::Closed
            }
        }
    }

    /// Close request from outside the list (back button, tap outside).
    pub fn dismiss(&mut self) -> Transition {
        match self.list {
            ListState::Open => {
                self.set_list(ListState::Closed);
                Transition::Closed
            }
            ListState::Closed => Transition::Ignored,
        }
    }

    /// Pick `item` from the open list.
    ///
    /// `on_select` runs while the list is still open and the list closes once
    /// it returns. The selection is left alone: the consumer decides whether
    /// the pick becomes the new selection.
    pub fn pick(&mut self, item: Item, on_select: impl FnOnce(&Item)) -> Transition {
        if self.list == ListState::Closed {
            log::debug!("pick of '{}' while list closed, ignoring", item.value);
            return Transition::Ignored;
        }

        on_select(&item);
        self.set_list(ListState::Closed);
        Transition::Picked(item)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    fn set_list(&mut self, list: ListState) {
        log::debug!("select list {:?} -> {:?}", self.list, list);
        self.list = list;
        self.dirty = true;
    }
}
