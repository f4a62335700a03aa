//! Event routing for the Select widget.
//!
//! Interactive elements produced by [`Select::render`] carry a handler tag in
//! their `data` map. The host hands a pressed element back to
//! [`Select::press`], which decodes the tag and applies the transition.

use uidom::Element;

use super::state::Transition;
use super::widget::Select;

pub const ACTION_KEY: &str = "action";
pub const VALUE_KEY: &str = "value";

const TOGGLE: &str = "toggle";
const DISMISS: &str = "dismiss";
const PICK: &str = "pick";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEvent {
    /// Press on the root control or on the strip above the open list.
    Activate,
    /// Close request from the overlay.
    Dismiss,
    /// Press on the row with this value.
    Pick(String),
}

impl SelectEvent {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Activate => TOGGLE,
            Self::Dismiss => DISMISS,
            Self::Pick(_) => PICK,
        }
    }

    /// Decode the handler tag carried by `element`, if any.
    pub fn from_element(element: &Element) -> Option<Self> {
        match element.get_data(ACTION_KEY)? {
            TOGGLE => Some(Self::Activate),
            DISMISS => Some(Self::Dismiss),
            PICK => element
                .get_data(VALUE_KEY)
                .map(|value| Self::Pick(value.to_string())),
            other => {
                log::warn!("unknown select action tag '{}'", other);
                None
            }
        }
    }

    pub(crate) fn attach(self, element: Element) -> Element {
        let element = element.data(ACTION_KEY, self.tag());
        match self {
            Self::Pick(value) => element.data(VALUE_KEY, value),
            _ => element,
        }
    }
}

impl Select {
    pub fn handle(&mut self, event: SelectEvent) -> Transition {
        match event {
            SelectEvent::Activate => self.activate(),
            SelectEvent::Dismiss => self.dismiss(),
            SelectEvent::Pick(value) => {
                let Some(item) = self.item_by_value(&value).cloned() else {
                    log::warn!("pick of unknown item value '{}'", value);
                    return Transition::Ignored;
                };
                self.pick(item)
            }
        }
    }

    /// Route a press on an element of this widget's tree.
    pub fn press(&mut self, element: &Element) -> Transition {
        match SelectEvent::from_element(element) {
            Some(event) => self.handle(event),
            None => Transition::Ignored,
        }
    }
}
