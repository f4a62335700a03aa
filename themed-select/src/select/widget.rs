//! Select widget instance.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use uidom::{Rect, Style};

use super::config::{ItemStyleOverride, SelectConfig, TestIds};
use super::item::{Item, SelectItem};
use super::state::{SelectionState, Transition};
use crate::error::{Result, SelectError};
use crate::theme::ThemeName;

/// Callback receiving the item the user picked.
pub type OnSelect = Box<dyn FnMut(&Item)>;

/// Unique identifier for a Select widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectId(usize);

impl SelectId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SelectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__select_{}", self.0)
    }
}

/// A themed dropdown select.
///
/// The consumer owns the selection: it is told about picks through
/// `on_select` and is expected to feed the selection back with
/// [`Select::set_selected_item`] (or by rebuilding the widget). The widget
/// itself only owns whether the list is open.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use themed_select::{Item, Select, ThemeName, Transition};
///
/// let picked = Rc::new(RefCell::new(None));
/// let sink = Rc::clone(&picked);
///
/// let mut select = Select::builder()
///     .theme(ThemeName::Box)
///     .placeholder("select")
///     .items([("c1", "Category1"), ("c2", "Category2")])
///     .on_select(move |item: &Item| *sink.borrow_mut() = Some(item.clone()))
///     .build()
///     .unwrap();
///
/// assert_eq!(select.label(), "select");
/// assert_eq!(select.activate(), Transition::Opened);
/// select.pick(Item::new("c2", "Category2"));
/// assert_eq!(picked.borrow().as_ref().map(|i| i.value.as_str()), Some("c2"));
/// assert!(!select.is_list_open());
/// assert_eq!(select.label(), "select");
/// ```
pub struct Select {
    id: SelectId,
    config: SelectConfig,
    state: SelectionState,
    /// Root container frame reported by the host.
    layout: Option<Rect>,
    on_select: OnSelect,
}

impl Select {
    pub fn new(config: SelectConfig, on_select: impl FnMut(&Item) + 'static) -> Result<Self> {
        config.validate()?;
        let state = SelectionState::new(config.selected_item.clone());
        Ok(Self {
            id: SelectId::new(),
            config,
            state,
            layout: None,
            on_select: Box::new(on_select),
        })
    }

    pub fn builder() -> SelectBuilder {
        SelectBuilder::default()
    }

    pub fn id(&self) -> SelectId {
        self.id
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn test_ids(&self) -> TestIds {
        self.config.test_ids()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn selected_item(&self) -> Option<&Item> {
        self.state.selected_item()
    }

    /// Replace the consumer-owned selection.
    pub fn set_selected_item(&mut self, item: Option<Item>) {
        self.config.selected_item = item.clone();
        self.state.replace_selection(item);
    }

    /// Text shown in the closed control.
    pub fn label(&self) -> &str {
        self.selected_item()
            .map(|item| item.text.as_str())
            .unwrap_or(self.config.placeholder_text.as_str())
    }

    pub fn items(&self) -> &[Item] {
        &self.config.items
    }

    pub fn set_items(&mut self, items: Vec<Item>) {
        self.config.items = items;
    }

    /// First item carrying `value`.
    pub fn item_by_value(&self, value: &str) -> Option<&Item> {
        self.config.items.iter().find(|item| item.value == value)
    }

    // -------------------------------------------------------------------------
    // Open/close
    // -------------------------------------------------------------------------

    pub fn is_list_open(&self) -> bool {
        self.state.is_list_open()
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    /// Press on the root control: opens or closes the list.
    pub fn activate(&mut self) -> Transition {
        self.state.activate(self.config.disabled)
    }

    /// Close the list without picking anything.
    pub fn dismiss(&mut self) -> Transition {
        self.state.dismiss()
    }

    /// Hand `item` to `on_select`, then close the list.
    ///
    /// The label keeps showing the current selection until the consumer
    /// passes the pick back through [`Select::set_selected_item`].
    pub fn pick(&mut self, item: Item) -> Transition {
        let on_select = self.on_select.as_mut();
        self.state.pick(item, |picked| on_select(picked))
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    /// Record where the host laid out the root container.
    pub fn on_layout(&mut self, frame: Rect) {
        if self.layout != Some(frame) {
            log::trace!("{} laid out at {:?}", self.id, frame);
            self.layout = Some(frame);
        }
    }

    pub fn layout(&self) -> Option<Rect> {
        self.layout
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    pub fn clear_dirty(&mut self) {
        self.state.clear_dirty();
    }
}

impl fmt::Debug for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

/// Chained construction of a [`Select`].
#[derive(Default)]
pub struct SelectBuilder {
    config: SelectConfig,
    on_select: Option<OnSelect>,
}

impl SelectBuilder {
    pub fn config(mut self, config: SelectConfig) -> Self {
        self.config = config;
        self
    }

    pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
        self.config.test_id = Some(test_id.into());
        self
    }

    pub fn theme(mut self, theme: ThemeName) -> Self {
        self.config.theme = theme;
        self
    }

    pub fn root_container_style(mut self, style: Style) -> Self {
        self.config.root_container_style_override = Some(style);
        self
    }

    pub fn root_label_style(mut self, style: Style) -> Self {
        self.config.root_label_style_override = Some(style);
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder_text = placeholder.into();
        self
    }

    pub fn activation_opacity(mut self, opacity: f32) -> Self {
        self.config.activation_opacity = opacity;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    pub fn items<I>(mut self, items: impl IntoIterator<Item = I>) -> Self
    where
        I: SelectItem,
    {
        self.config.items = items.into_iter().map(|item| item.to_item()).collect();
        self
    }

    pub fn item_style(mut self, style: ItemStyleOverride) -> Self {
        self.config.item_style_override = Some(style);
        self
    }

    pub fn selected_item(mut self, item: Option<Item>) -> Self {
        self.config.selected_item = item;
        self
    }

    pub fn on_select(mut self, on_select: impl FnMut(&Item) + 'static) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    pub fn build(self) -> Result<Select> {
        let on_select = self.on_select.ok_or(SelectError::MissingOnSelect)?;
        Select::new(self.config, on_select)
    }
}
