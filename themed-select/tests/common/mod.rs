#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use themed_select::{Item, Select, SelectConfig};

pub fn categories() -> Vec<Item> {
    (1..=5)
        .map(|i| Item::new(format!("c{i}"), format!("Category{i}")))
        .collect()
}

pub fn category(i: usize) -> Item {
    Item::new(format!("c{i}"), format!("Category{i}"))
}

/// Select over `categories()` that records every item handed to `on_select`.
pub fn recording_select(config: SelectConfig) -> (Select, Rc<RefCell<Vec<Item>>>) {
    let picks = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&picks);
    let config = SelectConfig {
        items: categories(),
        ..config
    };
    let select = Select::new(config, move |item: &Item| sink.borrow_mut().push(item.clone()))
        .expect("valid config");
    (select, picks)
}
