use std::rc::Rc;

use cursive::{
    view::Nameable,
    views::{EditView, TextView},
};

use crate::helpers::{errorbox, get_value_from_input, set_status};

#[test]
fn test_get_value_from_input() {
    let mut siv = cursive::default();

    let ev = EditView::new()
        .content("unit test content")
        .with_name("input");

    siv.add_layer(ev);

    assert_eq!(
        Some(Rc::new(String::from("unit test content"))),
        get_value_from_input(&mut siv, "input")
    );
}

#[test]
fn get_value_from_missing_input() {
    let mut siv = cursive::default();

    assert_eq!(None, get_value_from_input(&mut siv, "input"));
}

#[test]
fn errorbox_adds_a_layer() {
    let mut siv = cursive::default();
    let layers = siv.screen().len();

    errorbox(&mut siv, &passgen::Error::InvalidPolicy);

    assert_eq!(layers + 1, siv.screen().len());
}

#[test]
fn set_status_updates_status_bar() {
    let mut siv = cursive::default();
    siv.add_layer(TextView::new("").with_name("status_bar"));

    set_status(&mut siv, "unit test status");

    siv.call_on_name("status_bar", |l: &mut TextView| {
        assert_eq!("unit test status", l.get_content().source());
    });
}
