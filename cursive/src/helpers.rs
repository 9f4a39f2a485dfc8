/*  Passgen - a simple password generator
    Copyright (C) 2026 The Passgen developers

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::rc::Rc;

use cursive::{
    event::Key,
    views::{Dialog, EditView, OnEventView, TextView},
    Cursive,
};

pub fn errorbox(ui: &mut Cursive, err: &passgen::Error) {
    let text = match err {
        passgen::Error::Clipboard(err) => format!("Couldn't reach the clipboard: {err}"),
        _ => format!("{err}"),
    };

    let d = Dialog::around(TextView::new(text))
        .dismiss_button("Ok")
        .title("Error");

    let ev = OnEventView::new(d).on_event(Key::Esc, |s| {
        s.pop_layer();
    });

    ui.add_layer(ev);
}

pub fn get_value_from_input(s: &mut Cursive, input_name: &str) -> Option<Rc<String>> {
    s.call_on_name(input_name, |e: &mut EditView| e.get_content())
}

pub fn set_status(ui: &mut Cursive, message: &str) {
    ui.call_on_name("status_bar", |l: &mut TextView| {
        l.set_content(message);
    });
}

#[cfg(test)]
#[path = "tests/helpers.rs"]
mod helpers_tests;
