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

use std::{
    path::PathBuf,
    process,
    sync::{Arc, Mutex},
    time::Duration,
};

use cursive::{
    direction::Orientation,
    event::{Event, Key},
    traits::*,
    views::{Button, Checkbox, Dialog, DummyView, EditView, LinearLayout, TextView},
    Cursive,
};
use passgen::{
    clipboard::Clipboard,
    settings::{self, Settings},
    CharClass, Error, PasswordForm,
};

mod helpers;

type FormType = Arc<Mutex<PasswordForm>>;

/// Runs `f` with the form locked, errors are shown in a dialog.
fn with_form<F>(ui: &mut Cursive, form: &FormType, f: F)
where
    F: FnOnce(&mut Cursive, &mut PasswordForm) -> passgen::Result<()>,
{
    let res = match form.lock() {
        Ok(mut form) => f(ui, &mut *form),
        Err(err) => Err(err.into()),
    };

    if let Err(err) = res {
        helpers::errorbox(ui, &err);
    }
}

/// Copies the form state into the views.
fn refresh(ui: &mut Cursive, form: &PasswordForm) {
    let length_error = form
        .length_error()
        .map(|err| err.to_string())
        .unwrap_or_default();
    ui.call_on_name("length_error", |l: &mut TextView| {
        l.set_content(length_error);
    });

    let policy_error = form
        .policy_error()
        .map(|err| err.to_string())
        .unwrap_or_default();
    ui.call_on_name("policy_error", |l: &mut TextView| {
        l.set_content(policy_error);
    });

    let can_generate = form.can_generate();
    ui.call_on_name("generate", |b: &mut Button| {
        b.set_enabled(can_generate);
    });

    let (title, password) = match form.password() {
        Some(p) => ("Results:", p.as_str().to_owned()),
        None => ("", String::new()),
    };
    ui.call_on_name("result_title", |l: &mut TextView| {
        l.set_content(title);
    });
    ui.call_on_name("password", |l: &mut TextView| {
        l.set_content(password);
    });
}

fn length_changed(ui: &mut Cursive, form: &FormType, content: &str) {
    with_form(ui, form, |ui, form| {
        form.set_length_input(content);
        refresh(ui, form);
        Ok(())
    });
}

fn class_toggled(ui: &mut Cursive, form: &FormType, class: CharClass, checked: bool) {
    with_form(ui, form, |ui, form| {
        form.set_class(class, checked);
        refresh(ui, form);
        Ok(())
    });
}

fn generate(ui: &mut Cursive, form: &FormType) {
    with_form(ui, form, |ui, form| {
        if let Some(content) = helpers::get_value_from_input(ui, "length") {
            form.set_length_input(&content);
        }

        let res = form.generate().map(|_| ());
        refresh(ui, form);

        match res {
            Ok(()) => {
                helpers::set_status(ui, "Password generated, ctrl-y copies it");
                Ok(())
            }
            // already shown next to the fields
            Err(Error::InvalidLength(_)) | Err(Error::InvalidPolicy) => Ok(()),
            Err(err) => Err(err),
        }
    });
}

fn reset(ui: &mut Cursive, form: &FormType) {
    with_form(ui, form, |ui, form| {
        form.reset();

        ui.call_on_name("length", |e: &mut EditView| {
            e.set_content("");
        });
        let policy = form.policy();
        for class in CharClass::ALL {
            let enabled = policy.includes(class);
            ui.call_on_name(class.name(), |c: &mut Checkbox| {
                c.set_checked(enabled);
            });
        }

        refresh(ui, form);
        helpers::set_status(ui, "");
        Ok(())
    });
}

fn copy(ui: &mut Cursive, form: &FormType, clipboard: &Clipboard) {
    with_form(ui, form, |ui, form| {
        let password = match form.password() {
            Some(p) => p,
            None => return Ok(()),
        };

        clipboard.copy(password.as_str())?;

        let timeout = clipboard.timeout();
        if timeout.is_zero() {
            helpers::set_status(ui, "Copied password to copy buffer");
        } else {
            helpers::set_status(
                ui,
                &format!(
                    "Copied password to copy buffer for {} seconds",
                    timeout.as_secs()
                ),
            );
        }
        Ok(())
    });
}

fn class_row(form: &FormType, class: CharClass, enabled: bool) -> LinearLayout {
    let checkbox = Checkbox::new()
        .with_checked(enabled)
        .on_change({
            let form = form.clone();
            move |ui: &mut Cursive, checked| class_toggled(ui, &form, class, checked)
        })
        .with_name(class.name());

    LinearLayout::horizontal()
        .child(TextView::new(class.label()).full_width())
        .child(checkbox)
}

fn build_form(
    form: &FormType,
    settings: &Settings,
    clipboard: &Arc<Clipboard>,
) -> LinearLayout {
    let policy = form.lock().map(|f| f.policy()).unwrap_or_default();

    let length_input = EditView::new()
        .max_content_width(2)
        .on_edit({
            let form = form.clone();
            move |ui: &mut Cursive, content, _| length_changed(ui, &form, content)
        })
        .on_submit({
            let form = form.clone();
            move |ui: &mut Cursive, _| generate(ui, &form)
        })
        .with_name("length")
        .fixed_width(6);

    let mut fields = LinearLayout::new(Orientation::Vertical)
        .child(
            LinearLayout::horizontal()
                .child(
                    TextView::new(format!("Password Length (Eg. {})", settings.length_hint))
                        .full_width(),
                )
                .child(length_input),
        )
        .child(TextView::new("").with_name("length_error"))
        .child(DummyView);

    for class in CharClass::ALL {
        fields.add_child(class_row(form, class, policy.includes(class)));
    }

    let buttons = LinearLayout::horizontal()
        .child(
            Button::new("Generate Password", {
                let form = form.clone();
                move |ui: &mut Cursive| generate(ui, &form)
            })
            .disabled()
            .with_name("generate"),
        )
        .child(DummyView)
        .child(Button::new("Reset", {
            let form = form.clone();
            move |ui: &mut Cursive| reset(ui, &form)
        }));

    let fields = fields
        .child(TextView::new("").with_name("policy_error"))
        .child(buttons);

    let results = LinearLayout::vertical()
        .child(TextView::new("").with_name("result_title"))
        .child(TextView::new("").with_name("password"))
        .child(Button::new("Copy", {
            let form = form.clone();
            let clipboard = clipboard.clone();
            move |ui: &mut Cursive| copy(ui, &form, &clipboard)
        }));

    LinearLayout::new(Orientation::Vertical)
        .child(Dialog::around(fields).title("Password Generator"))
        .child(Dialog::around(results))
        .child(
            LinearLayout::new(Orientation::Horizontal)
                .child(TextView::new("ctrl-y: Copy | ctrl-r: Reset | esc: Quit | "))
                .child(TextView::new("").with_name("status_bar"))
                .full_width(),
        )
}

fn load_settings() -> passgen::Result<Settings> {
    let home = std::env::var("HOME").ok().map(PathBuf::from);
    let xdg_config_home = std::env::var("XDG_CONFIG_HOME").ok().map(PathBuf::from);
    let clipboard_timeout = std::env::var("PASSGEN_CLIPBOARD_TIMEOUT").ok();

    settings::load_settings(&clipboard_timeout, &home, &xdg_config_home)
}

fn help() {
    println!("A password generator that samples from a configurable set of character classes.");
    println!();
    println!("Usage: passgen-cursive [-h|--help]");
    println!();
    println!("Settings are read from $XDG_CONFIG_HOME/passgen/settings.toml, the clipboard");
    println!("timeout can be overridden with PASSGEN_CLIPBOARD_TIMEOUT.");
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => (),
        2 => {
            if args[1] == "-h" || args[1] == "--help" {
                help();
                process::exit(0);
            } else {
                eprintln!("Unknown argument, usage: passgen-cursive [-h|--help]");
                process::exit(1);
            }
        }
        _ => {
            eprintln!("Unknown argument, usage: passgen-cursive [-h|--help]");
            process::exit(1);
        }
    }

    let settings = match load_settings() {
        Ok(s) => s,
        Err(err) => {
            eprintln!("Error {err}");
            process::exit(1);
        }
    };

    let form: FormType = Arc::new(Mutex::new(PasswordForm::new()));

    let mut ui = cursive::default();

    if let Err(err) = ui.load_toml(include_str!("../res/style.toml")) {
        eprintln!("Error loading theme {:?}", err);
        process::exit(1);
    }

    let clipboard = Arc::new(Clipboard::system(Duration::from_secs(
        settings.clipboard_timeout,
    )));
    ui.add_global_callback(Event::CtrlChar('y'), {
        let form = form.clone();
        let clipboard = clipboard.clone();
        move |ui: &mut Cursive| copy(ui, &form, &clipboard)
    });
    ui.add_global_callback(Event::CtrlChar('r'), {
        let form = form.clone();
        move |ui: &mut Cursive| reset(ui, &form)
    });
    ui.add_global_callback(Event::Key(Key::Esc), |s| s.quit());

    ui.add_layer(build_form(&form, &settings, &clipboard));

    ui.run();
}

#[cfg(test)]
#[path = "tests/main.rs"]
mod main_tests;
