use rand::{rngs::StdRng, SeedableRng};

use super::*;
use crate::policy::{LOWERCASE, UPPERCASE};

#[test]
fn new_form_has_no_errors_and_no_password() {
    let form = PasswordForm::new();

    assert_eq!("", form.length_input());
    assert!(!form.is_touched());
    assert_eq!(None, form.length_error());
    assert!(!form.can_generate());
    assert!(!form.is_generated());
    assert_eq!(Policy::default(), form.policy());
}

#[test]
fn errors_show_once_touched() {
    let mut form = PasswordForm::new();

    form.set_length_input("3");
    assert_eq!(Some(LengthError::TooShort), form.length_error());
    assert!(!form.can_generate());

    form.set_length_input("17");
    assert_eq!(Some(LengthError::TooLong), form.length_error());
    assert!(!form.can_generate());

    form.set_length_input("abc");
    assert_eq!(Some(LengthError::NotANumber), form.length_error());

    form.set_length_input("");
    assert_eq!(Some(LengthError::Missing), form.length_error());

    form.set_length_input("12");
    assert_eq!(None, form.length_error());
    assert!(form.can_generate());
}

#[test]
fn submitting_an_untouched_form_shows_the_error() {
    let mut form = PasswordForm::new();

    let res = form.generate();

    assert!(matches!(
        res,
        Err(Error::InvalidLength(LengthError::Missing))
    ));
    assert_eq!(Some(LengthError::Missing), form.length_error());
}

#[test]
fn generate_with_valid_input() {
    let mut form = PasswordForm::new();
    form.set_length_input("10");

    let pass = form
        .generate_with(&mut StdRng::seed_from_u64(5))
        .unwrap()
        .clone();

    assert_eq!(10, pass.len());
    assert!(pass.as_str().chars().all(|c| LOWERCASE.contains(c)));
    assert!(form.is_generated());
    assert_eq!(Some(&pass), form.password());
}

#[test]
fn uppercase_only_policy() {
    let mut form = PasswordForm::new();
    form.set_class(CharClass::Lowercase, false);
    form.set_class(CharClass::Uppercase, true);
    form.set_length_input("8");

    let pass = form.generate().unwrap();

    assert_eq!(8, pass.len());
    assert!(pass.as_str().chars().all(|c| UPPERCASE.contains(c)));
}

#[test]
fn empty_policy_blocks_generation() {
    let mut form = PasswordForm::new();
    form.set_length_input("8");
    form.toggle_class(CharClass::Lowercase);

    assert!(matches!(form.policy_error(), Some(Error::InvalidPolicy)));
    assert!(!form.can_generate());
    assert!(matches!(form.generate(), Err(Error::InvalidPolicy)));
    assert!(!form.is_generated());
}

#[test]
fn failed_generation_keeps_the_previous_password() {
    let mut form = PasswordForm::new();
    form.set_length_input("6");
    let first = form.generate().unwrap().clone();

    form.set_length_input("40");
    assert!(form.generate().is_err());

    assert_eq!(Some(&first), form.password());
}

#[test]
fn reset_restores_defaults() {
    let mut form = PasswordForm::new();
    form.set_length_input("16");
    form.set_class(CharClass::Uppercase, true);
    form.set_class(CharClass::Digits, true);
    form.set_class(CharClass::Symbols, true);
    form.set_class(CharClass::Lowercase, false);
    form.generate().unwrap();

    form.reset();

    assert_eq!("", form.length_input());
    assert!(!form.is_touched());
    assert_eq!(None, form.password());
    assert!(!form.is_generated());
    assert_eq!(
        Policy {
            lowercase: true,
            uppercase: false,
            digits: false,
            symbols: false,
        },
        form.policy()
    );
}
