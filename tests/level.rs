//! Tests for log level functionality.

use taglog::Level;

#[test]
fn level_ordering() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
}

#[test]
fn level_display() {
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Error.to_string(), "error");
}

#[test]
fn level_labels_are_uppercase() {
    let labels: Vec<_> = Level::all().iter().map(|l| l.label()).collect();
    assert_eq!(labels, ["DEBUG", "INFO", "WARN", "ERROR"]);
}

#[test]
fn level_color_letters() {
    assert_eq!(Level::Debug.color_letter(), 'b');
    assert_eq!(Level::Info.color_letter(), 'g');
    assert_eq!(Level::Warn.color_letter(), 'y');
    assert_eq!(Level::Error.color_letter(), 'r');
}

#[test]
fn level_from_str() {
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
}

#[test]
fn level_from_str_invalid() {
    let err = "trace".parse::<Level>().unwrap_err();
    assert!(err.to_string().contains("trace"));
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}
