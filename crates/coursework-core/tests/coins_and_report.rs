//! Integration tests for the coin stash and the figure report helpers.

use coursework_core::coins::OldCoinStash;
use coursework_core::geometry::{Circle, Cube, Figure, Rectangle};
use coursework_core::report::{bounds, plot_containment, plot_figures, render_report, summarize};
use coursework_core::CourseworkError;

// ---------------------------------------------------------------------------
// OldCoinStash
// ---------------------------------------------------------------------------

#[test]
fn new_stash_is_empty() {
    let stash = OldCoinStash::new("Gustav");
    assert_eq!(stash.owner, "Gustav");
    assert_eq!((stash.riksdaler(), stash.skilling()), (0.0, 0.0));
    assert_eq!(stash.to_string(), "OldCoinStash(owner='Gustav')");
}

#[test]
fn deposit_and_withdraw() {
    let mut stash = OldCoinStash::new("Gustav");
    stash.deposit(10.0, 48.0).unwrap();
    stash.withdraw(4.0, 8.0).unwrap();
    assert_eq!(
        stash.check_balance(),
        "Coins in stash: 6 riksdaler and 40 skillingar."
    );
}

#[test]
fn negative_deposit_is_rejected() {
    let mut stash = OldCoinStash::new("Gustav");
    let err = stash.deposit(-1.0, 0.0).unwrap_err();
    assert!(matches!(err, CourseworkError::NegativeAmount { .. }));
    assert!(stash.deposit(f64::NAN, 0.0).is_err());
    assert_eq!((stash.riksdaler(), stash.skilling()), (0.0, 0.0));
}

#[test]
fn overdraw_is_checked_before_sign() {
    let mut stash = OldCoinStash::new("Gustav");
    stash.deposit(5.0, 5.0).unwrap();
    assert_eq!(
        stash.withdraw(6.0, -1.0),
        Err(CourseworkError::InsufficientFunds)
    );
    assert!(matches!(
        stash.withdraw(1.0, -1.0),
        Err(CourseworkError::NegativeWithdrawal { .. })
    ));
    assert_eq!((stash.riksdaler(), stash.skilling()), (5.0, 5.0));
}

#[test]
fn negative_withdrawal_message_mentions_withdrawing() {
    let mut stash = OldCoinStash::new("Gustav");
    stash.deposit(5.0, 5.0).unwrap();
    let message = stash.withdraw(-1.0, 0.0).unwrap_err().to_string();
    assert!(message.contains("cannot withdraw negative numbers"));
    assert!(!message.contains("depositing"));
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

fn figures() -> Vec<Figure> {
    vec![
        Circle::new(2.5, 3.0, -3.0).unwrap().into(),
        Rectangle::new(4.0, 3.0, 3.0, -3.0).unwrap().into(),
        Cube::with_side(2.0).unwrap().into(),
    ]
}

#[test]
fn summary_rows_follow_figures() {
    let rows = summarize(&figures());
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].kind, "circle");
    assert_eq!(rows[1].area, 12.0);
    assert_eq!(rows[2].volume, Some(8.0));
    assert_eq!(rows[1].volume, None);
}

#[test]
fn bounds_pad_the_outline() {
    let rect: Figure = Rectangle::new(4.0, 2.0, 0.0, 0.0).unwrap().into();
    assert_eq!(bounds(&rect, 1.0), (-3.0, 3.0, -2.0, 2.0));
}

#[test]
fn html_report_contains_table_and_plot() {
    let figures = figures();
    let plot = plot_figures(&figures, "Lab 3");
    let html = render_report("Lab 3", &figures, &plot);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>Lab 3</h1>"));
    assert!(html.contains("rectangle"));
    assert!(html.contains("12.00"));
}

#[test]
fn containment_plot_has_outline_and_two_groups() {
    let circle: Figure = Circle::with_radius(1.0).unwrap().into();
    let plot = plot_containment(&circle, &[(0.0, 0.0), (2.0, 2.0)], "Circle");
    let json = plot.to_json();
    assert!(json.contains("Inside"));
    assert!(json.contains("Outside"));
}
