use std::io::Cursor;

use budget_assistant::{
    cli::{output::Styler, run_session},
    config::Settings,
    init,
    prompt::{Console, ScriptSource},
};

#[test]
fn session_smoke() {
    init();

    let input = "3000\n3\nRent\n1200\nFood\n400\nFun\n0\nFood\n120.5\nFun\n30\nCoffee\n9.5\ndone\n";
    let mut console = Console::new(
        ScriptSource::new(Cursor::new(input)),
        Vec::new(),
        Styler::plain(),
    );

    let summary = run_session(&mut console, &Settings::default()).expect("session completes");
    assert_eq!(summary.total_planned, 1600.0);
    assert_eq!(summary.total_spent, 160.0);
    assert_eq!(summary.remaining, 2840.0);
    assert_eq!(summary.categories.len(), 3);
    assert!(summary.any_overage, "Fun was planned at zero");

    let text = String::from_utf8(console.into_output()).expect("utf8 transcript");
    assert!(text.contains("  WARNING: Fun over budget by $30.00"));
    assert!(text.contains("Uncategorized         (no plan) $       9.50"));
}
