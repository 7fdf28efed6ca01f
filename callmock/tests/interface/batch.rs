use callmock::{verify_all, CallPattern, Mock};
use pretty_assertions::assert_eq;

use crate::init_logging;

#[test]
fn all_met() {
    let a = Mock::<(), ()>::noop(CallPattern::Exactly(1));
    let b = Mock::new(|x: usize| x.to_string());

    a.call(());
    b.call(1);

    let report = verify_all(&[&a, &b]);

    assert!(report.is_ok());
    assert!(report.failures().is_empty());
    assert!(report.into_result().is_ok());
}

#[test]
fn collects_every_failure() {
    init_logging();

    let a = Mock::<(), ()>::noop(CallPattern::Exactly(1)).named("a");
    let b = Mock::<usize, ()>::noop(CallPattern::None).named("b");
    let c = Mock::<usize, ()>::noop(CallPattern::AnyNumber).named("c");

    b.call(1);
    c.call(2);

    let report = verify_all(&[&a, &b, &c]);

    assert!(!report.is_ok());
    assert_eq!(
        vec![
            "a: 0 calls does not match expected pattern Exactly(1)",
            "b: 1 call does not match expected pattern None",
        ],
        report
            .failures()
            .iter()
            .map(|v| v.message())
            .collect::<Vec<_>>()
    );

    let err = report.into_result().unwrap_err();
    assert!(err.is_mismatch());
    assert!(err.to_string().contains(
        "a: 0 calls does not match expected pattern Exactly(1)\nb: 1 call does not match expected pattern None"
    ));
}

#[test]
#[should_panic(expected = "1 mock(s) did not meet their expectation")]
fn assert_ok_panics() {
    let a = Mock::<(), ()>::noop(CallPattern::AtLeast(1));

    verify_all(&[&a]).assert_ok();
}
