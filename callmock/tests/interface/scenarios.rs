use callmock::{CallPattern, Mock};
use pretty_assertions::assert_eq;

#[test]
fn at_least_one_called_once() {
    let mock = Mock::<(), ()>::noop(CallPattern::AtLeast(1));

    mock.call(());

    let v = mock.verify();
    assert!(v.is_ok());
    assert_eq!("", v.message());
}

#[test]
fn none_called_once() {
    let mock = Mock::<usize, ()>::noop(CallPattern::None);

    mock.call(4);

    let v = mock.verify();
    assert!(!v.is_ok());
    assert_eq!("1 call does not match expected pattern None", v.message());
}

#[test]
fn any_number_never_called() {
    let mock = Mock::new(|x: usize| x);

    let v = mock.verify();
    assert!(v.is_ok());
    assert_eq!("", v.message());
}

#[test]
fn exactly_three_called_twice() {
    let mock = Mock::with_pattern(|x: usize| x, CallPattern::Exactly(3));

    mock.call(1);
    mock.call(2);

    let v = mock.verify();
    assert!(!v.is_ok());
    assert_eq!(
        "2 calls does not match expected pattern Exactly(3)",
        v.message()
    );
}

#[test]
fn at_least_message() {
    let mock = Mock::with_pattern(|(): ()| 0usize, 5usize..);

    mock.call(());
    mock.call(());
    mock.call(());

    assert_eq!(
        "3 calls does not match expected pattern AtLeast(5)",
        mock.verify().message()
    );
}

#[test]
fn named_mock_message() {
    let mock = Mock::<(), ()>::noop(..=1usize).named("mock_b");

    mock.call(());
    mock.call(());

    assert_eq!(
        "mock_b: 2 calls does not match expected pattern AtMost(1)",
        mock.verify().message()
    );
}

#[test]
fn verify_is_idempotent() {
    let mock = Mock::with_pattern(|x: usize| x, 2usize);

    mock.call(1);

    let first = mock.verify_at(std::panic::Location::caller());
    let second = mock.verify_at(std::panic::Location::caller());
    assert_eq!(first.is_ok(), second.is_ok());
    assert_eq!(first.message(), second.message());
    assert_eq!(1, mock.number_of_calls());
}

#[test]
fn verify_records_caller_location() {
    let mock = Mock::<(), ()>::noop(CallPattern::Exactly(1));

    let line = line!() + 1;
    let v = mock.verify();

    assert_eq!(file!(), v.location().file());
    assert_eq!(line, v.location().line());
    assert!(v.to_string().contains(file!()));
}

#[test]
fn verify_into_result() {
    let mock = Mock::<(), ()>::noop(CallPattern::None);

    assert!(mock.verify().into_result().is_ok());

    mock.call(());

    let err = mock.verify().into_result().unwrap_err();
    assert!(err.is_mismatch());
    assert!(err
        .to_string()
        .ends_with("1 call does not match expected pattern None"));
}

#[test]
#[should_panic(expected = "1 call does not match expected pattern None")]
fn verify_assert_ok() {
    let mock = Mock::<(), ()>::noop(CallPattern::None);

    mock.call(());

    mock.verify().assert_ok();
}

#[test]
fn returning_mock() {
    let mock = Mock::<usize, String>::returning("fuu".into(), CallPattern::Exactly(2));

    assert_eq!("fuu", mock.call(1));
    assert_eq!("fuu", mock.call(2));
    assert!(mock.verify().is_ok());
}

#[test]
fn panicking_stub_is_counted() {
    let mock = Mock::new(|x: usize| -> usize {
        if x == 0 {
            panic!("zero");
        }

        x
    });

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.call(0)));
    assert!(result.is_err());
    assert_eq!(1, mock.number_of_calls());

    assert_eq!(3, mock.call(3));
    assert_eq!(2, mock.number_of_calls());
}
