use outcome::convert::*;
use outcome::{error_base, Error, OperationStatus, Outcome, TypedOutcome};

error_base! {
    struct NotFound => "not found";
}

#[test]
fn result_to_outcome_preserves_state() {
    let ok = result_to_outcome(Ok::<_, Error>(3));
    assert_eq!(ok.value(), Some(&3));

    let err = result_to_outcome(Err::<i32, _>(NotFound));
    assert!(err.error().unwrap().is::<NotFound>());
}

#[test]
fn outcome_to_result_keeps_boxed_error() {
    let outcome: Outcome<i32> = NotFound.into();
    let error = outcome_to_result(outcome).unwrap_err();

    assert_eq!(error.message(), "not found");
    assert!(outcome_to_result(Outcome::from_value(1)).is_ok());
}

#[test]
fn typed_to_open_widens_error_arm() {
    let typed: TypedOutcome<u8, Error> = TypedOutcome::Failed(Error::new("gone"));
    let open = typed_to_open(typed);
    assert_eq!(open.error().unwrap().downcast_ref::<Error>(), Some(&Error::new("gone")));

    let typed: TypedOutcome<u8, NotFound> = TypedOutcome::Success(4);
    assert_eq!(typed_to_open(typed).into_value(), Some(4));
}

#[test]
fn open_to_typed_narrows_to_concrete_error() {
    let open: Outcome<u8> = Error::new("plain").into();
    assert_eq!(open_to_typed(open), TypedOutcome::Failed(Error::new("plain")));

    let open: Outcome<u8> = NotFound.into();
    assert_eq!(open_to_typed(open), TypedOutcome::Failed(Error::new("not found")));

    assert_eq!(open_to_typed(Outcome::from_value(2u8)), TypedOutcome::Success(2));
}

#[test]
fn error_to_outcome_treats_absence_as_success() {
    let ok = error_to_outcome::<NotFound>(None);
    assert_eq!(ok.status(), OperationStatus::Success);
    assert_eq!(ok.into_value(), Some(()));

    let failed = error_to_outcome(Some(NotFound));
    assert_eq!(failed.status(), OperationStatus::Failed);
    assert_eq!(failed.into_error(), Some(NotFound));
}
