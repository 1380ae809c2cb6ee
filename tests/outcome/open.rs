use outcome::{error_base, Error, ErrorBase, ErrorLike, OperationStatus, Outcome, PartsError};
use std::fmt;

error_base! {
    struct TestError => "Test error";
}

#[derive(Debug, PartialEq)]
struct Timeout;

impl ErrorBase for Timeout {
    const MESSAGE: &'static str = "operation timed out";
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::MESSAGE)
    }
}

#[derive(Debug)]
struct RateLimited {
    retry_after: u32,
}

impl ErrorLike for RateLimited {
    fn message(&self) -> &str {
        "rate limited"
    }
}

#[test]
fn from_value_creates_success_outcome() {
    let outcome = Outcome::from_value("Test value");

    assert_eq!(outcome.status(), OperationStatus::Success);
    assert!(outcome.is_success());
    assert!(!outcome.is_failed());
    assert_eq!(outcome.value(), Some(&"Test value"));
    assert!(outcome.error().is_none());
}

#[test]
fn from_error_creates_failed_outcome() {
    let outcome: Outcome<&str> = Outcome::from_error(Error::new("Test error"));

    assert_eq!(outcome.status(), OperationStatus::Failed);
    assert!(!outcome.is_success());
    assert!(outcome.is_failed());
    assert!(outcome.value().is_none());
    let error = outcome.error().unwrap();
    assert_eq!(error.downcast_ref::<Error>(), Some(&Error::new("Test error")));
}

#[test]
fn pair_destructure_on_success() {
    let (value, error) = Outcome::from_value("Test value").into_parts();

    assert_eq!(value, Some("Test value"));
    assert!(error.is_none());
}

#[test]
fn pair_destructure_on_failure() {
    let outcome: Outcome<&str> = Error::new("Test error").into();
    let (value, error) = outcome.into_parts();

    assert!(value.is_none());
    assert_eq!(error.unwrap().message(), "Test error");
}

#[test]
fn triple_destructure_on_success() {
    let (status, value, error) = Outcome::from_value("ok").into_status_parts();

    assert_eq!(status, OperationStatus::Success);
    assert_eq!(value, Some("ok"));
    assert!(error.is_none());
}

#[test]
fn triple_destructure_on_failure() {
    let outcome: Outcome<&str> = Error::new("Test error").into();
    let (status, value, error) = outcome.into_status_parts();

    assert_eq!(status, OperationStatus::Failed);
    assert!(value.is_none());
    assert_eq!(error.unwrap().message(), "Test error");
}

#[test]
fn tuple_conversions_match_destructuring() {
    let pair: (Option<i32>, Option<Box<dyn ErrorLike>>) = Outcome::from_value(3i32).into();
    assert_eq!(pair.0, Some(3));
    assert!(pair.1.is_none());

    let triple: (OperationStatus, Option<i32>, Option<Box<dyn ErrorLike>>) =
        Outcome::<i32>::from(Error::new("bad")).into();
    assert_eq!(triple.0, OperationStatus::Failed);
    assert!(triple.1.is_none());
    assert_eq!(triple.2.unwrap().message(), "bad");
}

#[test]
fn as_parts_borrows_both_sides() {
    let outcome = Outcome::from_value(String::from("kept"));
    let (value, error) = outcome.as_parts();

    assert_eq!(value.map(String::as_str), Some("kept"));
    assert!(error.is_none());
    assert!(outcome.is_success());
}

#[test]
fn error_converts_at_return_boundary() {
    fn generate() -> Outcome<String> {
        Error::new("Test error").into()
    }

    let outcome = generate();
    assert!(outcome.is_failed());
    assert!(outcome.value().is_none());
    assert_eq!(outcome.message(), Some("Test error"));
}

#[test]
fn named_error_converts_at_return_boundary() {
    fn generate() -> Outcome<String> {
        TestError.into()
    }

    let outcome = generate();
    assert!(outcome.is_failed());
    assert!(outcome.value().is_none());
    let error = outcome.error().unwrap();
    assert!(error.is::<TestError>());
    assert_eq!(error.downcast_ref::<TestError>(), Some(&TestError));
}

#[test]
fn custom_error_like_is_recoverable_by_type() {
    let outcome: Outcome<()> = Outcome::from_error(RateLimited { retry_after: 30 });
    let error = outcome.error().unwrap();

    assert_eq!(error.message(), "rate limited");
    assert!(!error.is::<Error>());
    assert_eq!(error.downcast_ref::<RateLimited>().map(|e| e.retry_after), Some(30));
}

#[test]
fn from_value_with_error_type_is_still_a_success() {
    let outcome = Outcome::from_value(Error::new("payload"));

    assert!(outcome.is_success());
    assert_eq!(outcome.into_value(), Some(Error::new("payload")));
}

#[test]
fn from_boxed_error_keeps_the_box() {
    let boxed: Box<dyn ErrorLike> = Box::new(TestError);
    let outcome: Outcome<u8> = Outcome::from_boxed_error(boxed);

    assert_eq!(outcome.message(), Some("Test error"));
    assert!(outcome.into_error().unwrap().is::<TestError>());
}

#[test]
fn result_conversions_preserve_state() {
    let ok: Outcome<i32> = Ok::<_, Error>(5).into();
    assert_eq!(ok.value(), Some(&5));

    let err: Outcome<i32> = Err::<i32, Error>(Error::new("boom")).into();
    assert_eq!(err.message(), Some("boom"));

    let back: Result<i32, Box<dyn ErrorLike>> = err.into();
    assert_eq!(back.unwrap_err().message(), "boom");
}

#[test]
fn from_parts_rejects_missing_or_duplicate_sides() {
    let missing = Outcome::<i32>::from_parts(None, None);
    assert_eq!(missing.unwrap_err(), PartsError::MissingBoth);

    let both = Outcome::<i32>::from_parts(Some(1), Some(Box::new(Error::new("x"))));
    assert_eq!(both.unwrap_err(), PartsError::BothPresent);

    let failed = Outcome::<i32>::from_parts(None, Some(Box::new(TestError))).unwrap();
    assert_eq!(failed.message(), Some("Test error"));
}

#[test]
fn from_parts_reverses_into_parts() {
    let (value, error) = Outcome::from_value(9).into_parts();
    let rebuilt = Outcome::from_parts(value, error).unwrap();

    assert_eq!(rebuilt.into_value(), Some(9));
}

#[test]
fn map_and_and_then_only_touch_success() {
    let chained = Outcome::from_value(4)
        .map(|x| x * 2)
        .and_then(|x| if x == 8 { Outcome::from_value(x + 1) } else { TestError.into() });
    assert_eq!(chained.into_value(), Some(9));

    let failed: Outcome<i32> = TestError.into();
    let mut called = false;
    let mapped = failed.map(|x| {
        called = true;
        x + 1
    });
    assert!(!called);
    assert_eq!(mapped.message(), Some("Test error"));
}

#[test]
fn or_else_recovers_from_failure() {
    let failed: Outcome<i32> = Error::new("missing").into();
    let recovered = failed.or_else(|error| {
        assert_eq!(error.message(), "missing");
        Outcome::from_value(0)
    });

    assert_eq!(recovered.into_value(), Some(0));
}

#[test]
fn value_or_falls_back_on_failure() {
    let failed: Outcome<i32> = Error::new("missing").into();
    assert_eq!(failed.value_or(7), 7);

    let failed: Outcome<usize> = Error::new("four").into();
    assert_eq!(failed.value_or_else(|error| error.message().len()), 4);

    assert_eq!(Outcome::from_value(1).value_or(7), 1);
}

#[test]
fn inspect_error_sees_failures_only() {
    let mut seen = Vec::new();

    let _ = Outcome::from_value(1).inspect_error(|e| seen.push(e.message().to_string()));
    let _ = Outcome::<i32>::from(Error::new("bad")).inspect_error(|e| seen.push(e.message().to_string()));

    assert_eq!(seen, vec!["bad".to_string()]);
}

#[test]
fn collect_stops_at_first_failure() {
    let all: Outcome<Vec<i32>> = (1..=3).map(Outcome::from_value).collect();
    assert_eq!(all.into_value(), Some(vec![1, 2, 3]));

    let mut visited = 0;
    let partial: Outcome<Vec<i32>> = [
        Outcome::from_value(1),
        Outcome::from(Error::new("first")),
        Outcome::from(Error::new("second")),
    ]
    .into_iter()
    .inspect(|_| visited += 1)
    .collect();

    assert_eq!(partial.message(), Some("first"));
    assert_eq!(visited, 2);
}

#[test]
fn error_displays_as_message() {
    let outcome: Outcome<()> = TestError.into();

    assert_eq!(outcome.error().unwrap().to_string(), "Test error");
    assert_eq!(format!("{}", outcome.into_error().unwrap()), "Test error");
}

#[test]
fn hand_written_error_base_converts_at_return_boundary() {
    fn generate() -> Outcome<u8> {
        Timeout.into()
    }

    let outcome = generate();
    assert!(outcome.is_failed());
    assert!(outcome.value().is_none());
    assert_eq!(outcome.message(), Some("operation timed out"));
    assert_eq!(outcome.error().unwrap().downcast_ref::<Timeout>(), Some(&Timeout));
}

#[test]
fn hand_written_error_base_displays_its_message() {
    assert_eq!(Timeout.to_string(), Timeout::MESSAGE);
    assert_eq!(Timeout.message(), "operation timed out");

    let outcome: Outcome<()> = Timeout.into();
    assert_eq!(outcome.into_error().unwrap().to_string(), "operation timed out");
}
