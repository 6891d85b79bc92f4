use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tallymock::*;

use crate::test_objects::*;

#[test]
fn verify_without_params() {
    let test_mock = TestMock::default();

    verify(&test_mock, never()).without_params();

    test_mock.without_params();
    verify(&test_mock, exactly(1)).without_params();

    test_mock.without_params();
    verify(&test_mock, exactly(2)).without_params();
}

#[test]
#[should_panic(expected = "1 is not exactly 0 at tests/it/verify.rs")]
fn verify_never_fails_after_one_call() {
    let test_mock = TestMock::default();

    test_mock.without_params();
    verify(&test_mock, never()).without_params();
}

#[test]
fn verify_with_primitive_param() {
    let test_mock = TestMock::default();

    verify(&test_mock, never()).with_single_param(17.4);

    test_mock.with_single_param(17.4);
    verify(&test_mock, exactly(1)).with_single_param(17.4);
    verify(&test_mock, never()).with_single_param(17.5);

    test_mock.with_single_param(17.4);
    verify(&test_mock, exactly(2)).with_single_param(17.4);
}

#[test]
fn verify_distinguishes_numeric_types() {
    let test_mock = TestMock::default();

    test_mock.with_single_param(174_i32);
    verify(&test_mock, exactly(1)).with_single_param(174_i32);
    verify(&test_mock, never()).with_single_param(174_i64);
    verify(&test_mock, never()).with_single_param(174_u32);
}

#[test]
fn verify_with_ordered_param() {
    let test_mock = TestMock::default();

    verify(&test_mock, never()).with_single_param(vec!["A", "B", "C"]);

    test_mock.with_single_param(vec!["A", "B", "C"]);
    verify(&test_mock, exactly(1)).with_single_param(vec!["A", "B", "C"]);
    verify(&test_mock, never()).with_single_param(vec!["C", "B", "A"]);

    test_mock.with_single_param(vec!["A", "B", "C"]);
    verify(&test_mock, exactly(2)).with_single_param(vec!["A", "B", "C"]);
}

#[test]
fn verify_with_tuple_param() {
    let test_mock = TestMock::default();

    test_mock.with_single_param((174, "April"));
    verify(&test_mock, exactly(1)).with_single_param((174, "April"));
    verify(&test_mock, never()).with_single_param(("April", 174));
}

#[test]
fn verify_with_set_param() {
    let test_mock = TestMock::default();
    let test_set: HashSet<&str> = ["A", "B", "C"].into_iter().collect();
    let another_test_set: HashSet<&str> = ["C", "B", "A"].into_iter().collect();

    verify(&test_mock, never()).with_single_param(&test_set);
    verify(&test_mock, never()).with_single_param(&another_test_set);

    test_mock.with_single_param(&test_set);
    verify(&test_mock, exactly(1)).with_single_param(&test_set);
    verify(&test_mock, exactly(1)).with_single_param(&another_test_set);

    test_mock.with_single_param(&another_test_set);
    verify(&test_mock, exactly(2)).with_single_param(&test_set);
    verify(&test_mock, exactly(2)).with_single_param(&another_test_set);
}

#[test]
fn verify_with_dictionary_param() {
    let test_mock = TestMock::default();
    let test_dict = HashMap::from([(1, "A"), (2, "B"), (3, "C")]);
    let another_test_dict = HashMap::from([(1, "A"), (3, "C"), (2, "B")]);

    verify(&test_mock, never()).with_single_param(&test_dict);
    verify(&test_mock, never()).with_single_param(&another_test_dict);

    test_mock.with_single_param(&test_dict);
    verify(&test_mock, exactly(1)).with_single_param(&test_dict);
    verify(&test_mock, exactly(1)).with_single_param(&another_test_dict);

    test_mock.with_single_param(&another_test_dict);
    verify(&test_mock, exactly(2)).with_single_param(&test_dict);
    verify(&test_mock, exactly(2)).with_single_param(&another_test_dict);
}

#[test]
fn verify_with_enum_param() {
    let test_mock = TestMock::default();

    verify(&test_mock, never()).with_single_param(TestEnum::FirstValue);
    verify(&test_mock, never()).with_single_param(AnotherTestEnum::FirstValue);

    test_mock.with_single_param(TestEnum::FirstValue);
    verify(&test_mock, exactly(1)).with_single_param(TestEnum::FirstValue);
    verify(&test_mock, never()).with_single_param(AnotherTestEnum::FirstValue);

    verify(&test_mock, never()).with_single_param(TestEnum::SecondValue(1));
    verify(&test_mock, never()).with_single_param(TestEnum::SecondValue(2));

    test_mock.with_single_param(TestEnum::SecondValue(1));
    verify(&test_mock, exactly(1)).with_single_param(TestEnum::SecondValue(1));
    verify(&test_mock, never()).with_single_param(TestEnum::SecondValue(2));
}

#[test]
fn verify_with_struct_param() {
    let test_mock = TestMock::default();

    verify(&test_mock, never()).with_single_param(TestStruct { value: 17.4 });

    test_mock.with_single_param(TestStruct { value: 17.4 });
    verify(&test_mock, exactly(1)).with_single_param(TestStruct { value: 17.4 });

    test_mock.with_single_param(TestStruct { value: 17.4 });
    verify(&test_mock, exactly(2)).with_single_param(TestStruct { value: 17.4 });
}

#[test]
fn verify_with_reference_typed_param() {
    let test_mock = TestMock::default();
    let test_class = Arc::new(TestClass { value: 17.4 });
    let another_test_class = Arc::new(TestClass { value: 17.4 });

    verify(&test_mock, never()).with_single_param(&test_class);
    verify(&test_mock, never()).with_single_param(&another_test_class);

    test_mock.with_single_param(&test_class);
    verify(&test_mock, exactly(1)).with_single_param(&test_class);
    verify(&test_mock, exactly(1)).with_single_param(test_class.clone());
    verify(&test_mock, never()).with_single_param(&another_test_class);

    test_mock.with_single_param(&another_test_class);
    verify(&test_mock, exactly(1)).with_single_param(&test_class);
    verify(&test_mock, exactly(1)).with_single_param(&another_test_class);
}

#[test]
fn verify_with_by_address_param() {
    let test_mock = TestMock::default();
    let first = TestClass { value: 17.4 };
    let second = TestClass { value: 17.4 };

    test_mock.with_single_param(ByAddress(&first));
    verify(&test_mock, exactly(1)).with_single_param(ByAddress(&first));
    verify(&test_mock, never()).with_single_param(ByAddress(&second));
}

#[test]
fn verify_with_variadic_param() {
    let test_mock = TestMock::default();

    verify(&test_mock, never()).with_variadic_param(&["A", "B", "C"]);

    test_mock.with_variadic_param(&["A", "B", "C"]);
    verify(&test_mock, exactly(1)).with_variadic_param(&["A", "B", "C"]);
    verify(&test_mock, never()).with_variadic_param(&["C", "B", "A"]);

    test_mock.with_variadic_param(&["A", "B", "C"]);
    verify(&test_mock, exactly(2)).with_variadic_param(&["A", "B", "C"]);
}

#[test]
fn verify_with_multiple_params() {
    let test_mock = TestMock::default();

    test_mock.with_multiple_params("A", 1);
    verify(&test_mock, exactly(1)).with_multiple_params("A", 1);
    verify(&test_mock, never()).with_multiple_params("A", 2);
    verify(&test_mock, never()).with_multiple_params(1, "A");
}

#[test]
fn verify_with_optional_param() {
    let test_mock = TestMock::default();

    test_mock.with_optional_param(None::<i32>);
    verify(&test_mock, exactly(1)).with_optional_param(None::<i32>);
    verify(&test_mock, never()).with_optional_param(Some(0));
}

#[test]
fn verify_with_frequency_ranges() {
    let test_mock = TestMock::default();

    for _ in 0..3 {
        test_mock.without_params();
    }

    verify(&test_mock, at_least(3)).without_params();
    verify(&test_mock, at_most(3)).without_params();
    verify(&test_mock, more_than(2)).without_params();
    verify(&test_mock, less_than(4)).without_params();
}

#[test]
fn verification_is_not_counted_as_a_call() {
    let test_mock = TestMock::default();

    verify(&test_mock, never()).without_params();
    verify(&test_mock, never()).without_params();

    test_mock.without_params();
    verify(&test_mock, exactly(1)).without_params();
}

#[test]
fn failed_verifications_are_recorded_with_location() {
    let asserter = RecordingAsserter::new();
    let test_mock = TestMock::with_asserter(asserter.clone());

    test_mock.with_single_param(1);
    verify(&test_mock, exactly(2)).with_single_param(1);
    let line = line!() - 1;
    verify(&test_mock, exactly(1)).with_single_param(1);

    let failures = asserter.take_failures();
    assert_eq!(1, failures.len());
    assert!(failures[0]
        .message
        .ends_with("TestMock::with_single_param: 1 is not exactly 2"));
    assert_eq!("tests/it/verify.rs", failures[0].location.file);
    assert_eq!(line, failures[0].location.line);
}

#[test]
fn mocks_do_not_share_registers() {
    let first = TestMock::default();
    let second = TestMock::default();

    first.without_params();

    verify(&first, exactly(1)).without_params();
    verify(&second, never()).without_params();
}
