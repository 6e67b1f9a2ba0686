use comparables::arrays::{
    ArrayComparator, NullableRecursiveArrayComparator, NullableSparseRecursiveArrayComparator,
    RecursiveArrayComparator, SparseArrayComparator, SparseRecursiveArrayComparator,
};
use comparables::comparators::{sort_by_comparator, Comparator, NullableComparator};
use comparables::options::{ElementMode, MismatchMode, Traversal};
use comparables::{
    array, Array, ArrayComparatorOptions, Comparable, ComparisonError, Key, Ordering, Value,
};
use pretty_assertions::assert_eq;
use regex::Regex;

fn setup() {
    let _ = env_logger::builder()
        // Include all events in tests
        .filter_level(log::LevelFilter::max())
        // Ensure events are captured by `cargo test`
        .is_test(true)
        // Ignore errors initializing the logger if tests race to configure it
        .try_init();
}

#[derive(Debug)]
struct Release {
    name: &'static str,
    version: (i64, i64, i64),
    channel: Option<&'static str>,
}

impl Comparable for Release {
    fn comparison_fields(&self) -> Array {
        array![
            "version" => array![self.version.0, self.version.1, self.version.2],
            "channel" => self.channel,
        ]
    }

    fn compare_to(&self, other: &Self) -> comparables::ComparisonResult<Ordering> {
        NullableRecursiveArrayComparator::default()
            .compare_arrays(&self.comparison_fields(), &other.comparison_fields())
    }
}

#[test]
fn strict_comparators_reject_arrays_that_do_not_line_up() {
    setup();

    let cmp = ArrayComparator::default();

    let err = cmp
        .compare_arrays(&array![1, 2, 3], &array![1, 2])
        .unwrap_err();
    assert!(matches!(
        err,
        ComparisonError::UncomparableSize {
            left_len: 3,
            right_len: 2
        }
    ));

    let err = cmp
        .compare_arrays(&array![0 => 1], &array![1 => 1])
        .unwrap_err();
    assert!(matches!(
        err,
        ComparisonError::UncomparableKey {
            key: Key::Index(0),
            value: Value::Int(1)
        }
    ));
}

#[test]
fn sparse_comparators_resolve_arrays_that_do_not_line_up() {
    setup();

    let cmp = SparseArrayComparator::default();
    assert_eq!(
        cmp.compare_arrays(&array![1, 2, 3], &array![1, 2]).unwrap(),
        Ordering::Greater
    );
    assert_eq!(
        cmp.compare_arrays(&array![1, 2], &array![1, 2, 3]).unwrap(),
        Ordering::Less
    );
    assert_eq!(
        cmp.compare_arrays(&array![0 => 1], &array![1 => 1]).unwrap(),
        Ordering::Greater
    );
}

#[test]
fn nested_comparators_descend_into_arrays() {
    setup();

    assert_eq!(
        RecursiveArrayComparator::default()
            .compare_arrays(&array![1, array![2, array![3]]], &array![1, array![2, array![3]]])
            .unwrap(),
        Ordering::Equal
    );

    let cmp = SparseRecursiveArrayComparator::default();
    assert_eq!(
        cmp.compare_arrays(&array![1, array![2, array![3]]], &array![1, array![2, array![]]])
            .unwrap(),
        Ordering::Greater
    );
    assert_eq!(
        cmp.compare_arrays(
            &array![1, array![2, array![0 => 3]]],
            &array![1, array![2, array![1 => 3]]]
        )
        .unwrap(),
        Ordering::Greater
    );
}

#[test]
fn empty_arrays_are_equal_for_every_configuration() {
    setup();

    for traversal in [Traversal::Flat, Traversal::Nested] {
        for elements in [ElementMode::Default, ElementMode::Nullable] {
            for mismatch in [MismatchMode::Strict, MismatchMode::Sparse] {
                let cmp = ArrayComparatorOptions::default()
                    .with_traversal(traversal)
                    .with_elements(elements)
                    .with_mismatch(mismatch)
                    .build();

                assert_eq!(
                    cmp.compare(&array![].into(), &array![].into()).unwrap(),
                    Ordering::Equal
                );
            }
        }
    }
}

#[test]
fn error_messages_describe_the_failure() {
    setup();

    let type_regex = Regex::new(r"^Cannot compare \w+ .+ with \w+ .+$").unwrap();
    let err = RecursiveArrayComparator::default()
        .compare_arrays(&array![array![1]], &array![array!["1"]])
        .unwrap_err();
    assert!(type_regex.is_match(&err.to_string()), "got: {}", err);
    assert_eq!(err.to_string(), "Cannot compare integer 1 with string \"1\"");

    let err = ArrayComparator::default()
        .compare_arrays(&array!["name" => 1.5], &array!["other" => 1.5])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot compare float 1.5 against void, key `name` missing from right-hand side"
    );

    let err = ArrayComparator::default()
        .compare_arrays(&array![1], &array![])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot compare sparse arrays, got 1 element on left- and 0 elements on right-hand side"
    );
}

#[test]
fn nullable_comparators_order_null_before_everything_else() {
    setup();

    let mut values = vec![
        Value::from(3),
        Value::Null,
        Value::from(1),
        Value::Null,
        Value::from(2),
    ];
    sort_by_comparator(&mut values, &NullableComparator).unwrap();

    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["null", "null", "1", "2", "3"]);

    assert_eq!(
        NullableSparseRecursiveArrayComparator::default()
            .compare_arrays(&array![array![Value::Null]], &array![array![0]])
            .unwrap(),
        Ordering::Less
    );
}

#[test]
fn comparable_types_sort_with_their_natural_order() {
    setup();

    let mut releases = vec![
        Release {
            name: "stable-2",
            version: (1, 2, 0),
            channel: Some("stable"),
        },
        Release {
            name: "nightly",
            version: (1, 3, 0),
            channel: Some("nightly"),
        },
        Release {
            name: "untagged",
            version: (1, 2, 0),
            channel: None,
        },
        Release {
            name: "stable-1",
            version: (1, 1, 9),
            channel: Some("stable"),
        },
    ];

    sort_by_comparator(&mut releases, &Release::comparator()).unwrap();
    let names: Vec<&str> = releases.iter().map(|release| release.name).collect();
    assert_eq!(names, vec!["stable-1", "untagged", "stable-2", "nightly"]);

    sort_by_comparator(&mut releases, &Release::reverse_comparator()).unwrap();
    let names: Vec<&str> = releases.iter().map(|release| release.name).collect();
    assert_eq!(names, vec!["nightly", "stable-2", "untagged", "stable-1"]);

    assert!(releases[0].is_greater_than(&releases[1]));
    assert!(releases[3].is_less_than_or_equals(&releases[3]));
}

#[test]
fn objects_inside_arrays_compare_with_their_own_order() {
    setup();

    let older = Value::object(Release {
        name: "older",
        version: (0, 9, 0),
        channel: None,
    });
    let newer = Value::object(Release {
        name: "newer",
        version: (1, 0, 0),
        channel: None,
    });

    let cmp = RecursiveArrayComparator::default();
    assert_eq!(
        cmp.compare_arrays(&array![older.clone()], &array![newer.clone()])
            .unwrap(),
        Ordering::Less
    );

    let err = cmp
        .compare_arrays(&array![older], &array![Value::object(Ordering::Less)])
        .unwrap_err();
    assert!(matches!(err, ComparisonError::TypeMismatch { .. }));
}

#[test]
fn comparators_expose_the_integer_contract() {
    setup();

    let cmp = SparseArrayComparator::default();
    assert_eq!(
        cmp.compare_as_int(&array![1].into(), &array![2].into())
            .unwrap(),
        -1
    );
    assert_eq!(
        cmp.compare_as_int(&array![2].into(), &array![2].into())
            .unwrap(),
        0
    );
    assert_eq!(
        cmp.reversed()
            .compare_as_int(&array![1].into(), &array![2].into())
            .unwrap(),
        1
    );
    assert_eq!(
        SparseArrayComparator::default()
            .compare_as_int(
                &array![Value::object(Ordering::Uncomparable)].into(),
                &array![Value::object(Ordering::Less)].into()
            )
            .unwrap(),
        comparables::config::NULL_ORDERING_INT
    );
}
