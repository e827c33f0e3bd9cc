//! End-to-end kernel coverage over the public API, exercising the three
//! array types together the way a column-oriented host would.

use nanocol::kernels::{generic, numeric, string};
use nanocol::{
    BooleanArray, FillMethod, Indexed, Indexer, Int64Array, MaskedArray, NanocolError, StringArray,
};

fn sample_strings() -> StringArray {
    StringArray::from_options(&[Some("foo"), None, Some("foo"), Some("üàéµ"), Some("üàéµ")])
}

#[test]
fn string_array_metadata() {
    let arr = StringArray::from_slice(&["foo", "bar", "baz"]);
    assert_eq!(arr.len(), 3);
    assert_eq!(arr.dtype(), "string[arrow]");
    assert_eq!(arr.nbytes(), 9);
    assert_eq!(arr.null_count(), 0);
}

#[test]
fn string_factorize_round_trip() {
    let arr = sample_strings();
    let (locations, dictionary) = generic::factorize(&arr);
    assert_eq!(
        generic::to_list(&locations),
        vec![Some(0), Some(-1), Some(0), Some(1), Some(1)]
    );
    assert_eq!(
        generic::to_list(&dictionary),
        vec![Some("foo".to_string()), Some("üàéµ".to_string())]
    );

    let rebuilt = generic::from_factorized(&locations, &dictionary).unwrap();
    assert_eq!(generic::to_list(&rebuilt), generic::to_list(&arr));
}

#[test]
fn string_unique_sorts_ascending() {
    let arr = sample_strings();
    let distinct = generic::unique(&arr);
    assert_eq!(
        generic::to_list(&distinct),
        vec![Some("foo".to_string()), Some("üàéµ".to_string())]
    );
}

#[test]
fn string_case_kernels() {
    let arr = StringArray::from_options(&[Some("üàéµ"), None, Some("BAZ"), Some("foo")]);
    assert_eq!(
        generic::to_list(&string::upper(&arr)),
        vec![
            Some("ÜÀÉΜ".to_string()),
            None,
            Some("BAZ".to_string()),
            Some("FOO".to_string())
        ]
    );
    assert_eq!(
        generic::to_list(&string::lower(&string::upper(&arr))),
        vec![
            Some("üàéμ".to_string()),
            None,
            Some("baz".to_string()),
            Some("foo".to_string())
        ]
    );
    // Capitalize touches only the first codepoint; an already-uppercase
    // tail stays uppercase.
    assert_eq!(
        generic::to_list(&string::capitalize(&arr)),
        vec![
            Some("Üàéµ".to_string()),
            None,
            Some("BAZ".to_string()),
            Some("Foo".to_string())
        ]
    );
}

#[test]
fn string_predicates_with_nulls() {
    let arr = StringArray::from_options(&[Some("abc123"), Some("!!"), None, Some("")]);
    assert_eq!(
        generic::to_list(&string::is_alnum(&arr)),
        vec![Some(true), Some(false), None, Some(true)]
    );
    assert_eq!(
        generic::to_list(&string::is_space(&arr)),
        vec![Some(false), Some(false), None, Some(true)]
    );
}

#[test]
fn string_len_is_codepoints() {
    let arr = sample_strings();
    assert_eq!(
        generic::to_list(&string::str_len(&arr)),
        vec![Some(3), None, Some(3), Some(4), Some(4)]
    );
}

#[test]
fn presence_tests_across_types() {
    let arr = sample_strings();
    assert!(generic::any(&arr));
    assert!(!generic::all(&arr));

    let dense = Int64Array::from_slice(&[1, 2, 3]);
    assert!(generic::any(&dense));
    assert!(generic::all(&dense));

    let all_null = BooleanArray::from_options(&[None, None]);
    assert!(!generic::any(&all_null));
    assert!(!generic::all(&all_null));
}

#[test]
fn isna_matches_null_slots() {
    let arr = sample_strings();
    let flags = generic::isna(&arr);
    assert_eq!(
        generic::to_list(&flags),
        vec![Some(false), Some(true), Some(false), Some(false), Some(false)]
    );
}

#[test]
fn take_and_fill_pipeline() {
    let arr = Int64Array::from_options(&[Some(10), None, Some(30), None, Some(50)]);
    let taken = generic::take(&arr, &[-1, 1, 0]).unwrap();
    assert_eq!(generic::to_list(&taken), vec![Some(50), None, Some(10)]);

    let method: FillMethod = "backfill".parse().unwrap();
    let filled = generic::pad_or_backfill(&taken, method);
    assert_eq!(
        generic::to_list(&filled),
        vec![Some(50), Some(10), Some(10)]
    );

    assert_eq!(numeric::sum(&arr), Some(90));
    assert_eq!(numeric::min(&generic::dropna(&arr)), Some(10));
}

#[test]
fn take_over_strings() {
    let arr = StringArray::from_options(&[None, Some("Ab"), Some("cd")]);
    let tail = generic::take(&arr, &[-1]).unwrap();
    assert_eq!(generic::to_list(&tail), vec![Some("cd".to_string())]);

    let gathered = generic::take(&arr, &[2, 0, 1, 1]).unwrap();
    assert_eq!(
        generic::to_list(&gathered),
        vec![
            Some("cd".to_string()),
            None,
            Some("Ab".to_string()),
            Some("Ab".to_string())
        ]
    );

    assert_eq!(
        generic::take(&arr, &[5]),
        Err(NanocolError::IndexOutOfBounds { index: 5, len: 3 })
    );
}

#[test]
fn get_item_over_strings() {
    let arr = sample_strings();
    assert_eq!(
        generic::get_item(&arr, &Indexer::Int(-2)).unwrap(),
        Indexed::Scalar(Some("üàéµ".to_string()))
    );
    assert_eq!(
        generic::get_item(&arr, &Indexer::Int(1)).unwrap(),
        Indexed::Scalar(None)
    );

    match generic::get_item(
        &arr,
        &Indexer::Slice {
            start: 0,
            stop: 5,
            step: 2,
        },
    )
    .unwrap()
    {
        Indexed::Array(out) => assert_eq!(
            generic::to_list(&out),
            vec![
                Some("foo".to_string()),
                Some("foo".to_string()),
                Some("üàéµ".to_string())
            ]
        ),
        Indexed::Scalar(_) => panic!("expected array result"),
    }

    match generic::get_item(&arr, &Indexer::BoolMask(&[true, true, false, false, true])).unwrap() {
        Indexed::Array(out) => assert_eq!(
            generic::to_list(&out),
            vec![Some("foo".to_string()), None, Some("üàéµ".to_string())]
        ),
        Indexed::Scalar(_) => panic!("expected array result"),
    }
}

#[test]
fn eq_is_byte_exact_for_strings() {
    let a = StringArray::from_options(&[Some("foo"), Some("bar"), None]);
    let b = StringArray::from_options(&[Some("foo"), Some("baz"), Some("qux")]);
    let result = generic::eq(&a, &b).unwrap();
    assert_eq!(
        generic::to_list(&result),
        vec![Some(true), Some(false), None]
    );
}

#[test]
fn eq_is_generic_over_array_types() {
    let a = Int64Array::from_options(&[Some(1), None, Some(3), Some(4)]);
    let b = Int64Array::from_options(&[Some(1), Some(2), None, Some(9)]);
    let result = generic::eq(&a, &b).unwrap();
    assert_eq!(
        generic::to_list(&result),
        vec![Some(true), None, None, Some(false)]
    );
    assert_eq!(
        generic::eq(&a, &Int64Array::from_slice(&[1])),
        Err(NanocolError::SizeMismatch {
            expected: 4,
            found: 1
        })
    );

    let p = BooleanArray::from_options(&[Some(true), Some(false), None]);
    let q = BooleanArray::from_options(&[Some(true), Some(true), Some(false)]);
    assert_eq!(
        generic::to_list(&generic::eq(&p, &q).unwrap()),
        vec![Some(true), Some(false), None]
    );
}

#[test]
fn concat_across_types() {
    let joined = generic::concat(
        &StringArray::from_slice(&["a"]),
        &StringArray::from_options(&[None, Some("b")]),
    );
    assert_eq!(
        generic::to_list(&joined),
        vec![Some("a".to_string()), None, Some("b".to_string())]
    );

    let bools = generic::concat(
        &BooleanArray::from_slice(&[true, false]),
        &BooleanArray::from_options(&[None]),
    );
    assert_eq!(
        generic::to_list(&bools),
        vec![Some(true), Some(false), None]
    );
}

#[test]
fn errors_surface_from_the_public_api() {
    let arr = Int64Array::from_slice(&[1, 2]);
    assert_eq!(
        generic::take(&arr, &[5]),
        Err(NanocolError::IndexOutOfBounds { index: 5, len: 2 })
    );
    assert!(matches!(
        "nearest".parse::<FillMethod>(),
        Err(NanocolError::InvalidArgument { .. })
    ));
    assert!(matches!(
        StringArray::from_parts(vec![0, 2, 1], b"ab".to_vec(), None),
        Err(NanocolError::Construction { .. })
    ));
}

#[test]
fn display_previews_never_panic() {
    let arr = sample_strings();
    assert_eq!(
        format!("{arr}"),
        "StringArray\n[\"foo\", null, \"foo\", \"üàéµ\", \"üàéµ\"]"
    );
    let empty = StringArray::default();
    assert_eq!(format!("{empty}"), "StringArray\n[]");
}
