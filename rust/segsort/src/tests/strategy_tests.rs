use segsort_common::error::ErrorKind;

use crate::{strategy::Strategy, verify};

#[test]
fn test_strategy_from_str() {
    assert_eq!("stack".parse::<Strategy>().unwrap(), Strategy::StackBalanced);
    assert_eq!(
        "Stack-Balanced".parse::<Strategy>().unwrap(),
        Strategy::StackBalanced
    );
    assert_eq!("kway".parse::<Strategy>().unwrap(), Strategy::KWayHeap);
    assert_eq!("heap".parse::<Strategy>().unwrap(), Strategy::KWayHeap);
    assert_eq!("block".parse::<Strategy>().unwrap(), Strategy::BlockMerge);
    for strategy in Strategy::ALL {
        assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
    }
}

#[test]
fn test_strategy_from_str_rejects_unknown() {
    let err = "quick".parse::<Strategy>().unwrap_err();
    match err.kind() {
        ErrorKind::InvalidArgument { name, message } => {
            assert_eq!(name, "strategy");
            assert!(message.contains("quick"));
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
}

#[test]
fn test_first_unsorted() {
    assert_eq!(verify::first_unsorted::<i32>(&[]), None);
    assert_eq!(verify::first_unsorted(&[1, 1, 2]), None);
    assert_eq!(verify::first_unsorted(&[1, 3, 2, 0]), Some(1));
}

#[test]
fn test_verify_sorted() {
    assert!(verify::verify_sorted(&[-3, 0, 0, 8]).is_ok());
    let err = verify::verify_sorted(&[1, 2, 5, 4]).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Unsorted { position: 2 }));
}
