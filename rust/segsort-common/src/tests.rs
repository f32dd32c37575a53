use crate::error::{Error, ErrorKind};

fn check_len(len: usize) -> crate::Result<()> {
    crate::verify_arg!(len, len > 0);
    Ok(())
}

#[test]
fn test_verify_arg_passes() {
    assert!(check_len(3).is_ok());
}

#[test]
fn test_verify_arg_fails_with_condition() {
    let err = check_len(0).unwrap_err();
    match err.kind() {
        ErrorKind::InvalidArgument { name, message } => {
            assert_eq!(name, "len");
            assert_eq!(message, "expected len > 0");
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
}

#[test]
fn test_invalid_format_display() {
    let err = Error::invalid_format("x1", "not an integer");
    assert_eq!(err.to_string(), "invalid format for 'x1': not an integer");
}

#[test]
fn test_unsorted_display() {
    let err = Error::unsorted(4);
    assert_eq!(err.to_string(), "sequence is not sorted at position 4");
    assert!(matches!(err.into_kind(), ErrorKind::Unsorted { position: 4 }));
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: Error = io.into();
    assert!(matches!(err.kind(), ErrorKind::Io { .. }));
}
