pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Returns an `InvalidArgument` error from the enclosing function unless the
/// predicate holds. The error names the argument and quotes the predicate.
#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let holds = $expr;
        $crate::result::verify_arg(holds, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        Err(invalid_arg(name, condition))
    }
}

#[cold]
fn invalid_arg(name: &str, condition: &str) -> crate::error::Error {
    crate::error::Error::invalid_arg(name, format!("expected {condition}"))
}
