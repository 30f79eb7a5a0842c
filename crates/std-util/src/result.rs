/// Unwrap the error of a `Result`, panicking with the expression and the
/// `Ok` value otherwise.
#[macro_export]
macro_rules! assert_err {
    ($e:expr) => {
        match $e {
            Err(e) => e,
            Ok(v) => panic!("expected `Err`; actual=Ok({:?}); expr=`{}`", v, stringify!($e)),
        }
    };
}

/// Unwrap the value of a `Result`, panicking with the expression and the
/// rendered error otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; actual=Err({}); expr=`{}`", e, stringify!($e)),
        }
    };
}
