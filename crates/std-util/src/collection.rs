/// Asserts that a collection with an `is_empty` method is empty.
#[macro_export]
macro_rules! assert_empty {
    ($collection:expr) => {{
        let collection = &$collection;
        if !collection.is_empty() {
            panic!(
                "expected `{}` to be empty; actual={:?}",
                stringify!($collection),
                collection
            );
        }
    }};
}

/// Asserts that every item of `$sub` is contained in `$sup`.
#[macro_export]
macro_rules! assert_subset {
    ($sub:expr, $sup:expr) => {{
        let sup = &$sup;
        for item in $sub {
            if !sup.contains(item) {
                panic!(
                    "expected `{}` to be a subset of `{}`; {:?} is missing from {:?}",
                    stringify!($sub),
                    stringify!($sup),
                    item,
                    sup
                );
            }
        }
    }};
}
