/// Run each test once per loader strategy against a fresh fixture.
///
/// Every listed function takes `(&Fixture, LoaderStrategy)`.
#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+
    ) => {
        mod default_loader {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    $crate::init_logging();
                    let fixture = $crate::Fixture::new().unwrap();
                    super::$f(&fixture, loadplan::core::stmt::LoaderStrategy::Default);
                }
            )*
        }

        mod joined_loader {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    $crate::init_logging();
                    let fixture = $crate::Fixture::new().unwrap();
                    super::$f(&fixture, loadplan::core::stmt::LoaderStrategy::Joined);
                }
            )*
        }
    };
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident,
        )+
    ) => {
        $crate::tests!( $(
            $( #[$attrs] )*
            $f
        ),+ );
    }
}
