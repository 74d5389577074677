/// Joins class-name fragments with a single space.
///
/// Accepts anything implementing [`ClassFragment`](crate::common::ClassFragment):
/// string slices, owned strings, `Option`s of those, and `(fragment, enabled)`
/// pairs. Empty, absent and disabled fragments are skipped.
///
/// ```
/// use partify_docs::clsx;
///
/// let wide = true;
/// assert_eq!(clsx!("col", ("col--4", wide), None::<&str>), "col col--4");
/// ```
#[macro_export]
macro_rules! clsx {
    ($($fragment:expr),* $(,)?) => {{
        let mut classes = ::std::string::String::new();
        $(
            $crate::common::ClassFragment::append_to(&$fragment, &mut classes);
        )*
        classes
    }};
}
