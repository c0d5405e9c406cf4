// src/macros.rs

/// `String` shorthand: `s!()` is empty, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate anything string-like into one `String`.
/// `join!(base, "/", path)`
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {
        [
            ::std::convert::AsRef::<str>::as_ref(&$first)
            $(, ::std::convert::AsRef::<str>::as_ref(&$rest))+
        ]
        .concat()
    };
}
