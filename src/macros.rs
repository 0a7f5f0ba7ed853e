// src/macros.rs
#[macro_export]
macro_rules! s {
    // s!() is an empty String
    () => {
        ::std::string::String::new()
    };
    // s!(x) is String::from(x): team codes, selector ids, consts
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // join!(a, b, ..): owned first piece, the rest pushed as &str
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}
