//! Turns a build with neither `std` nor `alloc` into a readable compile error
//! instead of a wall of unresolved `alloc::` paths.

// The error file is not valid Rust on purpose; rustfmt must not try to parse it.
macro_rules! hide_from_rustfmt {
    ($mod:item) => {
        $mod
    };
}

hide_from_rustfmt! {
    mod error;
}
