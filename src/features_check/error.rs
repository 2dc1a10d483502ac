"bigint_core requires that either `std` (default) or `alloc` feature is enabled"
