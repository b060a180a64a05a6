macro_rules! debug_check_index {
    ($index:expr, $size:expr) => {
        debug_assert!(
            $index < $size,
            "index {} out of range for storage of size {}",
            $index,
            $size
        );
    };
}

macro_rules! check_eq {
    ($left:expr, $right:expr) => {
        if $left != $right { return false; }
    }
}
