// Pattern 5: Variadic Printing - Macros over C-style va_list
// Declarative macros take any number of arguments at compile time; no count
// parameter, no va_start/va_end.

use colored::Colorize;

// ============================================================================
// Example: File/Line Log Macro
// ============================================================================

// The C version stitches __FILE__ and __LINE__ into a printf format.
// file!() and line!() expand at the call site here too.
macro_rules! logln {
    ($($arg:tt)*) => {
        println!(
            "{} {}",
            format!("[{} : {}]", file!(), line!()).green(),
            format!($($arg)*)
        )
    };
}

fn log_macro_example() {
    logln!("hello from the log macro");
    logln!("{} - {}", "shall I compare thee to a summer's day", 112);
}

// ============================================================================
// Example: Counted Arguments Become a Slice
// ============================================================================

// C's printNum(n, ...) threads an explicit count through va_arg. A slice
// already knows its length.
fn print_nums(nums: &[i32]) {
    for num in nums {
        println!("{}", num);
    }
}

// Wrapper so the call site keeps the bare `1, 2, 3` shape.
macro_rules! print_nums {
    ($($num:expr),* $(,)?) => {
        print_nums(&[$($num),*])
    };
}

fn counted_args_example() {
    print_nums!(1, 2, 3, 4, 5);
}

// ============================================================================
// Example: Recursive Expansion
// ============================================================================

// Head/tail recursion over the argument list, one expansion per argument.
// Joins any Display values with single spaces.
macro_rules! joined {
    () => {
        String::new()
    };
    ($head:expr $(,)?) => {
        format!("{}", $head)
    };
    ($head:expr, $($tail:expr),+ $(,)?) => {
        format!("{} {}", $head, joined!($($tail),+))
    };
}

fn recursive_expansion_example() {
    let line = joined!("aaa", "hello there", 42);
    println!("{}", line);
}

// ============================================================================
// Example: Fold-Style Expansion
// ============================================================================

// One pattern, one repetition: the whole list expands in place, the way a
// fold expression walks its argument pack.
macro_rules! xprintln {
    ($($arg:expr),* $(,)?) => {{
        $(
            print!("{} ", $arg);
        )*
        println!();
    }};
}

fn fold_expansion_example() {
    xprintln!("aaa", "hello", "fold-style expansion", 3.14);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_mixed_types() {
        assert_eq!(joined!("aaa", 1, 2.5), "aaa 1 2.5");
    }

    #[test]
    fn test_joined_single_argument() {
        assert_eq!(joined!(7), "7");
    }

    #[test]
    fn test_joined_empty() {
        assert_eq!(joined!(), "");
    }

    #[test]
    fn test_joined_no_trailing_space() {
        let line = joined!("a", "b", "c");
        assert_eq!(line, "a b c");
        assert!(!line.ends_with(' '));
    }

    #[test]
    fn test_joined_trailing_comma() {
        assert_eq!(joined!("a", "b",), "a b");
    }

    #[test]
    fn test_print_nums_accepts_any_count() {
        print_nums!();
        print_nums!(1);
        print_nums!(1, 2, 3);
    }

    #[test]
    fn test_log_macro_forwards_format_args() {
        logln!("{} - {}", "value", 112);
    }
}

fn main() {
    println!("Pattern 5: Variadic Printing");
    println!("============================\n");

    println!("=== File/Line Log Macro ===");
    log_macro_example();
    println!();

    println!("=== Counted Arguments as Slice ===");
    counted_args_example();
    println!();

    println!("=== Recursive Expansion ===");
    recursive_expansion_example();
    println!();

    println!("=== Fold-Style Expansion ===");
    fold_expansion_example();
}
