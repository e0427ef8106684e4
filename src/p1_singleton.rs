// Pattern 1: Singleton - Eager and Lazy Initialization
// A type restricted to one live instance, reached through a global accessor.

use std::sync::OnceLock;

use colored::Colorize;
use lazy_static::lazy_static;

// ============================================================================
// Example: Eager Singleton - Ready Before First Use
// ============================================================================

// The classic eager singleton exists before main runs. Rust has no pre-main
// constructors; the closest rendering is a lazy_static global touched as the
// program's first statement.

pub struct BootConfig {
    value: i32,
}

impl BootConfig {
    fn new() -> Self {
        println!("eager singleton constructed");
        BootConfig { value: 99 }
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

lazy_static! {
    static ref BOOT_CONFIG: BootConfig = BootConfig::new();
}

// No Clone, no public constructor: the static is the only instance, and
// callers only ever see &'static BootConfig.
fn boot_config() -> &'static BootConfig {
    &BOOT_CONFIG
}

fn eager_example() {
    let first = boot_config();
    let second = boot_config();

    println!("eager value: {}", first.value());
    println!(
        "same instance: {}",
        format!("{}", std::ptr::eq(first, second)).green()
    );
}

// ============================================================================
// Example: Lazy Singleton - Constructed on First Access
// ============================================================================

pub struct RuntimeConfig {
    value: i32,
}

impl RuntimeConfig {
    pub fn global() -> &'static RuntimeConfig {
        static INSTANCE: OnceLock<RuntimeConfig> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            // Runs exactly once, on whichever access gets here first.
            println!("lazy singleton constructed");
            RuntimeConfig { value: 99 }
        })
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

fn lazy_example() {
    let first = RuntimeConfig::global();
    let second = RuntimeConfig::global();

    println!("lazy value: {}", first.value());
    println!(
        "same instance: {}",
        format!("{}", std::ptr::eq(first, second)).green()
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eager_identity() {
        let first = boot_config();
        let second = boot_config();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_eager_value() {
        assert_eq!(boot_config().value(), 99);
    }

    #[test]
    fn test_lazy_identity() {
        let first = RuntimeConfig::global();
        let second = RuntimeConfig::global();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_lazy_value() {
        assert_eq!(RuntimeConfig::global().value(), 99);
    }

    #[test]
    fn test_lazy_value_stable_across_accesses() {
        let before = RuntimeConfig::global().value();
        let after = RuntimeConfig::global().value();
        assert_eq!(before, after);
    }
}

fn main() {
    println!("Pattern 1: Singleton");
    println!("====================\n");

    println!("=== Eager Singleton ===");
    // Touch the eager instance up front, mirroring construct-at-startup.
    let _ = boot_config();
    eager_example();
    println!();

    println!("=== Lazy Singleton ===");
    lazy_example();
}
