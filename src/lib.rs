//! # Design Pattern Demos
//!
//! Standalone, single-file demonstrations of classic design patterns. Each
//! demo is its own binary with its own `main`; none of them share state.
//!
//! ## Demos
//!
//! 1. **Singleton** (`p1_singleton`)
//!    - Eager initialization behind a `lazy_static!` global
//!    - Lazy initialization behind `OnceLock`
//!    - Copy suppressed: `&'static` access only
//!
//! 2. **Proxy** (`p2_proxy`)
//!    - A rental agent standing in for a landlord
//!    - Pre/post behavior around the forwarded call
//!    - Trait-object and generic renditions
//!
//! 3. **Builder** (`p3_builder`)
//!    - Step builder driven by a director
//!    - Consuming fluent builder with runtime validation
//!
//! 4. **Abstract Factory** (`p4_factory`)
//!    - Families of related parts from interchangeable factories
//!    - Trait-object and enum renditions
//!
//! 5. **Variadic Printing** (`p5_variadic_print`)
//!    - Declarative macros in place of C-style `va_list`
//!    - File/line log macro, recursive and fold-style expansion
//!
//! ## Running Demos
//!
//! ```bash
//! cargo run --bin p1_singleton
//! cargo run --bin p2_proxy
//! cargo run --bin p3_builder
//! cargo run --bin p4_factory
//! cargo run --bin p5_variadic_print
//! ```
