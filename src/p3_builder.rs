// Pattern 3: Builder - Stepwise Assembly of a Composite
// A director drives the build steps; the builder owns the partial product
// until the caller takes it.

use std::fmt;

use colored::Colorize;
use thiserror::Error;

// ============================================================================
// Example: Step Builder Driven by a Director
// ============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Computer {
    board: String,
    display: String,
    os: String,
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Computer:{{")?;
        writeln!(f, "    board={},", self.board)?;
        writeln!(f, "    display={},", self.display)?;
        writeln!(f, "    os={}", self.os)?;
        write!(f, "}}")
    }
}

const MACBOOK_OS: &str = "Mac OS X12";

// Builder interface: setup steps plus a step that hands the product over.
trait ComputerBuilder {
    fn build_board(&mut self, board: &str);
    fn build_display(&mut self, display: &str);
    fn build_os(&mut self);
    fn finish(&mut self) -> Computer;
}

#[derive(Default)]
struct MacBookBuilder {
    computer: Computer,
}

impl ComputerBuilder for MacBookBuilder {
    fn build_board(&mut self, board: &str) {
        self.computer.board = board.to_string();
    }

    fn build_display(&mut self, display: &str) {
        self.computer.display = display.to_string();
    }

    fn build_os(&mut self) {
        // The concrete builder knows its own OS; callers never pass one.
        self.computer.os = MACBOOK_OS.to_string();
    }

    fn finish(&mut self) -> Computer {
        std::mem::take(&mut self.computer)
    }
}

// The director borrows whichever builder it is handed and runs the steps in
// a fixed order.
struct Director<'a> {
    builder: &'a mut dyn ComputerBuilder,
}

impl<'a> Director<'a> {
    fn new(builder: &'a mut dyn ComputerBuilder) -> Self {
        Director { builder }
    }

    fn construct(&mut self, board: &str, display: &str) {
        self.builder.build_board(board);
        self.builder.build_display(display);
        self.builder.build_os();
    }
}

fn directed_build_example() {
    let mut builder = MacBookBuilder::default();
    Director::new(&mut builder).construct("Intel board", "VOC display");

    let computer = builder.finish();
    println!("{}", computer);
}

// ============================================================================
// Example: Consuming Fluent Builder with Runtime Validation
// ============================================================================

#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

// The directed builder trusts its director to call every step; this one
// checks at build() instead.
#[derive(Default)]
pub struct LaptopBuilder {
    board: Option<String>,
    display: Option<String>,
    os: Option<String>,
}

impl LaptopBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(mut self, board: impl Into<String>) -> Self {
        self.board = Some(board.into());
        self
    }

    pub fn display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    pub fn os(mut self, os: impl Into<String>) -> Self {
        self.os = Some(os.into());
        self
    }

    pub fn build(self) -> Result<Computer, BuildError> {
        Ok(Computer {
            board: self.board.ok_or(BuildError::MissingField("board"))?,
            display: self.display.ok_or(BuildError::MissingField("display"))?,
            os: self.os.unwrap_or_else(|| MACBOOK_OS.to_string()),
        })
    }
}

fn fluent_build_example() {
    let computer = LaptopBuilder::new()
        .board("Intel board")
        .display("VOC display")
        .build();

    match computer {
        Ok(computer) => println!("{}", computer),
        Err(err) => println!("{}", err.to_string().red()),
    }

    // A build with a step skipped fails instead of handing back a partial
    // product.
    if let Err(err) = LaptopBuilder::new().board("Intel board").build() {
        println!("rejected: {}", err.to_string().red());
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("Pattern 3: Builder");
    println!("==================\n");

    println!("=== Directed Step Builder ===");
    directed_build_example();
    println!();

    println!("=== Fluent Builder with Validation ===");
    fluent_build_example();
}
