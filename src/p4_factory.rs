// Pattern 4: Abstract Factory - Families of Related Parts
// One factory per vendor; each hands out parts that belong together.

use colored::Colorize;

// ============================================================================
// Example: Abstract Factory with Trait Objects
// ============================================================================

// Product traits. Operations return their descriptive line; the driver
// prints.
trait Cpu {
    fn compute(&self) -> String;
}

trait MainBoard {
    fn install_cpu(&self) -> String;
}

struct AsusCpu;
impl Cpu for AsusCpu {
    fn compute(&self) -> String {
        "Asus CPU computing".to_string()
    }
}

struct AsusMainBoard;
impl MainBoard for AsusMainBoard {
    fn install_cpu(&self) -> String {
        "installing an Asus CPU onto the Asus main board".to_string()
    }
}

struct LenovoCpu;
impl Cpu for LenovoCpu {
    fn compute(&self) -> String {
        "Lenovo CPU computing".to_string()
    }
}

struct LenovoMainBoard;
impl MainBoard for LenovoMainBoard {
    fn install_cpu(&self) -> String {
        "installing a Lenovo CPU onto the Lenovo main board".to_string()
    }
}

// Factory interface: one creator per product in the family. Call sites
// never name a concrete part.
trait ComputerFactory {
    fn create_cpu(&self) -> Box<dyn Cpu>;
    fn create_main_board(&self) -> Box<dyn MainBoard>;
}

struct AsusFactory;
impl ComputerFactory for AsusFactory {
    fn create_cpu(&self) -> Box<dyn Cpu> {
        Box::new(AsusCpu)
    }

    fn create_main_board(&self) -> Box<dyn MainBoard> {
        Box::new(AsusMainBoard)
    }
}

struct LenovoFactory;
impl ComputerFactory for LenovoFactory {
    fn create_cpu(&self) -> Box<dyn Cpu> {
        Box::new(LenovoCpu)
    }

    fn create_main_board(&self) -> Box<dyn MainBoard> {
        Box::new(LenovoMainBoard)
    }
}

// Client: assembles from whichever factory it is handed. Board first, then
// the CPU gets to work.
fn assemble(factory: &dyn ComputerFactory) {
    let board = factory.create_main_board();
    let cpu = factory.create_cpu();
    println!("{}", board.install_cpu());
    println!("{}", cpu.compute());
}

fn factory_trait_object_example() {
    println!("{}", "--- assembling an Asus computer ---".bold());
    assemble(&AsusFactory);

    println!("\n{}", "--- assembling a Lenovo computer ---".bold());
    assemble(&LenovoFactory);
}

// ============================================================================
// Example: Enum-Dispatched Factory (Zero-Cost)
// ============================================================================

#[derive(Clone, Copy)]
enum Vendor {
    Asus,
    Lenovo,
}

enum VendorCpu {
    Asus(AsusCpu),
    Lenovo(LenovoCpu),
}

impl VendorCpu {
    fn new(vendor: Vendor) -> Self {
        match vendor {
            Vendor::Asus => VendorCpu::Asus(AsusCpu),
            Vendor::Lenovo => VendorCpu::Lenovo(LenovoCpu),
        }
    }

    fn compute(&self) -> String {
        match self {
            VendorCpu::Asus(cpu) => cpu.compute(),
            VendorCpu::Lenovo(cpu) => cpu.compute(),
        }
    }
}

fn factory_enum_example() {
    // No heap allocation, no dynamic dispatch.
    let cpu = VendorCpu::new(Vendor::Lenovo);
    println!("enum-dispatched part: {}", cpu.compute());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asus_family_is_consistent() {
        let factory = AsusFactory;
        let cpu = factory.create_cpu();
        let board = factory.create_main_board();

        assert!(cpu.compute().contains("Asus"));
        assert!(board.install_cpu().contains("Asus"));
        assert!(!board.install_cpu().contains("Lenovo"));
    }

    #[test]
    fn test_lenovo_family_is_consistent() {
        let factory = LenovoFactory;
        let cpu = factory.create_cpu();
        let board = factory.create_main_board();

        assert!(cpu.compute().contains("Lenovo"));
        assert!(board.install_cpu().contains("Lenovo"));
        assert!(!board.install_cpu().contains("Asus"));
    }

    #[test]
    fn test_factories_interchangeable_behind_trait() {
        let factories: Vec<Box<dyn ComputerFactory>> =
            vec![Box::new(AsusFactory), Box::new(LenovoFactory)];

        for factory in &factories {
            let line = factory.create_main_board().install_cpu();
            assert!(line.contains("main board"));
        }
    }

    #[test]
    fn test_enum_factory_matches_vendor() {
        let asus = VendorCpu::new(Vendor::Asus);
        let lenovo = VendorCpu::new(Vendor::Lenovo);

        assert!(asus.compute().contains("Asus"));
        assert!(lenovo.compute().contains("Lenovo"));
    }
}

fn main() {
    println!("Pattern 4: Abstract Factory");
    println!("===========================\n");

    println!("=== Abstract Factory (Trait Objects) ===");
    factory_trait_object_example();
    println!();

    println!("=== Abstract Factory (Enums) ===");
    factory_enum_example();
}
