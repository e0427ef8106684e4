// Pattern 2: Proxy - A Stand-in Forwarding to the Real Subject
// The proxy implements the subject's interface and wraps the forwarded call
// with its own pre/post behavior.

use colored::Colorize;

// ============================================================================
// Example: Proxy with Trait Objects
// ============================================================================

// Subject interface. Operations return their transcript so the driver
// decides how to print it.
trait RentHouse {
    fn rent_house(&self) -> Vec<String>;
}

// Real subject: the landlord only ever does the one thing.
struct Landlord;

impl RentHouse for Landlord {
    fn rent_house(&self) -> Vec<String> {
        vec!["renting the house out".to_string()]
    }
}

// Proxy: the agent holds the landlord and surrounds the forwarded call.
struct RentalAgent {
    landlord: Landlord,
}

impl RentalAgent {
    fn new() -> Self {
        RentalAgent { landlord: Landlord }
    }
}

impl RentHouse for RentalAgent {
    fn rent_house(&self) -> Vec<String> {
        let mut transcript = vec![
            "posting the rental listing".to_string(),
            "showing the house to tenants".to_string(),
        ];
        transcript.extend(self.landlord.rent_house());
        transcript.push("handling repairs after the lease".to_string());
        transcript
    }
}

fn run_rental(subject: &dyn RentHouse) {
    for line in subject.rent_house() {
        println!("{}", line);
    }
}

fn proxy_trait_object_example() {
    let agent = RentalAgent::new();
    run_rental(&agent);
}

// ============================================================================
// Example: Generic Proxy - Zero-Cost Wrapping
// ============================================================================

// Monomorphized per subject, no boxing. Adds its commission line after
// whatever the wrapped subject did.
struct Commissioned<T> {
    inner: T,
    fee: u32,
}

impl<T: RentHouse> RentHouse for Commissioned<T> {
    fn rent_house(&self) -> Vec<String> {
        let mut transcript = self.inner.rent_house();
        transcript.push(format!("collecting a {}% commission", self.fee));
        transcript
    }
}

fn proxy_generic_example() {
    let agent = Commissioned {
        inner: RentalAgent::new(),
        fee: 3,
    };
    for line in agent.rent_house() {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landlord_alone() {
        let landlord = Landlord;
        assert_eq!(landlord.rent_house(), vec!["renting the house out"]);
    }

    #[test]
    fn test_proxy_line_order() {
        let agent = RentalAgent::new();
        assert_eq!(
            agent.rent_house(),
            vec![
                "posting the rental listing",
                "showing the house to tenants",
                "renting the house out",
                "handling repairs after the lease",
            ]
        );
    }

    #[test]
    fn test_proxy_forwards_to_real_subject() {
        let agent = RentalAgent::new();
        let transcript = agent.rent_house();
        assert!(transcript.contains(&"renting the house out".to_string()));
    }

    #[test]
    fn test_commissioned_appends_fee() {
        let agent = Commissioned {
            inner: Landlord,
            fee: 5,
        };
        let transcript = agent.rent_house();
        assert_eq!(transcript.first().unwrap(), "renting the house out");
        assert_eq!(transcript.last().unwrap(), "collecting a 5% commission");
    }

    #[test]
    fn test_commissioned_wraps_proxy() {
        // Proxies stack: the generic wrapper takes any RentHouse, the agent
        // included.
        let agent = Commissioned {
            inner: RentalAgent::new(),
            fee: 3,
        };
        assert_eq!(agent.rent_house().len(), 5);
    }
}

fn main() {
    println!("Pattern 2: Proxy");
    println!("================\n");

    println!("{}", "=== Proxy (Trait Objects) ===".bold());
    proxy_trait_object_example();
    println!();

    println!("{}", "=== Proxy (Generics) ===".bold());
    proxy_generic_example();
}
