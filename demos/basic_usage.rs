// ============================================================================
// Basic Usage Example
// ============================================================================

use manage_offer::numeric::price;
use manage_offer::prelude::*;

const ISSUER: &str = "GBAQPADEYSKYMYXTMASBUIS5JI3LMOAWSTM2CHGDBJ3QDDPNCSO3DVAA";

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Manage Offer Example ===\n");

    let usd = Asset::issued("USD", ISSUER);

    // Create a new offer
    let create = ManageOffer::create(Asset::native(), usd.clone(), "100", "2:1");
    match create.build_xdr_bytes() {
        Ok(bytes) => println!("Create offer: {} bytes\n  {}", bytes.len(), hex(&bytes)),
        Err(e) => println!("Create offer failed: {}", e),
    }

    // Update offer 12345 with a decimal price
    let update = ManageOffer::update(Asset::native(), usd, "250.5", "0.3333333", 12345);
    match update.build() {
        Ok(op) => println!("\nUpdate offer: {:?}", op.body),
        Err(e) => println!("\nUpdate offer failed: {}", e),
    }

    // Delete offer 12345
    let delete = ManageOffer::delete(12345);
    match delete.build_xdr_bytes() {
        Ok(bytes) => println!("\nDelete offer: {} bytes\n  {}", bytes.len(), hex(&bytes)),
        Err(e) => println!("\nDelete offer failed: {}", e),
    }

    // Price approximation
    println!("\nPrice approximations:");
    for input in ["0.1", "1.25", "3.14159265", "33.33333333"] {
        match price::approximate(input) {
            Ok(p) => println!("  {:>12} -> {}", input, p),
            Err(e) => println!("  {:>12} -> error: {}", input, e),
        }
    }

    // Failures name the field that broke
    println!("\nInvalid input:");
    let bad = ManageOffer::create(Asset::native(), Asset::issued("USD", ISSUER), "0.12345678", "1");
    if let Err(e) = bad.build() {
        println!("  {:?} on {:?}: {}", e.kind(), e.field(), e);
    }

    println!("\n=== Example Complete ===");
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
