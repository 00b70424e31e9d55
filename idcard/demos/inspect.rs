//! Decode identity codes given on the command line and print what they hold.
//!
//! Usage:
//!   cargo run -p idcard --example inspect -- 130421197410056037 220381930829416
//!
//! Set `RUST_LOG=debug` to see why a code was rejected.

use idcard::{ValidationOptions, Validator};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let codes: Vec<String> = std::env::args().skip(1).collect();
    if codes.is_empty() {
        anyhow::bail!("usage: inspect <code>...");
    }

    let validator = Validator::new(ValidationOptions::ALL);
    for code in &codes {
        match idcard::decode(code) {
            Ok(card) => {
                println!("{}: {} (generation {})", code, card.version(), card.version().generation());
                println!(
                    "  region {} province {} city {}",
                    card.region_code(),
                    card.province().unwrap_or("?"),
                    card.city().unwrap_or("?")
                );
                match card.birth_date() {
                    Some(d) => println!("  born {}", d.format("%Y-%m-%d")),
                    None => println!("  born ? (not a calendar date)"),
                }
                if let Some(g) = card.gender() {
                    println!("  gender {}", g);
                }
                if let (Some(age), Some(adult)) = (card.age(), card.is_adult()) {
                    println!("  age {} adult {}", age, adult);
                }
                match validator.validate(code) {
                    Ok(_) => println!("  all optional checks passed"),
                    Err(r) => println!("  optional checks failed after {:?}: {}", r.stage(), r),
                }
            }
            Err(e) => println!("{}: {}", code, e),
        }
    }
    Ok(())
}
