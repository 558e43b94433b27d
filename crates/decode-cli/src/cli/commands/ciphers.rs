//! `decode ciphers` – list the cipher catalog.

use decode_core::codec;

pub fn run_ciphers() {
    println!("{:<8} {:<14} {:<6} {}", "ID", "NAME", "SHIFT", "DESCRIPTION");
    for d in codec::catalog() {
        println!(
            "{:<8} {:<14} {:<6} {}",
            d.id,
            d.name,
            if d.has_shift { "yes" } else { "-" },
            d.description
        );
    }
}
