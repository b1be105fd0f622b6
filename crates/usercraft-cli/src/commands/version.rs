//! Version command implementation.

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() {
    println!("usercraft {VERSION}");
    println!();
    println!("Containers, iteration and sorting on a small user directory.");
}
