//! Render the landing page to a file.
//!
//! Run with: `cargo run --example write_page`

use audara_site::{PageContext, render_page};

fn main() {
    let html = render_page(&PageContext::now());

    let output_path = "index.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
