use serde_json::json;
use tracing_subscriber::EnvFilter;
use vector_math::{Product, Vector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("📐 Vector Math Demo");
    println!("===================\n");

    let a = Vector::from_ints(&[1, 2, 3]);
    let b = Vector::new(vec![4.0, -0.5, 2.0])?;
    println!("a = {}", a);
    println!("b = {}\n", b);

    println!("|a|        = {:.4}", a.norm());
    println!("a + b      = {}", a.add(&b)?);
    println!("a - b      = {}", a.subtract(&b)?);
    println!("a x b      = {}", a.cross(&b)?);
    println!("angle(a,b) = {:.4} rad", a.ang(&b)?);
    println!("proj_a(b)  = {}", a.proj(&b)?);
    println!("a / 2      = {}", a.divide(2.0)?);

    match a.multiply(&b)? {
        Product::Scalar(dot) => println!("a · b      = {}", dot),
        Product::Vector(v) => println!("a * b      = {}", v),
    }

    // Dynamically typed input goes through the same validation
    println!("\n🔎 Validating dynamic input...");
    match Vector::try_from(&json!(["x", 1])) {
        Ok(v) => println!("  unexpectedly accepted {}", v),
        Err(e) => println!("  rejected: {}", e),
    }
    match a.cross(&Vector::from_ints(&[1, 2])) {
        Ok(v) => println!("  unexpectedly computed {}", v),
        Err(e) => println!("  rejected: {}", e),
    }

    // Text form parses back to the same vector
    let text = b.to_string();
    let parsed: Vector = text.parse()?;
    assert_eq!(parsed, b);
    println!("\n✅ Round-tripped {}", text);

    Ok(())
}
