use recursion_tests::expr::eval::{compute, print};
use recursion_tests::expr::naive::{add, literal, max, multiply, subtract};
use recursion_visualize::cata_v;

// usage: cargo run --example expr -- <output.json>
fn main() -> std::io::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "expr_viz.json".to_string());

    let expr = add(
        multiply(literal(2), literal(3)),
        max(vec![
            literal(4),
            subtract(literal(9), literal(1)),
            literal(2),
            literal(1),
        ]),
    );

    let (printed, print_viz) = cata_v(&expr, print);
    let (value, eval_viz) = cata_v(&expr, compute);

    let viz = print_viz
        .label("Print".to_string(), "render each layer as text".to_string())
        .fuse(
            eval_viz,
            "Evaluate".to_string(),
            format!("compute the value of {}", printed),
        );

    viz.write_to(&path)?;
    println!("{} = {}, wrote {} steps to {}", printed, value, viz.actions().len(), path);

    Ok(())
}
