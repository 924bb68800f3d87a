mod utils;

use code39::{compute_geometry, encode_plain, GeometryConfig, Target};

fn main() {
    let code = encode_plain("HELLO 39").unwrap();
    println!("{}\n{code}", code.text());

    let target = Target::Canvas { width: 180.0, height: 6.0 };
    let layout = compute_geometry(&code, target, &GeometryConfig::new()).unwrap();
    utils::display_layout(&layout);
}
