mod utils;

use code39::{compute_geometry, encode_mod43, GeometryConfig, Insets, Target};

const HEIGHT: f64 = 8.0;
const RATIO: f64 = 2.5;

fn main() {
    let code = encode_mod43("CODE 39").unwrap();
    let config = GeometryConfig::new()
        .ratio(RATIO)
        .insets(Insets::new(1.0, 2.0, 1.0, 2.0));

    let layout = compute_geometry(&code, Target::Height(HEIGHT), &config).unwrap();
    println!("{} -> {}x{} (narrow {}, wide {})",
        code.text(), layout.width(), layout.height(), layout.narrow_width(), layout.wide_width());
    utils::display_layout(&layout);
}
