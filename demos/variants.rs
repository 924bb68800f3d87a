mod utils;

use code39::{compute_geometry, GeometryConfig, Target, Variant};

fn main() {
    let payload = std::env::args().nth(1).unwrap_or_else(|| "Hi!".to_owned());

    for variant in Variant::ALL {
        match variant.encode(&payload) {
            Ok(code) => {
                println!("{variant}: {:?} ({} elements)", code.text(), code.len());
                let layout =
                    compute_geometry(&code, Target::Height(4.0), &GeometryConfig::new()).unwrap();
                utils::display_layout(&layout);
            },
            Err(e) => println!("{variant}: {e}"),
        }
    }
}
