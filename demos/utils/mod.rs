#![allow(dead_code)]

const WHITE: &str = "\x1B[38;2;255;255;255m█";
const BLACK: &str = "\x1B[38;2;0;0;0m█";
const PADDING: usize = 4;

pub fn display_bits(width: usize, bits: &[bool]) {
    let quiet_zone_v = str::repeat(WHITE, width + PADDING * 2);
    let quiet_zone_h = &quiet_zone_v[..PADDING * WHITE.len()];

    println!("{quiet_zone_v}");
    for chunk in bits.chunks(width) {
        print!("{quiet_zone_h}");
        for &on in chunk { print!("{}", if on { BLACK } else { WHITE }); }
        println!("{quiet_zone_h}");
    }
    println!("{quiet_zone_v}\x1B[0m");
}

pub fn display_layout(layout: &code39::Layout) {
    let (w, h) = layout.pixel_size();
    let mut storage = vec![false; w * h];
    layout.fill_bits(&mut storage, w);
    display_bits(w, &storage);
}
