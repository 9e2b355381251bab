//! Writes placeholder PNGs for every asset the built-in mapping refers to.
//!
//! Existing files are kept, so hand-made icons are never overwritten.

use folder_icons::IconMapping;
use folder_icons::resolver::{ICONS_DIR, ICON_SIZE};
use std::fs;
use std::path::Path;

// Stable per-name color so neighbouring placeholders are distinguishable
fn color_for(name: &str) -> [u8; 4] {
    let hash = name.bytes().fold(0x811c_9dc5u32, |h, b| (h ^ b as u32).wrapping_mul(0x0100_0193));
    let [r, g, b, _] = hash.to_le_bytes();
    [r / 2 + 64, g / 2 + 64, b / 2 + 64, 0xff]
}

fn build_placeholder_rgba(size: u32, fill: [u8; 4]) -> Vec<u8> {
    let mut rgba: Vec<u8> = vec![0; (size * size * 4) as usize];
    let border = (size / 16).max(1);
    let corner = size / 4;
    let frame = [0x1e, 0x29, 0x3b, 0xff];
    for y in 0..size {
        for x in 0..size {
            let i = ((y * size + x) * 4) as usize;
            // Dog-eared page: the top-right triangle stays transparent
            let c = if x + corner >= size && y < corner && (x + corner - size) > y {
                [0, 0, 0, 0]
            } else if x < border || y < border || x >= size - border || y >= size - border {
                frame
            } else {
                fill
            };
            rgba[i..i + 4].copy_from_slice(&c);
        }
    }
    rgba
}

fn main() {
    let out_dir = Path::new(ICONS_DIR);
    fs::create_dir_all(out_dir).expect("create icons dir");
    let mapping = IconMapping::builtin();
    for name in mapping.asset_names() {
        let out = out_dir.join(name);
        if out.exists() {
            println!("kept {}", out.display());
            continue;
        }
        let rgba = build_placeholder_rgba(ICON_SIZE, color_for(name));
        let img = image::RgbaImage::from_vec(ICON_SIZE, ICON_SIZE, rgba).expect("rgba to image");
        img.save(&out).expect("save icon png");
        println!("wrote {}", out.display());
    }
}
