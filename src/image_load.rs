use eframe::egui::ColorImage;
use image::imageops::FilterType;
use std::path::Path;

/// Decodes an icon asset and scales it to a `size`×`size` RGBA bitmap.
pub fn load_icon(path: &Path, size: u32) -> Result<ColorImage, image::ImageError> {
    let img = image::open(path)?;
    let rgba = img.resize_exact(size, size, FilterType::CatmullRom).to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok(ColorImage::from_rgba_unmultiplied([w as usize, h as usize], rgba.as_raw()))
}
