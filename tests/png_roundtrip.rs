//! Decode/compress/encode through real files on disk, exercising the PNG
//! codec boundary the CLI itself uses.
use rasterblock::color::Rgba;
use rasterblock::quality::{Quality, QualityLevel};
use rasterblock::{compress, png_io, PixelGrid};

#[test]
fn decoded_png_compresses_and_encodes_back_to_the_same_dimensions() {
    let mut grid = PixelGrid::new(6, 6);
    for y in 0..6u32 {
        for x in 0..6u32 {
            let c = if (x + y) % 2 == 0 { Rgba::new(10, 10, 10, 255) } else { Rgba::new(240, 240, 240, 255) };
            grid.set_pixel(x, y, c.to_hsla());
        }
    }

    let dir = tempfile::tempdir().unwrap();
    let in_path = dir.path().join("checker.png");
    png_io::encode(&in_path, &grid).unwrap();

    let decoded = png_io::decode(&in_path).unwrap();
    assert_eq!(decoded.width(), 6);
    assert_eq!(decoded.height(), 6);

    let result = compress(&decoded, Quality::Named(QualityLevel::High)).unwrap();
    let out_path = dir.path().join("checker_qhigh.png");
    png_io::encode(&out_path, &result.grid).unwrap();

    let reread = png_io::decode(&out_path).unwrap();
    assert_eq!(reread.width(), 6);
    assert_eq!(reread.height(), 6);
}

#[test]
fn decode_of_a_non_image_file_reports_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not_a_png.png");
    std::fs::write(&path, b"this is not a png file").unwrap();
    assert!(matches!(png_io::decode(&path), Err(rasterblock::Error::Decode { .. })));
}
