//! Tests for the shared tile cropping of tiling strategies

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use tiledata::spatial::{RegionTiler, SlidingWindowTiler, TilingStrategy};

    fn numbered(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 7]))
    }

    // Tests every tile from both strategies is exactly 64x64
    // Verified by cropping one pixel short
    #[test]
    fn test_tiles_are_64_square() {
        let image = numbered(230, 170);
        let region = RegionTiler::default();
        let sliding = SlidingWindowTiler::default();

        let region_tiles: Vec<_> = region.tiles(&image).collect();
        let sliding_tiles: Vec<_> = sliding.tiles(&image).collect();

        assert_eq!(region_tiles.len(), region.tile_count(230, 170));
        assert_eq!(sliding_tiles.len(), sliding.tile_count(230, 170));
        for tile in region_tiles.iter().chain(&sliding_tiles) {
            assert_eq!(tile.pixels.dimensions(), (64, 64));
        }
    }

    // Tests tile pixels come from the tile origin
    // Verified by cropping from the image origin every time
    #[test]
    fn test_tile_pixels_match_origin() {
        let image = numbered(150, 90);
        let sliding = SlidingWindowTiler::default();

        for tile in sliding.tiles(&image) {
            let origin = tile.pixels.get_pixel(0, 0);
            assert_eq!(origin, &Rgb([tile.region.x as u8, tile.region.y as u8, 7]));
        }
    }

    // Tests tiles are independent copies of the source
    // Verified by returning a view instead of an owned buffer
    #[test]
    fn test_tiles_are_copies() {
        let mut image = numbered(200, 140);
        let tiles: Vec<_> = RegionTiler::default().tiles(&image).collect();
        image.put_pixel(0, 0, Rgb([255, 255, 255]));

        assert_eq!(tiles[0].pixels.get_pixel(0, 0), &Rgb([0, 0, 7]));
    }
}
