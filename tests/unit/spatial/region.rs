//! Tests for non-overlapping grid tiling

#[cfg(test)]
mod tests {
    use tiledata::spatial::{Rect, RegionTiler, TilingStrategy};

    fn expected_count(width: u32, height: u32) -> usize {
        let cols = (width / 64).saturating_sub(1) as usize;
        let rows = (height / 64).saturating_sub(1) as usize;
        cols * rows
    }

    // Tests the 200x140 example yields two tiles on the top row
    // Verified by dropping the one-tile margin
    #[test]
    fn test_example_grid() {
        let tiler = RegionTiler::default();
        let regions: Vec<Rect> = tiler.regions(200, 140).collect();

        assert_eq!(
            regions,
            vec![Rect::new(0, 0, 64, 64), Rect::new(64, 0, 64, 64)]
        );
        assert_eq!(tiler.grid(200, 140), (2, 1));
    }

    // Tests the count formula across many sizes
    // Verified by using ceil instead of floor for the column count
    #[test]
    fn test_count_formula() {
        let tiler = RegionTiler::default();
        for width in (0..400).step_by(17) {
            for height in (0..400).step_by(23) {
                assert_eq!(
                    tiler.tile_count(width, height),
                    expected_count(width, height),
                    "size {width}x{height}"
                );
            }
        }
    }

    // Tests images without room for the margin tile give nothing
    // Verified by clamping the column count to one
    #[test]
    fn test_too_small() {
        let tiler = RegionTiler::default();
        assert_eq!(tiler.tile_count(127, 500), 0);
        assert_eq!(tiler.tile_count(500, 100), 0);
        assert_eq!(tiler.tile_count(0, 0), 0);
        assert_eq!(tiler.tile_count(128, 128), 1);
    }

    // Tests row-major order and full containment
    // Verified by swapping modulo and division for the origin
    #[test]
    fn test_row_major_order() {
        let tiler = RegionTiler::default();
        let regions: Vec<Rect> = tiler.regions(260, 200).collect();

        assert_eq!(regions.len(), 6);
        assert_eq!(regions[2], Rect::new(128, 0, 64, 64));
        assert_eq!(regions[3], Rect::new(0, 64, 64, 64));
        assert!(regions.iter().all(|r| r.fits_within(260, 200)));
        assert!(
            regions
                .iter()
                .all(|r| r.width == 64 && r.height == 64)
        );
    }

    // Tests a zero tile size yields no grid instead of dividing by zero
    // Verified by removing the zero guard
    #[test]
    fn test_zero_tile_size() {
        let tiler = RegionTiler::new(0, 64);
        assert_eq!(tiler.grid(500, 500), (0, 0));
        assert_eq!(tiler.tile_size(), (0, 64));
    }
}
