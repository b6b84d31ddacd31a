//! Tests for channel-first batch layout conversion

#[cfg(test)]
mod tests {
    use batchprep::preprocess::layout::to_batched_chw;
    use ndarray::Array3;

    // Tests axes move from (h, w, c) to (1, c, h, w) with values following
    // Verified by permuting to (w, h) order
    #[test]
    fn test_axes_reordered() {
        let image = Array3::from_shape_fn((2, 3, 3), |(y, x, c)| (y * 100 + x * 10 + c) as u16);
        let tensor = to_batched_chw(image.clone());

        assert_eq!(tensor.dim(), (1, 3, 2, 3));
        for ((y, x, c), &value) in image.indexed_iter() {
            assert_eq!(tensor[[0, c, y, x]], value);
        }
    }

    // Tests the result is stored contiguously in C order
    // Verified by returning the permuted view without relayout
    #[test]
    fn test_standard_layout() {
        let image = Array3::from_shape_fn((4, 5, 3), |(y, x, c)| (y + x + c) as u8);
        let tensor = to_batched_chw(image);

        assert!(tensor.is_standard_layout());
        let flat = tensor.as_slice().unwrap();
        // Channel 1 starts after one full 4x5 plane
        assert_eq!(flat.get(20), Some(&1));
    }
}
