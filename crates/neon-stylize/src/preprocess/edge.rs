//! Forward-difference edge gradient.

use super::field::ProcessedField;

/// Gradient magnitude at `(x, y)` using forward differences
/// `gx = v(x,y) - v(x+1,y)`, `gy = v(x,y) - v(x,y+1)`.
///
/// Returns `None` on the last column or row where a forward neighbour is
/// missing.
#[inline]
pub fn gradient_magnitude(field: &ProcessedField, x: usize, y: usize) -> Option<f32> {
    if x + 1 >= field.width() || y + 1 >= field.height() {
        return None;
    }
    let v = field.get(x, y);
    let gx = v - field.get(x + 1, y);
    let gy = v - field.get(x, y + 1);
    Some((gx * gx + gy * gy).sqrt())
}

/// Edge threshold for a smoothness value: `20 + smoothness * 8`.
#[inline]
pub fn edge_threshold(smoothness: f32) -> f32 {
    20.0 + smoothness * 8.0
}

/// Mark interior pixels whose gradient magnitude exceeds `threshold`.
///
/// Border pixels (first/last row and column) are never edges.
pub fn edge_mask(field: &ProcessedField, threshold: f32) -> Vec<bool> {
    let (w, h) = (field.width(), field.height());
    let mut mask = vec![false; w * h];
    if w < 3 || h < 3 {
        return mask;
    }
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            if let Some(magnitude) = gradient_magnitude(field, x, y) {
                mask[y * w + x] = magnitude > threshold;
            }
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_range() {
        assert_eq!(edge_threshold(0.0), 20.0);
        assert_eq!(edge_threshold(10.0), 100.0);
    }

    #[test]
    fn test_magnitude_pythagorean() {
        let field = ProcessedField::from_values(2, 2, vec![100.0, 70.0, 60.0, 0.0]);
        // gx = 30, gy = 40
        assert_eq!(gradient_magnitude(&field, 0, 0), Some(50.0));
        assert_eq!(gradient_magnitude(&field, 1, 0), None);
        assert_eq!(gradient_magnitude(&field, 0, 1), None);
    }

    #[test]
    fn test_vertical_step_detected_inside_only() {
        // 5x5, left two columns black, rest white
        let mut values = Vec::new();
        for _ in 0..5 {
            values.extend_from_slice(&[0.0, 0.0, 255.0, 255.0, 255.0]);
        }
        let field = ProcessedField::from_values(5, 5, values);
        let mask = edge_mask(&field, edge_threshold(5.0));
        for y in 0..5 {
            for x in 0..5 {
                let expected = x == 1 && (1..4).contains(&y);
                assert_eq!(mask[y * 5 + x], expected, "pixel ({x},{y})");
            }
        }
    }

    #[test]
    fn test_tiny_field_has_no_edges() {
        let field = ProcessedField::from_values(2, 2, vec![0.0, 255.0, 255.0, 0.0]);
        assert!(edge_mask(&field, 0.0).iter().all(|e| !e));
    }
}
