use crate::types::{EdgePoint, ImageSize};

/// Borrowed 8-bit single-channel image, e.g. a binary edge map.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }

    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.w, self.h)
    }

    /// Coordinates of every pixel equal to `on_value`, in row-major order.
    pub fn edge_points(&self, on_value: u8) -> Vec<EdgePoint> {
        let mut points = Vec::new();
        for y in 0..self.h {
            for (x, &v) in self.row(y).iter().enumerate() {
                if v == on_value {
                    points.push(EdgePoint::new(y as u32, x as u32));
                }
            }
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_points_are_row_col_in_scan_order() {
        #[rustfmt::skip]
        let data = [
            0, 255, 0, 9,
            0, 0, 255, 9,
            255, 0, 128, 9,
        ];
        // Stride 4 with a padding column that must be ignored.
        let img = ImageU8 {
            w: 3,
            h: 3,
            stride: 4,
            data: &data,
        };
        assert_eq!(
            img.edge_points(255),
            vec![
                EdgePoint::new(0, 1),
                EdgePoint::new(1, 2),
                EdgePoint::new(2, 0),
            ]
        );
        assert_eq!(img.edge_points(128), vec![EdgePoint::new(2, 2)]);
        assert_eq!(img.size(), ImageSize::new(3, 3));
    }
}
