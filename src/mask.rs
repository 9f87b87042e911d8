//! Binary edge evidence over a grayscale mask.
//!
//! The mask comes from the upstream edge detector and is only ever read. A
//! pixel counts as an edge when its intensity is strictly above the threshold.
//! Witness queries clamp their neighbourhood to the image so probes near or
//! beyond the border never index out of bounds.

use crate::image::{ImageU8, ImageView};

/// Intensity above which a mask pixel is treated as an edge.
pub const DEFAULT_EDGE_THRESHOLD: u8 = 200;

#[derive(Clone, Copy, Debug)]
pub struct EdgeMask<'a> {
    image: ImageU8<'a>,
    threshold: u8,
}

impl<'a> EdgeMask<'a> {
    pub fn new(image: ImageU8<'a>, threshold: u8) -> Self {
        Self { image, threshold }
    }

    pub fn with_default_threshold(image: ImageU8<'a>) -> Self {
        Self::new(image, DEFAULT_EDGE_THRESHOLD)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.image.w
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.image.h
    }

    #[inline]
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    #[inline]
    pub fn is_edge(&self, x: usize, y: usize) -> bool {
        self.image.get(x, y) > self.threshold
    }

    /// Total number of edge pixels.
    pub fn edge_pixel_count(&self) -> usize {
        self.image
            .rows()
            .map(|row| row.iter().filter(|&&v| v > self.threshold).count())
            .sum()
    }

    /// Probe for a horizontal line: the column is clamped into the image and
    /// rows `y - radius ..= y + radius` are scanned.
    pub fn witness_horizontal(&self, x: i64, y: i64, radius: usize) -> bool {
        if self.image.is_empty() {
            return false;
        }
        let x = clamp_index(x, self.width());
        let Some(rows) = clipped_range(y, radius, self.height()) else {
            return false;
        };
        rows.into_iter().any(|r| self.is_edge(x, r))
    }

    /// Probe for a vertical line: the row is clamped into the image and
    /// columns `x - radius ..= x + radius` are scanned.
    pub fn witness_vertical(&self, x: i64, y: i64, radius: usize) -> bool {
        if self.image.is_empty() {
            return false;
        }
        let y = clamp_index(y, self.height());
        let Some(cols) = clipped_range(x, radius, self.width()) else {
            return false;
        };
        let row = self.image.row(y);
        row[cols].iter().any(|&v| v > self.threshold)
    }

    /// Probe a `(2·radius + 1)²` square centred on `(x, y)`, clipped to the image.
    pub fn witness_point(&self, x: i64, y: i64, radius: usize) -> bool {
        let (Some(cols), Some(rows)) = (
            clipped_range(x, radius, self.width()),
            clipped_range(y, radius, self.height()),
        ) else {
            return false;
        };
        rows.into_iter().any(|r| {
            self.image.row(r)[cols.clone()]
                .iter()
                .any(|&v| v > self.threshold)
        })
    }
}

#[inline]
fn clamp_index(v: i64, len: usize) -> usize {
    v.clamp(0, len as i64 - 1) as usize
}

/// `[center - radius, center + radius]` intersected with `[0, len)`.
fn clipped_range(center: i64, radius: usize, len: usize) -> Option<std::ops::Range<usize>> {
    let r = radius as i64;
    let begin = center.saturating_sub(r).max(0);
    let end = center.saturating_add(r).saturating_add(1).min(len as i64);
    (begin < end).then(|| begin as usize..end as usize)
}
