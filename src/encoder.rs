use anyhow::Context;
use image::{Rgba, RgbaImage};

use crate::{cluster_finder::Cluster, color::Color, grid::Grid};

/// Renders a grid into an image, one `scale` x `scale` block per cell
pub struct Encoder<'a> {
    grid: &'a Grid,
    scale: u32,
}

impl<'a> Encoder<'a> {
    pub fn new(grid: &'a Grid, scale: u32) -> Self {
        Self {
            grid,
            scale: scale.max(1),
        }
    }

    /// image dimensions, failing when they do not fit the pixel buffer
    pub fn size(&self) -> anyhow::Result<(u32, u32)> {
        let side = |cells: usize, axis: &str| {
            u32::try_from(cells)
                .ok()
                .and_then(|n| n.checked_mul(self.scale))
                .with_context(|| {
                    format!(
                        "image {} overflows: {} cells at scale {}",
                        axis, cells, self.scale
                    )
                })
        };
        let w = side(self.grid.width(), "width")?;
        let h = side(self.grid.height(), "height")?;

        // 4 channels per pixel
        (w as usize)
            .checked_mul(h as usize)
            .and_then(|n| n.checked_mul(4))
            .with_context(|| format!("image of {}x{} pixels is too large", w, h))?;

        Ok((w, h))
    }

    // callers pass cells of the grid, so the offsets stay within `size()`
    fn fill(&self, img: &mut RgbaImage, x: usize, y: usize, c: Color) {
        let x0 = x as u32 * self.scale;
        let y0 = y as u32 * self.scale;
        for dy in 0..self.scale {
            for dx in 0..self.scale {
                img.put_pixel(x0 + dx, y0 + dy, Rgba([c.r(), c.g(), c.b(), u8::MAX]));
            }
        }
    }

    /// asteroid cells in white, empty cells in black
    pub fn encode(&self) -> anyhow::Result<RgbaImage> {
        let (w, h) = self.size()?;
        let mut img = RgbaImage::new(w, h);
        let white = Color::new(u8::MAX, u8::MAX, u8::MAX);
        self.grid.cells().iter().for_each(|cell| {
            let c = if cell.marked() { white } else { Color::black() };
            self.fill(&mut img, cell.x(), cell.y(), c);
        });
        Ok(img)
    }

    /// same as [`Encoder::encode`] but each cluster gets its own palette color
    pub fn encode_clusters(&self, clusters: &[Cluster]) -> anyhow::Result<RgbaImage> {
        let mut img = self.encode()?;
        clusters.iter().enumerate().for_each(|(idx, cluster)| {
            let c = Color::cluster(idx);
            for p in cluster.cells() {
                self.fill(&mut img, p.x, p.y, c);
            }
        });
        Ok(img)
    }
}
