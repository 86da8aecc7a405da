use super::{geometry::Coords, palette::Bgra};

pub struct CanvasPrimitives {
    pub side: i32,
    pub pixel_data: Vec<u8>,
}

impl CanvasPrimitives {
    pub fn new(side: i32) -> Self {
        let side = side.max(0);
        let pixel_data = vec![0u8; (side * side * 4) as usize];
        Self { side, pixel_data }
    }

    pub fn fill(&mut self, color: Bgra) {
        for pixel in self.pixel_data.chunks_exact_mut(4) {
            pixel.copy_from_slice(color.as_ref());
        }
    }

    pub fn get_data(&self) -> &[u8] {
        &self.pixel_data
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Bgra> {
        if !self.contains(x, y) {
            return None;
        }
        let idx = Self::pixel_idx(self.side, x, y);
        let px = &self.pixel_data[idx..idx + 4];
        Some(Bgra::from_rgba(px[2], px[1], px[0], px[3]))
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.side && y >= 0 && y < self.side
    }

    #[inline]
    pub fn pixel_idx(side: i32, x: i32, y: i32) -> usize {
        ((y * side + x) * 4) as usize
    }

    #[inline]
    pub fn squared_distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
        let dx = x2 - x1;
        let dy = y2 - y1;
        dx * dx + dy * dy
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Bgra) {
        if self.contains(x, y) {
            let index = Self::pixel_idx(self.side, x, y);
            self.pixel_data[index..index + 4].copy_from_slice(color.as_ref());
        }
    }

    pub fn alpha_blending(pxl_data: &mut [u8], idx: usize, color: Bgra, alpha: u8) {
        if idx + 3 >= pxl_data.len() {
            return;
        }

        if alpha == u8::MAX {
            pxl_data[idx..idx + 3].copy_from_slice(&color.as_ref()[..3]);
            return;
        }

        let inv_alpha = 255 - alpha;

        pxl_data[idx] = Self::blend_color(color.b(), alpha, pxl_data[idx], inv_alpha);
        pxl_data[idx + 1] = Self::blend_color(color.g(), alpha, pxl_data[idx + 1], inv_alpha);
        pxl_data[idx + 2] = Self::blend_color(color.r(), alpha, pxl_data[idx + 2], inv_alpha);
    }

    #[inline]
    fn blend_color(src: u8, alpha: u8, dst: u8, inv_alpha: u8) -> u8 {
        ((src as u16 * alpha as u16 + dst as u16 * inv_alpha as u16 + 127) / 255) as u8
    }

    /// Solid disc, pixels whose centre lies within `radius` of `center`.
    pub fn fill_circle(&mut self, center: Coords, radius: f32, color: Bgra) {
        if radius < 0.0 {
            return;
        }
        let (cx, cy) = center;
        let reach = radius.ceil() as i32;
        let radius_sq = radius * radius;

        for y in cy - reach..=cy + reach {
            for x in cx - reach..=cx + reach {
                let dist_sq =
                    Self::squared_distance(cx as f32, cy as f32, x as f32, y as f32);
                if dist_sq <= radius_sq {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Anti-aliased stroke between two pixels, round at both ends.
    pub fn draw_line(&mut self, from: Coords, to: Coords, thickness: f32, color: Bgra) {
        let (x0, y0) = (from.0 as f32, from.1 as f32);
        let dx = (to.0 - from.0) as f32;
        let dy = (to.1 - from.1) as f32;
        let steps = dx.abs().max(dy.abs()) as i32;

        let (x_inc, y_inc) = if steps == 0 {
            (0.0, 0.0)
        } else {
            (dx / steps as f32, dy / steps as f32)
        };

        let half_thickness = thickness / 2.0;
        let search_radius = (half_thickness + 2.0).ceil() as i32;
        let inner_radius = (half_thickness - 0.5).max(0.0);
        let outer_radius = half_thickness + 0.5;
        let inner_radius_sq = inner_radius * inner_radius;
        let outer_radius_sq = outer_radius * outer_radius;

        let mut x = x0;
        let mut y = y0;

        for _ in 0..=steps {
            for dy_offset in -search_radius..=search_radius {
                for dx_offset in -search_radius..=search_radius {
                    let px = (x + dx_offset as f32).round() as i32;
                    let py = (y + dy_offset as f32).round() as i32;

                    if !self.contains(px, py) {
                        continue;
                    }

                    let squared_dist = Self::squared_distance(x, y, px as f32, py as f32);

                    // Fade out at the edges
                    let alpha = if squared_dist <= inner_radius_sq {
                        1.0
                    } else if squared_dist <= outer_radius_sq {
                        1.0 - (squared_dist - inner_radius_sq) / (outer_radius_sq - inner_radius_sq)
                    } else {
                        continue;
                    };

                    Self::alpha_blending(
                        &mut self.pixel_data,
                        Self::pixel_idx(self.side, px, py),
                        color,
                        (alpha * 255.0) as u8,
                    );
                }
            }
            x += x_inc;
            y += y_inc;
        }
    }

    pub fn draw_polyline(&mut self, points: &[Coords], closed: bool, thickness: f32, color: Bgra) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], thickness, color);
        }
        if closed && let (Some(&last), Some(&first)) = (points.last(), points.first()) {
            self.draw_line(last, first, thickness, color);
        }
    }
}
