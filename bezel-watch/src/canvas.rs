use cosmic_text::{Attrs, Buffer, Color, FontSystem, Metrics, Shaping, SwashCache};

use bezel_core::{Bgra, CanvasPrimitives, ClockTime, Coords, Palette, Segment};

use super::face::{self, Layout};

const BEZEL_THICKNESS: f32 = 2.0;
const MARKER_THICKNESS: f32 = 3.0;
const LINK_THICKNESS: f32 = 2.0;

const BOLT_RADIUS: f32 = 7.0;
const BOLT_SLOT_HALF: i32 = 3;
const BOLT_SLOT_THICKNESS: f32 = 5.0;

const HOUR_HAND_THICKNESS: f32 = 4.0;
const MINUTE_HAND_THICKNESS: f32 = 3.0;
const SECOND_HAND_THICKNESS: f32 = 2.0;
const CAP_RADIUS: f32 = 8.0;
const CAP_PIN_RADIUS: f32 = 3.0;

const LOGO: &str = "AUDEMARS PIGUET";
const LOGO_FONT_SIZE: f32 = 9.0;

pub struct WatchCanvas {
    pub primitives: CanvasPrimitives,
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl WatchCanvas {
    pub fn new(side: i32) -> Self {
        Self {
            primitives: CanvasPrimitives::new(side),
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    /// Paints one complete frame showing `time`. Every call starts from a blank canvas.
    pub fn render(&mut self, time: ClockTime, palette: Palette) {
        let layout = Layout::new(self.primitives.side);

        self.primitives.fill(palette.background);
        self.draw_bezels(&layout, palette);
        self.draw_hour_markers(&layout, palette.silver);
        self.draw_bolts(&layout, palette);
        self.draw_hands(&layout, time, palette);
        self.draw_logo(layout.center, palette.silver);
        let bottom = face::bottom_links(layout.center, layout.radius, layout.side);
        let top = face::top_links(layout.center, layout.radius, layout.side);
        self.draw_links(&bottom, palette.silver);
        self.draw_links(&top, palette.silver);
    }

    fn draw_bezels(&mut self, layout: &Layout, palette: Palette) {
        let outer = face::octagon(layout.center, layout.radius);
        let inner = face::octagon(layout.center, layout.inner_bezel_radius());
        self.primitives
            .draw_polyline(&outer, true, BEZEL_THICKNESS, palette.silver);
        self.primitives
            .draw_polyline(&inner, true, BEZEL_THICKNESS, palette.dark_silver);
    }

    fn draw_bolts(&mut self, layout: &Layout, palette: Palette) {
        for (x, y) in face::octagon(layout.center, layout.bolt_radius()) {
            self.primitives.fill_circle((x, y), BOLT_RADIUS, palette.silver);
            // Screw slot
            self.primitives.draw_line(
                (x - BOLT_SLOT_HALF, y - BOLT_SLOT_HALF),
                (x + BOLT_SLOT_HALF, y + BOLT_SLOT_HALF),
                BOLT_SLOT_THICKNESS,
                palette.dark_gray,
            );
        }
    }

    fn draw_hour_markers(&mut self, layout: &Layout, color: Bgra) {
        for marker in face::hour_markers(layout.center, layout.bolt_radius()) {
            self.draw_segment(marker, MARKER_THICKNESS, color);
        }
    }

    fn draw_hands(&mut self, layout: &Layout, time: ClockTime, palette: Palette) {
        let center = layout.center;
        let tips = face::hands(center, layout.hand_radius(), time);

        self.primitives
            .draw_line(center, tips.hour, HOUR_HAND_THICKNESS, palette.silver);
        self.primitives
            .draw_line(center, tips.minute, MINUTE_HAND_THICKNESS, palette.silver);
        self.primitives
            .draw_line(center, tips.second, SECOND_HAND_THICKNESS, palette.metallic_blue);

        // Center cap
        self.primitives.fill_circle(center, CAP_RADIUS, palette.silver);
        self.primitives
            .fill_circle(center, CAP_PIN_RADIUS, palette.dark_gray);
    }

    fn draw_links(&mut self, chain: &face::LinkChain, color: Bgra) {
        log::trace!(
            "{} bracelet links from y = {}",
            chain.repeated,
            chain.second_y
        );
        for &segment in &chain.segments {
            self.draw_segment(segment, LINK_THICKNESS, color);
        }
    }

    fn draw_segment(&mut self, segment: Segment, thickness: f32, color: Bgra) {
        self.primitives
            .draw_line(segment.from, segment.to, thickness, color);
    }

    fn draw_logo(&mut self, center: Coords, color: Bgra) {
        let buffer = self.create_drawing_buffer(LOGO, LOGO_FONT_SIZE);

        let (width, baseline) = buffer
            .layout_runs()
            .next()
            .map_or((0.0, 0.0), |run| (run.line_w, run.line_y));

        let (x, y) = face::logo_origin(center, width, baseline);
        self.draw_text(&buffer, x, y, color);
    }

    fn draw_text(&mut self, buffer: &Buffer, x: i32, y: i32, color: Bgra) {
        let text_color = Color::rgba(color.r(), color.g(), color.b(), color.a());

        // Capture needed fields to avoid borrow issues
        let side = self.primitives.side;
        let pixel_data = &mut self.primitives.pixel_data;

        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            text_color,
            |gx, gy, _w, _h, glyph_color| {
                let px = x + gx;
                let py = y + gy;

                if px >= 0 && px < side && py >= 0 && py < side {
                    CanvasPrimitives::alpha_blending(
                        pixel_data,
                        CanvasPrimitives::pixel_idx(side, px, py),
                        color,
                        glyph_color.a(),
                    );
                }
            },
        );
    }

    fn create_drawing_buffer(&mut self, text: &str, font_size: f32) -> Buffer {
        let metrics = Metrics::new(font_size, font_size * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_text(
            &mut self.font_system,
            text,
            &Attrs::new(),
            Shaping::Advanced,
            None,
        );
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bezel_core::SIDE;

    fn render(time: ClockTime) -> WatchCanvas {
        let mut canvas = WatchCanvas::new(SIDE);
        canvas.render(time, Palette::default());
        canvas
    }

    #[test]
    fn same_time_renders_identical_frames() {
        let time = ClockTime::new(10, 8, 42);
        let mut canvas = render(time);
        let first = canvas.primitives.get_data().to_vec();

        canvas.render(time, Palette::default());
        assert_eq!(first, canvas.primitives.get_data());
    }

    #[test]
    fn previous_frame_does_not_leak() {
        let mut canvas = render(ClockTime::new(4, 20, 10));
        canvas.render(ClockTime::new(10, 8, 42), Palette::default());
        assert_eq!(
            canvas.primitives.get_data(),
            render(ClockTime::new(10, 8, 42)).primitives.get_data()
        );
    }

    #[test]
    fn different_seconds_render_different_frames() {
        let a = render(ClockTime::new(1, 2, 3));
        let b = render(ClockTime::new(1, 2, 4));
        assert_ne!(a.primitives.get_data(), b.primitives.get_data());
    }

    #[test]
    fn second_hand_uses_accent_color() {
        let palette = Palette::default();
        let canvas = render(ClockTime::new(0, 0, 30));
        // straight below the center, between the cap and the six o'clock marker
        assert_eq!(canvas.primitives.get_pixel(256, 330), Some(palette.metallic_blue));
    }

    #[test]
    fn center_cap_covers_hand_bases() {
        let palette = Palette::default();
        let canvas = render(ClockTime::new(6, 30, 15));
        assert_eq!(canvas.primitives.get_pixel(256, 256), Some(palette.dark_gray));
        assert_eq!(canvas.primitives.get_pixel(262, 256), Some(palette.silver));
    }

    #[test]
    fn twelve_oclock_marker_leaves_a_gap() {
        let palette = Palette::default();
        let canvas = render(ClockTime::new(0, 0, 0));
        assert_eq!(canvas.primitives.get_pixel(260, 150), Some(palette.silver));
        assert_eq!(canvas.primitives.get_pixel(252, 150), Some(palette.silver));
        assert_eq!(canvas.primitives.get_pixel(256, 150), Some(palette.background));
    }

    #[test]
    fn bolts_sit_on_their_corners() {
        let palette = Palette::default();
        let canvas = render(ClockTime::new(0, 0, 0));
        let layout = Layout::new(SIDE);
        for (x, y) in face::octagon(layout.center, layout.bolt_radius()) {
            assert_eq!(canvas.primitives.get_pixel(x, y), Some(palette.dark_gray));
            assert_eq!(canvas.primitives.get_pixel(x - 5, y + 4), Some(palette.silver));
        }
    }

    #[test]
    fn inner_bezel_is_a_shade_darker() {
        let palette = Palette::default();
        let canvas = render(ClockTime::new(0, 0, 0));
        let layout = Layout::new(SIDE);
        let outer = face::octagon(layout.center, layout.radius)[2];
        let inner = face::octagon(layout.center, layout.inner_bezel_radius())[2];
        assert_eq!(canvas.primitives.get_pixel(outer.0, outer.1), Some(palette.silver));
        assert_eq!(canvas.primitives.get_pixel(inner.0, inner.1), Some(palette.dark_silver));
    }

    #[test]
    fn tiny_canvas_renders_without_panicking() {
        for side in [0, 1, 10, 40] {
            let mut canvas = WatchCanvas::new(side);
            canvas.render(ClockTime::new(11, 59, 59), Palette::default());
        }
    }
}
