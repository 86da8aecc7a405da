use chrono::Local;
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{
        WaylandSurface,
        wlr_layer::{KeyboardInteractivity, Layer, LayerShell, LayerSurface},
    },
    shm::{Shm, slot::SlotPool},
};
use wayland_client::{
    QueueHandle,
    globals::GlobalList,
    protocol::{wl_keyboard::WlKeyboard, wl_shm::Format::Argb8888},
};

use super::canvas::WatchCanvas;
use bezel_core::{ClockTime, Palette, SIDE};

/// The watch overlay: one layer surface, its shm pool and the canvas drawn into it.
pub struct Watch {
    pub registry_state: RegistryState,
    pub seat_state: SeatState,
    pub output_state: OutputState,
    pub shm: Shm,
    pub keyboard: Option<WlKeyboard>,
    pub exit: bool,
    _compositor: CompositorState,
    _layer_shell: LayerShell,
    layer: LayerSurface,
    pool: SlotPool,
    canvas: WatchCanvas,
    palette: Palette,
    // Buffers may only be attached after the first configure
    configured: bool,
}

impl Watch {
    pub fn new(globals: &GlobalList, qh: &QueueHandle<Self>) -> anyhow::Result<Self> {
        let shm = Shm::bind(globals, qh)?;
        let compositor = CompositorState::bind(globals, qh)?;
        let layer_shell = LayerShell::bind(globals, qh)?;

        let surface = compositor.create_surface(qh);
        let layer =
            layer_shell.create_layer_surface(qh, surface, Layer::Overlay, Some("bezel"), None);
        layer.set_keyboard_interactivity(KeyboardInteractivity::OnDemand);
        layer.set_size(SIDE as u32, SIDE as u32);
        layer.commit();

        Ok(Self {
            registry_state: RegistryState::new(globals),
            seat_state: SeatState::new(globals, qh),
            output_state: OutputState::new(globals, qh),
            pool: SlotPool::new((SIDE * SIDE * 4) as usize, &shm)?,
            shm,
            keyboard: None,
            exit: false,
            _compositor: compositor,
            _layer_shell: layer_shell,
            layer,
            canvas: WatchCanvas::new(SIDE),
            palette: Palette::default(),
            configured: false,
        })
    }

    pub fn on_configure(&mut self) {
        if !self.configured {
            log::info!("surface configured, {SIDE}x{SIDE}");
        }
        self.configured = true;
        self.tick();
    }

    /// Draws the current local time, if the surface can take a buffer yet.
    pub fn tick(&mut self) {
        if !self.configured {
            return;
        }
        let time = ClockTime::from_timelike(&Local::now());
        if let Err(err) = self.present(time) {
            log::warn!("frame not presented: {err:#}");
        }
    }

    fn present(&mut self, time: ClockTime) -> anyhow::Result<()> {
        log::debug!(
            "frame at {}:{:02}:{:02}",
            time.hour,
            time.minute,
            time.second
        );
        self.canvas.render(time, self.palette);

        let side = self.canvas.primitives.side;
        let (buffer, pixels) = self
            .pool
            .create_buffer(side, side, side * 4, Argb8888)?;
        pixels.copy_from_slice(self.canvas.primitives.get_data());

        let surface = self.layer.wl_surface();
        surface.damage_buffer(0, 0, side, side);
        buffer.attach_to(surface)?;
        self.layer.commit();

        Ok(())
    }
}
