mod canvas;
mod face;
mod watch;
mod wayland;

use smithay_client_toolkit::reexports::{
    calloop::{
        EventLoop,
        timer::{TimeoutAction, Timer},
    },
    calloop_wayland_source::WaylandSource,
};
use wayland_client::{Connection, globals::registry_queue_init};

use bezel_core::calc_next_tick;
use watch::Watch;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let conn = Connection::connect_to_env()?;
    let (globals, event_queue) = registry_queue_init(&conn)?;
    let qh = event_queue.handle();

    let mut watch = Watch::new(&globals, &qh)?;

    let mut event_loop: EventLoop<Watch> = EventLoop::try_new()?;
    let loop_handle = event_loop.handle();

    WaylandSource::new(conn, event_queue)
        .insert(loop_handle.clone())
        .map_err(|err| err.error)?;

    // Redraw on every whole second of the local clock
    loop_handle
        .insert_source(Timer::from_duration(calc_next_tick()), |_, _, watch| {
            watch.tick();
            TimeoutAction::ToDuration(calc_next_tick())
        })
        .map_err(|err| err.error)?;

    while !watch.exit {
        event_loop.dispatch(None, &mut watch)?;
    }

    log::info!("Exiting bezel");
    Ok(())
}
