//! emc - transform demo
//!
//! Loads a scene from configuration, steps it with a fixed timestep and logs
//! the clear colour and column-major model matrices that would be uploaded
//! to a graphics backend each frame.

use emc::config::AppConfig;
use emc::scene::Scene;
use emc::systems::{FrameData, RenderSystem};

fn log_frame(level: log::Level, frame: &FrameData) {
    log::log!(level, "Clear colour: {:?}", frame.clear_colour);
    for object in &frame.objects {
        log::log!(level, "  {} model: {:?}", object.name, object.model);
    }
}

fn main() {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting emc");

    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let mut scene = Scene::from_config(&config.scene);
    let mut render = RenderSystem::from_config(&config.rendering);
    log::info!("Loaded scene with {} objects", scene.object_count());

    let mut frame = render.prepare_frame(&scene);
    for _ in 0..config.scene.frames {
        scene.update(config.scene.frame_time);
        frame = render.prepare_frame(&scene);
        log_frame(log::Level::Debug, &frame);
    }

    log::info!("Prepared {} frames", render.frames_prepared());
    log_frame(log::Level::Info, &frame);
}
