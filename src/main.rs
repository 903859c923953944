// src/main.rs
use nannou::prelude::*;

use rotate_line_circle::{
    config::{Config, ConfigError},
    draw::NannouSurface,
    render::Renderer,
};

struct Model {
    renderer: Renderer,
    // True while the app redraws every frame
    refreshing: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model)
        .update(update)
        .loop_mode(LoopMode::Wait)
        .run();
}

fn load_config() -> Config {
    match Config::load() {
        Ok((config, path)) => {
            log::info!("Loaded config from {}", path.display());
            config
        }
        Err(ConfigError::NotFound) => {
            log::warn!("No config.toml found, using built-in defaults");
            Config::default()
        }
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    }
}

fn model(app: &App) -> Model {
    let config = load_config();

    let mut window = app
        .new_window()
        .title(config.window.title.clone())
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .touch(touch)
        .key_pressed(key_pressed);
    if config.window.fullscreen {
        window = window.fullscreen();
    }
    if let Err(e) = window.build() {
        log::error!("Failed to create window: {:?}", e);
        std::process::exit(1);
    }
    log::info!(
        "Window created, {} nodes with {} glyphs each",
        config.chain.nodes,
        config.chain.lines
    );

    Model {
        renderer: Renderer::new(&config),
        refreshing: false,
    }
}

fn tap(app: &App, model: &mut Model) {
    if model.renderer.handle_tap() && !model.refreshing {
        app.set_loop_mode(LoopMode::RefreshSync);
        model.refreshing = true;
    }
}

fn mouse_pressed(app: &App, model: &mut Model, _button: MouseButton) {
    tap(app, model);
}

fn touch(app: &App, model: &mut Model, event: TouchEvent) {
    if event.phase == TouchPhase::Started {
        tap(app, model);
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space => tap(app, model),
        Key::Escape => app.quit(),
        _ => (),
    }
}

fn update(app: &App, model: &mut Model, update: Update) {
    if let Some(settled) = model.renderer.advance(update.since_last) {
        log::info!("Node {} settled at {}", settled.index, settled.scale);
    }

    // Go back to redrawing on events only once the animation is done
    if model.refreshing && !model.renderer.is_animating() {
        app.set_loop_mode(LoopMode::Wait);
        model.refreshing = false;
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let mut surface = NannouSurface::new(&draw, app.window_rect());
    model.renderer.render(&mut surface);

    // A failed submit only drops this frame
    if let Err(e) = draw.to_frame(app, &frame) {
        log::warn!("Failed to submit frame: {:?}", e);
    }
}
