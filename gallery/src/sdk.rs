//! Builder for composing the gallery app.

use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::camera::camera_plugin;
use crate::config::GalleryConfig;
use crate::error::Result;
use crate::input::input_plugin;
use crate::map::MapLayout;
use crate::nav::NavigationController;
use crate::scene::{
    live_plugin, marker_plugin, navigation_plugin, screenshot_plugin, setup_scene, Gallery,
    Navigation, ScreenshotMode,
};
use crate::ui::{diagnostics_plugin, welcome_plugin};

/// Builder for the gallery app. Without an explicit layout, the one named
/// by the configuration is loaded, falling back to the built-in gallery.
pub struct GalleryBuilder {
    config: GalleryConfig,
    layout: Option<MapLayout>,
    window_title: String,
    clear_color: Color,
    enable_diagnostics: bool,
    enable_welcome: bool,
}

impl Default for GalleryBuilder {
    fn default() -> Self {
        Self {
            config: GalleryConfig::default(),
            layout: None,
            window_title: "Op-Art Gallery".to_string(),
            clear_color: Color::WHITE,
            enable_diagnostics: true,
            enable_welcome: true,
        }
    }
}

impl GalleryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GalleryConfig) -> Self {
        self.config = config;
        self
    }

    /// Use an already decoded layout instead of the configured one.
    pub fn layout(mut self, layout: MapLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn disable_diagnostics(mut self) -> Self {
        self.enable_diagnostics = false;
        self
    }

    pub fn disable_welcome(mut self) -> Self {
        self.enable_welcome = false;
        self
    }

    fn resolve_layout(&mut self) -> Result<MapLayout> {
        match (self.layout.take(), &self.config.layout) {
            (Some(layout), _) => Ok(layout),
            (None, Some(path)) => MapLayout::from_file(path),
            (None, None) => MapLayout::default_gallery(),
        }
    }

    /// Inserts the resources and systems shared by windowed and headless apps.
    fn install_core(&mut self, app: &mut App) -> Result<()> {
        let layout = self.resolve_layout()?;
        let controller =
            NavigationController::new(self.config.timing(), layout.start(), layout.start_facing());

        app.insert_resource(self.config.clone())
            .insert_resource(Time::<Fixed>::from_hz(self.config.fixed_hz()))
            .insert_resource(Gallery::new(layout))
            .insert_resource(Navigation::new(controller))
            .add_systems(Startup, (report_startup, setup_scene))
            .add_plugins((navigation_plugin, camera_plugin, live_plugin, marker_plugin));
        Ok(())
    }

    /// Build the windowed app with the selected overlays.
    pub fn build(mut self) -> Result<App> {
        let side = self.config.unit_px as f32;
        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title.clone(),
                resolution: WindowResolution::new(side, side),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(self.clear_color));

        self.install_core(&mut app)?;
        app.add_plugins(input_plugin);

        if self.enable_diagnostics {
            app.add_plugins(diagnostics_plugin);
        }
        if self.enable_welcome {
            app.add_plugins(welcome_plugin);
        }
        if let Some(mode) = ScreenshotMode::from_config(&self.config) {
            app.insert_resource(mode).add_plugins(screenshot_plugin);
        }

        Ok(app)
    }

    /// Build an app without window, renderer, input or overlays. Startup
    /// still bakes images and spawns the scene into plain asset stores.
    pub fn build_headless(mut self) -> Result<App> {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<Assets<Image>>();

        self.install_core(&mut app)?;
        Ok(app)
    }
}

fn report_startup(config: Res<GalleryConfig>, gallery: Res<Gallery>) {
    for warning in &config.warnings {
        warn!("gallery: {warning}");
    }
    let layout = &gallery.layout;
    info!(
        "gallery: {}x{} layout with {} artworks, starting at {} facing {}",
        layout.width(),
        layout.height(),
        layout.artworks().len(),
        layout.start(),
        layout.start_facing()
    );
}
