//! penguins — the penguin scene in a resizable macroquad window.
//!
//! Set `PENGUINS_CONFIG` to a JSON file to override [`SimConfig`] fields and
//! `RUST_LOG` to control log output.

use anyhow::{Context, Result, bail};
use macroquad::prelude::*;
use tracing::error;

use pg_core::{SceneBounds, SimConfig};
use pg_scene::{Assets, Background, RgbaImage, SceneSurface, SpriteRect};
use pg_sim::{FrameDriver, NoopObserver, Scene, SceneBuilder};


// ── Surface ───────────────────────────────────────────────────────────────────

/// [`SceneSurface`] over macroquad textures.
///
/// The background texture is re-uploaded only when the scene hands over a
/// background with a new generation.
struct MacroquadSurface {
    sprite:                Texture2D,
    background:            Option<Texture2D>,
    background_generation: Option<u64>,
}

impl MacroquadSurface {
    fn new(assets: &Assets) -> Result<Self> {
        let sprite = upload(&assets.penguin).context("uploading penguin sprite")?;
        Ok(Self { sprite, background: None, background_generation: None })
    }
}

/// Pixel size of `image` in the `u16` range macroquad textures accept.
fn texture_size(image: &RgbaImage) -> Result<(u16, u16)> {
    let (w, h) = image.dimensions();
    match (u16::try_from(w), u16::try_from(h)) {
        (Ok(tw), Ok(th)) => Ok((tw, th)),
        _ => bail!("{w}x{h} image exceeds the {}px texture limit", u16::MAX),
    }
}

fn upload(image: &RgbaImage) -> Result<Texture2D> {
    let (w, h) = texture_size(image)?;
    let texture = Texture2D::from_rgba8(w, h, image.as_raw());
    texture.set_filter(FilterMode::Nearest);
    Ok(texture)
}

impl SceneSurface for MacroquadSurface {
    fn clear(&mut self, _bounds: SceneBounds) {
        clear_background(BLACK);
    }

    fn draw_background(&mut self, background: &Background) {
        if self.background_generation != Some(background.generation) {
            self.background_generation = Some(background.generation);
            self.background = upload(&background.image)
                .inspect_err(|e| error!(error = %e, generation = background.generation, "background not uploaded"))
                .ok();
        }
        if let Some(texture) = &self.background {
            draw_texture(texture, 0.0, 0.0, WHITE);
        }
    }

    fn draw_sprite(&mut self, rect: SpriteRect, mirrored: bool) {
        draw_texture_ex(
            &self.sprite,
            rect.x,
            rect.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(rect.w, rect.h)),
                flip_x: mirrored,
                ..Default::default()
            },
        );
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn screen_bounds() -> SceneBounds {
    SceneBounds::new(screen_width(), screen_height())
}

fn build() -> Result<(Scene, MacroquadSurface)> {
    let config = SimConfig::from_env()?;
    let assets = Assets::load_or_placeholder(&config.assets_dir);
    let surface = MacroquadSurface::new(&assets)?;
    let scene = SceneBuilder::new(config, assets).bounds(screen_bounds()).build()?;
    Ok((scene, surface))
}

fn window_conf() -> Conf {
    let defaults = SimConfig::default();
    Conf {
        window_title: "Penguins".to_string(),
        window_width: defaults.width as i32,
        window_height: defaults.height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

#[macroquad::main(window_conf)]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let (mut scene, mut surface) = match build() {
        Ok(parts) => parts,
        Err(e) => {
            error!(error = %e, "failed to start");
            return;
        }
    };

    let mut observer = NoopObserver;
    let mut driver = FrameDriver::start(get_time() * 1000.0);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        scene.resize(screen_bounds(), &mut observer);
        driver.frame(get_time() * 1000.0, &mut scene, &mut surface, &mut observer);
        next_frame().await;
    }

    driver.stop(&mut observer);
}
