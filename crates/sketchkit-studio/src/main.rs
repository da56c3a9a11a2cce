use anyhow::{Context, Result};
use sketchkit_engine::coords::Vec2;
use sketchkit_engine::input::FrameInput;
use sketchkit_engine::logging::{LoggingConfig, init_logging};
use sketchkit_engine::numeric::calc::TWO_PI;
use sketchkit_engine::paint::ColorMode;
use sketchkit_engine::scene::DrawList;
use sketchkit_engine::shape::EndMode;
use sketchkit_engine::style::ShapeMode;
use sketchkit_engine::{FrameDriver, Sketch, SketchApp, SketchConfig};

const DEFAULT_FRAMES: u64 = 120;

/// Grid of jittered tiles with a closed curve on top; a spinning box in 3D mode.
struct Mosaic {
    cols: u32,
    rows: u32,
    angle: f64,
    taps: u32,
}

impl SketchApp<DrawList> for Mosaic {
    fn setup(&mut self, s: &mut Sketch<DrawList>) {
        s.color_mode(ColorMode::Hsb);
        s.rect_mode(ShapeMode::Center);
        s.stroke_weight(1.5);
        s.random_seed(7);
    }

    fn draw(&mut self, s: &mut Sketch<DrawList>) {
        s.background(0);

        let cell = Vec2::new(s.width() / self.cols as f64, s.height() / self.rows as f64);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let mut tile = s.push_scope();
                tile.translate((col as f64 + 0.5) * cell.x, (row as f64 + 0.5) * cell.y);
                let tilt = tile.random_range(-0.2, 0.2);
                tile.rotate(tilt);
                let hue = tile.random(360);
                tile.fill((hue, 60, 90));
                tile.rect(0, 0, cell.x * 0.8, cell.y * 0.8);
            }
        }

        s.no_fill();
        s.stroke((0, 0, 100));
        s.begin_shape();
        let (cx, cy) = (s.width() / 2.0, s.height() / 2.0);
        for i in 0..6 {
            let a = self.angle + TWO_PI * i as f64 / 6.0;
            let r = if i % 2 == 0 { 80.0 } else { 40.0 };
            s.curve_vertex(cx + r * a.cos(), cy + r * a.sin());
        }
        s.end_shape(EndMode::Close);

        if s.is_3d() {
            s.push();
            s.translate_3d(0, 0, -20);
            s.rotate_y(self.angle);
            s.fill((200, 80, 100));
            s.box_(4, 4, 4);
            s.pop();
        }

        self.angle += s.delta_time();
    }

    fn touch_started(&mut self, s: &mut Sketch<DrawList>) {
        self.taps += 1;
        log::info!("tap {} at ({:.0}, {:.0})", self.taps, s.touch_x(), s.touch_y());
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut args = std::env::args().skip(1);
    let mut frames = DEFAULT_FRAMES;
    let mut enable_3d = false;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--3d" => enable_3d = true,
            "--frames" => {
                let value = args.next().context("--frames needs a value")?;
                frames = value.parse().with_context(|| format!("invalid frame count '{value}'"))?;
            }
            other => anyhow::bail!("unknown argument '{other}'"),
        }
    }

    let config = SketchConfig {
        title: "mosaic".into(),
        enable_3d,
        ..SketchConfig::headless(640.0, 480.0)
    };
    let app = Mosaic { cols: 8, rows: 6, angle: 0.0, taps: 0 };
    let mut driver = FrameDriver::new(config, DrawList::new(), app);

    // A single synthetic tap halfway through the run.
    let tap_at = frames / 2;
    let drawn = driver.run_with(Some(frames), |frame| {
        if frame == tap_at {
            FrameInput::with_touches(vec![Vec2::new(320.0, 240.0)])
        } else {
            FrameInput::default()
        }
    })?;

    for (kind, count) in driver.surface().summary() {
        log::info!("last frame: {count:>4} {kind}");
    }

    let (app, surface) = driver.finish();
    let geometry = surface.geometry_counters();
    log::info!(
        "{drawn} frames, {} tap(s); geometry created {}, released {}",
        app.taps,
        geometry.created,
        geometry.released,
    );
    Ok(())
}
