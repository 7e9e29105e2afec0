use std::io::{stdout, Write};
use std::thread::sleep;
use std::time::{Duration, Instant};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{size, Clear, ClearType},
    ExecutableCommand, QueueableCommand,
};
use rand::Rng;

use verlet2d::math::clamp;
use verlet2d::{Vector2, VerletBody, VerletWorld};

const FRAME_DURATION: Duration = Duration::from_millis(33); // ~30 FPS
const SIMULATION_DURATION: f64 = 15.0; // seconds
const SPAWN_INTERVAL: Duration = Duration::from_secs(1);
const ARENA_RADIUS: f64 = 18.0;
const BALL_CHARS: [char; 5] = ['●', '○', '◆', '◇', '■'];
const BALL_COLORS: [Color; 5] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize terminal
    let mut stdout = stdout();
    stdout.execute(Hide)?;

    let (width, height) = size()?;
    let center_col = width as f64 / 2.0;
    let center_row = height as f64 / 2.0;

    // Terminal cells are roughly twice as tall as wide
    let scale_y = (height as f64 / 2.0 - 1.0) / ARENA_RADIUS;
    let scale_x = scale_y * 2.0;

    // The simulation core: gravity pulling down, a round arena to fall into
    let mut world = VerletWorld::new(Vector2::new(0.0, -9.81), 8)?;
    world.set_constraint(Vector2::zero(), ARENA_RADIUS)?;

    let mut rng = rand::thread_rng();
    let started = Instant::now();
    let mut last_frame = Instant::now();
    let mut last_spawn = Instant::now() - SPAWN_INTERVAL;

    while started.elapsed().as_secs_f64() < SIMULATION_DURATION {
        // One new ball per second, dropped near the top with a sideways nudge
        if last_spawn.elapsed() >= SPAWN_INTERVAL {
            last_spawn = Instant::now();

            let radius = rng.gen_range(0.5..1.5);
            let x = rng.gen_range(-3.0..3.0);
            let body = VerletBody::new(Vector2::new(x, ARENA_RADIUS * 0.6), radius)?;
            let handle = world.add_body(body);

            let velocity = Vector2::new(rng.gen_range(-4.0..4.0), 0.0);
            let seed_dt = FRAME_DURATION.as_secs_f64() / world.get_config().substeps as f64;
            world.get_body_mut(handle)?.set_velocity(velocity, seed_dt);
        }

        // Measured frame time, clamped so a stalled terminal cannot blow up
        // the integration
        let frame_dt = clamp(last_frame.elapsed().as_secs_f64(), 1.0 / 120.0, 1.0 / 30.0);
        last_frame = Instant::now();
        world.step(frame_dt)?;

        // Draw the arena outline and every ball at its read-back position
        stdout.queue(Clear(ClearType::All))?;

        for i in 0..72 {
            let angle = i as f64 * std::f64::consts::TAU / 72.0;
            let col = center_col + angle.cos() * ARENA_RADIUS * scale_x;
            let row = center_row - angle.sin() * ARENA_RADIUS * scale_y;
            if col >= 0.0 && row >= 0.0 && col < width as f64 && row < height as f64 {
                stdout
                    .queue(MoveTo(col as u16, row as u16))?
                    .queue(Print('·'))?;
            }
        }

        for (i, (_, body)) in world.bodies().enumerate() {
            let position = body.get_position();
            let col = center_col + position.x * scale_x;
            let row = center_row - position.y * scale_y;
            if col >= 0.0 && row >= 0.0 && col < width as f64 && row < height as f64 {
                let index = i % BALL_CHARS.len();
                stdout
                    .queue(MoveTo(col as u16, row as u16))?
                    .queue(SetForegroundColor(BALL_COLORS[index]))?
                    .queue(Print(BALL_CHARS[index]))?
                    .queue(ResetColor)?;
            }
        }

        stdout
            .queue(MoveTo(0, 0))?
            .queue(Print(format!(
                "balls: {}  t: {:.1}s",
                world.body_count(),
                world.get_time()
            )))?;
        stdout.flush()?;

        sleep(FRAME_DURATION);
    }

    // Restore terminal
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(MoveTo(0, 0))?;
    stdout.execute(Show)?;

    Ok(())
}
