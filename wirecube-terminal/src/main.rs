/// Wirecube Terminal - Ambient Rotating Wireframe
///
/// Renders a rotating wireframe cube in the terminal, with the small UI
/// shell around it: a boot sequence, a clock, and a navigation overlay.
/// Controls:
///   - M: Toggle the navigation overlay
///   - 1-4: Pick a navigation entry (closes the overlay)
///   - Q/ESC: Quit

use anyhow::Result;
use clap::Parser;
use log::info;
use std::io;
use wirecube_core::{Engine, Wireframe};
use wirecube_terminal::{boot, TerminalApp};

#[derive(Parser, Debug)]
#[command(name = "wirecube", version, about = "Rotating wireframe cube for the terminal")]
struct Args {
    /// Radians added to both rotation angles each frame
    #[arg(long, default_value_t = wirecube_core::SPIN_RATE)]
    spin_rate: f64,

    /// Wireframe size in cells; fitted to the terminal when omitted
    #[arg(long)]
    scale: Option<f64>,

    /// Target frames per second
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Jump straight to the renderer
    #[arg(long)]
    skip_boot: bool,

    /// Disable the terminal bell on UI interactions
    #[arg(long)]
    mute: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if !args.skip_boot {
        let stdin = io::stdin();
        boot::play(&mut io::stdout(), boot::MESSAGE_DELAY)?;
        boot::wait_for_enter(&mut io::stdout(), &mut stdin.lock())?;
    }

    let mut engine = Engine::new(Wireframe::cube());
    engine.spin_rate = args.spin_rate;
    engine.scale = match args.scale {
        Some(scale) => scale,
        None => {
            let (cols, rows) = crossterm::terminal::size()?;
            fit_scale(cols, rows)
        }
    };

    info!("starting renderer at {} fps, scale {:.1}", args.fps, engine.scale);
    let mut app = TerminalApp::new(engine, args.fps, args.mute)?;
    app.run()?;

    Ok(())
}

/// Scale that keeps the cube inside the cell grid with some margin.
///
/// Projected cube corners reach about +/-2.1 in normalized space at the
/// closest point of the spin, and the logical grid is (cols, rows * 2).
fn fit_scale(cols: u16, rows: u16) -> f64 {
    let logical = f64::from(cols).min(f64::from(rows) * 2.0);
    logical / 5.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_scale_uses_shorter_logical_axis() {
        // 80x24 terminal: logical grid is 80x48, shorter axis 48
        assert!((fit_scale(80, 24) - 9.6).abs() < 1e-9);
        // Tall narrow terminal: columns limit the size
        assert!((fit_scale(40, 60) - 8.0).abs() < 1e-9);
    }
}
