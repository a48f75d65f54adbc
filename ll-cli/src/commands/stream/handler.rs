use anyhow::{Context, Result};
use ll_client::{FrameLink, open_serial};
use ll_engine::ColorGenerator;
use ll_model::{Frame, PackFormat};
use log::{debug, info};
use std::io::{Read, Write};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use super::args::StreamArgs;
use crate::report::RunReport;

/// Update the generator and send one frame per trial.
///
/// Echoed lines are copied to `echo_out` after every frame.
pub fn run_stream<P, W>(
    link: &mut FrameLink<P>,
    generator: &mut ColorGenerator,
    format: PackFormat,
    trials: u32,
    delay: Duration,
    echo_out: &mut W,
) -> Result<RunReport>
where
    P: Read + Write,
    W: Write,
{
    let start = Instant::now();
    for trial in 0..trials {
        generator.update();
        let frame = Frame::colors(format, generator.color_bytes());
        let echoed = link
            .exchange(&frame, echo_out)
            .with_context(|| format!("Failed to send frame {trial}"))?;
        debug!("Frame {trial}: {} bytes, {echoed} echoed lines", frame.payload().len());

        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }

    Ok(RunReport {
        trials,
        elapsed: start.elapsed(),
    })
}

pub fn handle_stream(args: StreamArgs) -> Result<()> {
    let config = args.link.resolve()?;
    let trials = args.trials.unwrap_or(config.trials);

    let seed = args.seed.unwrap_or_else(clock_seed);
    let mut generator = ColorGenerator::new(config.strip_length)
        .context("Invalid strip length")?
        .with_scheme(args.scheme)
        .with_seed(seed);
    if args.cym {
        generator = generator.with_cym_seed();
    }

    let mut link = open_serial(&config)
        .with_context(|| format!("Failed to open serial port {}", config.device))?;

    if let Some(timeout) = config.ready_timeout() {
        link.wait_for_ready(&config.ready_token, timeout)
            .context("Waiting for device")?;
    }

    info!(
        "Streaming {trials} frames: {} LEDs, {} precision, {} scheme",
        config.strip_length,
        config.format,
        generator.scheme()
    );
    let stdout = std::io::stdout();
    let report = run_stream(
        &mut link,
        &mut generator,
        config.format,
        trials,
        config.delay(),
        &mut stdout.lock(),
    )?;
    link.close();

    println!("{report}");
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
