use anyhow::{Context, Result};
use ll_client::{FrameLink, open_serial};
use ll_engine::{ColorBuffer, ColorGenerator, Interval, SolidPattern, WavePattern, render};
use ll_model::{Frame, PackFormat};
use log::{debug, info};
use std::io::{Read, Write};
use std::time::{Duration, Instant};

use super::args::PatternsArgs;
use crate::report::RunReport;

/// Render the wave (plus optional tint) and send each changed frame.
///
/// The wave advances whenever `step_ms` has elapsed on `clock`. Returns once
/// `frames` frames have been sent.
pub fn run_patterns<P, W>(
    link: &mut FrameLink<P>,
    wave: &mut WavePattern,
    mut tint: Option<&mut SolidPattern>,
    format: PackFormat,
    frames: u32,
    step_ms: u32,
    clock: &mut dyn FnMut() -> u32,
    delay: Duration,
    echo_out: &mut W,
) -> Result<RunReport>
where
    P: Read + Write,
    W: Write,
{
    let mut buffer = ColorBuffer::new(wave.generator().len());
    let mut interval = Interval::new(step_ms, clock());
    debug!("Wave advances every {}ms", interval.interval_ms());
    let mut sent = 0;
    let start = Instant::now();

    while sent < frames {
        if interval.update(clock()) {
            interval.clear_expired();
            wave.advance();
        }

        let changed = match tint.as_deref_mut() {
            Some(tint) => render(&mut [&mut *wave, tint], &mut buffer),
            None => render(&mut [&mut *wave], &mut buffer),
        };
        if changed {
            let frame = Frame::colors(format, &buffer);
            let echoed = link
                .exchange(&frame, echo_out)
                .with_context(|| format!("Failed to send frame {sent}"))?;
            debug!("Frame {sent}: {echoed} echoed lines");
            sent += 1;
        }

        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }

    Ok(RunReport {
        trials: frames,
        elapsed: start.elapsed(),
    })
}

pub fn handle_patterns(args: PatternsArgs) -> Result<()> {
    let config = args.link.resolve()?;
    let frames = args.frames.unwrap_or(config.trials);

    let generator = ColorGenerator::new(config.strip_length).context("Invalid strip length")?;
    let mut wave = WavePattern::new(generator);
    let mut tint = args.tint.map(SolidPattern::new);

    let mut link = open_serial(&config)
        .with_context(|| format!("Failed to open serial port {}", config.device))?;

    if let Some(timeout) = config.ready_timeout() {
        link.wait_for_ready(&config.ready_token, timeout)
            .context("Waiting for device")?;
    }

    info!(
        "Streaming {frames} pattern frames, wave step {}ms, tint {}",
        args.step_ms,
        tint.as_ref()
            .map(|t| t.color().to_string())
            .unwrap_or_else(|| "none".to_string())
    );

    let start = Instant::now();
    let mut clock = move || start.elapsed().as_millis() as u32;
    let stdout = std::io::stdout();
    let report = run_patterns(
        &mut link,
        &mut wave,
        tint.as_mut(),
        config.format,
        frames,
        args.step_ms,
        &mut clock,
        config.delay(),
        &mut stdout.lock(),
    )?;
    link.close();

    println!("{report}");
    Ok(())
}
