//! Progress bar for the code stream, see <https://docs.rs/indicatif>

use std::io::Read;
use std::time::Duration;

use indicatif::{HumanBytes, HumanCount, HumanDuration, ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::info;

/// Wraps the code file reader and advances a progress bar by the number of characters
/// the decoder pulled out of it.
pub struct ProgressMonitor<R: Read> {
    /// Size of the code file
    pub total: u64,
    /// Characters handed to the decoder so far
    pub read: u64,
    reader: R,
    progress_bar: ProgressBar,
}

impl<R: Read> ProgressMonitor<R> {
    pub fn new(reader: R, total: u64) -> Self {
        let progress_bar = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::with_template(
            "{wide_bar} {binary_bytes}/{binary_total_bytes} of code  \n[est. {eta} remaining]",
        ) {
            progress_bar.set_style(style);
        }
        // The default is 20hz, this reduces rendering overhead
        progress_bar.set_draw_target(ProgressDrawTarget::stderr_with_hz(8));
        Self {
            reader,
            total,
            read: 0,
            progress_bar,
        }
    }

    fn update(&mut self, delta: u64) {
        self.progress_bar.inc(delta);
        if self.read >= self.total && !self.progress_bar.is_finished() {
            self.progress_bar.finish_and_clear();
            let elapsed = self.progress_bar.elapsed();
            info!(
                "read {} of code in {} ({} chars/s avg)",
                HumanBytes(self.total),
                HumanDuration(elapsed),
                HumanCount(chars_per_second(self.total, elapsed))
            );
        }
    }
}

impl<R: Read> Read for ProgressMonitor<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let out = self.reader.read(buf)?;
        self.read += out as u64;
        self.update(out as u64);
        Ok(out)
    }
}

fn chars_per_second(chars: u64, elapsed: Duration) -> u64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        (chars as f64 / secs) as u64
    } else {
        chars
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;
    use std::time::Duration;

    use super::{chars_per_second, ProgressMonitor};

    #[test]
    fn average_rate() {
        assert_eq!(chars_per_second(1000, Duration::from_millis(500)), 2000);
        assert_eq!(chars_per_second(1000, Duration::from_secs(4)), 250);
        assert_eq!(chars_per_second(7, Duration::ZERO), 7);
    }

    #[test]
    fn counts_what_passes_through() {
        let data = b"0101 1100\n";
        let mut monitor = ProgressMonitor::new(&data[..], data.len() as u64);
        let mut out = Vec::new();
        monitor.read_to_end(&mut out).unwrap();
        assert_eq!(out, data);
        assert_eq!(monitor.read, monitor.total);
    }
}
