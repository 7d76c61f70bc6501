use std::collections::BTreeSet;
use std::future::Future;
use std::time::Duration;

use chrono::{Local, NaiveTime, Timelike};

use crate::error::ClockError;
use crate::grid::{self, Cell, GRID};
use crate::sink::PanelSink;
use crate::translator::{self, Translation};

/// Everything a sink needs to show one minute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    pub hour: u32,
    pub minute: u32,
    pub translation: Translation,
    pub cells: BTreeSet<Cell>,
}

impl ClockFace {
    pub fn at(hour: u32, minute: u32) -> Result<Self, ClockError> {
        let translation = translator::translate(hour, minute)?;
        let cells = grid::cells_for_words(&translation.words);
        Ok(Self {
            hour,
            minute,
            translation,
            cells,
        })
    }

    pub fn dots(&self) -> u8 {
        self.translation.dots
    }

    pub fn is_lit(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Plain-text face: corner dots above and below, unlit letters as `·`.
    pub fn ascii(&self) -> String {
        let dots = self.dot_marks();
        let mut out = format!("  {}         {}\n", dots[0], dots[1]);
        for (row, letters) in GRID.iter().enumerate() {
            out.push_str("  ");
            for (col, letter) in letters.iter().enumerate() {
                out.push(if self.is_lit((row, col)) { *letter } else { '·' });
                out.push(' ');
            }
            out.push('\n');
        }
        out.push_str(&format!("  {}         {}\n", dots[3], dots[2]));
        out
    }

    /// `●` for each shown minute dot, `○` for the rest, in corner order.
    pub fn dot_marks(&self) -> [char; 4] {
        let mut marks = ['○'; 4];
        for mark in marks.iter_mut().take(usize::from(self.dots())) {
            *mark = '●';
        }
        marks
    }
}

/// Where the driver reads the time from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    Local,
    Fixed(NaiveTime),
}

impl Clock {
    pub fn now(&self) -> NaiveTime {
        match self {
            Clock::Local => Local::now().time(),
            Clock::Fixed(time) => *time,
        }
    }
}

/// Parses `HH:MM` for a frozen clock.
pub fn parse_time(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M")
}

/// Remembers the last shown minute so the face is only redrawn on change.
#[derive(Debug, Default)]
pub struct MinuteTracker {
    last: Option<(u32, u32)>,
}

impl MinuteTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True on the first call and whenever the minute differs from the last call.
    pub fn observe(&mut self, hour: u32, minute: u32) -> bool {
        let changed = self.last != Some((hour, minute));
        self.last = Some((hour, minute));
        changed
    }
}

/// Time left until the next whole second.
pub fn until_next_second(time: NaiveTime) -> Duration {
    // leap seconds report nanos above 1e9
    let nanos = time.nanosecond().min(999_999_999);
    Duration::from_nanos(u64::from(1_000_000_000 - nanos))
}

/// Translates the clock's current minute if it changed since the last poll.
pub fn poll(clock: &Clock, tracker: &mut MinuteTracker) -> Result<Option<ClockFace>, ClockError> {
    let now = clock.now();
    log::debug!("minute check at {}", now.format("%H:%M:%S"));
    if !tracker.observe(now.hour(), now.minute()) {
        return Ok(None);
    }
    let face = ClockFace::at(now.hour(), now.minute())?;
    log::info!(
        "{:02}:{:02} {} (+{})",
        face.hour,
        face.minute,
        face.translation.phrase(),
        face.dots()
    );
    Ok(Some(face))
}

/// Resolves on SIGINT or SIGTERM.
///
/// The handlers are installed before this returns, so signals arriving before
/// the future is first polled are not lost. Must be called inside a tokio runtime.
#[cfg(unix)]
pub fn shutdown_signal() -> std::io::Result<impl Future<Output = ()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    Ok(async move {
        tokio::select! {
            _ = interrupt.recv() => log::info!("Received SIGINT"),
            _ = terminate.recv() => log::info!("Received SIGTERM"),
        }
    })
}

/// Resolves on Ctrl+C.
#[cfg(not(unix))]
pub fn shutdown_signal() -> std::io::Result<impl Future<Output = ()>> {
    Ok(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("failed to listen for ctrl+c: {}", e);
            std::future::pending::<()>().await;
        }
    })
}

/// Polls `clock` once a second and shows every new minute on `sink` until
/// `shutdown` resolves. The sink is cleared on the way out, also after errors.
/// A failed clear is only returned when nothing else went wrong first.
pub async fn run<S: PanelSink>(
    clock: Clock,
    sink: &mut S,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<()> {
    let mut tracker = MinuteTracker::new();
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    tokio::pin!(shutdown);

    let result = loop {
        tokio::select! {
            _ = &mut shutdown => {
                log::info!("Shutdown requested");
                break Ok(());
            }
            _ = interval.tick() => {
                match poll(&clock, &mut tracker) {
                    Ok(Some(face)) => {
                        if let Err(e) = sink.show(&face) {
                            break Err(e);
                        }
                    }
                    Ok(None) => {}
                    Err(e) => break Err(e.into()),
                }
            }
        }
    };

    if let Err(e) = sink.clear() {
        if result.is_ok() {
            return Err(e);
        }
        log::error!("failed to clear panel: {}", e);
    }
    result
}
