//! Non-canonical, no-echo terminal mode for the duration of an edit.

use std::io::{self, Stdin};
use std::process;
use std::thread::{self, JoinHandle};

use rustix::termios::{self, LocalModes, OptionalActions, SpecialCodeIndex, Termios};
use signal_hook::consts::{SIGHUP, SIGINT, SIGQUIT, SIGTERM};
use signal_hook::iterator::{Handle, Signals};

/// Signals that terminate the process while the terminal is raw.
const TERMINATING_SIGNALS: [i32; 4] = [SIGINT, SIGTERM, SIGHUP, SIGQUIT];

/// Guard that keeps stdin in non-canonical mode with echo disabled and
/// restores the previous settings when dropped.
///
/// Only `ICANON` and `ECHO` are cleared, so the terminal still delivers
/// Enter as a line feed and translates written line feeds to CRLF.
/// `ISIG` stays set, so Ctrl-C still raises `SIGINT`. While the guard
/// is alive a watcher thread catches the terminating signals, restores
/// the saved settings and then lets the signal take its default action.
pub struct RawMode {
    stdin: Stdin,
    original: Termios,
    signals: Handle,
    watcher: Option<JoinHandle<()>>,
}

fn restore(saved: &Termios) -> rustix::io::Result<()> {
    termios::tcsetattr(io::stdin(), OptionalActions::Now, saved)
}

fn watch(mut signals: Signals, saved: Termios) {
    if let Some(signal) = signals.forever().next() {
        match restore(&saved) {
            Ok(()) => log::debug!("terminal mode restored on signal {}", signal),
            Err(err) => log::error!("failed to restore terminal mode: {}", err),
        }

        if let Err(err) = signal_hook::low_level::emulate_default_handler(signal) {
            log::error!("failed to raise signal {}: {}", signal, err);
        }

        process::exit(128 + signal);
    }
}

impl RawMode {
    pub fn enter() -> io::Result<Self> {
        let stdin = io::stdin();
        let original = termios::tcgetattr(&stdin)?;

        let signals = Signals::new(TERMINATING_SIGNALS)?;
        let handle = signals.handle();
        let saved = original.clone();
        let watcher = thread::spawn(move || watch(signals, saved));

        let guard = Self {
            stdin,
            original,
            signals: handle,
            watcher: Some(watcher),
        };

        let mut raw = guard.original.clone();
        raw.local_modes.remove(LocalModes::ICANON | LocalModes::ECHO);
        raw.special_codes[SpecialCodeIndex::VMIN] = 1;
        raw.special_codes[SpecialCodeIndex::VTIME] = 0;

        termios::tcsetattr(&guard.stdin, OptionalActions::Now, &raw)?;

        log::debug!("terminal switched to non-canonical mode");

        Ok(guard)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        self.signals.close();

        if let Some(watcher) = self.watcher.take() {
            if watcher.join().is_err() {
                log::error!("signal watcher panicked");
            }
        }

        match termios::tcsetattr(&self.stdin, OptionalActions::Now, &self.original) {
            Ok(()) => log::debug!("terminal mode restored"),
            Err(err) => log::error!("failed to restore terminal mode: {}", err),
        }
    }
}
