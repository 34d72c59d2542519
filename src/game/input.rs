//! Sources of move notation.

use std::collections::VecDeque;
use std::fmt;
use std::io::BufRead;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use log::{debug, warn};

/// Why no more notation can be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSignal {
    /// The input stream is exhausted.
    EndOfInput,
    /// Reading was interrupted by the user.
    Interrupted,
}

impl fmt::Display for InputSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSignal::EndOfInput => write!(f, "end of input"),
            InputSignal::Interrupted => write!(f, "interrupted"),
        }
    }
}

/// Supplies one notation string per call.
pub trait NotationSource {
    fn next_notation(&mut self) -> Result<String, InputSignal>;
}

impl<S: NotationSource + ?Sized> NotationSource for &mut S {
    fn next_notation(&mut self) -> Result<String, InputSignal> {
        (**self).next_notation()
    }
}

/// Reads one line per notation from a buffered reader.
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        LineSource {
            reader,
            line: String::new(),
        }
    }
}

impl<R: BufRead> NotationSource for LineSource<R> {
    /// `read_line` retries reads that fail with `ErrorKind::Interrupted`, so
    /// this source never reports `InputSignal::Interrupted`. Use a
    /// `ChannelSource` to deliver user interrupts.
    fn next_notation(&mut self) -> Result<String, InputSignal> {
        self.line.clear();
        match self.reader.read_line(&mut self.line) {
            Ok(0) => Err(InputSignal::EndOfInput),
            Ok(_) => Ok(self.line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                warn!("input error, treating as end of input: {e}");
                Err(InputSignal::EndOfInput)
            }
        }
    }
}

/// A fixed list of notation strings, consumed in order.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    moves: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedSource {
            moves: moves.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of notation strings not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl NotationSource for ScriptedSource {
    fn next_notation(&mut self) -> Result<String, InputSignal> {
        self.moves.pop_front().ok_or(InputSignal::EndOfInput)
    }
}

/// Input delivered to a `ChannelSource`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Interrupt,
    End,
}

/// Notation from a channel fed by a reader thread and, for example, a
/// Ctrl-C handler.
#[derive(Debug)]
pub struct ChannelSource {
    events: Receiver<InputEvent>,
}

impl ChannelSource {
    pub fn new(events: Receiver<InputEvent>) -> Self {
        ChannelSource { events }
    }
}

impl NotationSource for ChannelSource {
    fn next_notation(&mut self) -> Result<String, InputSignal> {
        match self.events.recv() {
            Ok(InputEvent::Line(line)) => Ok(line),
            Ok(InputEvent::Interrupt) => Err(InputSignal::Interrupted),
            Ok(InputEvent::End) | Err(_) => Err(InputSignal::EndOfInput),
        }
    }
}

/// Forward every line of `reader` to `events`, then send `InputEvent::End`.
///
/// The thread exits early once the receiving side is dropped.
pub fn spawn_line_reader<R>(reader: R, events: Sender<InputEvent>) -> JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        let mut lines = LineSource::new(reader);
        while let Ok(line) = lines.next_notation() {
            if events.send(InputEvent::Line(line)).is_err() {
                debug!("input channel closed, stopping line reader");
                return;
            }
        }
        if events.send(InputEvent::End).is_err() {
            debug!("input channel closed before end of input");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    /// Fails its first read with `ErrorKind::Interrupted`.
    struct FlakyReader {
        inner: Cursor<&'static str>,
        failed: bool,
    }

    impl Read for FlakyReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.inner.read(buf)
        }
    }

    impl BufRead for FlakyReader {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            if !self.failed {
                self.failed = true;
                return Err(io::ErrorKind::Interrupted.into());
            }
            self.inner.fill_buf()
        }

        fn consume(&mut self, amt: usize) {
            self.inner.consume(amt);
        }
    }

    #[test]
    fn test_line_source_strips_line_endings() {
        let mut source = LineSource::new(Cursor::new("e4\r\nNf3\n d5 \n"));
        assert_eq!(source.next_notation(), Ok("e4".to_string()));
        assert_eq!(source.next_notation(), Ok("Nf3".to_string()));
        assert_eq!(source.next_notation(), Ok(" d5 ".to_string()));
        assert_eq!(source.next_notation(), Err(InputSignal::EndOfInput));
    }

    #[test]
    fn test_line_source_last_line_without_newline() {
        let mut source = LineSource::new(Cursor::new("Qh4#"));
        assert_eq!(source.next_notation(), Ok("Qh4#".to_string()));
        assert_eq!(source.next_notation(), Err(InputSignal::EndOfInput));
    }

    #[test]
    fn test_line_source_retries_interrupted_read() {
        let reader = FlakyReader {
            inner: Cursor::new("e4\n"),
            failed: false,
        };
        let mut source = LineSource::new(reader);
        assert_eq!(source.next_notation(), Ok("e4".to_string()));
        assert_eq!(source.next_notation(), Err(InputSignal::EndOfInput));
    }

    #[test]
    fn test_channel_source_interrupt() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut source = ChannelSource::new(rx);
        tx.send(InputEvent::Line("e4".to_string())).unwrap();
        tx.send(InputEvent::Interrupt).unwrap();
        assert_eq!(source.next_notation(), Ok("e4".to_string()));
        assert_eq!(source.next_notation(), Err(InputSignal::Interrupted));
        drop(tx);
        assert_eq!(source.next_notation(), Err(InputSignal::EndOfInput));
    }

    #[test]
    fn test_line_reader_thread() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let handle = spawn_line_reader(Cursor::new("f3\ne5\n"), tx);
        let mut source = ChannelSource::new(rx);
        assert_eq!(source.next_notation(), Ok("f3".to_string()));
        assert_eq!(source.next_notation(), Ok("e5".to_string()));
        assert_eq!(source.next_notation(), Err(InputSignal::EndOfInput));
        handle.join().unwrap();
    }

    #[test]
    fn test_scripted_source() {
        let mut source = ScriptedSource::new(["f3", "e5"]);
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.next_notation(), Ok("f3".to_string()));
        assert_eq!(source.next_notation(), Ok("e5".to_string()));
        assert_eq!(source.next_notation(), Err(InputSignal::EndOfInput));
        assert_eq!(source.remaining(), 0);
    }
}
