// this module is transparently re-exported by its parent `lib`
use crate::{Error, Format, RdfParser};
use rdfparse_api::source::{SinkError, SourceError, TripleSource};
use rdfparse_term::Triple;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

/// The name of the threads spawned by [`BackgroundParser`].
pub const BACKGROUND_THREAD_NAME: &str = "rdfparse-reader";

/// A parser running on a dedicated thread,
/// which sends the triples it parses through a bounded channel.
///
/// A `BackgroundParser` is an iterator of `Result<Triple, Error>`,
/// and therefore also a [`TripleSource`].
/// In [permissive](crate::ErrorMode::Permissive) mode,
/// the recorded errors are yielded as they are encountered, and parsing goes on;
/// in strict mode, the first error is the last item.
///
/// Dropping the `BackgroundParser` stops the parsing thread
/// as soon as it tries to send its next triple.
#[derive(Debug)]
pub struct BackgroundParser {
    rx: Receiver<Result<Triple, Error>>,
    handle: JoinHandle<()>,
}

impl BackgroundParser {
    /// Parse `read` on a new thread, in the configured format of `parser` (Turtle by default).
    ///
    /// At most `capacity` items are buffered in the channel;
    /// the parsing thread blocks when it is full.
    pub fn spawn<R>(parser: &RdfParser, read: R, capacity: usize) -> Result<Self, Error>
    where
        R: Read + Send + 'static,
    {
        let format = parser.format().unwrap_or_default();
        Self::spawn_as(parser, format, read, capacity)
    }

    /// Parse the file at `path` on a new thread,
    /// in the configured format of `parser`, or in the format guessed from its extension.
    ///
    /// The file is opened before the thread is spawned,
    /// so a missing file or an unknown format is reported immediately.
    pub fn spawn_file<P: AsRef<Path>>(
        parser: &RdfParser,
        path: P,
        capacity: usize,
    ) -> Result<Self, Error> {
        let path = path.as_ref();
        let format = parser.format_for_path(path)?;
        let file = File::open(path)?;
        log::debug!("parsing {} as {format} in the background", path.display());
        Self::spawn_as(parser, format, file, capacity)
    }

    fn spawn_as<R>(parser: &RdfParser, format: Format, read: R, capacity: usize) -> Result<Self, Error>
    where
        R: Read + Send + 'static,
    {
        let (tx, rx) = sync_channel(capacity);
        let parser = parser.clone();
        let handle = thread::Builder::new()
            .name(BACKGROUND_THREAD_NAME.into())
            .spawn(move || run(&parser, format, read, &tx))?;
        Ok(BackgroundParser { rx, handle })
    }

    /// Stop receiving triples, and wait for the parsing thread to terminate.
    ///
    /// Return `false` if the parsing thread panicked.
    pub fn join(self) -> bool {
        let BackgroundParser { rx, handle } = self;
        drop(rx);
        handle.join().is_ok()
    }
}

impl Iterator for BackgroundParser {
    type Item = Result<Triple, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rx.recv().ok()
    }
}

fn run<R: Read>(parser: &RdfParser, format: Format, read: R, tx: &SyncSender<Result<Triple, Error>>) {
    log::debug!("background parser started ({format})");
    let mut reader = parser.parse_read_as(format, BufReader::new(read));
    loop {
        let res = reader.try_for_some_triple(|t| tx.send(Ok(t)));
        for err in reader.take_errors() {
            if tx.send(Err(err.into())).is_err() {
                log::debug!("background parser stopped: receiver dropped");
                return;
            }
        }
        match res {
            Ok(true) => {}
            Ok(false) => break,
            Err(SourceError(err)) => {
                // the receiver may be gone already
                let _ = tx.send(Err(err.into()));
                break;
            }
            Err(SinkError(_)) => {
                log::debug!("background parser stopped: receiver dropped");
                return;
            }
        }
    }
    log::debug!(
        "background parser stopped after {} triples",
        reader.triple_count()
    );
}
