use crate::error::ExtractError;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File destinations for a run's artifacts.
#[derive(Debug, Clone, Default)]
pub struct SinkConfig {
    /// Single file receiving all artifacts and diagnostics. When set,
    /// the per-kind sinks are ignored entirely.
    pub aggregate: Option<PathBuf>,

    /// Sink for script URLs only.
    pub scripts: Option<PathBuf>,

    /// Sink for unique words only.
    pub words: Option<PathBuf>,

    /// Sink for in-scope URLs only.
    pub urls: Option<PathBuf>,
}

/// The artifact kinds a run produces, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Scripts,
    Words,
    Urls,
}

impl ArtifactKind {
    fn heading(self) -> &'static str {
        match self {
            ArtifactKind::Scripts => "JS files found:",
            ArtifactKind::Words => "Unique words found:",
            ArtifactKind::Urls => "URLs found:",
        }
    }

    fn empty_notice(self) -> &'static str {
        match self {
            ArtifactKind::Scripts => "No JS files found.",
            ArtifactKind::Words => "No words found.",
            ArtifactKind::Urls => "No URLs found.",
        }
    }
}

enum Console {
    Stdout,
    Aggregate { path: PathBuf, file: File },
}

/// Routes artifacts and diagnostics to their configured destinations.
///
/// Without an aggregate sink the console is stdout and each artifact
/// kind may additionally append to its own file, opened lazily at
/// write time. With an aggregate sink, the file is truncated once at
/// construction and becomes the console; everything, diagnostics
/// included, lands there and the per-kind sinks are never touched.
pub struct OutputRouter {
    console: Console,
    scripts_sink: Option<PathBuf>,
    words_sink: Option<PathBuf>,
    urls_sink: Option<PathBuf>,
}

impl OutputRouter {
    pub fn new(sinks: &SinkConfig) -> Result<Self, ExtractError> {
        match &sinks.aggregate {
            Some(path) => {
                if sinks.scripts.is_some() || sinks.words.is_some() || sinks.urls.is_some() {
                    ::log::warn!("Aggregate output set; per-kind output files are ignored");
                }
                let file = File::create(path).map_err(|e| ExtractError::Sink {
                    path: path.clone(),
                    source: e,
                })?;
                Ok(Self {
                    console: Console::Aggregate {
                        path: path.clone(),
                        file,
                    },
                    scripts_sink: None,
                    words_sink: None,
                    urls_sink: None,
                })
            }
            None => Ok(Self {
                console: Console::Stdout,
                scripts_sink: sinks.scripts.clone(),
                words_sink: sinks.words.clone(),
                urls_sink: sinks.urls.clone(),
            }),
        }
    }

    /// Emits one artifact set: a labeled section on the console, plus
    /// one item per line appended to the kind's sink if one is
    /// configured.
    pub fn emit(&mut self, kind: ArtifactKind, items: &[String]) -> Result<(), ExtractError> {
        self.console_line("")?;
        self.console_line(kind.heading())?;
        self.console_line("")?;
        if items.is_empty() {
            self.console_line(kind.empty_notice())?;
        } else {
            for item in items {
                self.console_line(item)?;
            }
        }

        if let Some(path) = self.kind_sink(kind).cloned() {
            append_lines(&path, items)?;
        }
        Ok(())
    }

    /// Human-readable one-liner, e.g. the not-live notice. Captured by
    /// the aggregate file when that mode is active.
    pub fn notice(&mut self, message: &str) -> Result<(), ExtractError> {
        self.console_line("")?;
        self.console_line(message)
    }

    /// Failure diagnostic; same routing as `notice`.
    pub fn diagnostic(&mut self, message: &str) -> Result<(), ExtractError> {
        self.notice(message)
    }

    fn kind_sink(&self, kind: ArtifactKind) -> Option<&PathBuf> {
        match kind {
            ArtifactKind::Scripts => self.scripts_sink.as_ref(),
            ArtifactKind::Words => self.words_sink.as_ref(),
            ArtifactKind::Urls => self.urls_sink.as_ref(),
        }
    }

    fn console_line(&mut self, line: &str) -> Result<(), ExtractError> {
        match &mut self.console {
            Console::Stdout => {
                println!("{}", line);
                Ok(())
            }
            Console::Aggregate { path, file } => {
                writeln!(file, "{}", line).map_err(|e| ExtractError::Sink {
                    path: path.clone(),
                    source: e,
                })
            }
        }
    }
}

fn append_lines(path: &Path, items: &[String]) -> Result<(), ExtractError> {
    let sink_error = |e: std::io::Error| ExtractError::Sink {
        path: path.to_path_buf(),
        source: e,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(sink_error)?;
    for item in items {
        writeln!(file, "{}", item).map_err(sink_error)?;
    }
    Ok(())
}
