use tracing::debug;

use crate::engine::RestoreError;
use crate::scan::Tokenizer;

/// One separator code point and the byte offset it started at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEntry {
    pub ch: char,
    pub offset: usize,
}

impl TraceEntry {
    fn end(&self) -> usize {
        self.offset + self.ch.len_utf8()
    }
}

/// Separators seen during one tokenize call, sorted by offset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeparatorTrace {
    entries: Vec<TraceEntry>,
    /// Whether the separators were also emitted as tokens.
    separators_kept: bool,
}

impl SeparatorTrace {
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|entry| entry.ch)
    }

    pub fn offsets(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|entry| entry.offset)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn separators_kept(&self) -> bool {
        self.separators_kept
    }

    /// Groups entries into maximal runs of byte-adjacent separators.
    pub fn runs(&self) -> Vec<&[TraceEntry]> {
        let mut runs = Vec::new();
        let mut start = 0;

        for i in 1..=self.entries.len() {
            let run_ends = i == self.entries.len()
                || self.entries[i].offset != self.entries[i - 1].end();
            if run_ends {
                runs.push(&self.entries[start..i]);
                start = i;
            }
        }

        runs
    }
}

/// Tokens of one input together with the separators removed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized<'a> {
    pub tokens: Vec<&'a str>,
    pub trace: SeparatorTrace,
}

impl Tokenized<'_> {
    pub fn restore(&self) -> Result<String, RestoreError> {
        restore(&self.tokens, &self.trace)
    }
}

impl Tokenizer {
    /// Tokenizes `content` and records every separator for [`restore`].
    pub fn tokenize_with_trace<'a>(&self, content: &'a str) -> Tokenized<'a> {
        let scan = self.scan(content.as_bytes());

        let entries = scan
            .separators
            .into_iter()
            .filter_map(|range| {
                let offset = range.start;
                content[range].chars().next().map(|ch| TraceEntry { ch, offset })
            })
            .collect();

        Tokenized {
            tokens: scan.tokens.into_iter().map(|range| &content[range]).collect(),
            trace: SeparatorTrace {
                entries,
                separators_kept: self.keeps_separators(),
            },
        }
    }
}

/// Rebuilds the original text from `tokens` and the trace recorded with them.
///
/// Each token is followed by the separator run that came after it in the
/// original text; a final run with no token after it is appended last. The
/// trace is only read, so the same trace can restore any number of times.
///
/// Editing token text is tolerated, but the number of tokens must still match
/// the recorded partition, otherwise [`RestoreError::InconsistentInput`] is
/// returned.
pub fn restore<S: AsRef<str>>(
    tokens: &[S],
    trace: &SeparatorTrace,
) -> Result<String, RestoreError> {
    if trace.separators_kept {
        return Ok(tokens.iter().map(|t| t.as_ref()).collect());
    }

    let runs = trace.runs();
    if runs.len() != tokens.len() && runs.len() + 1 != tokens.len() {
        return Err(RestoreError::InconsistentInput {
            tokens: tokens.len(),
            runs: runs.len(),
        });
    }

    let capacity = tokens.iter().map(|t| t.as_ref().len()).sum::<usize>()
        + trace.chars().map(char::len_utf8).sum::<usize>();
    let mut restored = String::with_capacity(capacity);

    for (i, token) in tokens.iter().enumerate() {
        restored.push_str(token.as_ref());
        if let Some(run) = runs.get(i) {
            restored.extend(run.iter().map(|entry| entry.ch));
        }
    }

    debug!(
        "Restored {} bytes from {} tokens and {} separator runs",
        restored.len(),
        tokens.len(),
        runs.len()
    );

    Ok(restored)
}
