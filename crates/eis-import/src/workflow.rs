//! Import orchestration: format dispatch and the preview/commit workflow.
//!
//! An [`ImportSession`] sequences reader, parser, and validator-adjacent
//! checks, then holds parsed data behind a [`PreviewGate`] until the user
//! confirms. The caller's commit callback runs at most once per attempt,
//! and only after an explicit confirmation (or immediately when preview is
//! disabled). There is no retry: a failed attempt returns to idle and the
//! caller re-runs with a corrected file.

use std::collections::BTreeMap;
use std::path::Path;

use eis_model::{ImportIssue, ImportOptions, ImportResult, Record};

use crate::csv::parse_csv;
use crate::error::{ImportError, Result};
use crate::json::parse_json;
use crate::reader::read_import_file;

/// Number of rows shown in a preview by default.
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

/// Supported import formats, resolved once at the workflow boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Csv,
    Json,
}

impl ImportFormat {
    /// Resolves the format from the file name suffix.
    ///
    /// The match is case-sensitive (`.CSV` is not accepted) and there is
    /// no content sniffing. `None` means the format is unsupported.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if name.ends_with(".csv") {
            Some(ImportFormat::Csv)
        } else if name.ends_with(".json") {
            Some(ImportFormat::Json)
        } else {
            None
        }
    }

    /// Runs the parser for this format.
    pub fn parse(self, input: &str, options: &ImportOptions) -> ImportResult {
        match self {
            ImportFormat::Csv => parse_csv(input, options),
            ImportFormat::Json => parse_json(input, options),
        }
    }
}

/// User decision on a previewed import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewDecision {
    Commit,
    Cancel,
}

/// Data handed to the preview gate: a bounded sample plus totals.
///
/// `labels` is the caller's column-mapping (field name to display label);
/// it affects presentation only, never validation.
#[derive(Debug)]
pub struct ImportPreview<'a> {
    pub columns: &'a [String],
    pub sample: &'a [Record],
    pub total_rows: usize,
    pub labels: &'a BTreeMap<String, String>,
}

impl ImportPreview<'_> {
    /// Display label for a column, falling back to the column name.
    pub fn label_for<'b>(&'b self, column: &'b str) -> &'b str {
        self.labels.get(column).map_or(column, String::as_str)
    }
}

/// The confirm/cancel seam between the pipeline and whatever UI fronts it.
pub trait PreviewGate {
    fn review(&mut self, preview: &ImportPreview<'_>) -> PreviewDecision;
}

/// Terminal state of one import attempt.
#[derive(Debug)]
pub enum ImportOutcome {
    /// Data was confirmed and handed to the commit callback.
    Committed { rows: usize },
    /// The user cancelled at the preview; pending data was discarded.
    Cancelled,
    /// Parsing produced issues; nothing was forwarded to the callback.
    Rejected { issues: Vec<ImportIssue> },
}

/// Observable workflow phase. Every attempt ends back at `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportPhase {
    #[default]
    Idle,
    Reading,
    Parsed,
    Previewing,
}

/// Drives one import attempt at a time through
/// `Idle -> Reading -> Parsed -> Previewing -> {Committed | Cancelled} -> Idle`.
#[derive(Debug)]
pub struct ImportSession {
    options: ImportOptions,
    labels: BTreeMap<String, String>,
    preview_rows: usize,
    preview_enabled: bool,
    phase: ImportPhase,
}

impl ImportSession {
    pub fn new(options: ImportOptions) -> Self {
        Self {
            options,
            labels: BTreeMap::new(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            preview_enabled: true,
            phase: ImportPhase::Idle,
        }
    }

    /// Set display labels for preview columns.
    #[must_use]
    pub fn with_labels(mut self, labels: BTreeMap<String, String>) -> Self {
        self.labels = labels;
        self
    }

    /// Set how many rows the preview sample holds.
    #[must_use]
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    /// Enable or disable the preview gate. When disabled, a successful
    /// parse commits immediately.
    #[must_use]
    pub fn with_preview(mut self, enabled: bool) -> Self {
        self.preview_enabled = enabled;
        self
    }

    pub fn phase(&self) -> ImportPhase {
        self.phase
    }

    /// Runs one import attempt.
    ///
    /// `on_commit` receives the full record set and is invoked at most
    /// once. Errors from format dispatch and file reading propagate as
    /// [`ImportError`]; parse failures surface as
    /// [`ImportOutcome::Rejected`].
    pub async fn import<G, F>(
        &mut self,
        path: &Path,
        gate: &mut G,
        on_commit: F,
    ) -> Result<ImportOutcome>
    where
        G: PreviewGate,
        F: FnOnce(Vec<Record>),
    {
        let Some(format) = ImportFormat::from_path(path) else {
            return Err(ImportError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        };

        self.phase = ImportPhase::Reading;
        let content = match read_import_file(path).await {
            Ok(content) => content,
            Err(error) => {
                self.phase = ImportPhase::Idle;
                return Err(error);
            }
        };

        let result = format.parse(&content, &self.options);
        self.phase = ImportPhase::Parsed;

        if !result.success() {
            tracing::warn!(
                path = %path.display(),
                issues = result.issues.len(),
                "import rejected"
            );
            self.phase = ImportPhase::Idle;
            return Ok(ImportOutcome::Rejected {
                issues: result.issues,
            });
        }

        if self.preview_enabled {
            self.phase = ImportPhase::Previewing;
            let sample_len = result.records.len().min(self.preview_rows);
            let preview = ImportPreview {
                columns: &result.columns,
                sample: &result.records[..sample_len],
                total_rows: result.row_count(),
                labels: &self.labels,
            };
            if gate.review(&preview) == PreviewDecision::Cancel {
                tracing::info!(path = %path.display(), "import cancelled at preview");
                self.phase = ImportPhase::Idle;
                return Ok(ImportOutcome::Cancelled);
            }
        }

        let rows = result.row_count();
        on_commit(result.records);
        tracing::info!(path = %path.display(), rows, "import committed");
        self.phase = ImportPhase::Idle;
        Ok(ImportOutcome::Committed { rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ImportFormat::from_path(Path::new("expenses.csv")),
            Some(ImportFormat::Csv)
        );
        assert_eq!(
            ImportFormat::from_path(Path::new("/tmp/expenses.json")),
            Some(ImportFormat::Json)
        );
        assert_eq!(ImportFormat::from_path(Path::new("expenses.xlsx")), None);
        // Suffix match is case-sensitive.
        assert_eq!(ImportFormat::from_path(Path::new("expenses.CSV")), None);
        assert_eq!(ImportFormat::from_path(Path::new("expenses")), None);
    }

    #[test]
    fn test_preview_label_fallback() {
        let columns = vec!["amount".to_owned()];
        let mut labels = BTreeMap::new();
        labels.insert("amount".to_owned(), "Amount (USD)".to_owned());
        let preview = ImportPreview {
            columns: &columns,
            sample: &[],
            total_rows: 0,
            labels: &labels,
        };
        assert_eq!(preview.label_for("amount"), "Amount (USD)");
        assert_eq!(preview.label_for("name"), "name");
    }

    #[tokio::test]
    async fn test_unsupported_format_errors() {
        let mut session = ImportSession::new(ImportOptions::new());
        let mut gate = ScriptedGate::new(PreviewDecision::Commit);
        let outcome = session
            .import(&PathBuf::from("expenses.txt"), &mut gate, |_| {})
            .await;
        assert!(matches!(
            outcome,
            Err(ImportError::UnsupportedFormat { .. })
        ));
        assert_eq!(session.phase(), ImportPhase::Idle);
    }

    /// Gate that records what it saw and returns a fixed decision.
    struct ScriptedGate {
        decision: PreviewDecision,
        seen_rows: Option<usize>,
        seen_sample: Option<usize>,
    }

    impl ScriptedGate {
        fn new(decision: PreviewDecision) -> Self {
            Self {
                decision,
                seen_rows: None,
                seen_sample: None,
            }
        }
    }

    impl PreviewGate for ScriptedGate {
        fn review(&mut self, preview: &ImportPreview<'_>) -> PreviewDecision {
            self.seen_rows = Some(preview.total_rows);
            self.seen_sample = Some(preview.sample.len());
            self.decision
        }
    }

    async fn run_with_csv(
        content: &str,
        session: &mut ImportSession,
        gate: &mut ScriptedGate,
    ) -> (Result<ImportOutcome>, usize) {
        use std::io::Write;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("import.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{content}").unwrap();

        let mut committed = 0usize;
        let outcome = session
            .import(&path, gate, |records| committed = records.len())
            .await;
        (outcome, committed)
    }

    #[tokio::test]
    async fn test_commit_path() {
        let mut session = ImportSession::new(ImportOptions::new());
        let mut gate = ScriptedGate::new(PreviewDecision::Commit);
        let (outcome, committed) =
            run_with_csv("name\nRent\nCoffee\n", &mut session, &mut gate).await;
        assert!(matches!(
            outcome,
            Ok(ImportOutcome::Committed { rows: 2 })
        ));
        assert_eq!(committed, 2);
        assert_eq!(gate.seen_rows, Some(2));
        assert_eq!(session.phase(), ImportPhase::Idle);
    }

    #[tokio::test]
    async fn test_cancel_discards_data() {
        let mut session = ImportSession::new(ImportOptions::new());
        let mut gate = ScriptedGate::new(PreviewDecision::Cancel);
        let (outcome, committed) = run_with_csv("name\nRent\n", &mut session, &mut gate).await;
        assert!(matches!(outcome, Ok(ImportOutcome::Cancelled)));
        assert_eq!(committed, 0);
    }

    #[tokio::test]
    async fn test_rejected_never_calls_back() {
        let mut session = ImportSession::new(ImportOptions::new());
        let mut gate = ScriptedGate::new(PreviewDecision::Commit);
        // Row 3 has the wrong column count; parse success is false.
        let (outcome, committed) =
            run_with_csv("a,b\n1,2\n3\n", &mut session, &mut gate).await;
        match outcome {
            Ok(ImportOutcome::Rejected { issues }) => assert_eq!(issues.len(), 1),
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(committed, 0);
        // The gate never ran.
        assert_eq!(gate.seen_rows, None);
    }

    #[tokio::test]
    async fn test_preview_disabled_commits_immediately() {
        let mut session = ImportSession::new(ImportOptions::new()).with_preview(false);
        let mut gate = ScriptedGate::new(PreviewDecision::Cancel);
        let (outcome, committed) = run_with_csv("name\nRent\n", &mut session, &mut gate).await;
        assert!(matches!(
            outcome,
            Ok(ImportOutcome::Committed { rows: 1 })
        ));
        assert_eq!(committed, 1);
        // Gate was bypassed entirely.
        assert_eq!(gate.seen_rows, None);
    }

    #[tokio::test]
    async fn test_preview_sample_is_bounded() {
        let mut body = String::from("name\n");
        for i in 0..25 {
            body.push_str(&format!("row{i}\n"));
        }
        let mut session = ImportSession::new(ImportOptions::new()).with_preview_rows(10);
        let mut gate = ScriptedGate::new(PreviewDecision::Commit);
        let (outcome, committed) = run_with_csv(&body, &mut session, &mut gate).await;
        assert!(matches!(
            outcome,
            Ok(ImportOutcome::Committed { rows: 25 })
        ));
        // Preview shows the first 10, commit hands over all 25.
        assert_eq!(gate.seen_sample, Some(10));
        assert_eq!(gate.seen_rows, Some(25));
        assert_eq!(committed, 25);
    }
}
