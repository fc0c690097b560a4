//! Dashboard Model
//!
//! Verification state: current result, history ledger, tag distribution,
//! and the expanded/processing flags. Every mutation goes through
//! `begin_submission` / `complete_submission`.
//!
//! Requests are tagged with a monotonically increasing sequence number. A
//! response whose number is not newer than the last completed one, success
//! or failure, is stale and dropped, so a slow early request can never
//! overwrite a later outcome.

use std::time::{Duration, Instant};

use super::types::{FactCheckResult, Submission, TagCount, Verified};
use crate::logic::errors::SubmitError;
use crate::logic::{history, tags};

/// What `complete_submission` did with a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Failed,
    Stale,
}

#[derive(Clone, Debug)]
pub struct DashboardModel {
    /// Most recently applied result
    pub current: Option<FactCheckResult>,

    /// Most-recent-first, at most `history_limit` entries
    pub history: Vec<FactCheckResult>,

    pub history_limit: usize,

    /// Tag frequencies in first-seen order
    pub tags: Vec<TagCount>,

    /// True while the latest issued request is in flight
    pub processing: bool,

    /// Set by the first submission, never reset
    pub expanded: bool,

    pub expanded_at: Option<Instant>,

    /// Failure of the most recent applicable request
    pub last_error: Option<SubmitError>,

    next_seq: u64,
    latest_issued: u64,
    last_completed: u64,
}

impl DashboardModel {
    pub fn new(history_limit: usize) -> Self {
        Self {
            current: None,
            history: Vec::new(),
            history_limit,
            tags: Vec::new(),
            processing: false,
            expanded: false,
            expanded_at: None,
            last_error: None,
            next_seq: 1,
            latest_issued: 0,
            last_completed: 0,
        }
    }

    /// Start a submission and return its sequence number
    ///
    /// Video submissions without a file are rejected here: nothing is
    /// issued and `processing` stays false.
    pub fn begin_submission(&mut self, submission: &Submission) -> Result<u64, SubmitError> {
        if !self.expanded {
            self.expanded = true;
            self.expanded_at = Some(Instant::now());
        }

        if submission.content_type.requires_file() && submission.file.is_none() {
            tracing::warn!("Rejected {} submission: no file", submission.content_type.as_str());
            self.last_error = Some(SubmitError::MissingFile);
            return Err(SubmitError::MissingFile);
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.latest_issued = seq;
        self.processing = true;
        self.last_error = None;

        tracing::debug!(
            "Issued submission #{} ({})",
            seq,
            submission.content_type.as_str()
        );
        Ok(seq)
    }

    /// Apply the outcome of request `seq`
    pub fn complete_submission(
        &mut self,
        seq: u64,
        outcome: Result<Verified, SubmitError>,
    ) -> Completion {
        if seq == self.latest_issued {
            self.processing = false;
        }

        if seq <= self.last_completed {
            tracing::debug!(
                "Dropping stale response #{} (last completed #{})",
                seq,
                self.last_completed
            );
            return Completion::Stale;
        }
        self.last_completed = seq;

        match outcome {
            Ok(verified) => {
                if seq == self.latest_issued {
                    self.last_error = None;
                }

                if let Some(tag) = verified.tag.as_deref() {
                    tags::record_tag(&mut self.tags, tag);
                }
                history::push_capped(
                    &mut self.history,
                    verified.result.clone(),
                    self.history_limit,
                );
                self.current = Some(verified.result);
                Completion::Applied
            }
            Err(error) => {
                tracing::warn!("Submission #{} failed: {}", seq, error);
                if seq == self.latest_issued {
                    self.last_error = Some(error);
                }
                Completion::Failed
            }
        }
    }

    /// Whether `seq` is the most recently issued request
    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.latest_issued
    }

    pub fn since_expanded(&self) -> Option<Duration> {
        self.expanded_at.map(|at| at.elapsed())
    }

    /// Whether the result, chart, and history panels are visible
    pub fn show_panels(&self) -> bool {
        self.expanded
    }

    /// Whether the detailed stats panel is visible
    pub fn show_stats(&self) -> bool {
        self.expanded && self.current.is_some()
    }
}

impl Default for DashboardModel {
    fn default() -> Self {
        Self::new(history::HISTORY_LIMIT)
    }
}
