//! Dataset-level partitioning and statistics.
//!
//! [`partition_dataset`] runs [`partition_conversation`] over every record of
//! a dataset and flattens the results. Fragments of one record stay
//! contiguous and records keep their input order, including when the work
//! is spread over several threads.

use std::thread;

use tracing::info;

use crate::config::PartitionConfig;
use crate::core::models::Conversation;
use crate::core::partition::partition_conversation;
use crate::error::Result;

/// A record that was split into more than one conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSplit {
    /// 0-based index of the record in the input dataset.
    pub index: usize,
    /// Number of conversations it was split into.
    pub fragments: usize,
}

/// Statistics about a partitioning run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionStats {
    /// Number of input records.
    pub original_count: usize,
    /// Number of records written out, after splitting.
    pub fragment_count: usize,
    /// Records that were split, in input order.
    pub splits: Vec<RecordSplit>,
}

impl PartitionStats {
    /// Creates stats from explicit counts, with no per-record detail.
    pub fn new(original_count: usize, fragment_count: usize) -> Self {
        Self {
            original_count,
            fragment_count,
            splits: Vec::new(),
        }
    }

    /// Number of input records that were split.
    pub fn split_count(&self) -> usize {
        self.splits.len()
    }

    /// Conversations gained by splitting.
    pub fn added(&self) -> usize {
        self.fragment_count.saturating_sub(self.original_count)
    }

    /// Average number of conversations per input record.
    pub fn split_ratio(&self) -> f64 {
        if self.original_count == 0 {
            return 0.0;
        }
        self.fragment_count as f64 / self.original_count as f64
    }

    fn record(&mut self, index: usize, fragments: usize) {
        self.fragment_count += fragments;
        if fragments > 1 {
            self.splits.push(RecordSplit { index, fragments });
        }
    }
}

/// The partitioned dataset together with its statistics.
#[derive(Debug, Clone, Default)]
pub struct PartitionOutcome {
    pub conversations: Vec<Conversation>,
    pub stats: PartitionStats,
}

/// Partitions every record of a dataset.
///
/// Each record that gets split is logged at `info` level, numbered from 1,
/// followed by the overall totals.
///
/// # Errors
///
/// Returns [`InvalidThreshold`](crate::ConvsplitError::InvalidThreshold) for an unusable threshold,
/// and otherwise the first failing record's error wrapped in
/// [`Record`](crate::ConvsplitError::Record). Nothing is returned for the records that
/// succeeded.
///
/// # Example
///
/// ```
/// use convsplit::config::PartitionConfig;
/// use convsplit::core::processor::partition_dataset;
/// use convsplit::message::Message;
/// use convsplit::Conversation;
///
/// let gap = Conversation::new(
///     vec![
///         Message::new("").with_timestamp("2024-01-01T00:00:00Z"),
///         Message::new("").with_timestamp("2024-02-01T00:00:00Z"),
///     ],
///     vec![],
/// );
/// let outcome = partition_dataset(vec![gap, Conversation::default()], &PartitionConfig::new())?;
///
/// assert_eq!(outcome.stats.original_count, 2);
/// assert_eq!(outcome.stats.fragment_count, 3);
/// assert_eq!(outcome.stats.splits[0].index, 0);
/// # Ok::<(), convsplit::ConvsplitError>(())
/// ```
pub fn partition_dataset(
    conversations: Vec<Conversation>,
    config: &PartitionConfig,
) -> Result<PartitionOutcome> {
    config.validate()?;

    let original_count = conversations.len();
    let jobs = config.effective_jobs().min(original_count).max(1);

    let per_record = if jobs == 1 {
        partition_range(&conversations, 0, config)?
    } else {
        partition_parallel(&conversations, jobs, config)?
    };

    let mut stats = PartitionStats::new(original_count, 0);
    let mut output = Vec::with_capacity(per_record.iter().map(Vec::len).sum());
    for (index, fragments) in per_record.into_iter().enumerate() {
        stats.record(index, fragments.len());
        if fragments.len() > 1 {
            info!(
                "Conversation {}: partitioned into {} conversation(s)",
                index + 1,
                fragments.len()
            );
        }
        output.extend(fragments);
    }

    info!(
        original = stats.original_count,
        partitioned = stats.fragment_count,
        split = stats.split_count(),
        "Partitioned {} conversation(s) into {} conversation(s)",
        stats.original_count,
        stats.fragment_count
    );

    Ok(PartitionOutcome {
        conversations: output,
        stats,
    })
}

/// Partitions `conversations`, numbering errors from `offset`.
fn partition_range(
    conversations: &[Conversation],
    offset: usize,
    config: &PartitionConfig,
) -> Result<Vec<Vec<Conversation>>> {
    conversations
        .iter()
        .enumerate()
        .map(|(i, conv)| {
            partition_conversation(conv, config).map_err(|e| e.in_record(offset + i))
        })
        .collect()
}

/// Splits the input into `jobs` contiguous chunks, each handled by a scoped
/// thread writing into its own buffer. Buffers are joined in chunk order.
fn partition_parallel(
    conversations: &[Conversation],
    jobs: usize,
    config: &PartitionConfig,
) -> Result<Vec<Vec<Conversation>>> {
    let chunk_size = conversations.len().div_ceil(jobs);

    let chunk_results: Vec<Result<Vec<Vec<Conversation>>>> = thread::scope(|scope| {
        let handles: Vec<_> = conversations
            .chunks(chunk_size)
            .enumerate()
            .map(|(n, chunk)| {
                scope.spawn(move || partition_range(chunk, n * chunk_size, config))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    });

    let mut per_record = Vec::with_capacity(conversations.len());
    for chunk in chunk_results {
        per_record.extend(chunk?);
    }
    Ok(per_record)
}
