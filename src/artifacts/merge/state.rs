use crate::errors::RepositoryError;

/// Lifecycle of a merge attempt
///
/// `Idle -> ComparingTrees -> Clean -> CommittedMerge` when the trees reconcile,
/// `Idle -> ComparingTrees -> Conflicted -> AwaitingManualResolution` when they
/// do not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeState {
    #[default]
    Idle,
    ComparingTrees,
    Clean,
    CommittedMerge,
    Conflicted,
    AwaitingManualResolution,
}

impl MergeState {
    pub fn can_advance_to(self, next: MergeState) -> bool {
        matches!(
            (self, next),
            (MergeState::Idle, MergeState::ComparingTrees)
                | (MergeState::ComparingTrees, MergeState::Clean)
                | (MergeState::ComparingTrees, MergeState::Conflicted)
                | (MergeState::Clean, MergeState::CommittedMerge)
                | (MergeState::Conflicted, MergeState::AwaitingManualResolution)
        )
    }

    pub fn advance(self, next: MergeState) -> anyhow::Result<MergeState> {
        if !self.can_advance_to(next) {
            return Err(RepositoryError::InvalidOperation(format!(
                "merge cannot move from {self:?} to {next:?}"
            ))
            .into());
        }

        tracing::debug!(from = ?self, to = ?next, "merge state");
        Ok(next)
    }
}
