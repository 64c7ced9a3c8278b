/// Side effects requested by `update`, executed by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadCandidates,
    LoadJobs,
}
