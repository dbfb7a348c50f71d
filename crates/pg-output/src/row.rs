//! Plain data row types written by output backends.

/// One penguin's position and activity at a given frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub frame:     u64,
    pub agent_id:  u32,
    pub x:         f32,
    pub y:         f32,
    /// `"left"` or `"right"`.
    pub direction: &'static str,
    /// Active behavior name, or `"none"` between activations.
    pub behavior:  &'static str,
}

/// Summary statistics for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSummaryRow {
    pub frame:      u64,
    pub delta_secs: f32,
    pub agents:     u32,
    pub entered:    u32,
    pub finished:   u32,
}
