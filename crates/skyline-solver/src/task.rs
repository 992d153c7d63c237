/// Deferred work queued by the propagator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Task {
    /// Removes the decided height of `cell` from every other cell of its row and column.
    #[display("propagate from {cell}")]
    PropagateFrom {
        /// Cell index.
        cell: usize,
    },
    /// Removes every candidate of `cell` except `height`.
    #[display("resolve {cell} to {height}")]
    ResolveTo {
        /// Cell index.
        cell: usize,
        /// The height to keep.
        height: u8,
    },
}
