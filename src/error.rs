//! Recoverable error types.
//!
//! Broken internal invariants (double settle, extraction from an empty
//! frontier) are not represented here; they panic.

use thiserror::Error;

use crate::graph::VertexKey;

/// Why a successor label was not created. Local to one edge: the search skips
/// the edge and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Infeasible<W: core::fmt::Debug> {
    #[error("cost {cost:?} exceeds ceiling {max_cost:?}")]
    ExceedsCeiling { cost: W, max_cost: W },
    #[error("cost addition overflowed")]
    Overflow,
}

/// A permanent store that cannot be walked back from target to source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    #[error("vertex {0} has no settled label")]
    NotSettled(VertexKey),
    #[error("label at vertex {vertex} points to unsettled predecessor {predecessor}")]
    MissingPredecessor { vertex: VertexKey, predecessor: VertexKey },
    #[error("additivity violated at vertex {vertex}: predecessor {predecessor} cost {predecessor_cost} + edge weight {edge_weight} != {cost}")]
    AdditivityMismatch {
        vertex: VertexKey,
        predecessor: VertexKey,
        predecessor_cost: String,
        edge_weight: String,
        cost: String,
    },
    #[error("reached seed label at vertex {reached} before source {expected}")]
    SeedBeforeSource { reached: VertexKey, expected: VertexKey },
    #[error("edge of label at vertex {vertex} does not end there (target {edge_target})")]
    EdgeTargetMismatch { vertex: VertexKey, edge_target: VertexKey },
    #[error("predecessor chain revisits vertex {vertex}")]
    Cycle { vertex: VertexKey },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("offsets array is empty; need vertex_count + 1 entries")]
    MissingOffsets,
    #[error("offsets must start at 0, got {0}")]
    OffsetsStart(u32),
    #[error("offsets decrease after vertex {vertex}")]
    OffsetsNotMonotone { vertex: VertexKey },
    #[error("offsets declare {expected} edges but targets has {targets} and weights has {weights}")]
    EdgeArrayLength { expected: usize, targets: usize, weights: usize },
    #[error("edge {edge} targets vertex {target}, graph has {vertex_count} vertices")]
    TargetOutOfRange { edge: usize, target: u32, vertex_count: usize },
    #[error("edge {edge} leaves vertex {tail}, graph has {vertex_count} vertices")]
    SourceOutOfRange { edge: usize, tail: u32, vertex_count: usize },
    #[error("{0} vertices do not fit 32-bit keys")]
    TooManyVertices(usize),
    #[error("{0} edges do not fit 32-bit edge ids")]
    TooManyEdges(usize),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid search config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("environment variable {name} has invalid value {value:?}")]
    Env { name: &'static str, value: String },
}
