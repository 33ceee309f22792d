//! Label-setting shortest paths, optionally under a resource ceiling.
//!
//! A search moves labels through two containers: the [`TentativeStore`]
//! frontier (one improvable label per vertex, extracted cheapest first) and the
//! [`PermanentStore`] (one final label per vertex). Successors come from a
//! [`LabelCreator`]; the [`ConstrainedLabelCreator`] wraps any creator and
//! prunes successors whose cost exceeds `max_cost`. Once the target is
//! settled, the [`Tracer`] walks the permanent store back to the source.
//!
//! The graph is anything implementing [`Graph`]; [`CsrGraph`] covers the
//! common offsets/targets/weights layout, which the C ABI in [`abi`] also
//! accepts.
//!
//! ```
//! use rcsp_core::{CsrGraph, EdgeId, SearchEngine, SearchOutcome};
//!
//! let g = CsrGraph::from_edges(3, &[(0, 1, 1u32), (1, 2, 1), (0, 2, 3)]).unwrap();
//! let outcome = SearchEngine::new(&g, None).solve(0, 2);
//! assert_eq!(outcome, SearchOutcome::Found { total_cost: 2, path: vec![EdgeId(0), EdgeId(2)] });
//! assert_eq!(SearchEngine::new(&g, Some(1)).solve(0, 2), SearchOutcome::Unreachable);
//! ```

pub mod abi;
pub mod config;
pub mod creator;
pub mod error;
pub mod graph;
pub mod label;
pub mod permanent;
pub mod search;
pub mod tentative;
pub mod tracer;
pub mod weight;

pub use abi::{rcsp_solve_csr, rcsp_version, RcspResultInfo};
pub use config::SearchConfig;
pub use creator::{ConstrainedLabelCreator, GraphLabel, LabelCreator, StandardLabelCreator};
pub use error::{ConfigError, GraphError, Infeasible, TraceError};
pub use graph::{CsrGraph, EdgeId, Graph, VertexKey};
pub use label::Label;
pub use permanent::PermanentStore;
pub use search::{DynCreator, SearchEngine, SearchOutcome, SearchStats, TreeOutcome};
pub use tentative::{HeapStats, TentativeStore};
pub use tracer::{PathIter, Tracer};
pub use weight::{FiniteCost, InvalidCost, Weight};
