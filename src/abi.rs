//! C ABI over CSR arrays.
//!
//! Same calling convention as the sssp core: `offsets` has `n + 1` entries,
//! `targets`/`weights` have `offsets[n]`, and results go to caller buffers.
//! Return codes:
//!  - `0` found, `1` unreachable
//!  - `-1` empty graph, `-2` source/target out of range, `-3` null pointer
//!  - `-4` malformed offsets/targets, `-5` invalid weight or ceiling
//!
//! Checks run in that order, so an empty graph reports `-1` even when every
//! pointer is null.

use core::slice;

use tracing::warn;

use crate::graph::CsrGraph;
use crate::search::{SearchEngine, SearchOutcome};
use crate::weight::FiniteCost;

pub const RCSP_FOUND: i32 = 0;
pub const RCSP_UNREACHABLE: i32 = 1;
pub const RCSP_ERR_EMPTY: i32 = -1;
pub const RCSP_ERR_VERTEX: i32 = -2;
pub const RCSP_ERR_NULL: i32 = -3;
pub const RCSP_ERR_CSR: i32 = -4;
pub const RCSP_ERR_WEIGHT: i32 = -5;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RcspResultInfo {
    pub settled: u32,
    pub edges_scanned: u64,
    pub infeasible: u64, // successors over the ceiling
    pub dominated: u64,
    pub error_code: i32, // same as the return value
}

#[no_mangle]
pub extern "C" fn rcsp_version() -> u32 { 1 }

/// Cheapest path from `source` to `target` whose cost stays within
/// `max_cost` (`+inf` or NaN for no ceiling).
///
/// On `0`, `*out_cost` holds the path cost, `out_path[..*out_path_len]` the
/// CSR edge indices in travel order. `out_path` must have room for `n`
/// entries. On `-1`..`-3` nothing is written; on any other code
/// `*out_path_len` is 0 and `*out_cost` is `+inf`.
///
/// # Safety
/// `offsets` must point to `n + 1` readable `u32`s and `targets`/`weights` to
/// `offsets[n]` readable elements each. `out_cost`, `out_path_len` must be
/// writable, `out_path` writable for `n` `u32`s. `info` may be null.
#[allow(clippy::too_many_arguments)]
#[no_mangle]
pub unsafe extern "C" fn rcsp_solve_csr(
    n: u32,
    offsets: *const u32, // len n+1
    targets: *const u32, // len m
    weights: *const f32, // len m
    source: u32,
    target: u32,
    max_cost: f32,
    out_cost: *mut f32,
    out_path: *mut u32,   // len n
    out_path_len: *mut u32,
    info: *mut RcspResultInfo,
) -> i32 {
    let mut report = RcspResultInfo::default();
    let rc = solve_csr(n, offsets, targets, weights, source, target, max_cost, out_cost, out_path, out_path_len, &mut report);
    report.error_code = rc;
    if !info.is_null() {
        *info = report;
    }
    rc
}

#[allow(clippy::too_many_arguments)]
unsafe fn solve_csr(
    n: u32,
    offsets: *const u32,
    targets: *const u32,
    weights: *const f32,
    source: u32,
    target: u32,
    max_cost: f32,
    out_cost: *mut f32,
    out_path: *mut u32,
    out_path_len: *mut u32,
    report: &mut RcspResultInfo,
) -> i32 {
    if n == 0 { return RCSP_ERR_EMPTY; }
    if source >= n || target >= n { return RCSP_ERR_VERTEX; }
    if offsets.is_null() || targets.is_null() || weights.is_null() || out_cost.is_null() || out_path.is_null() || out_path_len.is_null() {
        return RCSP_ERR_NULL;
    }
    *out_cost = f32::INFINITY;
    *out_path_len = 0;

    let n_usize = n as usize;
    let off = slice::from_raw_parts(offsets, n_usize + 1);
    let m = off[n_usize] as usize;
    let tgt = slice::from_raw_parts(targets, m);
    let wts = slice::from_raw_parts(weights, m);

    let mut costs = Vec::with_capacity(m);
    for (e, &w) in wts.iter().enumerate() {
        match FiniteCost::new(w) {
            Some(c) => costs.push(c),
            None => {
                warn!(edge = e, weight = f64::from(w), "rejecting CSR input: weight must be finite and non-negative");
                return RCSP_ERR_WEIGHT;
            }
        }
    }
    let ceiling = if max_cost.is_nan() || max_cost == f32::INFINITY {
        None
    } else {
        match FiniteCost::new(max_cost) {
            Some(c) => Some(c),
            None => return RCSP_ERR_WEIGHT,
        }
    };
    let graph = match CsrGraph::from_csr(off.to_vec(), tgt.to_vec(), costs) {
        Ok(g) => g,
        Err(err) => {
            warn!(%err, "rejecting CSR input");
            return RCSP_ERR_CSR;
        }
    };

    let mut engine = SearchEngine::new(&graph, ceiling);
    let outcome = engine.solve(source as usize, target as usize);
    let stats = engine.last_stats();
    report.settled = stats.settled as u32;
    report.edges_scanned = stats.edges_scanned;
    report.infeasible = stats.infeasible;
    report.dominated = stats.dominated;

    match outcome {
        SearchOutcome::Found { total_cost, path } => {
            let out = slice::from_raw_parts_mut(out_path, n_usize);
            for (slot, edge) in out.iter_mut().zip(&path) {
                *slot = edge.0;
            }
            *out_path_len = path.len() as u32;
            *out_cost = total_cost.get();
            RCSP_FOUND
        }
        SearchOutcome::Unreachable | SearchOutcome::Aborted { .. } => RCSP_UNREACHABLE,
        SearchOutcome::InvalidInput { .. } => RCSP_ERR_VERTEX,
    }
}
