//! Feature slices: each owns its state, pure logic, and (wasm-only) views.
pub mod results;
pub mod search;
pub mod storage;
