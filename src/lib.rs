//! Workspace-level integration tests for intcalc; see `tests/`.
