//! Workspace-level integration tests for ctacc. See `tests/`.
