//! Integration tests for the data playground.
//!
//! These tests verify the interaction between the store, persistence,
//! the chart engine and rendering, and test complete workflows end-to-end.

mod event_flow_tests;
mod workflow_tests;
