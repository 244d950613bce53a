//! Unit tests for the data playground.

mod chart_engine_tests;
mod json_codec_tests;
mod render_cache_tests;
mod render_tests;
mod session_tests;
mod settings_tests;
