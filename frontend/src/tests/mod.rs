//! Browser-only tests that need a real DOM. Run with
//! `wasm-pack test --headless --firefox`.
