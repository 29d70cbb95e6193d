//! Property-based tests for the codec, id allocation and rendering.
