//! Unit tests for chunk parsing, storage, and outbound splitting.
