//! # Tests that require a look inside the crate.
//!
//! Each problem walks through a search by hand, one program at a time, and compares the
//! intermediate results with what the search itself produces.
