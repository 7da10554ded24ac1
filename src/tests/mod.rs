//! Harness-style walks over a realistic cluster snapshot.

mod access_review;
