//! Integration tests for the Herald HTTP API.

mod auth_test;
mod helpers;
