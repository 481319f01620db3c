//! Integration tests for fancy

mod helpers;

mod cli_test;
mod config_test;
mod layout_test;
