// src/jobs/tests/mod.rs

mod api_tests;
