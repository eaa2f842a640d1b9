//! Integration tests
//!
//! Exercise the API client, the session store and the command driver
//! against a mock backend.

mod api_test;
mod driver_test;
mod storage_test;
