// ABOUTME: HTTP middleware for CORS and request tracing
// ABOUTME: Provides request ID generation and per-request spans for structured logging
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

pub mod cors;
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use self::tracing::{with_request_tracing, MakeRequestIdWithPrefix, REQUEST_ID_HEADER};
