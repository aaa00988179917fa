//! Roomboard - meeting-room booking and document viewing.
//!
//! This library provides:
//! - The in-memory domain model (rooms, meetings, documents) and entity store
//! - The navigation/session coordinator
//! - The Dioxus web UI (SSR + client hydration)
//! - Boot-time sync from a PostgREST-style table backend

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Domain model and coordinator (shared)
pub mod domain;
pub mod session;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod remote;
