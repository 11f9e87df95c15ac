//! # CSI Rust Backend
//!
//! Conflict detection and admission engine for course schedules.
//!
//! This crate provides the core of the Course Scheduling Intelligence (CSI)
//! system: given a proposed weekly teaching slot, it determines whether the
//! slot collides with any accepted schedule on the same room or the same
//! lecturer at an overlapping time on the same day, admits or rejects it
//! atomically, and keeps an auditable log of every decision. An optional
//! Axum REST API exposes the engine to a frontend.
//!
//! ## Features
//!
//! - **Conflict Detection**: half-open interval overlap over two independent
//!   relations (room, lecturer), with structured conflict payloads
//! - **Admission Gate**: validate, detect, and insert under a single
//!   serialization point, so the no-collision invariant always holds
//! - **Decision Log**: append-only audit trail of admission outcomes
//! - **Statistics**: live pairwise recomputation of conflict counts and
//!   affected resources
//! - **HTTP API**: RESTful endpoints for frontend integration (feature
//!   `http-server`)
//!
//! ## Architecture
//!
//! - [`api`]: domain and DTO types shared with callers
//! - [`models`]: weekday/time-of-day primitives and the overlap predicate
//! - [`db`]: repository trait and the in-memory store
//! - [`services`]: conflict detector, admission engine, decision log,
//!   statistics, event notification
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;
pub mod db;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use api::{
    Conflict, ConflictKind, ConflictParty, ConflictReport, DecisionRecord, DecisionStatus,
    Schedule, Statistics, SystemStatus,
};
pub use services::{AdmissionError, ScheduleEngine};
