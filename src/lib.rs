//! # Netsurvey - Radio Survey Record Processing Pipeline
//!
//! Netsurvey converts raw, partially-populated radio telemetry (cellular cell-info
//! readings and Wi-Fi scan results) into canonical protobuf-defined survey records
//! and fans them out to any number of registered consumers.
//!
//! ## Features
//!
//! - **Canonical Records**: Protobuf-defined GSM/CDMA/UMTS/LTE/Wi-Fi records with
//!   explicit field presence instead of platform sentinel values.
//! - **Validation**: Per-technology minimum-field validation; readings without the
//!   required fields produce no record rather than a partial one.
//! - **Sequencing**: Monotonic record numbering plus a scan-group counter that ties
//!   together all records observed in one polling pass.
//! - **Location Enrichment**: Records carry the latest high-confidence position fix
//!   (all-or-nothing), sourced from an accuracy-gated location cache.
//! - **Fan-out**: Copy-on-write listener registries with per-listener failure
//!   isolation; registration is safe during an in-progress dispatch.
//! - **Concurrency**: Cellular and Wi-Fi batches are serialized independently and
//!   may proceed concurrently with each other.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use netsurvey::survey::{LocationCache, SurveyRecordProcessor};
//! use netsurvey::telemetry::{CellObservation, CellTelemetry, LteCellTelemetry};
//!
//! let location = Arc::new(LocationCache::with_defaults());
//! let processor = SurveyRecordProcessor::new(Arc::clone(&location), "358000000000000");
//!
//! let serving_cell = CellObservation {
//!     serving: true,
//!     telemetry: CellTelemetry::Lte(LteCellTelemetry {
//!         earfcn: 5230,
//!         pci: 212,
//!         rsrp: -98,
//!         ..LteCellTelemetry::default()
//!     }),
//! };
//! processor.on_cell_info_update(&[serving_cell], netsurvey::telemetry::technology::LTE);
//! ```
//!
//! ## Module Organization
//!
//! - [`survey`] - The processing pipeline: processor, builders, validators,
//!   sequencing, listener registries, and the location cache
//! - [`telemetry`] - Raw platform input model (tagged cell telemetry, Wi-Fi scan
//!   results, location fixes)
//! - [`protobuf`] - Generated canonical record definitions
//! - [`config`] - Configuration management and validation
//! - [`logutil`] - Log sanitization helpers
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │  Platform Callbacks  │ ← cellular poll / Wi-Fi scan / location fixes
//! └──────────────────────┘
//!            │
//! ┌──────────────────────┐
//! │   Survey Record      │ ← validation, sequencing, location enrichment
//! │   Processor          │
//! └──────────────────────┘
//!            │
//! ┌──────────────────────┐
//! │   Listener Fan-out   │ ← loggers, network senders, UI surface
//! └──────────────────────┘
//! ```

pub mod config;
pub mod logutil;
pub mod protobuf;
pub mod survey;
pub mod telemetry;
