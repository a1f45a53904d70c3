//! Mishmar: the data core of a personal Rule of Life builder.
//!
//! A Rule of Life is a structured set of recurring spiritual practices
//! (prayer, scripture, community, rest, service), each tagged with a
//! recurrence frequency. This crate owns the practice records, their
//! persistence, the frequency grouping used to present them, and the
//! integration with an external text-generation service that suggests a
//! complementary practice.
//!
//! # Architecture
//!
//! - [`models`]: the [`Practice`](models::Practice) record and its fixed
//!   category/frequency enumerations.
//! - [`storage`]: durable key/value backends and the
//!   [`PracticeArchive`](storage::PracticeArchive) adapter that reads and
//!   writes the whole collection under one key.
//! - [`store`]: the [`PracticeStore`](store::PracticeStore), single
//!   source of truth for the in-memory collection; every mutation writes
//!   through to storage.
//! - [`grouping`]: pure partition of a collection into the four fixed
//!   frequency buckets.
//! - [`draft`]: the single pending create/edit form and its validation
//!   boundary.
//! - [`suggest`]: client for the external suggestion service.
//!
//! Presentation (layout, icons, colors per category) is the host
//! application's concern; nothing here renders.

pub mod draft;
pub mod grouping;
pub mod models;
pub mod storage;
pub mod store;
pub mod suggest;
