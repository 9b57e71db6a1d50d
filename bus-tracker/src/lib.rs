//! Campus bus tracker.
//!
//! Derives live bus states from a fixed route timetable, normalizes bus
//! records from the read endpoint, and answers the search, filter and sort
//! queries behind the student, parent and driver dashboards.

pub mod cache;
pub mod catalog;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod generate;
pub mod normalize;
pub mod query;
pub mod store;
pub mod web;
