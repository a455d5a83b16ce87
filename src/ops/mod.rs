//! High-level operations.
//!
//! This module contains the implementation of Doxsuite commands.

pub mod build_docs;
pub mod doctor;
pub mod scaffold;

pub use build_docs::{build_docs, plan_docs, BuildSummary, PackageDocs, PackagePlan};
pub use doctor::{doctor, format_report, CheckResult, DoctorReport};
pub use scaffold::init_suite;
