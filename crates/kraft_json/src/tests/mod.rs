//! Fixture tests of the constructor adapters, one module per concern.

mod classes;

mod eligibility;
mod read;
mod write;
