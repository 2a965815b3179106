// slashtag-core/src/engines/mod.rs
//! Concrete `TranslationEngine` implementations.

pub mod rule_engine;
