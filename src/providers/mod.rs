//! Fund data provider implementations

pub mod mfapi_provider;
