//! Request and response payloads for the component API.

pub mod components;
pub mod configs;
