//! Risk Profile Engine - questionnaire scoring and persona guidance
//!
//! This crate scores the onboarding risk questionnaire, bands the score into
//! a risk level, classifies users into income personas, and stores results
//! on the user's profile through the backend API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
