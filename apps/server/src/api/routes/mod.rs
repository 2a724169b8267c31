//! Route definitions for the API

pub mod catalog;
