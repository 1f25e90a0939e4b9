//! Request middleware for the reception API.

pub mod audit;
