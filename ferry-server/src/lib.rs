//! Island transfer planner server.
//!
//! A web application that answers: "how do I get from this island to
//! that one?" using the published ferry and speedboat timetable.

pub mod config;
pub mod domain;
pub mod planner;
pub mod store;
pub mod web;
