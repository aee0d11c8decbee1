pub mod factory;
pub mod tracker;

pub use tracker::jira::JiraRestTracker;
