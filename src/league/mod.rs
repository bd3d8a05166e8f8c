pub mod eligibility;
pub mod games;
pub mod league;
pub mod membership;
pub mod picks;
pub mod scoring;
pub mod standings;
pub mod validation;
