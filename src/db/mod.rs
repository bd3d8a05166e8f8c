pub mod games;
pub mod leagues;
pub mod memberships;
pub mod picks;
pub mod users;
