pub mod game_handler;
pub mod league_handler;
pub mod membership_handler;
pub mod pick_handler;
