//! Turn engine for dawg, a single-player narrative card game. Keep this crate
//! free of IO and platform concerns.

pub mod actions;
pub mod cards;
pub mod clock;
pub mod config;
pub mod deck;
pub mod resolve;
pub mod rng;
pub mod state;
pub mod table;
pub mod turn;
pub mod view;

pub use actions::*;
pub use cards::*;
pub use clock::*;
pub use config::*;
pub use deck::*;
pub use resolve::*;
pub use rng::*;
pub use state::*;
pub use table::*;
pub use turn::*;
pub use view::*;
