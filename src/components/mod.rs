//! The components module contains all shared components for our app.

mod audio_manager;
mod icons;
mod player;
mod track_list;

pub use audio_manager::*;
pub use icons::*;
pub use player::*;
pub use track_list::*;
