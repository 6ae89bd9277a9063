pub mod history;
pub mod palette;
pub mod playback;
