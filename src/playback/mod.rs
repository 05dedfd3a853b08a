//! Playback clocks feeding the engine: the editor timeline and the playlist sequence.

pub(crate) mod clock;
pub(crate) mod playlist;
