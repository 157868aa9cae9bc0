//! Room analyzer handlers.

mod identify_room;

pub use identify_room::{IdentifyRoomCommand, IdentifyRoomHandler, RoomUpload};
