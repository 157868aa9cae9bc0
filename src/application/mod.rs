//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Pure calculators (materials, footprints) are called directly from the
//! HTTP layer and have no handlers here.

pub mod handlers;

pub use handlers::dashboard::{
    CreateSessionCommand, CreateSessionHandler, GetReportHandler, GetReportQuery,
    GetSessionHandler, GetSessionQuery, GetTipsHandler, GetTipsQuery, MakePledgeCommand,
    MakePledgeHandler, MakePledgeResult, SetBuildingTypeCommand, SetBuildingTypeHandler,
    SubmitAnswersCommand, SubmitAnswersHandler, TipsView,
};
pub use handlers::room::{IdentifyRoomCommand, IdentifyRoomHandler, RoomUpload};
pub use handlers::waste::{
    ClassifyWasteCommand, ClassifyWasteError, ClassifyWasteHandler, PredictWasteCommand,
    PredictWasteError, PredictWasteHandler,
};
