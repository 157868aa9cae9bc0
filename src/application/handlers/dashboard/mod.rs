//! Dashboard handlers - session lifecycle, scoring views and pledges.

mod create_session;
mod get_insights;
mod get_session;
mod make_pledge;
mod update_session;

pub use create_session::{CreateSessionCommand, CreateSessionHandler};
pub use get_insights::{GetReportHandler, GetReportQuery, GetTipsHandler, GetTipsQuery, TipsView};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use make_pledge::{MakePledgeCommand, MakePledgeHandler, MakePledgeResult};
pub use update_session::{
    SetBuildingTypeCommand, SetBuildingTypeHandler, SubmitAnswersCommand, SubmitAnswersHandler,
};
