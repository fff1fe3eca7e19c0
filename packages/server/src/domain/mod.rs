//! Domain layer: the speaker model, controller identities and the
//! interfaces (traits) the domain requires from the outer layers.

mod controller;
mod repository;
mod speaker;
mod status_pusher;

pub use controller::ControllerId;
pub use repository::{RepositoryError, SpeakerRepository};
pub use speaker::{PowerState, SpeakerState, StatusReport, Volume};
pub use status_pusher::{PusherChannel, StatusPushError, StatusPusher};
