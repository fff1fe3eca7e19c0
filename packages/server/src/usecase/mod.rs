//! UseCase layer: application logic wiring the domain interfaces together.

mod attach_controller;
mod detach_controller;
mod dispatch_command;
mod error;
mod get_speaker_state;

pub use attach_controller::AttachControllerUseCase;
pub use detach_controller::DetachControllerUseCase;
pub use dispatch_command::DispatchCommandUseCase;
pub use error::{AttachControllerError, DispatchCommandError, GetSpeakerStateError};
pub use get_speaker_state::GetSpeakerStateUseCase;
