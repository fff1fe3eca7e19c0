//! Infrastructure layer: concrete implementations of the domain interfaces
//! and the DTOs of the HTTP boundary.

pub mod dto;
pub mod repository;
pub mod status_pusher;
