//! StatusPusher implementations.

mod websocket;

pub use websocket::WebSocketStatusPusher;
