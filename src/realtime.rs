//! Realtime Channel Client
//!
//! JSON envelope over a plain WebSocket. On connect the client sends one
//! join message for its room (per-order or admin-wide); the server then
//! only pushes events for that room. Delivery is FIFO within one
//! connection and nothing is replayed across a reconnect: a client that
//! lost its connection must re-fetch before trusting pushes again.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, MessageEvent, WebSocket};

use crate::models::{Order, StatusUpdate};

/// Subscription scope requested on connect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Room {
    /// Admin-wide room: new orders and all order updates
    Admin,
    /// Single-order room for the status tracker
    Order(String),
}

/// Client → server messages
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
enum ClientMessage {
    JoinAdminRoom,
    JoinOrderRoom { order_id: String },
}

impl ClientMessage {
    fn for_room(room: &Room) -> Self {
        match room {
            Room::Admin => ClientMessage::JoinAdminRoom,
            Room::Order(order_id) => ClientMessage::JoinOrderRoom {
                order_id: order_id.clone(),
            },
        }
    }
}

/// Server → client push events
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerMessage {
    /// A customer placed an order (admin room)
    NewOrder(Order),
    /// Some order changed (admin room)
    OrderUpdated(StatusUpdate),
    /// Status change for the joined order room
    OrderStatusUpdated(StatusUpdate),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RealtimeError {
    #[error("websocket could not be opened: {0}")]
    Connect(String),
}

/// Live channel subscription. Dropping the client tears the socket down;
/// messages missed while disconnected are lost, not queued.
pub struct RealtimeClient {
    socket: WebSocket,
    _on_open: Closure<dyn FnMut()>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(ErrorEvent)>,
}

impl RealtimeClient {
    /// Open the channel and join `room`. `on_event` fires for every
    /// decodable push; undecodable frames are logged and skipped.
    pub fn connect(
        url: &str,
        room: Room,
        on_event: impl Fn(ServerMessage) + 'static,
    ) -> Result<Self, RealtimeError> {
        let socket =
            WebSocket::new(url).map_err(|e| RealtimeError::Connect(format!("{:?}", e)))?;

        let join = ClientMessage::for_room(&room);
        let open_socket = socket.clone();
        let on_open = Closure::<dyn FnMut()>::new(move || {
            match serde_json::to_string(&join) {
                Ok(raw) => {
                    if open_socket.send_with_str(&raw).is_err() {
                        web_sys::console::warn_1(&"[CHANNEL] join message not sent".into());
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[CHANNEL] join encode: {}", e).into())
                }
            }
        });

        let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |ev: MessageEvent| {
            let Some(raw) = ev.data().as_string() else {
                return;
            };
            match serde_json::from_str::<ServerMessage>(&raw) {
                Ok(message) => on_event(message),
                Err(e) => {
                    web_sys::console::warn_1(&format!("[CHANNEL] bad frame: {}", e).into());
                }
            }
        });

        let on_error = Closure::<dyn FnMut(ErrorEvent)>::new(move |_ev: ErrorEvent| {
            // No backoff/replay policy: the view keeps its last fetched
            // state and the user can reload to re-sync.
            web_sys::console::warn_1(&"[CHANNEL] connection error".into());
        });

        socket.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        socket.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        Ok(Self {
            socket,
            _on_open: on_open,
            _on_message: on_message,
            _on_error: on_error,
        })
    }
}

impl Drop for RealtimeClient {
    fn drop(&mut self) {
        self.socket.set_onopen(None);
        self.socket.set_onmessage(None);
        self.socket.set_onerror(None);
        let _ = self.socket.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderStatus;

    #[test]
    fn test_join_messages_match_wire_shape() {
        let admin = serde_json::to_string(&ClientMessage::JoinAdminRoom).unwrap();
        assert_eq!(admin, r#"{"event":"join_admin_room"}"#);

        let order = serde_json::to_string(&ClientMessage::for_room(&Room::Order(
            "abc-123".to_string(),
        )))
        .unwrap();
        assert_eq!(
            order,
            r#"{"event":"join_order_room","data":{"order_id":"abc-123"}}"#
        );
    }

    #[test]
    fn test_status_update_event_decodes() {
        let raw = r#"{
            "event": "order_status_updated",
            "data": {
                "order_id": "abc-123",
                "status": "completed",
                "updated_at": "2025-01-01T10:00:00+00:00"
            }
        }"#;
        let message: ServerMessage = serde_json::from_str(raw).unwrap();
        match message {
            ServerMessage::OrderStatusUpdated(update) => {
                assert_eq!(update.order_id, "abc-123");
                assert_eq!(update.status, OrderStatus::Completed);
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_new_order_event_decodes() {
        let raw = r#"{
            "event": "new_order",
            "data": {
                "id": "abc-123",
                "customer_name": "Siti",
                "table_number": "Meja 2",
                "items": [{"menu_item_id": "m1", "name": "Kopi Susu", "price": 12000, "quantity": 2}],
                "total": 24000,
                "status": "pending",
                "created_at": "2025-01-01T09:00:00+00:00",
                "updated_at": "2025-01-01T09:00:00+00:00"
            }
        }"#;
        let message: ServerMessage = serde_json::from_str(raw).unwrap();
        match message {
            ServerMessage::NewOrder(order) => {
                assert_eq!(order.total, 24000);
                assert_eq!(order.status, OrderStatus::Pending);
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
