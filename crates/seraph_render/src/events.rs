//! # Field Lifecycle Events
//!
//! Cross-thread mutation channel for the render context.
//!
//! The game-logic and network threads describe what happened as events;
//! the render thread drains them once per frame, in order, before building
//! the render list. That keeps every registry and clock mutation on the
//! render thread without the logic thread ever blocking on render-side
//! locks.
//!
//! The channel is bounded. When it fills, sends drop and report `false`;
//! a stale field position is strictly better than a stalled game tick.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use serde::{Deserialize, Serialize};

use seraph_params::FieldConfig;
use seraph_shared::Vec3;

use crate::registry::{FieldId, FieldShape, OwnerId};

/// Default in-flight capacity; a frame of normal gameplay produces far
/// fewer events than this.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// One field-system mutation, ordered relative to its neighbors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldEvent {
    /// A field appeared.
    Spawn {
        /// Id assigned by the host or a registry allocation.
        id: FieldId,
        /// Owning player or entity.
        owner: OwnerId,
        /// Initial world center.
        center: Vec3,
        /// Initial radius in blocks.
        radius: f32,
        /// Base shape for SDF selection.
        shape: FieldShape,
        /// Full visual configuration.
        config: Box<FieldConfig>,
    },
    /// A field was destroyed.
    Despawn {
        /// The field to remove.
        id: FieldId,
    },
    /// Every field of one owner despawned (player disconnect).
    DespawnOwner {
        /// The owner whose fields go away.
        owner: OwnerId,
    },
    /// A field moved.
    Move {
        /// The field that moved.
        id: FieldId,
        /// New world center.
        center: Vec3,
    },
    /// A field changed size.
    Resize {
        /// The field that resized.
        id: FieldId,
        /// New radius in blocks.
        radius: f32,
    },
    /// A field got a new visual configuration.
    Configure {
        /// The field to reconfigure.
        id: FieldId,
        /// Replacement configuration.
        config: Box<FieldConfig>,
    },
    /// The server broadcast its shader clock.
    TimeSync {
        /// Server shader time in milliseconds.
        server_ms: f64,
    },
    /// World unload or disconnect; drop everything.
    Clear,
}

/// Both ends of a field event channel.
pub struct FieldEventBus {
    sender: Sender<FieldEvent>,
    receiver: Receiver<FieldEvent>,
}

impl FieldEventBus {
    /// Creates a bus with the given in-flight capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// A sender handle; clone one per producing thread.
    #[must_use]
    pub fn sender(&self) -> FieldEventSender {
        FieldEventSender { sender: self.sender.clone() }
    }

    /// The receiver handle for the render thread.
    #[must_use]
    pub fn receiver(&self) -> FieldEventReceiver {
        FieldEventReceiver { receiver: self.receiver.clone() }
    }
}

impl Default for FieldEventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

/// Producer handle for game-logic and network threads.
#[derive(Clone)]
pub struct FieldEventSender {
    sender: Sender<FieldEvent>,
}

impl FieldEventSender {
    /// Sends without blocking. Returns `false` when the event was dropped
    /// because the channel is full or the context is gone.
    pub fn send(&self, event: FieldEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(dropped)) => {
                tracing::warn!(?dropped, "field event channel full, event dropped");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Consumer handle, drained once per frame on the render thread.
#[derive(Clone)]
pub struct FieldEventReceiver {
    receiver: Receiver<FieldEvent>,
}

impl FieldEventReceiver {
    /// Takes every pending event, in send order.
    #[must_use]
    pub fn drain(&self) -> Vec<FieldEvent> {
        let mut events = Vec::with_capacity(self.receiver.len());
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }

    /// Number of events waiting.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }
}

#[cfg(test)]
mod tests {
    use seraph_params::presets;

    use super::*;

    #[test]
    fn test_events_arrive_in_send_order() {
        let bus = FieldEventBus::new(16);
        let sender = bus.sender();
        let receiver = bus.receiver();

        assert!(sender.send(FieldEvent::Spawn {
            id: FieldId::new(1),
            owner: OwnerId::new(2),
            center: Vec3::ZERO,
            radius: 3.0,
            shape: FieldShape::Sphere,
            config: Box::new(presets::default_energy_orb()),
        }));
        assert!(sender.send(FieldEvent::Move { id: FieldId::new(1), center: Vec3::X }));
        assert!(sender.send(FieldEvent::Despawn { id: FieldId::new(1) }));

        let drained = receiver.drain();
        assert_eq!(drained.len(), 3);
        assert!(matches!(drained[0], FieldEvent::Spawn { .. }));
        assert!(matches!(drained[2], FieldEvent::Despawn { .. }));
        assert_eq!(receiver.pending_count(), 0);
    }

    #[test]
    fn test_full_channel_drops_instead_of_blocking() {
        let bus = FieldEventBus::new(2);
        let sender = bus.sender();

        assert!(sender.send(FieldEvent::Clear));
        assert!(sender.send(FieldEvent::Clear));
        assert!(!sender.send(FieldEvent::Clear));
        assert_eq!(bus.receiver().pending_count(), 2);
    }

    #[test]
    fn test_event_serde_roundtrip() {
        let event = FieldEvent::Configure {
            id: FieldId::new(42),
            config: Box::new(presets::geodesic()),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: FieldEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
