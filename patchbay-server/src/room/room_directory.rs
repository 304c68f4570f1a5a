use dashmap::DashMap;
use patchbay_core::{ConnectionId, RoomId};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

/// Room membership index. Rooms come into existence on first join and are
/// pruned once the last member leaves. Mutations of one room serialize on its
/// map entry.
#[derive(Clone)]
pub struct RoomDirectory {
    rooms: Arc<DashMap<RoomId, HashSet<ConnectionId>>>,
}

impl RoomDirectory {
    pub fn new() -> Self {
        Self {
            rooms: Arc::new(DashMap::new()),
        }
    }

    /// Adds the connection to the room and returns the members present before
    /// it joined, i.e. the set that should be told about the arrival.
    pub fn join(&self, room: &RoomId, sid: &ConnectionId) -> Vec<ConnectionId> {
        let mut members = self.rooms.entry(room.clone()).or_default();
        if members.is_empty() {
            info!("Creating room {room}");
        }
        let others: Vec<ConnectionId> = members.iter().filter(|m| *m != sid).cloned().collect();
        members.insert(sid.clone());
        others
    }

    /// Removes the connection from the room and returns the remaining
    /// members, i.e. the set that should be told about the departure. An
    /// emptied room is pruned.
    pub fn leave(&self, room: &RoomId, sid: &ConnectionId) -> Vec<ConnectionId> {
        let Some(mut members) = self.rooms.get_mut(room) else {
            return Vec::new();
        };
        members.remove(sid);
        let remaining: Vec<ConnectionId> = members.iter().cloned().collect();
        drop(members);

        if remaining.is_empty() {
            // Re-checked under the entry lock so a join racing in between wins.
            if self.rooms.remove_if(room, |_, m| m.is_empty()).is_some() {
                info!("Pruning empty room {room}");
            }
        }
        remaining
    }

    pub fn members(&self, room: &RoomId) -> HashSet<ConnectionId> {
        self.rooms
            .get(room)
            .map(|members| members.clone())
            .unwrap_or_default()
    }

    pub fn contains(&self, room: &RoomId) -> bool {
        self.rooms.contains_key(room)
    }
}

impl Default for RoomDirectory {
    fn default() -> Self {
        Self::new()
    }
}
