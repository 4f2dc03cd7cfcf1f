use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClassId(pub u32);

impl From<u32> for ClassId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ClassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "class_{}", self.0)
    }
}

/// A room address written `building-floor-room`, e.g. `A-1-101`.
///
/// Serialized as that string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomCode {
    pub building: String,
    pub floor: u32,
    pub room: u32,
}

impl Display for RoomCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.building, self.floor, self.room)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid room code: {0}")]
pub struct InvalidRoomCode(pub String);

impl FromStr for RoomCode {
    type Err = InvalidRoomCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidRoomCode(s.to_string());
        let mut parts = s.splitn(3, '-');
        let (Some(building), Some(floor), Some(room)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        if building.is_empty() || !building.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }
        let floor = floor.parse::<u32>().map_err(|_| invalid())?;
        let room = room.parse::<u32>().map_err(|_| invalid())?;
        if room == 0 {
            return Err(invalid());
        }
        Ok(Self {
            building: building.to_string(),
            floor,
            room,
        })
    }
}

impl TryFrom<String> for RoomCode {
    type Error = InvalidRoomCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RoomCode> for String {
    fn from(code: RoomCode) -> Self {
        code.to_string()
    }
}

/// A class that orders are delivered to.
///
/// # Document Store
/// Kept in the `classes` collection. Orders refer to a class by `name`, so removing
/// a class leaves its orders pointing at a name that no longer resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRoom {
    pub id: ClassId,
    pub name: String,
    pub room: RoomCode,
}

/// Raw class form input.
#[derive(Debug, Clone, Default)]
pub struct ClassForm {
    pub name: String,
    pub building: String,
    pub floor: String,
    pub room_number: String,
}

/// Validated payload for adding a class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassCreate {
    pub name: String,
    pub room: RoomCode,
}

#[derive(Debug, Clone, Default)]
pub struct ClassUpdate {
    pub name: Option<String>,
    pub room: Option<RoomCode>,
}

impl From<ClassCreate> for ClassUpdate {
    fn from(form: ClassCreate) -> Self {
        Self {
            name: Some(form.name),
            room: Some(form.room),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ClassFilter {
    Name(String),
}
