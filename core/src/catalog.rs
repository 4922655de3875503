//! Static room and activity catalog.
//!
//! The catalog is immutable: it is built once from the const tables
//! below and only ever read afterwards. Ids serialize as the stable
//! string keys hosts send over the wire ("bedroom", "yoga-mat", ...).

use crate::{
    clock::TimeOfDay,
    error::SimError,
    types::GameMinutes,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RoomId {
    Bedroom,
    Living,
    Kitchen,
    Gym,
    Bathroom,
}

impl RoomId {
    pub const ALL: [RoomId; 5] = [
        RoomId::Bedroom,
        RoomId::Living,
        RoomId::Kitchen,
        RoomId::Gym,
        RoomId::Bathroom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RoomId::Bedroom  => "bedroom",
            RoomId::Living   => "living",
            RoomId::Kitchen  => "kitchen",
            RoomId::Gym      => "gym",
            RoomId::Bathroom => "bathroom",
        }
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomId {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomId::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| SimError::UnknownRoom { id: s.to_string() })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityId {
    // Bedroom
    Sleep,
    Computer,
    Wardrobe,
    BedroomMirror,
    // Living room
    Sofa,
    Tv,
    Bookshelf,
    Videogame,
    // Kitchen
    Table,
    Fridge,
    Stove,
    Microwave,
    Water,
    // Gym
    Exercise,
    Treadmill,
    Dumbbells,
    YogaMat,
    // Bathroom
    Shower,
    BathroomSink,
    Toilet,
    Skincare,
}

impl ActivityId {
    pub const ALL: [ActivityId; 21] = [
        ActivityId::Sleep,
        ActivityId::Computer,
        ActivityId::Wardrobe,
        ActivityId::BedroomMirror,
        ActivityId::Sofa,
        ActivityId::Tv,
        ActivityId::Bookshelf,
        ActivityId::Videogame,
        ActivityId::Table,
        ActivityId::Fridge,
        ActivityId::Stove,
        ActivityId::Microwave,
        ActivityId::Water,
        ActivityId::Exercise,
        ActivityId::Treadmill,
        ActivityId::Dumbbells,
        ActivityId::YogaMat,
        ActivityId::Shower,
        ActivityId::BathroomSink,
        ActivityId::Toilet,
        ActivityId::Skincare,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityId::Sleep         => "sleep",
            ActivityId::Computer      => "computer",
            ActivityId::Wardrobe      => "wardrobe",
            ActivityId::BedroomMirror => "bedroom-mirror",
            ActivityId::Sofa          => "sofa",
            ActivityId::Tv            => "tv",
            ActivityId::Bookshelf     => "bookshelf",
            ActivityId::Videogame     => "videogame",
            ActivityId::Table         => "table",
            ActivityId::Fridge        => "fridge",
            ActivityId::Stove         => "stove",
            ActivityId::Microwave     => "microwave",
            ActivityId::Water         => "water",
            ActivityId::Exercise      => "exercise",
            ActivityId::Treadmill     => "treadmill",
            ActivityId::Dumbbells     => "dumbbells",
            ActivityId::YogaMat       => "yoga-mat",
            ActivityId::Shower        => "shower",
            ActivityId::BathroomSink  => "bathroom-sink",
            ActivityId::Toilet        => "toilet",
            ActivityId::Skincare      => "skincare",
        }
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityId {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityId::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| SimError::UnknownActivity { id: s.to_string() })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Room {
    pub id:   RoomId,
    pub name: &'static str,
    pub icon: &'static str,
}

/// An activity definition. Gains may be negative (e.g. screen time hurts sleep).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Activity {
    pub id:                 ActivityId,
    pub name:               &'static str,
    pub room:               RoomId,
    pub energy_cost:        f64,
    pub energy_gain:        f64,
    pub happiness_gain:     f64,
    pub health_gain:        f64,
    pub sleep_quality_gain: f64,
    pub duration:           GameMinutes,
    pub description:        &'static str,
    pub icon:               &'static str,
    /// Advisory only; never used to gate availability.
    pub time_of_day:        Option<TimeOfDay>,
}

pub const ROOMS: [Room; 5] = [
    Room { id: RoomId::Bedroom,  name: "Bedroom",     icon: "🛏️" },
    Room { id: RoomId::Living,   name: "Living Room", icon: "🛋️" },
    Room { id: RoomId::Kitchen,  name: "Kitchen",     icon: "🍳" },
    Room { id: RoomId::Gym,      name: "Gym",         icon: "💪" },
    Room { id: RoomId::Bathroom, name: "Bathroom",    icon: "🚿" },
];

/// Shorthand for the const table below.
#[allow(clippy::too_many_arguments)]
const fn act(
    id: ActivityId,
    name: &'static str,
    room: RoomId,
    energy: (f64, f64),
    gains: (f64, f64, f64),
    duration: GameMinutes,
    description: &'static str,
    icon: &'static str,
) -> Activity {
    Activity {
        id,
        name,
        room,
        energy_cost:        energy.0,
        energy_gain:        energy.1,
        happiness_gain:     gains.0,
        health_gain:        gains.1,
        sleep_quality_gain: gains.2,
        duration,
        description,
        icon,
        time_of_day: None,
    }
}

// (cost, gain), (happiness, health, sleep quality), minutes
pub const ACTIVITIES: [Activity; 21] = [
    // ── Bedroom ──────────────────────────────────
    Activity {
        time_of_day: Some(TimeOfDay::Night),
        ..act(ActivityId::Sleep, "Sleep", RoomId::Bedroom,
              (0.0, 40.0), (10.0, 15.0, 30.0), 480.0,
              "A good night of restorative sleep", "😴")
    },
    act(ActivityId::Computer, "Use Computer", RoomId::Bedroom,
        (10.0, 0.0), (15.0, -5.0, -10.0), 60.0,
        "Work or have fun on the computer", "💻"),
    act(ActivityId::Wardrobe, "Pick an Outfit", RoomId::Bedroom,
        (5.0, 0.0), (10.0, 0.0, 0.0), 15.0,
        "Choose the perfect outfit for the day", "👔"),
    act(ActivityId::BedroomMirror, "Get Ready", RoomId::Bedroom,
        (5.0, 0.0), (15.0, 5.0, 0.0), 20.0,
        "Take care of your looks and self-esteem", "✨"),

    // ── Living room ──────────────────────────────
    act(ActivityId::Sofa, "Relax on the Sofa", RoomId::Living,
        (0.0, 15.0), (20.0, 5.0, 10.0), 45.0,
        "A moment of relaxation and rest", "😌"),
    act(ActivityId::Tv, "Watch TV", RoomId::Living,
        (5.0, 0.0), (25.0, -5.0, -5.0), 90.0,
        "Entertainment and fun", "📺"),
    act(ActivityId::Bookshelf, "Read a Book", RoomId::Living,
        (10.0, 0.0), (20.0, 5.0, 15.0), 60.0,
        "Expand your knowledge and relax your mind", "📚"),
    act(ActivityId::Videogame, "Play Video Games", RoomId::Living,
        (15.0, 0.0), (30.0, -10.0, -15.0), 120.0,
        "Digital fun and entertainment", "🎮"),

    // ── Kitchen ──────────────────────────────────
    act(ActivityId::Table, "Have a Meal", RoomId::Kitchen,
        (0.0, 25.0), (15.0, 20.0, 5.0), 30.0,
        "Nourish your body with a healthy meal", "🍽️"),
    act(ActivityId::Fridge, "Grab a Snack", RoomId::Kitchen,
        (5.0, 10.0), (10.0, 5.0, 0.0), 10.0,
        "A quick snack to take the edge off", "🥪"),
    act(ActivityId::Stove, "Cook", RoomId::Kitchen,
        (20.0, 0.0), (25.0, 15.0, 5.0), 45.0,
        "Prepare a delicious meal", "👨‍🍳"),
    act(ActivityId::Microwave, "Heat Up Food", RoomId::Kitchen,
        (5.0, 15.0), (5.0, 10.0, 0.0), 5.0,
        "A quick and practical meal", "🔥"),
    act(ActivityId::Water, "Drink Water", RoomId::Kitchen,
        (0.0, 5.0), (5.0, 15.0, 10.0), 2.0,
        "Essential hydration for the body", "💧"),

    // ── Gym ──────────────────────────────────────
    act(ActivityId::Exercise, "Lift Weights", RoomId::Gym,
        (30.0, 0.0), (20.0, 25.0, 20.0), 60.0,
        "Build muscle and improve conditioning", "💪"),
    act(ActivityId::Treadmill, "Run on the Treadmill", RoomId::Gym,
        (25.0, 0.0), (25.0, 30.0, 25.0), 45.0,
        "Energizing cardio workout", "🏃‍♂️"),
    act(ActivityId::Dumbbells, "Dumbbell Workout", RoomId::Gym,
        (20.0, 0.0), (15.0, 20.0, 15.0), 30.0,
        "Training focused on specific muscle groups", "🏋️‍♂️"),
    act(ActivityId::YogaMat, "Yoga and Meditation", RoomId::Gym,
        (10.0, 20.0), (30.0, 15.0, 35.0), 45.0,
        "Relaxation and mind-body connection", "🧘‍♂️"),

    // ── Bathroom ─────────────────────────────────
    act(ActivityId::Shower, "Take a Shower", RoomId::Bathroom,
        (5.0, 15.0), (20.0, 15.0, 10.0), 20.0,
        "Hygiene and relaxation", "🚿"),
    act(ActivityId::BathroomSink, "Brush Teeth", RoomId::Bathroom,
        (5.0, 0.0), (10.0, 15.0, 5.0), 5.0,
        "Oral hygiene care", "🦷"),
    act(ActivityId::Toilet, "Use the Bathroom", RoomId::Bathroom,
        (0.0, 5.0), (5.0, 5.0, 0.0), 5.0,
        "Basic needs", "🚽"),
    act(ActivityId::Skincare, "Skincare", RoomId::Bathroom,
        (10.0, 0.0), (25.0, 10.0, 5.0), 15.0,
        "Beauty and self-care routine", "🧴"),
];

/// Read-only lookup over the const tables.
#[derive(Debug, Clone)]
pub struct ActivityCatalog {
    by_id:   BTreeMap<ActivityId, Activity>,
    /// Activity ids per room, in table order.
    by_room: BTreeMap<RoomId, Vec<ActivityId>>,
    rooms:   BTreeMap<RoomId, Room>,
}

impl ActivityCatalog {
    pub fn standard() -> Self {
        Self::from_tables(&ROOMS, &ACTIVITIES)
    }

    fn from_tables(rooms: &[Room], activities: &[Activity]) -> Self {
        let mut by_room: BTreeMap<RoomId, Vec<ActivityId>> =
            rooms.iter().map(|r| (r.id, Vec::new())).collect();
        for a in activities {
            by_room.entry(a.room).or_default().push(a.id);
        }
        Self {
            by_id: activities.iter().map(|a| (a.id, a.clone())).collect(),
            by_room,
            rooms: rooms.iter().map(|r| (r.id, r.clone())).collect(),
        }
    }

    pub fn get(&self, id: ActivityId) -> Option<&Activity> {
        self.by_id.get(&id)
    }

    /// Definition for `id`. Total: the tables cover every `ActivityId`.
    pub fn activity(&self, id: ActivityId) -> &Activity {
        &ACTIVITIES[id as usize]
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        RoomId::ALL.into_iter().filter_map(|id| self.rooms.get(&id))
    }

    /// Activities bound to `room`, in catalog order.
    pub fn in_room(&self, room: RoomId) -> impl Iterator<Item = &Activity> {
        self.by_room
            .get(&room)
            .into_iter()
            .flatten()
            .filter_map(|id| self.by_id.get(id))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl Default for ActivityCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
