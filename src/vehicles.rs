// 🚦 Vehicle Hierarchy - Shared base contract, per-variant movement
//
// Every vehicle shares a core (name, max speed, color, current speed).
// `describe` and `stop` behave the same for all of them; `travel` and the
// signature action are specific to each variant.

use serde::{Deserialize, Serialize};

/// Road vehicles never go faster than this, whatever their max speed
pub const ROAD_SPEED_CAP: u32 = 60;

/// Water vehicles never go faster than this
pub const WATER_SPEED_CAP: u32 = 30;

/// Human-powered vehicles never go faster than this
pub const PEDAL_SPEED_CAP: u32 = 25;

/// Altitude reached by an air vehicle once it starts moving (meters)
pub const CRUISING_ALTITUDE: u32 = 10_000;

// ============================================================================
// VEHICLE KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleKind {
    /// Road vehicle
    Car,

    /// Water vehicle
    Boat,

    /// Air vehicle
    Plane,

    /// Human-powered vehicle
    Bicycle,
}

impl VehicleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Boat => "Boat",
            VehicleKind::Plane => "Plane",
            VehicleKind::Bicycle => "Bicycle",
        }
    }

    /// Highest speed this kind of vehicle will actually reach (None = uncapped)
    pub fn speed_cap(&self) -> Option<u32> {
        match self {
            VehicleKind::Car => Some(ROAD_SPEED_CAP),
            VehicleKind::Boat => Some(WATER_SPEED_CAP),
            VehicleKind::Plane => None,
            VehicleKind::Bicycle => Some(PEDAL_SPEED_CAP),
        }
    }
}

// ============================================================================
// VEHICLE EVENTS
// ============================================================================

/// Something a vehicle did; `Display` renders the console message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleEvent {
    Driving { name: String, speed: u32 },
    Sailing { name: String, speed: u32 },
    Flying { name: String, speed: u32, altitude: u32 },
    Pedaling { name: String, speed: u32 },
    Stopped { name: String },
    Honked { name: String },
    Anchored { name: String },
    Landing { name: String },
    BellRung { name: String },
}

impl std::fmt::Display for VehicleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleEvent::Driving { name, speed } => {
                write!(f, "🚗 {} is driving on the road at {} km/h.", name, speed)
            }
            VehicleEvent::Sailing { name, speed } => {
                write!(f, "🚢 {} is sailing across the water at {} km/h.", name, speed)
            }
            VehicleEvent::Flying { name, speed, altitude } => write!(
                f,
                "✈️ {} is flying through the sky at {} km/h at altitude {} meters.",
                name, speed, altitude
            ),
            VehicleEvent::Pedaling { name, speed } => {
                write!(f, "🚲 {} is being pedaled along the path at {} km/h.", name, speed)
            }
            VehicleEvent::Stopped { name } => write!(f, "{} has stopped.", name),
            VehicleEvent::Honked { name } => write!(f, "🔊 {} honks: BEEP BEEP!", name),
            VehicleEvent::Anchored { name } => write!(f, "⚓ {} drops anchor and stabilizes.", name),
            VehicleEvent::Landing { name } => write!(f, "🛬 {} is landing at the airport.", name),
            VehicleEvent::BellRung { name } => write!(f, "🔔 {}'s bell rings: RING RING!", name),
        }
    }
}

// ============================================================================
// VEHICLE CORE
// ============================================================================

/// Fields shared by every vehicle variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleCore {
    pub name: String,
    pub max_speed: u32,
    pub color: String,
    pub current_speed: u32,
}

impl VehicleCore {
    pub fn new(name: impl Into<String>, max_speed: u32, color: impl Into<String>) -> Self {
        VehicleCore {
            name: name.into(),
            max_speed,
            color: color.into(),
            current_speed: 0,
        }
    }

    /// Set current speed to `min(max_speed, cap)` and return it
    pub fn accelerate(&mut self, cap: Option<u32>) -> u32 {
        self.current_speed = match cap {
            Some(cap) => self.max_speed.min(cap),
            None => self.max_speed,
        };
        tracing::debug!(vehicle = %self.name, speed = self.current_speed, "vehicle moving");
        self.current_speed
    }

    pub fn halt(&mut self) {
        self.current_speed = 0;
        tracing::debug!(vehicle = %self.name, "vehicle stopped");
    }
}

// ============================================================================
// VEHICLE TRAIT
// ============================================================================

/// Base contract for all vehicles
///
/// Implementors provide access to their [`VehicleCore`], their kind, the
/// variant-specific `travel` and a signature action. `describe` and `stop`
/// come from the trait and are not meant to be overridden.
pub trait Vehicle: std::fmt::Debug {
    fn core(&self) -> &VehicleCore;

    fn core_mut(&mut self) -> &mut VehicleCore;

    fn kind(&self) -> VehicleKind;

    /// Move at the variant's achievable speed
    fn travel(&mut self) -> VehicleEvent;

    /// The one thing only this variant does
    fn signature_action(&mut self) -> Vec<VehicleEvent>;

    fn name(&self) -> &str {
        &self.core().name
    }

    fn current_speed(&self) -> u32 {
        self.core().current_speed
    }

    /// Shared by every variant: speed goes to zero
    fn stop(&mut self) -> VehicleEvent {
        let core = self.core_mut();
        core.halt();
        VehicleEvent::Stopped {
            name: core.name.clone(),
        }
    }

    fn describe(&self) -> String {
        let core = self.core();
        format!(
            "This is a {} {} named '{}' with a maximum speed of {} km/h.",
            core.color,
            self.kind().as_str(),
            core.name,
            core.max_speed
        )
    }
}

// ============================================================================
// CAR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub core: VehicleCore,
    pub fuel_type: String,
    pub wheels: u8,
}

impl Car {
    pub fn new(
        name: impl Into<String>,
        max_speed: u32,
        color: impl Into<String>,
        fuel_type: impl Into<String>,
    ) -> Self {
        Car {
            core: VehicleCore::new(name, max_speed, color),
            fuel_type: fuel_type.into(),
            wheels: 4,
        }
    }

    pub fn honk(&self) -> VehicleEvent {
        VehicleEvent::Honked {
            name: self.core.name.clone(),
        }
    }
}

impl Vehicle for Car {
    fn core(&self) -> &VehicleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut VehicleCore {
        &mut self.core
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn travel(&mut self) -> VehicleEvent {
        let speed = self.core.accelerate(self.kind().speed_cap());
        VehicleEvent::Driving {
            name: self.core.name.clone(),
            speed,
        }
    }

    fn signature_action(&mut self) -> Vec<VehicleEvent> {
        vec![self.honk()]
    }
}

// ============================================================================
// BOAT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boat {
    pub core: VehicleCore,
    pub boat_type: String,
}

impl Boat {
    pub fn new(
        name: impl Into<String>,
        max_speed: u32,
        color: impl Into<String>,
        boat_type: impl Into<String>,
    ) -> Self {
        Boat {
            core: VehicleCore::new(name, max_speed, color),
            boat_type: boat_type.into(),
        }
    }

    pub fn drop_anchor(&self) -> VehicleEvent {
        VehicleEvent::Anchored {
            name: self.core.name.clone(),
        }
    }
}

impl Vehicle for Boat {
    fn core(&self) -> &VehicleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut VehicleCore {
        &mut self.core
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Boat
    }

    fn travel(&mut self) -> VehicleEvent {
        let speed = self.core.accelerate(self.kind().speed_cap());
        VehicleEvent::Sailing {
            name: self.core.name.clone(),
            speed,
        }
    }

    fn signature_action(&mut self) -> Vec<VehicleEvent> {
        vec![self.drop_anchor()]
    }
}

// ============================================================================
// PLANE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plane {
    pub core: VehicleCore,
    pub airline: String,
    pub altitude: u32,
}

impl Plane {
    pub fn new(
        name: impl Into<String>,
        max_speed: u32,
        color: impl Into<String>,
        airline: impl Into<String>,
    ) -> Self {
        Plane {
            core: VehicleCore::new(name, max_speed, color),
            airline: airline.into(),
            altitude: 0,
        }
    }

    /// Landing brings the plane to the ground and then stops it
    pub fn land(&mut self) -> Vec<VehicleEvent> {
        let landing = VehicleEvent::Landing {
            name: self.core.name.clone(),
        };
        self.altitude = 0;
        vec![landing, self.stop()]
    }
}

impl Vehicle for Plane {
    fn core(&self) -> &VehicleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut VehicleCore {
        &mut self.core
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Plane
    }

    fn travel(&mut self) -> VehicleEvent {
        let speed = self.core.accelerate(self.kind().speed_cap());
        self.altitude = CRUISING_ALTITUDE;
        VehicleEvent::Flying {
            name: self.core.name.clone(),
            speed,
            altitude: self.altitude,
        }
    }

    fn signature_action(&mut self) -> Vec<VehicleEvent> {
        self.land()
    }
}

// ============================================================================
// BICYCLE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bicycle {
    pub core: VehicleCore,
    pub bike_type: String,
    pub wheels: u8,
}

impl Bicycle {
    pub fn new(
        name: impl Into<String>,
        max_speed: u32,
        color: impl Into<String>,
        bike_type: impl Into<String>,
    ) -> Self {
        Bicycle {
            core: VehicleCore::new(name, max_speed, color),
            bike_type: bike_type.into(),
            wheels: 2,
        }
    }

    pub fn ring_bell(&self) -> VehicleEvent {
        VehicleEvent::BellRung {
            name: self.core.name.clone(),
        }
    }
}

impl Vehicle for Bicycle {
    fn core(&self) -> &VehicleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut VehicleCore {
        &mut self.core
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Bicycle
    }

    fn travel(&mut self) -> VehicleEvent {
        let speed = self.core.accelerate(self.kind().speed_cap());
        VehicleEvent::Pedaling {
            name: self.core.name.clone(),
            speed,
        }
    }

    fn signature_action(&mut self) -> Vec<VehicleEvent> {
        vec![self.ring_bell()]
    }
}

// ============================================================================
// FLEET
// ============================================================================

/// Ordered collection of vehicles driven through the shared contract
#[derive(Debug, Default)]
pub struct Fleet {
    vehicles: Vec<Box<dyn Vehicle>>,
}

impl Fleet {
    pub fn new() -> Self {
        Fleet {
            vehicles: Vec::new(),
        }
    }

    /// Add a vehicle at the end of the fleet
    pub fn add(&mut self, vehicle: impl Vehicle + 'static) {
        self.vehicles.push(Box::new(vehicle));
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(dyn Vehicle + 'static)> {
        self.vehicles.iter().map(|v| &**v)
    }

    pub fn describe_all(&self) -> Vec<String> {
        self.vehicles.iter().map(|v| v.describe()).collect()
    }

    pub fn travel_all(&mut self) -> Vec<VehicleEvent> {
        self.vehicles.iter_mut().map(|v| v.travel()).collect()
    }

    /// Signature actions in fleet order, flattened
    pub fn signature_actions(&mut self) -> Vec<VehicleEvent> {
        self.vehicles
            .iter_mut()
            .flat_map(|v| v.signature_action())
            .collect()
    }

    pub fn stop_all(&mut self) -> Vec<VehicleEvent> {
        self.vehicles.iter_mut().map(|v| v.stop()).collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_names_concrete_variant() {
        let sedan = Car::new("Family Sedan", 180, "blue", "gasoline");
        assert_eq!(
            sedan.describe(),
            "This is a blue Car named 'Family Sedan' with a maximum speed of 180 km/h."
        );

        let jet = Plane::new("Commercial Jet", 900, "silver", "Delta Airlines");
        assert_eq!(
            jet.describe(),
            "This is a silver Plane named 'Commercial Jet' with a maximum speed of 900 km/h."
        );
    }

    #[test]
    fn test_car_capped_at_road_limit() {
        let mut sedan = Car::new("Family Sedan", 180, "blue", "gasoline");
        let event = sedan.travel();

        assert_eq!(sedan.current_speed(), 60);
        assert_eq!(event.to_string(), "🚗 Family Sedan is driving on the road at 60 km/h.");
        assert_eq!(sedan.wheels, 4);
    }

    #[test]
    fn test_slow_car_keeps_own_max() {
        let mut kart = Car::new("Go Kart", 40, "red", "electric");
        kart.travel();
        assert_eq!(kart.current_speed(), 40);
    }

    #[test]
    fn test_boat_capped_at_water_limit() {
        let mut yacht = Boat::new("Luxury Yacht", 70, "white", "motorboat");
        let event = yacht.travel();

        assert_eq!(yacht.current_speed(), 30);
        assert_eq!(event.to_string(), "🚢 Luxury Yacht is sailing across the water at 30 km/h.");
    }

    #[test]
    fn test_plane_uses_full_speed_and_climbs() {
        let mut jet = Plane::new("Commercial Jet", 900, "silver", "Delta Airlines");
        let event = jet.travel();

        assert_eq!(jet.current_speed(), 900);
        assert_eq!(jet.altitude, CRUISING_ALTITUDE);
        assert_eq!(
            event.to_string(),
            "✈️ Commercial Jet is flying through the sky at 900 km/h at altitude 10000 meters."
        );
    }

    #[test]
    fn test_bicycle_capped_at_pedal_limit() {
        let mut bike = Bicycle::new("Trail Explorer", 50, "green", "mountain bike");
        let event = bike.travel();

        assert_eq!(bike.current_speed(), 25);
        assert_eq!(event.to_string(), "🚲 Trail Explorer is being pedaled along the path at 25 km/h.");
        assert_eq!(bike.wheels, 2);
    }

    #[test]
    fn test_speed_never_exceeds_max_or_cap() {
        for max_speed in [0, 10, 25, 30, 60, 61, 500] {
            let mut fleet = Fleet::new();
            fleet.add(Car::new("c", max_speed, "x", "f"));
            fleet.add(Boat::new("b", max_speed, "x", "t"));
            fleet.add(Plane::new("p", max_speed, "x", "a"));
            fleet.add(Bicycle::new("y", max_speed, "x", "t"));
            fleet.travel_all();

            for vehicle in fleet.iter() {
                let expected = match vehicle.kind().speed_cap() {
                    Some(cap) => max_speed.min(cap),
                    None => max_speed,
                };
                assert_eq!(vehicle.current_speed(), expected);
                assert!(vehicle.current_speed() <= vehicle.core().max_speed);
            }
        }
    }

    #[test]
    fn test_stop_resets_speed_for_every_variant() {
        let mut fleet = Fleet::new();
        fleet.add(Car::new("Family Sedan", 180, "blue", "gasoline"));
        fleet.add(Boat::new("Luxury Yacht", 70, "white", "motorboat"));
        fleet.add(Plane::new("Commercial Jet", 900, "silver", "Delta Airlines"));
        fleet.add(Bicycle::new("Trail Explorer", 50, "green", "mountain bike"));

        fleet.travel_all();
        let events = fleet.stop_all();

        assert_eq!(events.len(), 4);
        assert_eq!(events[0].to_string(), "Family Sedan has stopped.");
        assert!(fleet.iter().all(|v| v.current_speed() == 0));
    }

    #[test]
    fn test_stop_when_already_stopped() {
        let mut bike = Bicycle::new("Trail Explorer", 50, "green", "mountain bike");
        bike.stop();
        assert_eq!(bike.current_speed(), 0);
    }

    #[test]
    fn test_plane_land_resets_altitude_and_speed() {
        let mut jet = Plane::new("Commercial Jet", 900, "silver", "Delta Airlines");
        jet.travel();

        let events = jet.land();

        assert_eq!(jet.altitude, 0);
        assert_eq!(jet.current_speed(), 0);
        assert_eq!(
            events,
            vec![
                VehicleEvent::Landing {
                    name: "Commercial Jet".to_string()
                },
                VehicleEvent::Stopped {
                    name: "Commercial Jet".to_string()
                },
            ]
        );
        assert_eq!(events[0].to_string(), "🛬 Commercial Jet is landing at the airport.");
    }

    #[test]
    fn test_signature_actions() {
        let car = Car::new("Family Sedan", 180, "blue", "gasoline");
        assert_eq!(car.honk().to_string(), "🔊 Family Sedan honks: BEEP BEEP!");

        let boat = Boat::new("Luxury Yacht", 70, "white", "motorboat");
        assert_eq!(boat.drop_anchor().to_string(), "⚓ Luxury Yacht drops anchor and stabilizes.");

        let bike = Bicycle::new("Trail Explorer", 50, "green", "mountain bike");
        assert_eq!(bike.ring_bell().to_string(), "🔔 Trail Explorer's bell rings: RING RING!");
    }

    #[test]
    fn test_fleet_signature_actions_flatten_in_order() {
        let mut fleet = Fleet::new();
        fleet.add(Car::new("Family Sedan", 180, "blue", "gasoline"));
        fleet.add(Plane::new("Commercial Jet", 900, "silver", "Delta Airlines"));
        fleet.add(Bicycle::new("Trail Explorer", 50, "green", "mountain bike"));

        let events = fleet.signature_actions();

        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], VehicleEvent::Honked { .. }));
        assert!(matches!(events[1], VehicleEvent::Landing { .. }));
        assert!(matches!(events[2], VehicleEvent::Stopped { .. }));
        assert!(matches!(events[3], VehicleEvent::BellRung { .. }));
    }

    #[test]
    fn test_empty_fleet() {
        let mut fleet = Fleet::new();
        assert!(fleet.is_empty());
        assert!(fleet.travel_all().is_empty());
        assert!(fleet.describe_all().is_empty());
    }

    #[test]
    fn test_vehicle_serializes() {
        let jet = Plane::new("Commercial Jet", 900, "silver", "Delta Airlines");
        let json = serde_json::to_value(&jet).unwrap();
        assert_eq!(json["core"]["name"], "Commercial Jet");
        assert_eq!(json["airline"], "Delta Airlines");
        assert_eq!(json["altitude"], 0);
    }
}
