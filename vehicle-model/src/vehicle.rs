//! Base vehicle: identity plus a fixed speed ceiling.

/// Anything with a speed ceiling.
pub trait SpeedLimited {
    fn max_speed(&self) -> i32;
}

/// Anything whose name can be read and replaced by external callers.
pub trait Named {
    fn change_name(&mut self, new_name: String);
    fn name(&self) -> &str;
}

/// Base vehicle state shared by every vehicle kind.
///
/// The name is only reachable from inside this crate. Types that embed a
/// `Vehicle` decide how much of it to expose. `max_speed` is fixed at
/// construction and has no mutator.
///
/// ```compile_fail
/// let vehicle = vehicle_model::Vehicle::new("Toyota", 5);
/// let _ = vehicle.name();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    name: String,
    max_speed: i32,
}

impl Vehicle {
    /// Create a vehicle. Values are stored as given, including zero or
    /// negative speed ceilings.
    pub fn new(name: impl Into<String>, max_speed: i32) -> Self {
        Self {
            name: name.into(),
            max_speed,
        }
    }

    pub fn max_speed(&self) -> i32 {
        self.max_speed
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl SpeedLimited for Vehicle {
    fn max_speed(&self) -> i32 {
        self.max_speed
    }
}
