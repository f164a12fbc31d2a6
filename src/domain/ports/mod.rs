mod host_capabilities;
mod proximity_port;

pub use host_capabilities::HostCapabilities;
pub use proximity_port::{IntersectionEntry, ProximityObserverPort, TargetHandle};

#[cfg(test)]
pub use proximity_port::MockProximityObserverPort;
