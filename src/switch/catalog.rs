// file: src/switch/catalog.rs
// version: 1.0.0
// guid: 91d4f6a0-3e7c-4b25-8c1a-f0b9e2d57c46

//! Boolean switches exposed by the node's protocol log

/// Switch name and what it logs
pub const KNOWN_SWITCHES: &[(&str, &str)] = &[
    ("ConsoleLogEnable", "Console trace output"),
    ("Connections", "Logs connections"),
    ("ConnectionTableLocks", "Logs locks in the ConnectionTable"),
    ("EdgeClose", "The reason why an edge was closed"),
    ("Exceptions", "Logs exceptions"),
    ("LinkDebug", "Log for Link"),
    ("MapReduce", "Log map-reduce computations"),
    ("Monitor", "Log the system monitor"),
    ("NodeLog", "Log for node"),
    ("NatHandler", "Log for NatHandler"),
    ("Pathing", "Log for pathing"),
    ("PolicyBasedCO", "On demand connections"),
    ("RelayEdge", "Log for RelayEdge"),
    ("SCO", "Log for SCO"),
    ("Security", "Security logging"),
    ("SecurityExceptions", "Security handling exception logging"),
    ("UdpEdge", "Log for UdpEdge and UdpEdgeListener"),
];

/// Description of a known switch
pub fn describe(name: &str) -> Option<&'static str> {
    KNOWN_SWITCHES
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, description)| *description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(describe("UdpEdge"), Some("Log for UdpEdge and UdpEdgeListener"));
        assert_eq!(describe("udpedge"), None);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = KNOWN_SWITCHES.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), KNOWN_SWITCHES.len());
    }
}
