//! Semantic model recovered from a diagram.
//!
//! The parser turns annotated drawing shapes into the entities defined here:
//!
//! - [`SystemInfo`] - a `$$` rectangle describing a system and its addresses
//! - [`FirewallInfo`] - a `$$` arrow describing ports opened between systems
//! - [`Connection`] - the source and target shapes an arrow is bound to
//! - [`ParsedDiagram`] - everything above for a single diagram
//!
//! All entities are keyed by the id of the diagram record they came from.

use indexmap::IndexMap;

/// A system drawn as an annotated rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInfo {
    id: String,
    name: String,
    addresses: Vec<String>,
    description: String,
}

impl SystemInfo {
    /// Create a new system.
    ///
    /// # Arguments
    ///
    /// * `id` - Id of the rectangle record this system was read from.
    /// * `name` - Display name, empty when the annotation has no `NAME`.
    /// * `addresses` - Every address in order of appearance.
    /// * `description` - Free text description, empty when absent.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        addresses: Vec<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            addresses,
            description: description.into(),
        }
    }

    /// Returns the id of the originating record.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the system name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the system addresses in order of appearance.
    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }

    /// Returns the system description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A firewall rule drawn as an annotated arrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirewallInfo {
    id: String,
    ports: Vec<String>,
    direction: String,
    purpose: String,
    color: Option<String>,
}

impl FirewallInfo {
    /// Create a new firewall rule.
    ///
    /// # Arguments
    ///
    /// * `id` - Id of the arrow record this rule was read from.
    /// * `ports` - Every port in order of appearance.
    /// * `direction` - Traffic direction, empty when absent.
    /// * `purpose` - Why the rule exists, empty when absent.
    /// * `color` - Raw arrow color, kept verbatim.
    pub fn new(
        id: impl Into<String>,
        ports: Vec<String>,
        direction: impl Into<String>,
        purpose: impl Into<String>,
        color: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            ports,
            direction: direction.into(),
            purpose: purpose.into(),
            color,
        }
    }

    /// Returns the id of the originating record.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the ports in order of appearance.
    pub fn ports(&self) -> &[String] {
        &self.ports
    }

    /// Returns the traffic direction.
    pub fn direction(&self) -> &str {
        &self.direction
    }

    /// Returns the purpose of the rule.
    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    /// Returns the raw arrow color, if the arrow had one.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}

/// The two shapes an arrow is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    source_system_id: String,
    target_system_id: String,
}

impl Connection {
    /// Create a connection from the start-terminal shape to the end-terminal shape.
    pub fn new(source_system_id: impl Into<String>, target_system_id: impl Into<String>) -> Self {
        Self {
            source_system_id: source_system_id.into(),
            target_system_id: target_system_id.into(),
        }
    }

    /// Returns the id of the shape bound to the arrow's start terminal.
    pub fn source_system_id(&self) -> &str {
        &self.source_system_id
    }

    /// Returns the id of the shape bound to the arrow's end terminal.
    pub fn target_system_id(&self) -> &str {
        &self.target_system_id
    }
}

/// Complete arrow connections keyed by arrow id.
///
/// Iteration follows the order in which arrows were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Connections {
    by_arrow: IndexMap<String, Connection>,
}

impl Connections {
    /// Create an empty connection map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the connection for an arrow, replacing any previous one.
    ///
    /// For diagrams built by hand, as in the `from_semantic` example. The
    /// parser collects its connections through [`FromIterator`] instead.
    pub fn insert(&mut self, arrow_id: impl Into<String>, connection: Connection) {
        self.by_arrow.insert(arrow_id.into(), connection);
    }

    /// Returns the connection of an arrow, if both of its terminals are bound.
    pub fn get(&self, arrow_id: &str) -> Option<&Connection> {
        self.by_arrow.get(arrow_id)
    }

    /// Returns the number of connected arrows.
    pub fn len(&self) -> usize {
        self.by_arrow.len()
    }

    /// Returns `true` if no arrow is connected.
    pub fn is_empty(&self) -> bool {
        self.by_arrow.is_empty()
    }

    /// Iterate over `(arrow id, connection)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Connection)> {
        self.by_arrow.iter().map(|(id, conn)| (id.as_str(), conn))
    }
}

impl FromIterator<(String, Connection)> for Connections {
    fn from_iter<I: IntoIterator<Item = (String, Connection)>>(iter: I) -> Self {
        Self {
            by_arrow: iter.into_iter().collect(),
        }
    }
}

/// Everything recovered from one diagram.
///
/// Systems are keyed by record id; rules keep the order of their records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDiagram {
    systems: IndexMap<String, SystemInfo>,
    firewalls: Vec<FirewallInfo>,
    connections: Connections,
}

impl ParsedDiagram {
    /// Create a diagram from its parts.
    ///
    /// A system whose id repeats an earlier one replaces it.
    pub fn new(
        systems: impl IntoIterator<Item = SystemInfo>,
        firewalls: Vec<FirewallInfo>,
        connections: Connections,
    ) -> Self {
        let systems = systems
            .into_iter()
            .map(|system| (system.id().to_string(), system))
            .collect();
        Self {
            systems,
            firewalls,
            connections,
        }
    }

    /// Look up a system by the id of its rectangle.
    pub fn system(&self, id: &str) -> Option<&SystemInfo> {
        self.systems.get(id)
    }

    /// Iterate over systems in record order.
    pub fn systems(&self) -> impl Iterator<Item = &SystemInfo> {
        self.systems.values()
    }

    /// Returns the number of distinct systems.
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// Returns the firewall rules in record order.
    pub fn firewalls(&self) -> &[FirewallInfo] {
        &self.firewalls
    }

    /// Returns the complete arrow connections.
    pub fn connections(&self) -> &Connections {
        &self.connections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(id: &str, name: &str) -> SystemInfo {
        SystemInfo::new(id, name, vec![], "")
    }

    #[test]
    fn test_duplicate_system_id_replaces_in_place() {
        let diagram = ParsedDiagram::new(
            [system("a", "first"), system("b", "other"), system("a", "second")],
            vec![],
            Connections::new(),
        );

        assert_eq!(diagram.system_count(), 2);
        assert_eq!(diagram.system("a").map(SystemInfo::name), Some("second"));

        let order: Vec<_> = diagram.systems().map(SystemInfo::id).collect();
        assert_eq!(order, ["a", "b"]);
    }

    #[test]
    fn test_connections_keep_first_seen_order() {
        let mut connections = Connections::new();
        connections.insert("arrow:2", Connection::new("a", "b"));
        connections.insert("arrow:1", Connection::new("b", "c"));
        connections.insert("arrow:2", Connection::new("c", "a"));

        let ids: Vec<_> = connections.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, ["arrow:2", "arrow:1"]);
        assert_eq!(
            connections.get("arrow:2").map(Connection::source_system_id),
            Some("c")
        );
        assert!(connections.get("arrow:3").is_none());
    }

    #[test]
    fn test_firewall_accessors() {
        let rule = FirewallInfo::new(
            "arrow:1",
            vec!["22".to_string(), "443".to_string()],
            "in",
            "access",
            Some("green".to_string()),
        );

        assert_eq!(rule.id(), "arrow:1");
        assert_eq!(rule.ports(), ["22", "443"]);
        assert_eq!(rule.direction(), "in");
        assert_eq!(rule.purpose(), "access");
        assert_eq!(rule.color(), Some("green"));
    }
}
