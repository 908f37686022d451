//! Expanding firewall rules into flat rows.
//!
//! Each rule fans out into one row per port, source address and target
//! address. Unresolvable pieces turn into empty cells instead of dropping
//! the rule, so every annotated arrow shows up in the output at least once.

use log::{debug, info};

use ruleboard_core::{
    row::FirewallCsvRow,
    semantic::{FirewallInfo, ParsedDiagram, SystemInfo},
    status::Status,
};

/// Expand every rule of `diagram` into rows, in rule order.
///
/// Rows of one rule are ordered by port, then source address, then target
/// address. A rule with `p` ports between systems with `s` and `t`
/// addresses yields `max(p,1) * max(s,1) * max(t,1)` rows.
pub fn expand_rows(diagram: &ParsedDiagram) -> Vec<FirewallCsvRow> {
    let rows: Vec<FirewallCsvRow> = diagram
        .firewalls()
        .iter()
        .flat_map(|rule| expand_rule(diagram, rule))
        .collect();

    info!(
        rules = diagram.firewalls().len(),
        rows = rows.len();
        "Expanded firewall rules"
    );
    rows
}

fn expand_rule(diagram: &ParsedDiagram, rule: &FirewallInfo) -> Vec<FirewallCsvRow> {
    let connection = diagram.connections().get(rule.id());
    let source = connection.and_then(|c| diagram.system(c.source_system_id()));
    let target = connection.and_then(|c| diagram.system(c.target_system_id()));

    if connection.is_none() {
        debug!(rule = rule.id(); "Rule has no connection, endpoints left empty");
    }

    let source_name = source.map(SystemInfo::name).unwrap_or_default();
    let target_name = target.map(SystemInfo::name).unwrap_or_default();
    let description = format!(
        "{} -> {}",
        source.map(SystemInfo::description).unwrap_or_default(),
        target.map(SystemInfo::description).unwrap_or_default()
    )
    .trim()
    .to_string();
    let status = Status::from_color(rule.color()).label();

    let ports = or_blank(rule.ports());
    let source_addresses = or_blank(source.map(SystemInfo::addresses).unwrap_or_default());
    let target_addresses = or_blank(target.map(SystemInfo::addresses).unwrap_or_default());

    let mut rows =
        Vec::with_capacity(ports.len() * source_addresses.len() * target_addresses.len());
    for port in ports {
        for source_address in source_addresses {
            for target_address in target_addresses {
                rows.push(FirewallCsvRow {
                    source_system: source_name.to_string(),
                    source_address: source_address.clone(),
                    target_system: target_name.to_string(),
                    target_address: target_address.clone(),
                    port: port.clone(),
                    direction: rule.direction().to_string(),
                    purpose: rule.purpose().to_string(),
                    description: description.clone(),
                    status: status.to_string(),
                });
            }
        }
    }

    debug!(rule = rule.id(), rows = rows.len(); "Expanded rule");
    rows
}

/// Use a single empty value in place of an empty list.
fn or_blank(values: &[String]) -> &[String] {
    const BLANK: &[String] = &[String::new()];
    if values.is_empty() { BLANK } else { values }
}
