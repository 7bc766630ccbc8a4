//! Integration tests for subnet-explorer
//!
//! These tests verify the complete workflow from parsing through
//! computation, list shaping, and export.

use std::net::Ipv4Addr;
use subnet_explorer::output::{export_csv, export_text};
use subnet_explorer::processing::{compute_subnet, filter_addresses, paginate};
use subnet_explorer::{explore, Cidr, HostRange, SubnetError};

#[test]
fn test_full_workflow_24() {
    let report = explore("192.168.1.10", 24).expect("valid input");

    assert_eq!(report.network, Ipv4Addr::new(192, 168, 1, 0));
    assert_eq!(report.broadcast, Ipv4Addr::new(192, 168, 1, 255));
    assert_eq!(report.first_usable, Some(Ipv4Addr::new(192, 168, 1, 1)));
    assert_eq!(report.last_usable, Some(Ipv4Addr::new(192, 168, 1, 254)));
    assert_eq!(report.host_count, 254);

    // Page through the enumerated list.
    let addrs = report.hosts.addresses().expect("enumerated");
    let page = paginate(addrs, 50, 3);
    assert_eq!(page.page_count, 6);
    assert_eq!(page.entries[0], Ipv4Addr::new(192, 168, 1, 101));

    // Filter, then export what remains.
    let filtered = filter_addresses(addrs, "1.25");
    assert_eq!(
        filtered,
        vec![
            Ipv4Addr::new(192, 168, 1, 25),
            Ipv4Addr::new(192, 168, 1, 250),
            Ipv4Addr::new(192, 168, 1, 251),
            Ipv4Addr::new(192, 168, 1, 252),
            Ipv4Addr::new(192, 168, 1, 253),
            Ipv4Addr::new(192, 168, 1, 254),
        ]
    );
    let text = export_text(&filtered);
    assert_eq!(text.lines().count(), 6);
    assert_eq!(text.lines().next(), Some("192.168.1.25"));

    let csv = export_csv(&filtered);
    assert_eq!(csv.lines().count(), 7);
    assert_eq!(csv.lines().nth(1), Some("1,192.168.1.25"));
}

#[test]
fn test_drill_down_recursion() {
    // Zooming is just repeated computation on a child descriptor.
    let parent = explore("192.168.1.10", 24).expect("valid input");
    assert_eq!(
        parent.children,
        vec![
            "192.168.1.0/25".parse::<Cidr>().unwrap(),
            "192.168.1.128/25".parse::<Cidr>().unwrap(),
        ]
    );

    let child = parent.children[1];
    let report = compute_subnet(child.addr, child.prefix).expect("valid child");
    assert_eq!(report.network, Ipv4Addr::new(192, 168, 1, 128));
    assert_eq!(report.broadcast, Ipv4Addr::new(192, 168, 1, 255));
    assert_eq!(report.host_count, 126);

    // And again one level deeper.
    let grandchild = report.children[0];
    let report = compute_subnet(grandchild.addr, grandchild.prefix).expect("valid grandchild");
    assert_eq!(report.cidr.to_string(), "192.168.1.128/26");
    assert_eq!(report.host_count, 62);
}

#[test]
fn test_point_to_point_and_host_routes() {
    let report = explore("10.0.0.5", 31).expect("valid input");
    assert_eq!(report.host_count, 0);
    assert_eq!(report.first_usable, None);
    assert_eq!(report.last_usable, None);
    assert!(report.children.is_empty());

    let report = explore("10.0.0.5", 32).expect("valid input");
    assert_eq!(report.network, Ipv4Addr::new(10, 0, 0, 5));
    assert_eq!(report.broadcast, Ipv4Addr::new(10, 0, 0, 5));
    assert!(report.children.is_empty());
}

#[test]
fn test_whole_v4_space_stays_bounded() {
    let report = explore("0.0.0.0", 0).expect("valid input");
    assert_eq!(report.host_count, 4_294_967_294);
    match report.hosts {
        HostRange::TooMany { count } => assert_eq!(count, 4_294_967_294),
        HostRange::Enumerated(_) => panic!("2^32-2 hosts must not be materialized"),
    }
}

#[test]
fn test_typed_error_taxonomy() {
    assert!(matches!(
        explore("10.0.0", 24),
        Err(SubnetError::InvalidFormat { .. })
    ));
    assert!(matches!(
        explore("10.0.0.256", 24),
        Err(SubnetError::OutOfRange { .. })
    ));
    assert!(matches!(
        explore("10.0.0.1", 33),
        Err(SubnetError::InvalidPrefix { prefix: 33 })
    ));

    // The error, not the arithmetic, carries the diagnosis.
    let err = explore("10.0.0.1", 40).unwrap_err();
    assert_eq!(err.to_string(), "invalid prefix length /40: expected 0-32");
}

#[test]
fn test_report_json_round_trip() {
    let report = explore("172.16.4.9", 30).expect("valid input");
    let json = serde_json::to_string(&report).expect("serializable");
    let back: subnet_explorer::SubnetReport =
        serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, report);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["cidr"], "172.16.4.9/30");
    assert_eq!(value["network"], "172.16.4.8");
    assert_eq!(value["host_count"], 2);
}
