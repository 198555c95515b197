use super::{zpool_output, FakeRunner, GLABEL_STATUS};
use crate::collectors::glabel::AliasMap;
use crate::collectors::zfs::{parse_zpool_list, read_pool_health};
use crate::config::ToolsConfig;
use crate::models::pool::{DeviceRecord, HealthState};
use crate::platform::{Capabilities, Platform};

#[test]
fn test_health_state_parse() {
    assert_eq!(HealthState::parse("ONLINE"), HealthState::Online);
    assert_eq!(HealthState::parse("FAULTED\n"), HealthState::Faulted);
    assert_eq!(HealthState::parse("SUSPENDED"), HealthState::Other("SUSPENDED".to_string()));
    assert!(HealthState::Online.is_healthy());
    for s in ["DEGRADED", "FAULTED", "OFFLINE", "UNAVAIL", "REMOVED", "SUSPENDED"] {
        assert!(!HealthState::parse(s).is_healthy(), "{s} counts as unhealthy");
    }
}

#[test]
fn test_parse_zpool_list_keeps_device_rows_only() {
    let runner = FakeRunner::new();
    let tools = ToolsConfig::default();
    let caps = Capabilities::with_aliases(Platform::Linux, AliasMap::default(), &runner, &tools);

    let mut text = zpool_output(&[("/dev/sda1", "ONLINE"), ("/dev/sdb1", "FAULTED")]);
    text.push_str("\tlogs\t-\t-\t-\t-\t-\t-\t-\t-\t-\t-\n");
    let records = parse_zpool_list(&text, &caps);

    assert_eq!(
        records,
        vec![
            DeviceRecord::direct("/dev/sda1", HealthState::Online),
            DeviceRecord::direct("/dev/sdb1", HealthState::Faulted),
        ]
    );
}

#[test]
fn test_parse_zpool_list_skips_short_device_row() {
    let runner = FakeRunner::new();
    let tools = ToolsConfig::default();
    let caps = Capabilities::with_aliases(Platform::Linux, AliasMap::default(), &runner, &tools);

    let text = "\t/dev/sda1\t3.64T\tONLINE\n\t/dev/sdb1\t3.64T\t-\t-\t-\t-\t-\t-\t-\tDEGRADED\n";
    let records = parse_zpool_list(text, &caps);
    assert_eq!(records.len(), 1, "malformed row is skipped, not fatal");
    assert_eq!(records[0].device_path, "/dev/sdb1");
}

#[test]
fn test_parse_zpool_list_linux_passes_partuuid_through() {
    let runner = FakeRunner::new();
    let tools = ToolsConfig::default();
    let caps = Capabilities::with_aliases(Platform::Linux, AliasMap::default(), &runner, &tools);

    let path = "/dev/disk/by-partuuid/6d2f0b1e-8c35-4c0b-9e22-0f5e3c7a1b10";
    let records = parse_zpool_list(&zpool_output(&[(path, "DEGRADED")]), &caps);
    assert_eq!(records, vec![DeviceRecord::direct(path, HealthState::Degraded)]);
}

#[test]
fn test_read_pool_health_resolves_gptid_aliases() {
    let pool = zpool_output(&[
        ("/dev/gptid/2a1c3d5e-1111-11ee-9c2b-0cc47a123456", "FAULTED"),
        ("/dev/gptid/3b2d4e6f-2222-11ee-9c2b-0cc47a123456", "ONLINE"),
        ("/dev/ada1p2", "ONLINE"),
    ]);
    let runner = FakeRunner::new()
        .with("glabel status", GLABEL_STATUS)
        .with("zpool list -PLvH", &pool);
    let tools = ToolsConfig::default();
    let caps = Capabilities::new(Platform::FreeBsd, &runner, &tools);

    let records = read_pool_health(&caps);
    let paths: Vec<&str> = records.iter().map(|r| r.device_path.as_str()).collect();
    assert_eq!(paths, vec!["/dev/da0", "/dev/da1", "/dev/ada1"], "aliases and partitions map to whole disks");
    assert!(records.iter().all(|r| r.resolved));
    assert_eq!(records[0].pool_path, "/dev/gptid/2a1c3d5e-1111-11ee-9c2b-0cc47a123456");
}

#[test]
fn test_freebsd_direct_paths_reduce_to_whole_disk() {
    let runner = FakeRunner::new();
    let tools = ToolsConfig::default();
    let caps = Capabilities::with_aliases(Platform::FreeBsd, AliasMap::default(), &runner, &tools);

    let records = parse_zpool_list(&zpool_output(&[("/dev/da0p2", "FAULTED"), ("/dev/ada0", "ONLINE")]), &caps);
    let paths: Vec<&str> = records.iter().map(|r| r.device_path.as_str()).collect();
    assert_eq!(paths, vec!["/dev/da0", "/dev/ada0"]);
    assert!(records.iter().all(|r| r.resolved), "a whole-disk vdev is not a gap");
    assert_eq!(records[0].pool_path, "/dev/da0p2");
}

#[test]
fn test_linux_direct_paths_are_kept() {
    let runner = FakeRunner::new();
    let tools = ToolsConfig::default();
    let caps = Capabilities::with_aliases(Platform::Linux, AliasMap::default(), &runner, &tools);

    let records = parse_zpool_list(&zpool_output(&[("/dev/nvme0n1p1", "FAULTED")]), &caps);
    assert_eq!(records[0].device_path, "/dev/nvme0n1p1", "smartctl on Linux takes partitions");
}

#[test]
fn test_unknown_alias_is_left_unresolved() {
    let runner = FakeRunner::new();
    let tools = ToolsConfig::default();
    let caps = Capabilities::with_aliases(Platform::FreeBsd, AliasMap::default(), &runner, &tools);

    let records = parse_zpool_list(&zpool_output(&[("/dev/gptid/ffff", "FAULTED")]), &caps);
    assert_eq!(records.len(), 1);
    assert!(!records[0].resolved, "gap keeps the record but marks it unmatchable");
    assert_eq!(records[0].device_path, "/dev/gptid/ffff");
}

#[test]
fn test_failed_zpool_still_parses_partial_output() {
    let runner = FakeRunner::new().failing("zpool list -PLvH", &zpool_output(&[("/dev/sda1", "ONLINE")]));
    let tools = ToolsConfig::default();
    let caps = Capabilities::with_aliases(Platform::Linux, AliasMap::default(), &runner, &tools);
    assert_eq!(read_pool_health(&caps).len(), 1);
}
