//! Unit tests for usage and consumption accounting

use smart_home_sim::*;

fn home() -> SmartHome {
    let mut home = SmartHome::new();
    home.set_initial_time(Timestamp::parse("2024-01-01_00:00:00").unwrap()).unwrap();
    home
}

/// Test camera storage accounting over a manual on/off interval
#[test]
fn test_camera_storage_over_manual_interval() {
    let mut home = home();
    home.add_device(Device::camera("cam", 1.5, false)).unwrap();
    home.skip_minutes(10).unwrap();
    home.switch_now("cam", true).unwrap();
    home.skip_minutes(40).unwrap();
    home.switch_now("cam", false).unwrap();

    assert_eq!(home.find_device("cam").unwrap().total_accrued(), 60.0);

    // Off time adds nothing; a zero-length on interval adds nothing either.
    home.skip_minutes(120).unwrap();
    home.switch_now("cam", true).unwrap();
    home.switch_now("cam", false).unwrap();
    assert_eq!(home.find_device("cam").unwrap().total_accrued(), 60.0);
}

/// Test plug consumption: ampere * voltage * minutes / 60
#[test]
fn test_plug_consumption_formula() {
    let mut home = home();
    home.add_device(Device::plug("p", true, Some(2.0))).unwrap();
    home.skip_minutes(90).unwrap();
    home.switch_now("p", false).unwrap();

    // 2A * 220V * 90min / 60 = 660W
    assert_eq!(home.find_device("p").unwrap().total_accrued(), 660.0);
}

/// Test that consumption needs both the switch on and an item plugged in
#[test]
fn test_plug_needs_switch_and_item() {
    let mut home = home();
    home.add_device(Device::plug("empty", true, None)).unwrap();
    home.add_device(Device::plug("off", false, Some(5.0))).unwrap();
    home.skip_minutes(60).unwrap();

    home.switch_now("empty", false).unwrap();
    home.switch_now("off", true).unwrap();
    home.switch_now("off", false).unwrap();
    assert_eq!(home.find_device("empty").unwrap().total_accrued(), 0.0);
    assert_eq!(home.find_device("off").unwrap().total_accrued(), 0.0);
}

/// Test that unplugging flushes the open interval with the item's ampere
#[test]
fn test_plug_out_flushes_before_emptying_the_socket() {
    let mut home = home();
    home.add_device(Device::plug("p", true, None)).unwrap();
    home.plug_in("p", 3.0).unwrap();
    home.skip_minutes(20).unwrap();
    home.plug_out("p").unwrap();

    // 3A * 220V * 20min / 60 = 220W, accounted at unplug time.
    assert_eq!(home.find_device("p").unwrap().total_accrued(), 220.0);

    // The socket is empty now; more time adds nothing.
    home.skip_minutes(60).unwrap();
    home.switch_now("p", false).unwrap();
    assert_eq!(home.find_device("p").unwrap().total_accrued(), 220.0);
}

/// Test that scheduled switches bound accrual intervals mid-advance
#[test]
fn test_scheduled_switches_bound_accrual() {
    let mut home = home();
    let start = home.clock().current().unwrap();
    home.add_device(Device::camera("cam", 2.0, true)).unwrap();
    home.schedule_switch("cam", start.plus_minutes(30)).unwrap();

    // One jump far past the switch: only the first 30 minutes count.
    home.advance_to(start.plus_minutes(300)).unwrap();
    let camera = home.find_device("cam").unwrap();
    assert!(!camera.is_on());
    assert_eq!(camera.total_accrued(), 60.0);
}

/// Test accrual across several scheduled on/off cycles
#[test]
fn test_accrual_across_cycles() {
    let mut home = home();
    let start = home.clock().current().unwrap();
    home.add_device(Device::camera("cam", 1.0, false)).unwrap();

    // on at +10, off at +25, on at +60, off at +70: 25 minutes total.
    home.schedule_switch("cam", start.plus_minutes(10)).unwrap();
    home.advance_to_next().unwrap();
    home.schedule_switch("cam", start.plus_minutes(25)).unwrap();
    home.advance_to_next().unwrap();
    home.schedule_switch("cam", start.plus_minutes(60)).unwrap();
    home.advance_to_next().unwrap();
    home.schedule_switch("cam", start.plus_minutes(70)).unwrap();
    home.advance_to(start.plus_minutes(100)).unwrap();

    assert_eq!(home.find_device("cam").unwrap().total_accrued(), 25.0);
}

/// Test that removal flushes a still-open interval
#[test]
fn test_remove_settles_open_interval() {
    let mut home = home();
    home.add_device(Device::plug("p", true, Some(1.0))).unwrap();
    home.skip_minutes(60).unwrap();
    let removed = home.remove_device("p").unwrap();
    assert_eq!(removed.total_accrued(), 220.0);
}

/// Test that the report shows the settled total, not the open interval
#[test]
fn test_report_excludes_the_open_interval() {
    let mut home = home();
    home.add_device(Device::camera("cam", 2.0, true)).unwrap();
    home.skip_minutes(30).unwrap();

    let report = home.report().unwrap();
    assert_eq!(report.devices[0].total_accrued, 0.0);
    assert!(report.devices[0].line.contains("used 0.00 MB"));
}
