// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

mod common;

use common::{InstantAdc, MockMask, MockPort};

use rover_nodes::config::{adc_input, NO_DATA};
use rover_nodes::nodes::SensorNode;
use rover_nodes::protocol::status::*;
use rover_nodes::protocol::SlaveState;
use rover_nodes::telemetry::{Field, ModeFlag};

/// Host write of one selector byte.
fn host_select(node: &SensorNode, mask: &MockMask, selector: u8) {
    let mut port = MockPort::new();
    port.rx = selector;
    for status in [SR_SLA_W_ACK, SR_DATA_ACK, SR_STOP] {
        port.status = status;
        node.on_bus_event(&mut port, mask);
    }
    assert_eq!(port.resets, 0);
}

/// Host read of one byte.
fn host_read(node: &SensorNode, mask: &MockMask) -> u8 {
    let mut port = MockPort::new();
    for status in [ST_SLA_R_ACK, ST_DATA_NACK, SR_STOP] {
        port.status = status;
        node.on_bus_event(&mut port, mask);
    }
    assert_eq!(port.tx.len(), 1);
    port.tx[0]
}

fn host_query(node: &SensorNode, mask: &MockMask, field: Field) -> u8 {
    host_select(node, mask, field.selector());
    host_read(node, mask)
}

#[test]
fn poll_cycle_samples_round_robin() {
    let node = SensorNode::new();
    let mask = MockMask::new();
    let mut adc = InstantAdc::new(&node, &mask);
    adc.readings[adc_input::IR_LEFT as usize] = 0x0110;
    adc.readings[adc_input::IR_RIGHT as usize] = 0x0220;
    adc.readings[adc_input::GYRO as usize] = 0x0FFF;
    adc.readings[adc_input::IR_FRONT as usize] = 0x0440;

    node.poll_cycle(&mut adc, &mask);

    assert_eq!(
        adc.started,
        vec![
            adc_input::IR_LEFT,
            adc_input::IR_RIGHT,
            adc_input::GYRO,
            adc_input::IR_FRONT
        ]
    );
    assert!(!node.is_sampling());
    assert!(mask.enabled());

    assert_eq!(host_query(&node, &mask, Field::IrLeft), 0x11);
    assert_eq!(host_query(&node, &mask, Field::IrRight), 0x22);
    assert_eq!(host_query(&node, &mask, Field::Gyro), 0xFF);
    assert_eq!(host_query(&node, &mask, Field::IrFront), 0x44);
}

#[test]
fn every_selector_reads_its_field() {
    let node = SensorNode::new();
    let mask = MockMask::new();
    for field in Field::ALL {
        node.registers().write(field, 0xA0 | field.selector());
    }

    for selector in 0..8u8 {
        host_select(&node, &mask, selector);
        assert_eq!(host_read(&node, &mask), 0xA0 | selector);
    }
    for selector in [8u8, 0x10, 0x7F, 0xFF] {
        host_select(&node, &mask, selector);
        assert_eq!(host_read(&node, &mask), NO_DATA);
    }
}

#[test]
fn read_before_select_is_no_data() {
    let node = SensorNode::new();
    let mask = MockMask::new();
    assert_eq!(host_read(&node, &mask), NO_DATA);
}

#[test]
fn odometer_is_served_after_snapshot() {
    let node = SensorNode::new();
    let mask = MockMask::new();
    let mut adc = InstantAdc::new(&node, &mask);

    for _ in 0..300 {
        assert!(node.on_pulse_edge(&mask, || {}, || true));
    }
    // Bounces that revert within the window
    for _ in 0..5 {
        assert!(!node.on_pulse_edge(&mask, || {}, || false));
    }
    assert_eq!(node.odometer(), 300);
    assert_eq!(host_query(&node, &mask, Field::OdometerLow), 0);

    node.poll_cycle(&mut adc, &mask);

    assert_eq!(host_query(&node, &mask, Field::OdometerHigh), 0x01);
    assert_eq!(host_query(&node, &mask, Field::OdometerLow), 0x2C);
}

#[test]
fn mode_flags_toggle_in_pairs() {
    let node = SensorNode::new();
    let mask = MockMask::new();

    assert_eq!(host_query(&node, &mask, Field::AutomaticDrive), 1);
    assert_eq!(node.on_mode_toggle(ModeFlag::AutomaticDrive, &mask), 0);
    assert_eq!(host_query(&node, &mask, Field::AutomaticDrive), 0);
    assert_eq!(node.on_mode_toggle(ModeFlag::AutomaticDrive, &mask), 1);
    assert_eq!(host_query(&node, &mask, Field::AutomaticDrive), 1);

    // The other flag is independent
    assert_eq!(host_query(&node, &mask, Field::StartDrive), 1);
}

#[test]
fn bus_error_resets_and_recovers() {
    let node = SensorNode::new();
    let mask = MockMask::new();
    node.registers().write(Field::Gyro, 0x3C);

    let mut port = MockPort::new();
    port.status = ST_SLA_R_ACK;
    node.on_bus_event(&mut port, &mask);
    assert_eq!(node.bus().state(), SlaveState::AddressedForRead);

    port.status = BUS_ERROR;
    assert_eq!(node.on_bus_event(&mut port, &mask), SlaveState::ErrorReset);
    assert_eq!(node.bus().state(), SlaveState::Idle);
    assert_eq!(port.resets, 1);
    assert_eq!(node.bus().resets(), 1);

    assert_eq!(host_query(&node, &mask, Field::Gyro), 0x3C);
}

#[test]
fn spurious_conversion_is_ignored() {
    let node = SensorNode::new();
    let mask = MockMask::new();
    let before = node.registers().snapshot();

    assert_eq!(node.on_conversion_complete(0x0FFF, &mask), None);
    assert_eq!(node.registers().snapshot(), before);
}

#[test]
fn every_entry_point_leaves_interrupts_enabled() {
    let node = SensorNode::new();
    let mask = MockMask::new();
    let mut adc = InstantAdc::new(&node, &mask);

    node.poll_cycle(&mut adc, &mask);
    host_query(&node, &mask, Field::IrLeft);
    node.on_pulse_edge(&mask, || {}, || true);
    node.on_mode_toggle(ModeFlag::StartDrive, &mask);

    assert!(mask.enabled());
    assert!(mask.entered() > 0);
}
