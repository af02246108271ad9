// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Sensor node firmware.
//!
//! The main loop samples the four analog sensors round-robin and snapshots the odometer; the
//! I2C1, ADC and EXTI0..2 interrupts do everything else.

#![no_main]
#![no_std]

use core::cell::RefCell;

use cortex_m::{interrupt::Mutex, peripheral::NVIC};
use cortex_m_rt::entry;
use panic_halt as _;

use hal::{
    gpio::{gpioc, Edge, ExtiPin, Floating, Input},
    pac::{self, interrupt},
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use rover_nodes::config::{DEBOUNCE_CYCLES, DEBUG_BAUD, TELEMETRY_ADDRESS};
use rover_nodes::hw::{Adc, CortexMask, I2cSlave, SensorPins, Usart};
use rover_nodes::nodes::SensorNode;
use rover_nodes::telemetry::ModeFlag;

type AutoLine = gpioc::PC0<Input<Floating>>;
type OdometerLine = gpioc::PC1<Input<Floating>>;
type StartLine = gpioc::PC2<Input<Floating>>;

static NODE: SensorNode = SensorNode::new();

static BUS: Mutex<RefCell<Option<I2cSlave<pac::I2C1>>>> = Mutex::new(RefCell::new(None));
static AUTO_LINE: Mutex<RefCell<Option<AutoLine>>> = Mutex::new(RefCell::new(None));
static ODOMETER_LINE: Mutex<RefCell<Option<OdometerLine>>> = Mutex::new(RefCell::new(None));
static START_LINE: Mutex<RefCell<Option<StartLine>>> = Mutex::new(RefCell::new(None));

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();
    let mut apb2 = rcc.apb2;

    // GPIO
    let mut pins = SensorPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC);

    // USART1 (DBG)
    let usart_cfg = Config {
        baud_rate: DEBUG_BAUD.bps(),
        ..Default::default()
    };
    let serial = Serial::new(dp.USART1, (pins.usart1.tx, pins.usart1.rx), &clocks, usart_cfg);
    let mut usart = Usart::new(serial);

    usart.write_str("sensor node @ ");
    usart.print_hex_u8(TELEMETRY_ADDRESS);
    usart.println("");

    // Edge lines: two mode toggles and the odometer
    let mut syscfg = dp.SYSCFG;
    let mut exti = dp.EXTI;
    let lines = &mut pins.lines;
    lines.auto_toggle.make_interrupt_source(&mut syscfg, &mut apb2);
    lines.auto_toggle.trigger_on_edge(&mut exti, Edge::Rising);
    lines.auto_toggle.enable_interrupt(&mut exti);
    lines.odometer.make_interrupt_source(&mut syscfg, &mut apb2);
    lines.odometer.trigger_on_edge(&mut exti, Edge::Rising);
    lines.odometer.enable_interrupt(&mut exti);
    lines.start_toggle.make_interrupt_source(&mut syscfg, &mut apb2);
    lines.start_toggle.trigger_on_edge(&mut exti, Edge::Rising);
    lines.start_toggle.enable_interrupt(&mut exti);

    // ADC1, EOC interrupt
    let mut adc = Adc::adc1(dp.ADC1);

    // I2C1 slave
    let bus = I2cSlave::i2c1(dp.I2C1, pins.i2c1, TELEMETRY_ADDRESS);

    cortex_m::interrupt::free(|cs| {
        BUS.borrow(cs).replace(Some(bus));
        AUTO_LINE.borrow(cs).replace(Some(pins.lines.auto_toggle));
        ODOMETER_LINE.borrow(cs).replace(Some(pins.lines.odometer));
        START_LINE.borrow(cs).replace(Some(pins.lines.start_toggle));
    });

    unsafe {
        NVIC::unmask(pac::Interrupt::ADC);
        NVIC::unmask(pac::Interrupt::I2C1_EV);
        NVIC::unmask(pac::Interrupt::I2C1_ER);
        NVIC::unmask(pac::Interrupt::EXTI0);
        NVIC::unmask(pac::Interrupt::EXTI1);
        NVIC::unmask(pac::Interrupt::EXTI2);
    }

    NODE.run(&mut adc, &CortexMask)
}

#[interrupt]
fn ADC() {
    NODE.on_conversion_complete(Adc::<pac::ADC1>::result(), &CortexMask);
}

fn bus_event() {
    cortex_m::interrupt::free(|cs| {
        if let Some(bus) = BUS.borrow(cs).borrow_mut().as_mut() {
            NODE.on_bus_event(bus, &CortexMask);
        }
    });
}

#[interrupt]
fn I2C1_EV() {
    bus_event();
}

#[interrupt]
fn I2C1_ER() {
    bus_event();
}

#[interrupt]
fn EXTI0() {
    cortex_m::interrupt::free(|cs| {
        if let Some(line) = AUTO_LINE.borrow(cs).borrow_mut().as_mut() {
            line.clear_interrupt_pending_bit();
        }
    });
    NODE.on_mode_toggle(ModeFlag::AutomaticDrive, &CortexMask);
}

#[interrupt]
fn EXTI1() {
    cortex_m::interrupt::free(|cs| {
        if let Some(line) = ODOMETER_LINE.borrow(cs).borrow_mut().as_mut() {
            line.clear_interrupt_pending_bit();
            NODE.on_pulse_edge(
                &CortexMask,
                || cortex_m::asm::delay(DEBOUNCE_CYCLES),
                || line.is_high(),
            );
        }
    });
}

#[interrupt]
fn EXTI2() {
    cortex_m::interrupt::free(|cs| {
        if let Some(line) = START_LINE.borrow(cs).borrow_mut().as_mut() {
            line.clear_interrupt_pending_bit();
        }
    });
    NODE.on_mode_toggle(ModeFlag::StartDrive, &CortexMask);
}
