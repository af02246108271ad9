// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Motor node firmware.
//!
//! All work happens in the I2C1 interrupts; the main loop sleeps.

#![no_main]
#![no_std]

use core::cell::RefCell;

use cortex_m::{interrupt::Mutex, peripheral::NVIC};
use cortex_m_rt::entry;
use panic_halt as _;

use hal::{
    pac::{self, interrupt},
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use rover_nodes::config::{DEBUG_BAUD, MOTOR_ADDRESS};
use rover_nodes::drivers::DualMotor;
use rover_nodes::hw::{I2cSlave, MotorPins, Usart};
use rover_nodes::nodes::MotorNode;

/// Everything the bus handler touches.
struct Shared {
    node: MotorNode,
    bus: I2cSlave<pac::I2C1>,
    motors: DualMotor,
    usart: Usart<pac::USART1>,
}

static SHARED: Mutex<RefCell<Option<Shared>>> = Mutex::new(RefCell::new(None));

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    // GPIO
    let pins = MotorPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD, dp.GPIOE);

    // USART1 (DBG)
    let usart_cfg = Config {
        baud_rate: DEBUG_BAUD.bps(),
        ..Default::default()
    };
    let serial = Serial::new(dp.USART1, (pins.usart1.tx, pins.usart1.rx), &clocks, usart_cfg);
    let mut usart = Usart::new(serial);

    usart.write_str("motor node @ ");
    usart.print_hex_u8(MOTOR_ADDRESS);
    usart.println("");

    // TIM4 PWM + direction pins, both sides stopped
    let mut motors = DualMotor::new(dp.TIM4, pins.pwm, pins.direction);
    let mut node = MotorNode::new();
    node.init(&mut motors);

    // I2C1 slave
    let bus = I2cSlave::i2c1(dp.I2C1, pins.i2c1, MOTOR_ADDRESS);

    cortex_m::interrupt::free(|cs| {
        SHARED.borrow(cs).replace(Some(Shared {
            node,
            bus,
            motors,
            usart,
        }));
    });

    unsafe {
        NVIC::unmask(pac::Interrupt::I2C1_EV);
        NVIC::unmask(pac::Interrupt::I2C1_ER);
    }

    loop {
        cortex_m::asm::wfi();
    }
}

fn bus_event() {
    cortex_m::interrupt::free(|cs| {
        if let Some(shared) = SHARED.borrow(cs).borrow_mut().as_mut() {
            let Shared {
                node,
                bus,
                motors,
                usart,
            } = shared;
            node.on_bus_event(bus, motors, &mut usart.best_effort());
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
