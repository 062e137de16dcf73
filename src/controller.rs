//! Outer control loop.
//!
//! Everything runs on one thread. Each [`Station::tick`] polls the buttons,
//! lets the menu advance, and once per control interval reads the humidity
//! and drives the relay. A tick always finishes before the next starts, so
//! the menu and the relay decision never overlap even though the relay keeps
//! being served while a menu branch is open.
//!
//! All mutable state the parts share lives in [`Context`], passed by
//! reference into each call.

use embedded_hal::digital::OutputPin;

use crate::buttons::ButtonSource;
use crate::config::Settings;
use crate::display::DisplaySink;
use crate::menu::{Menu, MenuSelection, SelectionSlot};
use crate::relay::{decide, Relay, RelayState};
use crate::rendering::render_status;
use crate::sensors::HumiditySource;
use crate::thresholds::ThresholdPair;
use crate::timer::{Instant, Periodic};

/// State shared between the menu and the relay control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Context {
    /// Active humidity band, edited in place by the menu
    pub thresholds: ThresholdPair,
    /// Pending menu request
    pub selection: SelectionSlot,
    /// Last decided relay state, fed back into the next decision
    pub relay: RelayState,
    /// Last good humidity reading
    pub reading: Option<f32>,
}

impl Context {
    pub fn new(thresholds: ThresholdPair) -> Context {
        Self {
            thresholds,
            selection: SelectionSlot::new(),
            relay: RelayState::Deenergized,
            reading: None,
        }
    }
}

pub struct Station<S, P, D, B> {
    sensor: S,
    relay: Relay<P>,
    display: D,
    buttons: B,
    menu: Menu,
    control: Periodic,
    was_idle: bool,
    /// Input capture waits for every button to be let go once the menu is
    /// back on the main screen
    capture_armed: bool,
}

impl<S, P, D, B> Station<S, P, D, B>
where
    S: HumiditySource,
    P: OutputPin,
    D: DisplaySink,
    B: ButtonSource,
{
    pub fn new(settings: &Settings, sensor: S, relay: Relay<P>, display: D, buttons: B) -> Self {
        Self {
            sensor,
            relay,
            display,
            buttons,
            menu: Menu::new(settings.message_a, settings.message_b),
            control: Periodic::new(settings.control_interval),
            was_idle: true,
            capture_armed: true,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Puts the relay in the context's state and draws the main screen
    pub fn start(&mut self, ctx: &mut Context) {
        if let Err(fault) = self.relay.set(ctx.relay) {
            error!("relay: {}", fault.describe());
        }
        if let Err(fault) = self.display.clear() {
            warn!("display: {}", fault.describe());
        }
        self.show_status(ctx);
        info!("station ready, band {} - {}", ctx.thresholds.low, ctx.thresholds.high);
    }

    /// One pass of the loop
    pub fn tick(&mut self, ctx: &mut Context, now: Instant) {
        let event = self.buttons.poll(now);

        // on the main screen a fresh press picks a menu entry; a button still
        // down from closing a branch does not
        if self.menu.is_idle() {
            if self.buttons.held().is_none() {
                self.capture_armed = true;
            }
            if self.capture_armed && !event.is_none() {
                ctx.selection.post(MenuSelection::from(event));
                self.capture_armed = false;
            }
        }

        if let Err(fault) = self.menu.tick(ctx, event, &mut self.display) {
            warn!("menu display: {}", fault.describe());
        }

        let controlled = self.control.is_due(now) && self.control_cycle(ctx);

        let idle = self.menu.is_idle();
        if !idle {
            self.capture_armed = false;
        }
        if idle && (controlled || !self.was_idle) {
            self.show_status(ctx);
        }
        self.was_idle = idle;
    }

    /// Reads the sensor and drives the relay.
    /// returns false when there was no reading to act on
    fn control_cycle(&mut self, ctx: &mut Context) -> bool {
        let reading = match self.sensor.read_percent() {
            Ok(reading) => reading,
            Err(fault) => {
                warn!("humidity: {}, relay left {}", fault.describe(), ctx.relay.label());
                return false;
            }
        };
        ctx.reading = Some(reading);

        let next = decide(reading, ctx.thresholds.low, ctx.thresholds.high, ctx.relay);
        if next != ctx.relay {
            info!("humidity {}%: relay {}", reading, next.label());
        }
        ctx.relay = next;

        if let Err(fault) = self.relay.set(next) {
            error!("relay: {}", fault.describe());
        }
        true
    }

    fn show_status(&mut self, ctx: &Context) {
        if let Err(fault) = render_status(&mut self.display, ctx.reading, ctx.relay) {
            warn!("status screen: {}", fault.describe());
        }
    }
}
