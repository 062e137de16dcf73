//! Operator menu.
//!
//! The menu is driven by a single-slot [`SelectionSlot`]: whoever captures
//! input writes the latest choice there and the menu picks it up on its next
//! tick while idle. Each branch (threshold adjustment, message) stays open
//! across ticks until the operator closes it with Button3.

use crate::buttons::ButtonEvent;
use crate::controller::Context;
use crate::display::DisplaySink;
use crate::editor::{EditStatus, ParameterEditor};
use crate::error::HardwareFault;
use crate::rendering::render_message;
use crate::thresholds::ThresholdField;

pub const MESSAGE_A: &str = "hola";
pub const MESSAGE_B: &str = "adios";

/// What the operator asked the menu to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuSelection {
    #[default]
    None,
    AdjustThresholds,
    ShowMessageA,
    ShowMessageB,
}

impl From<ButtonEvent> for MenuSelection {
    /// Idle screen shortcuts: 1 adjusts, 2 and 3 show the messages
    fn from(event: ButtonEvent) -> Self {
        match event {
            ButtonEvent::None => MenuSelection::None,
            ButtonEvent::Button1 => MenuSelection::AdjustThresholds,
            ButtonEvent::Button2 => MenuSelection::ShowMessageA,
            ButtonEvent::Button3 => MenuSelection::ShowMessageB,
        }
    }
}

/// Latest-value-wins command slot; a new selection overwrites one that
/// was not consumed yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionSlot {
    pending: MenuSelection,
}

impl SelectionSlot {
    pub fn new() -> SelectionSlot {
        Self::default()
    }

    pub fn post(&mut self, selection: MenuSelection) {
        self.pending = selection;
    }

    pub fn peek(&self) -> MenuSelection {
        self.pending
    }

    pub fn take(&mut self) -> MenuSelection {
        core::mem::take(&mut self.pending)
    }

    pub fn clear(&mut self) {
        self.pending = MenuSelection::None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuState {
    #[default]
    Idle,
    /// Editing one end of the band; max comes first, then min
    Adjusting(ThresholdField),
    ShowingMessageA,
    ShowingMessageB,
}

pub struct Menu {
    state: MenuState,
    editor: ParameterEditor,
    message_a: &'static str,
    message_b: &'static str,
}

impl Default for Menu {
    fn default() -> Self {
        Menu::new(MESSAGE_A, MESSAGE_B)
    }
}

impl Menu {
    pub fn new(message_a: &'static str, message_b: &'static str) -> Menu {
        Self {
            state: MenuState::Idle,
            editor: ParameterEditor::new(ThresholdField::High.label()),
            message_a,
            message_b,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == MenuState::Idle
    }

    /// Advances the menu by one tick.
    /// param ctx: shared controller state; the thresholds are edited in place
    /// param event: the debounced button event for this tick
    /// param display: screen to draw on
    ///
    /// On a display fault the state change has already happened, so the next
    /// tick carries on from where the operator is.
    pub fn tick<D: DisplaySink>(
        &mut self,
        ctx: &mut Context,
        event: ButtonEvent,
        display: &mut D,
    ) -> Result<(), HardwareFault> {
        match self.state {
            MenuState::Idle => match ctx.selection.peek() {
                MenuSelection::None => Ok(()),
                MenuSelection::AdjustThresholds => {
                    ctx.selection.take();
                    self.begin_adjusting(ctx, ThresholdField::High, display)
                }
                MenuSelection::ShowMessageA => {
                    ctx.selection.take();
                    self.enter(MenuState::ShowingMessageA);
                    render_message(display, self.message_a)
                }
                MenuSelection::ShowMessageB => {
                    ctx.selection.take();
                    self.enter(MenuState::ShowingMessageB);
                    render_message(display, self.message_b)
                }
            },
            MenuState::Adjusting(field) => {
                let value = ctx.thresholds.get_mut(field);
                match self.editor.handle(event, value, display)? {
                    EditStatus::Editing => Ok(()),
                    EditStatus::Confirmed => match field {
                        ThresholdField::High => self.begin_adjusting(ctx, ThresholdField::Low, display),
                        ThresholdField::Low => {
                            info!("band set to {} - {}", ctx.thresholds.low, ctx.thresholds.high);
                            if ctx.thresholds.is_inverted() {
                                warn!("min is not below max, the relay will favour min");
                            }
                            self.finish(ctx);
                            display.clear()
                        }
                    },
                }
            }
            MenuState::ShowingMessageA | MenuState::ShowingMessageB => {
                if event == ButtonEvent::Button3 {
                    self.finish(ctx);
                }
                Ok(())
            }
        }
    }

    fn begin_adjusting<D: DisplaySink>(
        &mut self,
        ctx: &Context,
        field: ThresholdField,
        display: &mut D,
    ) -> Result<(), HardwareFault> {
        self.enter(MenuState::Adjusting(field));
        self.editor = ParameterEditor::new(field.label());
        self.editor.open(ctx.thresholds.get(field), display)
    }

    fn enter(&mut self, state: MenuState) {
        debug!("menu: {} -> {}", self.state, state);
        self.state = state;
    }

    /// Back to idle. Anything selected while the branch was open is dropped.
    fn finish(&mut self, ctx: &mut Context) {
        self.enter(MenuState::Idle);
        ctx.selection.clear();
    }
}
