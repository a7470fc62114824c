//! Application state and core logic for the CFO Helper dashboard.
//!
//! This module contains the `App` struct which holds the baseline, the
//! current lever values, the last computed result and the navigation/edit
//! state of the control panel.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::{parse_lever_input, BaselineFinancials, Lever, Mode, ScenarioAdjustment};
use crate::scenario::{compute, Runway, ScenarioResult};

/// Longest text accepted in the edit buffer
const MAX_EDIT_LEN: usize = 12;

/// Application state
pub struct App {
    pub baseline: BaselineFinancials,
    pub adjustment: ScenarioAdjustment,
    pub result: ScenarioResult,
    pub mode: Mode,
    /// Lever that arrow keys and edits apply to
    pub focused: Lever,
    /// Text typed while in edit mode
    pub edit_buffer: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(baseline: BaselineFinancials, adjustment: ScenarioAdjustment) -> Self {
        let result = compute(&baseline, adjustment);
        Self {
            baseline,
            adjustment,
            result,
            mode: Mode::Navigate,
            focused: Lever::default(),
            edit_buffer: String::new(),
            should_quit: false,
        }
    }

    /// Replace the adjustment and recompute the result
    pub fn set_adjustment(&mut self, adjustment: ScenarioAdjustment) {
        if adjustment == self.adjustment {
            return;
        }
        self.adjustment = adjustment;
        self.result = compute(&self.baseline, adjustment);

        tracing::debug!(
            hires = adjustment.additional_employees(),
            marketing = adjustment.marketing_adjustment(),
            price = adjustment.price_adjustment(),
            runway = ?self.result.runway,
            budget_left = self.result.budget_left,
            profit_loss = self.result.profit_loss,
            "scenario recomputed"
        );
        if self.result.runway == Runway::Unbounded {
            tracing::warn!(
                burn = self.result.new_monthly_burn,
                "scenario burn is not positive; runway is unbounded"
            );
        }
    }

    /// Step the focused lever by a number of slider steps
    pub fn step_focused(&mut self, steps: i64) {
        self.set_adjustment(self.adjustment.step(self.focused, steps));
    }

    /// Set the focused lever to an exact value (clamped)
    pub fn set_focused(&mut self, value: i64) {
        self.set_adjustment(self.adjustment.with(self.focused, value));
    }

    /// Reset every lever to zero
    pub fn reset(&mut self) {
        self.set_adjustment(ScenarioAdjustment::default());
    }

    /// Enter edit mode with the focused lever's current value in the buffer
    pub fn begin_edit(&mut self) {
        self.mode = Mode::Edit;
        self.edit_buffer = self.adjustment.get(self.focused).to_string();
    }

    /// Parse the buffer into the focused lever and leave edit mode
    pub fn commit_edit(&mut self) {
        let value = parse_lever_input(&self.edit_buffer);
        tracing::debug!(lever = ?self.focused, input = %self.edit_buffer, value, "lever edited");
        self.set_focused(value);
        self.cancel_edit();
    }

    pub fn cancel_edit(&mut self) {
        self.mode = Mode::Navigate;
        self.edit_buffer.clear();
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.mode {
            Mode::Navigate => self.handle_navigate_key(key.code),
            Mode::Edit => self.handle_edit_key(key.code),
        }
    }

    fn handle_navigate_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => {
                self.focused = self.focused.prev();
            }
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => {
                self.focused = self.focused.next();
            }
            KeyCode::Left | KeyCode::Char('h') => self.step_focused(-1),
            KeyCode::Right | KeyCode::Char('l') => self.step_focused(1),
            KeyCode::Home => self.set_focused(self.focused.min()),
            KeyCode::End => self.set_focused(self.focused.max()),
            KeyCode::Char('0') => self.set_focused(0),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Enter | KeyCode::Char('e') => self.begin_edit(),
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Esc => self.cancel_edit(),
            KeyCode::Backspace => {
                self.edit_buffer.pop();
            }
            KeyCode::Char(c) if (c.is_ascii_digit() || c == '-') && self.edit_buffer.len() < MAX_EDIT_LEN => {
                self.edit_buffer.push(c);
            }
            _ => {}
        }
    }
}
