//! Plan Builder
//!
//! Three-step form state machine: Plan → Contact → Schedule → checkout.
//!
//! "Continue" only moves forward when [`can_advance`] holds for the current
//! step. "Back" and the step indicator may move anywhere at any time.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::plan::{self, JugCount, SubscriptionPlan, Term};
use crate::pricing::PriceTable;
use crate::roommate::{active_roommates, Roommate};

/// Selectable delivery days
pub const DELIVERY_DAYS: [&str; 6] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Selectable delivery windows
pub const DELIVERY_WINDOWS: [&str; 4] = ["8-10 AM", "11 AM-1 PM", "2-4 PM", "6-8 PM"];

/// Builder step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Step {
    #[default]
    Plan,
    Contact,
    Schedule,
}

impl Step {
    pub const ALL: [Self; 3] = [Self::Plan, Self::Contact, Self::Schedule];

    pub const fn index(self) -> usize {
        match self {
            Self::Plan => 0,
            Self::Contact => 1,
            Self::Schedule => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Plan => "Plan",
            Self::Contact => "Contact",
            Self::Schedule => "Schedule",
        }
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Plan => Some(Self::Contact),
            Self::Contact => Some(Self::Schedule),
            Self::Schedule => None,
        }
    }

    pub const fn prev(self) -> Option<Self> {
        match self {
            Self::Plan => None,
            Self::Contact => Some(Self::Plan),
            Self::Schedule => Some(Self::Contact),
        }
    }

    pub const fn is_last(self) -> bool {
        self.next().is_none()
    }
}

impl TryFrom<usize> for Step {
    type Error = PlanError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL.get(index).copied().ok_or(PlanError::InvalidStep(index))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which roommate field an edit targets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoommateField {
    Name,
    Email,
}

/// Everything the plan builder collects
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub step: Step,
    pub term: Option<Term>,
    pub jugs: Option<JugCount>,
    pub name: String,
    pub email: String,
    pub building: String,
    pub room: String,
    pub roommates: Vec<Roommate>,
    pub day: String,
    pub window: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            step: Step::Plan,
            term: Some(Term::FullYear),
            jugs: Some(JugCount::Two),
            name: String::new(),
            email: String::new(),
            building: String::new(),
            room: String::new(),
            roommates: vec![Roommate::default()],
            day: DELIVERY_DAYS[0].to_string(),
            window: DELIVERY_WINDOWS[3].to_string(),
        }
    }
}

/// Everything the checkout needs once the builder is submitted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutHandoff {
    pub plan: SubscriptionPlan,
    pub price_id: String,
    pub name: String,
    pub email: String,
    pub building: String,
    pub room: String,
    pub roommates: Vec<Roommate>,
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Readiness predicate: may "Continue" leave `step` with this form?
pub fn can_advance(step: Step, form: &FormState) -> bool {
    match step {
        Step::Plan => form.term.is_some() && form.jugs.is_some(),
        Step::Contact => {
            filled(&form.name) && filled(&form.email) && filled(&form.building) && filled(&form.room)
        }
        Step::Schedule => form.term.is_some() && filled(&form.day) && filled(&form.window),
    }
}

impl FormState {
    /// Apply `term` / `jugs` query parameters. Each value only replaces the
    /// current selection when it is one of the valid choices.
    pub fn seed_from_query(&mut self, term: Option<&str>, jugs: Option<&str>) {
        if let Some(term) = term.and_then(|t| t.parse::<Term>().ok()) {
            self.term = Some(term);
        }
        if let Some(jugs) = jugs.and_then(|j| j.parse::<JugCount>().ok()) {
            self.jugs = Some(jugs);
        }
    }

    pub fn step_ready(&self) -> bool {
        can_advance(self.step, self)
    }

    /// "Continue": move to the next step if the current one is complete.
    ///
    /// Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        match self.step.next() {
            Some(next) if self.step_ready() => {
                self.step = next;
                true
            }
            _ => false,
        }
    }

    /// "Back": always allowed, stops at the first step
    pub fn back(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
    }

    /// Step indicator: jump anywhere
    pub fn jump_to(&mut self, step: Step) {
        self.step = step;
    }

    pub fn plan(&self) -> Option<SubscriptionPlan> {
        Some(SubscriptionPlan::new(self.term?, self.jugs?))
    }

    pub fn add_roommate(&mut self) {
        self.roommates.push(Roommate::default());
    }

    /// Remove a roommate row. The last remaining row is kept.
    pub fn remove_roommate(&mut self, index: usize) {
        if self.roommates.len() > 1 && index < self.roommates.len() {
            self.roommates.remove(index);
        }
    }

    pub fn update_roommate(&mut self, index: usize, field: RoommateField, value: impl Into<String>) {
        if let Some(roommate) = self.roommates.get_mut(index) {
            match field {
                RoommateField::Name => roommate.name = value.into(),
                RoommateField::Email => roommate.email = value.into(),
            }
        }
    }

    pub fn active_roommates(&self) -> Vec<Roommate> {
        active_roommates(&self.roommates)
    }

    pub fn display_price(&self) -> Option<Decimal> {
        self.plan().map(SubscriptionPlan::display_price)
    }

    /// Approximate per-person price; shown only when someone shares the plan
    pub fn per_person_price(&self) -> Option<Decimal> {
        let total = self.display_price()?;
        plan::per_person_price(total, self.active_roommates().len())
    }

    /// One-line preview, e.g. `2 jugs/month · Full year · Monday 6-8 PM`
    pub fn summary(&self) -> String {
        let jugs = self.jugs.map_or_else(|| "?".to_string(), |j| j.to_string());
        let term = self.term.map_or("No term", Term::label);
        format!("{jugs} jugs/month · {term} · {} {}", self.day, self.window)
    }

    /// "Subscribe": produce the checkout hand-off when on the last step and
    /// everything is filled in.
    pub fn submit(&self, prices: &PriceTable) -> Option<CheckoutHandoff> {
        if !self.step.is_last() || !self.step_ready() {
            return None;
        }

        let plan = self.plan()?;
        let roommates = self.active_roommates();

        tracing::debug!(
            term = %plan.term,
            jugs = plan.jugs.count(),
            roommates = roommates.len(),
            "Plan builder submitted"
        );

        Some(CheckoutHandoff {
            plan,
            price_id: prices.price_id(plan).to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            building: self.building.clone(),
            room: self.room.clone(),
            roommates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn filled_form() -> FormState {
        let mut form = FormState::default();
        form.name = "Jordan Rivera".into();
        form.email = "jordan@school.edu".into();
        form.building = "North Lake Village".into();
        form.room = "B-204".into();
        form
    }

    #[test]
    fn test_defaults() {
        let form = FormState::default();
        assert_eq!(form.step, Step::Plan);
        assert_eq!(form.plan(), Some(SubscriptionPlan::new(Term::FullYear, JugCount::Two)));
        assert_eq!(form.roommates.len(), 1);
        assert_eq!(form.day, "Monday");
        assert_eq!(form.window, "6-8 PM");
    }

    #[test]
    fn test_continue_blocked_without_term() {
        let mut form = FormState::default();
        form.term = None;
        assert!(!form.advance());
        assert_eq!(form.step, Step::Plan);
    }

    #[test]
    fn test_continue_blocked_on_blank_contact() {
        let mut form = FormState::default();
        assert!(form.advance());
        assert_eq!(form.step, Step::Contact);

        form.name = "Jordan".into();
        form.email = "jordan@school.edu".into();
        form.building = "SoVi".into();
        form.room = "   ".into();
        assert!(!form.advance());
        assert_eq!(form.step, Step::Contact);

        form.room = "B-204".into();
        assert!(form.advance());
        assert_eq!(form.step, Step::Schedule);
    }

    #[test]
    fn test_schedule_requires_day_and_window() {
        let mut form = filled_form();
        form.step = Step::Schedule;
        form.window = String::new();
        assert!(!can_advance(Step::Schedule, &form));
        form.window = "2-4 PM".into();
        assert!(can_advance(Step::Schedule, &form));
    }

    #[test]
    fn test_continue_stops_at_last_step() {
        let mut form = filled_form();
        form.step = Step::Schedule;
        assert!(!form.advance());
        assert_eq!(form.step, Step::Schedule);
    }

    #[test]
    fn test_back_and_jump_are_free() {
        let mut form = FormState::default();
        form.back();
        assert_eq!(form.step, Step::Plan);

        // Jumping ahead past an incomplete step is allowed
        form.jump_to(Step::Schedule);
        assert_eq!(form.step, Step::Schedule);
        form.back();
        assert_eq!(form.step, Step::Contact);

        // ...but Continue from there is still gated
        assert!(!form.advance());
    }

    #[test]
    fn test_step_index_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::try_from(step.index()), Ok(step));
        }
        assert_eq!(Step::try_from(3), Err(PlanError::InvalidStep(3)));
    }

    #[test]
    fn test_query_seeding() {
        let mut form = FormState::default();
        form.seed_from_query(Some("semester"), Some("3"));
        assert_eq!(form.plan(), Some(SubscriptionPlan::new(Term::Semester, JugCount::Three)));

        let mut form = FormState::default();
        form.seed_from_query(Some("forever"), Some("12"));
        assert_eq!(form.plan(), Some(SubscriptionPlan::default()));

        let mut form = FormState::default();
        form.seed_from_query(None, Some("4"));
        assert_eq!(form.plan(), Some(SubscriptionPlan::new(Term::FullYear, JugCount::Four)));
    }

    #[test]
    fn test_seeded_plan_reaches_checkout() {
        let prices = PriceTable::fallback();
        let mut form = filled_form();
        form.seed_from_query(Some("semester"), Some("3"));

        assert!(form.advance());
        assert!(form.advance());
        let handoff = form.submit(&prices).unwrap();

        let semester_standard = SubscriptionPlan::new(Term::Semester, JugCount::Three);
        assert_eq!(handoff.price_id, prices.price_id(semester_standard));
        assert_ne!(handoff.price_id, prices.price_id(SubscriptionPlan::default()));
    }

    #[test]
    fn test_submit_only_from_last_step() {
        let prices = PriceTable::fallback();
        let mut form = filled_form();
        assert!(form.submit(&prices).is_none());

        form.jump_to(Step::Schedule);
        form.name = String::new();
        // Schedule itself is ready, contact was skipped via the indicator
        assert!(form.submit(&prices).is_some());

        form.day = " ".into();
        assert!(form.submit(&prices).is_none());
    }

    #[test]
    fn test_roommate_editing() {
        let mut form = FormState::default();
        form.remove_roommate(0);
        assert_eq!(form.roommates.len(), 1);

        form.update_roommate(0, RoommateField::Name, "Sam");
        form.add_roommate();
        form.update_roommate(1, RoommateField::Email, "alex@school.edu");
        form.add_roommate();
        form.update_roommate(9, RoommateField::Name, "ignored");

        assert_eq!(form.roommates.len(), 3);
        assert_eq!(form.active_roommates().len(), 2);

        form.remove_roommate(0);
        assert_eq!(form.roommates[0].email, "alex@school.edu");
        form.remove_roommate(7);
        assert_eq!(form.roommates.len(), 2);
    }

    #[test]
    fn test_handoff_filters_blank_roommates() {
        let prices = PriceTable::fallback();
        let mut form = filled_form();
        form.update_roommate(0, RoommateField::Name, "Sam");
        form.add_roommate();
        form.step = Step::Schedule;

        let handoff = form.submit(&prices).unwrap();
        assert_eq!(handoff.roommates, vec![Roommate::new("Sam", "")]);
    }

    #[test]
    fn test_per_person_price() {
        let mut form = FormState::default();
        assert_eq!(form.per_person_price(), None);

        form.update_roommate(0, RoommateField::Name, "Sam");
        form.add_roommate();
        form.update_roommate(1, RoommateField::Name, "Alex");
        assert_eq!(form.per_person_price(), Some(dec!(110.00)));
    }

    #[test]
    fn test_summary() {
        let form = FormState::default();
        assert_eq!(form.summary(), "2 jugs/month · Full year · Monday 6-8 PM");
    }
}
