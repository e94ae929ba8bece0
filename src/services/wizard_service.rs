use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::{
    models::{
        booking::{
            ApplicantField, BookingDraft, BookingSummary, WizardAction, WizardStep,
        },
        campaign::PageQuery,
        locale::Locale,
    },
    services::{
        catalog_service::Catalog,
        localization_service::LocalizationService,
        pricing_service::{PricingService, StayPricing},
    },
};

pub const DURATION_CHIPS: [u32; 4] = [3, 6, 9, 12];
pub const MIN_DURATION_MONTHS: u32 = 1;
pub const MAX_DURATION_MONTHS: u32 = 24;

const CARD_DIGITS: usize = 16;
const EXPIRY_DIGITS: usize = 4;
const CVC_DIGITS: usize = 4;

/// Which calendar days may be picked as a move-in date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveInRule {
    #[default]
    AnyDay,
    /// Any remaining day of the current month, otherwise only the 1st.
    FirstOfMonth,
}

impl MoveInRule {
    pub fn allows(self, date: NaiveDate, today: NaiveDate) -> bool {
        if date < today {
            return false;
        }
        match self {
            MoveInRule::AnyDay => true,
            MoveInRule::FirstOfMonth => {
                let same_month = date.year() == today.year() && date.month() == today.month();
                same_month || date.day() == 1
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown move-in rule: {0}")]
pub struct UnknownMoveInRule(pub String);

impl FromStr for MoveInRule {
    type Err = UnknownMoveInRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any_day" => Ok(MoveInRule::AnyDay),
            "first_of_month" => Ok(MoveInRule::FirstOfMonth),
            other => Err(UnknownMoveInRule(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BookingRules {
    pub stay_pricing: StayPricing,
    pub move_in_rule: MoveInRule,
}

/// Reducer over a client-held [`BookingDraft`].
///
/// Every transition is a pure function of `(draft, action)` plus the read-only catalog,
/// the configured rules and the calendar date the request was handled on.
pub struct BookingWizard<'a> {
    catalog: &'a Catalog,
    rules: BookingRules,
    today: NaiveDate,
}

impl<'a> BookingWizard<'a> {
    pub fn new(catalog: &'a Catalog, rules: BookingRules, today: NaiveDate) -> Self {
        Self {
            catalog,
            rules,
            today,
        }
    }

    /// Initial draft for a wizard opened with `?property=&room=`. Unknown keys, or a room
    /// outside the chosen property, fall back to no pre-selection.
    pub fn seed(&self, query: &PageQuery) -> BookingDraft {
        let mut draft = BookingDraft::default();

        let Some(property) = query
            .property
            .as_deref()
            .and_then(|key| self.catalog.get_property(key))
        else {
            return draft;
        };
        draft.selected_property_id = Some(property.id.clone());

        if let Some(room) = query.room.as_deref().and_then(|id| property.room(id)) {
            draft.selected_room_id = Some(room.id.clone());
        }

        draft
    }

    /// Brings a draft received from a client back to a state the reducer could have
    /// produced. An out-of-range duration is dropped. The current step falls back to the
    /// first incomplete step before it, and a reservation only stands when every step
    /// before Reserve is complete.
    pub fn normalize(&self, mut draft: BookingDraft) -> BookingDraft {
        if !draft.duration_months.is_some_and(is_valid_duration) {
            draft.duration_months = None;
        }

        if let Some(incomplete) = WizardStep::ALL
            .iter()
            .copied()
            .take_while(|step| *step < draft.current_step)
            .find(|step| !self.step_complete(&draft, *step))
        {
            draft.current_step = incomplete;
        }

        if draft.reserved && draft.current_step != WizardStep::Reserve {
            draft.reserved = false;
        }

        draft
    }

    pub fn apply(&self, mut draft: BookingDraft, action: WizardAction) -> BookingDraft {
        if draft.reserved {
            return draft;
        }

        match action {
            WizardAction::SelectProperty { property_id } => {
                if let Some(property) = self.catalog.get_property(&property_id) {
                    if draft.selected_property_id.as_deref() != Some(property.id.as_str()) {
                        draft.selected_property_id = Some(property.id.clone());
                        draft.selected_room_id = None;
                    }
                }
            }
            WizardAction::SelectRoom { room_id } => {
                let owned = draft
                    .selected_property_id
                    .as_deref()
                    .and_then(|property_id| self.catalog.find_room(property_id, &room_id))
                    .is_some();
                if owned {
                    draft.selected_room_id = Some(room_id);
                }
            }
            WizardAction::SetMoveInDate { date } => {
                if self.rules.move_in_rule.allows(date, self.today) {
                    draft.move_in_date = Some(date);
                }
            }
            WizardAction::ChooseDuration { months } => {
                if is_valid_duration(months) {
                    draft.duration_months = Some(months);
                    draft.custom_duration = months.to_string();
                }
            }
            WizardAction::EnterCustomDuration { input } => {
                let digits = digits_only(&input, usize::MAX);
                draft.duration_months = digits
                    .parse::<u32>()
                    .ok()
                    .filter(|months| is_valid_duration(*months));
                draft.custom_duration = digits;
            }
            WizardAction::StepDuration { delta } => {
                let current = draft.custom_duration.parse::<i64>().unwrap_or(0);
                let next = (current + i64::from(delta))
                    .clamp(i64::from(MIN_DURATION_MONTHS), i64::from(MAX_DURATION_MONTHS));
                let months = u32::try_from(next).unwrap_or(MIN_DURATION_MONTHS);
                draft.duration_months = Some(months);
                draft.custom_duration = months.to_string();
            }
            WizardAction::SetPaymentFrequency { frequency } => {
                draft.payment_frequency = frequency;
            }
            WizardAction::UpdateApplicant { field, value } => {
                let applicant = &mut draft.applicant;
                match field {
                    ApplicantField::FirstName => applicant.first_name = value,
                    ApplicantField::LastName => applicant.last_name = value,
                    ApplicantField::Email => applicant.email = value,
                    ApplicantField::Phone => applicant.phone = value,
                    ApplicantField::About => applicant.about = value,
                }
            }
            WizardAction::SetStudent { is_student } => draft.applicant.is_student = is_student,
            WizardAction::SetPayMethod { method } => draft.payment.method = method,
            WizardAction::EnterCardNumber { input } => {
                draft.payment.card_number = format_card_number(&input);
            }
            WizardAction::EnterExpiry { input } => draft.payment.expiry = format_expiry(&input),
            WizardAction::EnterCvc { input } => draft.payment.cvc = format_cvc(&input),
            WizardAction::SetCountry { country } => draft.payment.country = country,
            WizardAction::GoToStep { step } => self.go_to_step(&mut draft, step),
            WizardAction::Next => {
                if let Some(next) = draft.current_step.next() {
                    self.go_to_step(&mut draft, next);
                }
            }
            WizardAction::Back => {
                if let Some(previous) = draft.current_step.previous() {
                    self.go_to_step(&mut draft, previous);
                }
            }
            WizardAction::Reserve => {
                if draft.current_step == WizardStep::Reserve
                    && self.steps_complete(&draft, WizardStep::SelectRoom, WizardStep::Reserve)
                {
                    draft.reserved = true;
                }
            }
        }

        draft
    }

    /// Whether the user may continue from `step` to the one after it.
    pub fn can_advance(&self, draft: &BookingDraft, step: WizardStep) -> bool {
        step.next().is_some() && self.step_complete(draft, step)
    }

    /// Moves to `target`. Earlier steps are always reachable and keep later data; a
    /// forward jump requires every step it passes over to be complete.
    pub fn go_to_step(&self, draft: &mut BookingDraft, target: WizardStep) {
        if target <= draft.current_step
            || self.steps_complete(draft, draft.current_step, target)
        {
            draft.current_step = target;
        }
    }

    pub fn summary(&self, draft: &BookingDraft, locale: Locale) -> BookingSummary {
        let selection = match (&draft.selected_property_id, &draft.selected_room_id) {
            (Some(property_id), Some(room_id)) => self.catalog.find_room(property_id, room_id),
            _ => None,
        };
        let property = selection.map(|(property, _)| property).or_else(|| {
            draft
                .selected_property_id
                .as_deref()
                .and_then(|id| self.catalog.get_property(id))
        });
        let localized = property.map(|p| LocalizationService::localize_property(self.catalog, p, locale));

        let room_name = selection.and_then(|(_, room)| {
            localized
                .as_ref()
                .and_then(|p| p.room(&room.id))
                .map(|r| r.name.clone())
        });
        let weekly = selection.map(|(_, room)| room.price).unwrap_or(0);
        let months = draft
            .duration_months
            .filter(|m| is_valid_duration(*m))
            .unwrap_or(0);
        let quote = PricingService::quote(weekly, months, self.rules.stay_pricing);
        let move_out_date = self.move_out_date(draft);

        BookingSummary {
            property_name: localized.as_ref().map(|p| p.name.clone()),
            property_area: localized.as_ref().map(|p| p.area.clone()),
            room_name,
            weekly_price: quote.weekly,
            biweekly_price: quote.biweekly,
            monthly_price: quote.monthly,
            frequency_amount: PricingService::amount_for_frequency(weekly, draft.payment_frequency),
            weeks: quote.weeks,
            total_rent: quote.total_rent,
            monthly_equivalent: quote.monthly_equivalent,
            deposit: quote.deposit,
            service_fee: quote.service_fee,
            total_with_fee: quote.total_rent.saturating_add(quote.service_fee),
            move_in_date: draft.move_in_date,
            move_out_date,
            move_in_display: draft.move_in_date.map(|d| locale.format_long_date(d)),
            move_out_display: move_out_date.map(|d| locale.format_long_date(d)),
        }
    }

    /// Calendar-month arithmetic; a day past the end of the target month clamps to its last day.
    pub fn move_out_date(&self, draft: &BookingDraft) -> Option<NaiveDate> {
        let move_in = draft.move_in_date?;
        let months = draft.duration_months.filter(|m| is_valid_duration(*m))?;
        move_in.checked_add_months(Months::new(months))
    }

    fn step_complete(&self, draft: &BookingDraft, step: WizardStep) -> bool {
        match step {
            WizardStep::SelectRoom => match (&draft.selected_property_id, &draft.selected_room_id) {
                (Some(property_id), Some(room_id)) => {
                    self.catalog.find_room(property_id, room_id).is_some()
                }
                _ => false,
            },
            WizardStep::Dates => {
                let date_ok = draft
                    .move_in_date
                    .is_some_and(|date| self.rules.move_in_rule.allows(date, self.today));
                date_ok && draft.duration_months.is_some_and(is_valid_duration)
            }
            WizardStep::Details => draft.applicant.is_complete(),
            WizardStep::Review | WizardStep::Reserve => true,
        }
    }

    /// Every step in `[from, to)` is complete.
    fn steps_complete(&self, draft: &BookingDraft, from: WizardStep, to: WizardStep) -> bool {
        WizardStep::ALL
            .iter()
            .filter(|step| **step >= from && **step < to)
            .all(|step| self.step_complete(draft, *step))
    }
}

fn is_valid_duration(months: u32) -> bool {
    (MIN_DURATION_MONTHS..=MAX_DURATION_MONTHS).contains(&months)
}

fn digits_only(input: &str, max: usize) -> String {
    input.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// `4242424242424242` -> `4242 4242 4242 4242`.
pub fn format_card_number(input: &str) -> String {
    let digits = digits_only(input, CARD_DIGITS);
    digits
        .as_bytes()
        .chunks(4)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `0427` -> `04 / 27`. Two digits already render the separator.
pub fn format_expiry(input: &str) -> String {
    let digits = digits_only(input, EXPIRY_DIGITS);
    if digits.len() >= 2 {
        format!("{} / {}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

pub fn format_cvc(input: &str) -> String {
    digits_only(input, CVC_DIGITS)
}
