use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::locale::Locale;

/// Wizard steps in their fixed order. Serialized as the zero-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum WizardStep {
    #[default]
    SelectRoom,
    Dates,
    Details,
    Review,
    Reserve,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::SelectRoom,
        WizardStep::Dates,
        WizardStep::Details,
        WizardStep::Review,
        WizardStep::Reserve,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, WizardStep::SelectRoom) => "Select Room",
            (Locale::En, WizardStep::Dates) => "Pick Dates",
            (Locale::En, WizardStep::Details) => "Your Details",
            (Locale::En, WizardStep::Review) => "Review",
            (Locale::En, WizardStep::Reserve) => "Confirm",
            (Locale::Fr, WizardStep::SelectRoom) => "Choisir une chambre",
            (Locale::Fr, WizardStep::Dates) => "Choisir les dates",
            (Locale::Fr, WizardStep::Details) => "Vos informations",
            (Locale::Fr, WizardStep::Review) => "Révision",
            (Locale::Fr, WizardStep::Reserve) => "Confirmer",
        }
    }
}

impl From<WizardStep> for usize {
    fn from(step: WizardStep) -> Self {
        step.index()
    }
}

impl TryFrom<usize> for WizardStep {
    type Error = String;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or_else(|| format!("step {} is out of range", index))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentFrequency {
    #[default]
    Biweekly,
    Monthly,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicantFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub about: String,
    pub is_student: bool,
}

impl ApplicantFields {
    /// Presence check only; email and phone formats are not validated here.
    pub fn is_complete(&self) -> bool {
        [&self.first_name, &self.last_name, &self.email, &self.phone]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApplicantField {
    FirstName,
    LastName,
    Email,
    Phone,
    About,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayMethod {
    #[default]
    Card,
    Bank,
}

/// Card-like fields collected on the reserve step. Display-formatted, never transmitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentDetails {
    pub method: PayMethod,
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
    pub country: String,
}

impl Default for PaymentDetails {
    fn default() -> Self {
        Self {
            method: PayMethod::Card,
            card_number: String::new(),
            expiry: String::new(),
            cvc: String::new(),
            country: "Canada".to_string(),
        }
    }
}

/// Client-held booking wizard state. Round-trips through the transition endpoint unchanged
/// apart from the applied action; nothing here is stored server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingDraft {
    pub selected_property_id: Option<String>,
    pub selected_room_id: Option<String>,
    pub move_in_date: Option<NaiveDate>,
    pub duration_months: Option<u32>,
    /// Raw text of the custom duration box, digits only.
    pub custom_duration: String,
    pub payment_frequency: PaymentFrequency,
    pub applicant: ApplicantFields,
    pub payment: PaymentDetails,
    pub current_step: WizardStep,
    pub reserved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum WizardAction {
    SelectProperty { property_id: String },
    SelectRoom { room_id: String },
    SetMoveInDate { date: NaiveDate },
    ChooseDuration { months: u32 },
    EnterCustomDuration { input: String },
    StepDuration { delta: i32 },
    SetPaymentFrequency { frequency: PaymentFrequency },
    UpdateApplicant { field: ApplicantField, value: String },
    SetStudent { is_student: bool },
    SetPayMethod { method: PayMethod },
    EnterCardNumber { input: String },
    EnterExpiry { input: String },
    EnterCvc { input: String },
    SetCountry { country: String },
    GoToStep { step: WizardStep },
    Next,
    Back,
    Reserve,
}

/// Values derived from a draft for the sidebar and review step.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub property_name: Option<String>,
    pub property_area: Option<String>,
    pub room_name: Option<String>,
    pub weekly_price: u32,
    pub biweekly_price: u32,
    pub monthly_price: u32,
    /// Amount charged per period for the chosen payment frequency.
    pub frequency_amount: u32,
    pub weeks: u32,
    pub total_rent: u32,
    pub monthly_equivalent: u32,
    pub deposit: u32,
    pub service_fee: u32,
    pub total_with_fee: u32,
    pub move_in_date: Option<NaiveDate>,
    pub move_out_date: Option<NaiveDate>,
    pub move_in_display: Option<String>,
    pub move_out_display: Option<String>,
}
