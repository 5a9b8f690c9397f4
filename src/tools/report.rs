//! Maintenance calorie report
//!
//! Runs the BMR then TDEE calculation for one request and renders the result
//! either as the plain-text walkthrough or as a serializable response.

use std::io::{self, Write};

use serde::Serialize;

use crate::energy::{
    calculate_bmr, calculate_tdee, tdee, ActivityLevel, EnergyError, EnergyResult,
};
use crate::models::{BiometricProfile, Gender};

/// Title printed above the text report
pub const REPORT_HEADER: &str = "--- Maintenance Calorie Calculator (Mifflin-St Jeor) ---";

/// Raw, unvalidated inputs for one report
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: String,
    pub activity_level: String,
    /// Reject implausible weight/height/age before computing
    pub strict: bool,
}

impl ReportRequest {
    /// The built-in demonstration profile
    pub fn demo() -> Self {
        Self {
            weight_kg: 53.0,
            height_cm: 165.0,
            age: 20,
            gender: "male".to_string(),
            activity_level: "lightly_active".to_string(),
            strict: false,
        }
    }
}

/// Response for a successful calculation
#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceReport {
    pub profile: BiometricProfile,
    pub activity_level: ActivityLevel,
    pub activity_factor: f64,
    pub bmr: f64,
    pub bmr_rounded: f64,
    pub tdee: f64,
    /// TDEE rounded up to a whole calorie
    pub maintenance_calories: f64,
}

/// Response for a rejected request
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&EnergyError> for ErrorResponse {
    fn from(err: &EnergyError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

// ============================================================================
// Calculation
// ============================================================================

fn compute_bmr(request: &ReportRequest) -> EnergyResult<f64> {
    if request.strict {
        let gender: Gender = request.gender.parse()?;
        BiometricProfile::new(request.weight_kg, request.height_cm, request.age, gender)
            .validate()?;
    }
    calculate_bmr(
        request.weight_kg,
        request.height_cm,
        request.age,
        &request.gender,
    )
}

/// Compute the full report, stopping at the first invalid input
pub fn maintenance_report(request: &ReportRequest) -> EnergyResult<MaintenanceReport> {
    let gender: Gender = request.gender.parse()?;
    let profile = BiometricProfile::new(request.weight_kg, request.height_cm, request.age, gender);
    if request.strict {
        profile.validate()?;
    }
    let activity_level: ActivityLevel = request.activity_level.parse()?;

    let bmr = profile.bmr();
    let tdee = tdee(bmr, activity_level);

    Ok(MaintenanceReport {
        profile,
        activity_level,
        activity_factor: activity_level.factor(),
        bmr,
        bmr_rounded: round_to(bmr, 2),
        tdee,
        maintenance_calories: tdee.ceil(),
    })
}

// ============================================================================
// Text Rendering
// ============================================================================

/// Round to a fixed number of decimal places, exact halves to the even digit
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round_ties_even() / scale
}

/// Shortest decimal form, keeping one decimal on whole values ("1460.0")
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// First character uppercased, the rest lowercased
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Summary of the raw inputs, e.g. "Inputs: Male, 20 years, 165 cm, 53 kg, Lightly active"
pub fn format_inputs(request: &ReportRequest) -> String {
    format!(
        "Inputs: {}, {} years, {} cm, {} kg, {}",
        capitalize(&request.gender),
        request.age,
        request.height_cm,
        request.weight_kg,
        capitalize(&request.activity_level.replace('_', " "))
    )
}

pub fn format_bmr_line(bmr: f64) -> String {
    format!("1. Basal Metabolic Rate (BMR): {} kcal/day", format_decimal(round_to(bmr, 2)))
}

pub fn format_tdee_line(tdee: f64) -> String {
    format!("2. Maintenance Calories (TDEE): {:.0} kcal/day", tdee.ceil())
}

/// Write the step-by-step text report
///
/// BMR is written before TDEE is attempted, so a bad activity level still
/// shows the BMR line. Returns the error that stopped the report, if any.
pub fn write_text_report<W: Write>(
    out: &mut W,
    request: &ReportRequest,
) -> io::Result<Option<EnergyError>> {
    writeln!(out, "{}", REPORT_HEADER)?;
    writeln!(out, "{}", format_inputs(request))?;

    let bmr = match compute_bmr(request) {
        Ok(bmr) => bmr,
        Err(e) => return write_error(out, e),
    };
    writeln!(out, "\n{}", format_bmr_line(bmr))?;

    let tdee = match calculate_tdee(bmr, &request.activity_level) {
        Ok(tdee) => tdee,
        Err(e) => return write_error(out, e),
    };
    writeln!(out, "{}", format_tdee_line(tdee))?;

    Ok(None)
}

fn write_error<W: Write>(out: &mut W, err: EnergyError) -> io::Result<Option<EnergyError>> {
    writeln!(out, "\nError: {}", err)?;
    Ok(Some(err))
}
