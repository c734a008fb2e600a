use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Warning triangle opening the disclaimer line.
pub const WARNING_GLYPH: &str = "\u{26A0}\u{FE0F}";

/// Flexed biceps appearing in the closing encouragement line.
pub const EMPOWERMENT_GLYPH: &str = "\u{1F4AA}";

/// The report layouts the generator can be instructed to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReportTemplate {
    /// Seven sections including diet and home remedies.
    #[default]
    Comprehensive,
    /// Five sections with medication considerations instead of
    /// recommendations.
    Concise,
}

/// One titled section of a report template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSection {
    pub glyph: &'static str,
    pub title: &'static str,
    pub guidance: &'static str,
}

const PATIENT_SUMMARY: ReportSection = ReportSection {
    glyph: "\u{1F9FE}",
    title: "Patient Summary",
    guidance: "A brief profile of the patient.",
};

const DOCUMENT_ANALYSIS: ReportSection = ReportSection {
    glyph: "\u{1F5BC}\u{FE0F}",
    title: "Document Analysis",
    guidance: "If documents were uploaded, provide a summary of your findings from them.",
};

const SYMPTOM_ANALYSIS: ReportSection = ReportSection {
    glyph: "\u{1F50D}",
    title: "Symptom Analysis & Possible Diagnoses",
    guidance: "Suggest 2-3 possible conditions with clear reasoning based on the symptoms and document analysis.",
};

const MEDICINE_RECOMMENDATIONS: ReportSection = ReportSection {
    glyph: "\u{1F48A}",
    title: "Medicine Recommendations",
    guidance: "Provide commonly used, over-the-counter medicines for the possible conditions. Mention general dosage format (e.g., \"500mg tablet, once or twice a day\").",
};

const DIET_LIFESTYLE: ReportSection = ReportSection {
    glyph: "\u{1F957}",
    title: "Diet & Lifestyle Guidance",
    guidance: "Offer actionable advice on nutrition, exercise, hydration, and sleep.",
};

const HOME_REMEDIES: ReportSection = ReportSection {
    glyph: "\u{1F3E1}",
    title: "Home Remedies / First Aid",
    guidance: "Suggest simple and safe home remedies if applicable.",
};

const MEDICATION_CONSIDERATIONS: ReportSection = ReportSection {
    glyph: "\u{1F52C}",
    title: "Medication Considerations",
    guidance: "Review the current medications and allergies against the possible conditions and note interactions or cautions. Do not prescribe.",
};

const URGENCY_ALERT: ReportSection = ReportSection {
    glyph: "\u{1F6A8}",
    title: "Urgency Alert",
    guidance: "Clearly state if the symptoms warrant immediate medical attention from a doctor or hospital. Use clear, direct language like \"High Urgency: See a doctor within 24 hours\" or \"Low Urgency: Monitor symptoms at home.\"",
};

const COMPREHENSIVE_SECTIONS: &[ReportSection] = &[
    PATIENT_SUMMARY,
    DOCUMENT_ANALYSIS,
    SYMPTOM_ANALYSIS,
    MEDICINE_RECOMMENDATIONS,
    DIET_LIFESTYLE,
    HOME_REMEDIES,
    URGENCY_ALERT,
];

const CONCISE_SECTIONS: &[ReportSection] = &[
    PATIENT_SUMMARY,
    DOCUMENT_ANALYSIS,
    SYMPTOM_ANALYSIS,
    MEDICATION_CONSIDERATIONS,
    ReportSection {
        title: "Urgency Assessment",
        ..URGENCY_ALERT
    },
];

impl ReportTemplate {
    pub const ALL: [ReportTemplate; 2] = [ReportTemplate::Comprehensive, ReportTemplate::Concise];

    pub fn sections(&self) -> &'static [ReportSection] {
        match self {
            ReportTemplate::Comprehensive => COMPREHENSIVE_SECTIONS,
            ReportTemplate::Concise => CONCISE_SECTIONS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportTemplate::Comprehensive => "comprehensive",
            ReportTemplate::Concise => "concise",
        }
    }
}

impl fmt::Display for ReportTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportTemplate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "comprehensive" => Ok(ReportTemplate::Comprehensive),
            "concise" => Ok(ReportTemplate::Concise),
            other => Err(format!("unknown report template: {other}")),
        }
    }
}
